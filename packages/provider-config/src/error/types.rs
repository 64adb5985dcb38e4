//! Error types for the strict property accessors and the configuration loader
//!
//! The soft lookup path (`property_or`) never produces these; it falls back to
//! the caller's default instead.

/// A Result alias where the Err case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by strict property access, configuration loading and
/// provider initialization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No property is stored under the requested name
    #[error("property `{name}` is not set")]
    PropertyMissing { name: String },

    /// A property exists but holds a value of a different runtime type
    #[error("property `{name}` holds a `{found}`, expected `{expected}`")]
    PropertyTypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The configuration document could not be parsed
    #[error("invalid provider configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// A provider refused the configuration it was given
    #[error("provider initialization failed: {0}")]
    Provider(String),
}

impl Error {
    /// Name of the property involved, if this is a property error
    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Error::PropertyMissing { name } | Error::PropertyTypeMismatch { name, .. } => {
                Some(name)
            }
            Error::Json(_) | Error::Provider(_) => None,
        }
    }

    /// Returns true when the error only means "nothing stored under that name"
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Error::PropertyMissing { .. })
    }

    pub fn provider<S: Into<String>>(message: S) -> Self {
        Error::Provider(message.into())
    }
}
