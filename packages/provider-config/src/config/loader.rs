//! Build a provider config from a JSON document
//!
//! ```json
//! {
//!   "settings":   { "handshakeTimeoutInMillis": 5000 },
//!   "properties": { "reuseAddress": true, "ioThreads": 4 }
//! }
//! ```
//!
//! Both sections are optional. Property values are stored as `bool`, `i64`,
//! `u64` (above `i64::MAX`), `f64` or `String`; arrays and objects are stored
//! as `serde_json::Value`. `null` properties are skipped. Integers under the
//! `i32` extension keys (the codec limits) are stored as `i32`; values outside
//! the `i32` range are skipped with a warning.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::settings::TransportSettings;
use super::types::ProviderConfig;
use crate::error::Result;
use crate::properties::{PropertyValue, keys};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderConfigDocument {
    settings: TransportSettings,
    properties: Map<String, Value>,
}

impl ProviderConfig {
    /// Parse a configuration document
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if `input` is not valid JSON or a setting has the
    /// wrong JSON type.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let document: ProviderConfigDocument = serde_json::from_str(input)?;
        Ok(Self::from_document(document))
    }

    /// Same as [`from_json_str`](Self::from_json_str) for an already parsed value
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the value does not have the document's shape.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let document: ProviderConfigDocument = serde_json::from_value(value)?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: ProviderConfigDocument) -> Self {
        let config = ProviderConfig::from(document.settings);
        for (name, value) in document.properties {
            let value = if keys::is_i32_key(&name) {
                i32_property(&name, value)
            } else {
                json_property(value)
            };
            if let Some(value) = value {
                config.properties.insert_value(name, value);
            }
        }
        debug!(
            "Loaded provider config with {} extension properties",
            config.properties.len()
        );
        config
    }
}

fn json_property(value: Value) -> Option<PropertyValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(PropertyValue::new(b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(PropertyValue::new(i))
            } else if let Some(u) = n.as_u64() {
                Some(PropertyValue::new(u))
            } else {
                n.as_f64().map(PropertyValue::new)
            }
        }
        Value::String(s) => Some(PropertyValue::new(s)),
        other @ (Value::Array(_) | Value::Object(_)) => Some(PropertyValue::new(other)),
    }
}

fn i32_property(name: &str, value: Value) -> Option<PropertyValue> {
    match value.as_i64().map(i32::try_from) {
        Some(Ok(i)) => Some(PropertyValue::new(i)),
        Some(Err(_)) => {
            warn!("Provider property {} = {} is outside the i32 range; skipped", name, value);
            None
        }
        None => json_property(value),
    }
}
