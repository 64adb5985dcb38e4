//! Provider initialization from a config

use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::Result;

/// A transport provider that reads its tuning from a [`ProviderConfig`]
///
/// Implementations read each typed field once while constructing
/// themselves, clone the `Arc` handles they need, and probe extension keys
/// with [`ProviderConfig::property_or`]. Unset handles mean "use your own".
pub trait TransportProvider: Sized {
    /// # Errors
    ///
    /// Implementations return `Error::Provider` when they reject the config.
    fn from_config(config: &ProviderConfig) -> Result<Self>;

    /// Build from a config that has already been handed off
    ///
    /// # Errors
    ///
    /// Same as [`from_config`](Self::from_config).
    fn from_shared(config: &Arc<ProviderConfig>) -> Result<Self> {
        Self::from_config(config)
    }
}
