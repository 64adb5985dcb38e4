//! Dynamic property operations on the provider config
//!
//! All of these take `&self`, so they stay usable after [`ProviderConfig::into_shared`]
//! and from any number of threads at once.

use std::any::Any;

use super::types::ProviderConfig;
use crate::error::Result;
use crate::properties::{PropertyStore, PropertyValue};

impl ProviderConfig {
    /// Add or overwrite a property; returns `self` so calls can be chained
    ///
    /// # Examples
    /// ```
    /// use quyc_provider_config::ProviderConfig;
    /// use quyc_provider_config::properties::keys;
    ///
    /// let config = ProviderConfig::new();
    /// config
    ///     .add_property(keys::REUSE_ADDRESS, true)
    ///     .add_property(keys::USE_DIRECT_BYTEBUFFER, false);
    /// assert!(config.property_or(keys::REUSE_ADDRESS, false));
    /// ```
    pub fn add_property<K, V>(&self, name: K, value: V) -> &Self
    where
        K: Into<String>,
        V: Any + Send + Sync,
    {
        self.properties.insert(name, value);
        self
    }

    /// Add a value that is already wrapped, e.g. one read from another config
    pub fn add_property_value<K: Into<String>>(&self, name: K, value: PropertyValue) -> &Self {
        self.properties.insert_value(name, value);
        self
    }

    /// Current value of `name`, or `None` if it was never added or was removed
    #[must_use]
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name)
    }

    /// Value of `name` if it is a `T`; `default` when absent or of another type
    #[must_use]
    pub fn property_or<T>(&self, name: &str, default: T) -> T
    where
        T: Any + Clone,
    {
        self.properties.get_or(name, default)
    }

    /// Strict form of [`property_or`](Self::property_or)
    ///
    /// # Errors
    ///
    /// Returns `PropertyMissing` or `PropertyTypeMismatch`.
    pub fn try_property<T>(&self, name: &str) -> Result<T>
    where
        T: Any + Clone,
    {
        self.properties.try_get(name)
    }

    /// Remove `name`, returning the value it held
    pub fn remove_property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }

    #[must_use]
    pub fn contains_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }

    /// Snapshot of all current entries, in no particular order
    #[must_use]
    pub fn properties_set(&self) -> Vec<(String, PropertyValue)> {
        self.properties.snapshot()
    }

    #[must_use]
    pub fn property_names(&self) -> Vec<String> {
        self.properties.names()
    }

    #[must_use]
    pub fn properties_len(&self) -> usize {
        self.properties.len()
    }

    pub fn clear_properties(&self) {
        self.properties.clear();
    }

    /// The underlying store
    #[must_use]
    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }
}
