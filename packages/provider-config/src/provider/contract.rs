//! Generic provider config contract
//!
//! Lets client builders carry a provider config without knowing which
//! provider it belongs to. Method names follow the add/get/remove/set
//! operations on [`ProviderConfig`]; the inherent methods take precedence
//! on a concrete config, so this trait is mostly used as `dyn`.

use crate::config::ProviderConfig;
use crate::properties::PropertyValue;

/// Property-carrying configuration accepted by an HTTP transport provider
pub trait AsyncHttpProviderConfig: Send + Sync {
    /// Add or overwrite a property
    fn add_property_value(&self, name: String, value: PropertyValue);

    fn property(&self, name: &str) -> Option<PropertyValue>;

    /// Remove `name`, returning the value it held
    fn remove_property(&self, name: &str) -> Option<PropertyValue>;

    /// Snapshot of the current entries, in no particular order
    fn properties_set(&self) -> Vec<(String, PropertyValue)>;
}

impl AsyncHttpProviderConfig for ProviderConfig {
    fn add_property_value(&self, name: String, value: PropertyValue) {
        self.properties.insert_value(name, value);
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name)
    }

    fn remove_property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }

    fn properties_set(&self) -> Vec<(String, PropertyValue)> {
        self.properties.snapshot()
    }
}
