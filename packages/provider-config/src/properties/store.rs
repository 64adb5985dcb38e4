//! Concurrent name/value store backing the dynamic provider properties
//!
//! Every operation is a single point operation on a sharded map, so readers
//! and writers on different threads never need an outer lock. Nothing is
//! atomic across two calls: a `remove` racing a `get` observes either the old
//! or the new state.

use std::any::Any;

use dashmap::DashMap;
use tracing::{debug, trace};

use super::value::PropertyValue;
use crate::error::{Error, Result};

/// Thread-safe map from property name to type-erased value
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    entries: DashMap<String, PropertyValue>,
}

impl PropertyStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert or overwrite a property, returning the value it replaced
    pub fn insert<K, V>(&self, name: K, value: V) -> Option<PropertyValue>
    where
        K: Into<String>,
        V: Any + Send + Sync,
    {
        self.insert_value(name, PropertyValue::new(value))
    }

    /// Insert an already-wrapped value
    pub fn insert_value<K: Into<String>>(
        &self,
        name: K,
        value: PropertyValue,
    ) -> Option<PropertyValue> {
        let name = name.into();
        let type_name = value.type_name();
        let previous = self.entries.insert(name.clone(), value);
        match &previous {
            Some(old) => debug!(
                "Overwrote provider property {} ({} -> {})",
                name,
                old.type_name(),
                type_name
            ),
            None => debug!("Added provider property {} ({})", name, type_name),
        }
        previous
    }

    /// Current value for `name`, if any
    #[must_use]
    pub fn get(&self, name: &str) -> Option<PropertyValue> {
        self.entries.get(name).map(|entry| entry.value().clone())
    }

    /// Stored value when its runtime type is exactly `T`, otherwise `default`
    pub fn get_or<T>(&self, name: &str, default: T) -> T
    where
        T: Any + Clone,
    {
        let Some(entry) = self.entries.get(name) else {
            return default;
        };

        match entry.value().downcast_ref::<T>() {
            Some(value) => value.clone(),
            None => {
                trace!(
                    "Provider property {} is a {}, not a {}; using default",
                    name,
                    entry.value().type_name(),
                    std::any::type_name::<T>()
                );
                default
            }
        }
    }

    /// Strict lookup reporting why a typed value could not be produced
    ///
    /// # Errors
    ///
    /// - `PropertyMissing` if nothing is stored under `name`
    /// - `PropertyTypeMismatch` if the stored value is not a `T`
    pub fn try_get<T>(&self, name: &str) -> Result<T>
    where
        T: Any + Clone,
    {
        let entry = self.entries.get(name).ok_or_else(|| Error::PropertyMissing {
            name: name.to_string(),
        })?;

        entry
            .value()
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::PropertyTypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
                found: entry.value().type_name(),
            })
    }

    /// Delete `name`, returning what was stored there
    pub fn remove(&self, name: &str) -> Option<PropertyValue> {
        let removed = self.entries.remove(name).map(|(_, value)| value);
        if removed.is_some() {
            debug!("Removed provider property {}", name);
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Point-in-time copy of every entry; order is unspecified
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, PropertyValue)> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Point-in-time copy keyed by name
    #[must_use]
    pub fn to_map(&self) -> hashbrown::HashMap<String, PropertyValue> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
