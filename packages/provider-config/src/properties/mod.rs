//! Dynamic property store
//!
//! Open-ended name/value extension point for provider-specific settings that
//! the typed fields of [`ProviderConfig`](crate::config::ProviderConfig) do
//! not model.
//!
//! - `value`: type-erased, cheaply clonable property values
//! - `store`: the concurrent map and its typed soft-fail accessors
//! - `keys`: well-known extension keys a transport provider probes

pub mod keys;
pub mod store;
pub mod value;

pub use store::PropertyStore;
pub use value::PropertyValue;
