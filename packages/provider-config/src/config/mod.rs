//! Transport provider configuration
//!
//! [`ProviderConfig`] carries two kinds of settings to the transport provider:
//!
//! - `types`: the struct itself and its fixed, strongly-typed fields
//! - `defaults`: documented default values for every typed field
//! - `accessors`: getters and setters for the typed fields
//! - `builders`: by-value fluent `with_*` methods for the configure phase
//! - `properties`: the dynamic property operations exposed on the config
//! - `settings`: a serializable snapshot of the scalar fields
//! - `loader`: building a config from a JSON document
//!
//! Typed setters take `&mut self` while property operations take `&self`.
//! Once the config is shared behind an `Arc` only the property store can
//! still change.

pub mod accessors;
pub mod builders;
pub mod defaults;
pub mod loader;
pub mod properties;
pub mod settings;
pub mod types;

pub use settings::TransportSettings;
pub use types::ProviderConfig;
