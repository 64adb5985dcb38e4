//! Provider-facing side of the configuration
//!
//! - `contract`: the generic property-carrying provider config trait
//! - `init`: the trait a transport provider implements to consume a config
//! - `resolve`: helpers a provider uses to read fields and extension keys together

pub mod contract;
pub mod init;
pub mod resolve;

pub use contract::AsyncHttpProviderConfig;
pub use init::TransportProvider;
pub use resolve::CodecLimits;
