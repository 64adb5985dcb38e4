//! # quyc transport provider configuration
//!
//! Tuning knobs for the transport provider behind the quyc HTTP client:
//! codec limits, handshake timeout, zero-copy and dead-lock checker toggles,
//! and shared handles to the boss executor, socket channel factory, timer and
//! connection pool. Provider-specific settings that have no typed field go in
//! a concurrent extension property store.
//!
//! The config is a passive carrier. It validates nothing and owns none of the
//! resources it points at; the provider decides what the values mean.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use quyc_provider_config::prelude::*;
//!
//! let config = ProviderConfig::new()
//!     .with_codec_limits(8192, 16_384, 16_384)
//!     .with_handshake_timeout_in_millis(5_000)
//!     .with_property(keys::REUSE_ADDRESS, true);
//!
//! let shared: Arc<ProviderConfig> = config.into_shared();
//! assert!(shared.property_or(keys::REUSE_ADDRESS, false));
//! assert_eq!(shared.property_or(keys::USE_BLOCKING_IO, false), false);
//! assert_eq!(shared.http_client_codec_max_chunk_size(), 16_384);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handles;
pub mod properties;
pub mod provider;

pub mod prelude;

pub use config::{ProviderConfig, TransportSettings};
pub use error::{Error, Result};
pub use properties::{PropertyStore, PropertyValue};
