//! Provider configuration struct and field definitions

use std::sync::Arc;

use crate::handles::{BossExecutor, ChannelPool, SocketChannelFactory, TransportTimer};
use crate::properties::PropertyStore;

/// Configuration handed to the transport provider at construction time
///
/// Holds the well-known transport knobs as typed fields and anything else in
/// a concurrent extension property store. Nothing here is validated; the
/// provider decides what to do with out-of-range values.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub(crate) properties: PropertyStore,

    /// Enable the dead-lock checker that rejects blocking waits on I/O threads
    pub(crate) use_dead_lock_checker: bool,

    /// Executor for connection-accepting work
    pub(crate) boss_executor_service: Option<Arc<dyn BossExecutor>>,

    // HTTP client codec limits
    pub(crate) http_client_codec_max_initial_line_length: i32,
    pub(crate) http_client_codec_max_header_size: i32,
    pub(crate) http_client_codec_max_chunk_size: i32,

    pub(crate) socket_channel_factory: Option<Arc<dyn SocketChannelFactory>>,

    /// Send bodies in chunks instead of zero-copy file transfer
    pub(crate) disable_zero_copy: bool,

    pub(crate) timer: Option<Arc<dyn TransportTimer>>,

    pub(crate) handshake_timeout_in_millis: i64,

    pub(crate) channel_pool: Option<Arc<dyn ChannelPool>>,

    /// Chunk size used when a file body is sent with chunking
    pub(crate) chunked_file_chunk_size: i32,
}

impl ProviderConfig {
    /// New configuration with every typed field at its default and no properties
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the configure phase and share the config with the provider
    ///
    /// The returned handle only allows property store writes; typed fields
    /// are frozen from here on.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        tracing::debug!(
            "Handing off provider config with {} extension properties",
            self.properties.len()
        );
        Arc::new(self)
    }
}
