//! Serializable snapshot of the scalar transport settings
//!
//! Reference-typed fields (executor, channel factory, timer, pool) are live
//! objects and are not part of the snapshot.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::types::ProviderConfig;

/// Scalar transport settings; missing keys keep their documented defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportSettings {
    pub use_dead_lock_checker: bool,
    pub http_client_codec_max_initial_line_length: i32,
    pub http_client_codec_max_header_size: i32,
    pub http_client_codec_max_chunk_size: i32,
    pub disable_zero_copy: bool,
    pub handshake_timeout_in_millis: i64,
    pub chunked_file_chunk_size: i32,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            use_dead_lock_checker: defaults::USE_DEAD_LOCK_CHECKER,
            http_client_codec_max_initial_line_length:
                defaults::HTTP_CLIENT_CODEC_MAX_INITIAL_LINE_LENGTH,
            http_client_codec_max_header_size: defaults::HTTP_CLIENT_CODEC_MAX_HEADER_SIZE,
            http_client_codec_max_chunk_size: defaults::HTTP_CLIENT_CODEC_MAX_CHUNK_SIZE,
            disable_zero_copy: defaults::DISABLE_ZERO_COPY,
            handshake_timeout_in_millis: defaults::HANDSHAKE_TIMEOUT_IN_MILLIS,
            chunked_file_chunk_size: defaults::CHUNKED_FILE_CHUNK_SIZE,
        }
    }
}

impl ProviderConfig {
    /// Current values of the scalar typed fields
    #[must_use]
    pub fn settings(&self) -> TransportSettings {
        TransportSettings {
            use_dead_lock_checker: self.use_dead_lock_checker,
            http_client_codec_max_initial_line_length: self
                .http_client_codec_max_initial_line_length,
            http_client_codec_max_header_size: self.http_client_codec_max_header_size,
            http_client_codec_max_chunk_size: self.http_client_codec_max_chunk_size,
            disable_zero_copy: self.disable_zero_copy,
            handshake_timeout_in_millis: self.handshake_timeout_in_millis,
            chunked_file_chunk_size: self.chunked_file_chunk_size,
        }
    }

    /// Overwrite every scalar typed field from `settings`
    pub fn apply_settings(&mut self, settings: &TransportSettings) {
        self.use_dead_lock_checker = settings.use_dead_lock_checker;
        self.http_client_codec_max_initial_line_length =
            settings.http_client_codec_max_initial_line_length;
        self.http_client_codec_max_header_size = settings.http_client_codec_max_header_size;
        self.http_client_codec_max_chunk_size = settings.http_client_codec_max_chunk_size;
        self.disable_zero_copy = settings.disable_zero_copy;
        self.handshake_timeout_in_millis = settings.handshake_timeout_in_millis;
        self.chunked_file_chunk_size = settings.chunked_file_chunk_size;
    }

    #[must_use]
    pub fn with_settings(mut self, settings: &TransportSettings) -> Self {
        self.apply_settings(settings);
        self
    }
}

impl From<TransportSettings> for ProviderConfig {
    fn from(settings: TransportSettings) -> Self {
        ProviderConfig::default().with_settings(&settings)
    }
}
