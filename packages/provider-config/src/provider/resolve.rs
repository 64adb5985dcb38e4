//! Read typed fields together with their extension-key overrides

use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::handles::BossExecutor;
use crate::properties::keys;

/// Limits for the HTTP client codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecLimits {
    pub max_initial_line_length: i32,
    pub max_header_size: i32,
    pub max_chunk_size: i32,
}

impl ProviderConfig {
    /// Codec limits, with `i32` extension properties taking precedence over the typed fields
    #[must_use]
    pub fn codec_limits(&self) -> CodecLimits {
        CodecLimits {
            max_initial_line_length: self.property_or(
                keys::HTTP_CLIENT_CODEC_MAX_INITIAL_LINE_LENGTH,
                self.http_client_codec_max_initial_line_length,
            ),
            max_header_size: self.property_or(
                keys::HTTP_CLIENT_CODEC_MAX_HEADER_SIZE,
                self.http_client_codec_max_header_size,
            ),
            max_chunk_size: self.property_or(
                keys::HTTP_CLIENT_CODEC_MAX_CHUNK_SIZE,
                self.http_client_codec_max_chunk_size,
            ),
        }
    }

    /// Boss executor from the typed field, else from the extension property
    #[must_use]
    pub fn resolve_boss_executor(&self) -> Option<Arc<dyn BossExecutor>> {
        self.boss_executor_service.clone().or_else(|| {
            self.property(keys::BOSS_EXECUTOR_SERVICE)
                .and_then(|value| value.downcast_ref::<Arc<dyn BossExecutor>>().cloned())
        })
    }
}
