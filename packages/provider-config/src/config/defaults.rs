//! Default values for the typed transport settings

use super::types::ProviderConfig;
use crate::properties::PropertyStore;

pub const USE_DEAD_LOCK_CHECKER: bool = false;
pub const HTTP_CLIENT_CODEC_MAX_INITIAL_LINE_LENGTH: i32 = 4096;
pub const HTTP_CLIENT_CODEC_MAX_HEADER_SIZE: i32 = 8192;
pub const HTTP_CLIENT_CODEC_MAX_CHUNK_SIZE: i32 = 8192;
pub const DISABLE_ZERO_COPY: bool = false;
pub const HANDSHAKE_TIMEOUT_IN_MILLIS: i64 = 10_000;
pub const CHUNKED_FILE_CHUNK_SIZE: i32 = 8192;

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            properties: PropertyStore::new(),
            use_dead_lock_checker: USE_DEAD_LOCK_CHECKER,
            boss_executor_service: None,
            http_client_codec_max_initial_line_length: HTTP_CLIENT_CODEC_MAX_INITIAL_LINE_LENGTH,
            http_client_codec_max_header_size: HTTP_CLIENT_CODEC_MAX_HEADER_SIZE,
            http_client_codec_max_chunk_size: HTTP_CLIENT_CODEC_MAX_CHUNK_SIZE,
            socket_channel_factory: None,
            disable_zero_copy: DISABLE_ZERO_COPY,
            timer: None,
            handshake_timeout_in_millis: HANDSHAKE_TIMEOUT_IN_MILLIS,
            channel_pool: None,
            chunked_file_chunk_size: CHUNKED_FILE_CHUNK_SIZE,
        }
    }
}
