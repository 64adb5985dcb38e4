//! Well-known extension property names
//!
//! Settings the transport provider historically accepted only as dynamic
//! properties. Values are plain `bool`/`i32` unless noted otherwise; the
//! provider reads them with `property_or`, so a missing or wrongly typed
//! entry silently falls back to the provider default.

/// `bool`: use blocking (OIO) sockets instead of non-blocking ones
pub const USE_BLOCKING_IO: &str = "useBlockingIO";

/// `bool`: allocate direct buffers for socket reads
pub const USE_DIRECT_BYTEBUFFER: &str = "useDirectByteBuffer";

/// `bool`: run connect asynchronously instead of on the calling task
pub const EXECUTE_ASYNC_CONNECT: &str = "asyncConnect";

/// `bool`: refuse to start a request from inside a response callback
pub const DISABLE_NESTED_REQUEST: &str = "disableNestedRequest";

/// `bool`: set `SO_REUSEADDR` on client sockets
pub const REUSE_ADDRESS: &str = "reuseAddress";

/// `Arc<dyn BossExecutor>`: alternative to the typed boss executor field
pub const BOSS_EXECUTOR_SERVICE: &str = "bossExecutorService";

/// `i32`: overrides the initial-line length codec limit
pub const HTTP_CLIENT_CODEC_MAX_INITIAL_LINE_LENGTH: &str = "httpClientCodecMaxInitialLineLength";

/// `i32`: overrides the header block codec limit
pub const HTTP_CLIENT_CODEC_MAX_HEADER_SIZE: &str = "httpClientCodecMaxHeaderSize";

/// `i32`: overrides the chunk size codec limit
pub const HTTP_CLIENT_CODEC_MAX_CHUNK_SIZE: &str = "httpClientCodecMaxChunkSize";

/// Every key in this module, for diagnostics and documentation tooling
pub const ALL: &[&str] = &[
    USE_BLOCKING_IO,
    USE_DIRECT_BYTEBUFFER,
    EXECUTE_ASYNC_CONNECT,
    DISABLE_NESTED_REQUEST,
    REUSE_ADDRESS,
    BOSS_EXECUTOR_SERVICE,
    HTTP_CLIENT_CODEC_MAX_INITIAL_LINE_LENGTH,
    HTTP_CLIENT_CODEC_MAX_HEADER_SIZE,
    HTTP_CLIENT_CODEC_MAX_CHUNK_SIZE,
];

/// Keys whose values are read as `i32`
pub const I32_KEYS: &[&str] = &[
    HTTP_CLIENT_CODEC_MAX_INITIAL_LINE_LENGTH,
    HTTP_CLIENT_CODEC_MAX_HEADER_SIZE,
    HTTP_CLIENT_CODEC_MAX_CHUNK_SIZE,
];

/// True when the provider reads `name` as an `i32`
#[must_use]
pub fn is_i32_key(name: &str) -> bool {
    I32_KEYS.contains(&name)
}

/// True when `name` is one of the keys above
#[must_use]
pub fn is_well_known(name: &str) -> bool {
    ALL.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_recognized() {
        let mut sorted = ALL.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ALL.len());

        assert!(is_well_known(REUSE_ADDRESS));
        assert!(!is_well_known("reuse_address"));

        assert!(I32_KEYS.iter().all(|key| is_well_known(key)));
        assert!(is_i32_key(HTTP_CLIENT_CODEC_MAX_HEADER_SIZE));
        assert!(!is_i32_key(REUSE_ADDRESS));
    }
}
