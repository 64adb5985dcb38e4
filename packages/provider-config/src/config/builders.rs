//! Fluent builder methods for the configure phase
//!
//! Each method consumes and returns the config so a provider configuration
//! can be assembled in one expression before it is handed off.

use std::sync::Arc;

use super::types::ProviderConfig;
use crate::handles::{BossExecutor, ChannelPool, SocketChannelFactory, TransportTimer};

impl ProviderConfig {
    /// Enable or disable the dead-lock checker
    ///
    /// # Examples
    /// ```
    /// use quyc_provider_config::ProviderConfig;
    ///
    /// let config = ProviderConfig::default().with_dead_lock_checker(true);
    /// assert!(config.use_dead_lock_checker());
    /// ```
    #[must_use]
    pub fn with_dead_lock_checker(mut self, enabled: bool) -> Self {
        self.use_dead_lock_checker = enabled;
        self
    }

    /// Set the executor used for connection-accepting work
    #[must_use]
    pub fn with_boss_executor_service(mut self, executor: Arc<dyn BossExecutor>) -> Self {
        self.boss_executor_service = Some(executor);
        self
    }

    /// Set all three HTTP client codec limits at once
    ///
    /// # Examples
    /// ```
    /// use quyc_provider_config::ProviderConfig;
    ///
    /// let config = ProviderConfig::default().with_codec_limits(8192, 16_384, 16_384);
    /// assert_eq!(config.http_client_codec_max_initial_line_length(), 8192);
    /// assert_eq!(config.http_client_codec_max_header_size(), 16_384);
    /// ```
    #[must_use]
    pub fn with_codec_limits(
        mut self,
        max_initial_line_length: i32,
        max_header_size: i32,
        max_chunk_size: i32,
    ) -> Self {
        self.http_client_codec_max_initial_line_length = max_initial_line_length;
        self.http_client_codec_max_header_size = max_header_size;
        self.http_client_codec_max_chunk_size = max_chunk_size;
        self
    }

    #[must_use]
    pub fn with_http_client_codec_max_initial_line_length(mut self, length: i32) -> Self {
        self.http_client_codec_max_initial_line_length = length;
        self
    }

    #[must_use]
    pub fn with_http_client_codec_max_header_size(mut self, size: i32) -> Self {
        self.http_client_codec_max_header_size = size;
        self
    }

    #[must_use]
    pub fn with_http_client_codec_max_chunk_size(mut self, size: i32) -> Self {
        self.http_client_codec_max_chunk_size = size;
        self
    }

    #[must_use]
    pub fn with_socket_channel_factory(mut self, factory: Arc<dyn SocketChannelFactory>) -> Self {
        self.socket_channel_factory = Some(factory);
        self
    }

    /// Force chunked transfer of file bodies instead of zero-copy
    #[must_use]
    pub fn with_zero_copy_disabled(mut self, disabled: bool) -> Self {
        self.disable_zero_copy = disabled;
        self
    }

    #[must_use]
    pub fn with_timer(mut self, timer: Arc<dyn TransportTimer>) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Set the TLS handshake timeout
    ///
    /// # Examples
    /// ```
    /// use quyc_provider_config::ProviderConfig;
    ///
    /// let config = ProviderConfig::default().with_handshake_timeout_in_millis(2500);
    /// assert_eq!(config.handshake_timeout_in_millis(), 2500);
    /// ```
    #[must_use]
    pub fn with_handshake_timeout_in_millis(mut self, millis: i64) -> Self {
        self.handshake_timeout_in_millis = millis;
        self
    }

    #[must_use]
    pub fn with_channel_pool(mut self, pool: Arc<dyn ChannelPool>) -> Self {
        self.channel_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_chunked_file_chunk_size(mut self, size: i32) -> Self {
        self.chunked_file_chunk_size = size;
        self
    }

    /// Add a dynamic property while still in the configure phase
    #[must_use]
    pub fn with_property<K, V>(self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: std::any::Any + Send + Sync,
    {
        self.properties.insert(name, value);
        self
    }
}
