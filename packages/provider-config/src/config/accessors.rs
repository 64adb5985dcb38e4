//! Getters and setters for the typed transport settings
//!
//! Setters overwrite unconditionally. Sizes and timeouts are signed so that
//! whatever the caller stores, including zero and negative values, reads back
//! unchanged.

use std::sync::Arc;
use std::time::Duration;

use super::types::ProviderConfig;
use crate::handles::{BossExecutor, ChannelPool, SocketChannelFactory, TransportTimer};

impl ProviderConfig {
    #[inline]
    #[must_use]
    pub fn use_dead_lock_checker(&self) -> bool {
        self.use_dead_lock_checker
    }

    pub fn set_use_dead_lock_checker(&mut self, use_dead_lock_checker: bool) {
        self.use_dead_lock_checker = use_dead_lock_checker;
    }

    #[inline]
    #[must_use]
    pub fn boss_executor_service(&self) -> Option<&Arc<dyn BossExecutor>> {
        self.boss_executor_service.as_ref()
    }

    pub fn set_boss_executor_service(&mut self, executor: Option<Arc<dyn BossExecutor>>) {
        self.boss_executor_service = executor;
    }

    #[inline]
    #[must_use]
    pub fn http_client_codec_max_initial_line_length(&self) -> i32 {
        self.http_client_codec_max_initial_line_length
    }

    pub fn set_http_client_codec_max_initial_line_length(&mut self, length: i32) {
        self.http_client_codec_max_initial_line_length = length;
    }

    #[inline]
    #[must_use]
    pub fn http_client_codec_max_header_size(&self) -> i32 {
        self.http_client_codec_max_header_size
    }

    pub fn set_http_client_codec_max_header_size(&mut self, size: i32) {
        self.http_client_codec_max_header_size = size;
    }

    #[inline]
    #[must_use]
    pub fn http_client_codec_max_chunk_size(&self) -> i32 {
        self.http_client_codec_max_chunk_size
    }

    pub fn set_http_client_codec_max_chunk_size(&mut self, size: i32) {
        self.http_client_codec_max_chunk_size = size;
    }

    #[inline]
    #[must_use]
    pub fn socket_channel_factory(&self) -> Option<&Arc<dyn SocketChannelFactory>> {
        self.socket_channel_factory.as_ref()
    }

    pub fn set_socket_channel_factory(&mut self, factory: Option<Arc<dyn SocketChannelFactory>>) {
        self.socket_channel_factory = factory;
    }

    #[inline]
    #[must_use]
    pub fn disable_zero_copy(&self) -> bool {
        self.disable_zero_copy
    }

    pub fn set_disable_zero_copy(&mut self, disable_zero_copy: bool) {
        self.disable_zero_copy = disable_zero_copy;
    }

    /// Timer shared by the provider's connections
    #[inline]
    #[must_use]
    pub fn timer(&self) -> Option<&Arc<dyn TransportTimer>> {
        self.timer.as_ref()
    }

    pub fn set_timer(&mut self, timer: Option<Arc<dyn TransportTimer>>) {
        self.timer = timer;
    }

    /// TLS handshake timeout as configured, in milliseconds
    #[inline]
    #[must_use]
    pub fn handshake_timeout_in_millis(&self) -> i64 {
        self.handshake_timeout_in_millis
    }

    pub fn set_handshake_timeout_in_millis(&mut self, millis: i64) {
        self.handshake_timeout_in_millis = millis;
    }

    /// Handshake timeout as a `Duration`, or `None` when the stored value is negative
    #[must_use]
    pub fn handshake_timeout(&self) -> Option<Duration> {
        u64::try_from(self.handshake_timeout_in_millis)
            .ok()
            .map(Duration::from_millis)
    }

    #[inline]
    #[must_use]
    pub fn channel_pool(&self) -> Option<&Arc<dyn ChannelPool>> {
        self.channel_pool.as_ref()
    }

    pub fn set_channel_pool(&mut self, pool: Option<Arc<dyn ChannelPool>>) {
        self.channel_pool = pool;
    }

    #[inline]
    #[must_use]
    pub fn chunked_file_chunk_size(&self) -> i32 {
        self.chunked_file_chunk_size
    }

    pub fn set_chunked_file_chunk_size(&mut self, size: i32) {
        self.chunked_file_chunk_size = size;
    }
}
