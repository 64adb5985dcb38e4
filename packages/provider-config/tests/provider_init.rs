//! Provider initialization from a handed-off config

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::net::TcpStream;

use quyc_provider_config::prelude::*;

#[derive(Debug, Default)]
struct CountingPool {
    offers: AtomicUsize,
}

impl ChannelPool for CountingPool {
    fn offer(&self, _pool_key: &str, _channel: PooledChannel) -> bool {
        self.offers.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn poll(&self, _pool_key: &str) -> Option<PooledChannel> {
        None
    }

    fn remove_all(&self, _pool_key: &str) -> bool {
        false
    }

    fn can_cache_connection(&self) -> bool {
        true
    }

    fn destroy(&self) {}
}

#[derive(Debug)]
struct RefusingChannelFactory;

impl SocketChannelFactory for RefusingChannelFactory {
    fn new_channel(&self, _remote: SocketAddr) -> BoxFuture<'static, io::Result<TcpStream>> {
        async { Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused")) }.boxed()
    }
}

/// Minimal provider that reads everything it needs once
struct FakeProvider {
    codec: CodecLimits,
    handshake_timeout: Duration,
    chunked_bodies: bool,
    reuse_address: bool,
    pool: Option<Arc<dyn ChannelPool>>,
    channel_factory: Option<Arc<dyn SocketChannelFactory>>,
    timer: Option<Arc<dyn TransportTimer>>,
    boss: Option<Arc<dyn BossExecutor>>,
}

impl TransportProvider for FakeProvider {
    fn from_config(config: &ProviderConfig) -> Result<Self> {
        let handshake_timeout = config
            .handshake_timeout()
            .ok_or_else(|| Error::provider("negative handshake timeout"))?;

        Ok(Self {
            codec: config.codec_limits(),
            handshake_timeout,
            chunked_bodies: config.disable_zero_copy(),
            reuse_address: config.property_or(keys::REUSE_ADDRESS, false),
            pool: config.channel_pool().cloned(),
            channel_factory: config.socket_channel_factory().cloned(),
            timer: config.timer().cloned(),
            boss: config.resolve_boss_executor(),
        })
    }
}

#[cfg(test)]
mod provider_init_tests {
    use super::*;

    #[test]
    fn unset_handles_mean_provider_defaults() {
        let provider = FakeProvider::from_config(&ProviderConfig::new()).unwrap();

        assert!(provider.pool.is_none());
        assert!(provider.channel_factory.is_none());
        assert!(provider.timer.is_none());
        assert!(provider.boss.is_none());
        assert!(!provider.chunked_bodies);
        assert!(!provider.reuse_address);
        assert_eq!(provider.handshake_timeout, Duration::from_millis(10_000));
        assert_eq!(
            provider.codec,
            CodecLimits {
                max_initial_line_length: 4096,
                max_header_size: 8192,
                max_chunk_size: 8192,
            }
        );
    }

    #[test]
    fn handles_are_passed_through_without_copying() {
        let pool = Arc::new(CountingPool::default());
        let factory: Arc<dyn SocketChannelFactory> = Arc::new(RefusingChannelFactory);

        let config = ProviderConfig::new()
            .with_channel_pool(pool.clone())
            .with_socket_channel_factory(Arc::clone(&factory))
            .with_zero_copy_disabled(true)
            .with_property(keys::REUSE_ADDRESS, true)
            .into_shared();

        let provider = FakeProvider::from_shared(&config).unwrap();
        assert!(provider.chunked_bodies);
        assert!(provider.reuse_address);
        assert!(Arc::ptr_eq(provider.channel_factory.as_ref().unwrap(), &factory));

        let provider_pool = provider.pool.expect("pool handed through");
        assert!(provider_pool.offer("https://example.com:443", Box::new(())));
        assert_eq!(pool.offers.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn provider_rejection_surfaces_as_error() {
        let config = ProviderConfig::new().with_handshake_timeout_in_millis(-1);

        let err = FakeProvider::from_config(&config).err().expect("provider should refuse");
        assert!(matches!(err, Error::Provider(_)));
    }

    #[test]
    fn codec_limit_properties_override_typed_fields() {
        let config = ProviderConfig::new().with_codec_limits(100, 200, 300);
        config.add_property(keys::HTTP_CLIENT_CODEC_MAX_HEADER_SIZE, 65_536_i32);
        // Wrong type, ignored
        config.add_property(keys::HTTP_CLIENT_CODEC_MAX_CHUNK_SIZE, 1_i64);

        let limits = config.codec_limits();
        assert_eq!(limits.max_initial_line_length, 100);
        assert_eq!(limits.max_header_size, 65_536);
        assert_eq!(limits.max_chunk_size, 300);
    }

    #[tokio::test]
    async fn boss_executor_falls_back_to_extension_property() {
        let boss: Arc<dyn BossExecutor> = Arc::new(tokio::runtime::Handle::current());
        let config = ProviderConfig::new();
        config.add_property(keys::BOSS_EXECUTOR_SERVICE, Arc::clone(&boss));

        let resolved = config.resolve_boss_executor().expect("executor from property");
        assert!(Arc::ptr_eq(&resolved, &boss));

        let (tx, rx) = tokio::sync::oneshot::channel();
        resolved.execute(
            async move {
                let _ = tx.send("accepted");
            }
            .boxed(),
        );
        assert_eq!(rx.await.ok(), Some("accepted"));
    }

    #[tokio::test]
    async fn typed_boss_executor_wins_over_extension_property() {
        let typed: Arc<dyn BossExecutor> = Arc::new(tokio::runtime::Handle::current());
        let from_property: Arc<dyn BossExecutor> = Arc::new(tokio::runtime::Handle::current());

        let config = ProviderConfig::new().with_boss_executor_service(Arc::clone(&typed));
        config.add_property(keys::BOSS_EXECUTOR_SERVICE, Arc::clone(&from_property));

        let resolved = config.resolve_boss_executor().expect("executor is set");
        assert!(Arc::ptr_eq(&resolved, &typed));
        assert!(!Arc::ptr_eq(&resolved, &from_property));

        let provider = FakeProvider::from_config(&config).unwrap();
        assert!(Arc::ptr_eq(provider.boss.as_ref().unwrap(), &typed));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_handle_reaches_the_provider() {
        let timer: Arc<dyn TransportTimer> = Arc::new(tokio::runtime::Handle::current());
        let config = ProviderConfig::new().with_timer(Arc::clone(&timer));

        let provider = FakeProvider::from_config(&config).unwrap();
        let provider_timer = provider.timer.expect("timer handed through");

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let timeout = provider_timer.new_timeout(
            provider.handshake_timeout,
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        tokio::time::sleep(Duration::from_secs(11)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(timeout.is_done());
    }

    #[tokio::test]
    async fn channel_factory_errors_belong_to_the_factory() {
        let factory: Arc<dyn SocketChannelFactory> = Arc::new(RefusingChannelFactory);
        let config = ProviderConfig::new().with_socket_channel_factory(factory);

        let addr: SocketAddr = "127.0.0.1:9".parse().unwrap();
        let result = config.socket_channel_factory().unwrap().new_channel(addr).await;
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::ConnectionRefused);
    }
}
