//! Connection pool seam
//!
//! Eviction and reuse policy live entirely in the implementation; the
//! configuration only passes the pool through to the provider.

use std::any::Any;
use std::fmt;

/// A pooled connection, opaque to everything but the provider that created it
pub type PooledChannel = Box<dyn Any + Send>;

pub trait ChannelPool: Send + Sync + fmt::Debug {
    /// Return an idle connection for `pool_key`; false if the pool refused it
    fn offer(&self, pool_key: &str, channel: PooledChannel) -> bool;

    /// Take an idle connection for `pool_key`, if one is cached
    fn poll(&self, pool_key: &str) -> Option<PooledChannel>;

    /// Drop every idle connection cached for `pool_key`
    fn remove_all(&self, pool_key: &str) -> bool;

    /// Whether the pool currently accepts more connections
    fn can_cache_connection(&self) -> bool;

    /// Close every cached connection
    fn destroy(&self);
}
