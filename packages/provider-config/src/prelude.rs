//! Canonical types for configuring a transport provider

pub use crate::config::{ProviderConfig, TransportSettings};
pub use crate::error::{Error, Result};
pub use crate::handles::{
    BossExecutor, ChannelPool, PooledChannel, ScheduledTimeout, SocketChannelFactory, TimerTask,
    TransportTimer,
};
pub use crate::properties::{PropertyStore, PropertyValue, keys};
pub use crate::provider::{AsyncHttpProviderConfig, CodecLimits, TransportProvider};
