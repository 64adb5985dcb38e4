//! Collaborator seams referenced by the typed settings
//!
//! The configuration never builds or shuts down any of these. It only carries
//! shared `Arc` handles from whoever created them to the provider that uses
//! them; an unset handle means the provider falls back to its own default.

pub mod channel;
pub mod executor;
pub mod pool;
pub mod timer;

pub use channel::SocketChannelFactory;
pub use executor::BossExecutor;
pub use pool::{ChannelPool, PooledChannel};
pub use timer::{ScheduledTimeout, TimerTask, TransportTimer};
