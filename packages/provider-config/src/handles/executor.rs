//! Boss executor seam
//!
//! The boss executor accepts new connections and drives connect attempts on
//! behalf of the transport.

use std::fmt;

use futures::future::BoxFuture;

/// Executor the transport hands its connection-accepting tasks to
pub trait BossExecutor: Send + Sync + fmt::Debug {
    /// Run `task` to completion in the background
    fn execute(&self, task: BoxFuture<'static, ()>);
}

impl BossExecutor for tokio::runtime::Handle {
    fn execute(&self, task: BoxFuture<'static, ()>) {
        // Detached; completion is observed by the task itself.
        drop(self.spawn(task));
    }
}
