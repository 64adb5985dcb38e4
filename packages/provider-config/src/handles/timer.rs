//! Timer seam used for request, idle and handshake timeouts

use std::fmt;
use std::time::Duration;

/// One-shot callback fired by a [`TransportTimer`]
pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a pending timeout
pub trait ScheduledTimeout: Send + fmt::Debug {
    /// Prevent the task from running if it has not fired yet
    fn cancel(&self);

    /// True once the task has run or been cancelled
    fn is_done(&self) -> bool;
}

/// Timer shared by every connection of a provider
pub trait TransportTimer: Send + Sync + fmt::Debug {
    /// Run `task` once `delay` has elapsed
    fn new_timeout(&self, delay: Duration, task: TimerTask) -> Box<dyn ScheduledTimeout>;
}

#[derive(Debug)]
struct TokioTimeout {
    handle: tokio::task::JoinHandle<()>,
}

impl ScheduledTimeout for TokioTimeout {
    fn cancel(&self) {
        self.handle.abort();
    }

    fn is_done(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Requires the runtime behind the handle to have its time driver enabled
impl TransportTimer for tokio::runtime::Handle {
    fn new_timeout(&self, delay: Duration, task: TimerTask) -> Box<dyn ScheduledTimeout> {
        let handle = self.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Box::new(TokioTimeout { handle })
    }
}
