//! Cancellable execution scope for a single call

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

use crate::error::{PlatError, Result};

#[derive(Debug, Default)]
struct ScopeState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Deadline and cancellation signal that travels with an operation.
///
/// Clones share the cancellation flag, so a scope handed to a
/// [`CallContext`](super::CallContext) can still be cancelled by the caller.
#[derive(Debug, Clone, Default)]
pub struct CallScope {
    deadline: Option<Instant>,
    state: Arc<ScopeState>,
}

impl CallScope {
    /// Scope that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// Scope expiring `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Scope expiring at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            state: Arc::default(),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel this scope and every clone of it
    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
        self.state.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Completes once the scope is cancelled
    pub async fn cancelled(&self) {
        loop {
            let notified = self.state.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }

    /// Run `fut` until it finishes, the scope is cancelled, or the deadline passes
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(PlatError::Cancelled),
            _ = expired => Err(PlatError::DeadlineExceeded),
            res = fut => res,
        }
    }
}
