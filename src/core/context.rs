use super::PersistenceError;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline carrier for execution store calls
///
/// Clones share one [`CancellationToken`], so cancelling any clone cancels
/// them all. The rate limited clients never look at it; only the persistence
/// implementation is expected to honor it.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// A context whose deadline is `timeout` from now
    ///
    /// Timeouts too large to represent as an [`Instant`] mean no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => Self::with_deadline(deadline),
            None => Self::background(),
        }
    }

    /// A child context: cancelled with its parent, cancellable on its own
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// The underlying token, for callers that select on cancellation
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Reports why the context is done, if it is
    ///
    /// Cancellation wins over an elapsed deadline.
    pub fn err(&self) -> Option<PersistenceError> {
        if self.is_cancelled() {
            return Some(PersistenceError::Canceled);
        }

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                Some(PersistenceError::DeadlineExceeded)
            }
            _ => None,
        }
    }
}
