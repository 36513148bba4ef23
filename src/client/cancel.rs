//! Cooperative cancellation handle

use std::sync::Arc;

use tokio::sync::watch;

// == Cancellation Token ==
/// Shared flag that asks a pending fetch to drop its result.
///
/// Clones observe the same flag. Cancelling is idempotent and never blocks.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    flag: Arc<watch::Sender<bool>>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        let (flag, _) = watch::channel(false);
        Self {
            flag: Arc::new(flag),
        }
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.send_replace(true);
    }

    /// Returns true once `cancel` has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        *self.flag.borrow()
    }

    /// Resolves when the token is cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.flag.subscribe();
        // The sender lives in `self`, so this can only end by cancellation
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
