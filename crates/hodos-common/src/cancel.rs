//! Cooperative cancellation for long-running computations.
//!
//! A full relaxation pass is O(V³); a host embedding the engine may want to
//! abandon one mid-flight. [`CancelToken`] is a cloneable flag the solver
//! checks between relaxation phases.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable cancellation flag.
///
/// Clones share the same underlying flag; cancelling any clone cancels all
/// of them. The solver polls the token at phase boundaries, so cancellation
/// takes effect within one O(V²) phase.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns true if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
