//! Cooperative cancellation for a conversion run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag checked by the pipeline before each file.
///
/// Clones share the same flag, so the Ctrl+C handler can hold one clone while
/// [`crate::run`] polls another. A file that is already being committed is
/// always finished first; the token only prevents the *next* file from starting.
///
/// # Examples
///
/// ```
/// use enconv::CancellationToken;
///
/// let token = CancellationToken::default();
/// let handler_side = token.clone();
/// assert!(!token.is_cancelled());
///
/// handler_side.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stop: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop. Idempotent.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}
