// ABOUTME: Resource capability trait and its atomic-flag implementation.
// ABOUTME: Non-blocking acquire with exactly-one-winner semantics; misuse panics.

use std::sync::atomic::{AtomicBool, Ordering};

/// A binary mutual-exclusion token shared by two ring-adjacent agents.
///
/// `try_acquire` never blocks and never retries internally; backoff belongs
/// to the caller. The underlying primitive is an implementation choice, so
/// agents only ever see this trait.
pub trait Resource: Send + Sync {
    /// Attempt to take exclusive ownership without blocking.
    ///
    /// Returns `true` iff the token was free. Safe under arbitrary concurrent
    /// invocation: exactly one caller observes `true` per free-to-held
    /// transition.
    fn try_acquire(&self) -> bool;

    /// Return the token to the free state.
    ///
    /// Establishes a happens-before edge so a later `try_acquire` by any
    /// agent observes freedom.
    ///
    /// # Panics
    ///
    /// Panics if the token is not currently held. That only happens when an
    /// acquisition invariant is broken, and it must fail loudly.
    fn release(&self);
}

/// Atomic-flag token.
#[derive(Debug, Default)]
pub struct AtomicResource {
    held: AtomicBool,
}

impl AtomicResource {
    /// Create a free token.
    pub fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
        }
    }

    /// Whether the token is currently held.
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

impl Resource for AtomicResource {
    fn try_acquire(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    fn release(&self) {
        let was_held = self.held.swap(false, Ordering::Release);
        assert!(was_held, "released a token that was not held");
    }
}
