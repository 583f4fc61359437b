// ABOUTME: Shared cooperative cancellation signal for agent tasks.
// ABOUTME: One-way latch over an atomic flag plus a Notify for waiters.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

/// One-way shutdown latch shared by every agent in a ring.
///
/// Agents poll `is_triggered` at phase boundaries and race their sleeps
/// against `triggered` so cancellation never forces an agent to drop a held
/// token without releasing it.
#[derive(Debug, Default)]
pub struct Shutdown {
    flag: AtomicBool,
    notify: Notify,
}

impl Shutdown {
    /// Create an untriggered signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the signal and wake every waiter. Idempotent.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Whether shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Complete once the signal is triggered.
    pub async fn triggered(&self) {
        loop {
            // Register interest before re-checking the flag so a trigger
            // between the check and the await is not missed.
            let notified = self.notify.notified();
            if self.is_triggered() {
                return;
            }
            notified.await;
        }
    }
}
