// ABOUTME: RAII hold guard for resources.
// ABOUTME: Dropping a Held releases its token on every exit path, panics included.

use std::sync::Arc;

use super::resource::Resource;

/// An exclusive hold on a resource, released when dropped.
pub struct Held {
    resource: Arc<dyn Resource>,
}

impl Held {
    /// Attempt to take the resource, returning a guard on success.
    ///
    /// Returns `None` when the token is held elsewhere; that is a normal
    /// contention outcome, not an error.
    pub fn try_acquire(resource: &Arc<dyn Resource>) -> Option<Self> {
        if resource.try_acquire() {
            Some(Self {
                resource: Arc::clone(resource),
            })
        } else {
            None
        }
    }
}

impl Drop for Held {
    fn drop(&mut self) {
        self.resource.release();
    }
}
