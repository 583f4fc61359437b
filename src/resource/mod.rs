// ABOUTME: Resource module - binary mutual-exclusion tokens for the ring.
// ABOUTME: Provides the Resource trait, the atomic implementation, and the Held guard.

mod guard;
mod resource;

pub use guard::Held;
pub use resource::{AtomicResource, Resource};
