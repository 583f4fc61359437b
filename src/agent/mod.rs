// ABOUTME: Agent module - the think/acquire/use cycle and its collaborators.
// ABOUTME: Provides Agent, the DelaySource trait, and the Shutdown signal.

mod agent;
mod delay;
mod shutdown;

pub use agent::Agent;
pub use delay::{DelaySource, FixedDelay, UniformDelay};
pub use shutdown::Shutdown;
