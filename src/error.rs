// ABOUTME: Defines error types for the roundtable library using thiserror.
// ABOUTME: Contention and cancellation are expected outcomes and have no variants here.

/// Errors from ring construction.
#[derive(Debug, thiserror::Error)]
pub enum RingError {
    /// A ring needs at least two agents; with fewer, pair acquisition
    /// degenerates to an agent contending with itself for one token.
    #[error("invalid configuration: a ring needs at least 2 agents, got {agents}")]
    InvalidConfiguration { agents: usize },
}
