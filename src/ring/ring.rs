// ABOUTME: Ring coordinator - builds the cyclic adjacency and runs the agents.
// ABOUTME: start spawns every agent task; RingHandle cancels and joins them.

use std::sync::Arc;

use futures::future::join_all;
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::agent::{Agent, DelaySource, Shutdown};
use crate::error::RingError;
use crate::resource::{AtomicResource, Resource};
use crate::trace::TraceSink;

/// N resources and N agents in cyclic adjacency.
///
/// Agent `i` gets resource `i` as its left token and resource `(i + 1) % n`
/// as its right token, so every resource is shared by exactly its two ring
/// neighbors.
pub struct Ring {
    resources: Vec<Arc<AtomicResource>>,
    agents: Vec<Agent>,
}

impl Ring {
    /// Build a ring of `n` agents over `n` resources.
    pub fn build(n: usize) -> Result<Self, RingError> {
        if n < 2 {
            return Err(RingError::InvalidConfiguration { agents: n });
        }

        let resources: Vec<Arc<AtomicResource>> =
            (0..n).map(|_| Arc::new(AtomicResource::new())).collect();

        let agents = (0..n)
            .map(|i| {
                let left: Arc<dyn Resource> = resources[i].clone();
                let right: Arc<dyn Resource> = resources[(i + 1) % n].clone();
                Agent::new(i, left, right)
            })
            .collect();

        Ok(Self { resources, agents })
    }

    /// The ring's resources, indexed by position.
    pub fn resources(&self) -> &[Arc<AtomicResource>] {
        &self.resources
    }

    /// The ring's agents, indexed by identity.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Spawn every agent as an independent task and return immediately.
    ///
    /// All agents share the delay source, the sink, and one shutdown signal.
    pub fn start(self, delays: Arc<dyn DelaySource>, sink: Arc<dyn TraceSink>) -> RingHandle {
        let shutdown = Arc::new(Shutdown::new());
        debug!(agents = self.agents.len(), "starting ring");

        let tasks = self
            .agents
            .into_iter()
            .map(|agent| tokio::spawn(agent.run(delays.clone(), sink.clone(), shutdown.clone())))
            .collect();

        RingHandle { shutdown, tasks }
    }
}

/// Handle over a started ring: coordinated cancellation and join.
pub struct RingHandle {
    shutdown: Arc<Shutdown>,
    tasks: Vec<JoinHandle<()>>,
}

impl RingHandle {
    /// Signal every agent to stop at its next phase boundary.
    ///
    /// An agent holding tokens finishes the release it owes before exiting.
    pub fn shutdown(&self) {
        self.shutdown.trigger();
    }

    /// Wait for every agent task to finish.
    ///
    /// Surfaces the first agent panic as a `JoinError`.
    pub async fn join(self) -> Result<(), JoinError> {
        for result in join_all(self.tasks).await {
            result?;
        }
        Ok(())
    }

    /// Signal shutdown and wait for every agent to stop.
    pub async fn stop(self) -> Result<(), JoinError> {
        self.shutdown();
        self.join().await
    }
}
