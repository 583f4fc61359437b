// ABOUTME: Agent - drives the think/acquire/use cycle as an independent task.
// ABOUTME: Non-blocking pair acquisition with immediate backout on contention.

use std::sync::Arc;

use tokio::time;
use tracing::{debug, trace, warn};

use super::delay::DelaySource;
use super::shutdown::Shutdown;
use crate::resource::{Held, Resource};
use crate::trace::{Phase, TraceEvent, TraceSink};

/// One actor in the ring.
///
/// An agent is plain data plus behavior; the concurrency primitive lives
/// outside (callers spawn `run` as a task). It shares its left token with the
/// previous agent in the ring and its right token with the next one, and only
/// ever holds them transiently inside a cycle.
pub struct Agent {
    id: usize,
    left: Arc<dyn Resource>,
    right: Arc<dyn Resource>,
}

impl Agent {
    /// Create an agent with its ring index and two shared tokens.
    pub fn new(id: usize, left: Arc<dyn Resource>, right: Arc<dyn Resource>) -> Self {
        Self { id, left, right }
    }

    /// Ring index of this agent.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The token shared with the previous agent in the ring.
    pub fn left(&self) -> &Arc<dyn Resource> {
        &self.left
    }

    /// The token shared with the next agent in the ring.
    pub fn right(&self) -> &Arc<dyn Resource> {
        &self.right
    }

    /// Tokens in the order this agent attempts them.
    ///
    /// Even agents reach left first, odd agents right first, so the two
    /// neighbors sharing a token never mirror each other's order.
    fn attempt_order(&self) -> (&Arc<dyn Resource>, &Arc<dyn Resource>) {
        if self.id % 2 == 0 {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        }
    }

    /// Drive the cycle until `shutdown` is triggered.
    ///
    /// The cycle is think, acquire the pair, use, release. Acquisition never
    /// blocks: a contended first token abandons the cycle outright, and a
    /// contended second token releases the first before abandoning, so no
    /// agent ever waits while holding. The signal is checked at every phase
    /// boundary, and a cancellation that lands mid-cycle still completes the
    /// release owed before the task exits.
    pub async fn run(
        self,
        delays: Arc<dyn DelaySource>,
        sink: Arc<dyn TraceSink>,
        shutdown: Arc<Shutdown>,
    ) {
        debug!(agent = self.id, "agent started");

        loop {
            if shutdown.is_triggered() {
                break;
            }
            self.emit(&sink, Phase::Thinking).await;
            trace!(agent = self.id, "thinking");
            tokio::select! {
                biased;
                () = shutdown.triggered() => break,
                () = time::sleep(delays.think_delay()) => {}
            }

            if shutdown.is_triggered() {
                break;
            }
            self.emit(&sink, Phase::Acquiring).await;
            let (first, second) = self.attempt_order();

            let first_held = match Held::try_acquire(first) {
                Some(held) => held,
                None => {
                    // Contention, not failure: back off into the next think.
                    trace!(agent = self.id, "first token contended");
                    self.emit(&sink, Phase::Abandoned).await;
                    continue;
                }
            };
            let second_held = match Held::try_acquire(second) {
                Some(held) => held,
                None => {
                    drop(first_held);
                    trace!(agent = self.id, "second token contended, first returned");
                    self.emit(&sink, Phase::Abandoned).await;
                    continue;
                }
            };

            if shutdown.is_triggered() {
                // Cancelled between acquisition and use; the guards return
                // both tokens on the way out.
                drop(second_held);
                drop(first_held);
                break;
            }
            self.emit(&sink, Phase::Using).await;
            trace!(agent = self.id, "using both tokens");
            tokio::select! {
                biased;
                () = shutdown.triggered() => {}
                () = time::sleep(delays.use_delay()) => {}
            }

            // Reverse-acquisition order, unconditionally.
            self.emit(&sink, Phase::Releasing).await;
            drop(second_held);
            drop(first_held);
        }

        debug!(agent = self.id, "agent stopped");
        self.emit(&sink, Phase::Stopped).await;
    }

    async fn emit(&self, sink: &Arc<dyn TraceSink>, phase: Phase) {
        let event = TraceEvent::now(self.id, phase);
        if let Err(error) = sink.record(&event).await {
            warn!(agent = self.id, %error, "trace sink rejected event");
        }
    }
}
