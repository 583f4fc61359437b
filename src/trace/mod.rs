// ABOUTME: Trace sink interface for observing agent phase transitions.
// ABOUTME: Provides TraceEvent, the TraceSink trait, and memory/null/JSON-line sinks.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

/// Phases an agent moves through, as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Idle between cycles, holding nothing.
    Thinking,
    /// Attempting the non-blocking pair acquisition.
    Acquiring,
    /// Holding both tokens and doing work.
    Using,
    /// Returning both tokens after a completed use.
    Releasing,
    /// Backed out of a cycle after a contended attempt; holds nothing.
    Abandoned,
    /// Exited after cancellation, all owed releases done.
    Stopped,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Thinking => write!(f, "thinking"),
            Phase::Acquiring => write!(f, "acquiring"),
            Phase::Using => write!(f, "using"),
            Phase::Releasing => write!(f, "releasing"),
            Phase::Abandoned => write!(f, "abandoned"),
            Phase::Stopped => write!(f, "stopped"),
        }
    }
}

/// A single phase transition, stamped when the agent enters the phase.
#[derive(Debug, Clone, Serialize)]
pub struct TraceEvent {
    /// Ring index of the agent.
    pub agent_id: usize,
    /// The phase being entered.
    pub phase: Phase,
    /// Wall-clock timestamp in milliseconds since the Unix epoch.
    pub unix_ms: u64,
}

impl TraceEvent {
    /// Create an event stamped with the current wall clock.
    pub fn now(agent_id: usize, phase: Phase) -> Self {
        let unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Self {
            agent_id,
            phase,
            unix_ms,
        }
    }
}

/// Observer for agent phase transitions.
///
/// Sinks are injected and stay off the concurrency-critical path: a sink
/// error is logged by the caller and never disturbs the agent cycle.
#[async_trait]
pub trait TraceSink: Send + Sync {
    /// Record one phase transition.
    async fn record(&self, event: &TraceEvent) -> Result<(), anyhow::Error>;
}

/// Sink that discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

#[async_trait]
impl TraceSink for NullSink {
    async fn record(&self, _event: &TraceEvent) -> Result<(), anyhow::Error> {
        Ok(())
    }
}

/// Sink that keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: RwLock<Vec<TraceEvent>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events.
    pub async fn events(&self) -> Vec<TraceEvent> {
        self.events.read().await.clone()
    }

    /// Number of recorded events.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Whether nothing has been recorded yet.
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    /// Number of recorded events with the given phase.
    pub async fn count(&self, phase: Phase) -> usize {
        self.events
            .read()
            .await
            .iter()
            .filter(|event| event.phase == phase)
            .count()
    }
}

#[async_trait]
impl TraceSink for MemorySink {
    async fn record(&self, event: &TraceEvent) -> Result<(), anyhow::Error> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}

/// Sink that writes one JSON object per line to any writer.
pub struct JsonLineSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Unwrap the writer, consuming the sink.
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLineSink<std::io::Stdout> {
    /// Line-per-event sink over standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait]
impl<W: Write + Send> TraceSink for JsonLineSink<W> {
    async fn record(&self, event: &TraceEvent) -> Result<(), anyhow::Error> {
        let line = serde_json::to_string(event)?;
        let mut writer = self.writer.lock().await;
        writeln!(writer, "{line}")?;
        Ok(())
    }
}
