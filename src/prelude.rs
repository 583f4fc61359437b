// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use roundtable::prelude::*;` to get started quickly.

pub use crate::agent::{Agent, DelaySource, FixedDelay, Shutdown, UniformDelay};
pub use crate::error::RingError;
pub use crate::resource::{AtomicResource, Held, Resource};
pub use crate::ring::{Ring, RingHandle};
pub use crate::trace::{JsonLineSink, MemorySink, NullSink, Phase, TraceEvent, TraceSink};
