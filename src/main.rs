// ABOUTME: Binary entry point for the roundtable simulator.
// ABOUTME: Parses the CLI, starts the ring, and shuts down cleanly on Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roundtable::agent::{DelaySource, UniformDelay};
use roundtable::ring::Ring;
use roundtable::trace::JsonLineSink;

/// Ring resource contention simulator.
///
/// Runs N agents around a ring of N shared tokens, emitting one JSON line
/// per phase transition, until interrupted.
#[derive(Debug, Parser)]
#[command(name = "roundtable", version, about)]
struct Args {
    /// Number of agents (and resources) in the ring.
    #[arg(long, default_value_t = 5)]
    agents: usize,

    /// Upper bound for the randomized think delay, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    think_max_ms: u64,

    /// Upper bound for the randomized use delay, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    use_max_ms: u64,

    /// Seed for the delay source, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let think_max = Duration::from_millis(args.think_max_ms);
    let use_max = Duration::from_millis(args.use_max_ms);

    let delays: Arc<dyn DelaySource> = match args.seed {
        Some(seed) => Arc::new(UniformDelay::seeded(think_max, use_max, seed)),
        None => Arc::new(UniformDelay::new(think_max, use_max)),
    };

    let ring = Ring::build(args.agents)?;
    let handle = ring.start(delays, Arc::new(JsonLineSink::stdout()));
    info!(agents = args.agents, "ring running, Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    handle.stop().await?;

    Ok(())
}
