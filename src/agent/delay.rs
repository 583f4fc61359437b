// ABOUTME: Injectable source of think/use phase durations.
// ABOUTME: UniformDelay draws from rand, FixedDelay stubs a constant for tests.

use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the randomized durations for the two suspension phases.
///
/// Injected into agents so tests can pin timing (fixed seed or a constant
/// stub) without touching the cycle itself.
pub trait DelaySource: Send + Sync {
    /// Duration of the next think phase.
    fn think_delay(&self) -> Duration;

    /// Duration of the next use phase.
    fn use_delay(&self) -> Duration;
}

/// Uniform draw from `0..=max` per phase.
pub struct UniformDelay {
    think_max: Duration,
    use_max: Duration,
    rng: Mutex<StdRng>,
}

impl UniformDelay {
    /// Entropy-seeded source with the given per-phase upper bounds.
    pub fn new(think_max: Duration, use_max: Duration) -> Self {
        Self::with_rng(think_max, use_max, StdRng::from_entropy())
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(think_max: Duration, use_max: Duration, seed: u64) -> Self {
        Self::with_rng(think_max, use_max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(think_max: Duration, use_max: Duration, rng: StdRng) -> Self {
        Self {
            think_max,
            use_max,
            rng: Mutex::new(rng),
        }
    }

    fn draw(&self, max: Duration) -> Duration {
        let mut rng = self.rng.lock().unwrap();
        Duration::from_millis(rng.gen_range(0..=max.as_millis() as u64))
    }
}

impl DelaySource for UniformDelay {
    fn think_delay(&self) -> Duration {
        self.draw(self.think_max)
    }

    fn use_delay(&self) -> Duration {
        self.draw(self.use_max)
    }
}

/// Constant durations, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    think: Duration,
    using: Duration,
}

impl FixedDelay {
    /// Fixed think and use durations.
    pub fn new(think: Duration, using: Duration) -> Self {
        Self { think, using }
    }

    /// Zero delay for both phases.
    pub fn zero() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl DelaySource for FixedDelay {
    fn think_delay(&self) -> Duration {
        self.think
    }

    fn use_delay(&self) -> Duration {
        self.using
    }
}
