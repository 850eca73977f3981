//! Configurable latency injection for the dispatch layer.
//!
//! The artificial delay exists so callers exercise their loading states
//! against an async contract; it is a hook, not an unconditional behavior.
//! Tests run with [`Latency::None`].

use std::time::Duration;

use rand::Rng;

/// Delay applied once per dispatch call, before the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// No delay.
    None,
    /// A uniformly random delay in `[min, max]`.
    Uniform { min: Duration, max: Duration },
}

impl Latency {
    /// The production-like default: 100-500 ms per call.
    pub fn simulated() -> Latency {
        Latency::Uniform {
            min: Duration::from_millis(100),
            max: Duration::from_millis(500),
        }
    }

    /// Awaits the configured delay.
    pub async fn wait(&self) {
        match *self {
            Latency::None => {}
            Latency::Uniform { min, max } => {
                let lo = min.as_millis() as u64;
                let hi = max.as_millis() as u64;
                let ms = if hi > lo {
                    rand::rng().random_range(lo..=hi)
                } else {
                    lo
                };
                tokio::time::sleep(Duration::from_millis(ms)).await;
            }
        }
    }
}
