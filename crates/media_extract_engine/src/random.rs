use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

/// Source of the randomness used by the mock extractor.
pub trait RandomSource: Send + Sync {
    /// Uniform sample in `[0, 1)`.
    fn unit(&self) -> f64;

    /// Fair coin flip; `true` classifies a record as video.
    fn coin_flip(&self) -> bool;
}

/// Unseeded thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn coin_flip(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

/// Replays fixed samples, for tests that need reproducible output.
///
/// Once a queue runs dry it keeps returning its fallback (`0.0` / `false`).
#[derive(Debug, Default)]
pub struct FixedSequence {
    units: Mutex<VecDeque<f64>>,
    flips: Mutex<VecDeque<bool>>,
}

impl FixedSequence {
    pub fn new(units: impl IntoIterator<Item = f64>, flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            units: Mutex::new(units.into_iter().collect()),
            flips: Mutex::new(flips.into_iter().collect()),
        }
    }
}

impl RandomSource for FixedSequence {
    fn unit(&self) -> f64 {
        self.units
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(0.0)
    }

    fn coin_flip(&self) -> bool {
        self.flips
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(false)
    }
}
