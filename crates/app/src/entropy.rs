//! In-process entropy source backed by [`rand`].

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::Entropy;

/// [`Entropy`] drawing from a [`StdRng`].
///
/// The generator sits behind a mutex so a single instance can be shared by
/// the engine and the motion scheduler.
pub struct RngEntropy {
    rng: Mutex<StdRng>,
}

impl RngEntropy {
    /// Seed from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Seed deterministically, so two instances with the same seed produce
    /// the same sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Entropy for RngEntropy {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(low..high)
    }
}
