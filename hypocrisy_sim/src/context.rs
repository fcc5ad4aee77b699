//! Simulation context owning the seeded random stream.

use hypocrisy_env::{RngSource, Seed, UniformSource};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Simulation context backed by a seeded ChaCha8 generator.
///
/// One context serves a whole ensemble: every run draws from the same
/// stream, so the seed alone determines every run's outcome.
pub struct SimContext {
    /// Master seed for this simulation
    seed: Seed,

    /// Deterministic uniform stream
    source: RngSource<ChaCha8Rng>,
}

impl SimContext {
    /// Creates a new SimContext with the given seed.
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            source: RngSource::new(ChaCha8Rng::seed_from_u64(seed.value())),
        }
    }

    /// Returns the seed the stream was started from.
    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl UniformSource for SimContext {
    fn uniform(&mut self) -> f64 {
        self.source.uniform()
    }

    fn uniform_open(&mut self) -> f64 {
        self.source.uniform_open()
    }
}
