//! Hypocrisy Environment Abstraction Layer
//!
//! This crate isolates the one source of non-determinism the voter-model
//! simulators have: the stream of uniform random numbers consumed by the
//! jump sampler.
//!
//! # Core Concept
//!
//! Every stochastic decision in a run is a function of uniform draws:
//! - **Waiting times**: one draw on the open interval `(0, 1)` per jump
//! - **Event selection**: one draw on `[0, 1)` per jump
//!
//! Deriving all draws from a single 64-bit [`Seed`] makes any ensemble
//! reproducible from its seed number, and swapping in [`ScriptedUniforms`]
//! lets tests pin the exact draws a sampler sees.
//!
//! # Example
//!
//! ```ignore
//! use hypocrisy_env::{RngSource, Seed, UniformSource};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let seed = Seed::resolve(Some(42))?;
//! let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(seed.value()));
//! let u = source.uniform_open();
//! ```

mod context;
mod error;
mod scripted;
mod types;

pub use context::{RngSource, UniformSource};
pub use error::EnvError;
pub use scripted::ScriptedUniforms;
pub use types::Seed;
