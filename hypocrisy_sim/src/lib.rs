//! Hypocrisy Simulation Harness
//!
//! Runs seeded ensembles of the voter models from `hypocrisy_core` and
//! reports them against the closed-form predictions.
//!
//! # Core Principle: One Seed, One Stream
//!
//! A [`SimContext`] owns a single ChaCha8 stream seeded once per
//! invocation. Every run of the ensemble draws from it in sequence, so the
//! seed printed at startup reproduces the entire invocation bit for bit.
//!
//! # Flow
//!
//! ```text
//!  CLI args ──► Bvm / Cvm (validated) ──► SimulationRunner
//!                                            │
//!                    SimContext(seed) ───────┤
//!                                            ▼
//!                               Ensemble::run (n_run runs)
//!                                  │                 │
//!                     run 0 states, per jump   EnsembleSummary
//!                                  ▼                 ▼
//!                   DynamicsWriter ──► dynamics.dat  log lines / JSON
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use hypocrisy_core::{Bvm, BvmParams};
//! use hypocrisy_env::Seed;
//! use hypocrisy_sim::SimulationRunner;
//!
//! let model = Bvm::new(BvmParams { rc: 1.0, n: 50, nr_init: 25 })?;
//! let report = SimulationRunner::new(100)?
//!     .with_seed(Seed::from_value(42))
//!     .run(&model)?;
//! report.log_summary();
//! ```

pub mod cli;
mod context;
mod error;
mod exporter;
mod runner;

pub use context::SimContext;
pub use error::SimError;
pub use exporter::{DynamicsWriter, DEFAULT_DYNAMICS_PATH};
pub use runner::{SimulationReport, SimulationRunner};
