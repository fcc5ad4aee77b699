//! Hypocrisy Core - stochastic voter-model engine
//!
//! Simulates opinion dynamics as continuous-time Markov jump processes and
//! runs them to consensus with the Gillespie direct method.
//!
//! # Models
//!
//! - **BVM**: binary voter model, state = number of red agents
//! - **CVM**: voter model with hypocrisy, state = external red, internal red
//!   and red-in-both counts
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────── Ensemble (n_run times) ─────────────────────────┐
//! │                                                                          │
//! │   RunDriver:  consensus? ──no──► rates ──► sample_jump ──► apply delta   │
//! │                  │  ▲                                          │         │
//! │                 yes └──────────────────────────────────────────┘         │
//! │                  ▼                                                       │
//! │             RunOutcome ──► EnsembleStats (Σt, Σt², red wins)             │
//! │   run 0 only: every visited state ──► TrajectorySink                     │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both models implement [`OpinionModel`]: a rate vector aligned with a
//! static table of state deltas. The sampler, driver and statistics are
//! shared generic code.
//!
//! # Usage
//!
//! ```ignore
//! use hypocrisy_core::{Bvm, BvmParams, Discard, Ensemble};
//!
//! let model = Bvm::new(BvmParams { rc: 1.0, n: 50, nr_init: 25 })?;
//! let result = Ensemble::new(&model, 100)?.run(&mut source, &mut Discard);
//! println!("mean consensus time {}", result.summary.mean_time);
//! ```

pub mod analytic;
pub mod bvm;
pub mod cvm;
pub mod driver;
pub mod ensemble;
pub mod error;
pub mod model;
pub mod sampler;
pub mod trajectory;

pub use bvm::{Bvm, BvmParams, BvmState};
pub use cvm::{Cvm, CvmParams, CvmState};
pub use driver::{RunDriver, RunOutcome, RunPhase};
pub use ensemble::{Ensemble, EnsembleResult, EnsembleStats, EnsembleSummary};
pub use error::ParamError;
pub use model::{OpinionModel, Transition};
pub use sampler::{sample_jump, Jump};
pub use trajectory::{Discard, Trajectory, TrajectorySink};
