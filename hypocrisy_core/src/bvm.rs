//! Binary voter model.
//!
//! Every agent holds one of two opinions, red or not red. At rate `rc` an
//! agent copies the opinion of a uniformly chosen agent, so the red count
//! `nr` performs a symmetric birth-death walk absorbed at `0` and `n`.

use crate::analytic;
use crate::error::ParamError;
use crate::model::{OpinionModel, Transition};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Binary voter model state: number of red agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BvmState {
    pub nr: i64,
}

impl AddAssign for BvmState {
    fn add_assign(&mut self, rhs: Self) {
        self.nr += rhs.nr;
    }
}

/// Transition table, ordered like [`Bvm::rates`].
pub const BVM_TRANSITIONS: [Transition<BvmState>; 2] = [
    Transition { name: "red_gain", delta: BvmState { nr: 1 } },
    Transition { name: "red_loss", delta: BvmState { nr: -1 } },
];

/// Binary voter model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BvmParams {
    /// Rate of copying a neighbour
    pub rc: f64,

    /// Number of agents
    pub n: i64,

    /// Initial number of red agents
    pub nr_init: i64,
}

/// A validated binary voter model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bvm {
    params: BvmParams,
}

impl Bvm {
    /// Validates the parameters.
    ///
    /// Rejects `n < 1`, `rc` not finite and positive, and `nr_init`
    /// outside `[0, n]`.
    pub fn new(params: BvmParams) -> Result<Self, ParamError> {
        ParamError::check_population(params.n)?;
        ParamError::check_positive_rate("rc", params.rc)?;
        ParamError::check_count("nr_init", params.nr_init, 0, params.n)?;
        Ok(Self { params })
    }
}

impl OpinionModel for Bvm {
    type State = BvmState;
    type Rates = [f64; 2];

    fn name(&self) -> &'static str {
        "bvm"
    }

    fn population(&self) -> i64 {
        self.params.n
    }

    fn initial_state(&self) -> BvmState {
        BvmState { nr: self.params.nr_init }
    }

    fn transitions(&self) -> &'static [Transition<BvmState>] {
        &BVM_TRANSITIONS
    }

    fn rates(&self, state: &BvmState) -> [f64; 2] {
        let n = self.params.n as f64;
        let nr = state.nr as f64;

        // Neutral copying: both directions share one rate
        let q = nr * (n - nr) * self.params.rc / n;
        [q, q]
    }

    fn is_consensus(&self, state: &BvmState) -> bool {
        state.nr == 0 || state.nr == self.params.n
    }

    fn red_wins(&self, state: &BvmState) -> bool {
        state.nr == self.params.n
    }

    fn is_valid_state(&self, state: &BvmState) -> bool {
        (0..=self.params.n).contains(&state.nr)
    }

    fn density_labels(&self) -> &'static [&'static str] {
        &["rho_R"]
    }

    fn densities(&self, state: &BvmState) -> Vec<f64> {
        vec![state.nr as f64 / self.params.n as f64]
    }

    fn expected_red_fraction(&self) -> f64 {
        analytic::expected_red_fraction_bvm(self.params.n, self.params.nr_init)
    }

    fn predicted_mean_time(&self) -> f64 {
        analytic::predicted_mean_bvm(self.params.n, self.params.nr_init, self.params.rc)
    }
}
