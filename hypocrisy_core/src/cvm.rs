//! Voter model with hypocrisy.
//!
//! Each agent carries an external (expressed) opinion and an internal
//! (private) opinion, each red or not red. Agents copy the external opinion
//! of others at rate `rc`, align their external opinion with their internal
//! one at rate `re` (externalizing) and their internal opinion with their
//! external one at rate `ri` (internalizing).
//!
//! The state keeps three counts. The four sub-populations they imply
//!
//! | external | internal | count |
//! |----------|----------|-------|
//! | red      | red      | `nrr` |
//! | red      | not red  | `nr_ext - nrr` |
//! | not red  | red      | `nr_int - nrr` |
//! | not red  | not red  | `n - nr_ext - nr_int + nrr` |
//!
//! are never negative.

use crate::analytic;
use crate::error::ParamError;
use crate::model::{OpinionModel, Transition};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Voter model with hypocrisy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CvmState {
    /// Agents whose external opinion is red
    pub nr_ext: i64,

    /// Agents whose internal opinion is red
    pub nr_int: i64,

    /// Agents red both externally and internally
    pub nrr: i64,
}

impl CvmState {
    /// Creates a state from its three counts.
    pub const fn new(nr_ext: i64, nr_int: i64, nrr: i64) -> Self {
        Self { nr_ext, nr_int, nrr }
    }
}

impl AddAssign for CvmState {
    fn add_assign(&mut self, rhs: Self) {
        self.nr_ext += rhs.nr_ext;
        self.nr_int += rhs.nr_int;
        self.nrr += rhs.nrr;
    }
}

/// Transition table, ordered like [`Cvm::rates`].
pub const CVM_TRANSITIONS: [Transition<CvmState>; 6] = [
    Transition { name: "ext_gain", delta: CvmState::new(1, 0, 0) },
    Transition { name: "ext_gain_rr", delta: CvmState::new(1, 0, 1) },
    Transition { name: "int_gain_rr", delta: CvmState::new(0, 1, 1) },
    Transition { name: "ext_loss", delta: CvmState::new(-1, 0, 0) },
    Transition { name: "int_loss", delta: CvmState::new(0, -1, 0) },
    Transition { name: "ext_loss_rr", delta: CvmState::new(-1, 0, -1) },
];

/// Voter model with hypocrisy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CvmParams {
    /// Rate of copying a neighbour
    pub rc: f64,

    /// Rate of externalizing
    pub re: f64,

    /// Rate of internalizing
    pub ri: f64,

    /// Number of agents
    pub n: i64,

    /// Initial number of external red opinions
    pub nr_ext_init: i64,

    /// Initial number of internal red opinions
    pub nr_int_init: i64,

    /// Initial number of agents red both externally and internally
    pub nrr_init: i64,
}

/// A validated voter model with hypocrisy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cvm {
    params: CvmParams,
}

impl Cvm {
    /// Validates the parameters.
    ///
    /// Rejects `n < 1`, non-positive `rc` or `ri`, negative `re`, counts
    /// outside `[0, n]` and an `nrr_init` outside
    /// `[max(0, nr_ext_init + nr_int_init - n), min(nr_ext_init, nr_int_init)]`.
    pub fn new(params: CvmParams) -> Result<Self, ParamError> {
        let CvmParams { rc, re, ri, n, nr_ext_init, nr_int_init, nrr_init } = params;

        ParamError::check_population(n)?;
        ParamError::check_positive_rate("rc", rc)?;
        ParamError::check_non_negative_rate("re", re)?;
        ParamError::check_positive_rate("ri", ri)?;
        ParamError::check_count("nr_ext_init", nr_ext_init, 0, n)?;
        ParamError::check_count("nr_int_init", nr_int_init, 0, n)?;
        ParamError::check_count(
            "nrr_init",
            nrr_init,
            // Both counts are at most n, so this cannot overflow
            (nr_ext_init - n + nr_int_init).max(0),
            nr_ext_init.min(nr_int_init),
        )?;

        Ok(Self { params })
    }
}

impl OpinionModel for Cvm {
    type State = CvmState;
    type Rates = [f64; 6];

    fn name(&self) -> &'static str {
        "cvm"
    }

    fn population(&self) -> i64 {
        self.params.n
    }

    fn initial_state(&self) -> CvmState {
        CvmState::new(self.params.nr_ext_init, self.params.nr_int_init, self.params.nrr_init)
    }

    fn transitions(&self) -> &'static [Transition<CvmState>] {
        &CVM_TRANSITIONS
    }

    fn rates(&self, state: &CvmState) -> [f64; 6] {
        let CvmParams { rc, re, ri, .. } = self.params;
        let n = self.params.n as f64;
        let nr_ext = state.nr_ext as f64;
        let nr_int = state.nr_int as f64;
        let nrr = state.nrr as f64;

        [
            // (nr_ext, nr_int, nrr) -> (nr_ext + 1, nr_int, nrr)
            nr_ext * (n - nr_ext - nr_int + nrr) * rc / n,
            // (nr_ext, nr_int, nrr) -> (nr_ext + 1, nr_int, nrr + 1)
            (nr_int - nrr) * (nr_ext * rc / n + re),
            // (nr_ext, nr_int, nrr) -> (nr_ext, nr_int + 1, nrr + 1)
            ri * (nr_ext - nrr),
            // (nr_ext, nr_int, nrr) -> (nr_ext - 1, nr_int, nrr)
            (nr_ext - nrr) * ((n - nr_ext) * rc / n + re),
            // (nr_ext, nr_int, nrr) -> (nr_ext, nr_int - 1, nrr)
            ri * (nr_int - nrr),
            // (nr_ext, nr_int, nrr) -> (nr_ext - 1, nr_int, nrr - 1)
            nrr * (n - nr_ext) * rc / n,
        ]
    }

    fn is_consensus(&self, state: &CvmState) -> bool {
        let n = self.params.n;
        (state.nr_ext == 0 && state.nr_int == 0) || (state.nr_ext == n && state.nr_int == n)
    }

    fn red_wins(&self, state: &CvmState) -> bool {
        state.nr_ext == self.params.n
    }

    fn is_valid_state(&self, state: &CvmState) -> bool {
        let n = self.params.n;
        let CvmState { nr_ext, nr_int, nrr } = *state;

        (0..=n).contains(&nr_ext)
            && (0..=n).contains(&nr_int)
            && nrr >= 0
            && nrr <= nr_ext.min(nr_int)
            && nrr >= nr_ext + nr_int - n
    }

    fn density_labels(&self) -> &'static [&'static str] {
        &["rho_R", "rho_r", "rho_Rr"]
    }

    fn densities(&self, state: &CvmState) -> Vec<f64> {
        let n = self.params.n as f64;
        vec![state.nr_ext as f64 / n, state.nr_int as f64 / n, state.nrr as f64 / n]
    }

    fn expected_red_fraction(&self) -> f64 {
        let p = &self.params;
        analytic::expected_red_fraction_cvm(p.n, p.nr_ext_init, p.nr_int_init, p.re, p.ri)
    }

    fn predicted_mean_time(&self) -> f64 {
        let p = &self.params;
        analytic::predicted_mean_cvm(p.n, p.nr_ext_init, p.nr_int_init, p.rc, p.re, p.ri)
    }
}
