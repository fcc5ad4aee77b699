//! The contract every voter model implements.

use std::fmt::Debug;
use std::ops::AddAssign;

/// One row of a model's transition table.
///
/// `delta` is added to the state when the transition fires. A model's rate
/// vector is ordered exactly like its transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S> {
    /// Short identifier used in logs
    pub name: &'static str,

    /// Integer change applied to the state
    pub delta: S,
}

/// A population opinion model simulated as a continuous-time Markov chain.
///
/// Implementations supply the model-specific parts (rates, transition table,
/// consensus test, closed forms). Jump sampling, run driving and ensemble
/// statistics are generic over this trait.
pub trait OpinionModel {
    /// Discrete population state. Deltas are values of the same type.
    type State: Copy + Debug + PartialEq + AddAssign + 'static;

    /// Fixed-size rate vector, one entry per transition.
    type Rates: AsRef<[f64]>;

    /// Short model name for logs and exports.
    fn name(&self) -> &'static str;

    /// Number of agents.
    fn population(&self) -> i64;

    /// State every run starts from.
    fn initial_state(&self) -> Self::State;

    /// Transition table, aligned with [`rates`](Self::rates).
    fn transitions(&self) -> &'static [Transition<Self::State>];

    /// Instantaneous rate of each transition in `state`.
    ///
    /// All rates are zero in an absorbing state.
    fn rates(&self, state: &Self::State) -> Self::Rates;

    /// True if no further transition is possible.
    fn is_consensus(&self, state: &Self::State) -> bool;

    /// True if `state` is the all-red absorbing state.
    fn red_wins(&self, state: &Self::State) -> bool;

    /// Checks the model's structural invariants on `state`.
    fn is_valid_state(&self, state: &Self::State) -> bool;

    /// Column labels of [`densities`](Self::densities).
    fn density_labels(&self) -> &'static [&'static str];

    /// State counts normalized by the population size.
    fn densities(&self, state: &Self::State) -> Vec<f64>;

    /// Closed-form probability that red wins from the initial state.
    fn expected_red_fraction(&self) -> f64;

    /// Closed-form prediction of the mean consensus time.
    fn predicted_mean_time(&self) -> f64;

    /// Applies transition `index` to `state`.
    fn apply(&self, state: &mut Self::State, index: usize) {
        *state += self.transitions()[index].delta;
    }
}
