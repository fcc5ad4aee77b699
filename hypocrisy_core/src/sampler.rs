//! Gillespie direct-method jump sampler.
//!
//! Given the competing rates of a state, one jump costs two uniform draws:
//!
//! 1. waiting time `τ = -ln(U) / λ`, `U ∈ (0, 1)`, `λ = Σ rates`
//! 2. event `j` = first index whose cumulative rate exceeds `λ·U'`,
//!    `U' ∈ [0, 1)`
//!
//! The draws are taken in that order, so a fixed uniform stream gives a
//! fixed jump sequence.

use hypocrisy_env::UniformSource;

/// One sampled jump of the Markov chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jump {
    /// Time until the jump fires
    pub wait: f64,

    /// Index of the transition that fires
    pub index: usize,
}

/// Sum of all rates.
pub fn total_rate(rates: &[f64]) -> f64 {
    rates.iter().sum()
}

/// Picks the first index whose cumulative rate is strictly greater than `r`.
///
/// When round-off puts `r` at or past the last cumulative sum, the last
/// transition with a positive rate is picked, so a zero-rate transition is
/// never selected. Returns `None` only if every rate is zero.
pub fn select_index(rates: &[f64], r: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (j, &rate) in rates.iter().enumerate() {
        cumulative += rate;
        if r < cumulative {
            return Some(j);
        }
    }
    rates.iter().rposition(|&rate| rate > 0.0)
}

/// Draws the next jump, or `None` if the total rate is not positive.
pub fn sample_jump<U: UniformSource + ?Sized>(rates: &[f64], source: &mut U) -> Option<Jump> {
    let lambda = total_rate(rates);
    if lambda.is_nan() || lambda <= 0.0 {
        return None;
    }

    let wait = -source.uniform_open().ln() / lambda;
    let r = lambda * source.uniform();
    let index = select_index(rates, r)?;

    Some(Jump { wait, index })
}
