//! Ensemble aggregation over independent runs.

use crate::driver::{RunDriver, RunOutcome, RunPhase};
use crate::error::ParamError;
use crate::model::OpinionModel;
use crate::trajectory::{Discard, TrajectorySink};
use hypocrisy_env::UniformSource;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Two-sided 95% normal quantile.
pub const Z_95: f64 = 1.959964;

/// Runs between progress log lines.
pub const PROGRESS_INTERVAL: u64 = 250;

/// Running moments of consensus times and red-win count.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnsembleStats {
    runs: u64,
    red_wins: u64,
    sum_time: f64,
    sum_time_sq: f64,
}

impl EnsembleStats {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one finished run.
    pub fn record(&mut self, time: f64, red_wins: bool) {
        self.runs += 1;
        self.red_wins += u64::from(red_wins);
        self.sum_time += time;
        self.sum_time_sq += time * time;
    }

    /// Number of recorded runs.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Number of recorded red wins.
    pub fn red_wins(&self) -> u64 {
        self.red_wins
    }

    /// Observed red-win fraction.
    pub fn red_fraction(&self) -> f64 {
        self.red_wins as f64 / self.runs as f64
    }

    /// Mean consensus time.
    pub fn mean_time(&self) -> f64 {
        self.sum_time / self.runs as f64
    }

    /// Standard error of the mean consensus time.
    ///
    /// `NaN` for a single run.
    pub fn std_error(&self) -> f64 {
        let n = self.runs as f64;
        let m1 = self.sum_time / n;
        let m2 = self.sum_time_sq / n;
        // Round-off can push an exact-zero variance slightly negative
        ((m2 - m1 * m1).max(0.0) / (n - 1.0)).sqrt()
    }

    /// Summarizes the ensemble against the model's closed forms.
    pub fn summarize<M: OpinionModel>(&self, model: &M) -> EnsembleSummary {
        let std_error = self.std_error();
        EnsembleSummary {
            runs: self.runs,
            red_wins: self.red_wins,
            observed_red_fraction: self.red_fraction(),
            expected_red_fraction: model.expected_red_fraction(),
            mean_time: self.mean_time(),
            std_error,
            ci95_half_width: Z_95 * std_error,
            predicted_mean_time: model.predicted_mean_time(),
        }
    }
}

/// Observed statistics next to their closed-form predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleSummary {
    pub runs: u64,
    pub red_wins: u64,
    pub observed_red_fraction: f64,
    pub expected_red_fraction: f64,
    pub mean_time: f64,
    pub std_error: f64,
    pub ci95_half_width: f64,
    pub predicted_mean_time: f64,
}

impl EnsembleSummary {
    /// True if the predicted mean lies within `k` standard errors of the
    /// observed mean.
    pub fn prediction_within(&self, k: f64) -> bool {
        (self.mean_time - self.predicted_mean_time).abs() <= k * self.std_error
    }
}

/// Everything an ensemble produces besides the trajectory of run 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleResult {
    /// Summary statistics
    pub summary: EnsembleSummary,

    /// Total jumps over all runs
    pub total_jumps: u64,
}

/// Repeats the run driver `n_run` times on one random stream.
pub struct Ensemble<'m, M: OpinionModel> {
    model: &'m M,
    n_run: u64,
}

impl<'m, M: OpinionModel> Ensemble<'m, M> {
    /// Creates an ensemble of `n_run` runs, rejecting `n_run == 0`.
    pub fn new(model: &'m M, n_run: u64) -> Result<Self, ParamError> {
        if n_run == 0 {
            return Err(ParamError::NoRuns(n_run));
        }
        Ok(Self { model, n_run })
    }

    /// Executes every run in sequence. The states of run 0 go to `trajectory`
    /// as they are visited.
    pub fn run<U, T>(&self, source: &mut U, trajectory: &mut T) -> EnsembleResult
    where
        U: UniformSource + ?Sized,
        T: TrajectorySink<M::State> + ?Sized,
    {
        let mut stats = EnsembleStats::new();
        let mut total_jumps = 0;

        for run in 0..self.n_run {
            if run % PROGRESS_INTERVAL == 0 {
                info!("working on run {} out of {}", run, self.n_run);
            }

            let driver = RunDriver::new(self.model);
            let outcome: RunOutcome<M::State> = if run == 0 {
                driver.run(&mut *source, &mut *trajectory)
            } else {
                driver.run(&mut *source, &mut Discard)
            };
            if outcome.phase == RunPhase::Stalled {
                warn!(run, state = ?outcome.final_state, "run stalled before consensus");
            }

            stats.record(outcome.time, outcome.red_wins);
            total_jumps += outcome.jumps;
        }

        EnsembleResult {
            summary: stats.summarize(self.model),
            total_jumps,
        }
    }
}
