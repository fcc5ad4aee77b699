//! Simulation runner - seeds the stream, runs the ensemble, exports run 0.

use crate::context::SimContext;
use crate::error::SimError;
use crate::exporter::{DynamicsWriter, DEFAULT_DYNAMICS_PATH};

use hypocrisy_core::ensemble::Z_95;
use hypocrisy_core::{Ensemble, EnsembleSummary, OpinionModel, ParamError};
use hypocrisy_env::Seed;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Results of one simulator invocation.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Model that was simulated
    pub model: &'static str,

    /// Seed used
    pub seed: u64,

    /// Observed and predicted statistics
    pub summary: EnsembleSummary,

    /// Jumps over all runs
    pub total_jumps: u64,

    /// Rows written to the trajectory file
    pub trajectory_rows: usize,

    /// Trajectory file location
    pub dynamics_path: PathBuf,
}

impl SimulationReport {
    /// True if the predicted mean consensus time lies inside the 95% CI.
    pub fn prediction_in_ci(&self) -> bool {
        self.summary.prediction_within(Z_95)
    }

    /// Logs the comparison of observed and predicted statistics.
    pub fn log_summary(&self) {
        let s = &self.summary;
        info!("observed fraction of red wins = {:.6}", s.observed_red_fraction);
        info!("expected fraction of red wins = {:.6}", s.expected_red_fraction);
        info!(
            "mean consensus time: {:.6} +/- {:.6} (95% CI)",
            s.mean_time, s.ci95_half_width
        );
        info!("predicted mean consensus time: {:.6}", s.predicted_mean_time);
        if self.prediction_in_ci() {
            info!("prediction lies inside the 95% CI");
        } else {
            info!("prediction lies outside the 95% CI");
        }
    }
}

/// Runs an ensemble for any opinion model.
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    /// Number of independent runs
    n_run: u64,

    /// Seed, resolved from the clock at run time when absent
    seed: Option<Seed>,

    /// Trajectory file location
    output: PathBuf,
}

impl SimulationRunner {
    /// Creates a runner for `n_run` runs, rejecting `n_run == 0`.
    pub fn new(n_run: u64) -> Result<Self, SimError> {
        if n_run == 0 {
            return Err(ParamError::NoRuns(n_run).into());
        }
        Ok(Self {
            n_run,
            seed: None,
            output: PathBuf::from(DEFAULT_DYNAMICS_PATH),
        })
    }

    /// Fixes the seed.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the trajectory file location.
    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    /// Runs the ensemble and writes the trajectory of run 0.
    pub fn run<M: OpinionModel>(&self, model: &M) -> Result<SimulationReport, SimError> {
        let seed = match self.seed {
            Some(seed) => seed,
            None => Seed::from_clock()?,
        };
        info!("SEED OF RANDOM NUMBER GENERATOR: {}", seed);

        let ensemble = Ensemble::new(model, self.n_run)?;
        let mut context = SimContext::new(seed);
        let mut dynamics = DynamicsWriter::create(model, &self.output)?;
        let result = ensemble.run(&mut context, &mut dynamics);
        debug!(
            model = model.name(),
            total_jumps = result.total_jumps,
            "ensemble finished"
        );

        let rows = dynamics.finish()?;
        info!("Exported {} rows to {}", rows, self.output.display());

        Ok(SimulationReport {
            model: model.name(),
            seed: seed.value(),
            summary: result.summary,
            total_jumps: result.total_jumps,
            trajectory_rows: rows,
            dynamics_path: self.output.clone(),
        })
    }
}
