//! Run driver - advances one chain from its initial state to consensus.

use crate::model::OpinionModel;
use crate::sampler::sample_jump;
use crate::trajectory::TrajectorySink;
use hypocrisy_env::UniformSource;
use tracing::warn;

/// Phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Not yet at consensus, jumps remain possible
    Active,

    /// Consensus reached, terminal
    Absorbed,

    /// No transition possible outside consensus, terminal
    ///
    /// Unreachable with validated parameters.
    Stalled,
}

/// Result of one finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome<S> {
    /// Elapsed time at termination
    pub time: f64,

    /// Number of jumps taken
    pub jumps: u64,

    /// State at termination
    pub final_state: S,

    /// True if the all-red state was reached
    pub red_wins: bool,

    /// How the run ended
    pub phase: RunPhase,
}

/// Drives one run of a model.
///
/// The consensus test runs before every rate evaluation, including the
/// first, so an absorbing initial condition finishes at `t = 0` with zero
/// jumps.
pub struct RunDriver<'m, M: OpinionModel> {
    model: &'m M,
    state: M::State,
    time: f64,
    jumps: u64,
    phase: RunPhase,
}

impl<'m, M: OpinionModel> RunDriver<'m, M> {
    /// Creates a driver at the model's initial state and `t = 0`.
    pub fn new(model: &'m M) -> Self {
        let state = model.initial_state();
        let phase = if model.is_consensus(&state) {
            RunPhase::Absorbed
        } else {
            RunPhase::Active
        };

        Self { model, state, time: 0.0, jumps: 0, phase }
    }

    /// Current state.
    pub fn state(&self) -> &M::State {
        &self.state
    }

    /// Elapsed time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Jumps taken so far.
    pub fn jumps(&self) -> u64 {
        self.jumps
    }

    /// Current phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Takes one jump if the run is still active and returns the new phase.
    pub fn step<U: UniformSource + ?Sized>(&mut self, source: &mut U) -> RunPhase {
        if self.phase != RunPhase::Active {
            return self.phase;
        }

        let rates = self.model.rates(&self.state);
        let Some(jump) = sample_jump(rates.as_ref(), source) else {
            warn!(state = ?self.state, "no transition possible before consensus");
            self.phase = RunPhase::Stalled;
            return self.phase;
        };

        self.time += jump.wait;
        self.model.apply(&mut self.state, jump.index);
        self.jumps += 1;

        if self.model.is_consensus(&self.state) {
            self.phase = RunPhase::Absorbed;
        }
        self.phase
    }

    /// Runs to termination, handing every visited state to `trajectory` as
    /// soon as it is reached.
    pub fn run<U, T>(mut self, source: &mut U, trajectory: &mut T) -> RunOutcome<M::State>
    where
        U: UniformSource + ?Sized,
        T: TrajectorySink<M::State> + ?Sized,
    {
        trajectory.record(self.time, &self.state);

        while self.phase == RunPhase::Active {
            if self.step(&mut *source) == RunPhase::Stalled {
                break;
            }
            trajectory.record(self.time, &self.state);
        }

        self.finish()
    }

    fn finish(self) -> RunOutcome<M::State> {
        RunOutcome {
            time: self.time,
            jumps: self.jumps,
            final_state: self.state,
            red_wins: self.model.red_wins(&self.state),
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bvm::{Bvm, BvmParams, BvmState};
    use crate::cvm::{Cvm, CvmParams};
    use crate::trajectory::{Discard, Trajectory};
    use hypocrisy_env::{RngSource, ScriptedUniforms};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded(seed: u64) -> RngSource<ChaCha8Rng> {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }

    fn bvm(n: i64, nr_init: i64) -> Bvm {
        Bvm::new(BvmParams { rc: 1.0, n, nr_init }).unwrap()
    }

    #[test]
    fn test_absorbing_start_all_blue() {
        let model = bvm(20, 0);
        let mut script = ScriptedUniforms::new([0.5]).unwrap();
        let mut log = Trajectory::new();

        let outcome = RunDriver::new(&model).run(&mut script, &mut log);

        assert_eq!(outcome.time, 0.0);
        assert_eq!(outcome.jumps, 0);
        assert!(!outcome.red_wins);
        assert_eq!(outcome.phase, RunPhase::Absorbed);
        assert_eq!(script.consumed(), 0);

        // Only the initial sample
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_absorbing_start_all_red() {
        let model = bvm(20, 20);
        let mut source = seeded(1);

        let outcome = RunDriver::new(&model).run(&mut source, &mut Discard);

        assert_eq!(outcome.time, 0.0);
        assert_eq!(outcome.jumps, 0);
        assert!(outcome.red_wins);
    }

    #[test]
    fn test_scripted_two_agent_run() {
        // n = 2, nr = 1: both rates 0.5, λ = 1. U = 0.5 then r = 0.1 < 0.5 → red gains.
        let model = bvm(2, 1);
        let mut script = ScriptedUniforms::new([0.5, 0.1]).unwrap();

        let outcome = RunDriver::new(&model).run(&mut script, &mut Discard);

        assert_eq!(outcome.jumps, 1);
        assert_eq!(outcome.final_state, BvmState { nr: 2 });
        assert!(outcome.red_wins);
        assert!((outcome.time - 2.0_f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn test_step_is_inert_after_absorption() {
        let model = bvm(2, 1);
        let mut script = ScriptedUniforms::new([0.5, 0.9]).unwrap();
        let mut driver = RunDriver::new(&model);

        assert_eq!(driver.phase(), RunPhase::Active);
        assert_eq!(driver.step(&mut script), RunPhase::Absorbed);
        assert_eq!(driver.state().nr, 0);

        let time = driver.time();
        assert_eq!(driver.step(&mut script), RunPhase::Absorbed);
        assert_eq!(driver.time(), time);
        assert_eq!(driver.jumps(), 1);
    }

    #[test]
    fn test_trajectory_records_every_state() {
        let model = bvm(30, 15);
        let mut source = seeded(42);
        let mut log = Trajectory::new();

        let outcome = RunDriver::new(&model).run(&mut source, &mut log);

        assert_eq!(log.n_events() as u64, outcome.jumps);
        assert_eq!(log.final_time(), outcome.time);
        assert_eq!(log.final_state(), Some(outcome.final_state));

        let first = log.iter().next().unwrap();
        assert_eq!(*first, (0.0, BvmState { nr: 15 }));

        let samples: Vec<_> = log.iter().copied().collect();
        for pair in samples.windows(2) {
            let (t0, s0) = pair[0];
            let (t1, s1) = pair[1];
            assert!(t1 >= t0, "time went backwards: {t0} -> {t1}");
            assert_eq!((s1.nr - s0.nr).abs(), 1);
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let model = bvm(40, 13);

        let a = RunDriver::new(&model).run(&mut seeded(9), &mut Discard);
        let b = RunDriver::new(&model).run(&mut seeded(9), &mut Discard);

        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_cvm_invariants_hold_along_runs(
            n in 1i64..25,
            ext_frac in 0.0f64..=1.0,
            int_frac in 0.0f64..=1.0,
            overlap in 0.0f64..=1.0,
            rc in 0.1f64..5.0,
            re in 0.0f64..5.0,
            ri in 0.1f64..5.0,
            seed in any::<u64>(),
        ) {
            let nr_ext_init = (ext_frac * n as f64).round() as i64;
            let nr_int_init = (int_frac * n as f64).round() as i64;
            let lo = (nr_ext_init + nr_int_init - n).max(0);
            let hi = nr_ext_init.min(nr_int_init);
            let nrr_init = lo + ((hi - lo) as f64 * overlap).round() as i64;

            let model = Cvm::new(CvmParams { rc, re, ri, n, nr_ext_init, nr_int_init, nrr_init })
                .unwrap();
            let mut source = seeded(seed);
            let mut driver = RunDriver::new(&model);
            prop_assert!(model.is_valid_state(driver.state()));

            let mut last_time = 0.0;
            for _ in 0..5_000 {
                let phase = driver.step(&mut source);
                prop_assert!(model.is_valid_state(driver.state()), "{:?}", driver.state());
                prop_assert!(driver.time() >= last_time);
                last_time = driver.time();
                prop_assert_ne!(phase, RunPhase::Stalled);
                if phase == RunPhase::Absorbed {
                    prop_assert!(model.is_consensus(driver.state()));
                    break;
                }
            }
        }
    }
}
