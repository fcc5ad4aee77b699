//! Recording of the states a run visits.
//!
//! The run driver hands every visited state to a [`TrajectorySink`]. The
//! simulator streams them straight to disk; [`Trajectory`] keeps them in
//! memory for inspection, and [`Discard`] drops them.

/// Receives every state of a run, in time order, starting at `t = 0`.
pub trait TrajectorySink<S> {
    /// Records one visited state.
    fn record(&mut self, time: f64, state: &S);
}

/// Sink that keeps nothing. Used for every run but the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<S> TrajectorySink<S> for Discard {
    fn record(&mut self, _time: f64, _state: &S) {}
}

/// Ordered `(time, state)` samples of one run, starting at `t = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    samples: Vec<(f64, S)>,
}

impl<S: Copy> Trajectory<S> {
    /// Creates an empty trajectory.
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Appends a sample.
    pub fn push(&mut self, time: f64, state: S) {
        self.samples.push((time, state));
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of jumps (samples after the initial one).
    pub fn n_events(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// Time of the last sample.
    pub fn final_time(&self) -> f64 {
        self.samples.last().map(|(t, _)| *t).unwrap_or(0.0)
    }

    /// Last recorded state.
    pub fn final_state(&self) -> Option<S> {
        self.samples.last().map(|(_, s)| *s)
    }

    /// Iterates over samples in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &(f64, S)> {
        self.samples.iter()
    }
}

impl<S: Copy> Default for Trajectory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy> TrajectorySink<S> for Trajectory<S> {
    fn record(&mut self, time: f64, state: &S) {
        self.push(time, *state);
    }
}
