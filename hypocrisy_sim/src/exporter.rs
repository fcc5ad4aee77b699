//! CSV writer for the trajectory of run 0.
//!
//! Writes `dynamics.dat`: a header of `t` followed by the model's density
//! labels, then one row per visited state, every number with six decimals.
//! Rows are written while the run is in progress, never collected first.

use hypocrisy_core::{OpinionModel, TrajectorySink};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Default trajectory file name.
pub const DEFAULT_DYNAMICS_PATH: &str = "dynamics.dat";

/// Streams visited states of one model to a CSV writer.
///
/// Recording cannot fail mid-run. The first write error is kept, later rows
/// are dropped, and the error comes back from [`DynamicsWriter::finish`].
pub struct DynamicsWriter<'m, M: OpinionModel, W: Write> {
    model: &'m M,
    out: W,
    rows: usize,
    error: Option<io::Error>,
}

impl<'m, M: OpinionModel> DynamicsWriter<'m, M, BufWriter<File>> {
    /// Creates (or truncates) the file and writes the header.
    pub fn create(model: &'m M, path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Self::new(model, BufWriter::new(file))
    }
}

impl<'m, M: OpinionModel, W: Write> DynamicsWriter<'m, M, W> {
    /// Writes the header to `out`.
    pub fn new(model: &'m M, mut out: W) -> io::Result<Self> {
        write!(out, "t")?;
        for label in model.density_labels() {
            write!(out, ",{}", label)?;
        }
        writeln!(out)?;

        Ok(Self {
            model,
            out,
            rows: 0,
            error: None,
        })
    }

    /// Rows written so far, header excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes the stream and returns the row count, or the first write error.
    pub fn finish(mut self) -> io::Result<usize> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.rows)
    }

    fn write_row(&mut self, time: f64, state: &M::State) -> io::Result<()> {
        write!(self.out, "{:.6}", time)?;
        for density in self.model.densities(state) {
            write!(self.out, ",{:.6}", density)?;
        }
        writeln!(self.out)
    }
}

impl<'m, M: OpinionModel, W: Write> TrajectorySink<M::State> for DynamicsWriter<'m, M, W> {
    fn record(&mut self, time: f64, state: &M::State) {
        if self.error.is_some() {
            return;
        }
        match self.write_row(time, state) {
            Ok(()) => {
                self.rows += 1;
                debug!(t = time, state = ?state, "jump");
            }
            Err(e) => self.error = Some(e),
        }
    }
}
