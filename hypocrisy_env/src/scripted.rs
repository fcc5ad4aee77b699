//! Replay source of fixed uniform draws.

use crate::context::UniformSource;
use crate::error::EnvError;

/// A [`UniformSource`] that replays a fixed list of draws in order.
///
/// Both `uniform` and `uniform_open` consume from the same sequence, in call
/// order. Once the list is exhausted it starts over from the first draw.
/// A scripted `0.0` returned through `uniform_open` is lifted to
/// `f64::MIN_POSITIVE`.
#[derive(Debug, Clone)]
pub struct ScriptedUniforms {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedUniforms {
    /// Creates a scripted source, rejecting empty scripts and draws
    /// outside `[0, 1)`.
    pub fn new(draws: impl Into<Vec<f64>>) -> Result<Self, EnvError> {
        let draws = draws.into();
        if draws.is_empty() {
            return Err(EnvError::EmptyScript);
        }
        if let Some((index, &value)) = draws
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..1.0).contains(*v))
        {
            return Err(EnvError::DrawOutOfRange { index, value });
        }
        Ok(Self { draws, cursor: 0 })
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_draw(&mut self) -> f64 {
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

impl UniformSource for ScriptedUniforms {
    fn uniform(&mut self) -> f64 {
        self.next_draw()
    }

    fn uniform_open(&mut self) -> f64 {
        let u = self.next_draw();
        if u == 0.0 {
            f64::MIN_POSITIVE
        } else {
            u
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_and_wraps() {
        let mut script = ScriptedUniforms::new([0.25, 0.5]).unwrap();

        assert_eq!(script.uniform_open(), 0.25);
        assert_eq!(script.uniform(), 0.5);
        assert_eq!(script.uniform(), 0.25);
        assert_eq!(script.consumed(), 3);
    }

    #[test]
    fn test_rejects_bad_scripts() {
        assert!(matches!(
            ScriptedUniforms::new(Vec::<f64>::new()),
            Err(EnvError::EmptyScript)
        ));
        assert!(matches!(
            ScriptedUniforms::new([0.1, 1.0]),
            Err(EnvError::DrawOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_open_draw_never_zero() {
        let mut script = ScriptedUniforms::new([0.0]).unwrap();
        assert_eq!(script.uniform(), 0.0);
        assert_eq!(script.uniform_open(), f64::MIN_POSITIVE);
    }
}
