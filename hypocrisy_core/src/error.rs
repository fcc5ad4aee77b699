//! Parameter validation errors.

use thiserror::Error;

/// Reasons a set of simulation parameters is rejected before any run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// The ensemble must contain at least one run
    #[error("Number of runs must be positive, got {0}")]
    NoRuns(u64),

    /// The population must contain at least one agent
    #[error("Number of agents must be positive, got {0}")]
    EmptyPopulation(i64),

    /// A rate constant is negative, zero where it must be positive, or not finite
    #[error("Invalid rate {name} = {value}: must be {requirement}")]
    InvalidRate {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// An initial count lies outside its combinatorial range
    #[error("Invalid initial conditions: {name} = {value} outside [{min}, {max}]")]
    CountOutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ParamError {
    /// Checks that `value` lies in `[min, max]`.
    pub fn check_count(name: &'static str, value: i64, min: i64, max: i64) -> Result<(), Self> {
        if value < min || value > max {
            return Err(Self::CountOutOfRange { name, value, min, max });
        }
        Ok(())
    }

    /// Checks that a rate is finite and strictly positive.
    pub fn check_positive_rate(name: &'static str, value: f64) -> Result<(), Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Self::InvalidRate {
                name,
                value,
                requirement: "finite and positive",
            });
        }
        Ok(())
    }

    /// Checks that a rate is finite and not negative.
    pub fn check_non_negative_rate(name: &'static str, value: f64) -> Result<(), Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Self::InvalidRate {
                name,
                value,
                requirement: "finite and non-negative",
            });
        }
        Ok(())
    }

    /// Checks that the population is not empty.
    pub fn check_population(n: i64) -> Result<(), Self> {
        if n < 1 {
            return Err(Self::EmptyPopulation(n));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bounds_are_inclusive() {
        assert!(ParamError::check_count("nr_init", 0, 0, 10).is_ok());
        assert!(ParamError::check_count("nr_init", 10, 0, 10).is_ok());
        assert_eq!(
            ParamError::check_count("nr_init", 11, 0, 10),
            Err(ParamError::CountOutOfRange { name: "nr_init", value: 11, min: 0, max: 10 })
        );
    }

    #[test]
    fn test_rate_checks() {
        assert!(ParamError::check_positive_rate("rc", 0.5).is_ok());
        assert!(ParamError::check_positive_rate("rc", 0.0).is_err());
        assert!(ParamError::check_positive_rate("rc", f64::NAN).is_err());
        assert!(ParamError::check_non_negative_rate("re", 0.0).is_ok());
        assert!(ParamError::check_non_negative_rate("re", -1e-9).is_err());
        assert!(ParamError::check_non_negative_rate("re", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ParamError::CountOutOfRange { name: "nrr_init", value: 4, min: 0, max: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid initial conditions: nrr_init = 4 outside [0, 3]"
        );
        assert_eq!(
            ParamError::NoRuns(0).to_string(),
            "Number of runs must be positive, got 0"
        );
    }
}
