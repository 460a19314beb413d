//! Step-level errors.

use std::error::Error;
use std::fmt;

/// Rejected input to `Simulation::step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepError {
    /// The frame delta was NaN, infinite, or negative. A non-finite delta
    /// would poison the spring-damped grid state, so the step validates
    /// before mutating anything.
    InvalidDelta { dt_secs: f64 },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::InvalidDelta { dt_secs } => {
                write!(
                    f,
                    "invalid frame delta {dt_secs}: must be finite and non-negative"
                )
            }
        }
    }
}

impl Error for StepError {}
