use thiserror::Error;

/// Error type returned when simulation parameters are invalid.
///
/// Every variant names the violated precondition and carries the offending
/// value. Validation happens before any stepping begins, so a failed call
/// never produces a partial [`TimeSeries`](crate::TimeSeries).
///
/// Numerically divergent output is *not* an error: the explicit Euler
/// scheme's amplitude growth is its documented behavior.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("stiffness must be greater than zero, got {0} N/m")]
    NonPositiveStiffness(f64),

    #[error("mass must be greater than zero, got {0} kg")]
    NonPositiveMass(f64),

    #[error("time step must be greater than zero, got {0} s")]
    NonPositiveTimeStep(f64),

    #[error("total time must be greater than zero, got {0} s")]
    NonPositiveTotalTime(f64),

    #[error("time step ({time_step} s) must be smaller than the total time ({total_time} s)")]
    TimeStepTooLarge { time_step: f64, total_time: f64 },

    #[error("{scheme} needs at least {required} steps, got {actual}")]
    TooFewSteps {
        scheme: &'static str,
        required: usize,
        actual: usize,
    },
}
