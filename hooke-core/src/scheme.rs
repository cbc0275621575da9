use crate::{ParameterError, Parameters, TimeSeries};

/// A trait for fixed-step time integration schemes.
///
/// A `Scheme` advances the oscillator state from the initial conditions in
/// [`Parameters`] over the full simulated duration and returns the complete
/// [`TimeSeries`] in one call. Implementations are pure functions of their
/// input: no internal state, no side effects, and bit-identical output for
/// identical parameters.
///
/// # Example Implementations
///
/// - [`Euler`](crate::schemes::Euler): first-order explicit stepping.
/// - [`Verlet`](crate::schemes::Verlet): second-order position recurrence.
pub trait Scheme {
    /// Integrates the oscillator over `[0, total_time]`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::TooFewSteps`] if the derived step count is
    /// below the scheme's minimum. All other parameter invariants are
    /// enforced when the [`Parameters`] value is constructed.
    fn integrate(&self, parameters: &Parameters) -> Result<TimeSeries, ParameterError>;

    /// A human-readable name for legends and reports.
    fn label(&self) -> &'static str;
}
