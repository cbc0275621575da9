use crate::{series::linspace, ParameterError, Parameters, Scheme, TimeSeries};

/// Explicit Euler stepping for the harmonic oscillator.
///
/// Each step computes the spring acceleration from the previous position and
/// advances velocity and position together:
///
/// ```text
///   a          = -k * x[i-1] / m
///   v[i]       = v[i-1] + a * dt
///   x[i]       = x[i-1] + v[i-1] * dt
/// ```
///
/// The position update uses the *pre-update* velocity, which makes this plain
/// explicit Euler rather than the symplectic variant. For oscillatory motion
/// the scheme gains energy every step, so the amplitude grows without bound
/// as the horizon lengthens. That growth is the documented behavior of the
/// scheme, not a fault; shrinking the time step slows it but never removes it.
#[derive(Debug)]
pub struct Euler;

impl Scheme for Euler {
    fn integrate(&self, parameters: &Parameters) -> Result<TimeSeries, ParameterError> {
        let n = parameters.num_steps();
        if n < 1 {
            return Err(ParameterError::TooFewSteps {
                scheme: self.label(),
                required: 1,
                actual: n,
            });
        }

        let k = parameters.stiffness.value;
        let m = parameters.mass.value;
        let dt = parameters.time_step.value;

        let mut position = vec![0.0; n];
        let mut velocity = vec![0.0; n];
        position[0] = parameters.initial_position.value;
        velocity[0] = parameters.initial_velocity.value;

        for i in 1..n {
            let acceleration = -k * position[i - 1] / m;

            velocity[i] = velocity[i - 1] + acceleration * dt;
            position[i] = position[i - 1] + velocity[i - 1] * dt;
        }

        let time = linspace(0.0, parameters.total_time.value, n);

        Ok(TimeSeries::new(time, position, velocity))
    }

    fn label(&self) -> &'static str {
        "Euler Integration"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn first_steps_match_the_recurrence_by_hand() {
        // k = 10 N/m, m = 1 kg, dt = 0.25 s, 1 s horizon: four samples.
        let parameters = Parameters::new_si(10.0, 1.0, 0.25, 1.0).unwrap();
        let series = Euler.integrate(&parameters).unwrap();

        assert_eq!(series.len(), 4);

        // x: released from rest at 1 m.
        assert_eq!(series.position()[0], 1.0);
        assert_eq!(series.velocity()[0], 0.0);

        // Step 1: a = -10, v = -2.5, x advances with v[0] = 0.
        assert_relative_eq!(series.velocity()[1], -2.5);
        assert_relative_eq!(series.position()[1], 1.0);

        // Step 2: a = -10 (x[1] is still 1), v = -5, x = 1 - 2.5 * 0.25.
        assert_relative_eq!(series.velocity()[2], -5.0);
        assert_relative_eq!(series.position()[2], 0.375);

        // Step 3: a = -3.75, v = -5.9375, x = 0.375 - 5 * 0.25.
        assert_relative_eq!(series.velocity()[3], -5.9375);
        assert_relative_eq!(series.position()[3], -0.875);
    }

    #[test]
    fn time_spans_the_full_horizon() {
        let parameters = Parameters::new_si(10.0, 1.0, 0.01, 20.0).unwrap();
        let series = Euler.integrate(&parameters).unwrap();

        let time = series.time();
        assert_eq!(time.len(), parameters.num_steps());
        assert_eq!(time[0], 0.0);
        assert_relative_eq!(time[time.len() - 1], 20.0);
        assert!(time.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn all_sequences_have_equal_length() {
        let parameters = Parameters::new_si(10.0, 1.0, 0.01, 20.0).unwrap();
        let series = Euler.integrate(&parameters).unwrap();

        assert_eq!(series.time().len(), series.position().len());
        assert_eq!(series.time().len(), series.velocity().len());
    }

    #[test]
    fn a_single_step_run_is_valid() {
        // floor(1.0 / 0.6) = 1: just the initial sample.
        let parameters = Parameters::new_si(10.0, 1.0, 0.6, 1.0).unwrap();
        let series = Euler.integrate(&parameters).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.position(), &[1.0]);
        assert_eq!(series.velocity(), &[0.0]);
    }

    #[test]
    fn custom_initial_conditions_are_honored() {
        let parameters = Parameters::new_si(10.0, 1.0, 0.25, 1.0)
            .unwrap()
            .initial_position_si(0.5)
            .initial_velocity_si(2.0);
        let series = Euler.integrate(&parameters).unwrap();

        assert_eq!(series.position()[0], 0.5);
        assert_eq!(series.velocity()[0], 2.0);

        // x[1] uses the pre-update velocity: 0.5 + 2 * 0.25.
        assert_relative_eq!(series.position()[1], 1.0);
    }

    #[test]
    fn identical_parameters_give_identical_output() {
        let parameters = Parameters::new_si(10.0, 1.0, 0.01, 20.0).unwrap();

        let first = Euler.integrate(&parameters).unwrap();
        let second = Euler.integrate(&parameters).unwrap();

        assert_eq!(first, second);
    }
}
