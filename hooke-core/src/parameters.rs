use uom::{
    si::{
        f64::{Force, Length, Mass, Time, Velocity},
        force::newton,
        length::meter,
        mass::kilogram,
        time::second,
        velocity::meter_per_second,
        Quantity, ISQ, SI,
    },
    typenum::{N2, P1, Z0},
};

use crate::ParameterError;

/// Stiffness: force per unit length (N/m or kg/s²).
pub type Stiffness = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Validated parameters for a single oscillator simulation run.
///
/// A `Parameters` value can only be constructed through [`Parameters::new`]
/// or [`Parameters::new_si`], both of which enforce the invariants up front:
/// stiffness, mass, time step, and total time are strictly positive, and the
/// time step is smaller than the total time. Once constructed, every scheme
/// can trust the values without re-checking them.
///
/// Initial conditions default to the "released from rest" scenario of 1 m
/// displacement and zero velocity, and can be overridden with the
/// builder-style setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Spring stiffness (N/m).
    pub stiffness: Stiffness,
    /// Oscillating mass (kg).
    pub mass: Mass,
    /// Stepping increment used by the recurrences.
    pub time_step: Time,
    /// Simulated duration.
    pub total_time: Time,
    /// Displacement at `t = 0`. Defaults to 1 m.
    pub initial_position: Length,
    /// Velocity at `t = 0`. Defaults to 0 m/s.
    pub initial_velocity: Velocity,
}

impl Parameters {
    /// Constructs validated parameters from unit-safe quantities.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any quantity is zero, negative, or
    /// not a number, or if the time step is not smaller than the total time.
    pub fn new(
        stiffness: Stiffness,
        mass: Mass,
        time_step: Time,
        total_time: Time,
    ) -> Result<Self, ParameterError> {
        ensure_positive(stiffness.value, ParameterError::NonPositiveStiffness)?;
        ensure_positive(mass.value, ParameterError::NonPositiveMass)?;
        ensure_positive(time_step.value, ParameterError::NonPositiveTimeStep)?;
        ensure_positive(total_time.value, ParameterError::NonPositiveTotalTime)?;

        if time_step.value >= total_time.value {
            return Err(ParameterError::TimeStepTooLarge {
                time_step: time_step.value,
                total_time: total_time.value,
            });
        }

        Ok(Self {
            stiffness,
            mass,
            time_step,
            total_time,
            initial_position: Length::new::<meter>(1.0),
            initial_velocity: Velocity::new::<meter_per_second>(0.0),
        })
    }

    /// Constructs validated parameters from raw SI values
    /// (N/m, kg, s, and s).
    ///
    /// # Errors
    ///
    /// Same as [`Parameters::new`].
    pub fn new_si(
        stiffness: f64,
        mass: f64,
        time_step: f64,
        total_time: f64,
    ) -> Result<Self, ParameterError> {
        Self::new(
            Force::new::<newton>(stiffness) / Length::new::<meter>(1.0),
            Mass::new::<kilogram>(mass),
            Time::new::<second>(time_step),
            Time::new::<second>(total_time),
        )
    }

    /// Sets the initial displacement using a `uom::Length`.
    #[must_use]
    pub fn initial_position(mut self, position: Length) -> Self {
        self.initial_position = position;
        self
    }

    /// Sets the initial displacement in SI units (m).
    #[must_use]
    pub fn initial_position_si(self, position: f64) -> Self {
        self.initial_position(Length::new::<meter>(position))
    }

    /// Sets the initial velocity using a `uom::Velocity`.
    #[must_use]
    pub fn initial_velocity(mut self, velocity: Velocity) -> Self {
        self.initial_velocity = velocity;
        self
    }

    /// Sets the initial velocity in SI units (m/s).
    #[must_use]
    pub fn initial_velocity_si(self, velocity: f64) -> Self {
        self.initial_velocity(Velocity::new::<meter_per_second>(velocity))
    }

    /// The number of samples a scheme produces for these parameters:
    /// `floor(total_time / time_step)`.
    ///
    /// Always at least 1, since construction enforces
    /// `time_step < total_time`.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        (self.total_time / self.time_step).value.floor() as usize
    }
}

/// Checks that a raw SI value is strictly positive.
///
/// Zero, negative, and NaN values are all rejected.
fn ensure_positive(value: f64, error: fn(f64) -> ParameterError) -> Result<(), ParameterError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(error(value))
    }
}
