/// The sampled result of one simulation run.
///
/// Holds three equal-length sequences (time, position, and velocity)
/// indexed by discrete step. A `TimeSeries` is fully computed before it is
/// returned and is owned exclusively by the caller; schemes never share or
/// reuse buffers across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    time: Vec<f64>,
    position: Vec<f64>,
    velocity: Vec<f64>,
}

impl TimeSeries {
    pub(crate) fn new(time: Vec<f64>, position: Vec<f64>, velocity: Vec<f64>) -> Self {
        debug_assert_eq!(time.len(), position.len());
        debug_assert_eq!(time.len(), velocity.len());

        Self {
            time,
            position,
            velocity,
        }
    }

    /// Sample instants in seconds.
    ///
    /// The samples are evenly spaced over `[0, total_time]`, so their spacing
    /// is `total_time / (len - 1)`. This matches the stepping increment only
    /// when the step count divides the duration evenly; the recurrences
    /// themselves always advance in multiples of the configured time step.
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Positions in meters, one per sample instant.
    #[must_use]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Velocities in meters per second, one per sample instant.
    #[must_use]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// The number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Position-vs-time samples as `[t, x]` pairs, the shape plotting
    /// backends consume.
    #[must_use]
    pub fn position_points(&self) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(&self.position)
            .map(|(&t, &x)| [t, x])
            .collect()
    }

    /// Velocity-vs-time samples as `[t, v]` pairs.
    #[must_use]
    pub fn velocity_points(&self) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(&self.velocity)
            .map(|(&t, &v)| [t, v])
            .collect()
    }
}

/// Returns `len` evenly spaced samples over `[start, end]`, endpoints
/// included. A single-sample request yields just `start`.
pub(crate) fn linspace(start: f64, end: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (len - 1) as f64;
            let mut samples: Vec<f64> = (0..len).map(|i| start + step * i as f64).collect();
            samples[len - 1] = end;
            samples
        }
    }
}
