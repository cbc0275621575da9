//! Integrates the reference scenario with both schemes and overlays the
//! position curves. Euler's amplitude grows visibly over the 20 s horizon
//! while Verlet's stays bounded.

use hooke_core::{Euler, Parameters, Scheme, Verlet};
use hooke_plot::PlotApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 10 N/m spring with a 1 kg mass, released from 1 m at rest,
    // stepped at 10 ms for 20 s.
    let parameters = Parameters::new_si(10.0, 1.0, 0.01, 20.0)?;

    let euler = Euler.integrate(&parameters)?;
    let verlet = Verlet.integrate(&parameters)?;

    let app = PlotApp::new()
        .title("Position vs. Time for a Harmonic Oscillator")
        .x_label("Time (s)")
        .y_label("Position (m)")
        .add_series(Euler.label(), &euler.position_points())
        .add_series(Verlet.label(), &verlet.position_points());

    app.run("Harmonic Oscillator")?;

    Ok(())
}
