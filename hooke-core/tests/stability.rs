//! Characterization of the two schemes on the reference scenario:
//! a 10 N/m spring, 1 kg mass, 10 ms steps, 20 s horizon.

use hooke_core::{Euler, Parameters, Scheme, Verlet};

fn reference_parameters() -> Parameters {
    Parameters::new_si(10.0, 1.0, 0.01, 20.0).unwrap()
}

fn max_abs(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |max, x| max.max(x.abs()))
}

#[test]
fn verlet_amplitude_stays_bounded() {
    let series = Verlet.integrate(&reference_parameters()).unwrap();

    let peak = max_abs(series.position());
    assert!(
        peak <= 2.0,
        "Verlet peak amplitude {peak} exceeded twice the initial displacement"
    );
    assert!(peak > 0.9, "Verlet peak amplitude {peak} decayed unexpectedly");
}

#[test]
fn euler_amplitude_diverges() {
    let series = Euler.integrate(&reference_parameters()).unwrap();

    let peak = max_abs(series.position());
    assert!(
        peak > 2.0,
        "Euler peak amplitude {peak} stayed within twice the initial displacement"
    );
}

#[test]
fn euler_crosses_the_bound_well_before_the_horizon() {
    let series = Euler.integrate(&reference_parameters()).unwrap();

    let crossing = series
        .position()
        .iter()
        .position(|x| x.abs() > 2.0)
        .expect("Euler amplitude never exceeded the bound");

    let t = series.time()[crossing];
    assert!(
        t < 0.9 * 20.0,
        "Euler first exceeded the bound at t = {t} s, too close to the horizon"
    );
}

#[test]
fn refining_the_time_step_slows_euler_growth() {
    let coarse = Euler.integrate(&reference_parameters()).unwrap();
    let fine = Euler
        .integrate(&Parameters::new_si(10.0, 1.0, 0.001, 20.0).unwrap())
        .unwrap();

    let coarse_peak = max_abs(coarse.position());
    let fine_peak = max_abs(fine.position());

    assert!(
        fine_peak < coarse_peak,
        "10x smaller steps should shrink Euler's amplitude growth \
         (fine {fine_peak} vs coarse {coarse_peak})"
    );
    assert!(fine_peak < 1.25);
}

#[test]
fn both_schemes_sample_the_same_instants() {
    let parameters = reference_parameters();

    let euler = Euler.integrate(&parameters).unwrap();
    let verlet = Verlet.integrate(&parameters).unwrap();

    assert_eq!(euler.time(), verlet.time());
}
