//! Fixed-step integration schemes for a one-dimensional harmonic oscillator.
//!
//! This crate integrates the equation of motion of an undamped point mass on
//! a linear spring with two explicit schemes that share the same inputs but
//! behave very differently over long horizons:
//!
//! - [`Euler`]: explicit Euler stepping, whose oscillation amplitude grows
//!   over time for any fixed step size.
//! - [`Verlet`]: the basic (position) Störmer–Verlet recurrence, which stays
//!   bounded for the same parameters.
//!
//! Both are pure functions of a [`Parameters`] value and produce a
//! [`TimeSeries`] of time, position, and velocity samples that the caller
//! owns outright. Rendering the results is left to an external collaborator
//! such as `hooke-plot`.
//!
//! # Usage
//!
//! ```
//! use hooke_core::{Euler, Parameters, Scheme, Verlet};
//!
//! // A 10 N/m spring with a 1 kg mass, stepped at 10 ms for 20 s.
//! let parameters = Parameters::new_si(10.0, 1.0, 0.01, 20.0)?;
//!
//! let euler = Euler.integrate(&parameters)?;
//! let verlet = Verlet.integrate(&parameters)?;
//!
//! assert_eq!(euler.len(), verlet.len());
//! # Ok::<(), hooke_core::ParameterError>(())
//! ```
//!
//! Initial conditions default to the "released from rest" scenario (1 m of
//! displacement, zero velocity) and can be overridden with the builder-style
//! setters on [`Parameters`].

mod error;
mod parameters;
mod scheme;
pub mod schemes;
mod series;

pub use error::ParameterError;
pub use parameters::{Parameters, Stiffness};
pub use scheme::Scheme;
pub use schemes::{Euler, Verlet};
pub use series::TimeSeries;
