//! The two integration schemes under comparison.

mod euler;
mod verlet;

pub use euler::Euler;
pub use verlet::Verlet;
