//! Runnable drivers live in this package's `examples/` directory.
//!
//! - `harmonic_oscillator`: integrates the reference scenario with both
//!   schemes and overlays the position curves.
