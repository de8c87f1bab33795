//! Physics for the planet/satellite pair.
//!
//! Pure functions only; the tick driver in [`crate::simulation`] decides
//! when each one runs.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use gravity::gravity_impulse;
pub use integrator::euler_step;
