//! Mars Orbiter - Orbit Insertion Simulator
//!
//! A library crate providing the planet/satellite simulation, its Bevy
//! plugins, and the Io plume demo, for the binaries and for testing.

pub mod config;
pub mod eccentricity;
pub mod input;
pub mod mission;
pub mod physics;
pub mod planet;
pub mod plume;
pub mod render;
pub mod satellite;
pub mod simulation;
pub mod telemetry;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
