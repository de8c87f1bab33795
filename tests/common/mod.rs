//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use mars_orbiter::config::OrbiterConfig;
use mars_orbiter::input::InputEvent;
use mars_orbiter::satellite::Satellite;
use mars_orbiter::simulation::Simulation;
use mars_orbiter::telemetry::Telemetry;

/// Satellite directly above the planet on the discrete circular orbit of
/// `radius`, where each tick's gravity kick turns the chord by one vertex.
pub fn circular_orbit(config: &OrbiterConfig, radius: f64) -> Satellite {
    let gm = config.physics.gravitational_constant
        * config.physics.planet_mass
        * config.physics.satellite_mass;
    let half_angle_sin = (gm / (4.0 * radius.powi(3))).sqrt();
    let half_angle = half_angle_sin.asin();
    let chord = 2.0 * radius * half_angle_sin;

    let pos = config.physics.planet_position - DVec2::new(0.0, radius);
    let vel = DVec2::new(chord * half_angle.cos(), -chord * half_angle.sin());
    Satellite::new(pos, vel, config)
}

/// Satellite at rest `radius` above the planet.
pub fn at_rest(config: &OrbiterConfig, radius: f64) -> Satellite {
    let pos = config.physics.planet_position - DVec2::new(0.0, radius);
    Satellite::new(pos, DVec2::ZERO, config)
}

/// Simulation with default config around `satellite`.
pub fn simulation_with(satellite: impl FnOnce(&OrbiterConfig) -> Satellite) -> Simulation {
    let config = OrbiterConfig::default();
    let satellite = satellite(&config);
    match Simulation::with_satellite(config, satellite) {
        Ok(sim) => sim,
        Err(err) => panic!("default config rejected: {err}"),
    }
}

/// Step `ticks` times with no input, returning every tick's telemetry.
pub fn run_idle(sim: &mut Simulation, ticks: usize) -> Vec<Telemetry> {
    (0..ticks).map(|_| sim.step(&[])).collect()
}

/// Step once per entry of `inputs`.
pub fn run_inputs(sim: &mut Simulation, inputs: &[Vec<InputEvent>]) -> Vec<Telemetry> {
    inputs.iter().map(|tick| sim.step(tick)).collect()
}
