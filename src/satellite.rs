//! The attracted body: the mapping satellite.
//!
//! Holds the satellite's kinematic state, its propellant, and the polar
//! state (distance and heading) derived from the planet's position.

use bevy::math::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::OrbiterConfig;
use crate::physics::euler_step;
use crate::planet::Planet;
use crate::types::TrailSegment;

/// Offset applied to the raw bearing so the sprite's antenna faces the
/// planet (the sprite flies tail-first).
const HEADING_OFFSET_DEG: f64 = 90.0;

/// Satellite state, advanced once per tick by the simulation.
#[derive(Clone, Debug)]
pub struct Satellite {
    pos: DVec2,
    vel: DVec2,
    mass: f64,
    fuel: u32,
    fuel_cost: u32,
    /// Distance to the planet as of the last [`Satellite::locate`].
    distance: f64,
    /// Sprite heading in degrees as of the last [`Satellite::locate`].
    heading: f64,
}

impl Satellite {
    /// Create a satellite at a known position and velocity with a full tank.
    ///
    /// Distance and heading stay zero until the first [`Satellite::locate`].
    pub fn new(pos: DVec2, vel: DVec2, config: &OrbiterConfig) -> Self {
        Self {
            pos,
            vel,
            mass: config.physics.satellite_mass,
            fuel: config.thrust.initial_fuel,
            fuel_cost: config.thrust.fuel_cost,
            distance: 0.0,
            heading: 0.0,
        }
    }

    /// Create a satellite at a random position within the spawn ranges,
    /// moving horizontally in a random direction.
    ///
    /// The draw depends only on `config.spawn.seed`.
    pub fn spawn(config: &OrbiterConfig) -> Self {
        let spawn = &config.spawn;
        let mut rng = StdRng::seed_from_u64(spawn.seed);

        let x = rng.random_range(spawn.x_range.clone());
        let y = rng.random_range(spawn.y_range.clone());
        let dx = if rng.random_bool(0.5) { -spawn.speed } else { spawn.speed };

        Self::new(
            DVec2::new(f64::from(x), f64::from(y)),
            DVec2::new(dx, 0.0),
            config,
        )
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn vel(&self) -> DVec2 {
        self.vel
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// A satellite with exactly zero velocity has burned up in the atmosphere.
    pub fn is_crashed(&self) -> bool {
        self.vel.x == 0.0 && self.vel.y == 0.0
    }

    /// Fire the thrusters, changing velocity by `delta` and burning fuel.
    ///
    /// Fuel is floored at zero. With an empty tank nothing happens and
    /// `false` is returned.
    pub fn apply_thrust(&mut self, delta: DVec2) -> bool {
        if self.fuel == 0 {
            return false;
        }
        self.vel += delta;
        self.fuel = self.fuel.saturating_sub(self.fuel_cost);
        true
    }

    /// Recompute distance and heading relative to `planet`.
    ///
    /// The heading is the bearing from `atan2(dx, dy)` in degrees, minus
    /// the sprite's 90° offset. Converted as `r * 180 / π` rather than
    /// [`f64::to_degrees`], whose rounding differs in the last bit.
    pub fn locate(&mut self, planet: &Planet) {
        let dist = self.pos - planet.pos();
        let bearing = dist.x.atan2(dist.y) * 180.0 / std::f64::consts::PI;
        self.heading = bearing - HEADING_OFFSET_DEG;
        self.distance = dist.x.hypot(dist.y);
    }

    /// Move one tick along the current velocity.
    pub fn integrate(&mut self) -> TrailSegment {
        let (next, segment) = euler_step(self.pos, self.vel);
        self.pos = next;
        segment
    }

    pub(crate) fn add_velocity(&mut self, delta: DVec2) {
        self.vel += delta;
    }

    pub(crate) fn set_velocity(&mut self, vel: DVec2) {
        self.vel = vel;
    }
}
