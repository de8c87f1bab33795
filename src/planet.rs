//! The attracting body: Mars.
//!
//! The planet never moves translationally. It only spins slowly for display
//! and pulls on the satellite every tick.

use bevy::log::warn;
use bevy::math::DVec2;

use crate::config::PhysicsConfig;
use crate::physics::gravity_impulse;
use crate::satellite::Satellite;

/// Fixed point mass with a display rotation.
#[derive(Clone, Debug)]
pub struct Planet {
    pos: DVec2,
    mass: f64,
    /// Rotation in degrees. Grows without bound; renderers take the modulo.
    angle: f64,
    rotate_by: f64,
    g: f64,
    min_distance: f64,
}

impl Planet {
    /// Create the planet described by `config`, with zero rotation.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            pos: config.planet_position,
            mass: config.planet_mass,
            angle: 0.0,
            rotate_by: config.rotation_per_tick,
            g: config.gravitational_constant,
            min_distance: config.min_gravity_distance,
        }
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Current rotation in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Add this tick's gravitational pull to the satellite's velocity.
    ///
    /// Returns the impulse applied. A satellite sitting exactly on the
    /// planet's center receives nothing.
    pub fn apply_gravity_to(&self, satellite: &mut Satellite) -> DVec2 {
        match gravity_impulse(
            satellite.pos(),
            self.pos,
            self.g,
            satellite.mass(),
            self.mass,
            self.min_distance,
        ) {
            Some(impulse) => {
                satellite.add_velocity(impulse);
                impulse
            }
            None => {
                warn!(
                    "Satellite at planet center ({:.1}, {:.1}), skipping gravity",
                    self.pos.x, self.pos.y
                );
                DVec2::ZERO
            }
        }
    }

    /// Spin the planet by one tick's increment.
    pub fn advance_rotation(&mut self) {
        self.angle += self.rotate_by;
    }
}
