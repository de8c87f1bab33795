//! Test utilities for the orbiter simulation.
//!
//! Provides satellite fixtures on known orbits and helpers for checking
//! orbit shape from sampled distances.

use bevy::math::DVec2;

use crate::config::OrbiterConfig;
use crate::satellite::Satellite;

/// Fixtures for creating satellites in known states.
pub mod fixtures {
    use super::*;

    /// Satellite directly above the planet on a circular orbit of `radius`.
    ///
    /// Gravity is applied as a per-tick impulse, so the discrete circular
    /// orbit is a regular polygon. The initial velocity is the chord arriving
    /// at the top vertex; after the first kick it becomes the outgoing chord.
    pub fn circular_orbit(config: &OrbiterConfig, radius: f64) -> Satellite {
        let gm = config.physics.gravitational_constant
            * config.physics.planet_mass
            * config.physics.satellite_mass;
        // 4 r sin²(φ/2) = GM / r²
        let half_angle_sin = (gm / (4.0 * radius.powi(3))).sqrt();
        let half_angle = half_angle_sin.asin();
        let chord = 2.0 * radius * half_angle_sin;

        let pos = config.physics.planet_position - DVec2::new(0.0, radius);
        // Screen y grows downward: outward from the planet is -y here
        let vel = DVec2::new(chord * half_angle.cos(), -chord * half_angle.sin());
        Satellite::new(pos, vel, config)
    }

    /// Satellite directly above the planet moving horizontally at `speed`.
    pub fn tangential(config: &OrbiterConfig, radius: f64, speed: f64) -> Satellite {
        let pos = config.physics.planet_position - DVec2::new(0.0, radius);
        Satellite::new(pos, DVec2::new(speed, 0.0), config)
    }

    /// Satellite at rest `radius` above the planet.
    pub fn at_rest(config: &OrbiterConfig, radius: f64) -> Satellite {
        tangential(config, radius, 0.0)
    }
}

/// Assertions over sampled orbits.
pub mod assertions {
    /// Smallest and largest sample.
    pub fn extremes(distances: &[f64]) -> (f64, f64) {
        distances
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| (lo.min(d), hi.max(d)))
    }

    /// Assert every sample lies within `tolerance` of `radius`.
    ///
    /// # Panics
    /// Panics if any sample strays further than the tolerance.
    pub fn assert_radius_held(distances: &[f64], radius: f64, tolerance: f64) {
        let (lo, hi) = extremes(distances);
        assert!(
            (lo - radius).abs() <= tolerance && (hi - radius).abs() <= tolerance,
            "orbit drifted from r={radius}: min={lo:.6}, max={hi:.6}, tolerance={tolerance}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::Planet;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_fixture_holds_radius() {
        let config = OrbiterConfig::default();
        let planet = Planet::new(&config.physics);
        let mut sat = fixtures::circular_orbit(&config, 100.0);

        let mut distances = Vec::new();
        for _ in 0..600 {
            planet.apply_gravity_to(&mut sat);
            sat.integrate();
            sat.locate(&planet);
            distances.push(sat.distance());
        }

        assertions::assert_radius_held(&distances, 100.0, 1e-6);
    }

    #[test]
    fn test_circular_fixture_speed() {
        let config = OrbiterConfig::default();
        let sat = fixtures::circular_orbit(&config, 100.0);
        // Chord length equals sqrt(GM / r) for the polygon orbit
        assert_relative_eq!(sat.vel().length(), (2000.0_f64 / 100.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(assertions::extremes(&[3.0, 1.0, 2.0]), (1.0, 3.0));
    }
}
