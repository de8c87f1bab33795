//! Property-based tests for the orbiter physics using proptest.
//!
//! These tests check the invariants that hold for any satellite state,
//! not just the hand-picked fixtures.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{euler_step, gravity_impulse};
use crate::config::{MissionConfig, OrbiterConfig};
use crate::eccentricity::calc_eccentricity;
use crate::mission::{MissionStatus, evaluate_mission};
use crate::planet::Planet;
use crate::satellite::Satellite;

fn position() -> impl Strategy<Value = DVec2> {
    (0.0f64..800.0, 0.0f64..645.0).prop_map(|(x, y)| DVec2::new(x, y))
}

fn velocity() -> impl Strategy<Value = DVec2> {
    (-5.0f64..5.0, -5.0f64..5.0).prop_map(|(x, y)| DVec2::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Gravity always pulls the satellite toward the planet.
    #[test]
    fn prop_gravity_points_at_planet(sat in position()) {
        let planet = DVec2::new(400.0, 320.0);
        prop_assume!(sat.distance(planet) > 1e-6);

        let impulse = gravity_impulse(sat, planet, 1.0, 1.0, 2000.0, 1.0);
        prop_assert!(impulse.is_some());
        let impulse = impulse.unwrap_or_default();
        prop_assert!(impulse.dot(planet - sat) > 0.0);
    }

    /// Outside the clamp radius the impulse follows the inverse square law.
    #[test]
    fn prop_gravity_inverse_square(r in 2.0f64..300.0, angle in 0.0f64..std::f64::consts::TAU) {
        let planet = DVec2::new(400.0, 320.0);
        let sat = planet + DVec2::from_angle(angle) * r;

        let near = gravity_impulse(sat, planet, 1.0, 1.0, 2000.0, 1.0).unwrap_or_default();
        let far = gravity_impulse(planet + (sat - planet) * 2.0, planet, 1.0, 1.0, 2000.0, 1.0)
            .unwrap_or_default();

        prop_assert!((near.length() / far.length() - 4.0).abs() < 1e-9);
    }

    /// An Euler step moves by exactly the velocity and reports that move.
    #[test]
    fn prop_euler_step_segment(pos in position(), vel in velocity()) {
        let (next, segment) = euler_step(pos, vel);
        prop_assert_eq!(segment.start, pos);
        prop_assert_eq!(segment.end, next);
        prop_assert!((segment.length() - vel.length()).abs() < 1e-9);
    }

    /// Eccentricity of any positive window lies in [0, 1).
    #[test]
    fn prop_eccentricity_bounded(distances in prop::collection::vec(0.1f64..1000.0, 1..300)) {
        let e = calc_eccentricity(&distances);
        prop_assert!(e.is_some());
        let e = e.unwrap_or(f64::NAN);
        prop_assert!((0.0..1.0).contains(&e), "eccentricity {} out of range", e);
    }

    /// A window of identical samples is perfectly circular.
    #[test]
    fn prop_constant_window_is_circular(d in 0.1f64..1000.0, n in 1usize..300) {
        prop_assert_eq!(calc_eccentricity(&vec![d; n]), Some(0.0));
    }

    /// Any spread in the window gives a positive eccentricity.
    #[test]
    fn prop_spread_window_is_eccentric(d in 1.0f64..1000.0, spread in 0.01f64..100.0) {
        let e = calc_eccentricity(&[d, d + spread, d]).unwrap_or(0.0);
        prop_assert!(e > 0.0);
    }

    /// Status evaluation is total and honours its precedence.
    #[test]
    fn prop_status_precedence(fuel in 0u32..120, distance in 0.0f64..400.0, ecc in 0.0f64..1.0) {
        let config = MissionConfig::default();
        let status = evaluate_mission(fuel, distance, ecc, &config);

        let expected = if fuel == 0 {
            MissionStatus::FuelDepleted
        } else if distance <= config.atmosphere_distance {
            MissionStatus::AtmosphericEntry
        } else if ecc < config.mapping_max_eccentricity
            && (config.mapping_min_distance..=config.mapping_max_distance).contains(&distance)
        {
            MissionStatus::MappingEnabled
        } else {
            MissionStatus::Nominal
        };
        prop_assert_eq!(status, expected);
    }

    /// Fuel never rises and never underflows, whatever is fired.
    #[test]
    fn prop_fuel_monotonic(
        initial in 0u32..120,
        burns in prop::collection::vec(velocity(), 0..80),
    ) {
        let mut config = OrbiterConfig::default();
        config.thrust.initial_fuel = initial;
        let mut sat = Satellite::new(DVec2::new(400.0, 200.0), DVec2::ZERO, &config);

        let mut previous = sat.fuel();
        for delta in burns {
            let fired = sat.apply_thrust(delta);
            prop_assert!(sat.fuel() <= previous);
            prop_assert_eq!(fired, previous > 0);
            previous = sat.fuel();
        }
    }

    /// Locating twice gives the same distance and heading as once.
    #[test]
    fn prop_locate_idempotent(pos in position(), vel in velocity()) {
        let config = OrbiterConfig::default();
        let planet = Planet::new(&config.physics);
        let mut sat = Satellite::new(pos, vel, &config);

        sat.locate(&planet);
        let once = (sat.distance(), sat.heading());
        sat.locate(&planet);
        prop_assert_eq!((sat.distance(), sat.heading()), once);
        prop_assert!((sat.distance() - pos.distance(planet.pos())).abs() < 1e-9);
    }
}
