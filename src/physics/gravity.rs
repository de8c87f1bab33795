//! Point-mass gravity between the planet and the satellite.
//!
//! The game applies gravity as a per-tick velocity impulse rather than an
//! acceleration scaled by a timestep: each tick the satellite's velocity
//! grows by `G * m1 * m2 / r²` along the unit vector toward the planet.

use bevy::math::DVec2;

/// Velocity impulse exerted on a satellite at `satellite_pos` by a planet at
/// `planet_pos`.
///
/// Distances below `min_distance` are clamped to it so the magnitude stays
/// finite. Returns `None` when the two positions coincide exactly, since there
/// is no direction to pull in.
///
/// # Arguments
/// * `satellite_pos` - Satellite position in simulation units
/// * `planet_pos` - Planet position in simulation units
/// * `g` - Gravitational constant in simulation units
/// * `satellite_mass` - Mass of the attracted body
/// * `planet_mass` - Mass of the attracting body
/// * `min_distance` - Lower clamp for the distance used in the force law
#[inline]
pub fn gravity_impulse(
    satellite_pos: DVec2,
    planet_pos: DVec2,
    g: f64,
    satellite_mass: f64,
    planet_mass: f64,
    min_distance: f64,
) -> Option<DVec2> {
    let delta = planet_pos - satellite_pos;
    let distance = delta.length();
    if distance == 0.0 || !distance.is_finite() {
        return None;
    }

    let unit = delta / distance;
    let r = distance.max(min_distance);
    let force = g * (satellite_mass * planet_mass) / (r * r);

    Some(unit * force)
}
