//! Position integration for the satellite.
//!
//! The game advances position with a plain Euler step: one tick moves the
//! satellite by exactly its current velocity, with no damping.

use bevy::math::DVec2;

use crate::types::TrailSegment;

/// Advance `pos` by one tick of `vel` and report the path taken.
#[inline]
pub fn euler_step(pos: DVec2, vel: DVec2) -> (DVec2, TrailSegment) {
    let next = pos + vel;
    (next, TrailSegment { start: pos, end: next })
}
