//! Shared value types and display constants.
//!
//! Simulation coordinates are screen pixels standing in for miles, with the
//! origin at the top-left corner and y growing downward.

use bevy::math::{DVec2, Vec2};

/// Width of the play field in simulation units.
pub const FIELD_WIDTH: f64 = 800.0;

/// Height of the play field in simulation units.
pub const FIELD_HEIGHT: f64 = 645.0;

/// One step of the satellite's path, from its previous to its new position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub start: DVec2,
    pub end: DVec2,
}

impl TrailSegment {
    /// Length of the segment, i.e. the distance travelled in one tick.
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }
}

/// Convert a screen position (y down, origin top-left) on a screen of
/// `size` to Bevy world space (y up, origin at the screen center).
#[allow(clippy::cast_possible_truncation)]
pub fn screen_to_world(pos: DVec2, size: DVec2) -> Vec2 {
    Vec2::new((pos.x - size.x / 2.0) as f32, (size.y / 2.0 - pos.y) as f32)
}

/// [`screen_to_world`] for the orbiter's play field.
pub fn field_to_world(pos: DVec2) -> Vec2 {
    screen_to_world(pos, DVec2::new(FIELD_WIDTH, FIELD_HEIGHT))
}
