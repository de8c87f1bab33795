//! Per-tick telemetry handed to rendering and audio.
//!
//! One [`Telemetry`] snapshot is produced per simulation tick. It carries
//! everything a collaborator draws or plays, so nothing outside the
//! simulation needs to read its internals.

use bevy::math::DVec2;
use bevy::prelude::Message;

use crate::mission::MissionStatus;
use crate::types::TrailSegment;

/// Snapshot of the simulation after one tick.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct Telemetry {
    /// Tick number, starting at 1.
    pub tick: u64,
    pub satellite_pos: DVec2,
    pub satellite_vel: DVec2,
    /// Sprite heading in degrees.
    pub heading: f64,
    pub planet_pos: DVec2,
    /// Planet rotation in degrees.
    pub planet_angle: f64,
    /// Path travelled this tick.
    pub trail: TrailSegment,
    pub fuel: u32,
    pub distance: f64,
    pub eccentricity: f64,
    pub status: MissionStatus,
    pub crashed: bool,
    /// A thruster fired this tick (drives the thrust sound).
    pub thrust_fired: bool,
}

/// Sent on every tick in which a thruster fired.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrustFired {
    pub tick: u64,
    /// Fuel left after the burn.
    pub fuel: u32,
}

/// Formatted readout strings, one per display box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readouts {
    pub dx: String,
    pub dy: String,
    pub altitude: String,
    pub fuel: String,
    pub eccentricity: String,
}

impl Telemetry {
    /// Readouts at display precision: velocity and altitude to one decimal,
    /// eccentricity to eight.
    pub fn readouts(&self) -> Readouts {
        Readouts {
            dx: format!("{:.1}", self.satellite_vel.x),
            dy: format!("{:.1}", self.satellite_vel.y),
            altitude: format!("{:.1}", self.distance),
            fuel: self.fuel.to_string(),
            eccentricity: format!("{:.8}", self.eccentricity),
        }
    }
}
