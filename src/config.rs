//! Immutable configuration for the orbiter simulation.
//!
//! Every tunable the simulation reads lives here, grouped by concern.
//! The defaults reproduce the classic Mars orbiter game: a 2000-mass planet
//! at (400, 320) in screen coordinates, a 30 Hz tick, and a 5 second
//! eccentricity sampling window.

use std::ops::Range;

use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::input::ThrustPolicy;

/// Errors raised when a configuration cannot drive a simulation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tick rate must be positive and finite, got {0}")]
    InvalidTickRate(f64),

    #[error("sampling interval of {seconds} s at {tick_rate} Hz is shorter than one tick")]
    SamplingIntervalTooShort { seconds: f64, tick_rate: f64 },

    #[error("{name} must be non-negative and finite, got {value}")]
    NegativeValue { name: &'static str, value: f64 },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveValue { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFiniteValue { name: &'static str, value: f64 },

    #[error("mapping band is inverted ({min} > {max})")]
    InvertedMappingBand { min: f64, max: f64 },

    #[error("launch angle range is inverted ({min}° > {max}°)")]
    InvertedAngleRange { min: f64, max: f64 },

    #[error("spawn range for {axis} is empty ({start}..{end})")]
    EmptySpawnRange { axis: char, start: i32, end: i32 },
}

/// Gravity and rotation constants.
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravitational constant in simulation units.
    pub gravitational_constant: f64,
    /// Mass of the attracting planet.
    pub planet_mass: f64,
    /// Mass of the orbiting satellite.
    pub satellite_mass: f64,
    /// Fixed planet position (screen coordinates, y grows downward).
    pub planet_position: DVec2,
    /// Planet rotation per tick, in degrees.
    pub rotation_per_tick: f64,
    /// Gravity treats any closer distance as this one.
    pub min_gravity_distance: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 1.0,
            planet_mass: 2000.0,
            satellite_mass: 1.0,
            planet_position: DVec2::new(400.0, 320.0),
            rotation_per_tick: 0.01_f64.to_degrees(),
            min_gravity_distance: 1.0,
        }
    }
}

/// Thruster behavior.
#[derive(Clone, Debug)]
pub struct ThrustConfig {
    /// Velocity change per thrust event along one axis.
    pub step: f64,
    /// Fuel consumed by each thrust event.
    pub fuel_cost: u32,
    /// Fuel at launch.
    pub initial_fuel: u32,
    /// How simultaneously held thrust keys are resolved.
    pub policy: ThrustPolicy,
}

impl Default for ThrustConfig {
    fn default() -> Self {
        Self {
            step: 0.05,
            fuel_cost: 2,
            initial_fuel: 100,
            policy: ThrustPolicy::Exclusive,
        }
    }
}

/// Thresholds for mission status evaluation.
#[derive(Clone, Debug)]
pub struct MissionConfig {
    /// Top of the atmosphere; at or below this distance the satellite burns up.
    pub atmosphere_distance: f64,
    /// Lowest distance (inclusive) at which mapping is possible.
    pub mapping_min_distance: f64,
    /// Highest distance (inclusive) at which mapping is possible.
    pub mapping_max_distance: f64,
    /// Eccentricity must be strictly below this to map.
    pub mapping_max_eccentricity: f64,
    /// Horizontal drift velocity forced once fuel is gone.
    pub drift_dx: f64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            atmosphere_distance: 68.0,
            mapping_min_distance: 69.0,
            mapping_max_distance: 120.0,
            mapping_max_eccentricity: 0.05,
            drift_dx: 2.0,
        }
    }
}

/// Tick rate and eccentricity sampling cadence.
#[derive(Clone, Debug)]
pub struct SamplingConfig {
    /// Logical ticks per second.
    pub tick_rate: f64,
    /// Seconds of simulated time per eccentricity window.
    pub sampling_seconds: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            tick_rate: 30.0,
            sampling_seconds: 5.0,
        }
    }
}

impl SamplingConfig {
    /// Number of ticks between eccentricity reductions.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn interval_ticks(&self) -> u64 {
        (self.sampling_seconds * self.tick_rate).round() as u64
    }
}

/// Randomized initial conditions for the satellite.
#[derive(Clone, Debug)]
pub struct SpawnConfig {
    /// Half-open x range, drawn on the integer grid.
    pub x_range: Range<i32>,
    /// Half-open y range, drawn on the integer grid.
    pub y_range: Range<i32>,
    /// Initial horizontal speed; the sign is drawn at random.
    pub speed: f64,
    /// Seed for the initial-condition generator.
    pub seed: u64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            x_range: 315..425,
            y_range: 70..180,
            speed: 3.0,
            seed: 0,
        }
    }
}

/// Complete simulation configuration.
///
/// Built once and handed to [`Simulation::new`](crate::simulation::Simulation::new);
/// the tick driver never mutates it.
#[derive(Resource, Clone, Debug, Default)]
pub struct OrbiterConfig {
    pub physics: PhysicsConfig,
    pub thrust: ThrustConfig,
    pub mission: MissionConfig,
    pub sampling: SamplingConfig,
    pub spawn: SpawnConfig,
}

impl OrbiterConfig {
    /// Same configuration with a different spawn seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.spawn.seed = seed;
        self
    }

    /// Same configuration with a different thrust policy.
    pub fn with_thrust_policy(mut self, policy: ThrustPolicy) -> Self {
        self.thrust.policy = policy;
        self
    }

    /// Check that the configuration can drive a simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick_rate = self.sampling.tick_rate;
        if !(tick_rate.is_finite() && tick_rate > 0.0) {
            return Err(ConfigError::InvalidTickRate(tick_rate));
        }
        if self.sampling.interval_ticks() == 0 {
            return Err(ConfigError::SamplingIntervalTooShort {
                seconds: self.sampling.sampling_seconds,
                tick_rate,
            });
        }

        positive("gravitational_constant", self.physics.gravitational_constant)?;
        positive("planet_mass", self.physics.planet_mass)?;
        positive("satellite_mass", self.physics.satellite_mass)?;
        positive("min_gravity_distance", self.physics.min_gravity_distance)?;
        non_negative("thrust step", self.thrust.step)?;
        non_negative("atmosphere_distance", self.mission.atmosphere_distance)?;
        non_negative("mapping_min_distance", self.mission.mapping_min_distance)?;
        non_negative("mapping_max_distance", self.mission.mapping_max_distance)?;
        non_negative("mapping_max_eccentricity", self.mission.mapping_max_eccentricity)?;
        if !self.mission.drift_dx.is_finite() {
            return Err(ConfigError::NonFiniteValue {
                name: "drift_dx",
                value: self.mission.drift_dx,
            });
        }

        let mission = &self.mission;
        if mission.mapping_min_distance > mission.mapping_max_distance {
            return Err(ConfigError::InvertedMappingBand {
                min: mission.mapping_min_distance,
                max: mission.mapping_max_distance,
            });
        }

        for (axis, range) in [('x', &self.spawn.x_range), ('y', &self.spawn.y_range)] {
            if range.is_empty() {
                return Err(ConfigError::EmptySpawnRange {
                    axis,
                    start: range.start,
                    end: range.end,
                });
            }
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveValue { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeValue { name, value })
    }
}
