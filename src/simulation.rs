//! Fixed-rate tick driver for the orbiter simulation.
//!
//! [`Simulation`] owns the planet, the satellite, and the eccentricity
//! tracker, and advances them together one tick at a time. It is plain data
//! and can be driven directly; [`SimulationPlugin`] wraps it as a Bevy
//! resource stepped from the `FixedUpdate` schedule.
//!
//! Order within one tick:
//! 1. Thrust events change velocity and burn fuel
//! 2. The satellite locates the planet, and gravity is applied
//! 3. Mission status is evaluated and its velocity override applied
//! 4. The satellite integrates one step and locates the planet again
//! 5. The new distance is sampled, reducing the window on cadence
//! 6. The planet rotates
//!
//! Status is evaluated before the move so a satellite stopped in the
//! atmosphere stays where it stopped instead of sliding toward the planet.

use bevy::log::{debug, info};
use bevy::prelude::*;

use crate::config::{ConfigError, OrbiterConfig};
use crate::eccentricity::EccentricityTracker;
use crate::input::{InputEvent, ThrustKeys};
use crate::mission::{MissionStatus, apply_status_effects, evaluate_mission};
use crate::planet::Planet;
use crate::satellite::Satellite;
use crate::telemetry::{Telemetry, ThrustFired};

/// Planet, satellite, and orbit tracking, advanced in lockstep.
#[derive(Resource, Clone, Debug)]
pub struct Simulation {
    config: OrbiterConfig,
    planet: Planet,
    satellite: Satellite,
    tracker: EccentricityTracker,
    status: MissionStatus,
    tick: u64,
}

impl Simulation {
    /// Build a simulation with a satellite drawn from the spawn ranges.
    pub fn new(config: OrbiterConfig) -> Result<Self, ConfigError> {
        // Spawning draws from the ranges, which must be checked first
        config.validate()?;
        let satellite = Satellite::spawn(&config);
        Self::with_satellite(config, satellite)
    }

    /// Build a simulation around a specific satellite.
    pub fn with_satellite(config: OrbiterConfig, mut satellite: Satellite) -> Result<Self, ConfigError> {
        config.validate()?;

        let planet = Planet::new(&config.physics);
        satellite.locate(&planet);
        let tracker = EccentricityTracker::new(config.sampling.interval_ticks());

        info!(
            "Satellite inserted at ({:.0}, {:.0}), velocity ({:.1}, {:.1}), altitude {:.1}",
            satellite.pos().x,
            satellite.pos().y,
            satellite.vel().x,
            satellite.vel().y,
            satellite.distance()
        );

        Ok(Self {
            config,
            planet,
            satellite,
            tracker,
            status: MissionStatus::Nominal,
            tick: 0,
        })
    }

    pub fn config(&self) -> &OrbiterConfig {
        &self.config
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    pub fn tracker(&self) -> &EccentricityTracker {
        &self.tracker
    }

    /// Status from the most recent tick.
    pub fn status(&self) -> MissionStatus {
        self.status
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Advance one tick.
    ///
    /// Only [`InputEvent::AxisAdjust`] events affect the simulation; every
    /// other kind is left to the presentation layer.
    pub fn step(&mut self, inputs: &[InputEvent]) -> Telemetry {
        self.tick += 1;

        let mut thrust_fired = false;
        for delta in inputs.iter().filter_map(InputEvent::thrust_delta) {
            thrust_fired |= self.satellite.apply_thrust(delta);
        }
        if thrust_fired {
            debug!("Thrust fired, fuel {}", self.satellite.fuel());
        }

        self.satellite.locate(&self.planet);
        self.planet.apply_gravity_to(&mut self.satellite);

        let status = evaluate_mission(
            self.satellite.fuel(),
            self.satellite.distance(),
            self.tracker.eccentricity(),
            &self.config.mission,
        );
        if status != self.status {
            info!(
                "Mission status {:?} -> {:?} at tick {} (altitude {:.1})",
                self.status,
                status,
                self.tick,
                self.satellite.distance()
            );
        }
        self.status = status;
        apply_status_effects(status, &mut self.satellite, &self.config.mission);

        let trail = self.satellite.integrate();
        self.satellite.locate(&self.planet);
        self.tracker.sample(self.satellite.distance());
        self.planet.advance_rotation();

        self.telemetry(trail, thrust_fired)
    }

    fn telemetry(&self, trail: crate::types::TrailSegment, thrust_fired: bool) -> Telemetry {
        Telemetry {
            tick: self.tick,
            satellite_pos: self.satellite.pos(),
            satellite_vel: self.satellite.vel(),
            heading: self.satellite.heading(),
            planet_pos: self.planet.pos(),
            planet_angle: self.planet.angle(),
            trail,
            fuel: self.satellite.fuel(),
            distance: self.satellite.distance(),
            eccentricity: self.tracker.eccentricity(),
            status: self.status,
            crashed: self.satellite.is_crashed(),
            thrust_fired,
        }
    }
}

/// Plugin stepping a [`Simulation`] at its configured tick rate.
///
/// Adds:
/// - The [`Simulation`] and [`OrbiterConfig`] resources
/// - `Time<Fixed>` at the configured tick rate
/// - [`InputEvent`], [`Telemetry`], and [`ThrustFired`] messages
/// - The tick system in `FixedUpdate`
pub struct SimulationPlugin {
    simulation: Simulation,
}

impl SimulationPlugin {
    /// Validate `config` and prepare the simulation it describes.
    pub fn new(config: OrbiterConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            simulation: Simulation::new(config)?,
        })
    }

    /// Wrap an already constructed simulation.
    pub fn from_simulation(simulation: Simulation) -> Self {
        Self { simulation }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self.simulation.config().clone();
        app.insert_resource(Time::<Fixed>::from_hz(config.sampling.tick_rate))
            .insert_resource(config)
            .insert_resource(self.simulation.clone())
            .init_resource::<LatestTelemetry>()
            .add_message::<InputEvent>()
            .add_message::<Telemetry>()
            .add_message::<ThrustFired>()
            .add_systems(FixedUpdate, run_tick);
    }
}

/// Most recent telemetry, for presentation systems that only need the
/// current state.
#[derive(Resource, Default, Clone, Debug)]
pub struct LatestTelemetry(pub Option<Telemetry>);

/// Advance the simulation by one tick.
///
/// Held arrow keys are sampled here rather than in `Update` so that
/// thrust fires exactly once per tick regardless of frame rate.
pub fn run_tick(
    mut simulation: ResMut<Simulation>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut input_events: MessageReader<InputEvent>,
    mut telemetry_out: MessageWriter<Telemetry>,
    mut thrust_out: MessageWriter<ThrustFired>,
    mut latest: ResMut<LatestTelemetry>,
) {
    let mut inputs: Vec<InputEvent> = input_events.read().copied().collect();

    if let Some(keys) = keys {
        let thrust = &simulation.config().thrust;
        inputs.extend(ThrustKeys::from_keyboard(&keys).thrust_events(thrust.policy, thrust.step));
    }

    let telemetry = simulation.step(&inputs);
    if telemetry.thrust_fired {
        thrust_out.write(ThrustFired {
            tick: telemetry.tick,
            fuel: telemetry.fuel,
        });
    }
    telemetry_out.write(telemetry);
    latest.0 = Some(telemetry);
}
