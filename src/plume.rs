//! Volcanic plume on Io.
//!
//! A one-shot particle emitter with no feedback: every tick one gas particle
//! leaves the vent at a random angle, falls under constant gravity, and
//! leaves a permanent streak until it hits the surface or leaves the screen.
//! Lighter molecules are launched faster, so each gas reaches its own height.

use std::collections::VecDeque;

use bevy::log::info;
use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ConfigError;
use crate::types::{TrailSegment, screen_to_world};

/// Streaks past this many are dropped oldest first.
pub const MAX_STREAKS: usize = 50_000;

/// Gas species in the plume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gas {
    So2,
    Co2,
    H2s,
    H2o,
}

impl Gas {
    pub const ALL: [Gas; 4] = [Gas::So2, Gas::Co2, Gas::H2s, Gas::H2o];

    /// Launch speed relative to SO2, from the ratio of molecular masses.
    pub fn velocity_scalar(self) -> f64 {
        match self {
            Gas::So2 => 1.0,
            Gas::Co2 => 1.45,
            Gas::H2s => 1.9,
            Gas::H2o => 3.6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gas::So2 => "SO2/S2",
            Gas::Co2 => "CO2",
            Gas::H2s => "H2S",
            Gas::H2o => "H2O",
        }
    }

    /// Gray level used for the streak, 0-255.
    pub fn shade(self) -> u8 {
        match self {
            Gas::So2 => 180,
            Gas::Co2 => 120,
            Gas::H2s => 80,
            Gas::H2o => 255,
        }
    }

    pub fn color(self) -> Color {
        let level = f32::from(self.shade()) / 255.0;
        Color::srgb(level, level, level)
    }
}

/// Emitter constants, in pixels and pixels per tick.
#[derive(Resource, Clone, Debug)]
pub struct PlumeConfig {
    /// Launch point of every particle.
    pub vent: DVec2,
    /// Particles falling below this y are stopped.
    pub surface_y: f64,
    /// Added to dy every tick.
    pub gravity: f64,
    /// Launch speed of SO2; other gases scale from it.
    pub so2_speed: f64,
    /// Launch angle range in degrees, 90 being straight up.
    pub min_angle: f64,
    pub max_angle: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub tick_rate: f64,
    pub seed: u64,
}

impl Default for PlumeConfig {
    fn default() -> Self {
        Self {
            vent: DVec2::new(320.0, 300.0),
            surface_y: 308.0,
            gravity: 0.5,
            so2_speed: 8.0,
            min_angle: 60.0,
            max_angle: 120.0,
            screen_width: 639.0,
            screen_height: 360.0,
            tick_rate: 25.0,
            seed: 0,
        }
    }
}

impl PlumeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }
        for (name, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveValue { name, value });
            }
        }
        let finite = self.min_angle.is_finite() && self.max_angle.is_finite();
        if !(finite && self.min_angle <= self.max_angle) {
            return Err(ConfigError::InvertedAngleRange {
                min: self.min_angle,
                max: self.max_angle,
            });
        }
        Ok(())
    }
}

/// One gas particle in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub gas: Gas,
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Particle {
    /// Launch from the vent at `angle_deg`; dy is negative because screen y
    /// grows downward.
    pub fn launch(gas: Gas, angle_deg: f64, config: &PlumeConfig) -> Self {
        let speed = config.so2_speed * gas.velocity_scalar();
        let angle = angle_deg.to_radians();
        Self {
            gas,
            pos: config.vent,
            vel: DVec2::new(speed * angle.cos(), -speed * angle.sin()),
        }
    }

    /// Apply gravity, then move; returns the streak drawn this tick.
    pub fn step(&mut self, gravity: f64) -> TrailSegment {
        self.vel.y += gravity;
        let start = self.pos;
        self.pos += self.vel;
        TrailSegment { start, end: self.pos }
    }

    /// Still on screen and above the surface.
    pub fn is_alive(&self, config: &PlumeConfig) -> bool {
        (0.0..=config.screen_width).contains(&self.pos.x)
            && (0.0..=config.surface_y).contains(&self.pos.y)
    }
}

/// Particle emitter state.
#[derive(Resource, Clone, Debug)]
pub struct Plume {
    config: PlumeConfig,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Plume {
    pub fn new(config: PlumeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            particles: Vec::new(),
            rng,
        })
    }

    pub fn config(&self) -> &PlumeConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Emit one particle, advance all particles, drop the dead ones.
    ///
    /// Returns the streaks drawn this tick, tagged with their gas.
    pub fn step(&mut self) -> Vec<(Gas, TrailSegment)> {
        let gas = Gas::ALL[self.rng.random_range(0..Gas::ALL.len())];
        let angle = self
            .rng
            .random_range(self.config.min_angle..=self.config.max_angle);
        self.particles.push(Particle::launch(gas, angle, &self.config));

        let gravity = self.config.gravity;
        let streaks = self
            .particles
            .iter_mut()
            .map(|p| (p.gas, p.step(gravity)))
            .collect();

        let config = &self.config;
        self.particles.retain(|p| p.is_alive(config));
        streaks
    }
}

/// Accumulated streaks; the plume image is never erased.
#[derive(Resource, Default, Debug)]
pub struct Streaks(pub VecDeque<(Gas, TrailSegment)>);

/// Plugin running a [`Plume`] at its tick rate and drawing its streaks.
pub struct PlumePlugin {
    plume: Plume,
}

impl PlumePlugin {
    pub fn new(config: PlumeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            plume: Plume::new(config)?,
        })
    }
}

impl Plugin for PlumePlugin {
    fn build(&self, app: &mut App) {
        let vent = self.plume.config.vent;
        info!("Plume vent at ({:.0}, {:.0})", vent.x, vent.y);
        app.insert_resource(Time::<Fixed>::from_hz(self.plume.config.tick_rate))
            .insert_resource(self.plume.clone())
            .init_resource::<Streaks>()
            .add_systems(Startup, |mut commands: Commands| {
                commands.spawn(Camera2d);
            })
            .add_systems(FixedUpdate, plume_tick)
            .add_systems(Update, draw_plume)
            .add_systems(EguiPrimaryContextPass, plume_legend);
    }
}

/// Advance the plume one tick and keep its streaks.
pub fn plume_tick(mut plume: ResMut<Plume>, mut streaks: ResMut<Streaks>) {
    for streak in plume.step() {
        if streaks.0.len() == MAX_STREAKS {
            streaks.0.pop_front();
        }
        streaks.0.push_back(streak);
    }
}

fn draw_plume(mut gizmos: Gizmos, plume: Res<Plume>, streaks: Res<Streaks>) {
    let config = plume.config();
    let size = DVec2::new(config.screen_width, config.screen_height);

    let surface_left = screen_to_world(DVec2::new(0.0, config.surface_y), size);
    let surface_right = screen_to_world(DVec2::new(config.screen_width, config.surface_y), size);
    gizmos.line_2d(surface_left, surface_right, Color::srgb(0.6, 0.5, 0.2));

    for (gas, segment) in &streaks.0 {
        gizmos.line_2d(
            screen_to_world(segment.start, size),
            screen_to_world(segment.end, size),
            gas.color(),
        );
    }
}

fn plume_legend(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    egui::Area::new(egui::Id::new("plume_legend"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(40.0, 20.0))
        .show(ctx, |ui| {
            for gas in [Gas::H2o, Gas::H2s, Gas::Co2, Gas::So2] {
                let shade = gas.shade();
                ui.label(
                    egui::RichText::new(format!("--- {}", gas.label()))
                        .color(egui::Color32::from_gray(shade)),
                );
            }
        });
}
