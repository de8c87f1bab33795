//! Presentation adapter for the orbiter.
//!
//! Reads [`Telemetry`] and non-thrust [`InputEvent`]s and draws the scene
//! with gizmos. Nothing here writes back into the simulation.

use std::collections::VecDeque;

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowMode};

use crate::input::{InputEvent, KeyState};
use crate::simulation::LatestTelemetry;
use crate::telemetry::Telemetry;
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH, TrailSegment, field_to_world};

/// Oldest trail segments are dropped past this many.
pub const MAX_TRAIL_SEGMENTS: usize = 20_000;

/// Planet display radius in field units.
pub const PLANET_RADIUS: f32 = 50.0;

/// Satellite display radius in field units.
pub const SATELLITE_RADIUS: f32 = 6.0;

mod colors {
    use bevy::prelude::Color;

    pub const MARS: Color = Color::srgb(0.78, 0.36, 0.22);
    pub const MARS_WATER: Color = Color::srgb(0.25, 0.45, 0.85);
    pub const SATELLITE: Color = Color::srgb(0.85, 0.85, 0.85);
    pub const CRASHED: Color = Color::srgb(1.0, 0.0, 0.0);
    pub const ANTENNA: Color = Color::srgb(0.68, 0.85, 0.9);
    pub const TRAIL: Color = Color::WHITE;
    pub const BORDER: Color = Color::WHITE;
}

/// Drawn trajectory, newest segment last.
#[derive(Resource, Default, Debug)]
pub struct Trail {
    segments: VecDeque<TrailSegment>,
}

impl Trail {
    pub fn push(&mut self, segment: TrailSegment) {
        if self.segments.len() == MAX_TRAIL_SEGMENTS {
            self.segments.pop_front();
        }
        self.segments.push_back(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailSegment> {
        self.segments.iter()
    }
}

/// Whether the soil-moisture view of the planet is showing.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingView {
    pub active: bool,
}

/// Plugin drawing the planet, satellite, and trail.
pub struct OrbiterRenderPlugin;

impl Plugin for OrbiterRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Trail>()
            .init_resource::<MappingView>()
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (record_trail, apply_view_input, leave_fullscreen, exit_on_quit, draw_scene).chain(),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Append every tick's path segment to the trail.
pub fn record_trail(mut telemetry: MessageReader<Telemetry>, mut trail: ResMut<Trail>) {
    for t in telemetry.read() {
        trail.push(t.trail);
    }
}

/// Apply trail clearing and map-key input.
///
/// The map only turns on while mapping is enabled; any key release turns
/// it off again.
pub fn apply_view_input(
    mut events: MessageReader<InputEvent>,
    latest: Res<LatestTelemetry>,
    mut trail: ResMut<Trail>,
    mut mapping: ResMut<MappingView>,
) {
    let mapping_enabled = latest.0.is_some_and(|t| t.status.is_mapping_enabled());

    for event in events.read() {
        match event {
            InputEvent::ClearTrail => trail.clear(),
            InputEvent::ToggleMapKey(KeyState::Up) => mapping.active = false,
            InputEvent::ToggleMapKey(KeyState::Down) if mapping_enabled => mapping.active = true,
            _ => {}
        }
    }
}

/// Escape drops the primary window out of full screen.
pub fn leave_fullscreen(
    mut events: MessageReader<InputEvent>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !events.read().any(|e| matches!(e, InputEvent::Escape)) {
        return;
    }
    for mut window in &mut windows {
        if window.mode != WindowMode::Windowed {
            info!("Leaving full screen");
            window.mode = WindowMode::Windowed;
        }
    }
}

/// Close the app on a quit request.
pub fn exit_on_quit(mut events: MessageReader<InputEvent>, mut exit: MessageWriter<AppExit>) {
    if events.read().any(|e| matches!(e, InputEvent::Quit)) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}

/// World-space direction of the satellite's antenna for a sprite heading.
///
/// Headings follow the sprite convention (degrees, 90° offset, tail
/// first), so the antenna sits half a turn from the heading.
pub fn antenna_direction(heading: f64) -> Vec2 {
    let dir = DVec2::from_angle((heading + 180.0).to_radians());
    dir.as_vec2()
}

fn draw_scene(
    mut gizmos: Gizmos,
    latest: Res<LatestTelemetry>,
    trail: Res<Trail>,
    mapping: Res<MappingView>,
) {
    #[allow(clippy::cast_possible_truncation)]
    let field = Vec2::new(FIELD_WIDTH as f32 - 2.0, FIELD_HEIGHT as f32 - 2.0);
    gizmos.rect_2d(Isometry2d::IDENTITY, field, colors::BORDER);

    for segment in trail.iter() {
        gizmos.line_2d(
            field_to_world(segment.start),
            field_to_world(segment.end),
            colors::TRAIL,
        );
    }

    let Some(t) = latest.0 else {
        return;
    };

    let planet = field_to_world(t.planet_pos);
    let planet_color = if mapping.active { colors::MARS_WATER } else { colors::MARS };
    gizmos.circle_2d(Isometry2d::from_translation(planet), PLANET_RADIUS, planet_color);
    let spin = DVec2::from_angle(t.planet_angle.to_radians()).as_vec2();
    gizmos.line_2d(planet, planet + spin * PLANET_RADIUS, planet_color);

    let satellite = field_to_world(t.satellite_pos);
    let body_color = if t.crashed { colors::CRASHED } else { colors::SATELLITE };
    gizmos.circle_2d(Isometry2d::from_translation(satellite), SATELLITE_RADIUS, body_color);
    gizmos.line_2d(
        satellite,
        satellite + antenna_direction(t.heading) * SATELLITE_RADIUS * 2.0,
        colors::ANTENNA,
    );
}
