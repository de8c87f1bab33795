//! egui overlay: telemetry readouts, status banners, and instructions.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::mission::MissionStatus;
use crate::simulation::LatestTelemetry;

/// How long the intro text stays up, in seconds.
pub const INTRO_SECONDS: f32 = 15.0;

const INTRO_TEXT: [&str; 3] = [
    "The Mars Orbiter experienced an error during Orbit insertion.",
    "Use thrusters to correct to a circular mapping orbit without",
    "running out of propellant or burning up in the atmosphere.",
];

const MISSION_TEXT: [&str; 3] = [
    "Orbital altitude must be within 69-120 miles",
    "Orbital Eccentricity must be < 0.05",
    "Avoid top of atmosphere at 68 miles",
];

const CONTROLS_TEXT: [&str; 6] = [
    "Left Arrow = Decrease Dx",
    "Right Arrow = Increase Dx",
    "Up Arrow = Decrease Dy",
    "Down Arrow = Increase Dy",
    "Space Bar = Clear Path",
    "Escape = Exit Full Screen",
];

mod colors {
    use bevy_egui::egui::Color32;

    pub const ALERT: Color32 = Color32::from_rgb(255, 0, 0);
    pub const MAPPING: Color32 = Color32::from_rgb(173, 216, 230);
    pub const INTRO: Color32 = Color32::from_rgb(0, 255, 0);
}

/// Plugin adding the overlay systems.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (readout_panel, status_banner, instructions),
        );
    }
}

/// Banner color for a status.
fn banner_color(status: MissionStatus) -> egui::Color32 {
    match status {
        MissionStatus::MappingEnabled => colors::MAPPING,
        _ => colors::ALERT,
    }
}

/// Readout boxes across the top of the screen.
pub fn readout_panel(mut contexts: EguiContexts, latest: Res<LatestTelemetry>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(telemetry) = latest.0 else {
        return;
    };
    let readouts = telemetry.readouts();

    egui::TopBottomPanel::top("readouts").show(ctx, |ui| {
        egui::Grid::new("readout_grid")
            .num_columns(5)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for heading in ["Dx", "Dy", "Altitude", "Fuel", "Eccentricity"] {
                    ui.strong(heading);
                }
                ui.end_row();

                for value in [
                    &readouts.dx,
                    &readouts.dy,
                    &readouts.altitude,
                    &readouts.fuel,
                    &readouts.eccentricity,
                ] {
                    ui.monospace(value.as_str());
                }
                ui.end_row();
            });
    });
}

/// Centered banner for fuel depletion, atmospheric entry, or mapping.
pub fn status_banner(mut contexts: EguiContexts, latest: Res<LatestTelemetry>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(status) = latest.0.map(|t| t.status) else {
        return;
    };
    let Some(text) = status.banner() else {
        return;
    };

    egui::Area::new(egui::Id::new("status_banner"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 180.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .color(banner_color(status))
                    .size(18.0),
            );
        });
}

/// Mission rules, key bindings, and the timed intro.
pub fn instructions(mut contexts: EguiContexts, time: Res<Time>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if time.elapsed_secs() <= INTRO_SECONDS {
        egui::Area::new(egui::Id::new("intro"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 100.0))
            .show(ctx, |ui| {
                for line in INTRO_TEXT {
                    ui.label(egui::RichText::new(line).color(colors::INTRO));
                }
            });
    }

    egui::Area::new(egui::Id::new("mission_rules"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
        .show(ctx, |ui| {
            for line in MISSION_TEXT {
                ui.label(line);
            }
        });

    egui::Area::new(egui::Id::new("controls"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-10.0, -10.0))
        .show(ctx, |ui| {
            for line in CONTROLS_TEXT {
                ui.label(line);
            }
        });
}
