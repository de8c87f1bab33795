//! Mars Orbiter - Orbit Insertion Simulator
//!
//! Steer a satellite from a bad insertion into a low circular mapping orbit
//! around Mars without running dry or burning up in the atmosphere.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use mars_orbiter::config::OrbiterConfig;
use mars_orbiter::input::InputPlugin;
use mars_orbiter::render::OrbiterRenderPlugin;
use mars_orbiter::simulation::SimulationPlugin;
use mars_orbiter::ui::HudPlugin;

/// Environment variable fixing the insertion seed.
const SEED_VAR: &str = "MARS_ORBITER_SEED";

fn seed_from_env() -> u64 {
    match std::env::var(SEED_VAR) {
        Ok(raw) => match raw.trim().parse() {
            Ok(seed) => seed,
            Err(err) => {
                warn!("Ignoring {SEED_VAR}={raw:?}: {err}");
                rand::random()
            }
        },
        Err(_) => rand::random(),
    }
}

fn main() -> AppExit {
    let mut app = App::new();
    // DefaultPlugins first so the log subscriber exists for startup errors
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Mars Orbiter".into(),
            ..default()
        }),
        ..default()
    }));

    let seed = seed_from_env();
    let simulation = match SimulationPlugin::new(OrbiterConfig::default().with_seed(seed)) {
        Ok(plugin) => plugin,
        Err(err) => {
            error!("Invalid orbiter configuration: {err}");
            return AppExit::error();
        }
    };
    info!("Insertion seed {seed}");

    app.insert_resource(ClearColor(Color::BLACK))
        .add_plugins(EguiPlugin::default())
        .add_plugins((InputPlugin, simulation, OrbiterRenderPlugin, HudPlugin))
        .run()
}
