//! Io Plume
//!
//! Gas particles thrown from a volcanic vent on Io, each species launched
//! at its own speed so the plume sorts itself by molecular mass.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use mars_orbiter::plume::{PlumeConfig, PlumePlugin};

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Io Plume".into(),
            ..default()
        }),
        ..default()
    }));

    let config = PlumeConfig {
        seed: rand::random(),
        ..PlumeConfig::default()
    };
    let plume = match PlumePlugin::new(config) {
        Ok(plugin) => plugin,
        Err(err) => {
            error!("Invalid plume configuration: {err}");
            return AppExit::error();
        }
    };

    app.insert_resource(ClearColor(Color::BLACK))
        .add_plugins(EguiPlugin::default())
        .add_plugins(plume)
        .run()
}
