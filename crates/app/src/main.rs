use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

mod host_input;
mod scene;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Projectary".to_string(),
                // Portrait, half of a 1080x1920 phone screen.
                resolution: (540.0, 960.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .add_plugins((
            simulation::SimulationPlugin,
            host_input::HostInputPlugin,
            scene::ScenePlugin,
        ))
        .run();
}
