//! Touch input: a host-fed event queue, the pan/pinch gesture state machine,
//! the camera rig it drives, and tap handling on the tile map.

pub(crate) mod camera;
pub(crate) mod events;
pub(crate) mod gestures;
pub(crate) mod systems;

pub use camera::{CameraRig, CameraSettings, ScreenSize};
pub use events::{FingerId, InputEvent, InputQueue};
pub use gestures::{Gesture, TouchGestures};
pub use systems::{handle_tap, process_input_queue, TapOutcome};

use bevy::prelude::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputQueue>()
            .init_resource::<TouchGestures>()
            .init_resource::<CameraRig>()
            .init_resource::<CameraSettings>()
            .init_resource::<ScreenSize>()
            .add_systems(
                Update,
                process_input_queue.in_set(crate::SimulationUpdateSet::Input),
            );
    }
}
