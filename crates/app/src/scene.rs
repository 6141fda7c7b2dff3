use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::input::{CameraRig, ScreenSize};
use simulation::SimulationUpdateSet;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, sync_camera.in_set(SimulationUpdateSet::Visual));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, OrthographicProjection::default_2d()));
}

/// Mirror the simulation's camera rig onto the 2D camera. The rig models a
/// perspective camera looking straight down, so the orthographic scale is
/// chosen to show the same visible height of the tile plane.
fn sync_camera(
    rig: Res<CameraRig>,
    screen: Res<ScreenSize>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !rig.is_changed() && !screen.is_changed() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((mut transform, mut projection)) = camera.get_single_mut() else {
        return;
    };
    if window.height() > 0.0 {
        projection.scale = rig.half_extent(*screen).y * 2.0 / window.height();
    }
    transform.translation.x = rig.position.x;
    transform.translation.y = rig.position.y;
}
