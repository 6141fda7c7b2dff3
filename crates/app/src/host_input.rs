//! Bridges winit input into the simulation's `InputQueue`.
//!
//! Window coordinates have a top-left origin; the queue expects bottom-left,
//! so every position is flipped against the window height. The left mouse
//! button is forwarded as a pseudo-finger so desktop builds can pan and tap.

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::grid::BuildingTile;
use simulation::input::{FingerId, InputEvent, InputQueue, ScreenSize};
use simulation::placement::BuildTool;
use simulation::SimulationUpdateSet;

const MOUSE_FINGER: FingerId = FingerId::MAX;

pub struct HostInputPlugin;

impl Plugin for HostInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync_screen_size,
                forward_touches,
                forward_mouse,
                select_build_tool,
            )
                .chain()
                .before(SimulationUpdateSet::Input),
        );
    }
}

fn sync_screen_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut screen: ResMut<ScreenSize>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if screen.0 != size {
        screen.0 = size;
    }
}

fn to_queue_space(position: Vec2, screen: &ScreenSize) -> Vec2 {
    Vec2::new(position.x, screen.0.y - position.y)
}

fn forward_touches(
    mut touches: EventReader<TouchInput>,
    screen: Res<ScreenSize>,
    mut queue: ResMut<InputQueue>,
) {
    for touch in touches.read() {
        let finger = touch.id;
        let position = to_queue_space(touch.position, &screen);
        let event = match touch.phase {
            TouchPhase::Started => InputEvent::TouchStarted { finger, position },
            TouchPhase::Moved => InputEvent::TouchMoved { finger, position },
            TouchPhase::Ended | TouchPhase::Canceled => {
                InputEvent::TouchEnded { finger, position }
            }
        };
        queue.push(event);
    }
}

fn forward_mouse(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    screen: Res<ScreenSize>,
    mut queue: ResMut<InputQueue>,
    mut last: Local<Option<Vec2>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let position = to_queue_space(cursor, &screen);
    let finger = MOUSE_FINGER;

    if buttons.just_pressed(MouseButton::Left) {
        queue.push(InputEvent::TouchStarted { finger, position });
        *last = Some(position);
    } else if buttons.just_released(MouseButton::Left) {
        queue.push(InputEvent::TouchEnded { finger, position });
        *last = None;
    } else if buttons.pressed(MouseButton::Left) && *last != Some(position) {
        queue.push(InputEvent::TouchMoved { finger, position });
        *last = Some(position);
    }
}

/// 1: inspect, 2: drill, 3: furnace, 4: processor, 5: belt, 6: power plant,
/// Delete/Backspace: remove.
fn select_build_tool(keys: Res<ButtonInput<KeyCode>>, mut tool: ResMut<BuildTool>) {
    let picked = if keys.just_pressed(KeyCode::Digit1) {
        BuildTool::Inspect
    } else if keys.just_pressed(KeyCode::Digit2) {
        BuildTool::Place(BuildingTile::mining_drill())
    } else if keys.just_pressed(KeyCode::Digit3) {
        BuildTool::Place(BuildingTile::furnace())
    } else if keys.just_pressed(KeyCode::Digit4) {
        BuildTool::Place(BuildingTile::processor())
    } else if keys.just_pressed(KeyCode::Digit5) {
        BuildTool::Place(BuildingTile::conveyor_belt())
    } else if keys.just_pressed(KeyCode::Digit6) {
        BuildTool::Place(BuildingTile::coal_power_plant())
    } else if keys.any_just_pressed([KeyCode::Delete, KeyCode::Backspace]) {
        BuildTool::Remove
    } else {
        return;
    };

    if *tool != picked {
        info!("Build tool: {:?}", picked);
        *tool = picked;
    }
}
