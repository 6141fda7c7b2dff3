use bevy::math::Vec2;

use crate::grid::{BuildingTile, Cell};
use crate::input::{CameraRig, InputEvent, ScreenSize};
use crate::placement::BuildTool;
use crate::test_harness::TestWorld;

/// Screen point that maps to the camera position (default rig: world origin).
fn screen_center(world: &TestWorld) -> Vec2 {
    world.resource::<ScreenSize>().0 * 0.5
}

fn tap(world: &mut TestWorld, position: Vec2) {
    world.push_input(InputEvent::TouchStarted {
        finger: 0,
        position,
    });
    world.push_input(InputEvent::TouchEnded {
        finger: 0,
        position,
    });
}

#[test]
fn tap_on_deposit_collects_by_hand() {
    let mut world = TestWorld::new().with_resource_tile(Cell::new(0, 0), "stone", 1);
    let center = screen_center(&world);

    tap(&mut world, center);
    world.tick(1);
    assert_eq!(world.item_count("stone"), 1);

    tap(&mut world, center);
    world.tick(1);
    assert_eq!(world.item_count("stone"), 2);
}

#[test]
fn tap_with_place_tool_builds_on_the_next_tick() {
    let mut world = TestWorld::new()
        .with_resource_tile(Cell::new(0, 0), "coal", 1)
        .with_tool(BuildTool::Place(BuildingTile::mining_drill()));
    let center = screen_center(&world);

    tap(&mut world, center);
    // Update queues the command after this frame's fixed step has run.
    world.tick(2);

    assert!(world.tiles().has_building(Cell::new(0, 0)));
    assert!(world.mining().is_registered(Cell::new(0, 0)));
    assert!(world.inventory().is_empty());
}

#[test]
fn host_reported_tap_event_is_handled() {
    let mut world = TestWorld::new().with_resource_tile(Cell::new(0, 0), "coal", 3);
    let center = screen_center(&world);
    world.push_input(InputEvent::Tap { position: center });
    world.tick(1);
    assert_eq!(world.item_count("coal"), 3);
}

#[test]
fn drag_pans_and_does_not_tap() {
    let mut world = TestWorld::new().with_resource_tile(Cell::new(0, 0), "coal", 1);
    let center = screen_center(&world);

    world.push_input(InputEvent::TouchStarted {
        finger: 0,
        position: center,
    });
    world.push_input(InputEvent::TouchMoved {
        finger: 0,
        position: center + Vec2::new(200.0, 0.0),
    });
    world.push_input(InputEvent::TouchEnded {
        finger: 0,
        position: center + Vec2::new(200.0, 0.0),
    });
    world.tick(1);

    assert!(world.resource::<CameraRig>().position.x < 0.0);
    assert!(world.inventory().is_empty());
}

#[test]
fn two_finger_spread_zooms_in() {
    let mut world = TestWorld::new();
    let start_fov = world.resource::<CameraRig>().fov;

    world.push_input(InputEvent::TouchStarted {
        finger: 1,
        position: Vec2::new(400.0, 900.0),
    });
    world.push_input(InputEvent::TouchStarted {
        finger: 2,
        position: Vec2::new(600.0, 900.0),
    });
    world.push_input(InputEvent::TouchMoved {
        finger: 2,
        position: Vec2::new(620.0, 900.0),
    });
    world.push_input(InputEvent::TouchMoved {
        finger: 2,
        position: Vec2::new(700.0, 900.0),
    });
    world.tick(1);

    assert!(world.resource::<CameraRig>().fov < start_fov);
    assert_eq!(world.resource::<CameraRig>().position, Vec2::ZERO);
}
