use bevy::prelude::*;

use crate::grid::{BuildingTile, Cell};
use crate::inventory::InventoryChanged;
use crate::items::ItemId;
use crate::mining::ResourceExtracted;
use crate::test_harness::TestWorld;

// A drill's default interval is 2.0s, i.e. 20 fixed steps at 10 Hz. Timers
// accumulate f32 steps of 0.1, so assertions leave a few ticks of slack on
// either side of each boundary.

const ORE: Cell = Cell::new(3, 4);

fn drilled_world() -> TestWorld {
    TestWorld::new()
        .with_resource_tile(ORE, "iron_ore", 3)
        .with_drill(ORE)
}

#[test]
fn drill_yields_once_per_interval() {
    let mut world = drilled_world();

    world.tick(15);
    assert_eq!(world.item_count("iron_ore"), 0);

    world.tick(10);
    assert_eq!(world.item_count("iron_ore"), 3);

    world.tick(20);
    assert_eq!(world.item_count("iron_ore"), 6);
}

#[test]
fn drill_without_deposit_stays_idle() {
    let mut world = TestWorld::new().with_drill(ORE);
    world.tick(50);

    assert!(world.inventory().is_empty());
    assert!(world.mining().is_registered(ORE));
    assert_eq!(world.mining().timer(ORE), Some(0.0));
}

/// Events only live for two fixed steps, so read them after every tick.
fn collect_events<E: Event + Clone>(world: &mut TestWorld, ticks: u32) -> Vec<E> {
    let mut cursor = world.resource::<Events<E>>().get_cursor();
    let mut seen = Vec::new();
    for _ in 0..ticks {
        world.tick(1);
        seen.extend(cursor.read(world.resource::<Events<E>>()).cloned());
    }
    seen
}

#[test]
fn extractions_are_announced_as_events() {
    let mut world = drilled_world();
    let seen = collect_events::<ResourceExtracted>(&mut world, 25);
    assert_eq!(
        seen,
        vec![ResourceExtracted {
            cell: ORE,
            item: ItemId::from("iron_ore"),
            quantity: 3,
        }]
    );
}

#[test]
fn inventory_publishes_new_stack_then_merge() {
    let mut world = drilled_world();
    let changes = collect_events::<InventoryChanged>(&mut world, 45);

    assert_eq!(changes.len(), 2);
    assert!(changes[0].new_stack);
    assert_eq!(changes[0].total, 3);
    assert!(!changes[1].new_stack);
    assert_eq!(changes[1].total, 6);
    assert!(!world.inventory().has_pending_changes());
}

#[test]
fn replacing_drill_behind_the_scheduler_prunes_it() {
    let mut world = drilled_world();
    world.tick(5);

    world.tiles_mut().set_building(ORE, BuildingTile::furnace());
    world.tick(1);

    assert!(!world.mining().is_registered(ORE));
    assert_eq!(world.mining().timer(ORE), None);
    world.tick(30);
    assert_eq!(world.item_count("iron_ore"), 0);
}

#[test]
fn drills_on_different_deposits_fill_separate_stacks() {
    let coal = Cell::new(-1, -1);
    let mut world = drilled_world()
        .with_resource_tile(coal, "coal", 1)
        .with_drill(coal);
    world.tick(25);

    assert_eq!(world.item_count("iron_ore"), 3);
    assert_eq!(world.item_count("coal"), 1);
    assert_eq!(world.inventory().stacks().len(), 2);
}

#[test]
fn unknown_deposit_item_is_dropped_but_timer_resets() {
    let mut world = TestWorld::new()
        .with_resource_tile(ORE, "unobtainium", 1)
        .with_drill(ORE);
    world.tick(25);

    assert!(world.inventory().is_empty());
    let timer = world.mining().timer(ORE).expect("still registered");
    assert!(timer < 1.0, "timer should have reset, got {timer}");
}
