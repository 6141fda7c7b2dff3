use crate::grid::{BuildingTile, Cell};
use crate::placement::{PlacementCommand, PlacementError, PlacementOutcome, PlacementPreview};
use crate::test_harness::TestWorld;

const ORE: Cell = Cell::new(-2, 6);

fn ore_world() -> TestWorld {
    TestWorld::new().with_resource_tile(ORE, "copper_ore", 2)
}

#[test]
fn preview_then_confirm_starts_a_drill() {
    let mut world = ore_world();
    world.queue_command(PlacementCommand::Preview {
        cell: ORE,
        tile: BuildingTile::mining_drill(),
    });
    world.queue_command(PlacementCommand::Confirm);
    world.tick(1);

    assert_eq!(world.tiles().building(ORE), Some(&BuildingTile::mining_drill()));
    assert!(world.mining().is_registered(ORE));
    assert_eq!(world.resource::<PlacementPreview>().current(), None);

    world.tick(25);
    assert_eq!(world.item_count("copper_ore"), 2);
}

#[test]
fn preview_alone_changes_nothing() {
    let mut world = ore_world();
    world.queue_command(PlacementCommand::Preview {
        cell: ORE,
        tile: BuildingTile::mining_drill(),
    });
    world.tick(30);

    assert!(!world.tiles().has_building(ORE));
    assert_eq!(world.mining().active_count(), 0);
    assert!(world.inventory().is_empty());
    let pending = world
        .resource::<PlacementPreview>()
        .current()
        .expect("preview shown");
    assert!(pending.valid);
}

#[test]
fn removing_a_drill_stops_production() {
    let mut world = ore_world().with_drill(ORE);
    world.tick(25);
    assert_eq!(world.item_count("copper_ore"), 2);

    world.queue_command(PlacementCommand::Remove { cell: ORE });
    world.tick(1);
    assert!(!world.mining().is_registered(ORE));

    world.tick(40);
    assert_eq!(world.item_count("copper_ore"), 2);
}

#[test]
fn placing_onto_an_occupied_cell_is_logged_as_rejected() {
    let mut world = ore_world().with_building(ORE, BuildingTile::conveyor_belt());
    world.queue_command(PlacementCommand::Place {
        cell: ORE,
        tile: BuildingTile::mining_drill(),
    });
    world.tick(1);

    let (command, outcome) = world.placement_log().last().expect("logged").clone();
    assert!(matches!(command, PlacementCommand::Place { .. }));
    assert_eq!(
        outcome,
        PlacementOutcome::Rejected(PlacementError::Occupied(ORE))
    );
    assert_eq!(world.tiles().building(ORE), Some(&BuildingTile::conveyor_belt()));
    assert_eq!(world.mining().active_count(), 0);
}

#[test]
fn commands_apply_in_queue_order_within_a_tick() {
    let mut world = ore_world();
    world.queue_command(PlacementCommand::Place {
        cell: ORE,
        tile: BuildingTile::mining_drill(),
    });
    world.queue_command(PlacementCommand::Remove { cell: ORE });
    world.queue_command(PlacementCommand::Place {
        cell: ORE,
        tile: BuildingTile::furnace(),
    });
    world.tick(1);

    assert_eq!(world.placement_log().len(), 3);
    assert_eq!(world.tiles().building(ORE), Some(&BuildingTile::furnace()));
    assert!(!world.mining().is_registered(ORE));
}
