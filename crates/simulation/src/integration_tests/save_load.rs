use crate::grid::{BuildingTile, Cell, TileMap};
use crate::placement::{PlacementCommand, PlacementPreview};
use crate::post_load_rebuild::PostLoadRebuildPending;
use crate::test_harness::TestWorld;
use crate::Saveable;

const IRON: Cell = Cell::new(1, 1);
const COAL: Cell = Cell::new(5, -3);

fn producing_world() -> TestWorld {
    TestWorld::new()
        .with_resource_tile(IRON, "iron_ore", 1)
        .with_resource_tile(COAL, "coal", 2)
        .with_drill(IRON)
        .with_drill(COAL)
        .with_building(Cell::new(0, 0), BuildingTile::coal_power_plant())
}

#[test]
fn extension_map_carries_registered_resources() {
    let mut world = producing_world();
    world.tick(25);

    let extensions = world.save_extensions();
    assert!(extensions.contains_key(TileMap::SAVE_KEY));
    assert!(extensions.contains_key("inventory"));
    assert_eq!(extensions.len(), 2);
}

#[test]
fn restore_rebuilds_the_registry_from_loaded_drills() {
    let mut source = producing_world();
    source.tick(25);
    let extensions = source.save_extensions();

    let mut target = TestWorld::new();
    target.restore(&extensions);
    assert!(target.world_mut().contains_resource::<PostLoadRebuildPending>());

    target.tick(1);
    assert!(!target.world_mut().contains_resource::<PostLoadRebuildPending>());
    assert_eq!(target.mining().active_count(), 2);
    assert!(target.mining().is_registered(IRON));
    assert!(target.mining().is_registered(COAL));
    assert_eq!(target.tiles(), source.tiles());
    assert_eq!(target.item_count("iron_ore"), 1);
    assert_eq!(target.item_count("coal"), 2);
}

#[test]
fn restored_drills_keep_producing() {
    let mut source = producing_world();
    source.tick(25);
    let extensions = source.save_extensions();

    let mut target = TestWorld::new();
    target.restore(&extensions);
    target.tick(25);
    assert_eq!(target.item_count("iron_ore"), 2);
    assert_eq!(target.item_count("coal"), 4);
}

#[test]
fn restore_drops_stale_drills_and_preview() {
    let mut target = TestWorld::new()
        .with_resource_tile(Cell::new(9, 9), "stone", 1)
        .with_drill(Cell::new(9, 9));
    target.queue_command(PlacementCommand::Preview {
        cell: Cell::new(2, 2),
        tile: BuildingTile::mining_drill(),
    });
    target.tick(1);
    assert!(target.resource::<PlacementPreview>().current().is_some());

    let extensions = producing_world().save_extensions();

    target.restore(&extensions);
    target.tick(1);
    assert!(!target.mining().is_registered(Cell::new(9, 9)));
    assert_eq!(target.resource::<PlacementPreview>().current(), None);
}

#[test]
fn restoring_an_empty_game_clears_the_previous_one() {
    let empty = TestWorld::new().save_extensions();
    assert!(empty.is_empty());

    let mut target = producing_world();
    target.tick(25);
    assert_eq!(target.item_count("iron_ore"), 1);

    target.restore(&empty);
    target.tick(1);
    assert!(target.tiles().is_empty());
    assert!(target.inventory().is_empty());
    assert_eq!(target.mining().active_count(), 0);

    target.tick(25);
    assert_eq!(target.item_count("iron_ore"), 0);
    assert_eq!(target.item_count("coal"), 0);
}
