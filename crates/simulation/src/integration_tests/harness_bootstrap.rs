use crate::grid::Cell;
use crate::test_harness::TestWorld;

#[test]
fn empty_world_has_no_tiles_or_drills() {
    let world = TestWorld::new();
    assert!(world.tiles().is_empty());
    assert_eq!(world.mining().active_count(), 0);
    assert!(world.inventory().is_empty());
}

#[test]
fn each_tick_runs_one_fixed_step() {
    let mut world = TestWorld::new();
    let before = world.ticks();
    world.tick(7);
    assert_eq!(world.ticks() - before, 7);
}

/// If the set chain were misconfigured Bevy would panic building the
/// schedule; running every phase with live state exercises all of it.
#[test]
fn simulation_phases_run_with_live_state() {
    let mut world = TestWorld::new()
        .with_resource_tile(Cell::new(0, 0), "coal", 1)
        .with_drill(Cell::new(0, 0));
    world.tick(5);
    assert!(world.mining().is_registered(Cell::new(0, 0)));
}

#[test]
fn world_init_registers_the_starter_drill() {
    let world = TestWorld::with_world_init();
    assert!(!world.tiles().is_empty());
    assert_eq!(world.mining().active_count(), 1);

    let drill = world
        .mining()
        .active_cells()
        .next()
        .expect("starter drill");
    assert!(world.tiles().building(drill).is_some());
}

#[test]
fn starter_drill_produces_iron() {
    let mut world = TestWorld::with_world_init();
    world.tick(25);
    assert!(world.item_count("iron_ore") >= 1);
}
