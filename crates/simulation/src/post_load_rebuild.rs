//! Post-load rebuild of derived state.
//!
//! The mining registry is not part of a save. After the tile map is restored
//! the registry is reconstructed from whatever drills the map contains, with
//! every timer starting from zero. Any placement preview from before the load
//! refers to a map that no longer exists and is dropped.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::grid::TileMap;
use crate::mining::MiningSystem;
use crate::placement::PlacementPreview;
use crate::SaveableRegistry;

/// Marker inserted after a load; consumed by the next `FixedUpdate` tick.
#[derive(Resource, Default)]
pub struct PostLoadRebuildPending;

pub struct PostLoadRebuildPlugin;

impl Plugin for PostLoadRebuildPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            post_load_rebuild
                .run_if(resource_exists::<PostLoadRebuildPending>)
                .in_set(crate::SimulationSet::PreSim)
                .before(crate::placement::apply_placement_commands),
        );
    }
}

/// Replace every registered saveable with the state in `extensions` and
/// schedule the rebuild. Keys missing from the map come back as defaults,
/// since saves skip resources that are still empty.
pub fn restore_from_extensions(world: &mut World, extensions: &BTreeMap<String, Vec<u8>>) {
    world.resource_scope(|world, registry: Mut<SaveableRegistry>| {
        registry.reset_all(world);
        registry.load_all(world, extensions);
    });
    world.insert_resource(PostLoadRebuildPending);
}

fn post_load_rebuild(
    mut commands: Commands,
    tiles: Res<TileMap>,
    mut mining: ResMut<MiningSystem>,
    mut preview: ResMut<PlacementPreview>,
) {
    mining.rebuild_from_grid(tiles.building_cells());
    preview.clear();

    info!(
        "Post-load rebuild complete: {} drills registered from {} buildings",
        mining.active_count(),
        tiles.building_count(),
    );

    commands.remove_resource::<PostLoadRebuildPending>();
}
