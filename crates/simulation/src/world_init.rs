// =============================================================================
// World generation: a plain ground square with scattered resource patches and
// one starter drill.
// =============================================================================

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    DEFAULT_RESOURCE_AMOUNT, RESOURCE_PATCH_COUNT, RESOURCE_PATCH_RADIUS, WORLD_HALF_EXTENT,
};
use crate::grid::{BuildingTile, Cell, GroundTile, TileMap};
use crate::items::ItemId;
use crate::mining::MiningSystem;
use crate::sim_rng::SimRng;

/// Marker resource that, when present, causes `init_world` to leave the tile
/// map empty. Used by the test harness.
#[derive(Resource)]
pub struct SkipWorldInit;

/// Shape of the generated map.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WorldGenConfig {
    /// Ground spans `-half_extent..half_extent` on both axes.
    pub half_extent: i32,
    pub patch_count: usize,
    pub patch_radius: i32,
    /// Deposit kinds, assigned to patches round-robin.
    pub resources: Vec<ItemId>,
    pub resource_amount: u32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            half_extent: WORLD_HALF_EXTENT,
            patch_count: RESOURCE_PATCH_COUNT,
            patch_radius: RESOURCE_PATCH_RADIUS,
            resources: ["iron_ore", "copper_ore", "coal", "stone"]
                .into_iter()
                .map(ItemId::from)
                .collect(),
            resource_amount: DEFAULT_RESOURCE_AMOUNT,
        }
    }
}

pub struct WorldInitPlugin;

impl Plugin for WorldInitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileMap>()
            .init_resource::<WorldGenConfig>()
            .add_systems(Startup, init_world);

        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<TileMap>();
    }
}

pub fn init_world(
    mut commands: Commands,
    config: Res<WorldGenConfig>,
    mut rng: ResMut<SimRng>,
    mut mining: ResMut<MiningSystem>,
    skip: Option<Res<SkipWorldInit>>,
) {
    if skip.is_some() {
        return;
    }

    let tiles = generate_world(&config, &mut rng);
    mining.rebuild_from_grid(tiles.building_cells());

    info!(
        "World generated: {} ground tiles, {} buildings, {} active drills",
        tiles.ground_count(),
        tiles.building_count(),
        mining.active_count(),
    );
    commands.insert_resource(tiles);
}

/// Build the starting map. Deterministic for a given `rng` state.
pub fn generate_world(config: &WorldGenConfig, rng: &mut SimRng) -> TileMap {
    let mut tiles = TileMap::default();
    let h = config.half_extent.max(0);

    for x in -h..h {
        for y in -h..h {
            tiles.set_ground(Cell::new(x, y), GroundTile::Plain);
        }
    }

    let mut first_patch = None;
    if !config.resources.is_empty() {
        for i in 0..config.patch_count {
            let item = &config.resources[i % config.resources.len()];
            let center = patch_center(h, config.patch_radius, rng);
            scatter_patch(&mut tiles, center, config.patch_radius, item, config.resource_amount);
            first_patch.get_or_insert(center);
        }
    }

    if let Some(cell) = first_patch {
        tiles.set_building(cell, BuildingTile::mining_drill());
    }
    tiles
}

fn patch_center(half_extent: i32, radius: i32, rng: &mut SimRng) -> Cell {
    let lo = -half_extent + radius;
    let hi = half_extent - radius;
    if lo >= hi {
        return Cell::new(0, 0);
    }
    Cell::new(rng.0.gen_range(lo..hi), rng.0.gen_range(lo..hi))
}

/// Fill a disc of plain ground with `item`. Existing deposits are kept, so
/// earlier patches stay intact where patches overlap.
fn scatter_patch(tiles: &mut TileMap, center: Cell, radius: i32, item: &ItemId, amount: u32) {
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let cell = center.offset(dx, dy);
            if tiles.ground(cell) == Some(&GroundTile::Plain) {
                tiles.set_ground(
                    cell,
                    GroundTile::Resource {
                        item: item.clone(),
                        amount,
                    },
                );
            }
        }
    }
}
