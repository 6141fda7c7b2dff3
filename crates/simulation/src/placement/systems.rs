use bevy::prelude::*;

use crate::grid::{BuildingTile, Cell, TileMap};
use crate::mining::MiningSystem;

use super::result_log::PlacementResultLog;
use super::types::{
    PlacementCommand, PlacementError, PlacementOutcome, PlacementPreview, PlacementQueue,
};

/// Drain the placement queue and apply every command in order.
pub fn apply_placement_commands(
    mut queue: ResMut<PlacementQueue>,
    mut tiles: ResMut<TileMap>,
    mut mining: ResMut<MiningSystem>,
    mut preview: ResMut<PlacementPreview>,
    mut log: ResMut<PlacementResultLog>,
) {
    if queue.is_empty() {
        return;
    }

    for command in queue.drain() {
        let outcome = apply_command(&command, &mut tiles, &mut mining, &mut preview);
        match &outcome {
            PlacementOutcome::Placed { cell, tile } => {
                info!("Placed {} at ({}, {})", tile.name(), cell.x, cell.y);
            }
            PlacementOutcome::Removed { cell, tile } => {
                info!("Removed {} at ({}, {})", tile.name(), cell.x, cell.y);
            }
            PlacementOutcome::Rejected(e) => {
                debug!("Placement rejected: {}", e);
            }
            PlacementOutcome::Previewed(_) | PlacementOutcome::Cancelled => {}
        }
        log.push(command, outcome);
    }
}

/// Apply a single command to the tile map and scheduler.
///
/// Drills register with the scheduler when placed and unregister when
/// removed; other buildings only touch the tile map.
pub fn apply_command(
    command: &PlacementCommand,
    tiles: &mut TileMap,
    mining: &mut MiningSystem,
    preview: &mut PlacementPreview,
) -> PlacementOutcome {
    let outcome = match *command {
        PlacementCommand::Preview { cell, tile } => {
            PlacementOutcome::Previewed(preview.show(cell, tile, tiles))
        }
        PlacementCommand::Cancel => {
            preview.clear();
            PlacementOutcome::Cancelled
        }
        PlacementCommand::Confirm => match preview.current() {
            None => PlacementOutcome::Rejected(PlacementError::NoPreview),
            Some(pending) => {
                let outcome = place(pending.cell, pending.tile, tiles, mining);
                if !outcome.is_rejected() {
                    preview.clear();
                }
                outcome
            }
        },
        PlacementCommand::Place { cell, tile } => place(cell, tile, tiles, mining),
        PlacementCommand::Remove { cell } => match tiles.remove_building(cell) {
            None => PlacementOutcome::Rejected(PlacementError::NothingToRemove(cell)),
            Some(tile) => {
                if tile.is_producer() {
                    mining.unregister(cell);
                }
                PlacementOutcome::Removed { cell, tile }
            }
        },
    };

    preview.revalidate(tiles);
    outcome
}

fn place(
    cell: Cell,
    tile: BuildingTile,
    tiles: &mut TileMap,
    mining: &mut MiningSystem,
) -> PlacementOutcome {
    if tiles.has_building(cell) {
        return PlacementOutcome::Rejected(PlacementError::Occupied(cell));
    }
    tiles.set_building(cell, tile);
    if tile.is_producer() {
        mining.register(cell);
    }
    PlacementOutcome::Placed { cell, tile }
}
