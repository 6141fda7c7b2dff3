use bevy::prelude::*;

use crate::grid::{Cell, GroundTile, TileMap};
use crate::inventory::Inventory;
use crate::items::ItemId;
use crate::placement::{BuildTool, PlacementCommand, PlacementQueue};

use super::camera::{CameraRig, CameraSettings, ScreenSize};
use super::events::InputQueue;
use super::gestures::{Gesture, TouchGestures};

/// What a tap on the map ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome {
    /// A placement command was queued for the next tick.
    Queued(PlacementCommand),
    /// A resource was gathered by hand.
    Collected { item: ItemId, total: u32 },
    Ignored,
}

/// Poll the input queue once per frame and apply the resulting gestures.
#[allow(clippy::too_many_arguments)]
pub fn process_input_queue(
    time: Res<Time>,
    mut queue: ResMut<InputQueue>,
    mut gestures: ResMut<TouchGestures>,
    mut rig: ResMut<CameraRig>,
    settings: Res<CameraSettings>,
    screen: Res<ScreenSize>,
    tool: Res<BuildTool>,
    tiles: Res<TileMap>,
    mut inventory: ResMut<Inventory>,
    mut placement: ResMut<PlacementQueue>,
) {
    if queue.is_empty() {
        return;
    }

    let now = time.elapsed_secs();
    for event in queue.drain() {
        let Some(gesture) = gestures.apply(event, now) else {
            continue;
        };
        match gesture {
            Gesture::Pan { delta } => rig.apply_pan(delta, *screen, &settings),
            Gesture::Pinch { delta } => rig.apply_pinch(delta, &settings),
            Gesture::Tap { position } => {
                let Some(cell) = rig.screen_to_cell(position, *screen) else {
                    continue;
                };
                handle_tap(cell, *tool, &tiles, &mut inventory, &mut placement);
            }
        }
    }
}

/// Resolve a tap on `cell` according to the active build tool.
pub fn handle_tap(
    cell: Cell,
    tool: BuildTool,
    tiles: &TileMap,
    inventory: &mut Inventory,
    placement: &mut PlacementQueue,
) -> TapOutcome {
    let command = match tool {
        BuildTool::Place(tile) => PlacementCommand::Place { cell, tile },
        BuildTool::Remove => PlacementCommand::Remove { cell },
        BuildTool::Inspect => return collect_by_hand(cell, tiles, inventory),
    };
    placement.push(command.clone());
    TapOutcome::Queued(command)
}

fn collect_by_hand(cell: Cell, tiles: &TileMap, inventory: &mut Inventory) -> TapOutcome {
    match tiles.ground(cell) {
        Some(GroundTile::Resource { item, amount }) => match inventory.add_item(item, *amount) {
            Ok(total) => TapOutcome::Collected {
                item: item.clone(),
                total,
            },
            Err(e) => {
                warn!("Tap at ({}, {}): {}", cell.x, cell.y, e);
                TapOutcome::Ignored
            }
        },
        Some(GroundTile::Plain) => {
            debug!("Tile clicked at ({}, {}): plain ground", cell.x, cell.y);
            TapOutcome::Ignored
        }
        None => {
            debug!("No tile hit at ({}, {})", cell.x, cell.y);
            TapOutcome::Ignored
        }
    }
}
