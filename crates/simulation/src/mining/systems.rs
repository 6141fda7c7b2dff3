use bevy::prelude::*;

use crate::grid::TileMap;
use crate::inventory::Inventory;

use super::scheduler::MiningSystem;
use super::types::ResourceExtracted;

/// Runs one scheduler tick per `FixedUpdate` step.
pub fn advance_mining(
    time: Res<Time>,
    tiles: Res<TileMap>,
    mut mining: ResMut<MiningSystem>,
    mut inventory: ResMut<Inventory>,
    mut extracted_events: EventWriter<ResourceExtracted>,
) {
    if mining.active_count() == 0 {
        return;
    }

    let extracted = mining.tick(time.delta_secs(), &*tiles, &*tiles, &mut *inventory);
    for event in extracted {
        debug!(
            "Drill at ({}, {}) extracted {} x{}",
            event.cell.x, event.cell.y, event.item, event.quantity
        );
        extracted_events.send(event);
    }
}
