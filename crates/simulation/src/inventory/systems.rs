use bevy::prelude::*;

use super::types::{Inventory, InventoryChanged};

/// Forward recorded inventory changes to `InventoryChanged` events.
pub fn publish_inventory_changes(
    mut inventory: ResMut<Inventory>,
    mut changed: EventWriter<InventoryChanged>,
) {
    // Read through Deref first so idle ticks don't trip change detection.
    if !inventory.has_pending_changes() {
        return;
    }
    for change in inventory.drain_changes() {
        changed.send(change);
    }
}

pub fn log_inventory_changes(
    mut changed: EventReader<InventoryChanged>,
    inventory: Res<Inventory>,
) {
    for change in changed.read() {
        let name = inventory.catalog().display_name(&change.item);
        if change.new_stack {
            info!("Created new stack {} with quantity {}", name, change.added);
        } else {
            info!(
                "Added {} to {} (total {})",
                change.added, name, change.total
            );
        }
    }
}
