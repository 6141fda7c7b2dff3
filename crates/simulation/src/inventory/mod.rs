//! The player's shared inventory: validated stack merging plus change
//! notifications for observers (UI, logging).

pub(crate) mod systems;
pub(crate) mod types;

pub use systems::{log_inventory_changes, publish_inventory_changes};
pub use types::{Inventory, InventoryChanged, InventoryError, ItemStack};

use bevy::prelude::*;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .add_event::<InventoryChanged>()
            .add_systems(
                FixedUpdate,
                publish_inventory_changes.in_set(crate::SimulationSet::PostSim),
            );

        // Hand-collected items arrive from Update; flush them the same frame.
        app.add_systems(
            Update,
            (publish_inventory_changes, log_inventory_changes)
                .chain()
                .after(crate::SimulationUpdateSet::Input),
        );

        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<Inventory>();
    }
}
