//! Mining drills: the producer scheduler that turns resource tiles under
//! drills into inventory items on a per-drill timer.

pub(crate) mod scheduler;
pub(crate) mod systems;
pub(crate) mod types;

pub use scheduler::MiningSystem;
pub use systems::advance_mining;
pub use types::{
    GroundLookup, InventorySink, ProducerDescriptor, ProducerLookup, ResourceExtracted,
    ResourceYield,
};

use bevy::prelude::*;

pub struct MiningPlugin;

impl Plugin for MiningPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MiningSystem>()
            .add_event::<ResourceExtracted>()
            .add_systems(
                FixedUpdate,
                advance_mining.in_set(crate::SimulationSet::Simulation),
            );
    }
}
