//! Building placement: a queued preview/confirm/remove flow that keeps the
//! tile map and the mining scheduler in step.

pub(crate) mod result_log;
pub(crate) mod systems;
pub(crate) mod types;

pub use result_log::PlacementResultLog;
pub use systems::{apply_command, apply_placement_commands};
pub use types::{
    BuildTool, PendingPlacement, PlacementCommand, PlacementError, PlacementOutcome,
    PlacementPreview, PlacementQueue,
};

use bevy::prelude::*;

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementQueue>()
            .init_resource::<PlacementPreview>()
            .init_resource::<PlacementResultLog>()
            .init_resource::<BuildTool>()
            .add_systems(
                FixedUpdate,
                apply_placement_commands.in_set(crate::SimulationSet::PreSim),
            );
    }
}
