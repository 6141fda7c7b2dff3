use std::fmt;

use bevy::prelude::*;

use crate::grid::{BuildingTile, Cell, TileMap};

/// Player intent for the building layer. Queued and applied once per tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementCommand {
    /// Show a ghost of `tile` at `cell` without committing it.
    Preview { cell: Cell, tile: BuildingTile },
    /// Commit the current preview.
    Confirm,
    /// Drop the current preview.
    Cancel,
    /// Preview and confirm in one step.
    Place { cell: Cell, tile: BuildingTile },
    Remove { cell: Cell },
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PlacementQueue {
    pending: Vec<PlacementCommand>,
}

impl PlacementQueue {
    pub fn push(&mut self, command: PlacementCommand) {
        self.pending.push(command);
    }

    pub fn drain(&mut self) -> Vec<PlacementCommand> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPlacement {
    pub cell: Cell,
    pub tile: BuildingTile,
    /// Whether the building layer is free at `cell`.
    pub valid: bool,
}

/// The ghost building currently shown to the player, if any.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PlacementPreview {
    pending: Option<PendingPlacement>,
}

impl PlacementPreview {
    pub fn show(&mut self, cell: Cell, tile: BuildingTile, tiles: &TileMap) -> PendingPlacement {
        let pending = PendingPlacement {
            cell,
            tile,
            valid: !tiles.has_building(cell),
        };
        self.pending = Some(pending);
        pending
    }

    pub fn current(&self) -> Option<PendingPlacement> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Recompute validity after the tile map changed.
    pub fn revalidate(&mut self, tiles: &TileMap) {
        if let Some(pending) = self.pending.as_mut() {
            pending.valid = !tiles.has_building(pending.cell);
        }
    }
}

/// What a tap on the map does.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub enum BuildTool {
    /// Taps inspect tiles and hand-collect resources.
    #[default]
    Inspect,
    Place(BuildingTile),
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementError {
    Occupied(Cell),
    NoPreview,
    NothingToRemove(Cell),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Occupied(c) => write!(f, "cell ({}, {}) is occupied", c.x, c.y),
            PlacementError::NoPreview => f.write_str("nothing to confirm"),
            PlacementError::NothingToRemove(c) => {
                write!(f, "no building at ({}, {})", c.x, c.y)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

#[derive(Debug, Clone, PartialEq)]
pub enum PlacementOutcome {
    Previewed(PendingPlacement),
    Placed { cell: Cell, tile: BuildingTile },
    Removed { cell: Cell, tile: BuildingTile },
    Cancelled,
    Rejected(PlacementError),
}

impl PlacementOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, PlacementOutcome::Rejected(_))
    }
}
