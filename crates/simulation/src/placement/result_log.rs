//! Ring buffer of recent placement commands and their outcomes, for UI
//! feedback and tests.

use bevy::prelude::*;

use super::types::{PlacementCommand, PlacementOutcome};

const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct PlacementResultLog {
    entries: Vec<(PlacementCommand, PlacementOutcome)>,
}

impl PlacementResultLog {
    /// Record an outcome, evicting the oldest entry when full.
    pub fn push(&mut self, command: PlacementCommand, outcome: PlacementOutcome) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((command, outcome));
    }

    pub fn last(&self) -> Option<&(PlacementCommand, PlacementOutcome)> {
        self.entries.last()
    }

    pub fn last_n(&self, n: usize) -> &[(PlacementCommand, PlacementOutcome)] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
