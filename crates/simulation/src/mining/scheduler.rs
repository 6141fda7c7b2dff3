use std::collections::{BTreeMap, BTreeSet};

use bevy::prelude::*;

use crate::grid::{BuildingTile, Cell};

use super::types::{GroundLookup, InventorySink, ProducerLookup, ResourceExtracted};

/// Tracks every active drill cell and its extraction timer.
///
/// Cells are registered by placement and pruned lazily: a cell whose building
/// tile is no longer a producer is dropped on the next [`MiningSystem::tick`].
/// Ordered collections keep the per-tick visit order deterministic.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MiningSystem {
    active: BTreeSet<Cell>,
    timers: BTreeMap<Cell, f32>,
}

impl MiningSystem {
    /// Start tracking a drill. An existing timer is left as is.
    pub fn register(&mut self, cell: Cell) {
        self.active.insert(cell);
        self.timers.entry(cell).or_insert(0.0);
    }

    /// Stop tracking a drill and forget its timer.
    pub fn unregister(&mut self, cell: Cell) {
        self.active.remove(&cell);
        self.timers.remove(&cell);
    }

    /// Replace all state with the producers found in `snapshot`.
    ///
    /// Used after the tile map changed behind the scheduler's back (load,
    /// bulk edits). Timers of rebuilt drills start from zero.
    pub fn rebuild_from_grid<'a, I>(&mut self, snapshot: I)
    where
        I: IntoIterator<Item = (Cell, &'a BuildingTile)>,
    {
        self.active.clear();
        self.timers.clear();
        for (cell, tile) in snapshot {
            if tile.is_producer() {
                self.register(cell);
            }
        }
    }

    /// Advance every registered drill by `dt` seconds.
    ///
    /// Each drill extracts at most once per call; time beyond the interval is
    /// discarded rather than carried over. Drills over empty ground idle with
    /// their timer frozen. Returns the extractions that reached the sink.
    pub fn tick<G, R, S>(
        &mut self,
        dt: f32,
        grid: &G,
        ground: &R,
        sink: &mut S,
    ) -> Vec<ResourceExtracted>
    where
        G: ProducerLookup + ?Sized,
        R: GroundLookup + ?Sized,
        S: InventorySink + ?Sized,
    {
        let dt = dt.max(0.0);
        let mut extracted = Vec::new();

        // Snapshot: unregistering below must not disturb the iteration.
        let snapshot: Vec<Cell> = self.active.iter().copied().collect();

        for cell in snapshot {
            let Some(producer) = grid.producer_at(cell) else {
                self.unregister(cell);
                continue;
            };

            let Some(resource) = ground.resource_at(cell) else {
                continue;
            };

            let mut timer = self.timers.get(&cell).copied().unwrap_or(0.0);
            timer += dt;

            if timer >= producer.interval {
                timer = 0.0;
                match sink.add(&resource.item, resource.quantity) {
                    Ok(_) => extracted.push(ResourceExtracted {
                        cell,
                        item: resource.item,
                        quantity: resource.quantity,
                    }),
                    Err(e) => {
                        warn!("Mining drill at {:?}: extraction dropped: {}", cell, e);
                    }
                }
            }

            self.timers.insert(cell, timer);
        }

        extracted
    }

    pub fn is_registered(&self, cell: Cell) -> bool {
        self.active.contains(&cell)
    }

    /// Elapsed seconds towards the next extraction, if the cell is tracked.
    pub fn timer(&self, cell: Cell) -> Option<f32> {
        self.timers.get(&cell).copied()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn active_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.active.iter().copied()
    }
}
