use bevy::prelude::*;

use crate::grid::Cell;
use crate::inventory::InventoryError;
use crate::items::ItemId;

/// Static configuration of a producer tile type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProducerDescriptor {
    /// Seconds of accumulated work per extraction.
    pub interval: f32,
}

/// What one extraction at a resource cell yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceYield {
    pub item: ItemId,
    pub quantity: u32,
}

/// Building-layer queries the scheduler needs.
pub trait ProducerLookup {
    /// The producer hosted at `cell`, if the building tile there is one.
    fn producer_at(&self, cell: Cell) -> Option<ProducerDescriptor>;

    fn has_producer_tile(&self, cell: Cell) -> bool {
        self.producer_at(cell).is_some()
    }
}

/// Ground-layer queries the scheduler needs.
pub trait GroundLookup {
    fn resource_at(&self, cell: Cell) -> Option<ResourceYield>;
}

/// Destination for extracted items.
pub trait InventorySink {
    /// Add `quantity` of `item`, returning the new total held.
    fn add(&mut self, item: &ItemId, quantity: u32) -> Result<u32, InventoryError>;
}

/// Emitted once for every successful extraction.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ResourceExtracted {
    pub cell: Cell,
    pub item: ItemId,
    pub quantity: u32,
}
