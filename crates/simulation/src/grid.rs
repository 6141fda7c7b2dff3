use std::collections::HashMap;

use bevy::prelude::*;
use bitcode::{Decode, Encode};

use crate::config::{
    CELL_SIZE, DEFAULT_BELT_SPEED, DEFAULT_DRILL_INTERVAL, DEFAULT_FURNACE_INTERVAL,
    DEFAULT_POWER_PLANT_OUTPUT, DEFAULT_PROCESSOR_INTERVAL,
};
use crate::items::ItemId;
use crate::mining::{GroundLookup, ProducerDescriptor, ProducerLookup, ResourceYield};

/// Integer tile coordinate. `z` is constant (0) on the play layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Encode,
    Decode,
)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    /// The cell containing a world-space point on the tile plane.
    pub fn from_world(point: Vec2) -> Self {
        Self::new(
            (point.x / CELL_SIZE).floor() as i32,
            (point.y / CELL_SIZE).floor() as i32,
        )
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }
}

// =============================================================================
// Tile kinds
// =============================================================================

/// Tiles on the building layer. Each kind carries its own tuning payload.
#[derive(Debug, Clone, Copy, PartialEq, Encode, Decode)]
pub enum BuildingTile {
    /// Extracts the resource beneath it every `interval` seconds.
    MiningDrill { interval: f32 },
    Furnace { interval: f32 },
    Processor { interval: f32 },
    ConveyorBelt { speed: f32 },
    CoalPowerPlant { power: f32 },
}

impl BuildingTile {
    pub fn mining_drill() -> Self {
        Self::MiningDrill {
            interval: DEFAULT_DRILL_INTERVAL,
        }
    }

    pub fn furnace() -> Self {
        Self::Furnace {
            interval: DEFAULT_FURNACE_INTERVAL,
        }
    }

    pub fn processor() -> Self {
        Self::Processor {
            interval: DEFAULT_PROCESSOR_INTERVAL,
        }
    }

    pub fn conveyor_belt() -> Self {
        Self::ConveyorBelt {
            speed: DEFAULT_BELT_SPEED,
        }
    }

    pub fn coal_power_plant() -> Self {
        Self::CoalPowerPlant {
            power: DEFAULT_POWER_PLANT_OUTPUT,
        }
    }

    /// Producer configuration if this tile is handled by the mining scheduler.
    pub fn producer(&self) -> Option<ProducerDescriptor> {
        match *self {
            BuildingTile::MiningDrill { interval } => Some(ProducerDescriptor { interval }),
            BuildingTile::Furnace { .. }
            | BuildingTile::Processor { .. }
            | BuildingTile::ConveyorBelt { .. }
            | BuildingTile::CoalPowerPlant { .. } => None,
        }
    }

    pub fn is_producer(&self) -> bool {
        self.producer().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuildingTile::MiningDrill { .. } => "Mining Drill",
            BuildingTile::Furnace { .. } => "Furnace",
            BuildingTile::Processor { .. } => "Processor",
            BuildingTile::ConveyorBelt { .. } => "Conveyor Belt",
            BuildingTile::CoalPowerPlant { .. } => "Coal Power Plant",
        }
    }
}

/// Tiles on the ground layer.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum GroundTile {
    Plain,
    /// A deposit that yields `amount` of `item` per extraction.
    Resource { item: ItemId, amount: u32 },
}

impl GroundTile {
    pub fn resource(&self) -> Option<ResourceYield> {
        match self {
            GroundTile::Plain => None,
            GroundTile::Resource { item, amount } => Some(ResourceYield {
                item: item.clone(),
                quantity: *amount,
            }),
        }
    }
}

// =============================================================================
// TileMap resource
// =============================================================================

/// Sparse two-layer tile map: ground (terrain and deposits) under buildings.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct TileMap {
    ground: HashMap<Cell, GroundTile>,
    buildings: HashMap<Cell, BuildingTile>,
}

impl TileMap {
    pub fn set_ground(&mut self, cell: Cell, tile: GroundTile) {
        self.ground.insert(cell, tile);
    }

    pub fn ground(&self, cell: Cell) -> Option<&GroundTile> {
        self.ground.get(&cell)
    }

    /// Place (or replace) a building tile, returning whatever was there.
    pub fn set_building(&mut self, cell: Cell, tile: BuildingTile) -> Option<BuildingTile> {
        self.buildings.insert(cell, tile)
    }

    pub fn building(&self, cell: Cell) -> Option<&BuildingTile> {
        self.buildings.get(&cell)
    }

    pub fn remove_building(&mut self, cell: Cell) -> Option<BuildingTile> {
        self.buildings.remove(&cell)
    }

    pub fn has_building(&self, cell: Cell) -> bool {
        self.buildings.contains_key(&cell)
    }

    /// Every occupied building cell, in no particular order.
    pub fn building_cells(&self) -> impl Iterator<Item = (Cell, &BuildingTile)> + '_ {
        self.buildings.iter().map(|(c, t)| (*c, t))
    }

    pub fn ground_count(&self) -> usize {
        self.ground.len()
    }

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ground.is_empty() && self.buildings.is_empty()
    }
}

impl ProducerLookup for TileMap {
    fn producer_at(&self, cell: Cell) -> Option<ProducerDescriptor> {
        self.building(cell).and_then(BuildingTile::producer)
    }
}

impl GroundLookup for TileMap {
    fn resource_at(&self, cell: Cell) -> Option<ResourceYield> {
        self.ground(cell).and_then(GroundTile::resource)
    }
}

// =============================================================================
// Saveable
// =============================================================================

#[derive(Encode, Decode, Default)]
struct TileMapSave {
    ground: Vec<(Cell, GroundTile)>,
    buildings: Vec<(Cell, BuildingTile)>,
}

impl crate::Saveable for TileMap {
    const SAVE_KEY: &'static str = "tile_map";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.is_empty() {
            return None;
        }
        // Sorted so identical maps encode to identical bytes.
        let mut ground: Vec<(Cell, GroundTile)> =
            self.ground.iter().map(|(c, t)| (*c, t.clone())).collect();
        ground.sort_by_key(|(c, _)| *c);
        let mut buildings: Vec<(Cell, BuildingTile)> =
            self.buildings.iter().map(|(c, t)| (*c, *t)).collect();
        buildings.sort_by_key(|(c, _)| *c);
        Some(bitcode::encode(&TileMapSave { ground, buildings }))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        let save: TileMapSave = crate::decode_or_warn(Self::SAVE_KEY, bytes);
        Self {
            ground: save.ground.into_iter().collect(),
            buildings: save.buildings.into_iter().collect(),
        }
    }
}
