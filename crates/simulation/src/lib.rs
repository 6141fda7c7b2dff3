use bevy::prelude::*;
use std::collections::BTreeMap;

pub mod config;
pub mod grid;
pub mod input;
pub mod inventory;
pub mod items;
pub mod mining;
pub mod placement;
pub mod post_load_rebuild;
pub mod sim_rng;
pub mod simulation_sets;
pub mod world_init;


pub use simulation_sets::{SimulationSet, SimulationUpdateSet};

// ---------------------------------------------------------------------------
// Saveable trait + registry for the extension map save pattern
// ---------------------------------------------------------------------------

/// A resource that persists itself as opaque bytes under a stable key.
///
/// Feature plugins register their own resources, so the host's save code
/// only ever deals with the key → bytes map.
pub trait Saveable: Resource + Default + Send + Sync + 'static {
    /// Key in the extension map. Must never change once shipped.
    const SAVE_KEY: &'static str;

    /// `None` skips the entry, e.g. when the resource is still at its default.
    fn save_to_bytes(&self) -> Option<Vec<u8>>;

    fn load_from_bytes(bytes: &[u8]) -> Self;
}

/// `bitcode::decode`, falling back to `Default` with a warning on bad bytes.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(key: &str, bytes: &[u8]) -> T {
    match bitcode::decode(bytes) {
        Ok(v) => v,
        Err(e) => {
            warn!(
                "Saveable {}: failed to decode {} bytes, falling back to default: {}",
                key,
                bytes.len(),
                e
            );
            T::default()
        }
    }
}

pub type SaveFn = Box<dyn Fn(&World) -> Option<Vec<u8>> + Send + Sync>;
pub type LoadFn = Box<dyn Fn(&mut World, &[u8]) + Send + Sync>;
pub type ResetFn = Box<dyn Fn(&mut World) + Send + Sync>;

/// Type-erased save/load/reset for one registered resource.
pub struct SaveableEntry {
    pub key: String,
    pub save_fn: SaveFn,
    pub load_fn: LoadFn,
    pub reset_fn: ResetFn,
}

#[derive(Resource, Default)]
pub struct SaveableRegistry {
    pub entries: Vec<SaveableEntry>,
}

impl SaveableRegistry {
    /// Register a `Saveable` resource. A second registration under the same
    /// key is ignored (and trips a debug assertion).
    pub fn register<T: Saveable>(&mut self) {
        let key = T::SAVE_KEY.to_string();
        if self.contains(&key) {
            warn!(
                "SaveableRegistry: duplicate key '{}', ignoring second registration",
                key
            );
            debug_assert!(false, "SaveableRegistry: duplicate key '{}'", key);
            return;
        }
        self.entries.push(SaveableEntry {
            key,
            save_fn: Box::new(|world: &World| {
                world.get_resource::<T>().and_then(|r| r.save_to_bytes())
            }),
            load_fn: Box::new(|world: &mut World, bytes: &[u8]| {
                world.insert_resource(T::load_from_bytes(bytes));
            }),
            reset_fn: Box::new(|world: &mut World| {
                world.insert_resource(T::default());
            }),
        });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn save_all(&self, world: &World) -> BTreeMap<String, Vec<u8>> {
        let mut extensions = BTreeMap::new();
        for entry in &self.entries {
            if let Some(bytes) = (entry.save_fn)(world) {
                extensions.insert(entry.key.clone(), bytes);
            }
        }
        extensions
    }

    /// Resources whose key is absent keep their current value.
    pub fn load_all(&self, world: &mut World, extensions: &BTreeMap<String, Vec<u8>>) {
        for entry in &self.entries {
            if let Some(bytes) = extensions.get(&entry.key) {
                (entry.load_fn)(world, bytes);
            }
        }
    }

    pub fn reset_all(&self, world: &mut World) {
        for entry in &self.entries {
            (entry.reset_fn)(world);
        }
    }
}

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Number of `FixedUpdate` steps run so far.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(config::SIM_TICK_HZ))
            .init_resource::<TickCounter>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::PreSim,
                    SimulationSet::Simulation,
                    SimulationSet::PostSim,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                (SimulationUpdateSet::Input, SimulationUpdateSet::Visual).chain(),
            )
            .add_systems(FixedUpdate, tick_counter.in_set(SimulationSet::PreSim));

        app.add_plugins((
            sim_rng::SimRngPlugin,
            inventory::InventoryPlugin,
            mining::MiningPlugin,
            placement::PlacementPlugin,
            world_init::WorldInitPlugin,
            input::InputPlugin,
            post_load_rebuild::PostLoadRebuildPlugin,
        ));
    }
}

pub fn tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}
