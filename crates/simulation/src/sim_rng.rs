//! Seeded `ChaCha8Rng` shared by everything that needs randomness, so the
//! same seed always generates the same world.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::WORLD_SEED;

/// Take `ResMut<SimRng>` and draw from `rng.0`; never use `thread_rng()`.
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self::from_seed_u64(WORLD_SEED)
    }
}

impl SimRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>();
    }
}
