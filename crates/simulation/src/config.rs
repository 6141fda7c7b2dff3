/// Fixed simulation rate. One scheduler tick runs per `FixedUpdate` step.
pub const SIM_TICK_HZ: f64 = 10.0;

/// World units per tile. Tiles are addressed by integer cell coordinates.
pub const CELL_SIZE: f32 = 1.0;

/// Half extent of the generated ground square (cells span `-HALF..HALF`).
pub const WORLD_HALF_EXTENT: i32 = 32;

pub const WORLD_SEED: u64 = 42;
/// Number of resource patches scattered by world generation.
pub const RESOURCE_PATCH_COUNT: usize = 12;
pub const RESOURCE_PATCH_RADIUS: i32 = 2;

/// Seconds between extractions for a mining drill.
pub const DEFAULT_DRILL_INTERVAL: f32 = 2.0;
pub const DEFAULT_FURNACE_INTERVAL: f32 = 2.0;
pub const DEFAULT_PROCESSOR_INTERVAL: f32 = 2.0;
pub const DEFAULT_BELT_SPEED: f32 = 2.0;
pub const DEFAULT_POWER_PLANT_OUTPUT: f32 = 2.0;
/// Items yielded per extraction when a resource tile does not say otherwise.
pub const DEFAULT_RESOURCE_AMOUNT: u32 = 1;

// Camera defaults (degrees for fov, world units for distance).
pub const CAMERA_START_FOV: f32 = 60.0;
pub const CAMERA_MIN_FOV: f32 = 10.0;
pub const CAMERA_MAX_FOV: f32 = 70.0;
pub const CAMERA_DISTANCE: f32 = 10.0;
pub const CAMERA_ZOOM_SPEED: f32 = 0.01;
pub const CAMERA_PINCH_MULTIPLIER: f32 = 10.0;
pub const CAMERA_PAN_SPEED: f32 = 0.01;
/// Reference fov at which pan speed is unscaled.
pub const CAMERA_PAN_REFERENCE_FOV: f32 = 50.0;

/// Portrait phone resolution used until the host reports the real window size.
pub const DEFAULT_SCREEN_WIDTH: f32 = 1080.0;
pub const DEFAULT_SCREEN_HEIGHT: f32 = 1920.0;
