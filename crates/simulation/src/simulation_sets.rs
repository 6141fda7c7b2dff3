//! System ordering for the simulation.
//!
//! # FixedUpdate phases (`SimulationSet`)
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Tick counter, post-load rebuild, queued placement commands.
//!   Everything that changes *which* cells are producers happens here, so the
//!   scheduler never sees a half-applied edit.
//! * **Simulation** – The mining scheduler tick.
//! * **PostSim** – Flushing inventory change notifications. Reads simulation
//!   output, never mutates the tile map or the scheduler.
//!
//! # Update phases (`SimulationUpdateSet`)
//!
//! ```text
//! Input  →  Visual
//! ```
//!
//! * **Input** – Draining the host input queue: gestures, camera, taps.
//! * **Visual** – Host-side presentation (camera sync, labels).

use bevy::prelude::*;

/// Ordered phases for systems running in `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}

/// Ordered phases for systems running in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationUpdateSet {
    Input,
    Visual,
}
