use bevy::prelude::*;

use crate::config::{
    CAMERA_DISTANCE, CAMERA_MAX_FOV, CAMERA_MIN_FOV, CAMERA_PAN_REFERENCE_FOV, CAMERA_PAN_SPEED,
    CAMERA_PINCH_MULTIPLIER, CAMERA_START_FOV, CAMERA_ZOOM_SPEED, DEFAULT_SCREEN_HEIGHT,
    DEFAULT_SCREEN_WIDTH,
};
use crate::grid::Cell;

/// Tunables for touch camera control.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraSettings {
    pub zoom_speed: f32,
    pub pinch_multiplier: f32,
    pub min_fov: f32,
    pub max_fov: f32,
    pub pan_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            zoom_speed: CAMERA_ZOOM_SPEED,
            pinch_multiplier: CAMERA_PINCH_MULTIPLIER,
            min_fov: CAMERA_MIN_FOV,
            max_fov: CAMERA_MAX_FOV,
            pan_speed: CAMERA_PAN_SPEED,
        }
    }
}

/// Window size in pixels, reported by the host.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize(pub Vec2);

impl Default for ScreenSize {
    fn default() -> Self {
        Self(Vec2::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT))
    }
}

impl ScreenSize {
    pub fn is_valid(&self) -> bool {
        self.0.x > 0.0 && self.0.y > 0.0
    }
}

/// Perspective camera looking straight down at the tile plane.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Point on the tile plane under the screen center.
    pub position: Vec2,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Height above the tile plane.
    pub distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            fov: CAMERA_START_FOV,
            distance: CAMERA_DISTANCE,
        }
    }
}

impl CameraRig {
    /// Spreading fingers (positive delta) narrows the fov, i.e. zooms in.
    pub fn apply_pinch(&mut self, delta: f32, settings: &CameraSettings) {
        let fov = self.fov - delta * settings.zoom_speed * settings.pinch_multiplier;
        self.fov = fov.clamp(settings.min_fov, settings.max_fov);
    }

    /// Move so the content follows the finger. The step is resolution
    /// independent and scales with the current fov.
    pub fn apply_pan(&mut self, delta_px: Vec2, screen: ScreenSize, settings: &CameraSettings) {
        if !screen.is_valid() {
            return;
        }
        let viewport_delta = delta_px / screen.0;
        let fov_scale = self.fov / CAMERA_PAN_REFERENCE_FOV;
        self.position -= viewport_delta * settings.pan_speed * fov_scale;
    }

    /// Half the visible extent of the tile plane, in world units.
    pub fn half_extent(&self, screen: ScreenSize) -> Vec2 {
        let half_height = self.distance * (self.fov.to_radians() * 0.5).tan();
        let aspect = if screen.is_valid() {
            screen.0.x / screen.0.y
        } else {
            1.0
        };
        Vec2::new(half_height * aspect, half_height)
    }

    pub fn screen_to_world(&self, screen_pos: Vec2, screen: ScreenSize) -> Option<Vec2> {
        if !screen.is_valid() {
            return None;
        }
        let ndc = screen_pos / screen.0 * 2.0 - Vec2::ONE;
        Some(self.position + ndc * self.half_extent(screen))
    }

    pub fn screen_to_cell(&self, screen_pos: Vec2, screen: ScreenSize) -> Option<Cell> {
        self.screen_to_world(screen_pos, screen).map(Cell::from_world)
    }
}
