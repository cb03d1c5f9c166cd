//! Shared configuration for Scarab
//!
//! This crate provides the single source of truth for window dimensions,
//! asset locations, mesh naming, camera defaults and environment capture
//! settings shared across all build modes (native, WASM).

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1280;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 800;

/// Frames between environment snapshot refreshes
pub const REFLECTION_INTERVAL_FRAMES: u32 = 30;

/// Edge length of each environment snapshot face in pixels
pub const REFLECTION_RESOLUTION: u32 = 256;

/// Display configuration for window and rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct DisplayConfig {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Asset paths relative to the asset root. Fixed at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPaths {
    pub model: String,
    pub spots_mask: String,
    pub stripes_mask: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            model: "models/beetle2.glb".to_string(),
            spots_mask: "textures/pattern_mask_bw_1.png".to_string(),
            stripes_mask: "textures/pattern_mask_bw_2.png".to_string(),
        }
    }
}

/// Exact node/mesh names the model is expected to contain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshNames {
    pub carapace: String,
    /// Head variants in enumeration order (A, B, C)
    pub heads: [String; 3],
    pub legs: String,
}

impl Default for MeshNames {
    fn default() -> Self {
        Self {
            carapace: "Carapace".to_string(),
            heads: [
                "Head_A".to_string(),
                "Head_B".to_string(),
                "Head_C".to_string(),
            ],
            legs: "Legs".to_string(),
        }
    }
}

/// Environment snapshot capture rig
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionConfig {
    pub interval_frames: u32,
    pub resolution: u32,
    pub near: f32,
    pub far: f32,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            interval_frames: REFLECTION_INTERVAL_FRAMES,
            resolution: REFLECTION_RESOLUTION,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Main camera placement and orbit behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Fraction of the remaining orbit velocity consumed per 60 Hz frame
    pub damping_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 2.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            damping_factor: 0.05,
        }
    }
}

/// Background and ground grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    /// Packed 0xRRGGBB sRGB color
    pub background: u32,
    pub grid_size: f32,
    pub grid_divisions: u32,
    pub grid_center_color: u32,
    pub grid_color: u32,
    pub grid_height: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            background: 0xf0f0f0,
            grid_size: 50.0,
            grid_divisions: 50,
            grid_center_color: 0x888888,
            grid_color: 0xcccccc,
            grid_height: -2.0,
        }
    }
}

/// Everything the viewer needs to set itself up
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct ViewerConfig {
    pub assets: AssetPaths,
    pub meshes: MeshNames,
    pub reflection: ReflectionConfig,
    pub camera: CameraConfig,
    pub stage: StageConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_viewer_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.reflection.interval_frames, 30);
        assert_eq!(config.meshes.heads[0], "Head_A");
        assert_eq!(config.assets.model, "models/beetle2.glb");
        assert_eq!(config.camera.position, [0.0, 2.0, 5.0]);
    }
}
