//! Renderer configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::projection::{Camera, Viewport};
use crate::vector::{Vec2, Vec3};

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value outside its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which layers `Renderer::render` draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    pub fill: bool,
    pub wireframe: bool,
    pub vertices: bool,
    pub grid: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            fill: true,
            wireframe: true,
            vertices: false,
            grid: true,
        }
    }
}

/// Packed `0xAARRGGBB` colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: u32,
    pub grid: u32,
    pub fill: u32,
    pub wireframe: u32,
    pub vertex: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: 0xFF00_0000,
            grid: 0xFF44_4444,
            fill: 0xFF80_8080,
            wireframe: 0xFF00_FFFF,
            vertex: 0xFFFF_0000,
        }
    }
}

/// Everything the pipeline reads each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Perspective focal factor, in pixels
    pub focal_length: f32,
    /// Distance the mesh is pushed along +Z; must exceed the mesh radius
    pub camera_z_offset: f32,
    /// Only used by the back-face test
    pub camera_position: [f32; 3],
    /// Radians added to the rotation on each axis every frame
    pub rotation_delta: [f32; 3],
    /// Fixed model orientation applied after the per-frame rotation
    pub base_rotation: [f32; 3],
    /// Added to every projected point
    pub screen_offset: [f32; 2],
    pub cull_backfaces: bool,
    pub grid_spacing: u32,
    pub draw: DrawOptions,
    pub colors: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            focal_length: 640.0,
            camera_z_offset: 5.0,
            camera_position: [0.0; 3],
            rotation_delta: [0.01; 3],
            base_rotation: [0.0; 3],
            screen_offset: [0.0; 2],
            cull_backfaces: true,
            grid_spacing: 10,
            draw: DrawOptions::default(),
            colors: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Load and validate a TOML configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded render config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document; missing fields take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "focal_length must be positive, got {}",
                self.focal_length
            )));
        }
        if !(self.camera_z_offset.is_finite() && self.camera_z_offset > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera_z_offset must be positive, got {}",
                self.camera_z_offset
            )));
        }
        if self.grid_spacing == 0 {
            return Err(ConfigError::Invalid("grid_spacing must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn camera(&self) -> Camera {
        Camera {
            position: Vec3::from(self.camera_position),
            focal_length: self.focal_length,
            screen_offset: Vec2::from(self.screen_offset),
        }
    }

    pub fn rotation_delta(&self) -> Vec3 {
        Vec3::from(self.rotation_delta)
    }

    pub fn base_rotation(&self) -> Vec3 {
        Vec3::from(self.base_rotation)
    }
}
