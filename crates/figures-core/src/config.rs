//! Configuration types for the Figures scene driver.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional and falls back to the behavior of the
//! demo driver.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`SceneConfig`] - Offsets applied by [`Scene::run`](crate::scene::Scene::run).
//!
//! # Example
//!
//! ```
//! # use figures_core::{config::AppConfig, geometry::Offset};
//! let config = AppConfig::default();
//! assert_eq!(config.scene().move_offset(), Offset::new(1, 1));
//! assert_eq!(config.scene().axis_offset(), Offset::new(2, 3));
//! ```

use serde::Deserialize;

use crate::geometry::Offset;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scene configuration section.
    #[serde(default)]
    scene: SceneConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified scene configuration.
    pub fn new(scene: SceneConfig) -> Self {
        Self { scene }
    }

    /// Returns the scene configuration.
    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }
}

/// Offsets used when driving a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SceneConfig {
    /// Offset passed to `move_by` on every shape.
    #[serde(default = "default_move_offset")]
    move_offset: Offset,

    /// Per-axis offsets applied to shapes that support axis moves.
    #[serde(default = "default_axis_offset")]
    axis_offset: Offset,
}

impl SceneConfig {
    /// Creates a new [`SceneConfig`].
    ///
    /// # Arguments
    ///
    /// * `move_offset` - Offset applied to every shape.
    /// * `axis_offset` - `dx` is applied along x, then `dy` along y, to axis-movable shapes.
    pub fn new(move_offset: Offset, axis_offset: Offset) -> Self {
        Self {
            move_offset,
            axis_offset,
        }
    }

    /// Returns the offset applied to every shape.
    pub fn move_offset(&self) -> Offset {
        self.move_offset
    }

    /// Returns the offset applied axis by axis to axis-movable shapes.
    pub fn axis_offset(&self) -> Offset {
        self.axis_offset
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new(default_move_offset(), default_axis_offset())
    }
}

fn default_move_offset() -> Offset {
    Offset::new(1, 1)
}

fn default_axis_offset() -> Offset {
    Offset::new(2, 3)
}
