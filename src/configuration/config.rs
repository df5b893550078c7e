//! Configuration types for loading scenes from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene. A scene consists of:
//!
//! - [`ParametersConfig`] – the fixed tuning constants and RNG seed
//! - [`PointConfig`]      – initial state for each pre-placed point
//! - [`ViewerConfig`]     – viewer options (tap sound asset)
//! - [`SceneConfig`]      – top-level wrapper used to load a scene from YAML
//!
//! # YAML format
//! An example scene YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   max_points: 30          # live-set capacity, FIFO eviction beyond this
//!   repulsion_radius: 100.0 # tap repulsion falloff radius (px)
//!   repulsion_strength: 5.0 # tap repulsion impulse scale
//!   brownian_strength: 0.5  # per-component noise scale per tick
//!   max_distance: 50.0      # free-wander radius around each point's origin
//!   return_force: 0.01      # restoring impulse per excess px
//!   friction: 0.95          # per-tick velocity multiplier
//!   bounce_factor: 0.8      # velocity scale on boundary reflection
//!   point_radius: 5.0       # marker circle radius (px)
//!   line_thickness: 2.0     # wireframe line width (px)
//!   seed: 42                # Brownian RNG seed
//!
//! points:                   # optional pre-placed points (sim coordinates)
//!   - x: [ -50.0, 0.0 ]
//!   - x: [  50.0, 0.0 ]
//!     v: [  0.0, 1.0 ]
//!
//! viewer:
//!   tap_sound: "sounds/tap.ogg"  # optional, fire-and-forget on placement
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation

use serde::Deserialize;

/// The fixed constant set for a scene
/// All behavioral parity lives here; there is no runtime tuning
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub max_points: usize,      // live-set capacity
    pub repulsion_radius: f64,  // tap repulsion falloff radius
    pub repulsion_strength: f64, // tap repulsion impulse scale
    pub brownian_strength: f64, // per-component noise scale per tick
    pub max_distance: f64,      // free-wander radius around a point origin
    pub return_force: f64,      // restoring impulse per excess px
    pub friction: f64,          // per-tick velocity multiplier
    pub bounce_factor: f64,     // velocity scale on boundary reflection
    pub point_radius: f64,      // marker circle radius
    pub line_thickness: f64,    // wireframe line width
    pub seed: u64,              // Brownian RNG seed, makes runs reproducable
}

/// Configuration for a single pre-placed point
#[derive(Deserialize, Debug)]
pub struct PointConfig {
    pub x: Vec<f64>,         // initial position in simulation coordinates
    pub v: Option<Vec<f64>>, // optional initial velocity, defaults to rest
}

/// Viewer-side options
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ViewerConfig {
    pub tap_sound: Option<String>, // asset path played on each placement
}

/// Top-level scene configuration loaded from YAML
#[derive(Deserialize, Debug)]
pub struct SceneConfig {
    pub parameters: ParametersConfig, // tuning constants and seed
    #[serde(default)]
    pub points: Vec<PointConfig>, // points placed before the first frame
    #[serde(default)]
    pub viewer: ViewerConfig, // viewer options
}
