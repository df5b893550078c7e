//! Fixed tuning constants for the simulation
//!
//! `Parameters` holds the full behavioral constant set:
//! - live-set capacity and tap repulsion radius/strength,
//! - Brownian noise scale and origin-return leash (`max_distance`, `return_force`),
//! - friction and boundary bounce factors,
//! - marker radius / line width for the viewer and the RNG seed
//!
//! These are config-time constants loaded from the scene file, never
//! runtime-tunable; the defaults are the behavioral-parity values.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub max_points: usize, // live-set capacity, FIFO eviction beyond this
    pub repulsion_radius: f64, // tap repulsion falloff radius (px)
    pub repulsion_strength: f64, // tap repulsion impulse scale
    pub brownian_strength: f64, // per-component noise scale per tick
    pub max_distance: f64, // free-wander radius around each point's origin
    pub return_force: f64, // restoring impulse per excess px
    pub friction: f64, // per-tick velocity multiplier
    pub bounce_factor: f64, // velocity scale on boundary reflection
    pub point_radius: f64, // marker circle radius (px)
    pub line_thickness: f64, // wireframe line width (px, host-limited)
    pub seed: u64, // Brownian RNG seed
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            max_points: 30,
            repulsion_radius: 100.0,
            repulsion_strength: 5.0,
            brownian_strength: 0.5,
            max_distance: 50.0,
            return_force: 0.01,
            friction: 0.95,
            bounce_factor: 0.8,
            point_radius: 5.0,
            line_thickness: 2.0,
            seed: 42,
        }
    }
}
