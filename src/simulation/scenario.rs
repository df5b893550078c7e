//! Build a fully-initialized scene from configuration
//!
//! Takes a `SceneConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - tuning constants (`Parameters`)
//! - the live point set (`PointSet`, seeded with any configured points)
//! - the per-tick impulse terms (`ImpulseSet`: Brownian noise + origin leash)
//! - the triangulation state (`Triangulation`, stale so frame one builds)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, tick, and drawable-sync systems

use bevy::prelude::Resource;

use crate::configuration::config::{PointConfig, SceneConfig};
use crate::geometry::delaunay::Triangulation;
use crate::simulation::forces::{BrownianMotion, ImpulseSet, OriginReturn};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, PointSet};

/// Bevy resource representing a fully-initialized scene
///
/// This is the main runtime bundle constructed from a [`SceneConfig`]: the
/// constant set, the point table, the active per-tick impulse terms, and the
/// current triangle set
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub points: PointSet,
    pub impulses: ImpulseSet,
    pub triangulation: Triangulation,
}

impl Scenario {
    pub fn build_scenario(cfg: SceneConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            max_points: p_cfg.max_points,
            repulsion_radius: p_cfg.repulsion_radius,
            repulsion_strength: p_cfg.repulsion_strength,
            brownian_strength: p_cfg.brownian_strength,
            max_distance: p_cfg.max_distance,
            return_force: p_cfg.return_force,
            friction: p_cfg.friction,
            bounce_factor: p_cfg.bounce_factor,
            point_radius: p_cfg.point_radius,
            line_thickness: p_cfg.line_thickness,
            seed: p_cfg.seed,
        };

        // Points: map `PointConfig` -> runtime `Point` using nalgebra vectors.
        // Configured points are already in simulation coordinates and keep
        // their listed position as the return-force origin
        let mut points = PointSet::new(parameters.max_points);
        for pc in cfg.points.iter() {
            let PointConfig { x, v } = pc;
            let pos = NVec2::new(x[0], x[1]);
            let idx = points.insert(pos);
            if let Some(v) = v {
                points.points[idx].v = NVec2::new(v[0], v[1]);
            }
        }

        // Per-tick impulse terms: seeded Brownian noise plus the origin leash
        let impulses = ImpulseSet::new()
            .with(BrownianMotion::new(parameters.brownian_strength, parameters.seed))
            .with(OriginReturn {
                max_distance: parameters.max_distance,
                force: parameters.return_force,
            });

        Self {
            parameters,
            points,
            impulses,
            triangulation: Triangulation::new(),
        }
    }
}
