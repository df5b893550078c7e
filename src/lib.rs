pub mod simulation;
pub mod geometry;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{screen_to_sim, Bounds, NVec2, Point, PointSet};
pub use simulation::params::Parameters;
pub use simulation::forces::{BrownianMotion, Impulse, ImpulseSet, OriginReturn, Repulsion};
pub use simulation::integrator::step_points;
pub use simulation::engine::{place_point, tick, TapPhase, TapState, TickOutcome};
pub use simulation::scenario::Scenario;

pub use geometry::triangle::{Triangle, COLLINEAR_EPS};
pub use geometry::delaunay::{triangulate, Triangulation};

pub use configuration::config::{ParametersConfig, PointConfig, SceneConfig, ViewerConfig};

pub use visualization::viewer::run_viewer;
pub use visualization::color::pastel_rgb;

pub use benchmark::benchmark::{bench_step, bench_triangulation};
