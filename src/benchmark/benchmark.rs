use std::time::Instant;

use crate::geometry::delaunay::triangulate;
use crate::simulation::forces::{BrownianMotion, ImpulseSet, OriginReturn};
use crate::simulation::params::Parameters;
use crate::simulation::integrator::step_points;
use crate::simulation::states::{Bounds, NVec2, Point, PointSet};

/// Helper to build a deterministic point cloud of size `n`, no rand needed
fn make_points(n: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let pos = NVec2::new((i_f * 0.37).sin() * 300.0, (i_f * 0.13).cos() * 200.0);
        points.push(Point::at(pos));
    }

    points
}

/// Time the brute-force triangulation across point counts
///
/// O(n^4), so the interesting range stops well before anything large; the
/// live set is capped at 30 in practice
pub fn bench_triangulation() {
    let ns = [10, 20, 30, 40, 60];

    for n in ns {
        let points = make_points(n);

        // Warm up
        let _ = triangulate(&points);

        let t0 = Instant::now();
        let triangles = triangulate(&points);
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "n = {n:3}, triangles = {:4}, triangulate = {:8.6} s",
            triangles.len(),
            dt
        );
    }
}

/// Time the per-tick integrator across point counts
pub fn bench_step() {
    let ns = [10, 30, 100, 300];
    let steps = 1000; // integrator steps per size

    let params = Parameters::default();
    let bounds = Bounds::from_screen(800.0, 600.0);

    for n in ns {
        let mut set = PointSet::new(n);
        for p in make_points(n) {
            set.insert(p.x);
        }

        let mut impulses = ImpulseSet::new()
            .with(BrownianMotion::new(params.brownian_strength, params.seed))
            .with(OriginReturn {
                max_distance: params.max_distance,
                force: params.return_force,
            });

        // Warm up
        step_points(&mut set, &mut impulses, &params, bounds);

        let t0 = Instant::now();
        for _ in 0..steps {
            step_points(&mut set, &mut impulses, &params, bounds);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("n = {n:3}, step = {:10.8} s", per_step);
    }
}
