use trisim::geometry::delaunay::{triangulate, Triangulation};
use trisim::geometry::triangle::Triangle;
use trisim::simulation::engine::{place_point, tick, TapState, TickOutcome};
use trisim::simulation::forces::{BrownianMotion, Impulse, ImpulseSet, OriginReturn, Repulsion};
use trisim::simulation::integrator::step_points;
use trisim::simulation::params::Parameters;
use trisim::simulation::scenario::Scenario;
use trisim::simulation::states::{screen_to_sim, Bounds, NVec2, Point, PointSet};
use trisim::visualization::color::pastel_rgb;

/// Default constants with the Brownian noise forced off, so runs are
/// fully deterministic
pub fn quiet_params() -> Parameters {
    Parameters {
        brownian_strength: 0.0,
        ..Parameters::default()
    }
}

/// Build the per-tick impulse set matching `p` (noise + origin leash)
pub fn impulse_set(p: &Parameters) -> ImpulseSet {
    ImpulseSet::new()
        .with(BrownianMotion::new(p.brownian_strength, p.seed))
        .with(OriginReturn {
            max_distance: p.max_distance,
            force: p.return_force,
        })
}

/// Point set at capacity 30 seeded with the given simulation coordinates
pub fn set_from(coords: &[(f64, f64)]) -> PointSet {
    let mut set = PointSet::new(30);
    for &(x, y) in coords {
        set.insert(NVec2::new(x, y));
    }
    set
}

/// Scenario bundle around `params` with an empty point set
pub fn scenario_from(params: Parameters) -> Scenario {
    let impulses = impulse_set(&params);
    let points = PointSet::new(params.max_points);
    Scenario {
        parameters: params,
        points,
        impulses,
        triangulation: Triangulation::new(),
    }
}

/// Bounds far away from everything under test
pub fn far_bounds() -> Bounds {
    Bounds::from_screen(100_000.0, 100_000.0)
}

/// Deterministic scattered cloud, no rand needed
pub fn scattered(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            Point::at(NVec2::new((f * 0.37).sin() * 300.0, (f * 1.13).cos() * 200.0))
        })
        .collect()
}

// ==================================================================================
// Delaunay triangulation tests
// ==================================================================================

#[test]
fn delaunay_empty_circumcircle_property() {
    let pts = scattered(12);
    let tris = triangulate(&pts);

    assert!(!tris.is_empty(), "Expected triangles for a 12-point cloud");

    // No retained triangle has any other point strictly inside its circumcircle
    for t in &tris {
        for (m, p) in pts.iter().enumerate() {
            if m == t.a || m == t.b || m == t.c {
                continue;
            }
            assert!(
                !t.circumcircle_contains(&pts, p.x),
                "Point {m} inside circumcircle of ({}, {}, {})",
                t.a,
                t.b,
                t.c
            );
        }
    }
}

#[test]
fn delaunay_is_maximal() {
    let pts = scattered(10);
    let tris = triangulate(&pts);
    let n = pts.len();

    // Independently enumerate every non-degenerate empty-circle triple and
    // require exact agreement with the returned set
    let mut expected = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let t = Triangle::new(i, j, k);
                if t.is_degenerate(&pts) {
                    continue;
                }
                let empty = pts
                    .iter()
                    .enumerate()
                    .filter(|(m, _)| *m != i && *m != j && *m != k)
                    .all(|(_, p)| !t.circumcircle_contains(&pts, p.x));
                if empty {
                    expected.push(t);
                }
            }
        }
    }

    assert_eq!(tris, expected, "Triangulation is not the maximal empty-circle set");
}

#[test]
fn collinear_points_never_form_triangle() {
    // Three collinear points alone produce nothing
    let line = set_from(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert!(triangulate(&line.points).is_empty());

    // With an apex present, the collinear triple still never appears
    let with_apex = set_from(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.5, 3.0)]);
    let tris = triangulate(&with_apex.points);
    assert!(!tris.is_empty());
    assert!(
        !tris.contains(&Triangle::new(0, 1, 2)),
        "Collinear triple was retained"
    );
}

#[test]
fn on_circle_point_is_not_inside() {
    // Unit square: all four points are cocircular
    let square = set_from(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    let t = Triangle::new(0, 1, 2);

    // The fourth corner sits exactly on the circumcircle: not inside
    assert!(!t.circumcircle_contains(&square.points, square.points[3].x));

    // Strictness means every one of the four cocircular triangles survives
    let tris = triangulate(&square.points);
    assert_eq!(tris.len(), 4);
}

#[test]
fn triangulate_needs_three_points() {
    assert!(triangulate(&[]).is_empty());
    assert!(triangulate(&set_from(&[(1.0, 2.0)]).points).is_empty());
    assert!(triangulate(&set_from(&[(1.0, 2.0), (3.0, 4.0)]).points).is_empty());
}

#[test]
fn color_seed_is_deterministic() {
    let pts = scattered(6);
    let t = Triangle::new(0, 2, 4);

    // Repeated calls agree
    assert_eq!(t.color_seed(&pts), t.color_seed(&pts));

    // Rebuilding the triangulation from unchanged positions reproduces
    // every seed bit-for-bit
    let first: Vec<u32> = triangulate(&pts).iter().map(|t| t.color_seed(&pts)).collect();
    let second: Vec<u32> = triangulate(&pts).iter().map(|t| t.color_seed(&pts)).collect();
    assert_eq!(first, second);

    // Moving a vertex changes that triangle's seed
    let mut moved = pts.clone();
    moved[0].x += NVec2::new(10.0, -7.0);
    assert_ne!(t.color_seed(&pts), t.color_seed(&moved));
}

#[test]
fn triangulation_clear_is_idempotent() {
    let pts = scattered(8);
    let mut tri = Triangulation::new();
    tri.rebuild(&pts);
    assert!(!tri.triangles().is_empty());
    assert!(!tri.is_stale());

    tri.clear();
    assert!(tri.triangles().is_empty());
    assert!(tri.is_stale());

    // Second clear is a no-op, not a fault
    tri.clear();
    assert!(tri.triangles().is_empty());
}

// ==================================================================================
// Point set / physics tests
// ==================================================================================

#[test]
fn screen_to_sim_centers_and_flips_y() {
    // Top-left corner of an 800x600 screen
    let p = screen_to_sim(0.0, 0.0, 800.0, 600.0);
    assert_eq!(p, NVec2::new(-400.0, 300.0));

    // Screen center maps to the simulation origin
    let c = screen_to_sim(400.0, 300.0, 800.0, 600.0);
    assert_eq!(c, NVec2::new(0.0, 0.0));
}

#[test]
fn eviction_is_fifo() {
    let mut set = PointSet::new(30);
    for i in 0..31 {
        set.insert(NVec2::new(i as f64, 0.0));
    }

    assert_eq!(set.len(), 30);
    // The very first insert is gone; the rest keep their relative order
    for (slot, p) in set.points.iter().enumerate() {
        assert_eq!(p.origin.x, (slot + 1) as f64);
    }
}

#[test]
fn repulsion_zero_distance_is_safe() {
    // Two points at identical coordinates, tap at the same spot
    let mut set = set_from(&[(5.0, 5.0), (5.0, 5.0)]);
    let mut shove = Repulsion {
        center: NVec2::new(5.0, 5.0),
        radius: 100.0,
        strength: 5.0,
    };

    let mut dv = vec![NVec2::zeros(); set.len()];
    shove.impulse(&set, &mut dv);

    for d in &dv {
        assert_eq!(*d, NVec2::zeros(), "Coincident point received an impulse");
        assert!(d.x.is_finite() && d.y.is_finite());
    }

    for (p, d) in set.points.iter_mut().zip(dv.iter()) {
        p.v += *d;
    }
    assert_eq!(set.points[0].v, NVec2::zeros());
    assert_eq!(set.points[1].v, NVec2::zeros());
}

#[test]
fn repulsion_falls_off_linearly() {
    let set = set_from(&[(30.0, 0.0), (500.0, 0.0)]);
    let mut shove = Repulsion {
        center: NVec2::new(0.0, 0.0),
        radius: 100.0,
        strength: 5.0,
    };

    let mut dv = vec![NVec2::zeros(); set.len()];
    shove.impulse(&set, &mut dv);

    // In range: magnitude strength * (1 - d/radius), directed away from the tap
    let expected = 5.0 * (1.0 - 30.0 / 100.0);
    assert!((dv[0].x - expected).abs() < 1e-12);
    assert_eq!(dv[0].y, 0.0);

    // Out of range: untouched
    assert_eq!(dv[1], NVec2::zeros());
}

#[test]
fn brownian_noise_is_bounded_and_seeded() {
    let set = set_from(&[(0.0, 0.0), (10.0, 10.0), (-20.0, 5.0)]);

    let mut noise_a = BrownianMotion::new(2.0, 7);
    let mut noise_b = BrownianMotion::new(2.0, 7);

    let mut dv_a = vec![NVec2::zeros(); set.len()];
    let mut dv_b = vec![NVec2::zeros(); set.len()];
    noise_a.impulse(&set, &mut dv_a);
    noise_b.impulse(&set, &mut dv_b);

    // Same seed, same draw
    assert_eq!(dv_a, dv_b);

    // Each component stays within [-0.5, 0.5] * strength
    for d in &dv_a {
        assert!(d.x.abs() <= 1.0 && d.y.abs() <= 1.0, "Noise out of range: {d:?}");
    }
}

#[test]
fn boundary_reflection_flips_and_scales() {
    let mut params = quiet_params();
    params.friction = 1.0; // isolate the bounce

    // 200x200 screen: half-width 100
    let bounds = Bounds::from_screen(200.0, 200.0);

    let mut set = PointSet::new(30);
    set.insert(NVec2::new(105.0, 0.0));
    set.points[0].v = NVec2::new(3.0, 0.0);

    let mut impulses = impulse_set(&params);
    let moved = step_points(&mut set, &mut impulses, &params, bounds);

    assert!(moved);
    let p = &set.points[0];
    assert_eq!(p.x.x, 100.0, "Position not clamped to the boundary");
    assert_eq!(p.v.x, -3.0 * params.bounce_factor, "Velocity not flipped and scaled");
    assert_eq!(p.x.y, 0.0, "y position disturbed by an x-axis bounce");
    assert_eq!(p.v.y, 0.0);
}

#[test]
fn origin_return_converges_to_leash() {
    let params = quiet_params();

    // Displace a point well past the leash radius without moving its origin
    let mut set = PointSet::new(30);
    set.insert(NVec2::new(0.0, 0.0));
    set.points[0].x = NVec2::new(200.0, 0.0);

    let mut impulses = impulse_set(&params);
    let bounds = far_bounds();

    let mut dist = set.points[0].x.norm();
    let mut reached = false;
    for _ in 0..2000 {
        step_points(&mut set, &mut impulses, &params, bounds);
        let next = (set.points[0].x - set.points[0].origin).norm();
        if dist > params.max_distance {
            assert!(next < dist, "Distance from origin diverged: {next} >= {dist}");
        }
        dist = next;
        if dist <= params.max_distance {
            reached = true;
            break;
        }
    }

    assert!(reached, "Never converged back to the leash radius, stuck at {dist}");
}

#[test]
fn step_reports_motion_only_when_something_moved() {
    let params = quiet_params();
    let mut set = set_from(&[(10.0, 10.0), (-10.0, -10.0)]);
    let mut impulses = impulse_set(&params);

    // At rest, inside the leash, no noise: nothing moves
    assert!(!step_points(&mut set, &mut impulses, &params, far_bounds()));

    set.points[0].v = NVec2::new(0.5, 0.0);
    assert!(step_points(&mut set, &mut impulses, &params, far_bounds()));
}

// ==================================================================================
// Orchestration tests
// ==================================================================================

#[test]
fn tick_trigger_policy() {
    let mut scenario = scenario_from(quiet_params());
    for &(x, y) in &[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (80.0, 80.0)] {
        scenario.points.insert(NVec2::new(x, y));
    }
    scenario.triangulation.mark_stale();

    // Stale topology: the first tick rebuilds
    assert_eq!(tick(&mut scenario, far_bounds()), TickOutcome::Recomputed);
    let membership: Vec<Triangle> = scenario.triangulation.triangles().to_vec();
    assert!(!membership.is_empty());

    // Nothing moving, topology current: idle
    assert_eq!(tick(&mut scenario, far_bounds()), TickOutcome::Idle);

    // Pure motion: geometry refresh, membership untouched
    scenario.points.points[0].v = NVec2::new(1.0, 0.0);
    assert_eq!(tick(&mut scenario, far_bounds()), TickOutcome::Refreshed);
    assert_eq!(scenario.triangulation.triangles(), &membership[..]);
}

#[test]
fn place_point_converts_shoves_and_invalidates() {
    let mut scenario = scenario_from(quiet_params());

    // A resident point 30px right of the screen center
    scenario.points.insert(NVec2::new(30.0, 0.0));
    // Drain the initial staleness
    tick(&mut scenario, far_bounds());

    // Tap the center of an 800x600 screen
    let idx = place_point(&mut scenario, 400.0, 300.0, 800.0, 600.0);

    assert_eq!(idx, 1);
    assert_eq!(scenario.points.points[idx].x, NVec2::new(0.0, 0.0));
    assert!(scenario.triangulation.is_stale(), "Tap did not invalidate topology");

    // The resident was shoved away from the tap, the new point was not
    let expected = scenario.parameters.repulsion_strength
        * (1.0 - 30.0 / scenario.parameters.repulsion_radius);
    assert!((scenario.points.points[0].v.x - expected).abs() < 1e-12);
    assert_eq!(scenario.points.points[idx].v, NVec2::zeros());
}

#[test]
fn place_point_evicts_fifo_at_capacity() {
    let mut scenario = scenario_from(quiet_params());

    // 31 taps across the screen; capacity is 30
    for i in 0..31 {
        let sx = 100.0 + (i as f64) * 15.0;
        place_point(&mut scenario, sx, 300.0, 800.0, 600.0);
    }

    assert_eq!(scenario.points.len(), 30);
    // The first tap (screen x = 100 -> sim x = -300) is gone
    assert_eq!(scenario.points.points[0].origin.x, -285.0);
}

#[test]
fn tap_state_is_edge_triggered() {
    let mut tap = TapState::new();

    assert!(tap.press(), "First press must trigger");
    assert!(!tap.press(), "Held press must not retrigger");
    assert!(!tap.press());

    tap.release();
    assert!(tap.press(), "Press after release must trigger again");
}

// ==================================================================================
// Configuration / color tests
// ==================================================================================

#[test]
fn scenario_builds_from_yaml() {
    let yaml = r#"
parameters:
  max_points: 5
  repulsion_radius: 100.0
  repulsion_strength: 5.0
  brownian_strength: 0.0
  max_distance: 50.0
  return_force: 0.01
  friction: 0.95
  bounce_factor: 0.8
  point_radius: 5.0
  line_thickness: 2.0
  seed: 42
points:
  - x: [ -50.0, 0.0 ]
  - x: [  50.0, 0.0 ]
    v: [  0.0, 1.0 ]
"#;

    let cfg: trisim::SceneConfig = serde_yaml::from_str(yaml).expect("valid scene yaml");
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.parameters.max_points, 5);
    assert_eq!(scenario.points.len(), 2);
    assert_eq!(scenario.points.points[0].x, NVec2::new(-50.0, 0.0));
    assert_eq!(scenario.points.points[1].v, NVec2::new(0.0, 1.0));
    assert!(scenario.triangulation.is_stale(), "Fresh scenario must build on frame one");
}

#[test]
fn pastel_color_stays_pastel() {
    assert_eq!(pastel_rgb(0), 0x80_80_80);

    for seed in [0u32, 1, 0xFFFF_FFFF, 0xDEAD_BEEF, 12345] {
        let rgb = pastel_rgb(seed);
        // Pure function
        assert_eq!(rgb, pastel_rgb(seed));
        // Every channel in the upper half of its range
        for shift in [16, 8, 0] {
            let channel = (rgb >> shift) & 0xFF;
            assert!(channel >= 0x80, "Channel below pastel floor: {rgb:#08x}");
        }
    }
}
