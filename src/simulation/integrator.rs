//! Fixed-step time integrator for the point set
//!
//! One call advances every point by one display tick, driven by an
//! `ImpulseSet` and `Parameters`. The per-tick order is fixed:
//! impulses (noise + origin leash), position integration with boundary
//! reflection, then friction.

use super::forces::ImpulseSet;
use super::params::Parameters;
use super::states::{Bounds, NVec2, PointSet};

/// Advance the point set by one tick
///
/// Order within the tick, which callers rely on:
/// 1. accumulate velocity impulses from all terms and add them in
/// 2. integrate: `x += v`
/// 3. reflect at the screen boundary, clamping to the edge and flipping
///    the velocity on the violated axis only, scaled by `bounce_factor`
/// 4. friction: `v *= friction` on both axes
///
/// Returns true iff any point's coordinates actually changed, so the
/// caller knows whether drawable geometry needs a refresh
pub fn step_points(
    set: &mut PointSet,
    impulses: &mut ImpulseSet,
    params: &Parameters,
    bounds: Bounds,
) -> bool {
    let n = set.points.len();
    if n == 0 {
        // no points, nothing moved
        return false;
    }

    // dv[i] will hold the summed velocity impulse for point i this tick
    let mut dv = vec![NVec2::zeros(); n];
    impulses.accumulate_impulses(&*set, &mut dv);

    // Apply impulses: v += dv
    for (p, d) in set.points.iter_mut().zip(dv.iter()) {
        p.v += *d;
    }

    let mut moved = false;
    for p in set.points.iter_mut() {
        let before = p.x;

        // Integrate one tick: x += v
        p.x += p.v;

        // Reflect at the boundary, one axis at a time. The position is
        // clamped to the edge and the velocity on that axis is negated
        // and scaled; the other axis is untouched
        if p.x.x > bounds.half_width {
            p.x.x = bounds.half_width;
            p.v.x = -p.v.x * params.bounce_factor;
        } else if p.x.x < -bounds.half_width {
            p.x.x = -bounds.half_width;
            p.v.x = -p.v.x * params.bounce_factor;
        }
        if p.x.y > bounds.half_height {
            p.x.y = bounds.half_height;
            p.v.y = -p.v.y * params.bounce_factor;
        } else if p.x.y < -bounds.half_height {
            p.x.y = -bounds.half_height;
            p.v.y = -p.v.y * params.bounce_factor;
        }

        // Friction damping, both axes, every tick
        p.v *= params.friction;

        if p.x != before {
            moved = true;
        }
    }

    moved
}
