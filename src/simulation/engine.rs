//! Frame-loop orchestration: tick trigger policy, tap handling, and the
//! edge-triggered tap state machine
//!
//! The viewer calls [`place_point`] on each tap and [`tick`] once per
//! frame; everything here is host-agnostic so the trigger policy stays
//! testable without a window.

use crate::simulation::forces::{Impulse, Repulsion};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{screen_to_sim, Bounds, NVec2};

/// What a single frame tick did, in the order of precedence the renderer
/// must honor: a full rebuild replaces every drawable, a refresh only
/// moves existing ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing moved and the triangulation was current
    Idle,
    /// Points moved; existing drawables need their vertices re-pushed,
    /// triangle membership is unchanged
    Refreshed,
    /// Topology was stale; the triangle list was rebuilt from scratch and
    /// all drawables must be recreated
    Recomputed,
}

/// Advance the scenario by one frame tick
///
/// Fixed order: physics step first, then exactly one of full retriangulation
/// (topology stale from a tap/eviction/resize) or geometry-only refresh
/// (something moved). The refresh path never re-validates the Delaunay
/// property; staleness between full recomputes is the accepted trade for
/// small per-frame displacement
pub fn tick(scenario: &mut Scenario, bounds: Bounds) -> TickOutcome {
    let Scenario {
        parameters,
        points,
        impulses,
        triangulation,
    } = scenario;

    let moved = super::integrator::step_points(points, impulses, parameters, bounds);

    if triangulation.is_stale() {
        triangulation.rebuild(&points.points);
        TickOutcome::Recomputed
    } else if moved {
        TickOutcome::Refreshed
    } else {
        TickOutcome::Idle
    }
}

/// Handle a tap at screen coordinates `(screen_x, screen_y)` on a screen of
/// `width` x `height` pixels
///
/// Converts to simulation coordinates, inserts the point (evicting FIFO at
/// capacity), shoves every nearby point away from the tap, and marks the
/// triangulation stale so the next [`tick`] rebuilds it. Returns the index
/// of the new point
pub fn place_point(
    scenario: &mut Scenario,
    screen_x: f64,
    screen_y: f64,
    width: f64,
    height: f64,
) -> usize {
    let pos = screen_to_sim(screen_x, screen_y, width, height);
    let idx = scenario.points.insert(pos);

    // One-shot repulsion impulse, accumulated the same way the per-tick
    // terms are. The new point sits at zero distance from the tap and is
    // skipped by the zero-separation guard
    let mut shove = Repulsion {
        center: pos,
        radius: scenario.parameters.repulsion_radius,
        strength: scenario.parameters.repulsion_strength,
    };
    let mut dv = vec![NVec2::zeros(); scenario.points.len()];
    shove.impulse(&scenario.points, &mut dv);
    for (p, d) in scenario.points.points.iter_mut().zip(dv.iter()) {
        p.v += *d;
    }

    scenario.triangulation.mark_stale();
    idx
}

/// Edge-triggered tap state: a tap is acted on only on the transition from
/// `Idle` to `Active`; a held pointer does not retrigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapPhase {
    #[default]
    Idle,
    Active,
}

/// Two-state machine guarding re-entrant interaction starts
///
/// The input plumbing reports the raw down/up level every frame; this
/// converts it to a single edge per press
#[derive(Debug, Default)]
pub struct TapState {
    phase: TapPhase,
}

impl TapState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the pointer as down. Returns true only on the transition
    /// into `Active`; repeated calls while held return false
    pub fn press(&mut self) -> bool {
        match self.phase {
            TapPhase::Idle => {
                self.phase = TapPhase::Active;
                true
            }
            TapPhase::Active => false,
        }
    }

    /// Report the pointer as released, re-arming the next press
    pub fn release(&mut self) {
        self.phase = TapPhase::Idle;
    }

    pub fn phase(&self) -> TapPhase {
        self.phase
    }
}
