//! Velocity-impulse contributors for the point-jostle engine
//!
//! Defines the 2D impulse trait, including Brownian noise, the
//! return-to-origin leash, and the one-shot tap repulsion

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulation::states::{NVec2, PointSet};

/// Collection of per-tick impulse terms (noise, origin leash, etc.)
/// Each term implements [`Impulse`] and their contributions are summed
/// into a single velocity delta per point
pub struct ImpulseSet {
    terms: Vec<Box<dyn Impulse + Send + Sync>>,
}

impl ImpulseSet {
    /// Create an empty impulse set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an impulse term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Impulse + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total velocity deltas for all points in `set`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_impulses(&mut self, set: &PointSet, out: &mut [NVec2]) {
        // Zero buffer
        for dv in out.iter_mut() {
            *dv = NVec2::zeros();
        }
        // Iterate over all impulse contributors
        for term in &mut self.terms {
            term.impulse(set, out);
        }
    }
}

impl Default for ImpulseSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for velocity-impulse sources operating on a [`PointSet`]
/// Implementations add their contribution into `out[i]` for each point
///
/// Takes `&mut self` so stateful terms (the seeded noise source) can
/// advance their internal state per tick
pub trait Impulse {
    fn impulse(&mut self, set: &PointSet, out: &mut [NVec2]);
}

/// Brownian jitter: independent uniform noise in `[-0.5, 0.5] * strength`
/// added to each velocity component, every tick
///
/// Carries its own seeded generator so runs are reproducible; this is the
/// only source of nondeterminism in the simulation
pub struct BrownianMotion {
    pub strength: f64,
    rng: StdRng,
}

impl BrownianMotion {
    pub fn new(strength: f64, seed: u64) -> Self {
        Self {
            strength,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Impulse for BrownianMotion {
    fn impulse(&mut self, set: &PointSet, out: &mut [NVec2]) {
        for (i, _p) in set.points.iter().enumerate() {
            let dx = self.rng.gen_range(-0.5..0.5) * self.strength;
            let dy = self.rng.gen_range(-0.5..0.5) * self.strength;
            out[i] += NVec2::new(dx, dy);
        }
    }
}

/// Return-to-origin leash
///
/// A point further than `max_distance` from its own spawn origin gets a
/// restoring impulse of `(dist - max_distance) * force` directed from its
/// current position toward the origin. Inside the leash radius the point
/// wanders freely
pub struct OriginReturn {
    pub max_distance: f64,
    pub force: f64,
}

impl Impulse for OriginReturn {
    fn impulse(&mut self, set: &PointSet, out: &mut [NVec2]) {
        for (i, p) in set.points.iter().enumerate() {
            // r points from the current position back to the origin
            let r = p.origin - p.x;
            let dist = r.norm();
            if dist > self.max_distance {
                let magnitude = (dist - self.max_distance) * self.force;
                out[i] += (r / dist) * magnitude;
            }
        }
    }
}

/// Radial shove away from a tap location
///
/// Applied once when a point is placed, not per tick. Every point closer
/// than `radius` to `center` receives an impulse of
/// `strength * (1 - dist/radius)` directed away from the tap. A point
/// exactly at the tap location (the freshly placed one, or a coincident
/// neighbor) gets no impulse; zero separation is a defined no-op, not an
/// error
pub struct Repulsion {
    pub center: NVec2,
    pub radius: f64,
    pub strength: f64,
}

impl Impulse for Repulsion {
    fn impulse(&mut self, set: &PointSet, out: &mut [NVec2]) {
        let radius2 = self.radius * self.radius;
        for (i, p) in set.points.iter().enumerate() {
            // r points from the tap toward the point being shoved
            let r = p.x - self.center;
            let d2 = r.dot(&r);
            if d2 > 0.0 && d2 < radius2 {
                let dist = d2.sqrt();
                let magnitude = self.strength * (1.0 - dist / self.radius);
                out[i] += (r / dist) * magnitude;
            }
        }
    }
}
