//! Triangle primitive over the shared point table
//!
//! A triangle stores three vertex indices, never coordinate copies, so a
//! point's motion is visible through the one source of truth. A triangle is
//! only valid against the point snapshot it was built from; topology changes
//! rebuild the whole list rather than patch individual triangles.

use crate::simulation::states::{NVec2, Point};

/// Three vertices are treated as collinear when twice the signed area falls
/// below this
pub const COLLINEAR_EPS: f64 = 1e-6;

// Distinct large odd constants for the per-vertex color-seed terms
const SEED_MIX: [i64; 6] = [
    73_856_093, 19_349_663, 83_492_791, 15_485_863, 32_452_843, 49_979_687,
];

/// A triangle as three indices into the live point table
///
/// Slot order is fixed for vertex iteration but carries no geometric
/// meaning; as a vertex set the triangle is unordered. Construction does not
/// validate non-collinearity; degenerate triples are tolerated here and
/// rejected by the circumcircle test and by the triangulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Current vertex positions, read out of the shared point table
    pub fn positions(&self, points: &[Point]) -> [NVec2; 3] {
        [points[self.a].x, points[self.b].x, points[self.c].x]
    }

    /// Twice the signed area of the triangle (the `a` determinant of the
    /// circumcircle formulation)
    fn doubled_area(p1: NVec2, p2: NVec2, p3: NVec2) -> f64 {
        p1.x * (p2.y - p3.y) - p1.y * (p2.x - p3.x) + p2.x * p3.y - p3.x * p2.y
    }

    /// Whether the triangle is collinear/degenerate under the fixed epsilon
    ///
    /// Duplicate vertices among the three points fall out of the same test;
    /// they are not special-cased
    pub fn is_degenerate(&self, points: &[Point]) -> bool {
        let [p1, p2, p3] = self.positions(points);
        Self::doubled_area(p1, p2, p3).abs() < COLLINEAR_EPS
    }

    /// Circumcircle containment test: true iff `p` lies strictly inside the
    /// circumcircle of this triangle
    ///
    /// Closed-form determinant formulation: with `a` twice the signed area,
    /// the circumcenter is `(-b/2a, -c/2a)` and the squared circumradius is
    /// `(b^2 + c^2 - 4ad) / (4a^2)`. A degenerate triangle has no
    /// circumcircle and the test returns false unconditionally. Points
    /// exactly on the circle are not inside; that strictness is the Delaunay
    /// empty-circle tie-break
    pub fn circumcircle_contains(&self, points: &[Point], p: NVec2) -> bool {
        let [p1, p2, p3] = self.positions(points);

        let a = Self::doubled_area(p1, p2, p3);
        if a.abs() < COLLINEAR_EPS {
            return false;
        }

        // Squared magnitudes of the three vertices
        let m1 = p1.x * p1.x + p1.y * p1.y;
        let m2 = p2.x * p2.x + p2.y * p2.y;
        let m3 = p3.x * p3.x + p3.y * p3.y;

        let b = m1 * (p3.y - p2.y) + m2 * (p1.y - p3.y) + m3 * (p2.y - p1.y);
        let c = m1 * (p2.x - p3.x) + m2 * (p3.x - p1.x) + m3 * (p1.x - p2.x);
        let d = m1 * (p3.x * p2.y - p2.x * p3.y)
            + m2 * (p1.x * p3.y - p3.x * p1.y)
            + m3 * (p2.x * p1.y - p1.x * p2.y);

        let center = NVec2::new(-b / (2.0 * a), -c / (2.0 * a));
        let radius2 = (b * b + c * c - 4.0 * a * d) / (4.0 * a * a);

        let diff = p - center;
        diff.dot(&diff) < radius2
    }

    /// Deterministic 32-bit color seed for this triangle's current geometry
    ///
    /// XOR-folds six per-vertex terms, each coordinate scaled by a distinct
    /// large odd constant and floored before combination. Bit-for-bit
    /// reproducible for identical vertex positions, so a triangle keeps its
    /// color across rebuilds while its geometry is unchanged
    pub fn color_seed(&self, points: &[Point]) -> u32 {
        let [p1, p2, p3] = self.positions(points);
        let coords = [p1.x, p1.y, p2.x, p2.y, p3.x, p3.y];

        let mut seed: u32 = 0;
        for (v, k) in coords.iter().zip(SEED_MIX.iter()) {
            seed ^= (v * (*k as f64)).floor() as i64 as u32;
        }
        seed
    }
}
