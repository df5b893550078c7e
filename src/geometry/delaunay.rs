//! Brute-force Delaunay triangulation over the live point set
//!
//! Deliberately the reference algorithm: every unordered index triple is a
//! candidate, and a candidate is retained iff it is non-degenerate and no
//! other point lies strictly inside its circumcircle. O(n^4), which is fine
//! at the 30-point capacity and keeps the empty-circle property exact.

use crate::geometry::triangle::Triangle;
use crate::simulation::states::Point;

/// Compute the Delaunay triangle set for the current point positions
///
/// Returns the empty list for fewer than three points. Collinear triples are
/// never retained
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
    let n = points.len();
    let mut triangles = Vec::new();
    if n < 3 {
        return triangles;
    }

    // Enumerate all C(n,3) candidate triples i < j < k
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let t = Triangle::new(i, j, k);
                if t.is_degenerate(points) {
                    continue;
                }

                // Empty-circle check against every other point
                let mut delaunay = true;
                for (m, p) in points.iter().enumerate() {
                    if m == i || m == j || m == k {
                        continue;
                    }
                    if t.circumcircle_contains(points, p.x) {
                        delaunay = false;
                        break;
                    }
                }

                if delaunay {
                    triangles.push(t);
                }
            }
        }
    }

    triangles
}

/// The current triangle set plus the staleness flag driving the trigger
/// policy
///
/// Topology changes (tap, eviction, resize) mark the set stale; the next
/// frame rebuilds the whole list. Pure motion leaves membership alone, only
/// drawable vertices get re-pushed
#[derive(Debug)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    stale: bool,
}

impl Triangulation {
    /// Empty triangulation, already marked stale so the first frame builds
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            stale: true,
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Flag that the point topology changed and membership must be rebuilt
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Full recompute: replace the triangle list from the current point
    /// positions and clear the staleness flag. The only path that changes
    /// triangle membership
    pub fn rebuild(&mut self, points: &[Point]) {
        self.triangles = triangulate(points);
        self.stale = false;
    }

    /// Drop all triangles; idempotent, safe on an already-empty set
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.stale = true;
    }
}
