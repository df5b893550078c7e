//! Core state types for the point-jostle simulation.
//!
//! Defines the 2D point/point-set structs:
//! - `Point` using `NVec2` (position, velocity, spawn origin)
//! - `PointSet` (insertion-ordered live set with FIFO eviction)
//! - `Bounds` (reflective screen boundary in simulation coordinates)
//!
//! Simulation coordinates have their origin at the screen center with y up;
//! screen coordinates arrive with origin top-left and y down.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Convert a screen-space pixel coordinate (origin top-left, y down) into
/// simulation coordinates (origin center, y up)
pub fn screen_to_sim(screen_x: f64, screen_y: f64, width: f64, height: f64) -> NVec2 {
    NVec2::new(screen_x - width / 2.0, height / 2.0 - screen_y)
}

#[derive(Debug, Clone)]
pub struct Point {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub origin: NVec2, // spawn position, anchor of the return force
}

impl Point {
    /// New point at rest with its origin captured at the spawn position
    pub fn at(pos: NVec2) -> Self {
        Self {
            x: pos,
            v: NVec2::zeros(),
            origin: pos,
        }
    }
}

/// Insertion-ordered collection of live points, oldest first
///
/// Size never exceeds `capacity`; inserting into a full set evicts the
/// oldest point (FIFO, not LRU). A removed point is gone for good; a later
/// insert at the same slot is a fresh identity
#[derive(Debug, Clone)]
pub struct PointSet {
    pub points: Vec<Point>, // insertion order, index 0 is oldest
    pub capacity: usize,
}

impl PointSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a point at `pos` (simulation coordinates), evicting the
    /// oldest point first if the set is at capacity. Returns the index of
    /// the new point, which is always the highest live index
    pub fn insert(&mut self, pos: NVec2) -> usize {
        if self.points.len() >= self.capacity {
            // FIFO eviction: drop the oldest, shift the rest down
            self.points.remove(0);
        }
        self.points.push(Point::at(pos));
        self.points.len() - 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Reflective boundary of the simulation area, expressed as half-extents
/// around the origin
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub half_width: f64,
    pub half_height: f64,
}

impl Bounds {
    /// Bounds covering a screen of `width` x `height` pixels
    pub fn from_screen(width: f64, height: f64) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }
}
