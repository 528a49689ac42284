//! Wall geometry shared with the detector.

use std::sync::Arc;

use nalgebra::Point2;
use parking_lot::RwLock;

/// One wall segment in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Wall {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }
}

/// The detector's current wall estimate.
pub type WallSet = Vec<Wall>;

/// Shared handle to the wall set.
///
/// The detector that produced the walls keeps write access through its clone
/// of the handle; this crate only ever reads.
pub type SharedWalls = Arc<RwLock<WallSet>>;
