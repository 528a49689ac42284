//! Geometry primitives: rectangles, acquisition scoring, walls, paths.

pub mod rect;
pub mod score;
pub mod walls;

pub use rect::Rect;
pub use score::{acquisition_score, REJECT_SCORE};
pub use walls::{SharedWalls, Wall, WallSet};

use nalgebra::Point2;

/// Ordered sequence of 2D waypoints. Traversal order is significant.
pub type Path2d = Vec<Point2<f64>>;
