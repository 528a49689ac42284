//! Acquisition quality scoring for detected bounding boxes.
//!
//! Based off the squareness formula in
//! <https://users.cs.cf.ac.uk/Paul.Rosin/resources/papers/squareness-JMIV-postprint.pdf>

use super::Rect;

/// Sentinel score for rectangles that cannot be a valid acquisition.
pub const REJECT_SCORE: f64 = 1000.0;

/// Aspect ratios at or below this cutoff are rejected outright.
///
/// The aspect ratio is computed longer-side over shorter-side, so for
/// rectangles with both dimensions positive it is at least 1 and this cutoff
/// never fires; it only catches rectangles with a negative dimension.
const SQUARENESS_CUTOFF: f64 = 0.99;

/// Determine the likelihood that a bounding box actually contains the robot
/// or object being tracked, from the squareness of the rectangle and the
/// closeness of its area to the calibrated area.
///
/// Lower is better: a perfect square of exactly `calibrated_area` scores 0,
/// and anything degenerate scores [`REJECT_SCORE`].
pub fn acquisition_score(rect: &Rect, calibrated_area: f64) -> f64 {
    let area = rect.width * rect.height;
    if area == 0.0 {
        return REJECT_SCORE;
    }
    let t = if rect.width > rect.height {
        rect.width / rect.height
    } else {
        rect.height / rect.width
    };
    if t <= SQUARENESS_CUTOFF {
        return REJECT_SCORE;
    }
    (area - calibrated_area).abs() / area.max(calibrated_area) * t
}
