//! Axis-aligned bounding rectangle in frame/world coordinates.

use nalgebra::Point2;

/// Axis-aligned rectangle as reported by the detector.
///
/// No sign convention on `width`/`height` is enforced here; degenerate and
/// mirrored rectangles are handled by the scoring policy instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The empty rectangle box slots start out with.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Signed area (`width * height`).
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Center point.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_is_offset_by_half_extent() {
        let rect = Rect::new(10.0, 20.0, 4.0, 6.0);
        let c = rect.center();
        assert_relative_eq!(c.x, 12.0);
        assert_relative_eq!(c.y, 23.0);
    }

    #[test]
    fn area_is_signed() {
        assert_relative_eq!(Rect::new(0.0, 0.0, 3.0, 4.0).area(), 12.0);
        assert_relative_eq!(Rect::new(0.0, 0.0, -3.0, 4.0).area(), -12.0);
    }

    #[test]
    fn zero_rect_has_zero_area_and_origin_center() {
        let rect = Rect::zero();
        assert_eq!(rect.area(), 0.0);
        assert_eq!(rect.center(), nalgebra::Point2::new(0.0, 0.0));
    }
}
