//! Box store: current detections, freshness, walls, and the planned path.
//!
//! Holds the latest robot/object/target rectangles handed over by the
//! detector. Robot and object boxes carry a freshness flag: set on every
//! acquisition, cleared only by a consuming read. The store also accumulates
//! the 2D path that traversal procedures execute.

use nalgebra::Point2;
use tracing::debug;

use crate::config::AcquisitionParams;
use crate::error::{CoreError, Result};
use crate::geometry::{acquisition_score, Path2d, Rect, SharedWalls};
use crate::system::display::{StatusLabel, StatusPanel};

/// One tracked entity's current detection.
#[derive(Debug, Clone, Copy, Default)]
struct BoxSlot {
    rect: Rect,
    fresh: bool,
}

/// Formats a box center for the status display.
fn center_text(rect: &Rect, label: &str) -> String {
    let c = rect.center();
    format!("{:>6}: ({:6.1} , {:6.1} )", label, c.x, c.y)
}

/// Current detections and the accumulated traversal path for one session.
///
/// Not internally synchronized; all mutation is expected from a single
/// logical owner thread.
pub struct BoxStore {
    params: AcquisitionParams,
    robot: BoxSlot,
    object: BoxSlot,
    target: Rect,
    walls: Option<SharedWalls>,
    path: Path2d,
    robot_label: Option<Box<dyn StatusLabel>>,
    object_label: Option<Box<dyn StatusLabel>>,
}

impl BoxStore {
    /// Create an empty store. All rectangles start zeroed and stale.
    pub fn new(params: AcquisitionParams) -> Self {
        Self {
            params,
            robot: BoxSlot::default(),
            object: BoxSlot::default(),
            target: Rect::zero(),
            walls: None,
            path: Path2d::new(),
            robot_label: None,
            object_label: None,
        }
    }

    /// Create the robot and object labels on `panel`.
    ///
    /// Robot/object acquisitions fail with [`CoreError::DisplayDetached`]
    /// until this has been called.
    pub fn attach_display(&mut self, panel: &dyn StatusPanel) {
        self.robot_label = Some(panel.add_label(&center_text(&Rect::zero(), "Robot")));
        self.object_label = Some(panel.add_label(&center_text(&Rect::zero(), "Object")));
    }

    /// Register a freshly detected robot box and update its display label.
    pub fn acquire_robot_box(&mut self, robot_box: Rect) -> Result<()> {
        let label = self.robot_label.as_ref().ok_or(CoreError::DisplayDetached)?;
        label.set_text(&center_text(&robot_box, "Robot"));
        self.robot.rect = robot_box;
        self.robot.fresh = true;
        Ok(())
    }

    /// Register a freshly detected object box and update its display label.
    pub fn acquire_object_box(&mut self, object_box: Rect) -> Result<()> {
        let label = self.object_label.as_ref().ok_or(CoreError::DisplayDetached)?;
        label.set_text(&center_text(&object_box, "Object"));
        self.object.rect = object_box;
        self.object.fresh = true;
        Ok(())
    }

    /// Overwrite the designated goal location. No freshness tracking.
    pub fn acquire_target_box(&mut self, target_box: Rect) {
        self.target = target_box;
    }

    /// Store a shared handle to the detector's wall set. Geometry is not
    /// copied; the producer keeps write access through its own handle.
    pub fn acquire_walls(&mut self, walls: SharedWalls) {
        self.walls = Some(walls);
    }

    pub fn walls(&self) -> Option<&SharedWalls> {
        self.walls.as_ref()
    }

    /// The stored robot box. A consuming read clears freshness; a plain read
    /// leaves it untouched either way.
    pub fn robot_box(&mut self, consume: bool) -> &mut Rect {
        self.robot.fresh = self.robot.fresh && !consume;
        &mut self.robot.rect
    }

    /// The stored object box, with the same consume semantics.
    pub fn object_box(&mut self, consume: bool) -> &mut Rect {
        self.object.fresh = self.object.fresh && !consume;
        &mut self.object.rect
    }

    pub fn target_box(&mut self) -> &mut Rect {
        &mut self.target
    }

    pub fn is_robot_box_fresh(&self) -> bool {
        self.robot.fresh
    }

    pub fn is_object_box_fresh(&self) -> bool {
        self.object.fresh
    }

    /// Whether the stored robot box plausibly contains the robot, per the
    /// calibrated area and validity threshold.
    pub fn is_robot_box_valid(&self) -> bool {
        acquisition_score(&self.robot.rect, self.params.robot_calib_area)
            < self.params.area_acq_r_sigma
    }

    /// Whether the stored object box plausibly contains the object.
    pub fn is_object_box_valid(&self) -> bool {
        acquisition_score(&self.object.rect, self.params.object_calib_area)
            < self.params.area_acq_r_sigma
    }

    /// Empty the accumulated path.
    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    /// Append one waypoint. Order is preserved.
    pub fn append_path(&mut self, x: f64, y: f64) {
        debug!(x, y, "path point appended");
        self.path.push(Point2::new(x, y));
    }

    /// Read-only view of the accumulated path.
    pub fn path(&self) -> &Path2d {
        &self.path
    }
}
