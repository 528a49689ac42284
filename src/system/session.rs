//! Per-session tracking state.

use std::sync::Arc;

use crate::config::AcquisitionParams;
use crate::error::Result;
use crate::geometry::{Path2d, Rect, SharedWalls};
use crate::procedure::ProcedureController;
use crate::system::display::StatusPanel;
use crate::system::motion::MotionController;
use crate::tracking::{BoxStore, ObjectType, TrackingFlags};

/// Tracking state for one acquisition session.
///
/// Composes the box store, the tracking flags, and the procedure controller
/// behind a single object — the type a caller holds for the lifetime of a
/// session. All methods assume a single logical owner thread; only the
/// procedures this state starts run concurrently with it.
pub struct SessionState {
    store: BoxStore,
    flags: TrackingFlags,
    procedures: ProcedureController,
}

impl SessionState {
    pub fn new(motion: Arc<dyn MotionController>, params: AcquisitionParams) -> Self {
        Self {
            store: BoxStore::new(params),
            flags: TrackingFlags::new(),
            procedures: ProcedureController::new(motion),
        }
    }

    /// Create the status labels on `panel`. Robot/object acquisitions fail
    /// until this has been called.
    pub fn attach_display(&mut self, panel: &dyn StatusPanel) {
        self.store.attach_display(panel);
    }

    // Detections.

    pub fn acquire_robot_box(&mut self, robot_box: Rect) -> Result<()> {
        self.store.acquire_robot_box(robot_box)
    }

    pub fn acquire_object_box(&mut self, object_box: Rect) -> Result<()> {
        self.store.acquire_object_box(object_box)
    }

    pub fn acquire_target_box(&mut self, target_box: Rect) {
        self.store.acquire_target_box(target_box);
    }

    pub fn acquire_walls(&mut self, walls: SharedWalls) {
        self.store.acquire_walls(walls);
    }

    pub fn walls(&self) -> Option<&SharedWalls> {
        self.store.walls()
    }

    pub fn robot_box(&mut self, consume: bool) -> &mut Rect {
        self.store.robot_box(consume)
    }

    pub fn object_box(&mut self, consume: bool) -> &mut Rect {
        self.store.object_box(consume)
    }

    pub fn target_box(&mut self) -> &mut Rect {
        self.store.target_box()
    }

    pub fn is_robot_box_fresh(&self) -> bool {
        self.store.is_robot_box_fresh()
    }

    pub fn is_object_box_fresh(&self) -> bool {
        self.store.is_object_box_fresh()
    }

    pub fn is_robot_box_valid(&self) -> bool {
        self.store.is_robot_box_valid()
    }

    pub fn is_object_box_valid(&self) -> bool {
        self.store.is_object_box_valid()
    }

    // Tracking flags.

    pub fn is_tracking_robot(&self) -> bool {
        self.flags.is_tracking_robot()
    }

    pub fn is_tracking_object(&self) -> bool {
        self.flags.is_tracking_object()
    }

    pub fn is_acquiring_walls(&self) -> bool {
        self.flags.is_acquiring_walls()
    }

    pub fn object_type(&self) -> ObjectType {
        self.flags.object_type()
    }

    pub fn set_tracking_robot(&mut self, tracking: bool) {
        self.flags.set_tracking_robot(tracking);
    }

    pub fn set_tracking_object(&mut self, tracking: bool) {
        self.flags.set_tracking_object(tracking);
    }

    pub fn set_acquiring_walls(&mut self, acquiring: bool) {
        self.flags.set_acquiring_walls(acquiring);
    }

    pub fn set_object_type(&mut self, object_type: ObjectType) {
        self.flags.set_object_type(object_type);
    }

    // Path accumulation.

    pub fn clear_path(&mut self) {
        self.store.clear_path();
    }

    pub fn append_path(&mut self, x: f64, y: f64) {
        self.store.append_path(x, y);
    }

    pub fn path(&self) -> &Path2d {
        self.store.path()
    }

    // Procedures, bound to the accumulated path.

    pub fn begin_traversal(&mut self) {
        self.procedures.begin_traversal(self.store.path());
    }

    pub fn halt_traversal(&mut self) -> Result<()> {
        self.procedures.halt_traversal()
    }

    pub fn begin_object_move(&mut self) {
        self.procedures.begin_object_move(self.store.path());
    }

    pub fn halt_object_move(&mut self) -> Result<()> {
        self.procedures.halt_object_move()
    }

    pub fn is_traversal_running(&self) -> bool {
        self.procedures.is_traversal_running()
    }

    pub fn is_object_move_running(&self) -> bool {
        self.procedures.is_object_move_running()
    }
}
