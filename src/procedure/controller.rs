//! Ownership and lifecycle of the two procedure kinds.

use std::sync::Arc;

use tracing::info;

use crate::error::{CoreError, ProcedureKind, Result};
use crate::geometry::Path2d;
use crate::system::motion::MotionController;

use super::object_move::ObjectMoveProcedure;
use super::traversal::TraversalProcedure;

/// Owns at most one traversal and at most one object-move procedure.
///
/// The two slots are independent state machines; nothing here stops a caller
/// from running both kinds at once — that policy stays with the caller.
/// Beginning a kind that is already running stops the old instance (joining
/// its worker) before the new one starts. A slot counts as running from
/// `begin_*` until `halt_*` or replacement, even once its worker has walked
/// the whole path.
pub struct ProcedureController {
    motion: Arc<dyn MotionController>,
    traversal: Option<TraversalProcedure>,
    object_move: Option<ObjectMoveProcedure>,
}

impl ProcedureController {
    pub fn new(motion: Arc<dyn MotionController>) -> Self {
        Self {
            motion,
            traversal: None,
            object_move: None,
        }
    }

    /// Start traversing a snapshot of `path`, replacing any traversal
    /// already running.
    pub fn begin_traversal(&mut self, path: &Path2d) {
        if let Some(old) = self.traversal.take() {
            info!("replacing running traversal");
            old.stop();
        }
        self.traversal = Some(TraversalProcedure::start(Arc::clone(&self.motion), path));
    }

    /// Stop the running traversal and wait for its worker to finish.
    pub fn halt_traversal(&mut self) -> Result<()> {
        let procedure = self
            .traversal
            .take()
            .ok_or(CoreError::ProcedureNotActive(ProcedureKind::Traversal))?;
        procedure.stop();
        Ok(())
    }

    /// Start relocating the object along a snapshot of `path`, replacing any
    /// object move already running.
    pub fn begin_object_move(&mut self, path: &Path2d) {
        if let Some(old) = self.object_move.take() {
            info!("replacing running object move");
            old.stop();
        }
        self.object_move = Some(ObjectMoveProcedure::start(Arc::clone(&self.motion), path));
    }

    /// Stop the running object move and wait for its worker to finish.
    pub fn halt_object_move(&mut self) -> Result<()> {
        let procedure = self
            .object_move
            .take()
            .ok_or(CoreError::ProcedureNotActive(ProcedureKind::ObjectMove))?;
        procedure.stop();
        Ok(())
    }

    pub fn is_traversal_running(&self) -> bool {
        self.traversal.is_some()
    }

    pub fn is_object_move_running(&self) -> bool {
        self.object_move.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::testing::{path, Command, RecordingController};
    use super::*;

    #[test]
    fn begin_then_halt_returns_the_slot_to_idle() {
        let controller = Arc::new(RecordingController::new(false));
        let mut procedures = ProcedureController::new(controller.clone());

        assert!(!procedures.is_traversal_running());
        procedures.begin_traversal(&path(&[(1.0, 1.0)]));
        assert!(procedures.is_traversal_running());

        procedures.halt_traversal().unwrap();
        assert!(!procedures.is_traversal_running());

        // The slot accepts a new begin after a halt.
        procedures.begin_traversal(&path(&[(2.0, 2.0)]));
        assert!(procedures.is_traversal_running());
        procedures.halt_traversal().unwrap();
    }

    #[test]
    fn halting_an_idle_slot_is_a_typed_error() {
        let controller = Arc::new(RecordingController::new(false));
        let mut procedures = ProcedureController::new(controller);

        assert!(matches!(
            procedures.halt_traversal(),
            Err(CoreError::ProcedureNotActive(ProcedureKind::Traversal))
        ));
        assert!(matches!(
            procedures.halt_object_move(),
            Err(CoreError::ProcedureNotActive(ProcedureKind::ObjectMove))
        ));
    }

    #[test]
    fn double_begin_replaces_without_leaking_the_old_worker() {
        let controller = Arc::new(RecordingController::new(true));
        let mut procedures = ProcedureController::new(controller.clone());

        procedures.begin_traversal(&path(&[(1.0, 1.0)]));
        controller.wait_until(|cmds| cmds.contains(&Command::Drive(1.0, 1.0)));

        // begin_traversal joins the old worker first, so its halt lands
        // before the replacement drives anywhere.
        procedures.begin_traversal(&path(&[(9.0, 9.0)]));
        controller.wait_until(|cmds| cmds.contains(&Command::Drive(9.0, 9.0)));

        let commands = controller.commands();
        let first_halt = commands.iter().position(|c| *c == Command::Halt).unwrap();
        let second_drive = commands
            .iter()
            .position(|c| *c == Command::Drive(9.0, 9.0))
            .unwrap();
        assert!(first_halt < second_drive);

        procedures.halt_traversal().unwrap();
    }

    #[test]
    fn the_two_kinds_run_independently() {
        let controller = Arc::new(RecordingController::new(true));
        let mut procedures = ProcedureController::new(controller.clone());

        procedures.begin_traversal(&path(&[(1.0, 1.0)]));
        procedures.begin_object_move(&path(&[(2.0, 2.0)]));
        assert!(procedures.is_traversal_running());
        assert!(procedures.is_object_move_running());

        procedures.halt_object_move().unwrap();
        assert!(procedures.is_traversal_running());
        assert!(!procedures.is_object_move_running());

        procedures.halt_traversal().unwrap();
    }

    #[test]
    fn dropping_the_controller_stops_everything() {
        let controller = Arc::new(RecordingController::new(true));
        {
            let mut procedures = ProcedureController::new(controller.clone());
            procedures.begin_traversal(&path(&[(1.0, 1.0)]));
            controller.wait_until(|cmds| !cmds.is_empty());
        }
        // Both drops joined; the last command is the traversal's halt.
        assert_eq!(controller.commands().last(), Some(&Command::Halt));
    }
}
