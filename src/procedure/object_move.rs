//! Object relocation procedure.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::info;

use crate::geometry::Path2d;
use crate::system::motion::MotionController;

use super::follow_path;

/// Carries the gripped object along an accumulated path.
///
/// Same lifecycle contract as a traversal: owns its worker thread, stops
/// cooperatively, joins on drop. The walk is bracketed by a grip before the
/// first waypoint and a release after motion stops, so the object is let go
/// even when the move is halted midway.
pub struct ObjectMoveProcedure {
    stop_tx: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl ObjectMoveProcedure {
    /// Spawn the worker and start the move along a snapshot of `path`.
    pub fn start(controller: Arc<dyn MotionController>, path: &Path2d) -> Self {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let waypoints = path.clone();
        let worker = thread::spawn(move || run(controller, waypoints, stop_rx));
        Self {
            stop_tx,
            worker: Some(worker),
        }
    }

    /// Request the worker stop and wait for it to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.try_send(());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for ObjectMoveProcedure {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(controller: Arc<dyn MotionController>, waypoints: Path2d, stop_rx: Receiver<()>) {
    info!(waypoints = waypoints.len(), "object move started");
    controller.grip();
    let completed = follow_path(controller.as_ref(), &waypoints, &stop_rx);
    controller.halt();
    controller.release();
    info!(completed, "object move finished");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::testing::{path, Command, RecordingController};
    use super::*;

    #[test]
    fn grips_before_driving_and_releases_after_halting() {
        let controller = Arc::new(RecordingController::new(false));
        let procedure =
            ObjectMoveProcedure::start(controller.clone(), &path(&[(2.0, 2.0), (4.0, 4.0)]));

        controller.wait_until(|cmds| cmds.last() == Some(&Command::Release));
        assert_eq!(
            controller.commands(),
            vec![
                Command::Grip,
                Command::Drive(2.0, 2.0),
                Command::Drive(4.0, 4.0),
                Command::Halt,
                Command::Release,
            ]
        );
        procedure.stop();
    }

    #[test]
    fn halted_move_still_releases_the_object() {
        let controller = Arc::new(RecordingController::new(true));
        let procedure = ObjectMoveProcedure::start(controller.clone(), &path(&[(2.0, 2.0)]));

        controller.wait_until(|cmds| cmds.contains(&Command::Drive(2.0, 2.0)));
        procedure.stop();

        assert_eq!(
            controller.commands(),
            vec![
                Command::Grip,
                Command::Drive(2.0, 2.0),
                Command::Halt,
                Command::Release,
            ]
        );
    }
}
