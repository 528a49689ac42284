//! Path traversal procedure.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::info;

use crate::geometry::Path2d;
use crate::system::motion::MotionController;

use super::follow_path;

/// Drives the motion controller along an accumulated path, start to end.
///
/// Owns its worker thread for its whole lifetime; dropping the procedure
/// signals stop and joins the worker.
pub struct TraversalProcedure {
    stop_tx: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl TraversalProcedure {
    /// Spawn the worker and start driving along a snapshot of `path`.
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

impl Drop for TraversalProcedure {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(controller: Arc<dyn MotionController>, waypoints: Path2d, stop_rx: Receiver<()>) {
    info!(waypoints = waypoints.len(), "traversal started");
    let completed = follow_path(controller.as_ref(), &waypoints, &stop_rx);
    controller.halt();
    info!(completed, "traversal finished");
}
