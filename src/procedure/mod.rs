//! Long-running motion procedures and their owning controller.
//!
//! A procedure owns a worker thread that feeds the accumulated path to the
//! motion controller. Stopping is cooperative: the stop channel doubles as
//! the worker's poll tick, and dropping a procedure joins the worker before
//! its slot can be reused.

pub mod controller;
pub mod object_move;
pub mod traversal;

pub use controller::ProcedureController;
pub use object_move::ObjectMoveProcedure;
pub use traversal::TraversalProcedure;

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use tracing::debug;

use crate::geometry::Path2d;
use crate::system::motion::MotionController;

/// Poll interval while waiting for the controller to reach a waypoint.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Walk `waypoints` in order, commanding the controller and polling for
/// arrival. Returns false if a stop was requested before the last waypoint
/// was reached.
fn follow_path(
    controller: &dyn MotionController,
    waypoints: &Path2d,
    stop_rx: &Receiver<()>,
) -> bool {
    for (index, waypoint) in waypoints.iter().enumerate() {
        if stop_rx.try_recv().is_ok() {
            return false;
        }
        debug!(index, x = waypoint.x, y = waypoint.y, "driving to waypoint");
        controller.drive_to(*waypoint);
        while !controller.reached() {
            match stop_rx.recv_timeout(POLL_INTERVAL) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return false,
                Err(RecvTimeoutError::Timeout) => {}
            }
        }
    }
    true
}

#[cfg(test)]
pub(crate) mod testing {
    use std::thread;
    use std::time::{Duration, Instant};

    use nalgebra::Point2;
    use parking_lot::Mutex;

    use crate::geometry::Path2d;
    use crate::system::motion::MotionController;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Command {
        Drive(f64, f64),
        Halt,
        Grip,
        Release,
    }

    /// Controller that records commands; arrival is immediate unless `stuck`.
    pub struct RecordingController {
        commands: Mutex<Vec<Command>>,
        stuck: bool,
    }

    impl RecordingController {
        pub fn new(stuck: bool) -> Self {
            Self {
                commands: Mutex::new(Vec::new()),
                stuck,
            }
        }

        pub fn commands(&self) -> Vec<Command> {
            self.commands.lock().clone()
        }

        /// Spin until `pred` holds on the recorded commands.
        pub fn wait_until(&self, pred: impl Fn(&[Command]) -> bool) {
            let deadline = Instant::now() + Duration::from_secs(5);
            while !pred(&self.commands()) {
                assert!(
                    Instant::now() < deadline,
                    "controller never satisfied predicate"
                );
                thread::sleep(Duration::from_millis(1));
            }
        }
    }

    impl MotionController for RecordingController {
        fn drive_to(&self, target: Point2<f64>) {
            self.commands.lock().push(Command::Drive(target.x, target.y));
        }

        fn reached(&self) -> bool {
            !self.stuck
        }

        fn halt(&self) {
            self.commands.lock().push(Command::Halt);
        }

        fn grip(&self) {
            self.commands.lock().push(Command::Grip);
        }

        fn release(&self) {
            self.commands.lock().push(Command::Release);
        }
    }

    pub fn path(points: &[(f64, f64)]) -> Path2d {
        points.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }
}
