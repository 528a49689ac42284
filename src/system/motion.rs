//! Motion controller collaborator interface.

use nalgebra::Point2;

/// Drive-level controller that procedures command.
///
/// Procedure workers call in from their own thread; implementations own
/// whatever synchronization that requires.
pub trait MotionController: Send + Sync {
    /// Command motion toward `target`. Returns once the command is accepted,
    /// not once the target is reached.
    fn drive_to(&self, target: Point2<f64>);

    /// True once the most recent `drive_to` target has been reached.
    fn reached(&self) -> bool;

    /// Stop all motion immediately.
    fn halt(&self);

    /// Close the gripper on the object in front of the robot.
    fn grip(&self);

    /// Open the gripper.
    fn release(&self);
}
