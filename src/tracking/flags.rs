//! Tracking mode flags and object classification.

/// Classification of the tracked object, as reported by the detector.
///
/// Callers are trusted to pass a recognized value; no validation happens on
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectType {
    /// No classification has been made yet.
    #[default]
    Unacquired,
    /// Object detected resting upright.
    Upright,
    /// Object detected on its side.
    Toppled,
}

/// Which tracking modes are currently active for the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingFlags {
    tracking_robot: bool,
    tracking_object: bool,
    acquire_walls: bool,
    object_type: ObjectType,
}

impl TrackingFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking_robot(&self) -> bool {
        self.tracking_robot
    }

    pub fn is_tracking_object(&self) -> bool {
        self.tracking_object
    }

    pub fn is_acquiring_walls(&self) -> bool {
        self.acquire_walls
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn set_tracking_robot(&mut self, tracking: bool) {
        self.tracking_robot = tracking;
    }

    pub fn set_tracking_object(&mut self, tracking: bool) {
        self.tracking_object = tracking;
    }

    pub fn set_acquiring_walls(&mut self, acquiring: bool) {
        self.acquire_walls = acquiring;
    }

    pub fn set_object_type(&mut self, object_type: ObjectType) {
        self.object_type = object_type;
    }
}
