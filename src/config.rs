//! Calibration parameters consumed by box validity checks.

use serde::Deserialize;

/// Read-only calibration values established during an external calibration
/// step and injected at session construction.
///
/// Replaces ambient global parameter state: every consumer receives its own
/// copy and nothing in this crate mutates one after construction.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AcquisitionParams {
    /// Expected area of the robot's bounding box.
    pub robot_calib_area: f64,
    /// Expected area of the tracked object's bounding box.
    pub object_calib_area: f64,
    /// Upper bound on the acquisition score for a box to count as valid.
    pub area_acq_r_sigma: f64,
}

impl Default for AcquisitionParams {
    fn default() -> Self {
        Self {
            robot_calib_area: 100.0,
            object_calib_area: 64.0,
            area_acq_r_sigma: 0.5,
        }
    }
}
