mod json;
mod text;

pub use json::read_cameras_json;
pub use text::read_cameras_txt;

use serde::{Deserialize, Serialize};

/// Error types for the intrinsics module.
#[derive(Debug, thiserror::Error)]
pub enum IntrinsicsError {
    /// Error reading the intrinsics file
    #[error("error reading intrinsics file")]
    Io(#[from] std::io::Error),

    /// No line with camera intrinsics found
    #[error("no valid camera intrinsics found in the file")]
    NoCameraLine,

    /// Invalid number of camera parameters
    #[error("invalid number of camera parameters: {0}")]
    InvalidNumCameraParams(usize),

    /// Parse error
    #[error("parse error {0}")]
    ParseError(String),

    /// Invalid intrinsics JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Camera intrinsics shared by every frame of a capture.
///
/// Field names follow the transforms.json convention: `fl_x` and `fl_y` are
/// the focal lengths in pixels, `cx` and `cy` the principal point, `k1`/`k2`
/// the radial and `p1`/`p2` the tangential distortion coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Focal length along x
    pub fl_x: f64,
    /// Focal length along y
    pub fl_y: f64,
    /// Principal point x
    pub cx: f64,
    /// Principal point y
    pub cy: f64,
    /// First radial distortion coefficient
    pub k1: f64,
    /// Second radial distortion coefficient
    pub k2: f64,
    /// First tangential distortion coefficient
    pub p1: f64,
    /// Second tangential distortion coefficient
    pub p2: f64,
    /// Additional sidecar fields, passed through to the output verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
