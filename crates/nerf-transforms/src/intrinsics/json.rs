use std::{fs::File, io::BufReader, path::Path};

use super::{CameraIntrinsics, IntrinsicsError};

/// Read camera intrinsics from a flat JSON sidecar file.
///
/// All ten required fields (`w`, `h`, `fl_x`, `fl_y`, `cx`, `cy`, `k1`,
/// `k2`, `p1`, `p2`) must be present; a missing field fails the load. Any
/// extra keys are kept and passed through to the output verbatim.
///
/// # Arguments
///
/// * `path` - The path to the intrinsics JSON file.
///
/// # Returns
///
/// The parsed camera intrinsics.
pub fn read_cameras_json(path: impl AsRef<Path>) -> Result<CameraIntrinsics, IntrinsicsError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let intrinsics = serde_json::from_reader(reader)?;
    Ok(intrinsics)
}
