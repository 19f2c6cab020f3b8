use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{CameraIntrinsics, IntrinsicsError};

/// Read camera intrinsics from a COLMAP-style cameras.txt file.
///
/// Blank lines, `#` comments and the `Number of cameras:` header are
/// skipped. The first remaining line with more than 4 whitespace-separated
/// tokens is parsed positionally as
/// `CAMERA_ID MODEL WIDTH HEIGHT fx fy cx cy k1 k2 p1 p2`; any further
/// lines are ignored.
///
/// # Arguments
///
/// * `path` - The path to the cameras.txt file.
///
/// # Returns
///
/// The intrinsics of the first camera listed in the file.
pub fn read_cameras_txt(path: impl AsRef<Path>) -> Result<CameraIntrinsics, IntrinsicsError> {
    // open the file and create a buffered reader
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with("Number of cameras:")
        {
            continue;
        }

        // split the line into parts by whitespace
        let parts = trimmed.split_whitespace().collect::<Vec<_>>();
        if parts.len() > 4 {
            return parse_camera_line(&parts);
        }
    }

    Err(IntrinsicsError::NoCameraLine)
}

/// Utility function for parsing a single whitespace-separated token
fn parse_part<T: std::str::FromStr>(s: &str) -> Result<T, IntrinsicsError>
where
    T::Err: std::fmt::Display,
{
    s.parse::<T>()
        .map_err(|e| IntrinsicsError::ParseError(format!("{}: {}", s, e)))
}

/// Parse a camera line and return a CameraIntrinsics struct.
/// NOTE: tokens 0 and 1 (camera id and model name) are not used; the eight
///       parameters are assumed to follow the OPENCV model ordering.
fn parse_camera_line(parts: &[&str]) -> Result<CameraIntrinsics, IntrinsicsError> {
    if parts.len() < 12 {
        return Err(IntrinsicsError::InvalidNumCameraParams(parts.len()));
    }

    Ok(CameraIntrinsics {
        w: parse_part(parts[2])?,
        h: parse_part(parts[3])?,
        fl_x: parse_part(parts[4])?,
        fl_y: parse_part(parts[5])?,
        cx: parse_part(parts[6])?,
        cy: parse_part(parts[7])?,
        k1: parse_part(parts[8])?,
        k2: parse_part(parts[9])?,
        p1: parse_part(parts[10])?,
        p2: parse_part(parts[11])?,
        extra: serde_json::Map::new(),
    })
}
