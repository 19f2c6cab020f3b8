use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::intrinsics::CameraIntrinsics;

/// Error types for the transforms module.
#[derive(Debug, thiserror::Error)]
pub enum TransformsError {
    /// Error reading or writing the transforms file
    #[error("error reading or writing transforms file")]
    Io(#[from] std::io::Error),

    /// Error serializing the transforms document
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A single frame entry pairing an image path with its camera transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Path of the frame image relative to the scene root
    pub file_path: String,
    /// 4x4 camera transform matrix, row-major
    pub transform_matrix: [[f64; 4]; 4],
}

/// NeRF-style scene description: shared intrinsics plus per-frame transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformsDocument {
    /// Shared camera intrinsics
    #[serde(flatten)]
    pub intrinsics: CameraIntrinsics,
    /// Per-frame image paths and transforms
    pub frames: Vec<Frame>,
}

/// Assemble the output document from intrinsics and camera poses.
///
/// Frame `i` always corresponds to pose `i`. The image paths are
/// zero-padded placeholders of the form `images/000000.png`.
///
/// # Arguments
///
/// * `intrinsics` - The shared camera intrinsics.
/// * `poses` - The camera transforms, one per frame.
///
/// # Returns
///
/// The assembled transforms document.
pub fn build_transforms(
    intrinsics: CameraIntrinsics,
    poses: &[[[f64; 4]; 4]],
) -> TransformsDocument {
    let frames = poses
        .iter()
        .enumerate()
        .map(|(idx, pose)| Frame {
            file_path: format!("images/{:06}.png", idx),
            transform_matrix: *pose,
        })
        .collect();

    TransformsDocument { intrinsics, frames }
}

/// Serialize the document as 4-space indented JSON to `path`.
///
/// An existing file at `path` is overwritten. The write is not
/// transactional.
pub fn write_transforms_json(
    document: &TransformsDocument,
    path: impl AsRef<Path>,
) -> Result<(), TransformsError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    document.serialize(&mut serializer)?;
    writer.flush()?;

    Ok(())
}

/// Read a transforms document back from a JSON file.
pub fn read_transforms_json(path: impl AsRef<Path>) -> Result<TransformsDocument, TransformsError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let document = serde_json::from_reader(reader)?;
    Ok(document)
}
