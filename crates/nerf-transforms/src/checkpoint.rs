use std::path::Path;

use candle_core::{DType, Device, Tensor};

/// Default artifact name inside a result directory.
const DEFAULT_CHECKPOINT_NAME: &str = "ep00_init.pth";

/// Checkpoint entry holding the predicted poses.
const POSES_ENTRY: &str = "poses_pred";

/// Error types for the checkpoint module.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    /// Error reading or decoding the tensor payload
    #[error(transparent)]
    Candle(#[from] candle_core::Error),

    /// Checkpoint has no entry with the expected name
    #[error("checkpoint has no `{0}` entry")]
    MissingEntry(String),

    /// Pose tensor does not have the expected shape
    #[error("expected pose tensor of shape (N, 4, 4), got {0:?}")]
    InvalidShape(Vec<usize>),
}

/// Read the predicted camera poses from a checkpoint artifact.
///
/// A directory path resolves to the default `ep00_init.pth` artifact inside
/// it; a file path is used as given. `.safetensors` payloads are read with
/// the safetensors loader, anything else as a PyTorch pickle archive. The
/// checkpoint must expose a `poses_pred` entry of shape `(N, 4, 4)`.
///
/// # Arguments
///
/// * `path` - The path to the checkpoint file or its result directory.
///
/// # Returns
///
/// The predicted poses as row-major 4x4 matrices, in checkpoint order.
pub fn read_pose_checkpoint(
    path: impl AsRef<Path>,
) -> Result<Vec<[[f64; 4]; 4]>, CheckpointError> {
    let path = path.as_ref();
    let path = if path.is_dir() {
        path.join(DEFAULT_CHECKPOINT_NAME)
    } else {
        path.to_path_buf()
    };

    let tensor = read_poses_entry(&path)?;
    tensor_to_poses(&tensor)
}

/// Load the tensor payload and pull out the poses entry.
fn read_poses_entry(path: &Path) -> Result<Tensor, CheckpointError> {
    let is_safetensors = path.extension().is_some_and(|ext| ext == "safetensors");

    let tensor = if is_safetensors {
        let mut tensors = candle_core::safetensors::load(path, &Device::Cpu)?;
        tensors.remove(POSES_ENTRY)
    } else {
        let tensors = candle_core::pickle::read_all(path)?;
        tensors
            .into_iter()
            .find(|(name, _)| name == POSES_ENTRY)
            .map(|(_, tensor)| tensor)
    };

    tensor.ok_or_else(|| CheckpointError::MissingEntry(POSES_ENTRY.to_string()))
}

/// Convert a (N, 4, 4) tensor into plain row-major matrices.
fn tensor_to_poses(tensor: &Tensor) -> Result<Vec<[[f64; 4]; 4]>, CheckpointError> {
    let dims = tensor.dims();
    if dims.len() != 3 || dims[1] != 4 || dims[2] != 4 {
        return Err(CheckpointError::InvalidShape(dims.to_vec()));
    }

    let data = tensor.to_dtype(DType::F64)?.to_vec3::<f64>()?;

    let mut poses = Vec::with_capacity(data.len());
    for mat in &data {
        let mut pose = [[0.0; 4]; 4];
        for (i, row) in mat.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                pose[i][j] = *value;
            }
        }
        poses.push(pose);
    }

    Ok(poses)
}
