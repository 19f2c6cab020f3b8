#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pose checkpoint loading.
pub mod checkpoint;

/// Camera intrinsics loading.
pub mod intrinsics;

/// Linear algebra utilities.
pub mod linalg;

/// Transforms document assembly and serialization.
pub mod transforms;
