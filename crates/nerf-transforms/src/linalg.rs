use glam::DMat4;

/// Determinant magnitude below which a matrix is treated as singular.
const SINGULARITY_EPS: f64 = 1e-12;

/// Error types for the linalg module.
#[derive(Debug, thiserror::Error)]
pub enum LinalgError {
    /// Matrix is not invertible
    #[error("matrix is singular (determinant {0:e})")]
    SingularMatrix(f64),
}

/// Compute the inverse of a 4x4 matrix given in row-major order.
///
/// # Arguments
///
/// * `mat` - The matrix to invert.
///
/// # Returns
///
/// The inverted matrix, in row-major order.
///
/// Example:
///
/// ```no_run
/// use nerf_transforms::linalg::invert_mat4;
///
/// let pose = [
///     [1.0, 0.0, 0.0, 2.0],
///     [0.0, 1.0, 0.0, -1.0],
///     [0.0, 0.0, 1.0, 0.5],
///     [0.0, 0.0, 0.0, 1.0],
/// ];
/// let inv = invert_mat4(&pose).unwrap();
/// assert_eq!(inv[0][3], -2.0);
/// ```
pub fn invert_mat4(mat: &[[f64; 4]; 4]) -> Result<[[f64; 4]; 4], LinalgError> {
    // glam matrices are column-major, transpose on the way in and out
    let m = DMat4::from_cols_array_2d(mat).transpose();

    let det = m.determinant();
    if det.abs() < SINGULARITY_EPS {
        return Err(LinalgError::SingularMatrix(det));
    }

    Ok(m.inverse().transpose().to_cols_array_2d())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_invert_mat4_identity() -> Result<(), LinalgError> {
        let identity = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let inv = invert_mat4(&identity)?;
        assert_eq!(inv, identity);
        Ok(())
    }

    #[test]
    fn test_invert_mat4_rigid_transform() -> Result<(), LinalgError> {
        // rotation of 90 degrees around z plus a translation
        let pose = [
            [0.0, -1.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let inv = invert_mat4(&pose)?;

        // R' = R^T, t' = -R^T * t
        let expected = [
            [0.0, 1.0, 0.0, -2.0],
            [-1.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, -3.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(inv[i][j], expected[i][j], epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_invert_mat4_roundtrip() -> Result<(), LinalgError> {
        let pose = [
            [0.36, 0.48, -0.8, 0.1],
            [-0.8, 0.6, 0.0, -2.5],
            [0.48, 0.64, 0.6, 7.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let twice = invert_mat4(&invert_mat4(&pose)?)?;
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(twice[i][j], pose[i][j], epsilon = 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn test_invert_mat4_singular() {
        let singular = [
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let result = invert_mat4(&singular);
        assert!(matches!(result, Err(LinalgError::SingularMatrix(_))));
    }
}
