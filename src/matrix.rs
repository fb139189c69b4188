//! Dense matrix multiplication with shape validation.
//!
//! A thin layer over [`ndarray`]'s `dot`: the only added behavior is
//! that mismatched inner dimensions surface as a typed error instead of
//! a panic, so callers can treat shape problems like any other invalid
//! argument.

use ndarray::{Array2, ArrayView2};

/// Error type for incompatible matrix shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The left operand's column count does not match the right
    /// operand's row count.
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { lhs, rhs } => {
                write!(
                    f,
                    "cannot multiply {}×{} by {}×{}: inner dimensions must agree",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// Multiplies two dense `f64` matrices.
///
/// For an `n×m` left operand and an `m×k` right operand, returns the
/// `n×k` product. Delegates the actual multiplication to `ndarray`'s
/// `dot` after validating the inner dimensions.
///
/// # Complexity
/// Time: O(n·m·k), Space: O(n·k)
///
/// # Errors
/// Returns [`MatrixError::DimensionMismatch`] if `lhs` has a different
/// number of columns than `rhs` has rows.
///
/// # Examples
/// ```
/// use mc_numerics::matrix::matmul;
/// use ndarray::array;
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[5.0, 6.0], [7.0, 8.0]];
/// let c = matmul(a.view(), b.view()).unwrap();
/// assert_eq!(c, array![[19.0, 22.0], [43.0, 50.0]]);
/// ```
pub fn matmul(
    lhs: ArrayView2<'_, f64>,
    rhs: ArrayView2<'_, f64>,
) -> Result<Array2<f64>, MatrixError> {
    if lhs.ncols() != rhs.nrows() {
        return Err(MatrixError::DimensionMismatch {
            lhs: lhs.dim(),
            rhs: rhs.dim(),
        });
    }
    Ok(lhs.dot(&rhs))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use ndarray::array;
    use rand::Rng;

    /// Naive triple-loop reference multiplication.
    fn reference_mul(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
        let (n, m) = a.dim();
        let k = b.ncols();
        Array2::from_shape_fn((n, k), |(i, j)| (0..m).map(|l| a[[i, l]] * b[[l, j]]).sum())
    }

    #[test]
    fn test_matmul_known_product() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        let c = matmul(a.view(), b.view()).unwrap();
        assert_eq!(c, array![[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn test_matmul_identity_is_neutral() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let eye = Array2::eye(3);
        assert_eq!(matmul(a.view(), eye.view()).unwrap(), a);
        assert_eq!(matmul(eye.view(), a.view()).unwrap(), a);
    }

    #[test]
    fn test_matmul_rectangular() {
        let a = array![[1.0, 0.0, 2.0], [-1.0, 3.0, 1.0]];
        let b = array![[3.0, 1.0], [2.0, 1.0], [1.0, 0.0]];
        let c = matmul(a.view(), b.view()).unwrap();
        assert_eq!(c, array![[5.0, 1.0], [4.0, 2.0]]);
    }

    #[test]
    fn test_matmul_one_by_one() {
        let a = array![[3.0]];
        let b = array![[4.0]];
        assert_eq!(matmul(a.view(), b.view()).unwrap(), array![[12.0]]);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(
            matmul(a.view(), b.view()),
            Err(MatrixError::DimensionMismatch {
                lhs: (2, 2),
                rhs: (3, 2),
            })
        );
    }

    #[test]
    fn test_matmul_matches_reference() {
        let mut rng = create_rng(42);
        let a = Array2::from_shape_fn((7, 5), |_| rng.random_range(-10.0..10.0));
        let b = Array2::from_shape_fn((5, 9), |_| rng.random_range(-10.0..10.0));
        let fast = matmul(a.view(), b.view()).unwrap();
        let slow = reference_mul(&a, &b);
        for (x, y) in fast.iter().zip(slow.iter()) {
            assert!((x - y).abs() < 1e-9, "mismatch: {x} vs {y}");
        }
    }

    #[test]
    fn test_error_display() {
        let err = MatrixError::DimensionMismatch {
            lhs: (2, 3),
            rhs: (4, 5),
        };
        assert_eq!(
            err.to_string(),
            "cannot multiply 2×3 by 4×5: inner dimensions must agree"
        );
    }
}
