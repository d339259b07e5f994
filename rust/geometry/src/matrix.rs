// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Matrix utilities for view frame transforms
//!
//! Thin, allocation-free helpers over nalgebra. Nothing is cached: every
//! projection recomputes its inverse, which is fine for the handful of calls
//! made per view.

use crate::error::{Error, Result};
use crate::transform::AffineTransform;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// Determinants at or below this magnitude are treated as singular.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Extract the 3x3 linear part of a transform (basis vectors as columns).
#[inline]
pub fn to_matrix(transform: &AffineTransform) -> Matrix3<f64> {
    transform.linear_part()
}

/// Invert a 3x3 matrix.
///
/// Near-singular input is a caller error; there is no tolerance-based
/// fallback.
pub fn invert(matrix: &Matrix3<f64>) -> Result<Matrix3<f64>> {
    let determinant = matrix.determinant();
    if !determinant.is_finite() || determinant.abs() <= SINGULARITY_EPSILON {
        return Err(Error::SingularMatrix { determinant });
    }
    matrix
        .try_inverse()
        .ok_or(Error::SingularMatrix { determinant })
}

/// Invert a 4x4 affine matrix.
pub fn invert_affine(matrix: &Matrix4<f64>) -> Result<Matrix4<f64>> {
    let linear = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    let determinant = linear.determinant();
    if !determinant.is_finite() || determinant.abs() <= SINGULARITY_EPSILON {
        return Err(Error::SingularMatrix { determinant });
    }
    matrix
        .try_inverse()
        .ok_or(Error::SingularMatrix { determinant })
}

#[inline]
pub fn to_column_vector(point: &Point3<f64>) -> Vector3<f64> {
    point.coords
}

#[inline]
pub fn to_point(vector: &Vector3<f64>) -> Point3<f64> {
    Point3::from(*vector)
}

/// Matrix–vector product on a point's coordinates.
#[inline]
pub fn apply(matrix: &Matrix3<f64>, point: &Point3<f64>) -> Point3<f64> {
    to_point(&(matrix * to_column_vector(point)))
}
