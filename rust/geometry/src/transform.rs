// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View frame transforms
//!
//! An [`AffineTransform`] maps a view's local frame to world space. The three
//! basis vectors are the world directions of the local X, Y and Z axes; the
//! origin is the world position of the local origin.

use crate::error::Result;
use crate::matrix;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// Local → world transform of a view frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub basis_x: Vector3<f64>,
    pub basis_y: Vector3<f64>,
    pub basis_z: Vector3<f64>,
    pub origin: Point3<f64>,
}

impl AffineTransform {
    /// Identity frame at the world origin.
    pub fn identity() -> Self {
        Self {
            basis_x: Vector3::x(),
            basis_y: Vector3::y(),
            basis_z: Vector3::z(),
            origin: Point3::origin(),
        }
    }

    /// Frame from explicit basis vectors. No orthonormality is enforced.
    pub fn from_basis(
        basis_x: Vector3<f64>,
        basis_y: Vector3<f64>,
        basis_z: Vector3<f64>,
        origin: Point3<f64>,
    ) -> Self {
        Self {
            basis_x,
            basis_y,
            basis_z,
            origin,
        }
    }

    /// Plan rotation about world Z by `angle` radians.
    pub fn rotation_z(angle: f64, origin: Point3<f64>) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            basis_x: Vector3::new(cos, sin, 0.0),
            basis_y: Vector3::new(-sin, cos, 0.0),
            basis_z: Vector3::z(),
            origin,
        }
    }

    /// Frame of an elevation view looking along `view_direction`.
    ///
    /// Local Y is world up, local Z points back towards the viewer and local X
    /// completes a right-handed frame (X = Y × Z). The direction is flattened
    /// onto the plan; a vertical direction falls back to looking along +Y.
    pub fn elevation(view_direction: Vector3<f64>, origin: Point3<f64>) -> Self {
        let flat = Vector3::new(view_direction.x, view_direction.y, 0.0);
        let direction = if flat.norm() > 1e-9 {
            flat.normalize()
        } else {
            Vector3::y()
        };

        let basis_y = Vector3::z();
        let basis_z = -direction;
        let basis_x = basis_y.cross(&basis_z).normalize();

        Self {
            basis_x,
            basis_y,
            basis_z,
            origin,
        }
    }

    /// Direction the view looks in (opposite of local Z).
    pub fn view_direction(&self) -> Vector3<f64> {
        -self.basis_z
    }

    /// Linear part: columns are the basis vectors (local → world directions).
    pub fn linear_part(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.basis_x, self.basis_y, self.basis_z])
    }

    /// Basis vectors laid out as rows.
    ///
    /// Applying this to a world vector dots it with each basis axis, which for
    /// an orthonormal frame is the world → local direction mapping.
    pub fn basis_rows(&self) -> Matrix3<f64> {
        self.linear_part().transpose()
    }

    /// 4x4 homogeneous matrix with the origin in the last column.
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        let mut m = self.linear_part().to_homogeneous();
        m[(0, 3)] = self.origin.x;
        m[(1, 3)] = self.origin.y;
        m[(2, 3)] = self.origin.z;
        m
    }

    /// Full affine local → world mapping, origin included.
    pub fn transform_point(&self, local: &Point3<f64>) -> Point3<f64> {
        self.to_homogeneous().transform_point(local)
    }

    /// Full affine world → local mapping, origin included.
    pub fn inverse_transform_point(&self, world: &Point3<f64>) -> Result<Point3<f64>> {
        let inverse = matrix::invert_affine(&self.to_homogeneous())?;
        Ok(inverse.transform_point(world))
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}
