//! Row-major 4×4 homogeneous transforms used while composing interaction
//! deltas.
//!
//! These are deliberately small and free of any rendering state: a pan
//! gesture builds a handful of them, multiplies them together and reads a
//! translation back out. Render-time matrices use [`glam::DMat4`] instead;
//! [`Mat4::to_dmat4`] bridges the two conventions.

use std::ops::Mul;

use glam::{DMat4, DVec3};

/// A 4×4 matrix stored row-major: element `(row, col)` lives at
/// `row * 4 + col`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [f64; 16]);

/// Row-major index of the X translation slot.
pub const TX: usize = 3;
/// Row-major index of the Y translation slot.
pub const TY: usize = 7;
/// Row-major index of the Z translation slot.
pub const TZ: usize = 11;

impl Mat4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Element at `(row, col)`.
    #[inline]
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.0[row * 4 + col]
    }

    /// A pure translation by `t`.
    #[must_use]
    pub fn translation(t: DVec3) -> Self {
        let mut m = Self::IDENTITY;
        m.0[TX] = t.x;
        m.0[TY] = t.y;
        m.0[TZ] = t.z;
        m
    }

    /// The translation column `(m[3], m[7], m[11])`.
    #[must_use]
    pub fn translation_part(&self) -> DVec3 {
        DVec3::new(self.0[TX], self.0[TY], self.0[TZ])
    }

    /// Transpose (swap rows and columns).
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.at(row, col);
            }
        }
        Self(out)
    }

    /// Determinant of the upper-left 3×3 block.
    #[must_use]
    pub fn determinant3(&self) -> f64 {
        let m = |r, c| self.at(r, c);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Convert to glam's column-major representation.
    #[must_use]
    pub fn to_dmat4(&self) -> DMat4 {
        // Reading row-major storage as columns yields the transpose.
        DMat4::from_cols_array(&self.0).transpose()
    }

    /// Largest absolute element-wise difference to `other`.
    #[must_use]
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        multiply(&self, &rhs)
    }
}

/// The 4×4 identity.
#[must_use]
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Standard matrix product `a · b`.
#[must_use]
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = (0..4).map(|i| a.at(row, i) * b.at(i, col)).sum();
        }
    }
    Mat4(out)
}

/// Rotation of `angle_degrees` about the axis `(x, y, z)`.
///
/// The axis should be unit length; it is used as given. The result matches
/// the legacy `glRotate` convention (counter-clockwise looking down the
/// axis toward the origin).
#[must_use]
pub fn rotation(angle_degrees: f64, x: f64, y: f64, z: f64) -> Mat4 {
    let (s, c) = angle_degrees.to_radians().sin_cos();
    let cc = 1.0 - c;
    Mat4([
        x * x * cc + c,
        x * y * cc - z * s,
        x * z * cc + y * s,
        0.0,
        y * x * cc + z * s,
        y * y * cc + c,
        y * z * cc - x * s,
        0.0,
        x * z * cc - y * s,
        y * z * cc + x * s,
        z * z * cc + c,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ])
}
