//! Planar affine transforms in homogeneous coordinates.
//!
//! Convention: points are **row vectors** multiplied on the left,
//! `p' = [x y 1] · M`. With that convention `a.then(b)` (equivalently
//! `AffineTransform2D::compose(a, b)`) is the plain matrix product `a · b`
//! and means "apply `a`, then apply `b`". Every call site in the crate goes
//! through `compose`/`then`/`apply`; nothing multiplies raw matrices.
//!
//! Layout of the stored matrix:
//!
//! ```text
//! | sx  shy 0 |
//! | shx sy  0 |
//! | tx  ty  1 |
//! ```

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ViewportError, ViewportResult};

/// Immutable 3×3 affine transform value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform2D {
    m: [[f64; 3]; 3],
}

impl AffineTransform2D {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Builds a transform from its six affine coefficients.
    ///
    /// `x' = x·sx + y·shx + tx`, `y' = x·shy + y·sy + ty`.
    #[must_use]
    pub const fn from_coefficients(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            m: [[sx, shy, 0.0], [shx, sy, 0.0], [tx, ty, 1.0]],
        }
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::from_coefficients(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::from_coefficients(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Scale by `(sx, sy)` while keeping `anchor` fixed:
    /// translate(-anchor), then scale, then translate(+anchor).
    #[must_use]
    pub fn scale_about(sx: f64, sy: f64, anchor: DataPoint) -> Self {
        Self::translation(-anchor.x, -anchor.y)
            .then(Self::scale(sx, sy))
            .then(Self::translation(anchor.x, anchor.y))
    }

    /// Matrix product `a · b`: apply `a`, then `b`.
    #[must_use]
    pub fn compose(a: Self, b: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| a.m[row][k] * b.m[k][col]).sum();
            }
        }
        Self { m: out }
    }

    /// Returns the transform that applies `self` first and `next` second.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::compose(self, next)
    }

    #[must_use]
    pub fn determinant(self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse transform, or `SingularTransform` when the determinant is zero
    /// or not finite.
    pub fn invert(self) -> ViewportResult<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(ViewportError::SingularTransform { determinant: det });
        }

        let m = &self.m;
        let inv_det = 1.0 / det;
        let cofactor = |r0: usize, r1: usize, c0: usize, c1: usize| {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };

        // Adjugate (transposed cofactor matrix) scaled by 1/det.
        let out = [
            [
                cofactor(1, 2, 1, 2) * inv_det,
                -cofactor(0, 2, 1, 2) * inv_det,
                cofactor(0, 1, 1, 2) * inv_det,
            ],
            [
                -cofactor(1, 2, 0, 2) * inv_det,
                cofactor(0, 2, 0, 2) * inv_det,
                -cofactor(0, 1, 0, 2) * inv_det,
            ],
            [
                cofactor(1, 2, 0, 1) * inv_det,
                -cofactor(0, 2, 0, 1) * inv_det,
                cofactor(0, 1, 0, 1) * inv_det,
            ],
        ];

        let inverse = Self { m: out };
        if inverse.m.iter().flatten().any(|value| !value.is_finite()) {
            return Err(ViewportError::SingularTransform { determinant: det });
        }
        Ok(inverse)
    }

    /// Transforms a point (translation applies).
    #[must_use]
    pub fn apply(self, point: DataPoint) -> DataPoint {
        let m = &self.m;
        DataPoint::new(
            point.x * m[0][0] + point.y * m[1][0] + m[2][0],
            point.x * m[0][1] + point.y * m[1][1] + m[2][1],
        )
    }

    /// Transforms a displacement vector (linear part only, no translation).
    #[must_use]
    pub fn apply_vector(self, vector: DataPoint) -> DataPoint {
        let m = &self.m;
        DataPoint::new(
            vector.x * m[0][0] + vector.y * m[1][0],
            vector.x * m[0][1] + vector.y * m[1][1],
        )
    }

    #[must_use]
    pub fn scale_x(self) -> f64 {
        self.m[0][0]
    }

    #[must_use]
    pub fn scale_y(self) -> f64 {
        self.m[1][1]
    }

    #[must_use]
    pub fn translate_x(self) -> f64 {
        self.m[2][0]
    }

    #[must_use]
    pub fn translate_y(self) -> f64 {
        self.m[2][1]
    }

    #[must_use]
    pub fn to_array(self) -> [[f64; 3]; 3] {
        self.m
    }
}

impl Default for AffineTransform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::AffineTransform2D;
    use crate::core::DataPoint;

    #[test]
    fn then_applies_left_operand_first() {
        let shift_then_double =
            AffineTransform2D::translation(1.0, 0.0).then(AffineTransform2D::scale(2.0, 2.0));
        let point = shift_then_double.apply(DataPoint::new(1.0, 1.0));
        assert_eq!(point, DataPoint::new(4.0, 2.0));

        let double_then_shift =
            AffineTransform2D::scale(2.0, 2.0).then(AffineTransform2D::translation(1.0, 0.0));
        let point = double_then_shift.apply(DataPoint::new(1.0, 1.0));
        assert_eq!(point, DataPoint::new(3.0, 2.0));
    }

    #[test]
    fn vectors_ignore_translation() {
        let transform =
            AffineTransform2D::scale(3.0, -2.0).then(AffineTransform2D::translation(10.0, 10.0));
        assert_eq!(
            transform.apply_vector(DataPoint::new(1.0, 1.0)),
            DataPoint::new(3.0, -2.0)
        );
    }

    #[test]
    fn zero_scale_is_singular() {
        let result = AffineTransform2D::scale(0.0, 1.0).invert();
        assert!(result.is_err());
    }
}
