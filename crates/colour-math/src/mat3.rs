//! 3x3 matrix type for colour transformations.
//!
//! [`Mat3`] is used for RGB-to-XYZ conversions, cone-response transforms
//! and colour fitting.
//!
//! # Convention
//!
//! `m[row][col]`, applied to column vectors on the right: `Mat3 * Vec3`
//! dots each row with the vector. A chain `A * B * v` applies `B` first.

use crate::Vec3;
use std::ops::{Add, Index, Mul};

/// Relative determinant below which a matrix is treated as singular.
///
/// Compared against `|det| / (|r0| |r1| |r2|)`, which is scale-free and
/// at most 1 (Hadamard's inequality).
const SINGULAR_EPSILON: f64 = 1e-12;

/// A 3x3 matrix of `f64`, indexed `m[row][col]`.
///
/// # Example
///
/// ```rust
/// use colour_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Rows.
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix whose columns are `c0`, `c1`, `c2`.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Outer product `a * b^T`.
    #[inline]
    pub fn outer(a: Vec3, b: Vec3) -> Self {
        Self::from_rows([
            (b * a.x).to_array(),
            (b * a.y).to_array(),
            (b * a.z).to_array(),
        ])
    }

    /// Row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Determinant, as the triple product of the rows.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.row(0).dot(self.row(1).cross(self.row(2)))
    }

    /// Inverse, or `None` when the matrix is (near) singular.
    ///
    /// Singularity is judged relative to the row norms, so uniformly
    /// scaling a matrix never changes whether it inverts.
    ///
    /// The columns of the inverse are the pairwise cross products of the
    /// rows, scaled by `1 / det`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colour_math::{CAT02, Mat3, Vec3};
    ///
    /// let inv = CAT02.inverse().unwrap();
    /// let v = Vec3::new(19.01, 20.0, 21.78);
    /// let back = inv * (CAT02 * v);
    /// assert!((back.y - v.y).abs() < 1e-9);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let (r0, r1, r2) = (self.row(0), self.row(1), self.row(2));
        let c0 = r1.cross(r2);
        let det = r0.dot(c0);
        let scale = r0.length() * r1.length() * r2.length();
        if !det.is_finite() || det.abs() <= SINGULAR_EPSILON * scale {
            return None;
        }

        let inv_det = 1.0 / det;
        Some(Self::from_col_vecs(
            c0 * inv_det,
            r2.cross(r0) * inv_det,
            r0.cross(r1) * inv_det,
        ))
    }

    /// `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Matrix product `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let t = other.transpose();
        Self::from_rows(self.m.map(|row| {
            let row = Vec3::from_array(row);
            [row.dot(t.row(0)), row.dot(t.row(1)), row.dot(t.row(2))]
        }))
    }

    /// True when no element is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam DMat3.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Add for Mat3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        for (row, other) in result.m.iter_mut().zip(rhs.m.iter()) {
            for (a, b) in row.iter_mut().zip(other.iter()) {
                *a += b;
            }
        }
        result
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}
