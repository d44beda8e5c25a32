//! 3x3 matrices for 2D transforms and normal matrices, stored with padded
//! rows for uniform-buffer upload.
//!
//! WGSL aligns each row of a `mat3x3f` to 16 bytes, so a `Mat3` physically
//! stores 3 rows of 4 floats (12 in total) with the last slot of every row
//! unused and held at zero. `bytemuck::bytes_of` on a `Mat3` therefore yields
//! exactly the 48 bytes a uniform-buffer field expects, with no repacking.
//! All arithmetic operates on the logical 3x3 coefficients; the pad slots
//! never leak into results.

use std::ops::Mul;

use crate::mat4::Mat4;

/// A 3x3 transform matrix, stored row-major with a row stride of 4 floats.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat3 {
    m: [f32; 12],
}

impl Mat3 {
    pub const ZERO: Mat3 = Mat3 { m: [0.0; 12] };

    #[rustfmt::skip]
    pub const IDENTITY: Mat3 = Mat3 {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
        ],
    };

    pub const fn identity() -> Mat3 {
        Mat3::IDENTITY
    }

    pub const fn zero() -> Mat3 {
        Mat3::ZERO
    }

    /// Builds a matrix from 9 logical coefficients in row-major order,
    /// inserting the pad slot at the end of each row.
    pub const fn from_rows(r: [f32; 9]) -> Mat3 {
        Mat3 {
            m: [
                r[0], r[1], r[2], 0.0,
                r[3], r[4], r[5], 0.0,
                r[6], r[7], r[8], 0.0,
            ],
        }
    }

    /// Logical coefficient at `(row, col)`, both in `0..3`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    /// The raw padded coefficients: 3 rows of 4 floats, pad slots zero.
    pub const fn as_array(&self) -> &[f32; 12] {
        &self.m
    }

    /// Composes two transforms: the result applies `other`'s effect first,
    /// then `self`'s. Same ordering convention as [`Mat4::multiply`].
    pub fn multiply(&self, other: &Mat3) -> Mat3 {
        let mut r = [0.0f32; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += other.at(row, k) * self.at(k, col);
                }
                r[row * 3 + col] = sum;
            }
        }
        Mat3::from_rows(r)
    }

    #[rustfmt::skip]
    pub fn translation([tx, ty]: [f32; 2]) -> Mat3 {
        Mat3::from_rows([
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
             tx,  ty, 1.0,
        ])
    }

    /// 2D rotation by `angle` radians, counter-clockwise in a y-up plane.
    #[rustfmt::skip]
    pub fn rotation(angle: f32) -> Mat3 {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::from_rows([
              c,   s, 0.0,
             -s,   c, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn scaling([sx, sy]: [f32; 2]) -> Mat3 {
        Mat3::from_rows([
             sx, 0.0, 0.0,
            0.0,  sy, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    pub fn translate(&self, t: [f32; 2]) -> Mat3 {
        self.multiply(&Mat3::translation(t))
    }

    pub fn rotate(&self, angle: f32) -> Mat3 {
        self.multiply(&Mat3::rotation(angle))
    }

    pub fn scale(&self, s: [f32; 2]) -> Mat3 {
        self.multiply(&Mat3::scaling(s))
    }

    /// Maps pixel space (origin top-left, y down) to clip space (origin
    /// center, y up): `(0, 0)` lands at `(-1, 1)` and `(width, height)` at
    /// `(1, -1)`.
    #[rustfmt::skip]
    pub fn projection(width: f32, height: f32) -> Mat3 {
        Mat3::from_rows([
            2.0 / width, 0.0, 0.0,
            0.0, -2.0 / height, 0.0,
            -1.0, 1.0, 1.0,
        ])
    }

    /// Extracts the upper-left 3x3 linear part of a 4x4, typically to build a
    /// normal matrix from a model transform.
    pub fn from_mat4(m: &Mat4) -> Mat3 {
        Mat3::from_rows([
            m.at(0, 0), m.at(0, 1), m.at(0, 2),
            m.at(1, 0), m.at(1, 1), m.at(1, 2),
            m.at(2, 0), m.at(2, 1), m.at(2, 2),
        ])
    }

    pub fn transpose(&self) -> Mat3 {
        Mat3::from_rows([
            self.at(0, 0), self.at(1, 0), self.at(2, 0),
            self.at(0, 1), self.at(1, 1), self.at(2, 1),
            self.at(0, 2), self.at(1, 2), self.at(2, 2),
        ])
    }

    /// Transforms a homogeneous 2D point or direction: the row vector `v`
    /// times `self`.
    pub fn transform(&self, v: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = v[0] * self.at(0, col) + v[1] * self.at(1, col) + v[2] * self.at(2, col);
        }
        out
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Mat3::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, other: Mat3) -> Mat3 {
        self.multiply(&other)
    }
}
