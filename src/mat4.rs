//! 4x4 matrices for 3D transforms and camera setup.
//!
//! Matrices are stored row-major as 16 contiguous `f32`s with no padding, so a
//! `Mat4` can be copied byte-for-byte into a uniform buffer slot. Composition
//! follows the row-vector convention internally: `a * b` (or `a.multiply(&b)`)
//! builds the transform that applies `b`'s effect first and `a`'s second,
//! which reads as `a_matrix * b_matrix` in conventional column-vector math.
//!
//! # Example
//!
//! ```
//! use strata::{Mat4, Vec3};
//!
//! let view = Mat4::look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::perspective(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);
//! let view_proj = proj * view;
//!
//! // Ready for upload: 64 bytes, row-major, no padding.
//! let bytes: &[u8] = bytemuck::bytes_of(&view_proj);
//! assert_eq!(bytes.len(), 64);
//! ```

use std::ops::Mul;

use crate::vec3::Vec3;

/// A 4x4 transform matrix, stored row-major with no padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4 { m: [0.0; 16] };

    #[rustfmt::skip]
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const fn identity() -> Mat4 {
        Mat4::IDENTITY
    }

    pub const fn zero() -> Mat4 {
        Mat4::ZERO
    }

    /// Builds a matrix from 16 coefficients in row-major order.
    pub const fn from_rows(m: [f32; 16]) -> Mat4 {
        Mat4 { m }
    }

    /// Coefficient at `(row, col)`, both in `0..4`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    /// The raw coefficients, row-major.
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Composes two transforms: the result applies `other`'s effect first,
    /// then `self`'s.
    ///
    /// Camera code depends on this ordering: `projection.multiply(&view)`
    /// takes points through view space before clip space.
    pub fn multiply(&self, other: &Mat4) -> Mat4 {
        let a = &self.m;
        let b = &other.m;
        let mut m = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += b[row * 4 + k] * a[k * 4 + col];
                }
                m[row * 4 + col] = sum;
            }
        }
        Mat4 { m }
    }

    #[rustfmt::skip]
    pub fn translation(v: Vec3) -> Mat4 {
        Mat4::from_rows([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            v.x, v.y, v.z, 1.0,
        ])
    }

    /// Rotation about the x axis by `angle` radians, counter-clockwise when
    /// looking down the axis toward the origin.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Mat4 {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::from_rows([
            1.0, 0.0, 0.0, 0.0,
            0.0,   c,   s, 0.0,
            0.0,  -s,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Mat4 {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::from_rows([
              c, 0.0,  -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
              s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Mat4 {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::from_rows([
              c,   s, 0.0, 0.0,
             -s,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn scaling(v: Vec3) -> Mat4 {
        Mat4::from_rows([
            v.x, 0.0, 0.0, 0.0,
            0.0, v.y, 0.0, 0.0,
            0.0, 0.0, v.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// `self` composed with a translation: the translation applies first.
    pub fn translate(&self, v: Vec3) -> Mat4 {
        self.multiply(&Mat4::translation(v))
    }

    pub fn rotate_x(&self, angle: f32) -> Mat4 {
        self.multiply(&Mat4::rotation_x(angle))
    }

    pub fn rotate_y(&self, angle: f32) -> Mat4 {
        self.multiply(&Mat4::rotation_y(angle))
    }

    pub fn rotate_z(&self, angle: f32) -> Mat4 {
        self.multiply(&Mat4::rotation_z(angle))
    }

    pub fn scale(&self, v: Vec3) -> Mat4 {
        self.multiply(&Mat4::scaling(v))
    }

    /// Orthographic projection mapping the given box to WebGPU clip space
    /// (x, y in [-1, 1], depth in [0, 1] with `near` at 0).
    ///
    /// Degenerate bounds (`left == right`, `bottom == top`, `near == far`)
    /// divide by zero and produce non-finite coefficients; that is a caller
    /// contract violation, not a recoverable error.
    #[rustfmt::skip]
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        Mat4::from_rows([
            2.0 / (right - left), 0.0, 0.0, 0.0,
            0.0, 2.0 / (top - bottom), 0.0, 0.0,
            0.0, 0.0, 1.0 / (near - far), 0.0,
            (right + left) / (left - right),
            (top + bottom) / (bottom - top),
            near / (near - far),
            1.0,
        ])
    }

    /// Symmetric perspective projection for a right-handed view space looking
    /// down -z, mapping depth to [0, 1] (near plane at 0, far plane at 1).
    ///
    /// `fov_y` is the full vertical field of view in radians and must lie in
    /// `(0, pi)`; `aspect` is width over height and must be positive. Values
    /// outside those ranges follow the math off a cliff rather than being
    /// guarded.
    #[rustfmt::skip]
    pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
        let f = (std::f32::consts::FRAC_PI_2 - 0.5 * fov_y).tan();
        let range_inv = 1.0 / (z_near - z_far);
        Mat4::from_rows([
            f / aspect, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, z_far * range_inv, -1.0,
            0.0, 0.0, z_near * z_far * range_inv, 0.0,
        ])
    }

    /// General inverse via cofactor expansion.
    ///
    /// Singular input yields `Inf`/`NaN` coefficients; there is deliberately
    /// no determinant guard, so near-singular matrices degrade the way the
    /// raw floating-point algorithm does.
    pub fn inverse(&self) -> Mat4 {
        let m = &self.m;
        let m00 = m[0];
        let m01 = m[1];
        let m02 = m[2];
        let m03 = m[3];
        let m10 = m[4];
        let m11 = m[5];
        let m12 = m[6];
        let m13 = m[7];
        let m20 = m[8];
        let m21 = m[9];
        let m22 = m[10];
        let m23 = m[11];
        let m30 = m[12];
        let m31 = m[13];
        let m32 = m[14];
        let m33 = m[15];

        let tmp0 = m22 * m33;
        let tmp1 = m32 * m23;
        let tmp2 = m12 * m33;
        let tmp3 = m32 * m13;
        let tmp4 = m12 * m23;
        let tmp5 = m22 * m13;
        let tmp6 = m02 * m33;
        let tmp7 = m32 * m03;
        let tmp8 = m02 * m23;
        let tmp9 = m22 * m03;
        let tmp10 = m02 * m13;
        let tmp11 = m12 * m03;
        let tmp12 = m20 * m31;
        let tmp13 = m30 * m21;
        let tmp14 = m10 * m31;
        let tmp15 = m30 * m11;
        let tmp16 = m10 * m21;
        let tmp17 = m20 * m11;
        let tmp18 = m00 * m31;
        let tmp19 = m30 * m01;
        let tmp20 = m00 * m21;
        let tmp21 = m20 * m01;
        let tmp22 = m00 * m11;
        let tmp23 = m10 * m01;

        let t0 = (tmp0 * m11 + tmp3 * m21 + tmp4 * m31) - (tmp1 * m11 + tmp2 * m21 + tmp5 * m31);
        let t1 = (tmp1 * m01 + tmp6 * m21 + tmp9 * m31) - (tmp0 * m01 + tmp7 * m21 + tmp8 * m31);
        let t2 = (tmp2 * m01 + tmp7 * m11 + tmp10 * m31) - (tmp3 * m01 + tmp6 * m11 + tmp11 * m31);
        let t3 = (tmp5 * m01 + tmp8 * m11 + tmp11 * m21) - (tmp4 * m01 + tmp9 * m11 + tmp10 * m21);

        let d = 1.0 / (m00 * t0 + m10 * t1 + m20 * t2 + m30 * t3);

        Mat4::from_rows([
            d * t0,
            d * t1,
            d * t2,
            d * t3,
            d * ((tmp1 * m10 + tmp2 * m20 + tmp5 * m30) - (tmp0 * m10 + tmp3 * m20 + tmp4 * m30)),
            d * ((tmp0 * m00 + tmp7 * m20 + tmp8 * m30) - (tmp1 * m00 + tmp6 * m20 + tmp9 * m30)),
            d * ((tmp3 * m00 + tmp6 * m10 + tmp11 * m30) - (tmp2 * m00 + tmp7 * m10 + tmp10 * m30)),
            d * ((tmp4 * m00 + tmp9 * m10 + tmp10 * m20) - (tmp5 * m00 + tmp8 * m10 + tmp11 * m20)),
            d * ((tmp12 * m13 + tmp15 * m23 + tmp16 * m33)
                - (tmp13 * m13 + tmp14 * m23 + tmp17 * m33)),
            d * ((tmp13 * m03 + tmp18 * m23 + tmp21 * m33)
                - (tmp12 * m03 + tmp19 * m23 + tmp20 * m33)),
            d * ((tmp14 * m03 + tmp19 * m13 + tmp22 * m33)
                - (tmp15 * m03 + tmp18 * m13 + tmp23 * m33)),
            d * ((tmp17 * m03 + tmp20 * m13 + tmp23 * m23)
                - (tmp16 * m03 + tmp21 * m13 + tmp22 * m23)),
            d * ((tmp14 * m22 + tmp17 * m32 + tmp13 * m12)
                - (tmp16 * m32 + tmp12 * m12 + tmp15 * m22)),
            d * ((tmp20 * m32 + tmp12 * m02 + tmp19 * m22)
                - (tmp18 * m22 + tmp21 * m32 + tmp13 * m02)),
            d * ((tmp18 * m12 + tmp23 * m32 + tmp15 * m02)
                - (tmp22 * m32 + tmp14 * m02 + tmp19 * m12)),
            d * ((tmp22 * m22 + tmp16 * m02 + tmp21 * m12)
                - (tmp20 * m12 + tmp23 * m22 + tmp17 * m02)),
        ])
    }

    /// Camera-space-to-world matrix: an orthonormal frame positioned at
    /// `eye` whose forward (-z) axis points at `target`.
    ///
    /// The stored z axis runs from `target` toward `eye` (a "look-from"
    /// basis). Invert it — or use [`Mat4::look_at`] — to get a view matrix.
    pub fn camera_aim(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let z_axis = (eye - target).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();
        Mat4::basis(x_axis, y_axis, z_axis, eye)
    }

    /// World-to-camera view matrix: `camera_aim(..).inverse()`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::camera_aim(eye, target, up).inverse()
    }

    /// Orients an object at `eye` to face `target`: same frame construction
    /// as [`Mat4::camera_aim`] but with the z axis running from `eye` toward
    /// `target`. The two are not interchangeable; a model aimed with
    /// `camera_aim` faces exactly the wrong way.
    pub fn aim(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let z_axis = (target - eye).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();
        Mat4::basis(x_axis, y_axis, z_axis, eye)
    }

    #[rustfmt::skip]
    fn basis(x: Vec3, y: Vec3, z: Vec3, origin: Vec3) -> Mat4 {
        Mat4::from_rows([
            x.x, x.y, x.z, 0.0,
            y.x, y.y, y.z, 0.0,
            z.x, z.y, z.z, 0.0,
            origin.x, origin.y, origin.z, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn transpose(&self) -> Mat4 {
        let m = &self.m;
        Mat4::from_rows([
            m[0], m[4], m[8],  m[12],
            m[1], m[5], m[9],  m[13],
            m[2], m[6], m[10], m[14],
            m[3], m[7], m[11], m[15],
        ])
    }

    /// Transforms a homogeneous point or direction: the row vector `v` times
    /// `self`. Callers supply `w` explicitly (1 for points, 0 for directions)
    /// and perform the perspective divide themselves.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let m = &self.m;
        let mut out = [0.0f32; 4];
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = v[0] * m[col] + v[1] * m[4 + col] + v[2] * m[8 + col] + v[3] * m[12 + col];
        }
        out
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, other: Mat4) -> Mat4 {
        self.multiply(&other)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(m: [f32; 16]) -> Self {
        Mat4::from_rows(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    fn assert_mat_eq(a: &Mat4, b: &Mat4, tol: f32) {
        for (i, (x, y)) in a.as_array().iter().zip(b.as_array()).enumerate() {
            assert!(
                (x - y).abs() <= tol,
                "coefficient {} differs: {} vs {} (tolerance {})",
                i,
                x,
                y,
                tol
            );
        }
    }

    fn sample_transform() -> Mat4 {
        Mat4::translation(Vec3::new(1.0, -2.0, 3.0))
            .rotate_y(0.7)
            .rotate_x(-0.3)
            .scale(Vec3::new(2.0, 0.5, 1.5))
    }

    #[test]
    fn multiply_identity_is_noop() {
        let m = sample_transform();
        assert_mat_eq(&m.multiply(&Mat4::IDENTITY), &m, 1e-6);
        assert_mat_eq(&Mat4::IDENTITY.multiply(&m), &m, 1e-6);
    }

    #[test]
    fn multiply_applies_rhs_first() {
        // Rotate 90 degrees about z, then translate: the rotated x axis ends
        // up at the translated origin plus world y.
        let m = Mat4::translation(Vec3::new(5.0, 0.0, 0.0))
            .multiply(&Mat4::rotation_z(FRAC_PI_2));
        let p = m.transform([1.0, 0.0, 0.0, 1.0]);
        assert!((p[0] - 5.0).abs() < 1e-6);
        assert!((p[1] - 1.0).abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn inverse_roundtrip() {
        let m = sample_transform();
        assert_mat_eq(&m.multiply(&m.inverse()), &Mat4::IDENTITY, 1e-5);
        assert_mat_eq(&m.inverse().multiply(&m), &Mat4::IDENTITY, 1e-5);
    }

    #[test]
    fn inverse_of_singular_is_nonfinite() {
        let singular = Mat4::scaling(Vec3::new(1.0, 1.0, 0.0));
        let inv = singular.inverse();
        assert!(inv.as_array().iter().any(|c| !c.is_finite()));
    }

    #[test]
    fn transpose_is_involutive() {
        let m = sample_transform();
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn translate_composes_on_the_right() {
        let m = sample_transform();
        let v = Vec3::new(0.5, 0.25, -4.0);
        assert_eq!(m.translate(v), m.multiply(&Mat4::translation(v)));
        assert_eq!(m.rotate_z(1.1), m.multiply(&Mat4::rotation_z(1.1)));
        assert_eq!(m.scale(v), m.multiply(&Mat4::scaling(v)));
    }

    #[test]
    fn look_at_puts_target_in_front() {
        let eye = Vec3::new(3.0, 4.0, 5.0);
        let target = Vec3::new(-1.0, 0.5, 2.0);
        let view = Mat4::look_at(eye, target, Vec3::Y);

        let t = view.transform([target.x, target.y, target.z, 1.0]);
        assert!(t[2] < 0.0, "target should sit at negative view-space z, got {}", t[2]);

        // The eye maps to the view-space origin.
        let e = view.transform([eye.x, eye.y, eye.z, 1.0]);
        for c in &e[..3] {
            assert!(c.abs() < 1e-5);
        }
    }

    #[test]
    fn camera_aim_z_axis_points_away_from_target() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let m = Mat4::camera_aim(eye, Vec3::ZERO, Vec3::Y);
        // Row 2 is the z axis: from target toward eye, so +z here.
        assert!((m.at(2, 2) - 1.0).abs() < 1e-6);
        // Row 3 carries the eye position.
        assert_eq!([m.at(3, 0), m.at(3, 1), m.at(3, 2)], [0.0, 0.0, 5.0]);
    }

    #[test]
    fn aim_z_axis_points_toward_target() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let m = Mat4::aim(eye, Vec3::ZERO, Vec3::Y);
        assert!((m.at(2, 2) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_depth_range() {
        let proj = Mat4::perspective(FRAC_PI_3, 1.0, 0.1, 100.0);

        // A point one unit down -z lands inside the NDC cube.
        let p = proj.transform([0.0, 0.0, -1.0, 1.0]);
        assert!(p.iter().all(|c| c.is_finite()));
        let (x, y) = (p[0] / p[3], p[1] / p[3]);
        assert!((-1.0..=1.0).contains(&x));
        assert!((-1.0..=1.0).contains(&y));

        // Near plane maps to depth 0, far plane to depth 1.
        let near = proj.transform([0.0, 0.0, -0.1, 1.0]);
        assert!((near[2] / near[3]).abs() < 1e-5);
        let far = proj.transform([0.0, 0.0, -100.0, 1.0]);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn ortho_maps_box_corners() {
        // near/far are distances along -z, like perspective.
        let proj = Mat4::ortho(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        let p = proj.transform([2.0, 1.0, 0.0, 1.0]);
        assert!((p[0] - 1.0).abs() < 1e-6);
        assert!((p[1] - 1.0).abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
        let q = proj.transform([-2.0, -1.0, -10.0, 1.0]);
        assert!((q[0] + 1.0).abs() < 1e-6);
        assert!((q[1] + 1.0).abs() < 1e-6);
        assert!((q[2] - 1.0).abs() < 1e-6);
    }

    // Row-major storage of a row-vector-convention matrix is the same flat
    // array as glam's column-major storage of the column-vector equivalent,
    // so the coefficients must match directly.
    fn glam_cols(m: &Mat4) -> glam::Mat4 {
        glam::Mat4::from_cols_array(m.as_array())
    }

    #[test]
    fn matches_glam_rotation_and_translation() {
        let ours = glam_cols(&Mat4::rotation_y(0.9));
        let theirs = glam::Mat4::from_rotation_y(0.9);
        assert!(ours.abs_diff_eq(theirs, 1e-6));

        let ours = glam_cols(&Mat4::translation(Vec3::new(1.0, 2.0, 3.0)));
        let theirs = glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        assert!(ours.abs_diff_eq(theirs, 1e-6));
    }

    #[test]
    fn matches_glam_look_at() {
        let view = Mat4::look_at(Vec3::new(3.0, 4.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let theirs = glam::Mat4::look_at_rh(
            glam::Vec3::new(3.0, 4.0, 5.0),
            glam::Vec3::new(0.0, 1.0, 0.0),
            glam::Vec3::Y,
        );
        assert!(glam_cols(&view).abs_diff_eq(theirs, 1e-5));
    }

    #[test]
    fn matches_glam_perspective() {
        let proj = Mat4::perspective(FRAC_PI_3, 1.5, 0.1, 100.0);
        let theirs = glam::Mat4::perspective_rh(FRAC_PI_3, 1.5, 0.1, 100.0);
        assert!(glam_cols(&proj).abs_diff_eq(theirs, 1e-5));
    }

    #[test]
    fn rotation_full_turn_is_identity() {
        assert_mat_eq(&Mat4::rotation_x(2.0 * PI), &Mat4::IDENTITY, 1e-6);
        assert_mat_eq(&Mat4::rotation_z(2.0 * PI), &Mat4::IDENTITY, 1e-6);
    }
}
