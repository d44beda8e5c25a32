use std::ops::{Add, Mul, Neg, Sub};

/// A 3-component vector of `f32`, used for points and directions in 3D space.
///
/// `Vec3` is `#[repr(C)]` and derives [`bytemuck::Pod`] so it can be copied
/// directly into GPU-visible staging memory alongside matrices. There is no
/// implicit homogeneous coordinate; callers supply `w` explicitly where a
/// 4-component value is needed (see [`Mat4::transform`](crate::Mat4::transform)).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Length below which [`Vec3::normalize`] gives up and returns zero.
    const NORMALIZE_EPSILON: f32 = 1e-5;

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Component-wise difference `self - other`.
    ///
    /// Equivalent to the `-` operator; kept as a named method for call sites
    /// that read better without operator sugar.
    pub fn subtract(self, other: Vec3) -> Vec3 {
        self - other
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns a unit-length copy of `self`.
    ///
    /// Near-zero vectors (length below `1e-5`) normalize to [`Vec3::ZERO`]
    /// rather than producing NaN components. Camera code relies on this when
    /// an eye position momentarily coincides with its target.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len > Self::NORMALIZE_EPSILON {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        } else {
            Vec3::ZERO
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_anticommutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(b), -(b.cross(a)));
    }

    #[test]
    fn cross_of_axes() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn normalize_unit_length() {
        let v = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert_eq!(v, Vec3::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn normalize_zero_falls_back_to_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        // Just under the epsilon still falls back.
        assert_eq!(Vec3::new(1e-6, 0.0, 0.0).normalize(), Vec3::ZERO);
    }

    #[test]
    fn subtract_matches_operator() {
        let a = Vec3::new(5.0, 7.0, 9.0);
        let b = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a.subtract(b), a - b);
        assert_eq!(a.subtract(b), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn dot_orthogonal_is_zero() {
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(2.0, 2.0, -2.0)), 0.0);
    }
}
