//! Quaternion algebra and frame transforms
//!
//! # Coordinate System
//!
//! - Quaternion: scalar-first (w, x, y, z), Hamilton convention
//! - A reference quaternion `q` maps body frame to earth frame as `q * v * q*`
//!
//! Unit norm is expected for orientation use but is not enforced by the
//! type; call [`Quaternion::normalize`] explicitly after integrating rates.

use core::ops::{Add, Mul};

use libm::sqrtf;
use nalgebra::Matrix3;

use crate::error::MathError;
use crate::vector::{RotationMatrix, Vector3};

/// Quaternion (w, x, y, z)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity rotation
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// All-zero quaternion (zero pure vector)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Embed a vector as a pure quaternion (`w = 0`)
    pub const fn from_vector(v: &Vector3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Vector (x, y, z) part
    pub const fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Hamilton product `self * rhs`
    pub fn multiply(&self, rhs: &Self) -> Self {
        let l = self;
        let r = rhs;
        Self::new(
            l.w * r.w - l.x * r.x - l.y * r.y - l.z * r.z,
            l.w * r.x + l.x * r.w + l.y * r.z - l.z * r.y,
            l.w * r.y - l.x * r.z + l.y * r.w + l.z * r.x,
            l.w * r.z + l.x * r.y - l.y * r.x + l.z * r.w,
        )
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared norm `w² + x² + y² + z²`
    pub fn norm(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean modulus `sqrt(norm)`
    pub fn modulus(&self) -> f32 {
        sqrtf(self.norm())
    }

    /// Scale to unit modulus in place
    ///
    /// A zero-modulus quaternion is left unchanged and
    /// [`MathError::ZeroModulus`] is returned; callers must not treat the
    /// value as an orientation afterwards.
    pub fn normalize(&mut self) -> Result<(), MathError> {
        let modulus = self.modulus();
        if modulus == 0.0 {
            log_debug!("quaternion normalize: zero modulus, value left unnormalized");
            return Err(MathError::ZeroModulus);
        }

        self.w /= modulus;
        self.x /= modulus;
        self.y /= modulus;
        self.z /= modulus;
        Ok(())
    }

    /// Pairwise component products for downstream consumers
    ///
    /// The result is a snapshot; recompute it whenever `self` changes.
    pub fn products(&self) -> QuaternionProducts {
        QuaternionProducts::from(self)
    }
}

/// Component-wise sum
impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl From<nalgebra::Quaternion<f32>> for Quaternion {
    fn from(q: nalgebra::Quaternion<f32>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f32> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

/// Cached pairwise products of a quaternion's components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuaternionProducts {
    pub ww: f32,
    pub wx: f32,
    pub wy: f32,
    pub wz: f32,
    pub xx: f32,
    pub xy: f32,
    pub xz: f32,
    pub yy: f32,
    pub yz: f32,
    pub zz: f32,
}

impl From<&Quaternion> for QuaternionProducts {
    fn from(q: &Quaternion) -> Self {
        Self {
            ww: q.w * q.w,
            wx: q.w * q.x,
            wy: q.w * q.y,
            wz: q.w * q.z,
            xx: q.x * q.x,
            xy: q.x * q.y,
            xz: q.x * q.z,
            yy: q.y * q.y,
            yz: q.y * q.z,
            zz: q.z * q.z,
        }
    }
}

impl QuaternionProducts {
    /// Body-to-earth rotation matrix of the (unit) source quaternion
    ///
    /// Multiplying a body-frame vector by this matrix gives the same result
    /// as [`transform_vector_body_to_earth`].
    pub fn rotation_matrix(&self) -> RotationMatrix {
        Matrix3::new(
            1.0 - 2.0 * self.yy - 2.0 * self.zz,
            2.0 * (self.xy - self.wz),
            2.0 * (self.xz + self.wy),
            2.0 * (self.xy + self.wz),
            1.0 - 2.0 * self.xx - 2.0 * self.zz,
            2.0 * (self.yz - self.wx),
            2.0 * (self.xz - self.wy),
            2.0 * (self.yz + self.wx),
            1.0 - 2.0 * self.xx - 2.0 * self.yy,
        )
    }
}

/// Rotate a body-frame vector into the earth frame: `q * v * q*`
pub fn transform_vector_body_to_earth(vector: &Vector3, reference: &Quaternion) -> Vector3 {
    let v = Quaternion::from_vector(vector);
    reference
        .multiply(&v)
        .multiply(&reference.conjugate())
        .vector()
}

/// Rotate an earth-frame vector into the body frame: `q* * v * q`
pub fn transform_vector_earth_to_body(vector: &Vector3, reference: &Quaternion) -> Vector3 {
    let v = Quaternion::from_vector(vector);
    reference
        .conjugate()
        .multiply(&v)
        .multiply(reference)
        .vector()
}
