//! 3D vectors, Euler angles and rotation matrices
//!
//! The rotation matrix is built from six approximated sines/cosines as
//! `Rx(roll) * Ry(pitch) * Rz(yaw)` and applied in row-vector form
//! (`v' = v * M`, i.e. `M^T * v`).

use core::ops::{Add, Mul, Neg, Sub};

use libm::sqrtf;
use nalgebra::Matrix3;

use crate::error::MathError;
use crate::trig::{TrigApprox, DEFAULT_TRIG};

/// 3x3 rotation matrix, row-major indexing `m[(row, col)]`
pub type RotationMatrix = Matrix3<f32>;

/// A point or direction in body or earth frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length
    pub fn length(&self) -> f32 {
        sqrtf(self.dot(self))
    }

    /// Unit vector in the same direction, or `None` for the zero vector
    pub fn normalized(&self) -> Option<Self> {
        let mut unit = *self;
        normalize_into(self, &mut unit).ok().map(|()| unit)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

/// Roll/pitch/yaw attitude in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EulerAngles {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl EulerAngles {
    pub const fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }
}

impl Neg for EulerAngles {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.roll, -self.pitch, -self.yaw)
    }
}

/// Normalize `src` into `dest`
///
/// A zero-length `src` leaves `dest` exactly as it was (not zeroed, not
/// copied from `src`) and returns [`MathError::ZeroLength`].
///
/// # Example
///
/// ```
/// use flight_maths::{normalize_into, MathError, Vector3};
///
/// let mut dest = Vector3::new(9.0, 9.0, 9.0);
/// assert_eq!(normalize_into(&Vector3::ZERO, &mut dest), Err(MathError::ZeroLength));
/// assert_eq!(dest, Vector3::new(9.0, 9.0, 9.0));
///
/// normalize_into(&Vector3::new(0.0, 3.0, 4.0), &mut dest).unwrap();
/// assert_eq!(dest, Vector3::new(0.0, 0.6, 0.8));
/// ```
pub fn normalize_into(src: &Vector3, dest: &mut Vector3) -> Result<(), MathError> {
    let length = src.length();
    if length == 0.0 {
        log_debug!("normalize: zero-length vector, destination left unchanged");
        return Err(MathError::ZeroLength);
    }

    dest.x = src.x / length;
    dest.y = src.y / length;
    dest.z = src.z / length;
    Ok(())
}

impl TrigApprox {
    /// Build the `Rx(roll) * Ry(pitch) * Rz(yaw)` rotation matrix with this
    /// approximation set
    pub fn rotation_matrix(&self, angles: &EulerAngles) -> RotationMatrix {
        let cosx = self.cos(angles.roll);
        let sinx = self.sin(angles.roll);
        let cosy = self.cos(angles.pitch);
        let siny = self.sin(angles.pitch);
        let cosz = self.cos(angles.yaw);
        let sinz = self.sin(angles.yaw);

        let coszcosx = cosz * cosx;
        let sinzcosx = sinz * cosx;
        let coszsinx = sinx * cosz;
        let sinzsinx = sinx * sinz;

        Matrix3::new(
            cosz * cosy,
            -cosy * sinz,
            siny,
            sinzcosx + coszsinx * siny,
            coszcosx - sinzsinx * siny,
            -sinx * cosy,
            sinzsinx - coszcosx * siny,
            coszsinx + sinzcosx * siny,
            cosy * cosx,
        )
    }

    /// [`rotate`] with this approximation set
    pub fn rotate(&self, v: &Vector3, angles: &EulerAngles) -> Vector3 {
        let m = self.rotation_matrix(angles);
        (m.transpose() * nalgebra::Vector3::from(*v)).into()
    }

    /// [`rotate_inverse`] with this approximation set
    pub fn rotate_inverse(&self, v: &Vector3, angles: &EulerAngles) -> Vector3 {
        let m = self.rotation_matrix(angles);
        (m * nalgebra::Vector3::from(*v)).into()
    }
}

/// Build the rotation matrix for `angles` with the default trig accuracy
pub fn build_rotation_matrix(angles: &EulerAngles) -> RotationMatrix {
    DEFAULT_TRIG.rotation_matrix(angles)
}

/// Rotate `v` by the Euler angles `angles`
///
/// Computes `M^T * v` where `M = build_rotation_matrix(angles)`. For a
/// single-axis rotation, rotating by `-angles` undoes it; for combined
/// angles use [`rotate_inverse`].
pub fn rotate(v: &Vector3, angles: &EulerAngles) -> Vector3 {
    DEFAULT_TRIG.rotate(v, angles)
}

/// Undo [`rotate`] for the same `angles` (computes `M * v`)
pub fn rotate_inverse(v: &Vector3, angles: &EulerAngles) -> Vector3 {
    DEFAULT_TRIG.rotate_inverse(v, angles)
}
