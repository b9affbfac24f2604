#![cfg_attr(not(test), no_std)]

//! flight_maths - Numeric primitives for attitude estimation and control loops
//!
//! This crate contains the small, allocation-free building blocks that an
//! AHRS and a rate/attitude controller call once per sample.
//!
//! # Design Principles
//!
//! - **Pure no_std**: No std library dependencies, no allocation
//! - **Bounded time**: Every operation runs in small constant time
//! - **Defined fallbacks**: Degenerate inputs produce a defined value, and
//!   the operations that can hit one also report it through [`MathError`]
//!
//! # Modules
//!
//! - [`trig`]: Polynomial sine/cosine/atan2/acos approximations
//! - [`vector`]: 3D vectors, Euler angles and rotation matrices
//! - [`quaternion`]: Quaternion algebra and body/earth frame transforms
//! - [`stats`]: Running mean/variance accumulator (Welford)
//! - [`median`]: Fixed sorting-network median filters (3/5/7/9 samples)
//! - [`scalar`]: Deadband, range scaling, Q12 fixed point, GCD
//! - [`error`]: Degenerate-case indicator returned by fallible operations

// Logging macros (log_trace!, log_debug!, log_warn!) must be declared first
#[macro_use]
mod logging;

pub mod error;
pub mod median;
pub mod quaternion;
pub mod scalar;
pub mod stats;
pub mod trig;
pub mod vector;

pub use error::MathError;
pub use median::{median3, median5, median7, median9};
pub use quaternion::{
    transform_vector_body_to_earth, transform_vector_earth_to_body, Quaternion,
    QuaternionProducts,
};
pub use scalar::{
    apply_deadband, apply_deadband_f32, array_sub, checked_scale_range, gcd, scale_range,
    scale_range_f32, Q12,
};
pub use stats::RunningStats;
pub use trig::{
    acos_approx, atan2_approx, cos_approx, degrees_to_radians, sin_approx, TrigAccuracy,
    TrigApprox,
};
pub use vector::{
    build_rotation_matrix, normalize_into, rotate, rotate_inverse, EulerAngles, RotationMatrix,
    Vector3,
};
