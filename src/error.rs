//! Degenerate-case indicator
//!
//! None of the kernel operations can fail in the usual sense. A few inputs
//! (zero-length vectors, zero-modulus quaternions, empty ranges, zero
//! denominators) have no meaningful result; the operations keep a defined
//! fallback value and report which case was hit through [`MathError`].

use core::fmt;

/// Degenerate input reported alongside a defined fallback value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MathError {
    /// Vector has zero Euclidean length and cannot be normalized
    ZeroLength,
    /// Quaternion has zero modulus and cannot be normalized
    ZeroModulus,
    /// Fixed-point construction with a zero denominator
    ZeroDenominator,
    /// Range remap where the source range has zero width
    EmptySourceRange,
}

impl MathError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            MathError::ZeroLength => "ZeroLength",
            MathError::ZeroModulus => "ZeroModulus",
            MathError::ZeroDenominator => "ZeroDenominator",
            MathError::EmptySourceRange => "EmptySourceRange",
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::ZeroLength => write!(f, "vector has zero length"),
            MathError::ZeroModulus => write!(f, "quaternion has zero modulus"),
            MathError::ZeroDenominator => write!(f, "fixed-point denominator is zero"),
            MathError::EmptySourceRange => write!(f, "source range has zero width"),
        }
    }
}
