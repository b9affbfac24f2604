//! Scalar utilities
//!
//! Deadband, linear range remapping, Q12 fixed point and integer helpers
//! used by RC input and actuator output scaling.

use libm::fabsf;

use crate::error::MathError;

/// Integer deadband
///
/// Returns 0 while `|value| < deadband`, otherwise `value` moved toward zero
/// by `deadband`, so the output is continuous at the band edge.
///
/// ```
/// use flight_maths::apply_deadband;
///
/// assert_eq!(apply_deadband(5, 10), 0);
/// assert_eq!(apply_deadband(15, 10), 5);
/// assert_eq!(apply_deadband(-15, 10), -5);
/// ```
pub fn apply_deadband(value: i32, deadband: i32) -> i32 {
    if value.saturating_abs() < deadband {
        return 0;
    }
    if value >= 0 {
        value - deadband
    } else {
        value + deadband
    }
}

/// Floating-point deadband, same shape as [`apply_deadband`]
pub fn apply_deadband_f32(value: f32, deadband: f32) -> f32 {
    if fabsf(value) < deadband {
        return 0.0;
    }
    if value >= 0.0 {
        value - deadband
    } else {
        value + deadband
    }
}

/// Affine remap of `x` from `[src_from, src_to]` to `[dest_from, dest_to]`
///
/// The arithmetic runs in `i128`, so no combination of `i32` inputs
/// overflows the multiply. Integer division truncates toward zero. An `x`
/// outside the source range extrapolates, and a result beyond `i32`
/// saturates to `i32::MIN` or `i32::MAX`.
///
/// # Panics
///
/// Panics (division by zero) when `src_from == src_to`. Use
/// [`checked_scale_range`] when the range comes from untrusted parameters.
pub fn scale_range(x: i32, src_from: i32, src_to: i32, dest_from: i32, dest_to: i32) -> i32 {
    let a = (i128::from(dest_to) - i128::from(dest_from)) * (i128::from(x) - i128::from(src_from));
    let b = i128::from(src_to) - i128::from(src_from);
    let scaled = a / b + i128::from(dest_from);
    scaled.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

/// [`scale_range`] that reports an empty source range instead of panicking
pub fn checked_scale_range(
    x: i32,
    src_from: i32,
    src_to: i32,
    dest_from: i32,
    dest_to: i32,
) -> Result<i32, MathError> {
    if src_from == src_to {
        log_warn!("scale_range: empty source range [{}, {}]", src_from, src_to);
        return Err(MathError::EmptySourceRange);
    }
    Ok(scale_range(x, src_from, src_to, dest_from, dest_to))
}

/// Floating-point affine remap
///
/// An empty source range is not guarded and yields a non-finite result.
pub fn scale_range_f32(x: f32, src_from: f32, src_to: f32, dest_from: f32, dest_to: f32) -> f32 {
    let a = (dest_to - dest_from) * (x - src_from);
    let b = src_to - src_from;
    a / b + dest_from
}

/// Greatest common divisor (Euclid)
///
/// `gcd(n, 0) == n` for every `n`; the sign follows the remainder chain.
pub fn gcd(a: i32, b: i32) -> i32 {
    let (mut num, mut denom) = (a, b);
    while denom != 0 {
        let rem = num.wrapping_rem(denom);
        num = denom;
        denom = rem;
    }
    num
}

/// Element-wise `a - b` for fixed-size sample arrays (e.g. removing a zero offset)
///
/// Each element wraps on overflow.
pub fn array_sub<const N: usize>(a: &[i32; N], b: &[i32; N]) -> [i32; N] {
    core::array::from_fn(|i| a[i].wrapping_sub(b[i]))
}

/// Fixed-point fraction with 12 fractional bits (`raw / 4096`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Q12(i32);

impl Q12 {
    /// Number of fractional bits
    pub const FRACTIONAL_BITS: u32 = 12;

    /// 1.0
    pub const ONE: Self = Self(1 << Self::FRACTIONAL_BITS);

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Build `num / den` as `(num << 12) / den`
    ///
    /// # Panics
    ///
    /// Panics when `den == 0`; see [`Q12::checked_construct`].
    pub fn construct(num: i16, den: i16) -> Self {
        Self((i32::from(num) << Self::FRACTIONAL_BITS) / i32::from(den))
    }

    /// [`Q12::construct`] that reports a zero denominator instead of panicking
    pub fn checked_construct(num: i16, den: i16) -> Result<Self, MathError> {
        if den == 0 {
            log_warn!("q12 construct: zero denominator (num {})", num);
            return Err(MathError::ZeroDenominator);
        }
        Ok(Self::construct(num, den))
    }

    /// Scale `input` by this fraction, rounding toward negative infinity
    pub fn multiply(self, input: i16) -> i16 {
        ((i64::from(input) * i64::from(self.0)) >> Self::FRACTIONAL_BITS) as i16
    }

    /// This fraction as an integer percentage, rounding toward negative infinity
    pub fn percent(self) -> i16 {
        ((100 * i64::from(self.0)) >> Self::FRACTIONAL_BITS) as i16
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / (1 << Self::FRACTIONAL_BITS) as f32
    }
}
