//! Fast trigonometric approximations
//!
//! Polynomial and rational fits that replace `sinf`/`cosf`/`atan2f`/`acosf`
//! in the attitude loop. Only `sqrtf` is taken from libm (for `acos`).
//!
//! # Accuracy
//!
//! | Function | Max absolute error |
//! |----------|--------------------|
//! | `sin`    | 2.31e-6 rad over the full ±32 rad input window |
//! | `cos`    | 2.97e-6 rad (input shifted by π/2 before the window check) |
//! | `atan2`  | 7.15e-7 rad |
//! | `acos`   | 6.76e-5 rad |
//!
//! Inside `[-π, π]` the [`TrigAccuracy::Accurate`] sine stays below 1.2e-7 and
//! [`TrigAccuracy::Fast`] below 1e-6. Outside it, the error is dominated by the
//! `±2π` wrap arithmetic.

use core::f32::consts::{FRAC_PI_2, PI};
use libm::{fabsf, sqrtf};

/// Largest integer part accepted by `sin`/`cos` (about 5 full turns)
const SIN_INPUT_LIMIT: i32 = 32;

/// 9th-order odd polynomial: c3, c5, c7, c9
const SIN_COEF_ACCURATE: [f32; 4] = [
    -1.666_665_710e-1,
    8.333_017_292e-3,
    -1.980_661_520e-4,
    2.600_054_768e-6,
];

/// 7th-order odd polynomial: c3, c5, c7
const SIN_COEF_FAST: [f32; 3] = [-1.666_568_107e-1, 8.312_366_210e-3, -1.849_218_155e-4];

const ATAN_COEF_1: f32 = 3.145_516_658_848_36e-7;
const ATAN_COEF_2: f32 = 0.999_973_566_139_87;
const ATAN_COEF_3: f32 = 0.147_440_070_582_976_84;
const ATAN_COEF_4: f32 = 0.309_981_429_235_135_3;
const ATAN_COEF_5: f32 = 0.050_301_764_258_721_75;
const ATAN_COEF_6: f32 = 0.147_103_913_365_246_9;
const ATAN_COEF_7: f32 = 0.644_464_067_689_154_8;

/// Accuracy/speed tradeoff for the sine polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrigAccuracy {
    /// 4-term polynomial (degree 9)
    #[default]
    Accurate,
    /// 3-term polynomial (degree 7), one multiply fewer
    Fast,
}

/// Trigonometric approximations with a fixed accuracy setting
///
/// Built once when the attitude code is initialized and then passed around
/// by value. `atan2` and `acos` have a single fit and ignore the setting.
///
/// # Example
///
/// ```
/// use flight_maths::{TrigAccuracy, TrigApprox};
///
/// let trig = TrigApprox::new(TrigAccuracy::Fast);
/// assert!((trig.sin(0.5) - 0.479_425_5).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrigApprox {
    accuracy: TrigAccuracy,
}

impl TrigApprox {
    /// Create an approximation set with the given accuracy
    pub const fn new(accuracy: TrigAccuracy) -> Self {
        Self { accuracy }
    }

    /// Accuracy setting this instance was built with
    pub const fn accuracy(&self) -> TrigAccuracy {
        self.accuracy
    }

    /// Sine of `x` (radians)
    ///
    /// Inputs whose integer part lies outside `[-32, 32]` return `0.0`. This
    /// guards against runaway upstream state; it is not a wrapped result.
    pub fn sin(&self, x: f32) -> f32 {
        let xint = x as i32;
        if !(-SIN_INPUT_LIMIT..=SIN_INPUT_LIMIT).contains(&xint) {
            log_trace!("sin_approx: input {} outside +/-32 rad, returning 0", x);
            return 0.0;
        }

        let mut x = x;
        while x > PI {
            x -= 2.0 * PI;
        }
        while x < -PI {
            x += 2.0 * PI;
        }

        // Reflect into -90..+90 degrees
        if x > FRAC_PI_2 {
            x = FRAC_PI_2 - (x - FRAC_PI_2);
        } else if x < -FRAC_PI_2 {
            x = -FRAC_PI_2 - (FRAC_PI_2 + x);
        }

        let x2 = x * x;
        let poly = match self.accuracy {
            TrigAccuracy::Accurate => {
                let [c3, c5, c7, c9] = SIN_COEF_ACCURATE;
                c3 + x2 * (c5 + x2 * (c7 + x2 * c9))
            }
            TrigAccuracy::Fast => {
                let [c3, c5, c7] = SIN_COEF_FAST;
                c3 + x2 * (c5 + x2 * c7)
            }
        };
        x + x * x2 * poly
    }

    /// Cosine of `x` (radians), evaluated as `sin(x + π/2)`
    pub fn cos(&self, x: f32) -> f32 {
        self.sin(x + FRAC_PI_2)
    }

    /// Four-quadrant arctangent of `y / x`, see [`atan2_approx`]
    pub fn atan2(&self, y: f32, x: f32) -> f32 {
        atan2_approx(y, x)
    }

    /// Arccosine of `x`, see [`acos_approx`]
    pub fn acos(&self, x: f32) -> f32 {
        acos_approx(x)
    }
}

pub(crate) const DEFAULT_TRIG: TrigApprox = TrigApprox::new(TrigAccuracy::Accurate);

/// Sine approximation using the default ([`TrigAccuracy::Accurate`]) fit
pub fn sin_approx(x: f32) -> f32 {
    DEFAULT_TRIG.sin(x)
}

/// Cosine approximation using the default ([`TrigAccuracy::Accurate`]) fit
pub fn cos_approx(x: f32) -> f32 {
    DEFAULT_TRIG.cos(x)
}

/// Four-quadrant arctangent approximation
///
/// The ratio of the smaller to the larger magnitude (in `[0, 1]`) goes
/// through a rational fit, then the quadrant is restored from the signs of
/// `x`/`y` and from `|y| > |x|`. For `x == y == 0` the ratio is taken as 0
/// instead of dividing, which yields a result within 1e-6 of zero.
pub fn atan2_approx(y: f32, x: f32) -> f32 {
    let abs_x = fabsf(x);
    let abs_y = fabsf(y);

    let max = abs_x.max(abs_y);
    let ratio = if max != 0.0 {
        abs_x.min(abs_y) / max
    } else {
        0.0
    };

    let mut res = -((((ATAN_COEF_5 * ratio - ATAN_COEF_4) * ratio - ATAN_COEF_3) * ratio
        - ATAN_COEF_2)
        * ratio
        - ATAN_COEF_1)
        / ((ATAN_COEF_7 * ratio + ATAN_COEF_6) * ratio + 1.0);

    if abs_y > abs_x {
        res = FRAC_PI_2 - res;
    }
    if x < 0.0 {
        res = PI - res;
    }
    if y < 0.0 {
        res = -res;
    }
    res
}

/// Arccosine approximation
///
/// Inputs outside `[-1, 1]` are clamped, so `acos_approx(1.5) == acos_approx(1.0)`.
/// NaN propagates.
pub fn acos_approx(x: f32) -> f32 {
    if !(-1.0..=1.0).contains(&x) && !x.is_nan() {
        log_trace!("acos_approx: input {} clamped to [-1, 1]", x);
    }
    let x = x.clamp(-1.0, 1.0);

    let xa = fabsf(x);
    let result =
        sqrtf(1.0 - xa) * (1.570_728_8 + xa * (-0.212_114_4 + xa * (0.074_261 + (-0.018_729_3 * xa))));
    if x < 0.0 {
        PI - result
    } else {
        result
    }
}

/// Convert whole degrees to radians
pub fn degrees_to_radians(degrees: i16) -> f32 {
    const RAD: f32 = PI / 180.0;
    f32::from(degrees) * RAD
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIN_MAX_ERROR: f64 = 2.31e-6;
    const COS_MAX_ERROR: f64 = 3.0e-6;
    const ATAN2_MAX_ERROR: f64 = 7.2e-7;
    const ACOS_MAX_ERROR: f64 = 6.8e-5;

    /// Evenly spaced f32 samples over [lo, hi], endpoints included
    fn sweep(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f32> {
        (0..n).map(move |i| (lo + (hi - lo) * i as f64 / (n - 1) as f64) as f32)
    }

    fn max_error(samples: impl Iterator<Item = f32>, approx: impl Fn(f32) -> f32, exact: impl Fn(f64) -> f64) -> f64 {
        samples
            .map(|x| (f64::from(approx(x)) - exact(f64::from(x))).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_sin_accuracy_over_full_window() {
        let err = max_error(sweep(-32.0, 32.0, 64_001), sin_approx, libm::sin);
        assert!(err <= SIN_MAX_ERROR, "sin_approx max error {}", err);
    }

    #[test]
    fn test_cos_accuracy_over_full_window() {
        // cos shifts by +pi/2 before the window check, so stay below 31 rad
        let err = max_error(sweep(-32.0, 31.0, 63_001), cos_approx, libm::cos);
        assert!(err <= COS_MAX_ERROR, "cos_approx max error {}", err);
    }

    #[test]
    fn test_fast_sin_accuracy() {
        let fast = TrigApprox::new(TrigAccuracy::Fast);
        let accurate = TrigApprox::new(TrigAccuracy::Accurate);

        let fast_err = max_error(sweep(-3.14159, 3.14159, 100_001), |x| fast.sin(x), libm::sin);
        let accurate_err =
            max_error(sweep(-3.14159, 3.14159, 100_001), |x| accurate.sin(x), libm::sin);

        assert!(fast_err < 1.5e-6, "fast sin max error {}", fast_err);
        assert!(accurate_err < 2.0e-7, "accurate sin max error {}", accurate_err);
        assert!(accurate_err < fast_err);

        let fast_full = max_error(sweep(-32.0, 32.0, 64_001), |x| fast.sin(x), libm::sin);
        assert!(fast_full < 3.0e-6, "fast sin full window max error {}", fast_full);
    }

    #[test]
    fn test_sin_out_of_window_returns_zero() {
        assert_eq!(sin_approx(33.0), 0.0);
        assert_eq!(sin_approx(-33.0), 0.0);
        assert_eq!(sin_approx(1000.0), 0.0);
        assert_eq!(sin_approx(f32::INFINITY), 0.0);
        assert_eq!(sin_approx(f32::NEG_INFINITY), 0.0);

        // Integer part 32 is still accepted
        let x = 32.9_f32;
        assert!((f64::from(sin_approx(x)) - libm::sin(f64::from(x))).abs() < SIN_MAX_ERROR);
    }

    #[test]
    fn test_sin_known_values() {
        assert_eq!(sin_approx(0.0), 0.0);
        assert!((sin_approx(FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!((sin_approx(-FRAC_PI_2) + 1.0).abs() < 1e-6);
        assert!(sin_approx(PI).abs() < 1e-6);
        assert!((cos_approx(0.0) - 1.0).abs() < 1e-6);
        assert!(cos_approx(FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_sin_is_odd() {
        for x in sweep(-10.0, 10.0, 2001) {
            assert_eq!(sin_approx(-x), -sin_approx(x), "x = {}", x);
        }
    }

    #[test]
    fn test_atan2_accuracy() {
        let mut max_err = 0.0_f64;
        for i in 0..720 {
            let angle = f64::from(i) * core::f64::consts::PI / 360.0;
            for radius in [0.01, 1.0, 100.0] {
                let y = (radius * libm::sin(angle)) as f32;
                let x = (radius * libm::cos(angle)) as f32;
                let exact = libm::atan2(f64::from(y), f64::from(x));
                let mut err = (f64::from(atan2_approx(y, x)) - exact).abs();
                // +pi and -pi name the same direction
                if err > core::f64::consts::PI {
                    err = (err - 2.0 * core::f64::consts::PI).abs();
                }
                max_err = max_err.max(err);
            }
        }
        assert!(max_err <= ATAN2_MAX_ERROR, "atan2_approx max error {}", max_err);
    }

    #[test]
    fn test_atan2_quadrants() {
        const EPSILON: f32 = 1e-6;
        use core::f32::consts::FRAC_PI_4;

        assert!((atan2_approx(1.0, 1.0) - FRAC_PI_4).abs() < EPSILON);
        assert!((atan2_approx(1.0, -1.0) - 3.0 * FRAC_PI_4).abs() < EPSILON);
        assert!((atan2_approx(-1.0, -1.0) + 3.0 * FRAC_PI_4).abs() < EPSILON);
        assert!((atan2_approx(-1.0, 1.0) + FRAC_PI_4).abs() < EPSILON);
        assert!((atan2_approx(1.0, 0.0) - FRAC_PI_2).abs() < EPSILON);
        assert!((atan2_approx(-1.0, 0.0) + FRAC_PI_2).abs() < EPSILON);
        assert!((atan2_approx(0.0, -1.0) - PI).abs() < EPSILON);
        assert!(atan2_approx(0.0, 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_atan2_origin_is_finite() {
        let res = atan2_approx(0.0, 0.0);
        assert!(res.is_finite());
        assert!(res.abs() < 1e-6);
    }

    #[test]
    fn test_acos_accuracy() {
        let err = max_error(sweep(-1.0, 1.0, 20_001), acos_approx, libm::acos);
        assert!(err <= ACOS_MAX_ERROR, "acos_approx max error {}", err);
    }

    #[test]
    fn test_acos_clamps_out_of_range() {
        assert_eq!(acos_approx(1.5), acos_approx(1.0));
        assert_eq!(acos_approx(-7.0), acos_approx(-1.0));
        assert!(acos_approx(2.0).abs() < 1e-6);
        assert!((acos_approx(-2.0) - PI).abs() < 1e-6);
        assert!(acos_approx(f32::NAN).is_nan());
    }

    #[test]
    fn test_trig_approx_defaults_to_accurate() {
        assert_eq!(TrigAccuracy::default(), TrigAccuracy::Accurate);
        assert_eq!(TrigApprox::default().accuracy(), TrigAccuracy::Accurate);
        assert_eq!(TrigApprox::default().sin(0.7), sin_approx(0.7));
    }

    #[test]
    fn test_atan2_acos_ignore_accuracy() {
        let fast = TrigApprox::new(TrigAccuracy::Fast);
        assert_eq!(fast.atan2(0.3, -0.8), atan2_approx(0.3, -0.8));
        assert_eq!(fast.acos(0.25), acos_approx(0.25));
    }

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(degrees_to_radians(0), 0.0);
        assert!((degrees_to_radians(180) - PI).abs() < 1e-6);
        assert!((degrees_to_radians(-90) + FRAC_PI_2).abs() < 1e-6);
    }
}
