//! Running mean/variance accumulator
//!
//! Single-pass Welford update, numerically stable over long runs (unlike the
//! naive sum / sum-of-squares form). Used for gyro calibration and sensor
//! noise checks while the vehicle is stationary.
//!
//! Results depend on push order for non-trivial inputs; tests that need
//! bit-exact values must push in a fixed order.

use libm::sqrtf;

/// Incremental mean/variance state
///
/// Lifecycle: [`RunningStats::new`] (or [`RunningStats::reset`]) → any number
/// of [`RunningStats::push`] → queries, repeatable. One accumulator per
/// producer; `push` takes `&mut self` so sharing needs external locking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunningStats {
    n: u32,
    old_mean: f32,
    new_mean: f32,
    old_s: f32,
    new_s: f32,
}

impl RunningStats {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            n: 0,
            old_mean: 0.0,
            new_mean: 0.0,
            old_s: 0.0,
            new_s: 0.0,
        }
    }

    /// Discard all samples
    pub fn reset(&mut self) {
        self.n = 0;
    }

    /// Add one sample
    pub fn push(&mut self, x: f32) {
        self.n = self.n.saturating_add(1);

        if self.n == 1 {
            self.old_mean = x;
            self.new_mean = x;
            self.old_s = 0.0;
            self.new_s = 0.0;
        } else {
            self.new_mean = self.old_mean + (x - self.old_mean) / self.n as f32;
            self.new_s = self.old_s + (x - self.old_mean) * (x - self.new_mean);

            self.old_mean = self.new_mean;
            self.old_s = self.new_s;
        }
    }

    /// Number of samples pushed since the last reset
    pub fn count(&self) -> u32 {
        self.n
    }

    /// Running mean, 0 before the first sample
    pub fn mean(&self) -> f32 {
        if self.n > 0 {
            self.new_mean
        } else {
            0.0
        }
    }

    /// Sample (Bessel-corrected) variance, 0 for fewer than two samples
    pub fn variance(&self) -> f32 {
        if self.n > 1 {
            self.new_s / (self.n - 1) as f32
        } else {
            0.0
        }
    }

    pub fn standard_deviation(&self) -> f32 {
        sqrtf(self.variance())
    }
}
