//! Quick median filters
//!
//! Fixed compare-and-swap networks (after N. Devillard, "Fast median search",
//! 1998) that move the median of 3, 5, 7 or 9 samples to the middle slot
//! without sorting the rest. Each network is a static comparator list; the
//! loops below unroll to straight-line code.
//!
//! The caller's array is copied and never modified. Works for any
//! `PartialOrd + Copy` sample type (`i32` baro/sonar readings, `f32` gyro
//! samples). A NaN sample compares false everywhere and stays in place, so
//! the result is then unspecified.

/// Comparator pairs `(a, b)`: swap when `p[a] > p[b]`
type Network<const M: usize> = [(usize, usize); M];

const NETWORK_3: Network<3> = [(0, 1), (1, 2), (0, 1)];

const NETWORK_5: Network<7> = [(0, 1), (3, 4), (0, 3), (1, 4), (1, 2), (2, 3), (1, 2)];

const NETWORK_7: Network<13> = [
    (0, 5),
    (0, 3),
    (1, 6),
    (2, 4),
    (0, 1),
    (3, 5),
    (2, 6),
    (2, 3),
    (3, 6),
    (4, 5),
    (1, 4),
    (1, 3),
    (3, 4),
];

const NETWORK_9: Network<19> = [
    (1, 2),
    (4, 5),
    (7, 8),
    (0, 1),
    (3, 4),
    (6, 7),
    (1, 2),
    (4, 5),
    (7, 8),
    (0, 3),
    (5, 8),
    (4, 7),
    (3, 6),
    (1, 4),
    (2, 5),
    (4, 7),
    (4, 2),
    (6, 4),
    (4, 2),
];

#[inline(always)]
fn run_network<T: PartialOrd + Copy, const N: usize, const M: usize>(
    samples: &[T; N],
    network: &Network<M>,
) -> [T; N] {
    let mut p = *samples;
    for &(a, b) in network {
        if p[a] > p[b] {
            p.swap(a, b);
        }
    }
    p
}

/// Median of 3 samples
pub fn median3<T: PartialOrd + Copy>(samples: &[T; 3]) -> T {
    run_network(samples, &NETWORK_3)[1]
}

/// Median of 5 samples
pub fn median5<T: PartialOrd + Copy>(samples: &[T; 5]) -> T {
    run_network(samples, &NETWORK_5)[2]
}

/// Median of 7 samples
pub fn median7<T: PartialOrd + Copy>(samples: &[T; 7]) -> T {
    run_network(samples, &NETWORK_7)[3]
}

/// Median of 9 samples
pub fn median9<T: PartialOrd + Copy>(samples: &[T; 9]) -> T {
    run_network(samples, &NETWORK_9)[4]
}
