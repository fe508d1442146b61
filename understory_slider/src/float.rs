// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers that resolve to `std` or `libm` depending on features.

/// Largest number of decimal places carried from `step` into emitted values.
const MAX_PRECISION: u32 = 10;

#[cfg(feature = "std")]
#[inline]
pub(crate) fn round(x: f64) -> f64 {
    x.round()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn round(x: f64) -> f64 {
    libm::round(x)
}

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

fn pow10(exp: u32) -> f64 {
    let mut out = 1.0;
    for _ in 0..exp {
        out *= 10.0;
    }
    out
}

/// Number of decimal places needed to represent `step`.
///
/// `None` when `step` is not finite or needs more than the supported number
/// of places; callers then leave values unrounded.
pub(crate) fn precision_of(step: f64) -> Option<u32> {
    if !step.is_finite() {
        return None;
    }
    (0..=MAX_PRECISION).find(|&p| {
        let scaled = step * pow10(p);
        abs(scaled - round(scaled)) <= 1e-9 * abs(scaled)
    })
}

/// Round `x` to `precision` decimal places.
pub(crate) fn round_to(x: f64, precision: u32) -> f64 {
    let scale = pow10(precision);
    round(x * scale) / scale
}
