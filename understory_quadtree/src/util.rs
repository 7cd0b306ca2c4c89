// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Rounds to three decimal places, with halves rounded towards +∞.
///
/// Used to keep repeated rotations from accumulating floating-point drift.
#[inline]
pub(crate) fn round_milli(value: f64) -> f64 {
    (value * 1000.0 + 0.5).floor() / 1000.0
}
