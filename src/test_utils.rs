// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Pixel offsets and angles go through `f32` arithmetic, so tests compare
//! them with the `approx` macros instead of `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for pixel offsets.
pub const PX_EPSILON: f32 = 1e-4;

/// Tolerance for rotation angles in degrees.
pub const DEGREES_EPSILON: f32 = 1e-3;

/// Asserts two offset sequences match element by element within [`PX_EPSILON`].
#[track_caller]
pub fn assert_offsets_eq(actual: &[f32], expected: &[f32]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "offset count differs: {actual:?} vs {expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = PX_EPSILON);
    }
}
