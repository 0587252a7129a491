// SPDX-License-Identifier: MPL-2.0
//! Pull threshold domain type.

use crate::config::DEFAULT_THRESHOLD_PX;

/// Fraction of the threshold at which the arrow starts turning.
pub const ROTATION_START_RATIO: f32 = 0.6;

/// Pixel distance at which a pull commits to a refresh.
///
/// The value is always finite and positive. Any such value is kept as given;
/// range limits for user settings live in [`crate::config::user_threshold`].
///
/// # Example
///
/// ```
/// use pull_refresh::refresh::Threshold;
///
/// let threshold = Threshold::new(70.0);
/// assert_eq!(threshold.value(), 70.0);
///
/// assert_eq!(Threshold::new(1.0).value(), 1.0);
///
/// // Zero, negative and non-finite values fall back to the default
/// assert_eq!(Threshold::new(0.0), Threshold::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f32);

impl Threshold {
    /// Creates a threshold of `px` pixels.
    ///
    /// Input that is not a finite positive number falls back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() && px > 0.0 {
            Self(px)
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Offset at which the indicator arrow starts rotating.
    #[must_use]
    pub fn rotation_start(self) -> f32 {
        self.0 * ROTATION_START_RATIO
    }

    /// Length of the pull range over which the arrow sweeps to 180°.
    #[must_use]
    pub fn rotation_span(self) -> f32 {
        self.0 - self.rotation_start()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_keeps_any_positive_value() {
        for px in [0.5, 10.0, 20.0, 80.0, 400.0, 500.0, 10_000.0] {
            assert_abs_diff_eq!(Threshold::new(px).value(), px);
        }
    }

    #[test]
    fn non_positive_falls_back_to_default() {
        assert_eq!(Threshold::new(0.0), Threshold::default());
        assert_eq!(Threshold::new(-50.0), Threshold::default());
        assert_eq!(Threshold::new(f32::NEG_INFINITY), Threshold::default());
    }

    #[test]
    fn non_finite_falls_back_to_default() {
        assert_eq!(Threshold::new(f32::NAN), Threshold::default());
        assert_eq!(Threshold::new(f32::INFINITY), Threshold::default());
    }

    #[test]
    fn default_is_eighty_pixels() {
        assert_abs_diff_eq!(Threshold::default().value(), 80.0);
    }

    #[test]
    fn rotation_range_covers_last_forty_percent() {
        let threshold = Threshold::new(100.0);
        assert_abs_diff_eq!(threshold.rotation_start(), 60.0, epsilon = 1e-4);
        assert_abs_diff_eq!(threshold.rotation_span(), 40.0, epsilon = 1e-4);
        assert_abs_diff_eq!(
            threshold.rotation_start() + threshold.rotation_span(),
            threshold.value(),
            epsilon = 1e-4
        );
    }
}
