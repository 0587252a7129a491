// SPDX-License-Identifier: MPL-2.0
//! Indicator arrow rotation derived from the pull offset.

use super::Threshold;

/// Rotation of the pull indicator arrow, in degrees within `[0, 180]`.
///
/// # Example
///
/// ```
/// use pull_refresh::refresh::{IndicatorRotation, Threshold};
///
/// let threshold = Threshold::new(100.0);
/// assert_eq!(IndicatorRotation::for_offset(30.0, threshold).degrees(), 0.0);
/// assert!((IndicatorRotation::for_offset(80.0, threshold).degrees() - 90.0).abs() < 1e-3);
/// assert_eq!(IndicatorRotation::for_offset(250.0, threshold).degrees(), 180.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct IndicatorRotation(f32);

impl IndicatorRotation {
    pub const ZERO: Self = Self(0.0);
    pub const MAX_DEGREES: f32 = 180.0;

    /// Creates a rotation, clamping to `[0, 180]`. NaN maps to zero.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        if degrees.is_nan() {
            return Self::ZERO;
        }
        Self(degrees.clamp(0.0, Self::MAX_DEGREES))
    }

    /// Rotation for a pull offset: zero below `0.6T`, then a linear sweep
    /// reaching 180° at `T` and saturating beyond.
    #[must_use]
    pub fn for_offset(offset: f32, threshold: Threshold) -> Self {
        let start = threshold.rotation_start();
        let span = threshold.rotation_span();

        if !offset.is_finite() || offset < start || span <= 0.0 {
            return Self::ZERO;
        }

        let progress = (offset - start).clamp(0.0, span) / span;
        Self::from_degrees(Self::MAX_DEGREES * progress)
    }

    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }

    /// True once the arrow points fully upward.
    #[must_use]
    pub fn is_flipped(self) -> bool {
        self.0 >= Self::MAX_DEGREES
    }
}
