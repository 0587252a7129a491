// SPDX-License-Identifier: MPL-2.0
//! Geometry reported by the two layout probes of a pull-to-refresh container.
//!
//! One probe scrolls with the content (`Moving`), the other is anchored to the
//! viewport (`Fixed`). The pull offset is the vertical distance between them.

/// Which probe produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeRole {
    /// Probe attached to the top of the scrolling content.
    Moving,
    /// Probe anchored to the top of the viewport.
    Fixed,
}

/// Vertical bounds of a probe, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeBounds {
    pub top_y: f32,
    pub height: f32,
}

impl ProbeBounds {
    /// The zero rect used whenever a probe is missing or malformed.
    pub const ZERO: Self = Self {
        top_y: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub fn new(top_y: f32, height: f32) -> Self {
        Self { top_y, height }
    }

    /// Replaces malformed bounds (NaN, infinities, negative height) with [`Self::ZERO`].
    #[must_use]
    pub fn normalized(self) -> Self {
        let valid = self.top_y.is_finite() && self.height.is_finite() && self.height >= 0.0;
        if valid {
            self
        } else {
            Self::ZERO
        }
    }
}

/// A single geometry fact emitted by a probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySample {
    pub role: ProbeRole,
    pub bounds: ProbeBounds,
}

impl GeometrySample {
    #[must_use]
    pub fn moving(top_y: f32, height: f32) -> Self {
        Self {
            role: ProbeRole::Moving,
            bounds: ProbeBounds::new(top_y, height),
        }
    }

    #[must_use]
    pub fn fixed(top_y: f32, height: f32) -> Self {
        Self {
            role: ProbeRole::Fixed,
            bounds: ProbeBounds::new(top_y, height),
        }
    }
}

/// All samples produced by one layout pass.
///
/// `pass` increases monotonically per producer; the tracker uses it to reject
/// batches that arrive after a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryBatch {
    pub pass: u64,
    pub samples: Vec<GeometrySample>,
}

impl GeometryBatch {
    #[must_use]
    pub fn new(pass: u64, samples: Vec<GeometrySample>) -> Self {
        Self { pass, samples }
    }
}

/// Returns the bounds of the first sample with `role`, or the zero rect.
///
/// Later samples of the same role are ignored even when the first one is
/// malformed.
#[must_use]
pub fn first_bounds(samples: &[GeometrySample], role: ProbeRole) -> ProbeBounds {
    samples
        .iter()
        .find(|sample| sample.role == role)
        .map_or(ProbeBounds::ZERO, |sample| sample.bounds.normalized())
}

/// Pull offset for a batch: moving top minus fixed top.
#[must_use]
pub fn compute_offset(samples: &[GeometrySample]) -> f32 {
    let moving = first_bounds(samples, ProbeRole::Moving);
    let fixed = first_bounds(samples, ProbeRole::Fixed);
    let offset = moving.top_y - fixed.top_y;

    if offset.is_finite() {
        offset
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn offset_is_moving_minus_fixed() {
        let samples = [
            GeometrySample::fixed(40.0, 0.0),
            GeometrySample::moving(115.0, 0.0),
        ];
        assert_abs_diff_eq!(compute_offset(&samples), 75.0);
    }

    #[test]
    fn missing_roles_default_to_zero_rect() {
        assert_abs_diff_eq!(compute_offset(&[]), 0.0);
        assert_abs_diff_eq!(compute_offset(&[GeometrySample::moving(30.0, 0.0)]), 30.0);
        assert_abs_diff_eq!(compute_offset(&[GeometrySample::fixed(30.0, 0.0)]), -30.0);
    }

    #[test]
    fn first_sample_per_role_wins() {
        let samples = [
            GeometrySample::moving(10.0, 0.0),
            GeometrySample::fixed(0.0, 0.0),
            GeometrySample::moving(500.0, 0.0),
            GeometrySample::fixed(-200.0, 0.0),
        ];
        assert_abs_diff_eq!(compute_offset(&samples), 10.0);
    }

    #[test]
    fn malformed_bounds_become_zero_rect() {
        assert_eq!(ProbeBounds::new(f32::NAN, 1.0).normalized(), ProbeBounds::ZERO);
        assert_eq!(ProbeBounds::new(12.0, -4.0).normalized(), ProbeBounds::ZERO);
        assert_eq!(
            ProbeBounds::new(f32::INFINITY, 0.0).normalized(),
            ProbeBounds::ZERO
        );
        assert_eq!(
            ProbeBounds::new(12.0, 4.0).normalized(),
            ProbeBounds::new(12.0, 4.0)
        );
    }

    #[test]
    fn malformed_first_sample_is_not_skipped() {
        let samples = [
            GeometrySample::moving(f32::NAN, 0.0),
            GeometrySample::moving(90.0, 0.0),
            GeometrySample::fixed(10.0, 0.0),
        ];
        assert_abs_diff_eq!(compute_offset(&samples), -10.0);
    }

    #[test]
    fn sample_order_does_not_matter_across_roles() {
        let a = [
            GeometrySample::moving(64.0, 20.0),
            GeometrySample::fixed(4.0, 0.0),
        ];
        let b = [
            GeometrySample::fixed(4.0, 0.0),
            GeometrySample::moving(64.0, 20.0),
        ];
        assert_abs_diff_eq!(compute_offset(&a), compute_offset(&b));
    }
}
