// SPDX-License-Identifier: MPL-2.0
//! What the owning view draws for a given pull state.
//!
//! The indicator lives in a band exactly one threshold tall, sitting just
//! above the moving content. Pulling reveals it; only a frozen refresh pins it
//! (and the content below it) in view.

use super::{IndicatorRotation, PullState};

/// Glyph shown inside the indicator band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorGlyph {
    Spinner,
    Arrow(IndicatorRotation),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorLayout {
    pub glyph: IndicatorGlyph,
    /// Band offset relative to its resting place: `0` when pinned, `-threshold` otherwise.
    pub offset: f32,
    /// Extra downward shift applied to the content: `threshold` when pinned, `0` otherwise.
    pub content_shift: f32,
    pub band_height: f32,
}

impl IndicatorLayout {
    #[must_use]
    pub fn resolve(state: &PullState) -> Self {
        let threshold = state.threshold().value();
        let pinned = state.is_refreshing() && state.is_frozen();

        let glyph = if state.is_refreshing() {
            IndicatorGlyph::Spinner
        } else {
            IndicatorGlyph::Arrow(state.rotation())
        };

        Self {
            glyph,
            offset: if pinned { 0.0 } else { -threshold },
            content_shift: if pinned { threshold } else { 0.0 },
            band_height: threshold,
        }
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.offset == 0.0
    }

    /// Pixels of the band on screen when the content is pulled down by `pull`.
    #[must_use]
    pub fn visible_band(&self, pull: f32) -> f32 {
        let pull = if pull.is_finite() { pull } else { 0.0 };
        (self.band_height + self.offset + pull.max(0.0)).clamp(0.0, self.band_height)
    }

    /// Top of the content when it is pulled down by `pull`.
    #[must_use]
    pub fn content_top(&self, pull: f32) -> f32 {
        if self.is_pinned() {
            self.content_shift
        } else if pull.is_finite() {
            pull.max(0.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::Threshold;
    use crate::test_utils::assert_abs_diff_eq;

    fn pinned_state() -> PullState {
        let mut state = PullState::new(Threshold::new(80.0));
        state.apply_offset(90.0);
        state.apply_offset(60.0);
        state
    }

    #[test]
    fn idle_band_is_hidden_above_content() {
        let state = PullState::new(Threshold::new(80.0));
        let layout = IndicatorLayout::resolve(&state);

        assert_eq!(layout.glyph, IndicatorGlyph::Arrow(IndicatorRotation::ZERO));
        assert_abs_diff_eq!(layout.offset, -80.0);
        assert_abs_diff_eq!(layout.content_shift, 0.0);
        assert!(!layout.is_pinned());
        assert_abs_diff_eq!(layout.visible_band(0.0), 0.0);
    }

    #[test]
    fn arrow_follows_rotation_while_pulling() {
        let mut state = PullState::new(Threshold::new(80.0));
        state.apply_offset(72.0);
        let layout = IndicatorLayout::resolve(&state);

        assert_eq!(layout.glyph, IndicatorGlyph::Arrow(state.rotation()));
        assert_abs_diff_eq!(layout.visible_band(72.0), 72.0);
        assert_abs_diff_eq!(layout.visible_band(200.0), 80.0);
        assert_abs_diff_eq!(layout.content_top(72.0), 72.0);
    }

    #[test]
    fn refreshing_but_not_frozen_stays_hidden() {
        let mut state = PullState::new(Threshold::new(80.0));
        state.apply_offset(90.0);
        let layout = IndicatorLayout::resolve(&state);

        assert_eq!(layout.glyph, IndicatorGlyph::Spinner);
        assert_abs_diff_eq!(layout.offset, -80.0);
        assert_abs_diff_eq!(layout.content_shift, 0.0);
    }

    #[test]
    fn frozen_refresh_pins_band_and_content() {
        let state = pinned_state();
        let layout = IndicatorLayout::resolve(&state);

        assert_eq!(layout.glyph, IndicatorGlyph::Spinner);
        assert!(layout.is_pinned());
        assert_abs_diff_eq!(layout.content_shift, 80.0);
        assert_abs_diff_eq!(layout.visible_band(0.0), 80.0);
        assert_abs_diff_eq!(layout.content_top(10.0), 80.0);
    }

    #[test]
    fn negative_or_nan_pull_shows_nothing() {
        let state = PullState::new(Threshold::new(80.0));
        let layout = IndicatorLayout::resolve(&state);
        assert_abs_diff_eq!(layout.visible_band(-30.0), 0.0);
        assert_abs_diff_eq!(layout.visible_band(f32::NAN), 0.0);
        assert_abs_diff_eq!(layout.content_top(f32::NAN), 0.0);
    }
}
