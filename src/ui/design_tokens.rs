// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the pull indicator and the demo screen.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Track and overlay alpha levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Indicator glyphs and card dimensions
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//!
//! ```
//! use pull_refresh::ui::design_tokens::{opacity, palette, sizing};
//! use iced::Color;
//!
//! let track = Color { a: opacity::TRACK, ..palette::ACCENT_500 };
//! assert!(sizing::INDICATOR_GLYPH < pull_refresh::config::MIN_THRESHOLD_PX * 2.0);
//! # let _ = track;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.17);
    pub const GRAY_600: Color = Color::from_rgb(0.42, 0.42, 0.44);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.62);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.93, 0.92);

    // Accent (warm orange, tabby coat)
    pub const ACCENT_400: Color = Color::from_rgb(0.98, 0.66, 0.35);
    pub const ACCENT_500: Color = Color::from_rgb(0.93, 0.55, 0.22);
    pub const ACCENT_600: Color = Color::from_rgb(0.8, 0.44, 0.14);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Spinner background ring.
    pub const TRACK: f32 = 0.25;
    /// Arrow before it starts turning.
    pub const ARROW_IDLE: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Side of the square the spinner and arrow are drawn in.
    pub const INDICATOR_GLYPH: f32 = 32.0;
    /// Stroke width of indicator glyphs.
    pub const INDICATOR_STROKE: f32 = 3.0;

    /// Placeholder portrait on the demo card.
    pub const CAT_PORTRAIT: f32 = 160.0;
    /// Maximum width of the demo card.
    pub const CARD_MAX_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Screen heading.
    pub const TITLE_LG: f32 = 28.0;
    /// Cat name.
    pub const TITLE_MD: f32 = 20.0;
    /// Cat origin.
    pub const HEADLINE: f32 = 16.0;
    /// Fact text.
    pub const BODY: f32 = 14.0;
    /// Hints and timestamps.
    pub const CAPTION: f32 = 12.0;
    /// Portrait glyph.
    pub const PORTRAIT_GLYPH: f32 = 96.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRACK > 0.0 && opacity::TRACK < opacity::ARROW_IDLE);
    assert!(opacity::ARROW_IDLE < opacity::OPAQUE);

    // The glyph must fit in the smallest allowed indicator band.
    assert!(sizing::INDICATOR_GLYPH <= crate::config::MIN_THRESHOLD_PX * 2.0);
    assert!(sizing::INDICATOR_STROKE * 2.0 < sizing::INDICATOR_GLYPH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }
}
