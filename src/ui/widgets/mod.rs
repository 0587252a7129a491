// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod arrow_glyph;
pub mod pull_surface;

pub use animated_spinner::AnimatedSpinner;
pub use arrow_glyph::ArrowGlyph;
pub use pull_surface::{pull_surface, PullGesture, PullSurface};
