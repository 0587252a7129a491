// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`pull_to_refresh`] - Scroll container with a pull indicator
//! - [`cat_card`] - Demo content rendered inside the container
//! - [`widgets`] - Custom Iced widgets (pull surface, spinner, arrow)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod cat_card;
pub mod design_tokens;
pub mod pull_to_refresh;
pub mod theming;
pub mod widgets;
