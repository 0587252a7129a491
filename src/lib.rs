// SPDX-License-Identifier: MPL-2.0
//! `pull_refresh` is a pull-to-refresh scroll container for the Iced GUI
//! framework, with a small cat-of-the-day demo application.
//!
//! The toolkit-independent state machine lives in [`refresh`]; the Iced
//! component is [`ui::pull_to_refresh`].

pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod i18n;
pub mod refresh;
pub mod ui;

#[cfg(test)]
mod test_utils;
