// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. A
//! directory passed with `--i18n-dir` can add locales or replace embedded
//! ones at startup.
//!
//! # Locale resolution
//!
//! 1. `--lang` CLI argument
//! 2. `[general] language` in `settings.toml`
//! 3. Operating system locale
//! 4. `en-US`

pub mod fluent;

pub use fluent::I18n;
