// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::pull_to_refresh;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Pull(pull_to_refresh::Message),
    /// Refresh requested from the keyboard (F5 or Ctrl/Cmd+R).
    RefreshShortcut,
    /// The simulated fetch finished with the index of the cat to show.
    RefreshCompleted(usize),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional pull threshold in pixels; overrides `settings.toml`.
    pub threshold: Option<f32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PULL_REFRESH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}
