// SPDX-License-Identifier: MPL-2.0
//! Application root state for the cat-of-the-day demo.
//!
//! The `App` struct wires the pull-to-refresh container to the demo feed and
//! turns refresh requests into simulated fetches.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::demo::CatFeed;
use crate::i18n::fluent::I18n;
use crate::ui::pull_to_refresh;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    pull: pull_to_refresh::State,
    feed: CatFeed,
    theme_mode: ThemeMode,
    refresh_duration: Duration,
    /// i18n key of a warning raised while loading settings.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("threshold", &self.pull.pull().threshold())
            .field("refreshing", &self.pull.is_refreshing())
            .field("cat", &self.feed.current().name)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires an `Fn` boot closure; each call starts from the same flags.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            pull: pull_to_refresh::State::default(),
            feed: CatFeed::new(),
            theme_mode: ThemeMode::System,
            refresh_duration: Duration::from_millis(config::DEFAULT_SIMULATED_DURATION_MS),
            startup_warning: None,
        }
    }
}

impl App {
    /// Initializes application state from the settings file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let threshold = flags
            .threshold
            .map_or_else(|| config.refresh.threshold(), config::user_threshold);
        log::info!(
            "starting with threshold {} px, locale {}",
            threshold.value(),
            i18n.current_locale()
        );

        let app = App {
            i18n,
            pull: pull_to_refresh::State::new(threshold),
            theme_mode: config.general.theme_mode,
            refresh_duration: config.refresh.simulated_duration(),
            startup_warning: config_warning,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.pull.is_refreshing() {
            format!("{} - {app_name}", self.i18n.tr("refreshing-label"))
        } else {
            format!("{} - {app_name}", self.feed.current().name)
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_pull_subscription(&self.pull),
            subscription::create_shortcut_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            pull: &mut self.pull,
            feed: &mut self.feed,
            refresh_duration: self.refresh_duration,
        };

        match message {
            Message::Pull(pull_message) => update::handle_pull_message(&mut ctx, pull_message),
            Message::RefreshShortcut => update::handle_refresh_shortcut(&mut ctx),
            Message::RefreshCompleted(index) => update::handle_refresh_completed(&mut ctx, index),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            pull: &self.pull,
            feed: &self.feed,
            colors: self.theme_mode.colors(),
            warning: self.startup_warning.as_deref(),
        })
    }
}
