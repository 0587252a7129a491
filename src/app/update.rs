// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::demo::{self, CatFeed};
use crate::ui::pull_to_refresh::{self, Effect};
use chrono::Local;
use iced::Task;
use std::time::Duration;

/// Mutable application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub pull: &'a mut pull_to_refresh::State,
    pub feed: &'a mut CatFeed,
    pub refresh_duration: Duration,
}

pub fn handle_pull_message(
    ctx: &mut UpdateContext<'_>,
    message: pull_to_refresh::Message,
) -> Task<Message> {
    let (effect, task) = ctx.pull.update(message);
    let task = task.map(Message::Pull);

    match effect {
        Effect::None => task,
        Effect::RefreshRequested => Task::batch([task, fetch_next_cat(ctx)]),
    }
}

/// Keyboard refresh: drives the binding from the owner side.
pub fn handle_refresh_shortcut(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.pull.is_refreshing() {
        return Task::none();
    }
    let task = ctx.pull.begin_refresh().map(Message::Pull);
    Task::batch([task, fetch_next_cat(ctx)])
}

pub fn handle_refresh_completed(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    ctx.feed.show(index, Local::now());
    log::info!("showing {} (refresh #{})", ctx.feed.current().name, ctx.feed.refresh_count());
    ctx.pull.finish_refresh().map(Message::Pull)
}

fn fetch_next_cat(ctx: &UpdateContext<'_>) -> Task<Message> {
    let duration = ctx.refresh_duration;
    let current = ctx.feed.index();
    Task::perform(demo::refresh(duration, current), Message::RefreshCompleted)
}
