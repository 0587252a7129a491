// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::pull_to_refresh;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Animation ticks for the pull container, only while it moves.
pub fn create_pull_subscription(pull: &pull_to_refresh::State) -> Subscription<Message> {
    pull.subscription().map(Message::Pull)
}

/// F5 and Ctrl/Cmd+R start a refresh without pulling.
pub fn create_shortcut_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
                if is_refresh_shortcut(&key, modifiers) =>
            {
                Some(Message::RefreshShortcut)
            }
            _ => None,
        }
    })
}

fn is_refresh_shortcut(key: &Key, modifiers: keyboard::Modifiers) -> bool {
    match key.as_ref() {
        Key::Named(Named::F5) => true,
        Key::Character("r") => modifiers.command(),
        _ => false,
    }
}
