// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::composer::{self, ControlMessage};
use crate::ui::design_tokens::motion;
use iced::keyboard::{self, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes the Ctrl+B / Ctrl+I shortcuts to the composer.
///
/// Events already captured by a widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return None;
        };

        shortcut(&key, modifiers).map(|control| Message::Composer(control.into()))
    })
}

/// Maps a key press to a composer control.
pub fn shortcut(key: &Key, modifiers: keyboard::Modifiers) -> Option<ControlMessage> {
    if !modifiers.command() {
        return None;
    }

    let Key::Character(c) = key else {
        return None;
    };

    match c.as_str() {
        "b" | "B" => Some(ControlMessage::ToggleBold),
        "i" | "I" => Some(ControlMessage::ToggleItalic),
        _ => None,
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Frame ticks for the photo spring, only while it is moving.
pub fn create_animation_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(motion::FRAME_MILLIS))
            .map(|now| Message::Composer(composer::Message::AnimationFrame(now)))
    } else {
        Subscription::none()
    }
}
