// SPDX-License-Identifier: MPL-2.0
//! Composer message/event types re-exported by the facade.

use crate::domain::card::{FontColor, FontFamily, FontSize};
use crate::domain::error::ComposerError;
use iced::widget::text_editor;
use std::time::Instant;

/// Messages from the form controls.
#[derive(Debug, Clone)]
pub enum ControlMessage {
    /// Keystroke, paste or cursor move in the multiline message editor.
    TextEdited(text_editor::Action),
    FontSizeSelected(FontSize),
    IncreaseFontSize,
    DecreaseFontSize,
    BoldSelected(bool),
    ItalicSelected(bool),
    /// Keyboard shortcut (Ctrl+B)
    ToggleBold,
    /// Keyboard shortcut (Ctrl+I)
    ToggleItalic,
    FontColorSelected(FontColor),
    FontFamilySelected(FontFamily),
    TemplateSelected(usize),
    PickImage,
    AddHeart,
}

/// Editor actions replacing the whole message with `text`.
#[cfg(test)]
pub(crate) fn replace_text(text: &str) -> [ControlMessage; 2] {
    use std::sync::Arc;

    [
        ControlMessage::TextEdited(text_editor::Action::SelectAll),
        ControlMessage::TextEdited(text_editor::Action::Edit(text_editor::Edit::Paste(
            Arc::new(text.to_string()),
        ))),
    ]
}

/// Continuous gesture updates from the photo layer.
///
/// Values are absolute for the running gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureMessage {
    DragMove { dx: f32, dy: f32 },
    PinchUpdate { scale: f32 },
}

/// Messages handled by the composer screen.
#[derive(Debug, Clone)]
pub enum Message {
    Control(ControlMessage),
    Gesture(GestureMessage),
    /// Frame tick while the photo spring is moving.
    AnimationFrame(Instant),
}

impl From<ControlMessage> for Message {
    fn from(message: ControlMessage) -> Self {
        Message::Control(message)
    }
}

impl From<GestureMessage> for Message {
    fn from(message: GestureMessage) -> Self {
        Message::Gesture(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The user asked to attach a photo.
    PickImageRequested,
    /// A control sent a value the card refuses. Logged, never shown.
    Rejected(ComposerError),
}
