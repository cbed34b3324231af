// SPDX-License-Identifier: MPL-2.0
//! Card composer screen.
//!
//! The screen follows the "state down, messages up" pattern: [`State::update`]
//! applies a [`Message`] to the card and returns an [`Event`] when the parent
//! application has to perform a side effect (opening the picker, logging a
//! rejected value).
//!
//! The card itself lives in [`CardState`]; this module only adds what the
//! screen needs to draw it: rendered templates, decoded photo pixels and the
//! spring that smooths the photo transform.

use crate::application::composer as use_case;
use crate::domain::card::{
    CardDefaults, CardState, Decoration, GestureSink, PickOutcome, ResourceHandle,
};
use crate::domain::error::ComposerError;
use crate::domain::permission::{PermissionState, PermissionStatus};
use crate::media::{ImageData, TemplateSet};
use crate::ui::design_tokens::motion;
use crate::ui::state::PhotoSpring;
use iced::widget::text_editor;
use iced::Element;
use std::fmt;
use std::time::{Duration, Instant};

pub mod gesture;
mod messages;
mod view;

#[cfg(test)]
pub(crate) use messages::replace_text;
pub use messages::{ControlMessage, Event, GestureMessage, Message};
pub use view::ViewContext;

/// Longest frame gap fed to the spring, so a stalled window does not teleport
/// the photo.
const MAX_FRAME_GAP: Duration = Duration::from_millis(100);

/// Local UI state for the composer screen.
pub struct State {
    card: CardState,
    /// Editor buffer of the message; mirrors `card.text()`.
    editor: text_editor::Content,
    permission: PermissionState,
    templates: Option<TemplateSet>,
    /// Pixels of `card.image()`, once decoded.
    photo: Option<ImageData>,
    spring: PhotoSpring,
    last_frame: Option<Instant>,
}

impl State {
    /// Creates the screen for a fresh card.
    #[must_use]
    pub fn new(defaults: CardDefaults) -> Self {
        let card = CardState::new(defaults);
        let spring = PhotoSpring::new(card.image_position(), card.scale());

        Self {
            editor: text_editor::Content::with_text(card.text()),
            card,
            permission: PermissionState::default(),
            templates: None,
            photo: None,
            spring,
            last_frame: None,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Control(msg) => self.handle_control(msg),
            Message::Gesture(msg) => {
                self.handle_gesture(msg);
                Event::None
            }
            Message::AnimationFrame(now) => {
                self.advance_animation(now);
                Event::None
            }
        }
    }

    fn handle_control(&mut self, message: ControlMessage) -> Event {
        match message {
            ControlMessage::TextEdited(action) => {
                let is_edit = action.is_edit();
                self.editor.perform(action);
                if is_edit {
                    self.card.set_text(self.editor.text());
                }
            }
            ControlMessage::FontSizeSelected(size) => self.card.set_font_size(size),
            ControlMessage::IncreaseFontSize => self.card.increase_font_size(),
            ControlMessage::DecreaseFontSize => self.card.decrease_font_size(),
            ControlMessage::BoldSelected(bold) => self.card.set_bold(bold),
            ControlMessage::ItalicSelected(italic) => self.card.set_italic(italic),
            ControlMessage::ToggleBold => self.card.toggle_bold(),
            ControlMessage::ToggleItalic => self.card.toggle_italic(),
            ControlMessage::FontColorSelected(color) => self.card.set_font_color(color),
            ControlMessage::FontFamilySelected(family) => self.card.set_font_family(family),
            ControlMessage::TemplateSelected(index) => {
                if let Err(err) = self.card.select_template(index) {
                    return Event::Rejected(err);
                }
            }
            ControlMessage::PickImage => return Event::PickImageRequested,
            ControlMessage::AddHeart => self.card.add_decoration(Decoration::Heart),
        }

        Event::None
    }

    fn handle_gesture(&mut self, message: GestureMessage) {
        match message {
            GestureMessage::DragMove { dx, dy } => self.card.on_drag_move(dx, dy),
            GestureMessage::PinchUpdate { scale } => self.card.on_pinch_update(scale),
        }
        self.spring
            .set_target(self.card.image_position(), self.card.scale());
    }

    fn advance_animation(&mut self, now: Instant) {
        if self.spring.is_settled() {
            self.last_frame = None;
            return;
        }

        let dt = self
            .last_frame
            .map_or(Duration::from_millis(motion::FRAME_MILLIS), |last| {
                now.saturating_duration_since(last)
            })
            .min(MAX_FRAME_GAP);

        self.spring.step(dt);
        self.last_frame = if self.spring.is_settled() {
            None
        } else {
            Some(now)
        };
    }

    /// Records the answer of the permission request.
    ///
    /// Returns the error to surface, at most once.
    pub fn resolve_permission(&mut self, status: PermissionStatus) -> Option<ComposerError> {
        use_case::resolve_permission(&mut self.permission, status)
    }

    /// Applies the picker answer to the card.
    ///
    /// A successful pick drops the pixels of the previous photo until the new
    /// one is decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::PickerCancelled`] when nothing was picked.
    pub fn apply_pick(&mut self, outcome: PickOutcome) -> Result<ResourceHandle, ComposerError> {
        let handle = self.card.apply_pick(outcome)?.clone();
        self.photo = None;
        Ok(handle)
    }

    /// Stores decoded pixels for `handle`.
    ///
    /// Returns false and ignores the pixels when `handle` is no longer the
    /// card's photo (a newer pick won the race).
    pub fn set_photo(&mut self, handle: &ResourceHandle, photo: ImageData) -> bool {
        if self.card.image() != Some(handle) {
            tracing::debug!(photo = %handle, "discarding stale decoded photo");
            return false;
        }
        self.photo = Some(photo);
        true
    }

    pub fn set_templates(&mut self, templates: TemplateSet) {
        self.templates = Some(templates);
    }

    #[must_use]
    pub fn card(&self) -> &CardState {
        &self.card
    }

    #[must_use]
    pub fn editor(&self) -> &text_editor::Content {
        &self.editor
    }

    #[must_use]
    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    #[must_use]
    pub fn photo(&self) -> Option<&ImageData> {
        self.photo.as_ref()
    }

    #[must_use]
    pub fn templates(&self) -> Option<&TemplateSet> {
        self.templates.as_ref()
    }

    #[must_use]
    pub fn spring(&self) -> &PhotoSpring {
        &self.spring
    }

    /// Whether frame ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.spring.is_settled()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("card", &self.card)
            .field("permission", &self.permission)
            .field("templates", &self.templates.as_ref().map(TemplateSet::len))
            .field("photo", &self.photo.is_some())
            .field("spring", &self.spring)
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(CardDefaults::default())
    }
}
