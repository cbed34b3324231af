// SPDX-License-Identifier: MPL-2.0
//! The editable card record.

use super::gesture::GestureSink;
use super::newtypes::{FontSize, Offset, PhotoScale, TemplateIndex};
use super::resource::{PickOutcome, ResourceHandle};
use super::style::{Decoration, FontColor, FontFamily};
use crate::domain::error::ComposerError;

/// Greeting shown on a fresh card.
pub const DEFAULT_GREETING: &str = "Happy Birthday!";

/// Starting values of a card, overridable from the user configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDefaults {
    pub text: String,
    pub font_size: FontSize,
    pub template: TemplateIndex,
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self {
            text: DEFAULT_GREETING.to_string(),
            font_size: FontSize::default(),
            template: TemplateIndex::default(),
        }
    }
}

/// Everything the user can change on the card.
///
/// Fields are only reachable through the named operations below, which keeps
/// every invariant local to this type. No field transition invalidates
/// another one.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    text: String,
    font_size: FontSize,
    font_color: FontColor,
    bold: bool,
    italic: bool,
    font_family: FontFamily,
    image: Option<ResourceHandle>,
    decoration: Option<Decoration>,
    image_position: Offset,
    scale: PhotoScale,
    template: TemplateIndex,
}

impl Default for CardState {
    fn default() -> Self {
        Self::new(CardDefaults::default())
    }
}

impl CardState {
    #[must_use]
    pub fn new(defaults: CardDefaults) -> Self {
        Self {
            text: defaults.text,
            font_size: defaults.font_size,
            font_color: FontColor::default(),
            bold: false,
            italic: false,
            font_family: FontFamily::default(),
            image: None,
            decoration: None,
            image_position: Offset::ZERO,
            scale: PhotoScale::default(),
            template: defaults.template,
        }
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// Replaces the message verbatim. Empty text is allowed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    /// Steps the font size up by 2pt, stopping at the largest offered size.
    pub fn increase_font_size(&mut self) {
        self.font_size = self.font_size.increased();
    }

    /// Steps the font size down by 2pt, stopping at the smallest offered size.
    pub fn decrease_font_size(&mut self) {
        self.font_size = self.font_size.decreased();
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.font_size = size;
    }

    /// Sets the font size from a raw point value.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::UnsupportedFontSize`] and leaves the card
    /// untouched when `points` is not an offered size.
    pub fn set_font_size_points(&mut self, points: u16) -> Result<(), ComposerError> {
        self.font_size = FontSize::try_new(points)?;
        Ok(())
    }

    pub fn set_font_color(&mut self, color: FontColor) {
        self.font_color = color;
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.font_family = family;
    }

    // -------------------------------------------------------------------------
    // Template
    // -------------------------------------------------------------------------

    /// Makes the template at `index` the card background.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::TemplateOutOfRange`] and leaves the card
    /// untouched when `index` does not address a bundled template.
    pub fn select_template(&mut self, index: usize) -> Result<(), ComposerError> {
        self.template = TemplateIndex::try_new(index)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Photo and decoration
    // -------------------------------------------------------------------------

    /// Applies the result of a picker session.
    ///
    /// A picked photo replaces the current one. Cancellation leaves the card
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::PickerCancelled`] when the user cancelled.
    pub fn apply_pick(&mut self, outcome: PickOutcome) -> Result<&ResourceHandle, ComposerError> {
        match outcome {
            PickOutcome::Picked(handle) => Ok(self.image.insert(handle)),
            PickOutcome::Cancelled => Err(ComposerError::PickerCancelled),
        }
    }

    /// Puts a sticker on the card. Adding the same sticker again is a no-op.
    pub fn add_decoration(&mut self, decoration: Decoration) {
        self.decoration = Some(decoration);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    #[must_use]
    pub fn font_color(&self) -> FontColor {
        self.font_color
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    #[must_use]
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    #[must_use]
    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    #[must_use]
    pub fn image(&self) -> Option<&ResourceHandle> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn decoration(&self) -> Option<Decoration> {
        self.decoration
    }

    #[must_use]
    pub fn image_position(&self) -> Offset {
        self.image_position
    }

    #[must_use]
    pub fn scale(&self) -> PhotoScale {
        self.scale
    }

    #[must_use]
    pub fn template(&self) -> TemplateIndex {
        self.template
    }
}

impl GestureSink for CardState {
    fn on_drag_move(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() && dy.is_finite() {
            self.image_position = Offset::new(dx, dy);
        }
    }

    fn on_pinch_update(&mut self, scale: f32) {
        if let Some(scale) = PhotoScale::new(scale) {
            self.scale = scale;
        }
    }
}
