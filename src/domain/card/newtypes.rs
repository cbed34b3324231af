// SPDX-License-Identifier: MPL-2.0
//! Card newtypes.
//!
//! This module provides type-safe wrappers for card values,
//! ensuring they are always within valid ranges.

use crate::domain::error::ComposerError;
use std::fmt;

// =============================================================================
// Font Size Bounds
// =============================================================================

/// Font size bounds (18pt to 30pt in steps of 2).
pub mod font_size_bounds {
    /// Smallest offered font size.
    pub const MIN: u16 = 18;
    /// Largest offered font size.
    pub const MAX: u16 = 30;
    /// Increment used by the A+/A- buttons.
    pub const STEP: u16 = 2;
    /// Font size of a fresh card.
    pub const DEFAULT: u16 = 24;
}

// =============================================================================
// FontSize
// =============================================================================

/// Text size, guaranteed to be one of the offered sizes (18, 20, ..., 30).
///
/// Stepping up or down saturates at the ends of the range instead of
/// leaving the offered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u16);

impl FontSize {
    /// Every size offered by the font size picker, ascending.
    pub const ALL: [FontSize; 7] = [
        FontSize(18),
        FontSize(20),
        FontSize(22),
        FontSize(24),
        FontSize(26),
        FontSize(28),
        FontSize(30),
    ];

    /// Creates a font size from a raw point value.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::UnsupportedFontSize`] when `points` is not one
    /// of [`FontSize::ALL`].
    pub fn try_new(points: u16) -> Result<Self, ComposerError> {
        Self::ALL
            .into_iter()
            .find(|size| size.0 == points)
            .ok_or(ComposerError::UnsupportedFontSize(points))
    }

    /// Returns the raw point value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the next larger size, saturating at the maximum.
    #[must_use]
    pub fn increased(self) -> Self {
        Self((self.0 + font_size_bounds::STEP).min(font_size_bounds::MAX))
    }

    /// Returns the next smaller size, saturating at the minimum.
    #[must_use]
    pub fn decreased(self) -> Self {
        Self(
            self.0
                .saturating_sub(font_size_bounds::STEP)
                .max(font_size_bounds::MIN),
        )
    }

    /// Returns whether this is the smallest offered size.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= font_size_bounds::MIN
    }

    /// Returns whether this is the largest offered size.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= font_size_bounds::MAX
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(font_size_bounds::DEFAULT)
    }
}

impl TryFrom<u16> for FontSize {
    type Error = ComposerError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Photo Scale Bounds
// =============================================================================

/// Photo scale bounds (0.25x to 4x).
pub mod scale_bounds {
    /// Minimum scale factor.
    pub const MIN: f32 = 0.25;
    /// Maximum scale factor.
    pub const MAX: f32 = 4.0;
    /// Scale of a freshly attached photo.
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// PhotoScale
// =============================================================================

/// Scale factor of the attached photo, guaranteed to be within 0.25x–4x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoScale(f32);

impl PhotoScale {
    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// Returns `None` for NaN or infinite input so a broken gesture sample
    /// can be dropped instead of corrupting the transform.
    #[must_use]
    pub fn new(factor: f32) -> Option<Self> {
        if factor.is_finite() {
            Some(Self(factor.clamp(scale_bounds::MIN, scale_bounds::MAX)))
        } else {
            None
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= scale_bounds::MIN
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= scale_bounds::MAX
    }
}

impl Default for PhotoScale {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// Offset
// =============================================================================

/// Photo translation relative to the center of the preview, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// The untranslated position.
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// TemplateIndex
// =============================================================================

/// Number of bundled card templates.
pub const TEMPLATE_COUNT: usize = 5;

/// Index of a bundled template, guaranteed to be below [`TEMPLATE_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TemplateIndex(usize);

impl TemplateIndex {
    /// Creates a template index.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::TemplateOutOfRange`] when `index` does not
    /// address one of the bundled templates.
    pub fn try_new(index: usize) -> Result<Self, ComposerError> {
        if index < TEMPLATE_COUNT {
            Ok(Self(index))
        } else {
            Err(ComposerError::TemplateOutOfRange {
                index,
                len: TEMPLATE_COUNT,
            })
        }
    }

    /// Returns the raw index.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Iterates over every valid template index in display order.
    pub fn all() -> impl Iterator<Item = TemplateIndex> {
        (0..TEMPLATE_COUNT).map(TemplateIndex)
    }
}

impl TryFrom<usize> for TemplateIndex {
    type Error = ComposerError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // FontSize tests
    // -------------------------------------------------------------------------

    #[test]
    fn font_size_accepts_every_offered_value() {
        for points in (18..=30).step_by(2) {
            assert_eq!(FontSize::try_new(points).map(FontSize::value), Ok(points));
        }
    }

    #[test]
    fn font_size_rejects_values_outside_the_set() {
        for points in [0, 17, 19, 25, 31, 32, u16::MAX] {
            assert_eq!(
                FontSize::try_new(points),
                Err(ComposerError::UnsupportedFontSize(points))
            );
        }
    }

    #[test]
    fn font_size_steps_saturate() {
        let max = FontSize::try_new(font_size_bounds::MAX).unwrap();
        let min = FontSize::try_new(font_size_bounds::MIN).unwrap();
        assert_eq!(max.increased(), max);
        assert_eq!(min.decreased(), min);
        assert!(max.is_max());
        assert!(min.is_min());
    }

    #[test]
    fn font_size_steps_stay_in_the_offered_set() {
        let mut size = FontSize::default();
        for _ in 0..10 {
            size = size.increased();
            assert!(FontSize::ALL.contains(&size));
        }
        for _ in 0..10 {
            size = size.decreased();
            assert!(FontSize::ALL.contains(&size));
        }
    }

    // -------------------------------------------------------------------------
    // PhotoScale tests
    // -------------------------------------------------------------------------

    #[test]
    fn photo_scale_clamps() {
        let tiny = PhotoScale::new(0.01).unwrap();
        let huge = PhotoScale::new(50.0).unwrap();
        assert!((tiny.value() - scale_bounds::MIN).abs() < f32::EPSILON);
        assert!((huge.value() - scale_bounds::MAX).abs() < f32::EPSILON);
        assert!(tiny.is_min());
        assert!(huge.is_max());
    }

    #[test]
    fn photo_scale_rejects_non_finite() {
        assert!(PhotoScale::new(f32::NAN).is_none());
        assert!(PhotoScale::new(f32::INFINITY).is_none());
    }

    #[test]
    fn photo_scale_default_is_identity() {
        assert!((PhotoScale::default().value() - 1.0).abs() < f32::EPSILON);
    }

    // -------------------------------------------------------------------------
    // TemplateIndex tests
    // -------------------------------------------------------------------------

    #[test]
    fn template_index_bounds() {
        assert!(TemplateIndex::try_new(0).is_ok());
        assert!(TemplateIndex::try_new(TEMPLATE_COUNT - 1).is_ok());
        assert_eq!(
            TemplateIndex::try_new(TEMPLATE_COUNT),
            Err(ComposerError::TemplateOutOfRange {
                index: TEMPLATE_COUNT,
                len: TEMPLATE_COUNT
            })
        );
    }

    #[test]
    fn template_index_all_covers_every_template() {
        let indices: Vec<usize> = TemplateIndex::all().map(TemplateIndex::value).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }
}
