// SPDX-License-Identifier: MPL-2.0
//! Media picker port definition.
//!
//! This module defines the [`MediaPicker`] trait used to let the user choose a
//! photo from their library. Infrastructure adapters implement this trait with
//! a concrete platform dialog.

use crate::domain::card::PickOutcome;
use futures_util::future::BoxFuture;

// =============================================================================
// PickOptions
// =============================================================================

/// Kind of media the picker offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    #[default]
    Images,
}

/// Options passed to the picker for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickOptions {
    /// Media the user may choose.
    pub media: MediaKind,
    /// Whether the chosen photo is cropped to [`PickOptions::aspect`].
    pub allows_editing: bool,
    /// Crop aspect as `(width, height)`.
    pub aspect: (u32, u32),
    /// Output quality in `0.0..=1.0`; values below 1 downsample.
    pub quality: f32,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            media: MediaKind::Images,
            allows_editing: true,
            aspect: (4, 3),
            quality: 1.0,
        }
    }
}

impl PickOptions {
    /// Returns the crop aspect as a width/height ratio, or `None` when either
    /// side is zero.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        let (w, h) = self.aspect;
        if w == 0 || h == 0 {
            None
        } else {
            Some(w as f32 / h as f32)
        }
    }

    /// Returns the quality clamped to `0.05..=1.0`.
    #[must_use]
    pub fn effective_quality(&self) -> f32 {
        if self.quality.is_finite() {
            self.quality.clamp(0.05, 1.0)
        } else {
            1.0
        }
    }
}

// =============================================================================
// MediaPicker Trait
// =============================================================================

/// Port for choosing a photo.
///
/// The returned future resolves once the user either chooses a photo or
/// dismisses the picker. It never fails: any platform problem is reported as
/// [`PickOutcome::Cancelled`].
pub trait MediaPicker: Send + Sync {
    fn launch(&self, options: PickOptions) -> BoxFuture<'static, PickOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_request_editable_four_by_three_images() {
        let options = PickOptions::default();
        assert_eq!(options.media, MediaKind::Images);
        assert!(options.allows_editing);
        assert_eq!(options.aspect, (4, 3));
        assert!((options.quality - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn aspect_ratio_rejects_zero_sides() {
        let options = PickOptions {
            aspect: (0, 3),
            ..PickOptions::default()
        };
        assert!(options.aspect_ratio().is_none());
        assert!(PickOptions::default().aspect_ratio().is_some());
    }

    #[test]
    fn effective_quality_is_clamped() {
        let low = PickOptions {
            quality: -1.0,
            ..PickOptions::default()
        };
        let broken = PickOptions {
            quality: f32::NAN,
            ..PickOptions::default()
        };
        assert!((low.effective_quality() - 0.05).abs() < f32::EPSILON);
        assert!((broken.effective_quality() - 1.0).abs() < f32::EPSILON);
    }
}
