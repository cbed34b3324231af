// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Composer**: Starting values of a fresh card
//! - **Picker**: Options handed to the media picker

use crate::domain::card::newtypes::font_size_bounds;

// ==========================================================================
// Composer Defaults
// ==========================================================================

/// Font size of a fresh card, in points.
pub const DEFAULT_FONT_SIZE: u16 = font_size_bounds::DEFAULT;

/// Template shown on a fresh card.
pub const DEFAULT_TEMPLATE: usize = 0;

// ==========================================================================
// Picker Defaults
// ==========================================================================

/// Whether picked photos are cropped to the picker aspect.
pub const DEFAULT_ALLOWS_EDITING: bool = true;

/// Crop aspect width.
pub const DEFAULT_ASPECT_WIDTH: u32 = 4;

/// Crop aspect height.
pub const DEFAULT_ASPECT_HEIGHT: u32 = 3;

/// Output quality of picked photos (1.0 keeps full resolution).
pub const DEFAULT_QUALITY: f32 = 1.0;

/// Lowest accepted picker quality.
pub const MIN_QUALITY: f32 = 0.05;

/// Highest accepted picker quality.
pub const MAX_QUALITY: f32 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_quality_bounds_are_ordered() {
        let (min, default, max) = (MIN_QUALITY, DEFAULT_QUALITY, MAX_QUALITY);
        assert!(min > 0.0);
        assert!(default >= min && default <= max);
    }

    #[test]
    fn default_aspect_is_four_by_three() {
        assert_eq!((DEFAULT_ASPECT_WIDTH, DEFAULT_ASPECT_HEIGHT), (4, 3));
    }
}
