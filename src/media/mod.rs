// SPDX-License-Identifier: MPL-2.0
//! Bitmap sources of the card: bundled templates and the picked photo.
//!
//! Both end up as [`ImageData`], an RGBA buffer wrapped in an Iced image
//! handle that the preview can draw directly.

pub mod photo;
pub mod templates;

use iced::widget::image;

// Re-export commonly used types
pub use photo::load_photo;
pub use templates::{TemplateInfo, TemplateSet, TEMPLATES};

/// Decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from straight (non-premultiplied) RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    #[test]
    fn aspect_ratio_of_landscape_image() {
        let data = ImageData::from_rgba(4, 3, vec![0; 4 * 3 * 4]);
        assert_relative_eq!(data.aspect_ratio(), 4.0 / 3.0);
    }

    #[test]
    fn aspect_ratio_of_empty_image_is_neutral() {
        let data = ImageData::from_rgba(0, 0, Vec::new());
        assert_relative_eq!(data.aspect_ratio(), 1.0);
    }
}
