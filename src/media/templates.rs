// SPDX-License-Identifier: MPL-2.0
//! Bundled card templates.
//!
//! The templates are SVG files embedded in the binary and rasterized with
//! `resvg` when the screen boots. They are addressed by
//! [`TemplateIndex`] only.

use super::ImageData;
use crate::domain::card::{TemplateIndex, TEMPLATE_COUNT};
use crate::error::{Error, Result};
use resvg::usvg;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/templates/"]
struct TemplateAssets;

/// Size of the card preview in logical pixels.
pub const PREVIEW_WIDTH: f32 = 320.0;
pub const PREVIEW_HEIGHT: f32 = 540.0;

/// Templates are rasterized at this multiple of the preview size so they stay
/// sharp on HiDPI displays.
const RENDER_SCALE: f32 = 2.0;

/// Static description of a bundled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub title: &'static str,
    pub file: &'static str,
}

/// Every bundled template, in display order.
pub const TEMPLATES: [TemplateInfo; TEMPLATE_COUNT] = [
    TemplateInfo {
        title: "Birthday Card",
        file: "birthday_card.svg",
    },
    TemplateInfo {
        title: "Birthday Queen",
        file: "birthday_queen.svg",
    },
    TemplateInfo {
        title: "Happy and Joyful Birthday - Vintage Lettering",
        file: "vintage_lettering.svg",
    },
    TemplateInfo {
        title: "Happy Birthday Card",
        file: "happy_birthday_card.svg",
    },
    TemplateInfo {
        title: "Wishing You A Happy Birthday - Cake",
        file: "birthday_cake.svg",
    },
];

/// Rasterized templates, one per [`TemplateIndex`].
#[derive(Debug, Clone)]
pub struct TemplateSet {
    images: Vec<ImageData>,
}

impl TemplateSet {
    /// Rasterizes every bundled template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] if a template is missing or cannot be rendered.
    pub fn load() -> Result<Self> {
        let images = TEMPLATES
            .iter()
            .map(|info| {
                let file = TemplateAssets::get(info.file)
                    .ok_or_else(|| Error::Svg(format!("missing template {}", info.file)))?;
                render_svg(
                    &file.data,
                    (PREVIEW_WIDTH * RENDER_SCALE) as u32,
                    (PREVIEW_HEIGHT * RENDER_SCALE) as u32,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = images.len(), "templates rasterized");
        Ok(Self { images })
    }

    #[must_use]
    pub fn get(&self, index: TemplateIndex) -> Option<&ImageData> {
        self.images.get(index.value())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Title of the template at `index`.
#[must_use]
pub fn title(index: TemplateIndex) -> &'static str {
    TEMPLATES[index.value()].title
}

/// Rasterizes SVG data scaled to fit `width`×`height`.
///
/// # Errors
///
/// Returns [`Error::Svg`] if parsing fails or a dimension is zero.
pub fn render_svg(data: &[u8], width: u32, height: u32) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size();
    if width == 0 || height == 0 || size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; Iced expects straight RGBA.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_asset_per_template_index() {
        assert_eq!(TEMPLATES.len(), TEMPLATE_COUNT);
        for info in &TEMPLATES {
            assert!(
                TemplateAssets::get(info.file).is_some(),
                "missing asset {}",
                info.file
            );
        }
    }

    #[test]
    fn all_templates_rasterize() {
        let set = TemplateSet::load().expect("bundled templates render");
        assert_eq!(set.len(), TEMPLATE_COUNT);
        for index in TemplateIndex::all() {
            let image = set.get(index).expect("template present");
            assert_eq!(image.width, 640);
            assert_eq!(image.height, 1080);
        }
    }

    #[test]
    fn titles_follow_display_order() {
        assert_eq!(title(TemplateIndex::default()), "Birthday Card");
        let last = TemplateIndex::try_new(4).expect("valid index");
        assert_eq!(title(last), "Wishing You A Happy Birthday - Cake");
    }

    #[test]
    fn render_svg_scales_to_requested_size() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
            <rect width="6" height="3" fill="blue" /></svg>"#;
        let data = render_svg(svg, 12, 6).expect("svg should render");
        assert_eq!((data.width, data.height), (12, 6));
    }

    #[test]
    fn invalid_svg_returns_svg_error() {
        match render_svg(b"<svg>oops", 10, 10) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn zero_target_size_is_rejected() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3"/>"#;
        assert!(matches!(render_svg(svg, 0, 10), Err(Error::Svg(_))));
    }
}
