// SPDX-License-Identifier: MPL-2.0
//! Decoding of the picked photo.

use super::ImageData;
use crate::application::port::PickOptions;
use crate::domain::card::ResourceHandle;
use crate::error::{Error, Result};
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, GenericImageView};
use std::fs;

/// Decodes the photo behind `handle` and applies the picker options.
///
/// When `allows_editing` is set the photo is center-cropped to the requested
/// aspect. A quality below 1 shrinks both sides by that factor.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Image`]
/// when its content cannot be decoded.
pub fn load_photo(handle: &ResourceHandle, options: &PickOptions) -> Result<ImageData> {
    let bytes = fs::read(handle.as_path()).map_err(|e| Error::Io(e.to_string()))?;
    let img = image_rs::load_from_memory(&bytes)?;
    let img = prepare(img, options);

    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Applies crop and quality options to a decoded photo.
fn prepare(img: DynamicImage, options: &PickOptions) -> DynamicImage {
    let img = match options.aspect_ratio() {
        Some(ratio) if options.allows_editing => center_crop(img, ratio),
        _ => img,
    };

    let quality = options.effective_quality();
    if quality >= 1.0 {
        return img;
    }

    let (width, height) = img.dimensions();
    let scaled = |side: u32| ((side as f32 * quality).round() as u32).max(1);
    img.resize_exact(scaled(width), scaled(height), FilterType::Triangle)
}

/// Crops the largest centered region with the given width/height ratio.
fn center_crop(img: DynamicImage, ratio: f32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return img;
    }

    let current = width as f32 / height as f32;
    let (crop_w, crop_h) = if current > ratio {
        (((height as f32 * ratio).round() as u32).clamp(1, width), height)
    } else {
        (width, ((width as f32 / ratio).round() as u32).clamp(1, height))
    };

    if (crop_w, crop_h) == (width, height) {
        return img;
    }

    let x = (width - crop_w) / 2;
    let y = (height - crop_h) / 2;
    img.crop_imm(x, y, crop_w, crop_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([200, 40, 90, 255]))
            .save(path)
            .expect("failed to write temporary png");
    }

    #[test]
    fn square_photo_is_cropped_to_four_by_three() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("square.png");
        write_png(&path, 400, 400);

        let data = load_photo(&ResourceHandle::new(&path), &PickOptions::default())
            .expect("png should load");

        assert_eq!((data.width, data.height), (400, 300));
    }

    #[test]
    fn tall_photo_is_cropped_vertically() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(300, 900));
        let cropped = center_crop(img, 4.0 / 3.0);
        assert_eq!(cropped.dimensions(), (300, 225));
    }

    #[test]
    fn wide_photo_is_cropped_horizontally() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(1600, 300));
        let cropped = center_crop(img, 4.0 / 3.0);
        assert_eq!(cropped.dimensions(), (400, 300));
    }

    #[test]
    fn editing_disabled_keeps_original_frame() {
        let options = PickOptions {
            allows_editing: false,
            ..PickOptions::default()
        };
        let img = DynamicImage::ImageRgba8(RgbaImage::new(50, 80));
        assert_eq!(prepare(img, &options).dimensions(), (50, 80));
    }

    #[test]
    fn lower_quality_downsamples() {
        let options = PickOptions {
            allows_editing: false,
            quality: 0.5,
            ..PickOptions::default()
        };
        let img = DynamicImage::ImageRgba8(RgbaImage::new(200, 100));
        assert_eq!(prepare(img, &options).dimensions(), (100, 50));
    }

    #[test]
    fn missing_photo_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let handle = ResourceHandle::new(temp_dir.path().join("gone.jpg"));

        match load_photo(&handle, &PickOptions::default()) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_return_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"not a png").expect("failed to write invalid data");

        match load_photo(&ResourceHandle::new(&path), &PickOptions::default()) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }
}
