//! Image preparation before recognition.
//!
//! Scanned text is often small and low-contrast. Every upload is decoded to
//! RGB, upscaled and contrast-enhanced before being handed to the engine:
//!
//! ```text
//! bytes ──▶ decode (RGB) ──▶ resize ×2 ──▶ contrast ×2.5 ──▶ PNG
//! ```

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use std::path::Path;

use crate::error::{ImageError, ImageResult};

/// Width and height multiplier.
pub const UPSCALE_FACTOR: u32 = 2;

/// Contrast enhancement factor. `1.0` leaves the image unchanged.
pub const CONTRAST_FACTOR: f32 = 2.5;

/// Decode any supported format into an RGB buffer.
pub fn decode(bytes: &[u8]) -> ImageResult<RgbImage> {
    let image = image::load_from_memory(bytes)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(ImageError::Empty);
    }
    Ok(image.to_rgb8())
}

/// Full preparation: upscale, then enhance contrast.
pub fn preprocess(image: &RgbImage) -> RgbImage {
    let mut prepared = upscale(image, UPSCALE_FACTOR);
    enhance_contrast(&mut prepared, CONTRAST_FACTOR);
    prepared
}

/// Resize by an integer factor with bicubic filtering.
pub fn upscale(image: &RgbImage, factor: u32) -> RgbImage {
    imageops::resize(
        image,
        image.width() * factor,
        image.height() * factor,
        FilterType::CatmullRom,
    )
}

/// Push every channel away from the image's mean grey level.
///
/// `out = mean + factor * (in - mean)`, clamped to `0..=255`.
pub fn enhance_contrast(image: &mut RgbImage, factor: f32) {
    let mean = mean_luma(image);
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let value = mean + factor * (*channel as f32 - mean);
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Write `image` as PNG.
pub fn save_png(image: &RgbImage, path: &Path) -> ImageResult<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// ITU-R 601 luma of one pixel in 16-bit fixed point, rounded.
fn luma(r: u8, g: u8, b: u8) -> u64 {
    (r as u64 * 19595 + g as u64 * 38470 + b as u64 * 7471 + 0x8000) >> 16
}

/// Mean luma, rounded to an integer level.
fn mean_luma(image: &RgbImage) -> f32 {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return 0.0;
    }

    let total: u64 = image
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            luma(r, g, b)
        })
        .sum();

    (total as f64 / count as f64).round() as f32
}
