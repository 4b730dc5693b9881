use image::{imageops::FilterType, RgbaImage};
use std::path::Path;

use crate::config::THUMBNAIL_SIZE;

/// Compute thumbnail dimensions that fit inside a `max` x `max` box.
///
/// Aspect ratio is preserved and images already inside the box keep
/// their original size.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let longest = width.max(height) as f64;
    let scale = max as f64 / longest;
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max);

    (scaled(width), scaled(height))
}

/// Generate a thumbnail for an image file
/// Returns the RGBA pixels, or None if the file can't be decoded
pub fn generate_thumbnail(path: &Path) -> Option<RgbaImage> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            log::debug!("Skipping {}: {}", path.display(), e);
            return None;
        }
    };

    let (width, height) = fit_within(img.width(), img.height(), THUMBNAIL_SIZE);
    let rgba = img.to_rgba8();

    if (width, height) == rgba.dimensions() {
        return Some(rgba);
    }

    Some(image::imageops::resize(&rgba, width, height, FilterType::Triangle))
}
