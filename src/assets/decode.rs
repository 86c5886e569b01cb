use std::path::Path;

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};

use crate::foundation::{
    error::{BloomError, BloomResult},
    math::premultiply_in_place,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Raster image in premultiplied RGBA8 form, ready to blit onto a canvas.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

impl PreparedImage {
    pub fn from_rgba(rgba: RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        let mut rgba8_premul = rgba.into_raw();
        premultiply_in_place(&mut rgba8_premul);
        Self {
            width,
            height,
            rgba8_premul,
        }
    }
}

/// Decode encoded image bytes into straight RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> BloomResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(BloomError::asset("decoded image has zero size"));
    }
    Ok(rgba)
}

/// Read and decode an image file into straight RGBA8.
pub fn open_rgba(path: &Path) -> BloomResult<RgbaImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_rgba(&bytes).map_err(|e| BloomError::asset(format!("'{}': {e}", path.display())))
}

/// Dimensions of `(width, height)` scaled down to fit inside `max x max`, aspect preserved.
///
/// Sizes already within the bound are returned unchanged.
pub fn fit_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    let (w, h, m) = (u64::from(width), u64::from(height), u64::from(max));
    if w >= h {
        let nh = ((h * m + w / 2) / w).max(1);
        (max, nh as u32)
    } else {
        let nw = ((w * m + h / 2) / h).max(1);
        (nw as u32, max)
    }
}

/// Downscale with Lanczos3 so neither side exceeds `max`; never upscales.
pub fn fit_within(img: RgbaImage, max: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let (nw, nh) = fit_dimensions(w, h, max);
    if (nw, nh) == (w, h) {
        return img;
    }
    image::imageops::resize(&img, nw, nh, FilterType::Lanczos3)
}

/// Stretch to exactly `width x height` with bicubic resampling.
pub fn resize_exact(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    image::imageops::resize(img, width, height, FilterType::CatmullRom)
}

/// Load the logo and fit it inside the `max` bound.
pub fn prepare_logo(path: &Path, max: u32) -> BloomResult<PreparedImage> {
    let rgba = open_rgba(path)?;
    Ok(PreparedImage::from_rgba(fit_within(rgba, max)))
}

/// Load a placeholder photo stretched to the slot size.
pub fn prepare_placeholder(path: &Path, width: u32, height: u32) -> BloomResult<PreparedImage> {
    let rgba = open_rgba(path)?;
    Ok(PreparedImage::from_rgba(resize_exact(&rgba, width, height)))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
