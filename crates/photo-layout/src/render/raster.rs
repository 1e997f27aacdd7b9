//! Slot rasterization
//!
//! Turns a planned slot into an RGB raster of the photo's physical size at
//! 10 px/mm, then encodes it as JPEG for embedding.

use crate::constants::JPEG_QUALITY;
use crate::layout::SlotSample;
use crate::types::{Background, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

/// Render the sampled region of `source` into a `width × height` raster.
///
/// Raster area not covered by the source (zoomed out or panned past the
/// edge) is filled with the background colour.
pub fn rasterize_slot(
    source: &DynamicImage,
    sample: &SlotSample,
    width: u32,
    height: u32,
    background: Background,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, Rgb(background.rgb()));

    let (Some(src), Some(dest)) = (sample.source, sample.dest) else {
        return canvas;
    };

    if src.width <= 0.0 || src.height <= 0.0 {
        return canvas;
    }

    // Snap the source outward to whole pixels and grow the destination by
    // the same amount, so source pixels keep their exact raster positions.
    // The overhang is clipped by the overlay.
    let src_x = src.x.floor().max(0.0) as u32;
    let src_y = src.y.floor().max(0.0) as u32;
    let src_w = ((src.right().ceil() as u32).min(source.width())).saturating_sub(src_x);
    let src_h = ((src.bottom().ceil() as u32).min(source.height())).saturating_sub(src_y);

    let scale_x = dest.width / src.width;
    let scale_y = dest.height / src.height;
    let dest_x = (dest.x - (src.x - f64::from(src_x)) * scale_x).round() as i64;
    let dest_y = (dest.y - (src.y - f64::from(src_y)) * scale_y).round() as i64;
    let dest_w = (f64::from(src_w) * scale_x).round() as u32;
    let dest_h = (f64::from(src_h) * scale_y).round() as u32;

    if src_w == 0 || src_h == 0 || dest_w == 0 || dest_h == 0 {
        return canvas;
    }

    let region = source
        .crop_imm(src_x, src_y, src_w, src_h)
        .resize_exact(dest_w, dest_h, FilterType::Triangle)
        .to_rgb8();
    imageops::overlay(&mut canvas, &region, dest_x, dest_y);

    canvas
}

/// Encode a slot raster as baseline JPEG
pub fn encode_jpeg(raster: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    raster.write_with_encoder(encoder)?;
    Ok(bytes)
}
