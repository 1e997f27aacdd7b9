//! Crop and pan/zoom resolution
//!
//! The base crop of every slot is the largest rectangle with the photo's
//! aspect ratio centered in the source ("cover" crop). The user's pan and
//! zoom are applied on top of it when sampling.

use crate::constants::{MAX_ZOOM, MIN_ZOOM};

use super::{Rect, SlotSample};

/// Pan offset in slot-raster pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanOffset {
    pub x: f64,
    pub y: f64,
}

impl PanOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Largest centered rectangle of `target_aspect_ratio` inside the source.
pub fn resolve_crop(natural_width: u32, natural_height: u32, target_aspect_ratio: f64) -> Rect {
    cover_crop(
        &Rect::new(0.0, 0.0, natural_width as f64, natural_height as f64),
        target_aspect_ratio,
    )
}

/// Largest rectangle of `target_aspect_ratio` centered inside `area`.
pub fn cover_crop(area: &Rect, target_aspect_ratio: f64) -> Rect {
    if area.aspect_ratio() > target_aspect_ratio {
        // Source is wider than the target: keep full height, trim the sides
        let width = area.height * target_aspect_ratio;
        Rect::new(area.x + (area.width - width) / 2.0, area.y, width, area.height)
    } else {
        // Source is taller: keep full width, trim top and bottom
        let height = area.width / target_aspect_ratio;
        Rect::new(area.x, area.y + (area.height - height) / 2.0, area.width, height)
    }
}

/// Zoom limited to the supported range; non-finite values mean "no zoom".
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        1.0
    }
}

/// Base crop for an image: the user's crop area when set (clamped to the
/// image and re-fitted to the target ratio), otherwise the cover crop.
pub fn base_crop(
    natural_width: u32,
    natural_height: u32,
    crop_area: Option<&Rect>,
    target_aspect_ratio: f64,
) -> Rect {
    let bounds = Rect::new(0.0, 0.0, natural_width as f64, natural_height as f64);
    match crop_area.and_then(|area| area.intersect(&bounds)) {
        Some(area) => cover_crop(&area, target_aspect_ratio),
        None => resolve_crop(natural_width, natural_height, target_aspect_ratio),
    }
}

/// Work out how a slot raster of `raster_width × raster_height` pixels
/// samples a `natural_width × natural_height` source.
///
/// The pan offset is shifted into crop pixels (`dx = pan.x * crop.width /
/// raster_width`), then the shifted window is zoomed around its center. The
/// window is clamped to the source; `dest` is the part of the raster the
/// clamped region covers. With zoom below 1 or a large pan, part of the
/// raster is left uncovered.
pub fn sample_slot(
    natural_width: u32,
    natural_height: u32,
    base: &Rect,
    pan: PanOffset,
    zoom: f64,
    raster_width: u32,
    raster_height: u32,
) -> SlotSample {
    let zoom = clamp_zoom(zoom);
    let pan_x = if pan.x.is_finite() { pan.x } else { 0.0 };
    let pan_y = if pan.y.is_finite() { pan.y } else { 0.0 };

    let shifted_x = base.x - pan_x * base.width / raster_width as f64;
    let shifted_y = base.y - pan_y * base.height / raster_height as f64;

    let width = base.width / zoom;
    let height = base.height / zoom;
    let window = Rect::new(
        shifted_x + (base.width - width) / 2.0,
        shifted_y + (base.height - height) / 2.0,
        width,
        height,
    );

    let bounds = Rect::new(0.0, 0.0, natural_width as f64, natural_height as f64);
    let source = window.intersect(&bounds);

    let raster_w = raster_width as f64;
    let raster_h = raster_height as f64;
    let dest = source.map(|src| {
        Rect::new(
            (src.x - window.x) * raster_w / window.width,
            (src.y - window.y) * raster_h / window.height,
            src.width * raster_w / window.width,
            src.height * raster_h / window.height,
        )
    });

    SlotSample {
        window,
        source,
        dest,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within(rect: &Rect, width: u32, height: u32) {
        assert!(rect.x >= 0.0 && rect.y >= 0.0, "{rect:?}");
        assert!(rect.right() <= width as f64 + 1e-9, "{rect:?}");
        assert!(rect.bottom() <= height as f64 + 1e-9, "{rect:?}");
    }

    #[test]
    fn test_wide_source_trims_sides() {
        let crop = resolve_crop(4000, 2000, 1.0);
        assert_eq!(crop, Rect::new(1000.0, 0.0, 2000.0, 2000.0));
    }

    #[test]
    fn test_tall_source_trims_top_and_bottom() {
        let crop = resolve_crop(1000, 3000, 0.5);
        assert_eq!(crop, Rect::new(0.0, 500.0, 1000.0, 2000.0));
    }

    #[test]
    fn test_crop_matches_ratio_and_stays_inside() {
        let ratios = [102.0 / 152.0, 1.0, 35.0 / 45.0, 1.5, 254.0 / 305.0, 3.0];
        let sources = [(100, 100), (4032, 3024), (3024, 4032), (101, 977), (6000, 113)];
        for &ratio in &ratios {
            for &(w, h) in &sources {
                let crop = resolve_crop(w, h, ratio);
                assert!((crop.aspect_ratio() - ratio).abs() < 1e-6, "{w}x{h} @ {ratio}");
                assert_within(&crop, w, h);
            }
        }
    }

    #[test]
    fn test_identity_sample_covers_raster() {
        let base = resolve_crop(2000, 1000, 2.0);
        let sample = sample_slot(2000, 1000, &base, PanOffset::default(), 1.0, 400, 200);
        assert_eq!(sample.window, base);
        assert_eq!(sample.source, Some(base));
        assert_eq!(sample.dest, Some(Rect::new(0.0, 0.0, 400.0, 200.0)));
    }

    #[test]
    fn test_zoom_in_narrows_window_around_center() {
        let base = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let sample = sample_slot(1000, 1000, &base, PanOffset::default(), 2.0, 100, 100);
        assert_eq!(sample.window, Rect::new(250.0, 250.0, 500.0, 500.0));
        assert_eq!(sample.dest, Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
    }

    #[test]
    fn test_zoom_out_leaves_border() {
        let base = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let sample = sample_slot(1000, 1000, &base, PanOffset::default(), 0.5, 100, 100);
        assert_eq!(sample.window, Rect::new(-500.0, -500.0, 2000.0, 2000.0));
        assert_eq!(sample.source, Some(base));
        assert_eq!(sample.dest, Some(Rect::new(25.0, 25.0, 50.0, 50.0)));
    }

    #[test]
    fn test_pan_shifts_window_in_crop_pixels() {
        let base = Rect::new(0.0, 0.0, 1000.0, 500.0);
        // 10 raster px of 200 is 1/20 of the crop width = 50 source px
        let sample = sample_slot(1000, 500, &base, PanOffset::new(10.0, 0.0), 1.0, 200, 100);
        assert_eq!(sample.window.x, -50.0);
        let source = sample.source.unwrap();
        assert_within(&source, 1000, 500);
        assert_eq!(source, Rect::new(0.0, 0.0, 950.0, 500.0));
        assert_eq!(sample.dest, Some(Rect::new(10.0, 0.0, 190.0, 100.0)));
    }

    #[test]
    fn test_panned_off_image_has_no_sample() {
        let base = Rect::new(0.0, 0.0, 100.0, 100.0);
        let sample = sample_slot(100, 100, &base, PanOffset::new(500.0, 0.0), 1.0, 100, 100);
        assert_eq!(sample.source, None);
        assert_eq!(sample.dest, None);
    }

    #[test]
    fn test_zoom_is_clamped() {
        assert_eq!(clamp_zoom(0.1), 0.5);
        assert_eq!(clamp_zoom(12.0), 3.0);
        assert_eq!(clamp_zoom(f64::NAN), 1.0);
        assert_eq!(clamp_zoom(1.25), 1.25);

        let base = Rect::new(0.0, 0.0, 900.0, 900.0);
        let sample = sample_slot(900, 900, &base, PanOffset::default(), 40.0, 90, 90);
        assert_eq!(sample.window.width, 300.0);
    }

    #[test]
    fn test_user_crop_area_is_refitted() {
        let area = Rect::new(100.0, 100.0, 400.0, 200.0);
        let crop = base_crop(1000, 1000, Some(&area), 1.0);
        assert_eq!(crop, Rect::new(200.0, 100.0, 200.0, 200.0));

        // crop area outside the image falls back to the cover crop
        let outside = Rect::new(5000.0, 5000.0, 10.0, 10.0);
        assert_eq!(base_crop(1000, 500, Some(&outside), 1.0), resolve_crop(1000, 500, 1.0));
    }
}
