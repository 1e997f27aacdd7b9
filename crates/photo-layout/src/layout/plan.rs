//! Page planning
//!
//! Combines the slot grid, slot resolution and crop resolution into the
//! full list of pages and slots that the compositor renders and a preview
//! displays.

use crate::constants::RASTER_PX_PER_MM;
use crate::sizes::PhysicalSize;
use crate::source::SourceImage;

use super::{
    LayoutGeometry, PagePlan, PlannedSlot, base_crop, page_count, resolve_slot_index, sample_slot,
    slot_frame, slot_positions,
};

/// Pixel size of the intermediate raster for one photo slot (10 px per mm)
pub fn raster_dimensions(photo: &PhysicalSize) -> (u32, u32) {
    let to_px = |mm: f64| ((mm * RASTER_PX_PER_MM).round() as u32).max(1);
    (to_px(photo.width_mm), to_px(photo.height_mm))
}

/// Plan every page of the document.
///
/// Returns an empty plan when there are no images or the layout has no
/// capacity.
pub fn plan_pages(
    images: &[SourceImage],
    geometry: &LayoutGeometry,
    photo: &PhysicalSize,
    paper: &PhysicalSize,
) -> Vec<PagePlan> {
    let pages = page_count(images.len(), geometry);
    if pages == 0 {
        return Vec::new();
    }

    let (raster_w, raster_h) = raster_dimensions(photo);
    let target_ratio = photo.aspect_ratio();

    let mut plans: Vec<PagePlan> = (0..pages)
        .map(|index| PagePlan {
            index,
            slots: Vec::with_capacity(geometry.slots_per_page),
        })
        .collect();

    for pos in slot_positions(images.len(), geometry) {
        let Some(image_index) = resolve_slot_index(images.len(), geometry, pos) else {
            continue;
        };
        let image = &images[image_index];

        let base = base_crop(
            image.natural_width,
            image.natural_height,
            image.crop_area.as_ref(),
            target_ratio,
        );
        let sample = sample_slot(
            image.natural_width,
            image.natural_height,
            &base,
            image.position,
            image.zoom,
            raster_w,
            raster_h,
        );

        plans[pos.page].slots.push(PlannedSlot {
            position: pos,
            frame_mm: slot_frame(geometry, photo, paper, pos.row, pos.col),
            image_index,
            sample,
        });
    }

    log::debug!(
        "Planned {} page(s) of {} slot(s) for {} image(s)",
        pages,
        geometry.slots_per_page,
        images.len()
    );

    plans
}
