use crate::compose::check_renderable;
use crate::layout::{LayoutGeometry, page_count, resolve_slot_index, slot_positions};
use crate::sizes::PhysicalSize;
use crate::types::*;
use std::collections::HashSet;

/// Calculate statistics for a layout without rendering it
pub fn calculate_statistics(
    image_count: usize,
    geometry: &LayoutGeometry,
    paper: &PhysicalSize,
) -> Result<LayoutStatistics> {
    check_renderable(image_count, geometry)?;

    let pages = page_count(image_count, geometry);

    // Resolve every slot so repeats reflect the actual selection policy
    let mut seen = HashSet::new();
    let mut filled_slots = 0;
    for pos in slot_positions(image_count, geometry) {
        if let Some(idx) = resolve_slot_index(image_count, geometry, pos) {
            filled_slots += 1;
            seen.insert(idx);
        }
    }
    let distinct_images = seen.len();

    Ok(LayoutStatistics {
        image_count,
        photos_per_row: geometry.photos_per_row,
        rows: geometry.rows,
        slots_per_page: geometry.slots_per_page,
        pages,
        filled_slots,
        distinct_images,
        repeated_slots: filled_slots - distinct_images,
        orientation: Orientation::for_dimensions(paper.width_mm, paper.height_mm),
    })
}
