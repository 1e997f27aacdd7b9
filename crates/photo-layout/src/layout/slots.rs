//! Slot-to-image resolution
//!
//! Decides which source image fills each slot. Grid layouts cycle through
//! the image list and paginate once the images outnumber one page's slots.
//! Photobooth layouts are a single page with a template-specific policy.

use crate::types::{LayoutMode, PhotoboothTemplate};

use super::{LayoutGeometry, SlotPosition};

// =============================================================================
// Pagination
// =============================================================================

/// Number of output pages for `image_count` images.
///
/// Grid mode needs `ceil(image_count / slots_per_page)` pages; photobooth
/// templates always produce exactly one. Zero when nothing can be rendered.
pub fn page_count(image_count: usize, geometry: &LayoutGeometry) -> usize {
    if image_count == 0 || geometry.is_empty() {
        return 0;
    }
    match geometry.mode {
        LayoutMode::Grid { .. } => image_count.div_ceil(geometry.slots_per_page),
        LayoutMode::Photobooth { .. } => 1,
    }
}

/// Whether the images spill over more than one page
pub fn is_paginated(image_count: usize, geometry: &LayoutGeometry) -> bool {
    page_count(image_count, geometry) > 1
}

// =============================================================================
// Selection Policies
// =============================================================================

/// Plain cyclic selection: `index mod count`
pub fn cyclic_index(index: usize, count: usize) -> usize {
    index % count
}

/// Cyclic selection that rotates each wrap of the image list by one more
/// position, so repeats on later pages don't line up with earlier ones.
///
/// `offset = floor(index / count) mod count`, result `(index + offset) mod count`.
/// This is a best-effort heuristic; it does not guarantee that adjacent
/// slots never show the same image.
pub fn rotated_index(index: usize, count: usize) -> usize {
    let offset = (index / count) % count;
    (index + offset) % count
}

/// Repeat the last image once the list is exhausted
pub fn clamped_index(index: usize, count: usize) -> usize {
    index.min(count - 1)
}

// =============================================================================
// Slot Resolution
// =============================================================================

/// Index of the image that fills the slot at `pos`, or `None` when the slot
/// is empty (no images, zero-capacity layout, or a position outside the grid).
pub fn resolve_slot_index(
    image_count: usize,
    geometry: &LayoutGeometry,
    pos: SlotPosition,
) -> Option<usize> {
    if image_count == 0
        || geometry.is_empty()
        || pos.row >= geometry.rows
        || pos.col >= geometry.photos_per_row
    {
        return None;
    }

    let local = pos.row * geometry.photos_per_row + pos.col;

    match geometry.mode {
        LayoutMode::Grid { .. } => {
            let index = pos.page * geometry.slots_per_page + local;
            if is_paginated(image_count, geometry) {
                Some(rotated_index(index, image_count))
            } else {
                Some(cyclic_index(index, image_count))
            }
        }
        LayoutMode::Photobooth { template, .. } => match template {
            PhotoboothTemplate::Classic | PhotoboothTemplate::Strips => {
                Some(clamped_index(local, image_count))
            }
            PhotoboothTemplate::Collage => Some(cyclic_index(local, image_count)),
        },
    }
}

/// The image that fills the slot at (page, row, col)
pub fn resolve_slot<'a, T>(
    images: &'a [T],
    geometry: &LayoutGeometry,
    page: usize,
    row: usize,
    col: usize,
) -> Option<&'a T> {
    resolve_slot_index(images.len(), geometry, SlotPosition::new(page, row, col))
        .map(|idx| &images[idx])
}

/// Every slot of every page in render order (page → row → column)
pub fn slot_positions(image_count: usize, geometry: &LayoutGeometry) -> Vec<SlotPosition> {
    let pages = page_count(image_count, geometry);
    let mut positions = Vec::with_capacity(pages * geometry.slots_per_page);
    for page in 0..pages {
        for row in 0..geometry.rows {
            for col in 0..geometry.photos_per_row {
                positions.push(SlotPosition::new(page, row, col));
            }
        }
    }
    positions
}

// =============================================================================
// Tests
// =============================================================================
