//! Layout calculation
//!
//! Maps a photo size, paper size and layout mode to a slot grid, and
//! positions that grid centered inside the printable area of the page.

use crate::constants::PAPER_MARGIN_MM;
use crate::sizes::PhysicalSize;
use crate::types::{LayoutMode, LayoutOverrides};

use super::{LayoutGeometry, Rect};

// =============================================================================
// Grid Creation
// =============================================================================

/// Compute the slot grid for a photo size on a paper size.
///
/// Grid mode fits `N` photos with `N - 1` gaps into the printable width
/// (`N * (w + p) - p <= printable`), i.e. `floor((printable + p) / (w + p))`,
/// and the same vertically. Photobooth mode uses the template's fixed grid.
///
/// Overrides replace the computed values verbatim. They are not checked
/// against the printable area, so unreasonable values produce slots that
/// overlap or run off the page.
pub fn calculate_layout(
    photo: &PhysicalSize,
    paper: &PhysicalSize,
    mode: LayoutMode,
    overrides: &LayoutOverrides,
) -> LayoutGeometry {
    let padding_mm = overrides.custom_padding_mm.unwrap_or(mode.padding_mm());

    let (computed_cols, computed_rows) = match mode {
        LayoutMode::Grid { .. } => {
            let (printable_w, printable_h) = printable_area(paper);
            (
                fit_count(printable_w, photo.width_mm, padding_mm),
                fit_count(printable_h, photo.height_mm, padding_mm),
            )
        }
        LayoutMode::Photobooth { template, .. } => template.grid_dimensions(),
    };

    let (photos_per_row, rows) = if mode.is_photobooth() {
        (computed_cols, computed_rows)
    } else {
        (
            overrides.custom_photos_per_row.unwrap_or(computed_cols),
            overrides.custom_rows.unwrap_or(computed_rows),
        )
    };

    let mode = match mode {
        LayoutMode::Grid { .. } => LayoutMode::Grid { padding_mm },
        LayoutMode::Photobooth { template, .. } => LayoutMode::Photobooth {
            template,
            padding_mm,
        },
    };

    log::debug!(
        "Layout {}×{}mm on {}×{}mm: {} per row, {} rows, {}mm padding",
        photo.width_mm,
        photo.height_mm,
        paper.width_mm,
        paper.height_mm,
        photos_per_row,
        rows,
        padding_mm
    );

    LayoutGeometry::new(photos_per_row, rows, padding_mm, mode)
}

/// Paper dimensions minus the fixed margin on every side
pub fn printable_area(paper: &PhysicalSize) -> (f64, f64) {
    (
        paper.width_mm - 2.0 * PAPER_MARGIN_MM,
        paper.height_mm - 2.0 * PAPER_MARGIN_MM,
    )
}

/// How many photos of `photo_mm` separated by `padding_mm` fit in `available_mm`.
/// Never negative.
fn fit_count(available_mm: f64, photo_mm: f64, padding_mm: f64) -> usize {
    let count = ((available_mm + padding_mm) / (photo_mm + padding_mm)).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

// =============================================================================
// Slot Frames
// =============================================================================

/// Top-left corner of the slot block, centered inside the printable area.
pub fn block_origin(
    geometry: &LayoutGeometry,
    photo: &PhysicalSize,
    paper: &PhysicalSize,
) -> (f64, f64) {
    let (printable_w, printable_h) = printable_area(paper);
    let margin_x = PAPER_MARGIN_MM + (printable_w - geometry.block_width_mm(photo.width_mm)) / 2.0;
    let margin_y =
        PAPER_MARGIN_MM + (printable_h - geometry.block_height_mm(photo.height_mm)) / 2.0;
    (margin_x, margin_y)
}

/// Frame of the slot at (row, col) in mm, top-left origin.
pub fn slot_frame(
    geometry: &LayoutGeometry,
    photo: &PhysicalSize,
    paper: &PhysicalSize,
    row: usize,
    col: usize,
) -> Rect {
    let (origin_x, origin_y) = block_origin(geometry, photo, paper);
    Rect::new(
        origin_x + col as f64 * (photo.width_mm + geometry.padding_mm),
        origin_y + row as f64 * (photo.height_mm + geometry.padding_mm),
        photo.width_mm,
        photo.height_mm,
    )
}

// =============================================================================
// Tests
// =============================================================================
