//! Preview data
//!
//! A preview shows the same pages and slots as the exported document, but
//! a UI draws it from plain geometry instead of a rendered PDF.

use crate::layout::{LayoutGeometry, Rect, SlotPosition, plan_pages};
use crate::sizes::PhysicalSize;
use crate::source::{ImageId, SourceImage};

/// One slot of a preview page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewSlot {
    pub page: usize,
    pub row: usize,
    pub col: usize,
    /// Slot frame on the page in mm
    pub frame_mm: Rect,
    /// Slot frame as fractions of the paper width/height
    pub frame_fraction: Rect,
    /// The image shown in this slot
    pub image_id: ImageId,
    /// Source pixel region shown in the slot; `None` when panned fully off
    pub crop: Option<Rect>,
}

/// One preview page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewPage {
    pub index: usize,
    pub slots: Vec<PreviewSlot>,
}

/// Build the preview of every page
pub fn build_preview(
    images: &[SourceImage],
    geometry: &LayoutGeometry,
    photo: &PhysicalSize,
    paper: &PhysicalSize,
) -> Vec<PreviewPage> {
    plan_pages(images, geometry, photo, paper)
        .into_iter()
        .map(|plan| PreviewPage {
            index: plan.index,
            slots: plan
                .slots
                .into_iter()
                .map(|slot| {
                    let SlotPosition { page, row, col } = slot.position;
                    PreviewSlot {
                        page,
                        row,
                        col,
                        frame_mm: slot.frame_mm,
                        frame_fraction: to_fraction(&slot.frame_mm, paper),
                        image_id: images[slot.image_index].id.clone(),
                        crop: slot.sample.source,
                    }
                })
                .collect(),
        })
        .collect()
}

/// Number of pages needed to show `item_count` items `per_page` at a time.
/// Used for paginated thumbnail strips.
pub fn preview_page_count(item_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    item_count.div_ceil(per_page)
}

fn to_fraction(frame: &Rect, paper: &PhysicalSize) -> Rect {
    Rect::new(
        frame.x / paper.width_mm,
        frame.y / paper.height_mm,
        frame.width / paper.width_mm,
        frame.height / paper.height_mm,
    )
}
