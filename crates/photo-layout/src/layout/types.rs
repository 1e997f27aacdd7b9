//! Layout data types
//!
//! These types represent the intermediate layout calculations between
//! the layout calculator and PDF rendering.

use crate::constants::MAX_SLOTS_PER_PAGE;
use crate::types::LayoutMode;

/// Slot grid computed for one photo size / paper size / mode combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    /// Number of slots across the page (0 when the photo doesn't fit)
    pub photos_per_row: usize,
    /// Number of slot rows (0 when the photo doesn't fit)
    pub rows: usize,
    /// Always `photos_per_row * rows`, at most [`MAX_SLOTS_PER_PAGE`]
    ///
    /// [`MAX_SLOTS_PER_PAGE`]: crate::constants::MAX_SLOTS_PER_PAGE
    pub slots_per_page: usize,
    /// Gap between adjacent slots in mm
    pub padding_mm: f64,
    /// The mode this geometry was computed for
    pub mode: LayoutMode,
}

impl LayoutGeometry {
    /// Grids whose slot count overflows or exceeds [`MAX_SLOTS_PER_PAGE`]
    /// collapse to zero capacity.
    pub fn new(photos_per_row: usize, rows: usize, padding_mm: f64, mode: LayoutMode) -> Self {
        let (photos_per_row, rows, slots_per_page) = match photos_per_row.checked_mul(rows) {
            Some(slots) if slots <= MAX_SLOTS_PER_PAGE => (photos_per_row, rows, slots),
            _ => {
                log::warn!(
                    "{} × {} slots per page exceeds the limit of {}, nothing fits",
                    photos_per_row,
                    rows,
                    MAX_SLOTS_PER_PAGE
                );
                (0, 0, 0)
            }
        };
        Self {
            photos_per_row,
            rows,
            slots_per_page,
            padding_mm,
            mode,
        }
    }

    /// True when no slot fits on the page
    pub fn is_empty(&self) -> bool {
        self.slots_per_page == 0
    }

    /// Width of the slot block in mm
    pub fn block_width_mm(&self, photo_width_mm: f64) -> f64 {
        block_extent(self.photos_per_row, photo_width_mm, self.padding_mm)
    }

    /// Height of the slot block in mm
    pub fn block_height_mm(&self, photo_height_mm: f64) -> f64 {
        block_extent(self.rows, photo_height_mm, self.padding_mm)
    }
}

fn block_extent(count: usize, photo_mm: f64, padding_mm: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * photo_mm + (count - 1) as f64 * padding_mm
}

/// Position of a slot within the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotPosition {
    /// Page index (0 = first page)
    pub page: usize,
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl SlotPosition {
    pub fn new(page: usize, row: usize, col: usize) -> Self {
        Self { page, row, col }
    }
}

/// A rectangle with a top-left origin. Used both for source-image pixel
/// space and for millimeter positions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Overlap of two rectangles, `None` when they don't overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = Rect::new(x, y, right - x, bottom - y);
        if rect.is_empty() { None } else { Some(rect) }
    }
}

/// How one slot samples its source image
///
/// `window` is the (possibly out-of-bounds) region of the source that maps
/// onto the whole slot raster. `source` is that window clamped to the image,
/// and `dest` is where the clamped region lands inside the slot raster, in
/// raster pixels. A slot panned entirely off its image has no sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSample {
    pub window: Rect,
    pub source: Option<Rect>,
    pub dest: Option<Rect>,
}

/// One slot on a page, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSlot {
    pub position: SlotPosition,
    /// Slot frame on the page in mm, top-left origin
    pub frame_mm: Rect,
    /// Index into the image list
    pub image_index: usize,
    /// Crop sampled from the source image
    pub sample: SlotSample,
}

/// All slots of one output page
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub index: usize,
    pub slots: Vec<PlannedSlot>,
}
