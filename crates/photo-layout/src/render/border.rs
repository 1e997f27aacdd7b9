//! Slot border (cut guide) rendering
//!
//! Generates PDF content stream operations for the outline of a photo
//! slot: dashed guides for grid sheets, solid frames for photobooth
//! templates.

use crate::constants::{BORDER_LINE_WIDTH_MM, DASH_GAP_MM, DASH_LENGTH_MM, mm_to_pt};
use crate::layout::Rect;

/// Border style of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Discrete dash segments, computed independently per side
    Dashed,
    /// One continuous line per side
    Solid,
}

/// A line segment in mm, top-left page origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Dash offsets along one side of length `length_mm`: `(start, end)` pairs,
/// the last dash clipped at the side's end.
pub fn dash_ranges(length_mm: f64) -> Vec<(f64, f64)> {
    let step = DASH_LENGTH_MM + DASH_GAP_MM;
    let mut ranges = Vec::new();
    let mut i = 0.0;
    while i < length_mm {
        ranges.push((i, (i + DASH_LENGTH_MM).min(length_mm)));
        i += step;
    }
    ranges
}

/// Line segments outlining `frame`.
///
/// Dashed borders walk the top and bottom sides left to right and the left
/// and right sides top to bottom, so dashes at the corners may not meet.
pub fn border_segments(frame: &Rect, style: BorderStyle) -> Vec<Segment> {
    let (x, y, w, h) = (frame.x, frame.y, frame.width, frame.height);

    match style {
        BorderStyle::Solid => vec![
            Segment { x1: x, y1: y, x2: x + w, y2: y },
            Segment { x1: x, y1: y + h, x2: x + w, y2: y + h },
            Segment { x1: x, y1: y, x2: x, y2: y + h },
            Segment { x1: x + w, y1: y, x2: x + w, y2: y + h },
        ],
        BorderStyle::Dashed => {
            let mut segments = Vec::new();
            for (start, end) in dash_ranges(w) {
                segments.push(Segment { x1: x + start, y1: y, x2: x + end, y2: y });
                segments.push(Segment { x1: x + start, y1: y + h, x2: x + end, y2: y + h });
            }
            for (start, end) in dash_ranges(h) {
                segments.push(Segment { x1: x, y1: y + start, x2: x, y2: y + end });
                segments.push(Segment { x1: x + w, y1: y + start, x2: x + w, y2: y + end });
            }
            segments
        }
    }
}

/// Generate the stroke operations for a slot border.
///
/// `page_height_mm` flips the top-left layout coordinates into PDF's
/// bottom-left user space. `gray` is the stroke gray level.
pub fn generate_border(frame: &Rect, style: BorderStyle, gray: f32, page_height_mm: f64) -> String {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!("{} G\n", gray));
    ops.push_str(&format!("{} w\n", mm_to_pt(BORDER_LINE_WIDTH_MM)));
    ops.push_str("[] 0 d\n");

    for seg in border_segments(frame, style) {
        ops.push_str(&format!(
            "{} {} m {} {} l S\n",
            mm_to_pt(seg.x1),
            mm_to_pt(page_height_mm - seg.y1),
            mm_to_pt(seg.x2),
            mm_to_pt(page_height_mm - seg.y2)
        ));
    }

    ops.push_str("Q\n");

    ops
}
