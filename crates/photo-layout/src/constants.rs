//! Shared constants for photo layout
//!
//! This module centralizes magic numbers and constants used throughout
//! layout calculation and page composition.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f64 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f64) -> f32 {
    (mm * POINTS_PER_MM) as f32
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Unprintable border reserved on every paper edge (mm). Not configurable.
pub const PAPER_MARGIN_MM: f64 = 10.0;

/// Default gap between grid slots (mm)
pub const DEFAULT_GRID_PADDING_MM: f64 = 2.0;

/// Default gap between photobooth slots (mm)
pub const DEFAULT_PHOTOBOOTH_PADDING_MM: f64 = 10.0;

/// Most slots a single page may hold. Grids beyond this (only reachable
/// through overrides) are treated as having no capacity.
pub const MAX_SLOTS_PER_PAGE: usize = 1024;

// =============================================================================
// Rasterization
// =============================================================================

/// Raster pixels per millimeter of printed photo (≈ 254 DPI)
pub const RASTER_PX_PER_MM: f64 = 10.0;

/// JPEG quality used for embedded slot rasters
pub const JPEG_QUALITY: u8 = 100;

// =============================================================================
// Borders
// =============================================================================

/// Dash length of grid cut guides (mm)
pub const DASH_LENGTH_MM: f64 = 2.0;

/// Gap between dashes of grid cut guides (mm)
pub const DASH_GAP_MM: f64 = 2.0;

/// Stroke width of slot borders (mm)
pub const BORDER_LINE_WIDTH_MM: f64 = 0.2;

// =============================================================================
// Image Transform
// =============================================================================

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;

// =============================================================================
// Uploads
// =============================================================================

/// Largest accepted upload in bytes (10MB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Smallest accepted decoded width and height in pixels
pub const MIN_IMAGE_DIMENSION_PX: u32 = 100;
