//! PDF rendering modules
//!
//! This module handles all raster and PDF-specific operations:
//! - Rasterizing slots (crop, pan/zoom, resample)
//! - Creating JPEG Image XObjects
//! - Drawing slot borders
//! - Building output pages

mod border;
mod page;
mod raster;
mod xobject;

pub use border::{BorderStyle, Segment, border_segments, dash_ranges, generate_border};
pub use page::*;
pub use raster::{encode_jpeg, rasterize_slot};
pub use xobject::create_image_xobject;
