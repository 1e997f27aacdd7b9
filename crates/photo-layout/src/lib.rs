pub mod compose;
pub mod constants;
pub mod layout;
mod library;
mod options;
mod preview;
pub mod render;
pub mod sizes;
mod source;
mod stats;
mod types;

pub use compose::{check_renderable, compose_document, pdf_bytes, render, save_pdf};
pub use layout::{
    LayoutGeometry, PagePlan, PanOffset, Rect, SlotPosition, calculate_layout, plan_pages,
    resolve_crop, resolve_slot, resolve_slot_index,
};
pub use library::ImageLibrary;
pub use options::*;
pub use preview::{PreviewPage, PreviewSlot, build_preview, preview_page_count};
pub use sizes::{PhysicalSize, SizeId, SizeKind, SizeRegistry};
pub use source::{ImageId, SourceImage, detect_format, load_image, load_images};
pub use stats::calculate_statistics;
pub use types::*;
