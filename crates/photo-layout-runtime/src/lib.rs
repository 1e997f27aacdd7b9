use std::path::PathBuf;

mod session;
mod worker;

pub use session::Session;
pub use worker::worker_task;

// Re-export types from the layout library
pub use photo_layout::{
    Background, ImageId, LayoutGeometry, LayoutMode, LayoutOptions, LayoutOverrides,
    LayoutStatistics, PanOffset, PhysicalSize, PreviewPage, Rect, SizeId, SizeKind,
};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PhotoCommand {
    LoadImages {
        paths: Vec<PathBuf>,
    },
    RemoveImage {
        id: ImageId,
    },
    SelectImage {
        id: ImageId,
    },
    MoveImage {
        from: usize,
        to: usize,
    },
    SetImageTransform {
        id: ImageId,
        position: PanOffset,
        zoom: f64,
    },
    SetCropArea {
        id: ImageId,
        crop_area: Option<Rect>,
    },
    SelectSize {
        kind: SizeKind,
        id: SizeId,
    },
    AddCustomSize {
        kind: SizeKind,
        width_mm: f64,
        height_mm: f64,
    },
    DeleteCustomSize {
        kind: SizeKind,
        id: SizeId,
    },
    SetMode {
        mode: LayoutMode,
    },
    SetOverrides {
        overrides: LayoutOverrides,
    },
    SetBackground {
        background: Background,
    },
    LoadConfig {
        path: PathBuf,
    },
    SaveConfig {
        path: PathBuf,
    },
    GeneratePreview,
    CalculateStats,
    /// Export the document. Without a path the mode's conventional file
    /// name is used.
    Export {
        output_path: Option<PathBuf>,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PhotoUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    ImagesLoaded {
        added: Vec<ImageId>,
        rejected: Vec<(PathBuf, String)>,
    },
    LibraryChanged {
        images: Vec<ImageId>,
        selected: Option<ImageId>,
    },
    SizesChanged {
        kind: SizeKind,
        sizes: Vec<PhysicalSize>,
        selected: SizeId,
    },
    LayoutChanged {
        geometry: LayoutGeometry,
    },
    PreviewGenerated {
        pages: Vec<PreviewPage>,
    },
    StatsCalculated {
        stats: LayoutStatistics,
    },
    ConfigLoaded {
        options: LayoutOptions,
    },
    ConfigSaved {
        path: PathBuf,
    },
    ExportComplete {
        path: PathBuf,
        page_count: usize,
    },
    /// Export was requested but the layout has nothing to render
    NothingToExport {
        reason: String,
    },
    Error {
        message: String,
    },
}
