use crate::constants::MAX_SLOTS_PER_PAGE;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid dimensions: {width}×{height}mm (both must be greater than zero)")]
    InvalidDimension { width: f64, height: f64 },
    #[error("Size '{0}' is built in and cannot be removed")]
    NotCustom(String),
    #[error("Size {0} not found")]
    SizeNotFound(u64),
    #[error("Unsupported image format (only JPEG and PNG are accepted)")]
    UnsupportedFormat,
    #[error("File is {size} bytes, exceeding the {limit} byte size limit")]
    FileTooLarge { size: usize, limit: usize },
    #[error("Image dimensions must be at least {min}x{min} pixels (got {width}x{height})")]
    ImageTooSmall { width: u32, height: u32, min: u32 },
    #[error("Image '{0}' not found")]
    ImageNotFound(String),
    #[error("No images to lay out")]
    EmptyImageSet,
    #[error("Photo size does not fit on the printable area of the paper")]
    ZeroCapacityLayout,
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Paper orientation, derived from the paper dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    pub fn for_dimensions(width_mm: f64, height_mm: f64) -> Self {
        if width_mm > height_mm {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Page background colour of the exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Background {
    #[default]
    White,
    Black,
}

impl Background {
    /// RGB fill colour of the page and of uncovered slot area
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Background::White => [255, 255, 255],
            Background::Black => [0, 0, 0],
        }
    }

    /// Gray level (0.0 = black, 1.0 = white) of borders drawn on this background
    pub fn border_gray(self) -> f32 {
        match self {
            Background::White => 0.0,
            Background::Black => 1.0,
        }
    }
}

/// Fixed photobooth slot grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PhotoboothTemplate {
    /// 2 columns × 2 rows
    #[default]
    Classic,
    /// 1 column × 4 rows
    Strips,
    /// 3 columns × 2 rows
    Collage,
}

impl PhotoboothTemplate {
    /// Grid dimensions as (photos per row, rows)
    pub fn grid_dimensions(self) -> (usize, usize) {
        match self {
            PhotoboothTemplate::Classic => (2, 2),
            PhotoboothTemplate::Strips => (1, 4),
            PhotoboothTemplate::Collage => (3, 2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhotoboothTemplate::Classic => "Classic",
            PhotoboothTemplate::Strips => "Strips",
            PhotoboothTemplate::Collage => "Collage",
        }
    }
}

/// How slots are arranged on a page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// As many photos as fit the printable area, dashed cut guides
    Grid { padding_mm: f64 },
    /// Fixed template grid on a single page, solid borders
    Photobooth {
        template: PhotoboothTemplate,
        padding_mm: f64,
    },
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::grid()
    }
}

impl LayoutMode {
    /// Grid mode with the default 2mm padding
    pub fn grid() -> Self {
        LayoutMode::Grid {
            padding_mm: crate::constants::DEFAULT_GRID_PADDING_MM,
        }
    }

    /// Photobooth mode with the default 10mm padding
    pub fn photobooth(template: PhotoboothTemplate) -> Self {
        LayoutMode::Photobooth {
            template,
            padding_mm: crate::constants::DEFAULT_PHOTOBOOTH_PADDING_MM,
        }
    }

    pub fn padding_mm(&self) -> f64 {
        match *self {
            LayoutMode::Grid { padding_mm } | LayoutMode::Photobooth { padding_mm, .. } => {
                padding_mm
            }
        }
    }

    pub fn is_photobooth(&self) -> bool {
        matches!(self, LayoutMode::Photobooth { .. })
    }

    /// Conventional file name for documents exported in this mode
    pub fn output_file_name(&self) -> &'static str {
        match self {
            LayoutMode::Grid { .. } => "photo-layout.pdf",
            LayoutMode::Photobooth { .. } => "photobooth.pdf",
        }
    }
}

/// Manual layout overrides. Present values replace computed ones verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOverrides {
    pub custom_padding_mm: Option<f64>,
    pub custom_photos_per_row: Option<usize>,
    pub custom_rows: Option<usize>,
}

impl LayoutOverrides {
    pub fn is_empty(&self) -> bool {
        self.custom_padding_mm.is_none()
            && self.custom_photos_per_row.is_none()
            && self.custom_rows.is_none()
    }

    /// Reject padding that isn't a finite non-negative length and slot
    /// counts of zero or beyond [`MAX_SLOTS_PER_PAGE`] per page.
    pub fn validate(&self) -> Result<()> {
        if let Some(padding) = self.custom_padding_mm {
            if !padding.is_finite() || padding < 0.0 {
                return Err(LayoutError::Config(format!(
                    "Padding must be zero or positive, got {}mm",
                    padding
                )));
            }
        }

        let cols = self.custom_photos_per_row.unwrap_or(1);
        let rows = self.custom_rows.unwrap_or(1);
        if cols == 0 || rows == 0 {
            return Err(LayoutError::Config(
                "Photos per row and rows overrides must be at least 1".to_string(),
            ));
        }
        match cols.checked_mul(rows) {
            Some(slots) if slots <= MAX_SLOTS_PER_PAGE => Ok(()),
            _ => Err(LayoutError::Config(format!(
                "At most {} photos fit on a page, got {} per row and {} rows",
                MAX_SLOTS_PER_PAGE, cols, rows
            ))),
        }
    }
}

/// Statistics about a layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Number of source images
    pub image_count: usize,
    /// Photos per row on each page
    pub photos_per_row: usize,
    /// Rows on each page
    pub rows: usize,
    /// Slots on each page
    pub slots_per_page: usize,
    /// Number of output pages
    pub pages: usize,
    /// Slots filled across all pages
    pub filled_slots: usize,
    /// Distinct images that appear in the output
    pub distinct_images: usize,
    /// Slots showing an image that already appeared earlier in the document
    pub repeated_slots: usize,
    /// Orientation of the output pages
    pub orientation: Orientation,
}
