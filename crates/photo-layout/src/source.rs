//! Source images: upload validation, decoding and per-image transform state

use crate::constants::{MAX_UPLOAD_BYTES, MIN_IMAGE_DIMENSION_PX};
use crate::layout::{PanOffset, Rect, clamp_zoom};
use crate::types::*;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of an uploaded image
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageId(pub String);

impl ImageId {
    /// A process-unique id
    pub fn generate() -> Self {
        let n = NEXT_IMAGE_ID.fetch_add(1, Ordering::SeqCst);
        ImageId(format!("img-{}", n))
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decoded photo plus the user's pan/zoom/crop state for it
///
/// The pixel data is shared, so cloning an image is cheap.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub id: ImageId,
    pub pixels: Arc<DynamicImage>,
    pub natural_width: u32,
    pub natural_height: u32,
    /// Pan offset in slot-raster pixels
    pub position: PanOffset,
    /// Zoom factor, 0.5..=3.0
    pub zoom: f64,
    /// Optional user crop in source pixels; the cover crop is used when unset
    pub crop_area: Option<Rect>,
}

impl SourceImage {
    /// Wrap an already decoded image with a fresh id and no transform.
    pub fn from_decoded(pixels: DynamicImage) -> Self {
        let (natural_width, natural_height) = pixels.dimensions();
        Self {
            id: ImageId::generate(),
            pixels: Arc::new(pixels),
            natural_width,
            natural_height,
            position: PanOffset::default(),
            zoom: 1.0,
            crop_area: None,
        }
    }

    /// Validate and decode uploaded bytes.
    ///
    /// Checks run in order: size limit, format (JPEG or PNG only), decode,
    /// minimum dimensions.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(LayoutError::FileTooLarge {
                size: bytes.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let format = detect_format(bytes)?;
        let pixels = image::load_from_memory_with_format(bytes, format)?;

        let (width, height) = pixels.dimensions();
        if width < MIN_IMAGE_DIMENSION_PX || height < MIN_IMAGE_DIMENSION_PX {
            return Err(LayoutError::ImageTooSmall {
                width,
                height,
                min: MIN_IMAGE_DIMENSION_PX,
            });
        }

        Ok(Self::from_decoded(pixels))
    }

    pub fn with_position(mut self, position: PanOffset) -> Self {
        self.position = position;
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = clamp_zoom(zoom);
        self
    }

    pub fn with_crop_area(mut self, crop_area: Option<Rect>) -> Self {
        self.crop_area = crop_area;
        self
    }

    /// Width divided by height of the source pixels
    pub fn aspect_ratio(&self) -> f64 {
        self.natural_width as f64 / self.natural_height as f64
    }
}

/// Accept JPEG and PNG only, sniffed from the content rather than a file name
pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat> {
    match image::guess_format(bytes) {
        Ok(format @ (ImageFormat::Jpeg | ImageFormat::Png)) => Ok(format),
        _ => Err(LayoutError::UnsupportedFormat),
    }
}

/// Load and decode one image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || SourceImage::decode(&bytes)).await??;
    log::debug!(
        "Loaded {} as {} ({}x{})",
        path.display(),
        image.id,
        image.natural_width,
        image.natural_height
    );
    Ok(image)
}

/// Load several image files in parallel.
///
/// Results come back in the order of `paths` regardless of which decode
/// finishes first. A failing file only fails its own entry.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Vec<Result<SourceImage>> {
    let handles: Vec<_> = paths
        .iter()
        .map(|path| {
            let path = path.as_ref().to_owned();
            tokio::spawn(async move { load_image(path).await })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (handle, path) in handles.into_iter().zip(paths) {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(LayoutError::TaskJoin(e)),
        };
        if let Err(e) = &result {
            log::warn!("Rejected {}: {}", path.as_ref().display(), e);
        }
        results.push(result);
    }
    results
}
