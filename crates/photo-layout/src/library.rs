//! Ordered image list with a current selection
//!
//! The library owns both the images and the "current image" reference, so
//! every mutation keeps the selection valid: it is `None` only when the
//! library is empty.

use crate::layout::{PanOffset, Rect, clamp_zoom};
use crate::source::{ImageId, SourceImage};
use crate::types::*;

#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    images: Vec<SourceImage>,
    selected: Option<ImageId>,
}

impl ImageLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[SourceImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, id: &ImageId) -> Option<&SourceImage> {
        self.images.iter().find(|img| &img.id == id)
    }

    pub fn selected_id(&self) -> Option<&ImageId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&SourceImage> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn select(&mut self, id: &ImageId) -> Result<()> {
        if self.get(id).is_none() {
            return Err(LayoutError::ImageNotFound(id.0.clone()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    /// Append images in the given order. The first added image becomes the
    /// selection when nothing is selected yet.
    pub fn add(&mut self, images: impl IntoIterator<Item = SourceImage>) {
        for image in images {
            if self.selected.is_none() {
                self.selected = Some(image.id.clone());
            }
            self.images.push(image);
        }
    }

    /// Remove an image. If it was selected, the first remaining image is
    /// selected instead (or nothing, when the library is now empty).
    pub fn remove(&mut self, id: &ImageId) -> Result<SourceImage> {
        let idx = self.index_of(id)?;
        let removed = self.images.remove(idx);

        if self.selected.as_ref() == Some(id) {
            self.selected = self.images.first().map(|img| img.id.clone());
        }

        Ok(removed)
    }

    /// Move the image at `from` so it ends up at index `to` (drag reorder).
    pub fn move_image(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.images.len() || to >= self.images.len() {
            return Err(LayoutError::Config(format!(
                "Cannot move image {} to {} in a list of {}",
                from,
                to,
                self.images.len()
            )));
        }
        let image = self.images.remove(from);
        self.images.insert(to, image);
        Ok(())
    }

    pub fn set_position(&mut self, id: &ImageId, position: PanOffset) -> Result<()> {
        self.get_mut(id)?.position = position;
        Ok(())
    }

    /// Set the zoom, clamped to the supported range
    pub fn set_zoom(&mut self, id: &ImageId, zoom: f64) -> Result<()> {
        self.get_mut(id)?.zoom = clamp_zoom(zoom);
        Ok(())
    }

    pub fn set_crop_area(&mut self, id: &ImageId, crop_area: Option<Rect>) -> Result<()> {
        self.get_mut(id)?.crop_area = crop_area;
        Ok(())
    }

    fn index_of(&self, id: &ImageId) -> Result<usize> {
        self.images
            .iter()
            .position(|img| &img.id == id)
            .ok_or_else(|| LayoutError::ImageNotFound(id.0.clone()))
    }

    fn get_mut(&mut self, id: &ImageId) -> Result<&mut SourceImage> {
        let idx = self.index_of(id)?;
        Ok(&mut self.images[idx])
    }
}
