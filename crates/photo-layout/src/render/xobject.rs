//! Image XObject creation
//!
//! Each distinct source image is rasterized once per document and stored
//! as a JPEG Image XObject, which every slot showing that image then
//! references.

use crate::layout::SlotSample;
use crate::source::SourceImage;
use crate::types::{Background, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::raster::{encode_jpeg, rasterize_slot};

// =============================================================================
// XObject Creation
// =============================================================================

/// Create (or reuse) the Image XObject for `image_index`.
///
/// A slot's raster only depends on the image and the photo size, so the
/// cache is keyed by image index and is valid for one document.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `image` - The source image
/// * `image_index` - Index of the image in the image list (cache key)
/// * `sample` - How the slot samples the image
/// * `raster_size` - Raster dimensions in pixels
/// * `background` - Fill for raster area the image doesn't cover
/// * `cache` - Image index to XObject id
pub fn create_image_xobject(
    output: &mut Document,
    image: &SourceImage,
    image_index: usize,
    sample: &SlotSample,
    raster_size: (u32, u32),
    background: Background,
    cache: &mut HashMap<usize, ObjectId>,
) -> Result<ObjectId> {
    if let Some(&id) = cache.get(&image_index) {
        return Ok(id);
    }

    let (width, height) = raster_size;
    let raster = rasterize_slot(&image.pixels, sample, width, height, background);
    let jpeg = encode_jpeg(&raster)?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(i64::from(width)));
    dict.set("Height", Object::Integer(i64::from(height)));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    let id = output.add_object(Stream::new(dict, jpeg).with_compression(false));
    cache.insert(image_index, id);

    log::debug!("Embedded {} as {}x{} JPEG", image.id, width, height);

    Ok(id)
}
