//! Page composition - turning a layout into a PDF document
//!
//! This module orchestrates the export:
//! 1. Plan pages and slots from the layout geometry
//! 2. Rasterize each distinct image once and embed it as JPEG
//! 3. Render every page with its borders
//! 4. Serialize the document

use crate::layout::{LayoutGeometry, plan_pages};
use crate::render::{PageContext, render_page};
use crate::sizes::PhysicalSize;
use crate::source::SourceImage;
use crate::types::*;
use lopdf::{Dictionary, Document, Object};
use std::collections::HashMap;
use std::path::Path;

/// Check that a layout would produce at least one page
pub fn check_renderable(image_count: usize, geometry: &LayoutGeometry) -> Result<()> {
    if image_count == 0 {
        return Err(LayoutError::EmptyImageSet);
    }
    if geometry.is_empty() {
        return Err(LayoutError::ZeroCapacityLayout);
    }
    Ok(())
}

/// Compose the output document on a background thread.
///
/// Returns `Ok(None)` when there is nothing to render (no images, or a
/// photo size that doesn't fit the paper).
pub async fn render(
    images: &[SourceImage],
    geometry: &LayoutGeometry,
    photo: &PhysicalSize,
    paper: &PhysicalSize,
    background: Background,
) -> Result<Option<Document>> {
    let images = images.to_vec();
    let geometry = *geometry;
    let photo = photo.clone();
    let paper = paper.clone();

    tokio::task::spawn_blocking(move || {
        compose_document(&images, &geometry, &photo, &paper, background)
    })
    .await?
}

/// Compose the output document.
///
/// Pages are produced in order, each filled row by row, left to right.
/// Returns `Ok(None)` when there is nothing to render.
pub fn compose_document(
    images: &[SourceImage],
    geometry: &LayoutGeometry,
    photo: &PhysicalSize,
    paper: &PhysicalSize,
    background: Background,
) -> Result<Option<Document>> {
    if let Err(e) = check_renderable(images.len(), geometry) {
        log::info!("Nothing to export: {}", e);
        return Ok(None);
    }

    let plans = plan_pages(images, geometry, photo, paper);
    let orientation = Orientation::for_dimensions(paper.width_mm, paper.height_mm);

    log::info!(
        "Composing {} {:?} page(s) on {} for {} image(s)",
        plans.len(),
        orientation,
        paper.label,
        images.len()
    );

    // Build output document
    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(plans.len());
    let mut xobject_cache = HashMap::new();

    let ctx = PageContext {
        images,
        photo,
        paper,
        mode: geometry.mode,
        background,
    };

    for plan in &plans {
        let page_id = render_page(&mut output, &ctx, plan, pages_tree_id, &mut xobject_cache)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(Some(output))
}

/// Serialize a document to PDF bytes
pub async fn pdf_bytes(mut doc: Document) -> Result<Vec<u8>> {
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, LayoutError>(writer)
    })
    .await??;
    Ok(bytes)
}

/// Save the composed document
pub async fn save_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = pdf_bytes(doc).await?;
    tokio::fs::write(&path, bytes).await?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
