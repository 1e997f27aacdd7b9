//! Output page rendering
//!
//! Builds one PDF page from a page plan: background fill, slot images at
//! their millimeter positions, and slot borders.

use crate::constants::mm_to_pt;
use crate::layout::{PagePlan, Rect, raster_dimensions};
use crate::sizes::PhysicalSize;
use crate::source::SourceImage;
use crate::types::{Background, LayoutMode, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::border::{BorderStyle, generate_border};
use super::xobject::create_image_xobject;

/// Everything that stays the same for all pages of one document
pub struct PageContext<'a> {
    pub images: &'a [SourceImage],
    pub photo: &'a PhysicalSize,
    pub paper: &'a PhysicalSize,
    pub mode: LayoutMode,
    pub background: Background,
}

impl PageContext<'_> {
    fn border_style(&self) -> BorderStyle {
        match self.mode {
            LayoutMode::Grid { .. } => BorderStyle::Dashed,
            LayoutMode::Photobooth { .. } => BorderStyle::Solid,
        }
    }
}

/// Render one planned page into `output`.
///
/// # Arguments
/// * `output` - The output document
/// * `ctx` - Images, sizes, mode and background of the document
/// * `plan` - Slots of this page in render order
/// * `parent_pages_id` - The parent Pages object ID
/// * `xobject_cache` - Image index to XObject, shared across pages
pub fn render_page(
    output: &mut Document,
    ctx: &PageContext<'_>,
    plan: &PagePlan,
    parent_pages_id: ObjectId,
    xobject_cache: &mut HashMap<usize, ObjectId>,
) -> Result<ObjectId> {
    let page_width_pt = mm_to_pt(ctx.paper.width_mm);
    let page_height_pt = mm_to_pt(ctx.paper.height_mm);

    // Create page dictionary
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width_pt),
            Object::Real(page_height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    if ctx.background == Background::Black {
        content_ops.push(format!(
            "q 0 g 0 0 {} {} re f Q\n",
            page_width_pt, page_height_pt
        ));
    }

    let raster_size = raster_dimensions(ctx.photo);
    let border_style = ctx.border_style();
    let border_gray = ctx.background.border_gray();

    for slot in &plan.slots {
        let image = &ctx.images[slot.image_index];

        let xobject_id = create_image_xobject(
            output,
            image,
            slot.image_index,
            &slot.sample,
            raster_size,
            ctx.background,
            xobject_cache,
        )?;
        let xobject_name = format!("Im{}", slot.image_index);
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(generate_placement_command(
            &xobject_name,
            &slot.frame_mm,
            ctx.paper.height_mm,
        ));
        content_ops.push(generate_border(
            &slot.frame_mm,
            border_style,
            border_gray,
            ctx.paper.height_mm,
        ));
    }

    // Set up resources
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    // Create content stream
    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Generate the content stream command that draws an image XObject
/// stretched over `frame_mm` (top-left origin).
fn generate_placement_command(xobject_name: &str, frame_mm: &Rect, page_height_mm: f64) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        mm_to_pt(frame_mm.width),
        mm_to_pt(frame_mm.height),
        mm_to_pt(frame_mm.x),
        mm_to_pt(page_height_mm - frame_mm.bottom()),
        xobject_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_command_flips_y() {
        let frame = Rect::new(10.0, 20.0, 30.0, 40.0);
        let cmd = generate_placement_command("Im0", &frame, 100.0);
        let expected = format!(
            "q {} 0 0 {} {} {} cm /Im0 Do Q\n",
            mm_to_pt(30.0),
            mm_to_pt(40.0),
            mm_to_pt(10.0),
            mm_to_pt(40.0)
        );
        assert_eq!(cmd, expected);
    }
}
