use image::{DynamicImage, Rgb, RgbImage};
use lopdf::{Document, Object, ObjectId};
use photo_layout::*;

fn test_images(count: usize) -> Vec<SourceImage> {
    (0..count)
        .map(|i| {
            let shade = (i * 40 % 256) as u8;
            let img = RgbImage::from_pixel(200, 150, Rgb([shade, 128, 255 - shade]));
            SourceImage::from_decoded(DynamicImage::ImageRgb8(img))
        })
        .collect()
}

fn custom_photo(width_mm: f64, height_mm: f64) -> PhysicalSize {
    SizeRegistry::photo_sizes()
        .add_custom(width_mm, height_mm)
        .unwrap()
        .clone()
}

fn custom_paper(width_mm: f64, height_mm: f64) -> PhysicalSize {
    SizeRegistry::paper_sizes()
        .add_custom(width_mm, height_mm)
        .unwrap()
        .clone()
}

fn a4() -> PhysicalSize {
    SizeRegistry::paper_sizes().find_by_label("A4").unwrap().clone()
}

fn reload(doc: Document) -> Document {
    let mut doc = doc;
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    Document::load_mem(&bytes).unwrap()
}

fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

fn page_content(doc: &Document, page_id: ObjectId) -> String {
    String::from_utf8(doc.get_page_content(page_id).unwrap()).unwrap()
}

fn image_xobject_count(doc: &Document) -> usize {
    doc.objects
        .values()
        .filter(|obj| match obj {
            Object::Stream(stream) => {
                matches!(stream.dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Image")
            }
            _ => false,
        })
        .count()
}

fn compose(
    images: &[SourceImage],
    photo: &PhysicalSize,
    paper: &PhysicalSize,
    mode: LayoutMode,
    background: Background,
) -> Option<Document> {
    let geometry = calculate_layout(photo, paper, mode, &LayoutOverrides::default());
    compose_document(images, &geometry, photo, paper, background).unwrap()
}

#[test]
fn test_single_page_grid() {
    let images = test_images(3);
    let photo = custom_photo(35.0, 45.0);
    let paper = a4();

    let doc = compose(&images, &photo, &paper, LayoutMode::grid(), Background::White);
    let doc = reload(doc.unwrap());
    let pages = page_ids(&doc);
    assert_eq!(pages.len(), 1);

    // Each distinct image is embedded once, however many slots show it
    assert_eq!(image_xobject_count(&doc), 3);

    // 25 slots, each drawn with one image placement
    let content = page_content(&doc, pages[0]);
    assert_eq!(content.matches(" Do Q").count(), 25);
}

#[test]
fn test_page_size_matches_paper() {
    let images = test_images(1);
    let photo = custom_photo(35.0, 45.0);
    let paper = a4();

    let doc = compose(&images, &photo, &paper, LayoutMode::grid(), Background::White);
    let doc = reload(doc.unwrap());
    let page = doc.get_dictionary(page_ids(&doc)[0]).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let number = |obj: &Object| match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        other => panic!("Expected a number, got {:?}", other),
    };
    let width = number(&media_box[2]);
    let height = number(&media_box[3]);

    assert!((width - 595.276).abs() < 0.1);
    assert!((height - 841.89).abs() < 0.1);
}

#[test]
fn test_grid_paginates() {
    // 30×30 photo on 60×60 paper: a single slot per page
    let images = test_images(5);
    let photo = custom_photo(30.0, 30.0);
    let paper = custom_paper(60.0, 60.0);

    let doc = compose(&images, &photo, &paper, LayoutMode::grid(), Background::White);
    let doc = reload(doc.unwrap());
    assert_eq!(page_ids(&doc).len(), 5);
    assert_eq!(image_xobject_count(&doc), 5);
}

#[test]
fn test_photobooth_is_single_page() {
    let images = test_images(6);
    let photo = custom_photo(40.0, 40.0);
    let paper = a4();
    let mode = LayoutMode::photobooth(PhotoboothTemplate::Classic);

    let doc = reload(compose(&images, &photo, &paper, mode, Background::White).unwrap());
    let pages = page_ids(&doc);
    assert_eq!(pages.len(), 1);

    // Only the first 4 images fit the classic template
    assert_eq!(image_xobject_count(&doc), 4);

    // Solid borders: 4 strokes per slot
    let content = page_content(&doc, pages[0]);
    assert_eq!(content.matches(" l S").count(), 16);
}

#[test]
fn test_black_background() {
    let images = test_images(1);
    let photo = custom_photo(30.0, 30.0);
    let paper = custom_paper(60.0, 60.0);

    let doc = compose(&images, &photo, &paper, LayoutMode::grid(), Background::Black);
    let doc = reload(doc.unwrap());
    let content = page_content(&doc, page_ids(&doc)[0]);

    assert!(content.starts_with("q 0 g 0 0 "));
    assert!(content.contains("\n1 G\n"));
}

#[test]
fn test_white_background_has_no_fill() {
    let images = test_images(1);
    let photo = custom_photo(30.0, 30.0);
    let paper = custom_paper(60.0, 60.0);

    let doc = compose(&images, &photo, &paper, LayoutMode::grid(), Background::White);
    let doc = reload(doc.unwrap());
    let content = page_content(&doc, page_ids(&doc)[0]);

    assert!(!content.contains(" re f"));
    assert!(content.contains("\n0 G\n"));
}

#[test]
fn test_nothing_to_render() {
    let photo = custom_photo(35.0, 45.0);
    let paper = a4();
    assert!(compose(&[], &photo, &paper, LayoutMode::grid(), Background::White).is_none());

    // Photo larger than the printable area
    let huge = custom_photo(500.0, 500.0);
    let images = test_images(2);
    assert!(compose(&images, &huge, &paper, LayoutMode::grid(), Background::White).is_none());
}

#[test]
fn test_check_renderable() {
    let geometry = LayoutGeometry::new(2, 2, 2.0, LayoutMode::grid());
    assert!(check_renderable(1, &geometry).is_ok());
    assert!(matches!(check_renderable(0, &geometry), Err(LayoutError::EmptyImageSet)));

    let empty = LayoutGeometry::new(0, 3, 2.0, LayoutMode::grid());
    assert!(matches!(check_renderable(4, &empty), Err(LayoutError::ZeroCapacityLayout)));
}

#[tokio::test]
async fn test_render_and_save() {
    use tempfile::NamedTempFile;

    let images = test_images(2);
    let photo = custom_photo(30.0, 30.0);
    let paper = custom_paper(60.0, 60.0);
    let geometry =
        calculate_layout(&photo, &paper, LayoutMode::grid(), &LayoutOverrides::default());

    let doc = render(&images, &geometry, &photo, &paper, Background::White)
        .await
        .unwrap()
        .unwrap();

    let temp = NamedTempFile::new().unwrap();
    save_pdf(doc, temp.path()).await.unwrap();

    let bytes = std::fs::read(temp.path()).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7"));
    let loaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(loaded.get_pages().len(), 2);
}

#[tokio::test]
async fn test_render_empty_is_none() {
    let photo = custom_photo(30.0, 30.0);
    let paper = custom_paper(60.0, 60.0);
    let geometry =
        calculate_layout(&photo, &paper, LayoutMode::grid(), &LayoutOverrides::default());

    let doc = render(&[], &geometry, &photo, &paper, Background::White).await.unwrap();
    assert!(doc.is_none());
}
