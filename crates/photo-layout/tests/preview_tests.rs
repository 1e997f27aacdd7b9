use image::{DynamicImage, RgbImage};
use photo_layout::*;

fn test_images(count: usize, width: u32, height: u32) -> Vec<SourceImage> {
    (0..count)
        .map(|_| DynamicImage::ImageRgb8(RgbImage::new(width, height)))
        .map(SourceImage::from_decoded)
        .collect()
}

fn size(width_mm: f64, height_mm: f64) -> PhysicalSize {
    PhysicalSize {
        id: SizeId(0),
        width_mm,
        height_mm,
        label: format!("{}x{}", width_mm, height_mm),
        is_custom: true,
    }
}

#[test]
fn test_preview_matches_pagination() {
    let images = test_images(10, 300, 200);
    let photo = size(90.0, 130.0);
    let paper = size(210.0, 297.0);
    let geometry =
        calculate_layout(&photo, &paper, LayoutMode::grid(), &LayoutOverrides::default());
    assert_eq!(geometry.slots_per_page, 4);

    let pages = build_preview(&images, &geometry, &photo, &paper);
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| p.slots.len() == 4));

    // Third page continues the rotated sequence: indices 8, 9, 1, 2
    let ids: Vec<&ImageId> = pages[2].slots.iter().map(|s| &s.image_id).collect();
    assert_eq!(ids, vec![&images[8].id, &images[9].id, &images[1].id, &images[2].id]);
}

#[test]
fn test_preview_slot_frames() {
    let images = test_images(1, 300, 200);
    let photo = size(50.0, 50.0);
    let paper = size(200.0, 100.0);
    let geometry = LayoutGeometry::new(1, 1, 2.0, LayoutMode::grid());

    let pages = build_preview(&images, &geometry, &photo, &paper);
    let slot = &pages[0].slots[0];

    // Centered on the page
    assert!((slot.frame_mm.x - 75.0).abs() < 1e-9);
    assert!((slot.frame_mm.y - 25.0).abs() < 1e-9);
    assert!((slot.frame_fraction.x - 0.375).abs() < 1e-9);
    assert!((slot.frame_fraction.width - 0.25).abs() < 1e-9);
    assert!((slot.frame_fraction.height - 0.5).abs() < 1e-9);
    assert_eq!((slot.page, slot.row, slot.col), (0, 0, 0));
}

#[test]
fn test_preview_crop_is_cover_crop() {
    let images = test_images(1, 300, 200);
    let photo = size(50.0, 50.0);
    let paper = size(210.0, 297.0);
    let geometry = LayoutGeometry::new(1, 1, 2.0, LayoutMode::grid());

    let pages = build_preview(&images, &geometry, &photo, &paper);
    let crop = pages[0].slots[0].crop.unwrap();

    assert!((crop.x - 50.0).abs() < 1e-9);
    assert!((crop.y - 0.0).abs() < 1e-9);
    assert!((crop.width - 200.0).abs() < 1e-9);
    assert!((crop.height - 200.0).abs() < 1e-9);
}

#[test]
fn test_preview_empty() {
    let photo = size(50.0, 50.0);
    let paper = size(210.0, 297.0);
    let geometry = LayoutGeometry::new(2, 2, 2.0, LayoutMode::grid());
    assert!(build_preview(&[], &geometry, &photo, &paper).is_empty());
}

#[test]
fn test_preview_page_count() {
    assert_eq!(preview_page_count(0, 8), 0);
    assert_eq!(preview_page_count(8, 8), 1);
    assert_eq!(preview_page_count(9, 8), 2);
    assert_eq!(preview_page_count(5, 0), 0);
}
