use photo_layout::*;

fn paper(width_mm: f64, height_mm: f64) -> PhysicalSize {
    SizeRegistry::paper_sizes()
        .add_custom(width_mm, height_mm)
        .unwrap()
        .clone()
}

#[test]
fn test_grid_single_page_statistics() {
    let geometry = LayoutGeometry::new(2, 2, 2.0, LayoutMode::grid());
    let stats = calculate_statistics(3, &geometry, &paper(210.0, 297.0)).unwrap();

    assert_eq!(stats.image_count, 3);
    assert_eq!(stats.slots_per_page, 4);
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.filled_slots, 4);
    assert_eq!(stats.distinct_images, 3);
    assert_eq!(stats.repeated_slots, 1);
    assert_eq!(stats.orientation, Orientation::Portrait);
}

#[test]
fn test_grid_paginated_statistics() {
    let geometry = LayoutGeometry::new(2, 2, 2.0, LayoutMode::grid());
    let stats = calculate_statistics(10, &geometry, &paper(297.0, 210.0)).unwrap();

    assert_eq!(stats.pages, 3);
    assert_eq!(stats.filled_slots, 12);
    assert_eq!(stats.distinct_images, 10);
    assert_eq!(stats.repeated_slots, 2);
    assert_eq!(stats.orientation, Orientation::Landscape);
}

#[test]
fn test_photobooth_statistics() {
    let mode = LayoutMode::photobooth(PhotoboothTemplate::Classic);
    let geometry = LayoutGeometry::new(2, 2, 10.0, mode);

    let stats = calculate_statistics(2, &geometry, &paper(210.0, 297.0)).unwrap();
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.distinct_images, 2);
    assert_eq!(stats.repeated_slots, 2);

    // More images than slots: still one page, extra images unused
    let stats = calculate_statistics(9, &geometry, &paper(210.0, 297.0)).unwrap();
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.distinct_images, 4);
    assert_eq!(stats.repeated_slots, 0);
}

#[test]
fn test_statistics_errors() {
    let geometry = LayoutGeometry::new(2, 2, 2.0, LayoutMode::grid());
    assert!(matches!(
        calculate_statistics(0, &geometry, &paper(210.0, 297.0)),
        Err(LayoutError::EmptyImageSet)
    ));

    let empty = LayoutGeometry::new(0, 0, 2.0, LayoutMode::grid());
    assert!(matches!(
        calculate_statistics(5, &empty, &paper(210.0, 297.0)),
        Err(LayoutError::ZeroCapacityLayout)
    ));
}
