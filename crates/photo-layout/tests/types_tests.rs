use photo_layout::*;

#[test]
fn test_builtin_photo_sizes() {
    let photos = SizeRegistry::photo_sizes();
    let labels: Vec<&str> = photos.sizes().iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels.len(), 9);
    assert!(labels.contains(&"4x6 inch"));
    assert!(photos.sizes().iter().all(|s| !s.is_custom));

    let passport = photos.find_by_label("Passport (35x45mm)").unwrap();
    assert_eq!(passport.dimensions_mm(), (35.0, 45.0));
}

#[test]
fn test_builtin_paper_sizes() {
    let papers = SizeRegistry::paper_sizes();
    assert_eq!(papers.kind(), SizeKind::Paper);
    assert_eq!(papers.sizes().len(), 7);
    assert_eq!(papers.find_by_label("Letter").unwrap().dimensions_mm(), (216.0, 279.0));
    assert_eq!(papers.find_by_label("A6").unwrap().dimensions_mm(), (105.0, 148.0));
}

#[test]
fn test_add_custom_selects_it() {
    let mut papers = SizeRegistry::paper_sizes();
    let custom = papers.add_custom(100.0, 150.0).unwrap().clone();

    assert!(custom.is_custom);
    assert_eq!(custom.label, "Custom 100×150mm");
    assert_eq!(papers.selected().id, custom.id);
    assert_eq!(papers.sizes().len(), 8);
}

#[test]
fn test_add_custom_rejects_invalid_dimensions() {
    let mut photos = SizeRegistry::photo_sizes();

    for (w, h) in [(0.0, 50.0), (50.0, -1.0), (f64::NAN, 10.0)] {
        match photos.add_custom(w, h) {
            Err(LayoutError::InvalidDimension { .. }) => {}
            other => panic!("Expected InvalidDimension, got {:?}", other),
        }
    }

    // Registry unchanged
    assert_eq!(photos.sizes().len(), 9);
    assert_eq!(photos.selected().label, "2x2 inch");
}

#[test]
fn test_delete_selected_custom_resets_selection() {
    let mut photos = SizeRegistry::photo_sizes();
    let id = photos.add_custom(60.0, 90.0).unwrap().id;

    let removed = photos.delete(id).unwrap();
    assert_eq!(removed.id, id);
    assert_eq!(photos.selected().label, "2x2 inch");
    assert!(photos.get(id).is_none());
}

#[test]
fn test_delete_unselected_custom_keeps_selection() {
    let mut photos = SizeRegistry::photo_sizes();
    let first = photos.add_custom(60.0, 90.0).unwrap().id;
    let second = photos.add_custom(70.0, 90.0).unwrap().id;

    photos.delete(first).unwrap();
    assert_eq!(photos.selected().id, second);
}

#[test]
fn test_delete_builtin_fails() {
    let mut papers = SizeRegistry::paper_sizes();
    let a4 = papers.find_by_label("A4").unwrap().id;

    match papers.delete(a4) {
        Err(LayoutError::NotCustom(label)) => assert_eq!(label, "A4"),
        other => panic!("Expected NotCustom, got {:?}", other),
    }
    assert!(matches!(
        papers.delete(SizeId(999)),
        Err(LayoutError::SizeNotFound(999))
    ));
}

#[test]
fn test_select_unknown_size() {
    let mut papers = SizeRegistry::paper_sizes();
    assert!(papers.select(SizeId(42)).is_err());
    assert_eq!(papers.selected().label, "A4");
}

#[test]
fn test_orientation_from_dimensions() {
    assert_eq!(Orientation::for_dimensions(210.0, 297.0), Orientation::Portrait);
    assert_eq!(Orientation::for_dimensions(297.0, 210.0), Orientation::Landscape);
    assert_eq!(Orientation::for_dimensions(200.0, 200.0), Orientation::Portrait);
}

#[test]
fn test_background_border_contrast() {
    assert_eq!(Background::White.border_gray(), 0.0);
    assert_eq!(Background::Black.border_gray(), 1.0);
    assert_eq!(Background::Black.rgb(), [0, 0, 0]);
}

#[test]
fn test_mode_defaults() {
    assert_eq!(LayoutMode::default(), LayoutMode::Grid { padding_mm: 2.0 });
    assert_eq!(
        LayoutMode::photobooth(PhotoboothTemplate::Strips).padding_mm(),
        10.0
    );
    assert_eq!(LayoutMode::grid().output_file_name(), "photo-layout.pdf");
    assert_eq!(
        LayoutMode::photobooth(PhotoboothTemplate::Classic).output_file_name(),
        "photobooth.pdf"
    );
}
