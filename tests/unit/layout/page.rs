use super::*;

fn grid() -> GridGeometry {
    GridGeometry {
        columns: 5,
        rows: 2,
        card_width: 4,
        card_height: 4,
    }
}

fn solid_card(level: u8) -> RgbaImage {
    RgbaImage::from_pixel(4, 4, image::Rgba([level, 0, 0, 255]))
}

#[test]
fn pagination_is_exhaustive_ordered_and_non_overlapping() {
    let records: Vec<u32> = (0..12).collect();
    let pages: Vec<&[u32]> = paginate(&records, 10).collect();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 10);
    assert_eq!(pages[1].len(), 2);

    let rejoined: Vec<u32> = pages.concat();
    assert_eq!(rejoined, records);
}

#[test]
fn exact_multiple_has_no_trailing_short_page() {
    let records: Vec<u32> = (0..20).collect();
    let pages: Vec<&[u32]> = paginate(&records, 10).collect();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].len(), 10);
}

#[test]
fn cards_land_on_their_row_major_cells() {
    let composer = PageComposer::new(grid(), None, Rgb8::new(40, 40, 50));
    let cards: Vec<RgbaImage> = (0..7).map(|i| solid_card(i as u8 + 1)).collect();
    let page = composer.compose(cards);

    // index 0 -> cell (0,0), index 4 -> (4,0), index 5 -> (0,1), index 6 -> (1,1)
    assert_eq!(page.get_pixel(0, 0).0[0], 1);
    assert_eq!(page.get_pixel(16, 0).0[0], 5);
    assert_eq!(page.get_pixel(0, 4).0[0], 6);
    assert_eq!(page.get_pixel(4, 4).0[0], 7);
    // Unfilled cells keep the plate.
    assert_eq!(*page.get_pixel(8, 4), image::Rgba([40, 40, 50, 255]));
}

#[test]
fn wrong_size_plate_is_stretched_to_exact_grid_dimensions() {
    let plate = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        3,
        3,
        image::Rgba([9, 9, 9, 255]),
    ));
    let composer = PageComposer::new(grid(), Some(plate), Rgb8::new(0, 0, 0));

    assert!(!composer.plate_is_fallback());
    let page = composer.compose(Vec::new());
    assert_eq!(page.dimensions(), (20, 8));
    assert_eq!(*page.get_pixel(19, 7), image::Rgba([9, 9, 9, 255]));
}

#[test]
fn missing_plate_synthesizes_a_solid_canvas() {
    let composer = PageComposer::new(grid(), None, Rgb8::new(40, 40, 50));
    assert!(composer.plate_is_fallback());

    let page = composer.compose(Vec::new());
    assert_eq!(page.dimensions(), (20, 8));
    assert_eq!(*page.get_pixel(10, 3), image::Rgba([40, 40, 50, 255]));
}

#[test]
fn transparent_card_pixels_keep_the_plate_underneath() {
    let composer = PageComposer::new(grid(), None, Rgb8::new(40, 40, 50));
    let ghost = RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 0]));
    let page = composer.compose(vec![ghost]);

    assert_eq!(*page.get_pixel(0, 0), image::Rgba([40, 40, 50, 255]));
}

#[test]
fn opaque_cards_overwrite_their_cell() {
    let composer = PageComposer::new(grid(), None, Rgb8::new(40, 40, 50));
    let page = composer.compose(vec![solid_card(200)]);

    assert_eq!(*page.get_pixel(0, 0), image::Rgba([200, 0, 0, 255]));
    assert_eq!(*page.get_pixel(3, 3), image::Rgba([200, 0, 0, 255]));
    // The neighbouring cell is untouched.
    assert_eq!(*page.get_pixel(4, 0), image::Rgba([40, 40, 50, 255]));
}
