use super::*;

fn fontless_renderer(template: Option<DynamicImage>) -> CardRenderer {
    let font_dir = std::env::temp_dir().join(format!(
        "scoregrid-card-fonts-{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&font_dir).unwrap();
    let fonts = FontResolver::new(&font_dir, None);
    CardRenderer::new(
        RenderingSpec::default(),
        fonts,
        400,
        200,
        Rgb8::new(30, 30, 40),
        template,
    )
}

fn full_record() -> Record {
    Record {
        id: Some(1),
        song_name: Some("Test Song".to_string()),
        level: Some(13.0),
        level_index: Some(2),
        score: Some(1_000_000),
        rating: Some(15.5),
        over_power: Some(10.0),
        clear: Some("clear".to_string()),
        full_combo: Some("fullcombo".to_string()),
        full_chain: Some(String::new()),
        rank: Some("SS".to_string()),
        upload_time: Some("t".to_string()),
        play_time: Some("t".to_string()),
    }
}

#[test]
fn empty_record_renders_a_complete_solid_card() {
    let mut renderer = fontless_renderer(None);
    let card = renderer.render(&Record::default());

    assert_eq!(card.image.dimensions(), (400, 200));
    assert_eq!(*card.image.get_pixel(0, 0), image::Rgba([30, 30, 40, 255]));
    assert_eq!(card.outcomes.len(), 9);
    assert!(
        card.outcomes
            .iter()
            .all(|o| matches!(o, FieldOutcome::SkippedMissing(_)))
    );
}

#[test]
fn outcomes_mirror_field_presence_exactly() {
    let mut renderer = fontless_renderer(None);
    let record = Record {
        song_name: Some("Partial".to_string()),
        level: Some(12.5),
        clear: Some("clear".to_string()),
        ..Record::default()
    };
    let card = renderer.render(&record);

    // No fonts are loadable in the test environment, so present fields
    // surface as FontUnavailable rather than Drawn; either way the card
    // completes and absent fields are skipped silently.
    for outcome in &card.outcomes {
        match outcome {
            FieldOutcome::SkippedMissing(f) => assert!(!record.has_value(*f)),
            FieldOutcome::FontUnavailable(f) | FieldOutcome::Drawn(f) => {
                assert!(record.has_value(*f))
            }
        }
    }
    assert_eq!(card.undrawable(), 3);
    assert_eq!(card.drawn(), 0);
}

#[test]
fn every_directive_yields_exactly_one_outcome() {
    let mut renderer = fontless_renderer(None);
    for record in [Record::default(), full_record()] {
        let card = renderer.render(&record);
        assert_eq!(card.outcomes.len(), 9);
    }
}

#[test]
fn wrong_size_template_is_stretched_to_the_card_canvas() {
    let template = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        10,
        10,
        image::Rgba([200, 10, 10, 255]),
    ));
    let mut renderer = fontless_renderer(Some(template));
    assert!(renderer.has_template());

    let card = renderer.render(&Record::default());
    assert_eq!(card.image.dimensions(), (400, 200));
    assert_eq!(*card.image.get_pixel(399, 199), image::Rgba([200, 10, 10, 255]));
}

#[test]
fn font_unavailability_never_aborts_the_card() {
    let mut renderer = fontless_renderer(None);
    let card = renderer.render(&full_record());

    assert_eq!(card.image.dimensions(), (400, 200));
    assert_eq!(card.undrawable(), 9);
    assert!(!renderer.font_fallbacks().is_empty());
}
