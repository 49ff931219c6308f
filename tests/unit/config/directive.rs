use super::*;

#[test]
fn default_table_covers_the_drawn_fields() {
    let spec = RenderingSpec::default();
    assert_eq!(spec.len(), 9);
    assert!(spec.get(FieldName::SongName).is_some());
    assert!(spec.get(FieldName::Rank).is_some());
    // Reserved fields carry no directive.
    assert!(spec.get(FieldName::OverPower).is_none());
    assert!(spec.get(FieldName::FullChain).is_none());
    assert!(spec.get(FieldName::Id).is_none());
    spec.validate().unwrap();
}

#[test]
fn iteration_follows_field_order_exactly_once() {
    let spec = RenderingSpec::default();
    let fields: Vec<FieldName> = spec.iter().map(|(f, _)| f).collect();
    assert_eq!(
        fields,
        vec![
            FieldName::SongName,
            FieldName::Level,
            FieldName::LevelIndex,
            FieldName::Score,
            FieldName::Rating,
            FieldName::Clear,
            FieldName::FullCombo,
            FieldName::Rank,
            FieldName::PlayTime,
        ]
    );
}

#[test]
fn zero_font_size_is_rejected_at_validation() {
    let mut directives = BTreeMap::new();
    directives.insert(
        FieldName::Score,
        DrawDirective {
            x: 0,
            y: 0,
            font_size: 0,
            color: Rgb8::new(1, 2, 3),
            font: None,
        },
    );
    let err = RenderingSpec::new(directives).validate().unwrap_err();
    assert!(matches!(err, ScoregridError::Config(_)));
}

#[test]
fn json_round_trips_with_snake_case_field_keys() {
    let spec = RenderingSpec::default();
    let json = serde_json::to_string(&spec).unwrap();
    assert!(json.contains("\"song_name\""));
    assert!(json.contains("\"full_combo\""));
    let back: RenderingSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

#[test]
fn directive_without_font_selects_the_fallback() {
    let json = r#"{"level_index": {"x": 150, "y": 80, "font_size": 28, "color": {"r": 255, "g": 255, "b": 0}}}"#;
    let spec: RenderingSpec = serde_json::from_str(json).unwrap();
    let d = spec.get(FieldName::LevelIndex).unwrap();
    assert_eq!(d.font, None);
    assert_eq!(d.font_size, 28);
}
