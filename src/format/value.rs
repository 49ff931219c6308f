use crate::record::model::{FieldName, Record};

/// Display names for difficulty category indices 0-4.
const LEVEL_CATEGORIES: [&str; 5] = ["BASIC", "ADVANCED", "EXPERT", "MASTER", "ULTRA"];

/// Format a record field for drawing.
///
/// Returns `None` iff the record carries no value for `field`; the caller
/// skips drawing in that case. Transforms are per-field and independent of
/// every other field's formatting. The match is exhaustive over
/// [`FieldName`]: adding a column means adding an arm here, not
/// configuration.
pub fn format_field(field: FieldName, record: &Record) -> Option<String> {
    match field {
        FieldName::Id => record.id.map(|v| v.to_string()),
        FieldName::SongName => record.song_name.clone(),
        FieldName::Level => record.level.map(format_level),
        FieldName::LevelIndex => record.level_index.map(format_level_index),
        FieldName::Score => record.score.map(|v| v.to_string()),
        FieldName::Rating => record.rating.map(format_number),
        FieldName::OverPower => record.over_power.map(format_number),
        FieldName::Clear => record.clear.as_deref().map(format_clear),
        FieldName::FullCombo => record.full_combo.as_deref().map(format_full_combo),
        FieldName::FullChain => record.full_chain.clone(),
        FieldName::Rank => record.rank.clone(),
        FieldName::UploadTime => record.upload_time.clone(),
        FieldName::PlayTime => record.play_time.clone(),
    }
}

fn format_level(level: f64) -> String {
    format!("Lv.{}", format_number(level))
}

fn format_level_index(index: i64) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| LEVEL_CATEGORIES.get(i))
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| index.to_string())
}

fn format_clear(raw: &str) -> String {
    if raw == "clear" {
        "CLEAR".to_string()
    } else {
        raw.to_string()
    }
}

fn format_full_combo(raw: &str) -> String {
    if raw == "fullcombo" {
        "FULL COMBO".to_string()
    } else {
        raw.to_string()
    }
}

/// Integral values print without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
