use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{ScoregridError, ScoregridResult},
    record::model::Record,
};

/// Load play records from a CSV export.
///
/// The first line is the header and is skipped; remaining rows map by
/// position onto the fixed thirteen-column schema. Rows beyond `max_records`
/// are ignored. Unparseable numeric cells and physically absent columns
/// become `None`; a present-but-empty text cell stays `Some("")`.
///
/// Any failure here is fatal to the run: a missing or unreadable file, a file
/// no supported encoding decodes, or a malformed CSV row.
pub fn load_records(path: &Path, max_records: Option<usize>) -> ScoregridResult<Vec<Record>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read export '{}'", path.display()))
        .map_err(|e| ScoregridError::ingest(format!("{e:#}")))?;

    let text = decode_export(&bytes).ok_or_else(|| {
        ScoregridError::ingest(format!(
            "'{}' is not decodable as any of utf-8, gb18030, shift_jis",
            path.display()
        ))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        if let Some(bound) = max_records
            && records.len() >= bound
        {
            break;
        }
        let row = row
            .with_context(|| format!("parse csv row in '{}'", path.display()))
            .map_err(|e| ScoregridError::ingest(format!("{e:#}")))?;
        records.push(record_from_row(&row));
    }

    tracing::debug!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}

/// Probe encodings in a fixed order; the first lossless decode wins.
fn decode_export(bytes: &[u8]) -> Option<String> {
    for encoding in [
        encoding_rs::UTF_8,
        encoding_rs::GB18030,
        encoding_rs::SHIFT_JIS,
    ] {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return Some(text.into_owned());
        }
    }
    None
}

fn record_from_row(row: &csv::StringRecord) -> Record {
    Record {
        id: parse_at(row, 0),
        song_name: text_at(row, 1),
        level: parse_at(row, 2),
        level_index: parse_at(row, 3),
        score: parse_at(row, 4),
        rating: parse_at(row, 5),
        over_power: parse_at(row, 6),
        clear: text_at(row, 7),
        full_combo: text_at(row, 8),
        full_chain: text_at(row, 9),
        rank: text_at(row, 10),
        upload_time: text_at(row, 11),
        play_time: text_at(row, 12),
    }
}

fn text_at(row: &csv::StringRecord, index: usize) -> Option<String> {
    row.get(index).map(|s| s.trim().to_string())
}

fn parse_at<T: std::str::FromStr>(row: &csv::StringRecord, index: usize) -> Option<T> {
    row.get(index).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
#[path = "../../tests/unit/record/ingest.rs"]
mod tests;
