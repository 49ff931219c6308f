/// The fixed column set of a play-history export, in column order.
///
/// Draw directives are keyed by this enum; its `Ord` follows the declaration
/// (= column) order, which makes directive iteration deterministic.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    /// Numeric record identifier.
    Id,
    /// Song title.
    SongName,
    /// Numeric chart difficulty.
    Level,
    /// Difficulty category index (0 = BASIC .. 4 = ULTRA).
    LevelIndex,
    /// Play score.
    Score,
    /// Play rating.
    Rating,
    /// Over-power value. Ingested but never drawn (reserved).
    OverPower,
    /// Clearance status token.
    Clear,
    /// Full-combo status token.
    FullCombo,
    /// Full-chain status token. Ingested but never drawn (reserved).
    FullChain,
    /// Rank label.
    Rank,
    /// Upload timestamp.
    UploadTime,
    /// Play timestamp.
    PlayTime,
}

impl FieldName {
    /// All fields in column order.
    pub const ALL: [FieldName; 13] = [
        FieldName::Id,
        FieldName::SongName,
        FieldName::Level,
        FieldName::LevelIndex,
        FieldName::Score,
        FieldName::Rating,
        FieldName::OverPower,
        FieldName::Clear,
        FieldName::FullCombo,
        FieldName::FullChain,
        FieldName::Rank,
        FieldName::UploadTime,
        FieldName::PlayTime,
    ];

    /// Snake-case column name as it appears in the export header.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Id => "id",
            FieldName::SongName => "song_name",
            FieldName::Level => "level",
            FieldName::LevelIndex => "level_index",
            FieldName::Score => "score",
            FieldName::Rating => "rating",
            FieldName::OverPower => "over_power",
            FieldName::Clear => "clear",
            FieldName::FullCombo => "full_combo",
            FieldName::FullChain => "full_chain",
            FieldName::Rank => "rank",
            FieldName::UploadTime => "upload_time",
            FieldName::PlayTime => "play_time",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One play result row.
///
/// Every field is a tagged optional: `None` means absent or unparseable in
/// the source row (never zero), while `Some("")` on a text field means
/// present-but-empty. Records are immutable once read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    /// Record identifier.
    pub id: Option<u32>,
    /// Song title.
    pub song_name: Option<String>,
    /// Numeric chart difficulty.
    pub level: Option<f64>,
    /// Difficulty category index.
    pub level_index: Option<i64>,
    /// Play score.
    pub score: Option<i64>,
    /// Play rating.
    pub rating: Option<f64>,
    /// Over-power value (reserved).
    pub over_power: Option<f64>,
    /// Clearance status token.
    pub clear: Option<String>,
    /// Full-combo status token.
    pub full_combo: Option<String>,
    /// Full-chain status token (reserved).
    pub full_chain: Option<String>,
    /// Rank label.
    pub rank: Option<String>,
    /// Upload timestamp.
    pub upload_time: Option<String>,
    /// Play timestamp.
    pub play_time: Option<String>,
}

impl Record {
    /// Whether the record carries a value for `field`.
    pub fn has_value(&self, field: FieldName) -> bool {
        match field {
            FieldName::Id => self.id.is_some(),
            FieldName::SongName => self.song_name.is_some(),
            FieldName::Level => self.level.is_some(),
            FieldName::LevelIndex => self.level_index.is_some(),
            FieldName::Score => self.score.is_some(),
            FieldName::Rating => self.rating.is_some(),
            FieldName::OverPower => self.over_power.is_some(),
            FieldName::Clear => self.clear.is_some(),
            FieldName::FullCombo => self.full_combo.is_some(),
            FieldName::FullChain => self.full_chain.is_some(),
            FieldName::Rank => self.rank.is_some(),
            FieldName::UploadTime => self.upload_time.is_some(),
            FieldName::PlayTime => self.play_time.is_some(),
        }
    }
}
