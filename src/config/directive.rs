use std::collections::BTreeMap;

use crate::{
    foundation::core::Rgb8,
    foundation::error::{ScoregridError, ScoregridResult},
    record::model::FieldName,
};

/// One field's draw instruction: where and how its formatted value is
/// stamped onto a card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrawDirective {
    /// Left anchor x, in pixels from the card's left edge.
    pub x: u32,
    /// Top anchor y, in pixels from the card's top edge.
    pub y: u32,
    /// Requested font size in pixels.
    pub font_size: u32,
    /// Text color.
    pub color: Rgb8,
    /// Font file name under the font directory. Absent selects the
    /// configured fallback font, never an error.
    #[serde(default)]
    pub font: Option<String>,
}

/// The complete field-to-directive mapping for one deployment.
///
/// Read-only at render time. Iteration yields each directive exactly once in
/// [`FieldName`] (= column) order, so overlapping draws resolve
/// deterministically.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RenderingSpec {
    directives: BTreeMap<FieldName, DrawDirective>,
}

impl RenderingSpec {
    /// Build a spec from an explicit mapping.
    pub fn new(directives: BTreeMap<FieldName, DrawDirective>) -> Self {
        Self { directives }
    }

    /// Directive for `field`, if the deployment draws it.
    pub fn get(&self, field: FieldName) -> Option<&DrawDirective> {
        self.directives.get(&field)
    }

    /// Directives in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &DrawDirective)> {
        self.directives.iter().map(|(f, d)| (*f, d))
    }

    /// Number of configured directives.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Whether the deployment draws nothing at all.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Check directive invariants at startup.
    pub fn validate(&self) -> ScoregridResult<()> {
        for (field, directive) in self.iter() {
            if directive.font_size == 0 {
                return Err(ScoregridError::config(format!(
                    "directive for '{field}' has font_size 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RenderingSpec {
    /// The built-in deployment table.
    fn default() -> Self {
        fn d(x: u32, y: u32, font_size: u32, color: (u8, u8, u8), font: Option<&str>) -> DrawDirective {
            DrawDirective {
                x,
                y,
                font_size,
                color: Rgb8::new(color.0, color.1, color.2),
                font: font.map(str::to_string),
            }
        }

        const CJK: Option<&str> = Some("NotoSansCJK-Regular.ttc");
        let mut directives = BTreeMap::new();
        directives.insert(FieldName::SongName, d(100, 50, 30, (255, 255, 255), CJK));
        directives.insert(FieldName::Level, d(100, 100, 20, (255, 255, 0), CJK));
        directives.insert(FieldName::LevelIndex, d(150, 80, 28, (255, 255, 0), None));
        directives.insert(FieldName::Score, d(100, 150, 20, (255, 255, 255), CJK));
        directives.insert(FieldName::Rating, d(100, 200, 20, (0, 255, 255), CJK));
        directives.insert(FieldName::Rank, d(100, 250, 40, (255, 215, 0), CJK));
        directives.insert(FieldName::Clear, d(300, 100, 20, (0, 255, 0), CJK));
        directives.insert(FieldName::FullCombo, d(270, 150, 20, (0, 255, 0), CJK));
        directives.insert(FieldName::PlayTime, d(300, 200, 20, (200, 200, 200), CJK));
        Self { directives }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/directive.rs"]
mod tests;
