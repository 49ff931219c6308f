use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    config::directive::RenderingSpec,
    foundation::core::{GridGeometry, Rgb8},
    foundation::error::{ScoregridError, ScoregridResult},
};

/// Deployment configuration.
///
/// Every field is defaulted, so an absent or empty config file yields the
/// built-in deployment. Loaded from JSON via [`Config::from_path`] and
/// checked once at startup via [`Config::validate`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Default input CSV path, overridable on the command line.
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    /// Directory holding the page plate and card template images.
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
    /// Directory holding font files.
    #[serde(default = "default_font_dir")]
    pub font_dir: PathBuf,
    /// Directory page images are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Card background template file name under `template_dir`.
    #[serde(default = "default_card_template")]
    pub card_template: Option<String>,
    /// Page background plate file name under `template_dir`.
    #[serde(default = "default_page_plate")]
    pub page_plate: Option<String>,
    /// Page grid geometry.
    #[serde(default = "default_grid")]
    pub grid: GridGeometry,
    /// Records per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Row-count bound on ingestion; rows beyond it are ignored.
    #[serde(default = "default_max_records")]
    pub max_records: Option<usize>,
    /// JPEG output quality, 1-100.
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// Card canvas color when no template is available.
    #[serde(default = "default_card_color")]
    pub card_color: Rgb8,
    /// Page canvas color when no plate is available.
    #[serde(default = "default_plate_color")]
    pub plate_color: Rgb8,
    /// Font tried when a directive names none, or its named font fails.
    #[serde(default = "default_fallback_font")]
    pub fallback_font: Option<String>,
    /// The field-to-directive mapping.
    #[serde(default)]
    pub directives: RenderingSpec,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("data/input.csv")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_font_dir() -> PathBuf {
    PathBuf::from("font")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_card_template() -> Option<String> {
    Some("background.png".to_string())
}

fn default_page_plate() -> Option<String> {
    Some("plate.png".to_string())
}

fn default_grid() -> GridGeometry {
    GridGeometry {
        columns: 5,
        rows: 10,
        card_width: 400,
        card_height: 200,
    }
}

fn default_page_size() -> usize {
    30
}

fn default_max_records() -> Option<usize> {
    Some(30)
}

fn default_quality() -> u8 {
    95
}

fn default_card_color() -> Rgb8 {
    Rgb8::new(30, 30, 40)
}

fn default_plate_color() -> Rgb8 {
    Rgb8::new(40, 40, 50)
}

fn default_fallback_font() -> Option<String> {
    Some("NotoSansCJK-Regular.ttc".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            template_dir: default_template_dir(),
            font_dir: default_font_dir(),
            output_dir: default_output_dir(),
            card_template: default_card_template(),
            page_plate: default_page_plate(),
            grid: default_grid(),
            page_size: default_page_size(),
            max_records: default_max_records(),
            quality: default_quality(),
            card_color: default_card_color(),
            plate_color: default_plate_color(),
            fallback_font: default_fallback_font(),
            directives: RenderingSpec::default(),
        }
    }
}

impl Config {
    /// Load and validate a configuration from a JSON file.
    pub fn from_path(path: &Path) -> ScoregridResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))
            .map_err(|e| ScoregridError::config(format!("{e:#}")))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parse config '{}'", path.display()))
            .map_err(|e| ScoregridError::config(format!("{e:#}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the startup invariants.
    pub fn validate(&self) -> ScoregridResult<()> {
        if self.page_size == 0 {
            return Err(ScoregridError::config("page_size must be > 0"));
        }
        self.grid.validate(Some(self.page_size))?;
        if !(1..=100).contains(&self.quality) {
            return Err(ScoregridError::config(format!(
                "quality must be within 1-100, got {}",
                self.quality
            )));
        }
        self.directives.validate()
    }

    /// Create the output, template, and font directories if absent.
    pub fn ensure_dirs(&self) -> ScoregridResult<()> {
        for dir in [&self.output_dir, &self.template_dir, &self.font_dir] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create directory '{}'", dir.display()))
                .map_err(|e| ScoregridError::config(format!("{e:#}")))?;
        }
        Ok(())
    }

    /// Full path of the card template image, when one is configured.
    pub fn card_template_path(&self) -> Option<PathBuf> {
        self.card_template.as_ref().map(|n| self.template_dir.join(n))
    }

    /// Full path of the page plate image, when one is configured.
    pub fn page_plate_path(&self) -> Option<PathBuf> {
        self.page_plate.as_ref().map(|n| self.template_dir.join(n))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
