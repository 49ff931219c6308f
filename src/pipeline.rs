use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::{
    config::model::Config,
    fonts::resolver::FontResolver,
    foundation::error::ScoregridResult,
    layout::page::{PageComposer, paginate},
    output::writer::{page_output_path, write_page},
    record::ingest::load_records,
    render::card::CardRenderer,
};

/// User-visible summary of one run: pages written vs attempted, plus every
/// degradation triggered along the way.
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// Pages the run tried to produce.
    pub pages_attempted: usize,
    /// Pages successfully persisted.
    pub pages_written: usize,
    /// Records rendered into cards.
    pub records_rendered: usize,
    /// `(1-based page number, message)` for each failed page write.
    pub page_errors: Vec<(usize, String)>,
    /// Font fallback events recorded by the resolver.
    pub font_fallbacks: usize,
    /// Fields skipped across all cards for lack of a usable font.
    pub fields_undrawable: usize,
    /// Whether cards fell back to the solid-color canvas.
    pub template_fallback: bool,
    /// Whether pages fell back to the solid-color plate.
    pub plate_fallback: bool,
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} pages written, {} records rendered",
            self.pages_written, self.pages_attempted, self.records_rendered
        )?;
        if !self.page_errors.is_empty() {
            write!(f, ", {} page(s) failed", self.page_errors.len())?;
        }
        if self.font_fallbacks > 0 {
            write!(f, ", {} font fallback(s)", self.font_fallbacks)?;
        }
        if self.fields_undrawable > 0 {
            write!(f, ", {} field(s) undrawable", self.fields_undrawable)?;
        }
        if self.template_fallback {
            write!(f, ", card template missing")?;
        }
        if self.plate_fallback {
            write!(f, ", page plate missing")?;
        }
        Ok(())
    }
}

/// Execute a full run: ingest records, render cards, composite pages, write
/// one JPEG per page.
///
/// Only configuration and ingestion errors abort; asset fallbacks degrade
/// with diagnostics, and a failed page write is recorded in the report while
/// the remaining pages are still attempted.
pub fn run(config: &Config, csv_path: Option<&Path>, prefix: &str) -> ScoregridResult<RunReport> {
    config.validate()?;
    config.ensure_dirs()?;

    let csv = csv_path.unwrap_or(&config.csv_path);
    let records = load_records(csv, config.max_records)?;

    let mut renderer = build_card_renderer(config);
    let composer = PageComposer::new(
        config.grid,
        try_open_image(config.page_plate_path(), "page plate"),
        config.plate_color,
    );

    let mut report = RunReport {
        template_fallback: !renderer.has_template(),
        plate_fallback: composer.plate_is_fallback(),
        ..RunReport::default()
    };

    for (page_index, page_records) in paginate(&records, config.page_size).enumerate() {
        let page_number = page_index + 1;
        report.pages_attempted += 1;

        let mut cards = Vec::with_capacity(page_records.len());
        for record in page_records {
            let rendered = renderer.render(record);
            report.fields_undrawable += rendered.undrawable();
            cards.push(rendered.image);
        }
        report.records_rendered += page_records.len();

        let page = composer.compose(cards);
        let path = page_output_path(&config.output_dir, prefix, page_number);
        match write_page(&page, &path, config.quality) {
            Ok(()) => {
                report.pages_written += 1;
                tracing::info!(
                    page = page_number,
                    cards = page_records.len(),
                    path = %path.display(),
                    "page written"
                );
            }
            Err(e) => {
                tracing::error!(page = page_number, error = %e, "page write failed");
                report.page_errors.push((page_number, e.to_string()));
            }
        }
    }

    report.font_fallbacks = renderer.font_fallbacks().len();
    tracing::info!(
        written = report.pages_written,
        attempted = report.pages_attempted,
        "run complete"
    );
    Ok(report)
}

/// Construct the per-run card renderer.
///
/// Template loading degrades to the solid-color canvas, never an error.
pub fn build_card_renderer(config: &Config) -> CardRenderer {
    let fonts = FontResolver::new(&config.font_dir, config.fallback_font.clone());
    let template = try_open_image(config.card_template_path(), "card template");
    CardRenderer::new(
        config.directives.clone(),
        fonts,
        config.grid.card_width,
        config.grid.card_height,
        config.card_color,
        template,
    )
}

fn try_open_image(path: Option<PathBuf>, asset: &str) -> Option<DynamicImage> {
    let path = path?;
    match image::open(&path) {
        Ok(img) => Some(img),
        Err(e) => {
            tracing::warn!(
                asset,
                path = %path.display(),
                error = %e,
                "asset unavailable, using solid-color fallback"
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
