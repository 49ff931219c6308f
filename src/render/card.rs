use image::{DynamicImage, RgbaImage};

use crate::{
    config::directive::RenderingSpec,
    fonts::resolver::{FontFallback, FontResolver},
    format::value::format_field,
    foundation::core::Rgb8,
    record::model::{FieldName, Record},
    render::text::draw_text,
};

/// What happened to one directive while rendering a card.
///
/// Failures are aggregated here at field granularity instead of aborting the
/// card; a partial record still renders a complete, valid card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Value formatted and stamped onto the card.
    Drawn(FieldName),
    /// The record carries no value for the field; skipped silently.
    SkippedMissing(FieldName),
    /// No usable font could be resolved; the field is skipped and the rest
    /// of the card continues.
    FontUnavailable(FieldName),
}

/// One rendered card plus its per-field outcomes.
#[derive(Debug)]
pub struct RenderedCard {
    /// The finished card canvas.
    pub image: RgbaImage,
    /// Outcome of every configured directive, in field order.
    pub outcomes: Vec<FieldOutcome>,
}

impl RenderedCard {
    /// Number of fields actually stamped onto the card.
    pub fn drawn(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FieldOutcome::Drawn(_)))
            .count()
    }

    /// Number of fields skipped for lack of a usable font.
    pub fn undrawable(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FieldOutcome::FontUnavailable(_)))
            .count()
    }
}

/// Renders one record into one card image.
///
/// Owns the rendering spec, the injected font cache (lazy populate,
/// read-shared, run-scoped), and the once-loaded card template. Construction
/// happens once per run; `render` is then called per record.
pub struct CardRenderer {
    directives: RenderingSpec,
    fonts: FontResolver,
    width: u32,
    height: u32,
    base_color: Rgb8,
    template: Option<RgbaImage>,
}

impl CardRenderer {
    /// Build a renderer over a card canvas of `width x height` pixels.
    ///
    /// A template whose dimensions differ from the card canvas is stretched
    /// to fit; an absent template means every card starts from a solid
    /// `base_color` canvas.
    pub fn new(
        directives: RenderingSpec,
        fonts: FontResolver,
        width: u32,
        height: u32,
        base_color: Rgb8,
        template: Option<DynamicImage>,
    ) -> Self {
        let template = template.map(|img| {
            let rgba = img.to_rgba8();
            if rgba.dimensions() == (width, height) {
                rgba
            } else {
                tracing::warn!(
                    from = ?rgba.dimensions(),
                    to = ?(width, height),
                    "card template resized to card canvas"
                );
                image::imageops::resize(&rgba, width, height, image::imageops::FilterType::Lanczos3)
            }
        });
        Self {
            directives,
            fonts,
            width,
            height,
            base_color,
            template,
        }
    }

    /// Render one record into a finished card.
    ///
    /// Directives whose field is missing from the record are skipped; a
    /// font or draw failure on one field never aborts the remaining fields.
    pub fn render(&mut self, record: &Record) -> RenderedCard {
        let Self {
            directives,
            fonts,
            width,
            height,
            base_color,
            template,
        } = self;

        let mut image = match template {
            Some(t) => t.clone(),
            None => RgbaImage::from_pixel(*width, *height, base_color.to_rgba()),
        };

        let mut outcomes = Vec::with_capacity(directives.len());
        for (field, directive) in directives.iter() {
            let Some(text) = format_field(field, record) else {
                outcomes.push(FieldOutcome::SkippedMissing(field));
                continue;
            };
            let handle = fonts.resolve(directive.font.as_deref(), directive.font_size);
            match handle.as_face() {
                Some(face) => {
                    draw_text(
                        &mut image,
                        face,
                        directive.font_size,
                        directive.x,
                        directive.y,
                        directive.color,
                        &text,
                    );
                    outcomes.push(FieldOutcome::Drawn(field));
                }
                None => {
                    tracing::debug!(%field, "field skipped: no usable font");
                    outcomes.push(FieldOutcome::FontUnavailable(field));
                }
            }
        }

        RenderedCard { image, outcomes }
    }

    /// Font fallback events recorded by the injected resolver so far.
    pub fn font_fallbacks(&self) -> &[FontFallback] {
        self.fonts.fallbacks()
    }

    /// Whether the renderer stamps onto a loaded template rather than a
    /// solid canvas.
    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/card.rs"]
mod tests;
