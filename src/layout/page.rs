use image::{DynamicImage, RgbaImage};

use crate::foundation::core::{GridGeometry, Rgb8};

/// Partition records into pages of `page_size`, preserving input order.
///
/// Pages are contiguous, exhaustive, and non-overlapping; the last page may
/// be shorter. `page_size` must be > 0 (a startup config invariant).
pub fn paginate<T>(records: &[T], page_size: usize) -> impl Iterator<Item = &[T]> {
    records.chunks(page_size)
}

/// Composites rendered cards onto a fitted background plate, one page at a
/// time.
///
/// The plate is acquired once at construction: loaded and stretched to the
/// exact grid dimensions, or synthesized as a solid-color canvas when no
/// plate image is available. Acquisition never fails.
pub struct PageComposer {
    geometry: GridGeometry,
    plate: RgbaImage,
    plate_fallback: bool,
}

impl PageComposer {
    /// Fit `plate` to the page canvas, or synthesize a `fallback_color`
    /// canvas when none loaded.
    pub fn new(geometry: GridGeometry, plate: Option<DynamicImage>, fallback_color: Rgb8) -> Self {
        let (width, height) = (geometry.page_width(), geometry.page_height());
        let (plate, plate_fallback) = match plate {
            Some(img) => {
                let rgba = img.to_rgba8();
                let fitted = if rgba.dimensions() == (width, height) {
                    rgba
                } else {
                    tracing::warn!(
                        from = ?rgba.dimensions(),
                        to = ?(width, height),
                        "page plate stretched to grid canvas"
                    );
                    image::imageops::resize(
                        &rgba,
                        width,
                        height,
                        image::imageops::FilterType::Lanczos3,
                    )
                };
                (fitted, false)
            }
            None => {
                tracing::warn!("no page plate available, using solid canvas");
                (
                    RgbaImage::from_pixel(width, height, fallback_color.to_rgba()),
                    true,
                )
            }
        };
        Self {
            geometry,
            plate,
            plate_fallback,
        }
    }

    /// Whether the plate degraded to the solid-color synthesis.
    pub fn plate_is_fallback(&self) -> bool {
        self.plate_fallback
    }

    /// The exact page canvas dimensions.
    pub fn page_dimensions(&self) -> (u32, u32) {
        (self.geometry.page_width(), self.geometry.page_height())
    }

    /// Compose one page: paste each card at its row-major grid cell, in
    /// record order.
    ///
    /// Cards carrying transparency are alpha-blended over the plate; fully
    /// opaque cards overwrite their cell.
    pub fn compose<I>(&self, cards: I) -> RgbaImage
    where
        I: IntoIterator<Item = RgbaImage>,
    {
        let mut page = self.plate.clone();
        for (index, card) in cards.into_iter().enumerate() {
            let cell = self.geometry.cell_for(index);
            let (x, y) = self.geometry.offset_for(cell);
            paste(&mut page, &card, x, y);
        }
        page
    }
}

fn paste(page: &mut RgbaImage, card: &RgbaImage, x: u32, y: u32) {
    let has_alpha = card.pixels().any(|p| p.0[3] < 255);
    if has_alpha {
        image::imageops::overlay(page, card, i64::from(x), i64::from(y));
    } else {
        image::imageops::replace(page, card, i64::from(x), i64::from(y));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/page.rs"]
mod tests;
