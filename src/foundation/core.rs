use crate::foundation::error::{ScoregridError, ScoregridResult};

/// Straight (non-premultiplied) RGB color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct a color from its three channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expand to an opaque `image` RGBA pixel.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

/// Position of a card within a page grid, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Zero-based column.
    pub column: u32,
    /// Zero-based row.
    pub row: u32,
}

/// The single source of truth for page grid arithmetic.
///
/// Cell placement, pixel offsets, page canvas dimensions, and the
/// `columns * rows >= page_size` startup invariant all derive from this one
/// value object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridGeometry {
    /// Cards per row.
    pub columns: u32,
    /// Rows per page.
    pub rows: u32,
    /// Card canvas width in pixels.
    pub card_width: u32,
    /// Card canvas height in pixels.
    pub card_height: u32,
}

impl GridGeometry {
    /// Construct a geometry, rejecting zero dimensions.
    pub fn new(columns: u32, rows: u32, card_width: u32, card_height: u32) -> ScoregridResult<Self> {
        let g = Self {
            columns,
            rows,
            card_width,
            card_height,
        };
        g.validate(None)?;
        Ok(g)
    }

    /// Check the geometry invariants, and the page-capacity invariant when a
    /// page size is supplied.
    pub fn validate(&self, page_size: Option<usize>) -> ScoregridResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ScoregridError::config("grid columns and rows must be > 0"));
        }
        if self.card_width == 0 || self.card_height == 0 {
            return Err(ScoregridError::config("card dimensions must be > 0"));
        }
        if let Some(n) = page_size {
            let capacity = self.columns as usize * self.rows as usize;
            if capacity < n {
                return Err(ScoregridError::config(format!(
                    "grid holds {capacity} cards but page_size is {n}"
                )));
            }
        }
        Ok(())
    }

    /// Map a within-page record index to its grid cell (strict row-major fill).
    pub fn cell_for(&self, index: usize) -> GridCell {
        let idx = index as u32;
        GridCell {
            column: idx % self.columns,
            row: idx / self.columns,
        }
    }

    /// Pixel offset of a cell's top-left corner on the page canvas.
    pub fn offset_for(&self, cell: GridCell) -> (u32, u32) {
        (cell.column * self.card_width, cell.row * self.card_height)
    }

    /// Exact page canvas width in pixels.
    pub fn page_width(&self) -> u32 {
        self.columns * self.card_width
    }

    /// Exact page canvas height in pixels.
    pub fn page_height(&self) -> u32 {
        self.rows * self.card_height
    }
}
