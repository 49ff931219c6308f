use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{ScoregridError, ScoregridResult};

/// Deterministic output path for a page: `<prefix>_page_<n>.jpg` with a
/// 1-based page number.
pub fn page_output_path(dir: &Path, prefix: &str, page_number: usize) -> PathBuf {
    dir.join(format!("{prefix}_page_{page_number}.jpg"))
}

/// Create `path`'s parent directory if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> ScoregridResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))
            .map_err(|e| ScoregridError::output(format!("{e:#}")))?;
    }
    Ok(())
}

/// Persist one composited page as a JPEG at `quality` (1-100).
///
/// JPEG carries no alpha; pages are composed over an opaque plate, so the
/// alpha channel is dropped. Codec and filesystem failures surface as
/// [`ScoregridError::Output`] and are page-scoped: the caller records them
/// and continues with the remaining pages.
pub fn write_page(page: &RgbaImage, path: &Path, quality: u8) -> ScoregridResult<()> {
    ensure_parent_dir(path)?;

    let mut rgb = image::RgbImage::new(page.width(), page.height());
    for (src, dst) in page.pixels().zip(rgb.pixels_mut()) {
        dst.0 = [src.0[0], src.0[1], src.0[2]];
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("create page file '{}'", path.display()))
        .map_err(|e| ScoregridError::output(format!("{e:#}")))?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality);
    rgb.write_with_encoder(encoder)
        .with_context(|| format!("encode jpeg '{}'", path.display()))
        .map_err(|e| ScoregridError::output(format!("{e:#}")))?;

    Ok(())
}
