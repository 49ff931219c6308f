//! Scoregrid turns rhythm-game play-history exports into shareable result
//! images.
//!
//! One CSV row becomes one rendered score card; cards are packed row-major
//! into fixed-grid pages composited over a background plate and written as
//! JPEG files.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: `CSV bytes -> Vec<Record>` (encoding probe, positional
//!    column mapping, missing-vs-zero optionals)
//! 2. **Render**: `Record + RenderingSpec -> card image` (value formatting,
//!    cached font resolution, per-field outcomes)
//! 3. **Layout**: `Vec<Record> -> pages` (deterministic row-major grid,
//!    plate fitting, alpha-aware compositing)
//! 4. **Write**: one `"<prefix>_page_<n>.jpg"` per page
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic layout**: grid placement is a pure function of record
//!   index; input order determines placement order, always.
//! - **Degrade, don't crash**: only configuration and ingestion errors abort
//!   a run. Missing assets substitute documented fallbacks; a failed field
//!   skips that field; a failed page write leaves the remaining pages
//!   attempted. Every degradation surfaces in the [`RunReport`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod fonts;
mod format;
mod foundation;
mod layout;
mod output;
mod pipeline;
mod record;
mod render;

pub use config::directive::{DrawDirective, RenderingSpec};
pub use config::model::Config;
pub use fonts::resolver::{FallbackKind, FontFallback, FontHandle, FontResolver};
pub use format::value::format_field;
pub use foundation::core::{GridCell, GridGeometry, Rgb8};
pub use foundation::error::{ScoregridError, ScoregridResult};
pub use layout::page::{PageComposer, paginate};
pub use output::writer::{ensure_parent_dir, page_output_path, write_page};
pub use pipeline::{RunReport, build_card_renderer, run};
pub use record::ingest::load_records;
pub use record::model::{FieldName, Record};
pub use render::card::{CardRenderer, FieldOutcome, RenderedCard};
pub use render::text::draw_text;
