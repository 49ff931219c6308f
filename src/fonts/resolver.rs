use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use rusttype::Font;

/// A resolved font resource.
///
/// Handles are cheap to clone; clones of one cache entry share the same
/// underlying face.
#[derive(Clone)]
pub enum FontHandle {
    /// A loaded scalable face. The directive's requested size is honored
    /// exactly at draw time.
    Face(Arc<Font<'static>>),
    /// Terminal degradation: no face could be loaded from anywhere. Drawing
    /// with it is a no-op; the renderer records the field as undrawable and
    /// continues.
    Missing,
}

impl FontHandle {
    /// The loaded face, unless this is the terminal degradation.
    pub fn as_face(&self) -> Option<&Font<'static>> {
        match self {
            FontHandle::Face(font) => Some(font),
            FontHandle::Missing => None,
        }
    }
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontHandle::Face(font) => f
                .debug_tuple("Face")
                .field(&Arc::as_ptr(font))
                .finish(),
            FontHandle::Missing => f.write_str("Missing"),
        }
    }
}

/// How a request was satisfied when the named font itself was not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackKind {
    /// The configured fallback font was used instead.
    ConfiguredFallback(String),
    /// An arbitrary loadable face found in the font directory was used.
    ScannedFace(String),
    /// Nothing loaded; the handle is [`FontHandle::Missing`].
    Missing,
}

/// One recorded fallback event, kept for the run summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFallback {
    /// Font identifier the directive asked for, if any.
    pub requested: Option<String>,
    /// Requested size in pixels.
    pub size: u32,
    /// What the request degraded to.
    pub resolved: FallbackKind,
}

/// Lazy font cache with a three-step fallback chain.
///
/// Entries are keyed by `(font identifier, size)`, populated on first request
/// and shared read-only for the rest of the run; nothing is invalidated
/// mid-run. Resolution never fails: a named font that cannot be loaded
/// degrades to the configured fallback font, then to the first loadable face
/// in the font directory, and finally to [`FontHandle::Missing`].
///
/// The run is single-threaded, so the lazy-insert path takes `&mut self`. A
/// parallel reimplementation must keep the build-once guarantee: each key is
/// loaded at most once even under concurrent first access (a concurrent map
/// or a lock around the insert, not best-effort).
pub struct FontResolver {
    font_dir: PathBuf,
    fallback_font: Option<String>,
    cache: HashMap<(Option<String>, u32), FontHandle>,
    fallbacks: Vec<FontFallback>,
    disk_loads: usize,
}

impl FontResolver {
    /// Create an empty cache over `font_dir`.
    pub fn new(font_dir: impl Into<PathBuf>, fallback_font: Option<String>) -> Self {
        Self {
            font_dir: font_dir.into(),
            fallback_font,
            cache: HashMap::new(),
            fallbacks: Vec::new(),
            disk_loads: 0,
        }
    }

    /// Resolve `(font, size)` to a handle, loading and caching on first use.
    ///
    /// Resolving the same pair twice returns the same cached handle without
    /// touching the disk again.
    pub fn resolve(&mut self, font: Option<&str>, size: u32) -> FontHandle {
        let key = (font.map(str::to_string), size);
        if let Some(handle) = self.cache.get(&key) {
            return handle.clone();
        }

        let (handle, fallback) = self.load_uncached(font);
        if let Some(resolved) = fallback {
            tracing::warn!(
                requested = font.unwrap_or("<none>"),
                size,
                ?resolved,
                "font fallback"
            );
            self.fallbacks.push(FontFallback {
                requested: font.map(str::to_string),
                size,
                resolved,
            });
        }
        self.cache.insert(key, handle.clone());
        handle
    }

    /// Fallback events recorded so far, in resolution order.
    pub fn fallbacks(&self) -> &[FontFallback] {
        &self.fallbacks
    }

    fn load_uncached(&mut self, font: Option<&str>) -> (FontHandle, Option<FallbackKind>) {
        // An absent identifier selects the configured fallback font by
        // contract; only a *named* font that fails to load counts as a
        // degradation worth reporting.
        let mut degraded = false;
        if let Some(name) = font {
            if let Some(face) = self.try_load(&self.font_dir.join(name)) {
                return (FontHandle::Face(face), None);
            }
            degraded = true;
        }

        if let Some(name) = self.fallback_font.clone()
            && font != Some(name.as_str())
            && let Some(face) = self.try_load(&self.font_dir.join(&name))
        {
            let kind = degraded.then_some(FallbackKind::ConfiguredFallback(name));
            return (FontHandle::Face(face), kind);
        }

        if let Some((name, face)) = self.scan_for_any_face() {
            return (FontHandle::Face(face), Some(FallbackKind::ScannedFace(name)));
        }

        (FontHandle::Missing, Some(FallbackKind::Missing))
    }

    fn try_load(&mut self, path: &Path) -> Option<Arc<Font<'static>>> {
        self.disk_loads += 1;
        let bytes = std::fs::read(path).ok()?;
        Font::try_from_vec(bytes).map(Arc::new)
    }

    /// Scan the font directory, in file-name order, for the first face that
    /// parses.
    fn scan_for_any_face(&mut self) -> Option<(String, Arc<Font<'static>>)> {
        let mut candidates = Vec::new();
        let rd = std::fs::read_dir(&self.font_dir).ok()?;
        for entry in rd.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext = ext.to_ascii_lowercase();
            if ext != "ttf" && ext != "otf" && ext != "ttc" {
                continue;
            }
            candidates.push(path);
        }
        candidates.sort();

        for path in candidates {
            if let Some(face) = self.try_load(&path) {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                return Some((name, face));
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/resolver.rs"]
mod tests;
