use super::*;

fn empty_font_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scoregrid-fonts-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn exhausted_chain_degrades_to_missing_without_failing() {
    let dir = empty_font_dir("exhausted");
    let mut resolver = FontResolver::new(&dir, Some("fallback.ttf".to_string()));

    let handle = resolver.resolve(Some("named.ttf"), 20);
    assert!(handle.as_face().is_none());

    assert_eq!(resolver.fallbacks().len(), 1);
    let event = &resolver.fallbacks()[0];
    assert_eq!(event.requested.as_deref(), Some("named.ttf"));
    assert_eq!(event.size, 20);
    assert_eq!(event.resolved, FallbackKind::Missing);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn repeat_resolution_is_served_from_the_cache() {
    let dir = empty_font_dir("cache");
    let mut resolver = FontResolver::new(&dir, None);

    resolver.resolve(Some("named.ttf"), 20);
    let loads_after_first = resolver.disk_loads;
    let fallbacks_after_first = resolver.fallbacks().len();

    resolver.resolve(Some("named.ttf"), 20);
    assert_eq!(resolver.disk_loads, loads_after_first);
    assert_eq!(resolver.fallbacks().len(), fallbacks_after_first);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn identifier_and_size_form_the_cache_key() {
    let dir = empty_font_dir("keys");
    let mut resolver = FontResolver::new(&dir, None);

    resolver.resolve(None, 20);
    resolver.resolve(None, 30);
    resolver.resolve(Some("other.ttf"), 20);
    assert_eq!(resolver.cache.len(), 3);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn nonexistent_font_dir_still_resolves() {
    let dir = std::env::temp_dir().join(format!(
        "scoregrid-fonts-gone-{}",
        std::process::id()
    ));
    let mut resolver = FontResolver::new(&dir, Some("fallback.ttf".to_string()));
    let handle = resolver.resolve(None, 16);
    assert!(handle.as_face().is_none());
}

#[test]
fn unparseable_candidate_files_are_skipped_by_the_scan() {
    let dir = empty_font_dir("scan");
    std::fs::write(dir.join("broken.ttf"), b"not a font").unwrap();
    std::fs::write(dir.join("ignored.txt"), b"not a font either").unwrap();

    let mut resolver = FontResolver::new(&dir, None);
    let handle = resolver.resolve(None, 20);
    assert!(handle.as_face().is_none());
    assert_eq!(resolver.fallbacks().last().unwrap().resolved, FallbackKind::Missing);

    std::fs::remove_dir_all(&dir).unwrap();
}
