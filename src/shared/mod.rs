pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
}

/// Trims and lowercases a name for substring comparisons.
/// Returns `None` for missing or blank input so callers treat it as absent.
pub fn normalize(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

/// True when either string contains the other.
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[test]
fn normalize_blank_is_none() {
    assert!(normalize(None).is_none());
    assert!(normalize(Some("   ")).is_none());
}

#[test]
fn normalize_lowercases() {
    assert_eq!(normalize(Some(" Chuo Rapid ")).as_deref(), Some("chuo rapid"));
}

#[test]
fn contains_either_both_ways() {
    assert!(contains_either("yokohama line", "yokohama"));
    assert!(contains_either("yokohama", "yokohama line"));
    assert!(!contains_either("keiyo", "nambu"));
}
