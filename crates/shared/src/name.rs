/// Normalize an ingredient name for lookups: lowercase and trimmed.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Loose ingredient name comparison
///
/// Returns true when either name contains the other. Both names are expected to be
/// normalized already. This deliberately tolerates plurals, descriptors and brand names
/// ("fresh basil" vs "basil"), at the cost of the occasional false positive when a short
/// name happens to appear inside an unrelated longer one.
///
/// An empty name is contained in every name, so it matches everything.
pub fn fuzzy_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
