use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize an author name into the key used for aggregation:
/// lowercased, with accents and other combining marks stripped, so
/// "Éric" and "eric" land in the same bucket.
pub fn normalize_author(raw: &str) -> String {
    raw.to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
