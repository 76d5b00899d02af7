//! Query slugs for output folder names.

/// Turns a raw query into a filesystem-safe folder name.
///
/// Every run of non-ASCII-alphanumeric characters becomes a single `_`,
/// the result is truncated to 80 characters, and an empty result falls
/// back to `query`.
#[must_use]
pub fn query_slug(query: &str) -> String {
    let mut slug = String::new();
    let mut last_was_separator = false;
    for ch in query.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    slug.truncate(80);
    if slug.is_empty() {
        "query".to_string()
    } else {
        slug
    }
}
