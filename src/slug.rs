//! Slug derivation for titles and tags.
//!
//! Slugs appear in URLs (`/posts/<slug>/`), generated image paths, and as
//! the deduplication key for tags, so the rules are deliberately strict:
//! ASCII lowercase alphanumerics separated by single hyphens, nothing else.
//!
//! The function is idempotent (`slugify(slugify(x)) == slugify(x)`), which
//! lets callers re-slugify freely instead of tracking whether a string has
//! already been converted.

/// Convert a display string into a URL-safe slug.
///
/// - Lowercases and trims the input
/// - Replaces each run of non-alphanumeric characters with one hyphen
/// - Strips leading and trailing hyphens
///
/// ```
/// use monopress::slug::slugify;
///
/// assert_eq!(slugify("Type Safety in Rust"), "type-safety-in-rust");
/// assert_eq!(slugify("  C++  "), "c");
/// assert_eq!(slugify("Déjà vu"), "d-j-vu");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Slugify every element of a slice, preserving order.
///
/// No deduplication: callers that need a set (the tag aggregator) dedup
/// themselves, and callers that need positional lookup rely on the output
/// lining up with the input.
pub fn slugify_all(inputs: &[String]) -> Vec<String> {
    inputs.iter().map(|s| slugify(s)).collect()
}
