//! Sitemap route filtering.
//!
//! The sitemap generator feeds every site-relative path through
//! [`included_in_sitemap`]. Listing chrome is excluded: tag pages,
//! search, and the numbered pagination pages all present content that is
//! already reachable (and better described) through the post and project
//! URLs themselves.

/// Whether a site-relative path belongs in the sitemap.
///
/// Excluded:
/// - `/tags` and everything below it
/// - `/search`
/// - `/posts/<n>/` and `/projects/<n>/` where `<n>` is a page number
///
/// Post and project detail pages (`/posts/<slug>/`) stay included; only
/// purely numeric segments count as pagination.
pub fn included_in_sitemap(path: &str) -> bool {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["tags", ..] => false,
        ["search"] => false,
        ["posts" | "projects", page] if is_page_number(page) => false,
        _ => true,
    }
}

fn is_page_number(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}
