//! Tag aggregation and tag-based queries.
//!
//! Tags are free-form strings in front matter; URLs and deduplication use
//! their slugs. Two spellings that slugify identically ("C++" and "c ++"
//! both become `c`) are the same tag, and the first spelling encountered
//! in post order stays as the display name. That first-seen rule is
//! observed site behavior and is kept on purpose; do not "fix" it to pick
//! an alphabetically better name.

use crate::slug::{slugify, slugify_all};
use crate::sorting::sort_newest_first;
use crate::types::Post;
use crate::visibility::Schedule;
use serde::Serialize;

/// A deduplicated tag: the slug used in URLs plus the original spelling
/// shown to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Slug, the deduplication and sort key.
    pub tag: String,
    /// First-encountered original spelling.
    pub tag_name: String,
}

/// Collect the distinct tags across all visible posts, sorted ascending
/// by slug.
///
/// Enumeration order is post order then per-post tag order; the dedup
/// pass runs before the sort so the first-seen spelling survives a slug
/// collision.
pub fn unique_tags(posts: &[Post], schedule: &Schedule) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();
    for post in posts.iter().filter(|p| schedule.is_visible(p)) {
        for name in &post.tags {
            let slug = slugify(name);
            if !tags.iter().any(|t| t.tag == slug) {
                tags.push(Tag {
                    tag: slug,
                    tag_name: name.clone(),
                });
            }
        }
    }
    // Slugs are ASCII lowercase, so byte order matches locale order.
    tags.sort_by(|a, b| a.tag.cmp(&b.tag));
    tags
}

/// Visible posts carrying `tag_slug`, newest first.
pub fn posts_by_tag<'a>(posts: &'a [Post], tag_slug: &str, schedule: &Schedule) -> Vec<&'a Post> {
    let matching: Vec<&Post> = posts
        .iter()
        .filter(|p| schedule.is_visible(p))
        .filter(|p| slugify_all(&p.tags).iter().any(|t| t == tag_slug))
        .collect();
    sort_newest_first(matching)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{post, wide_open_schedule};

    #[test]
    fn dedups_and_sorts_by_slug() {
        let posts = vec![
            post("One").tags(&["Rust", "Web"]).build(),
            post("Two").tags(&["rust", "Async"]).build(),
        ];
        let tags = unique_tags(&posts, &wide_open_schedule());
        let slugs: Vec<&str> = tags.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(slugs, vec!["async", "rust", "web"]);
    }

    #[test]
    fn first_seen_spelling_wins_on_collision() {
        // "C++" and "c  ++" both slugify to "c"; the earlier post's
        // spelling is the canonical display name.
        let posts = vec![
            post("One").tags(&["C++"]).build(),
            post("Two").tags(&["c  ++"]).build(),
        ];
        let tags = unique_tags(&posts, &wide_open_schedule());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag, "c");
        assert_eq!(tags[0].tag_name, "C++");
    }

    #[test]
    fn case_variants_collapse_to_first_spelling() {
        let posts = vec![post("One").tags(&["Rust", "rust", "RUST"]).build()];
        let tags = unique_tags(&posts, &wide_open_schedule());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag_name, "Rust");
    }

    #[test]
    fn draft_tags_are_excluded() {
        let posts = vec![
            post("Live").tags(&["public"]).build(),
            post("WIP").tags(&["secret"]).draft().build(),
        ];
        let tags = unique_tags(&posts, &wide_open_schedule());
        let slugs: Vec<&str> = tags.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(slugs, vec!["public"]);
    }

    #[test]
    fn no_duplicate_slugs_with_overlapping_tag_sets() {
        let posts = vec![
            post("One").tags(&["a", "b", "c"]).build(),
            post("Two").tags(&["b", "c", "d"]).build(),
            post("Three").tags(&["c", "d", "a"]).build(),
        ];
        let tags = unique_tags(&posts, &wide_open_schedule());
        let mut slugs: Vec<&str> = tags.iter().map(|t| t.tag.as_str()).collect();
        let sorted = slugs.clone();
        slugs.dedup();
        assert_eq!(slugs, sorted, "duplicate slug in output");
        assert_eq!(slugs, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn posts_by_tag_filters_and_sorts() {
        let posts = vec![
            post("Old").pub_at("2023-01-01T00:00:00Z").tags(&["Rust"]).build(),
            post("New").pub_at("2024-01-01T00:00:00Z").tags(&["rust"]).build(),
            post("Other").pub_at("2024-06-01T00:00:00Z").tags(&["go"]).build(),
            post("Hidden").pub_at("2024-01-01T00:00:00Z").tags(&["Rust"]).draft().build(),
        ];
        let by_tag = posts_by_tag(&posts, "rust", &wide_open_schedule());
        let titles: Vec<&str> = by_tag.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old"]);
    }

    #[test]
    fn posts_by_tag_empty_for_unknown_slug() {
        let posts = vec![post("One").tags(&["rust"]).build()];
        assert!(posts_by_tag(&posts, "haskell", &wide_open_schedule()).is_empty());
    }
}
