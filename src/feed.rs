//! RSS feed item mapping.
//!
//! The feed document itself (channel metadata, XML envelope) is the feed
//! generator's concern; this module only maps posts to the per-item
//! fields it consumes. Items cover visible posts, newest first, and each
//! item is dated by its effective timestamp so an edited post surfaces
//! in feed readers again.

use crate::config::SiteConfig;
use crate::sorting::sort_newest_first;
use crate::types::Post;
use crate::visibility::Schedule;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One feed item, in the shape the feed generator consumes.
#[derive(Debug, Clone, Serialize)]
pub struct FeedItem {
    /// Absolute URL of the post (`{website}{category}/{slug}/`).
    pub link: String,
    pub title: String,
    pub description: String,
    /// `mod_datetime` when present, else `pub_datetime`.
    pub pub_date: DateTime<Utc>,
}

/// Map the visible posts to feed items, newest first.
pub fn feed_items(posts: &[Post], site: &SiteConfig, schedule: &Schedule) -> Vec<FeedItem> {
    let visible: Vec<&Post> = posts.iter().filter(|p| schedule.is_visible(p)).collect();
    sort_newest_first(visible)
        .into_iter()
        .map(|post| FeedItem {
            link: format!("{}{}/{}/", site.site.website, post.kind.segment(), post.slug),
            title: post.title.clone(),
            description: post.description.clone(),
            pub_date: post.effective_datetime(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{post, wide_open_schedule};

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn maps_fields_and_builds_links() {
        let posts = vec![post("Hello World").pub_at("2024-01-01T00:00:00Z").build()];
        let items = feed_items(&posts, &site(), &wide_open_schedule());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link, "https://example.com/posts/hello-world/");
        assert_eq!(items[0].title, "Hello World");
        assert_eq!(items[0].pub_date, posts[0].pub_datetime);
    }

    #[test]
    fn modified_posts_use_mod_datetime() {
        let posts = vec![
            post("Edited")
                .pub_at("2024-01-01T00:00:00Z")
                .mod_at("2024-02-01T00:00:00Z")
                .build(),
        ];
        let items = feed_items(&posts, &site(), &wide_open_schedule());
        assert_eq!(items[0].pub_date, posts[0].mod_datetime.unwrap());
    }

    #[test]
    fn items_are_newest_first_and_drafts_are_excluded() {
        let posts = vec![
            post("Old").pub_at("2023-01-01T00:00:00Z").build(),
            post("Hidden").pub_at("2024-06-01T00:00:00Z").draft().build(),
            post("New").pub_at("2024-01-01T00:00:00Z").build(),
        ];
        let items = feed_items(&posts, &site(), &wide_open_schedule());
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old"]);
    }
}
