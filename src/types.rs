//! Shared types used across the pipeline.
//!
//! A [`Post`] is the unit every stage consumes: the store produces them,
//! the visibility filter, tag aggregator, and sorter read them, and the
//! OG renderer turns them into images. Posts are immutable after load;
//! everything downstream takes `&Post`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which content category a post belongs to.
///
/// The two kinds carry identical data but live in different content
/// directories, list on different pages, and select different OG image
/// templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Post,
    Project,
}

impl PostKind {
    /// URL/directory segment for this category (`posts` or `projects`).
    pub fn segment(self) -> &'static str {
        match self {
            PostKind::Post => "posts",
            PostKind::Project => "projects",
        }
    }
}

/// A single content entry loaded from a markdown file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub kind: PostKind,
    /// URL slug derived from the title via [`crate::slug::slugify`].
    pub slug: String,
    pub title: String,
    /// Nominal publication time. Future values schedule the post.
    pub pub_datetime: DateTime<Utc>,
    /// Last-modified time, if the entry was edited after publication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_datetime: Option<DateTime<Utc>>,
    /// Summary shown in listings and feed items. From front matter, or
    /// an excerpt of the body when the front matter omits it.
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Drafts never appear in public listings, feeds, or OG generation.
    #[serde(default)]
    pub draft: bool,
    /// Author-supplied OG image path. When set, no image is generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    /// Raw markdown body.
    pub body: String,
}

impl Post {
    /// The timestamp used for ordering and feed dates: `mod_datetime`
    /// when present, else `pub_datetime`.
    pub fn effective_datetime(&self) -> DateTime<Utc> {
        self.mod_datetime.unwrap_or(self.pub_datetime)
    }
}
