//! Shared test utilities for the monopress test suite.
//!
//! Provides a fluent [`Post`] builder, timestamp parsing, a permissive
//! schedule, and a content-tree fixture writer so individual tests stay
//! focused on behavior instead of record plumbing.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let p = post("Type Safety")
//!     .pub_at("2024-01-01T10:00:00Z")
//!     .tags(&["rust"])
//!     .build();
//! assert!(wide_open_schedule().is_visible(&p));
//! ```

use crate::types::{Post, PostKind};
use crate::visibility::Schedule;
use chrono::{DateTime, Duration, Utc};
use std::path::Path;

/// Parse an RFC 3339 timestamp. Panics on bad input: fixtures are code.
pub fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap_or_else(|e| panic!("bad test timestamp {s:?}: {e}"))
}

/// A schedule far in the future with the default margin: every non-draft
/// post with a 20xx date is visible under it.
pub fn wide_open_schedule() -> Schedule {
    Schedule::at(utc("2030-01-01T00:00:00Z"), Duration::minutes(15), false)
}

/// Start building a post with sane defaults: published 2024-01-01,
/// not a draft, no tags, blog kind.
pub fn post(title: &str) -> PostBuilder {
    PostBuilder {
        post: Post {
            kind: PostKind::Post,
            slug: crate::slug::slugify(title),
            title: title.to_string(),
            pub_datetime: utc("2024-01-01T00:00:00Z"),
            mod_datetime: None,
            description: "A test entry.".to_string(),
            tags: Vec::new(),
            draft: false,
            og_image: None,
            body: String::new(),
        },
    }
}

pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    pub fn pub_at(mut self, s: &str) -> Self {
        self.post.pub_datetime = utc(s);
        self
    }

    pub fn mod_at(mut self, s: &str) -> Self {
        self.post.mod_datetime = Some(utc(s));
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.post.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn draft(mut self) -> Self {
        self.post.draft = true;
        self
    }

    pub fn og_image(mut self, path: &str) -> Self {
        self.post.og_image = Some(path.to_string());
        self
    }

    pub fn project(mut self) -> Self {
        self.post.kind = PostKind::Project;
        self
    }

    pub fn build(self) -> Post {
        self.post
    }
}

/// Write a minimal valid entry at `root/rel`, creating parent directories.
pub fn write_entry(root: &Path, rel: &str, title: &str, pub_datetime: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let content = format!(
        "+++\ntitle = \"{title}\"\npub_datetime = \"{pub_datetime}\"\n+++\n\nBody of {title}.\n"
    );
    std::fs::write(path, content).unwrap();
}
