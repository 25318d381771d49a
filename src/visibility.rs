//! Draft and schedule filtering.
//!
//! A post is publicly visible when it is not a draft and its publication
//! time has arrived. "Arrived" includes a small grace margin so a build
//! kicked off shortly before a scheduled timestamp still includes the
//! post, instead of publishing a site that misses it by minutes.
//!
//! Dev mode (local preview) shows every non-draft post regardless of
//! schedule. Drafts are never visible anywhere; the store's
//! draft-inclusion flag exists for tooling that inspects them explicitly.
//!
//! The predicate is pure over an injected `now`, so tests pin the clock
//! instead of racing it.

use crate::config::SiteConfig;
use crate::types::Post;
use chrono::{DateTime, Duration, Utc};

/// Core visibility predicate.
///
/// Returns false for drafts. Otherwise true when `dev_mode` is set, or
/// when `now` is strictly past `pub_datetime - margin`.
pub fn is_visible(post: &Post, now: DateTime<Utc>, margin: Duration, dev_mode: bool) -> bool {
    if post.draft {
        return false;
    }
    dev_mode || now > post.pub_datetime - margin
}

/// Everything the visibility predicate needs, captured once at the edge.
///
/// Constructed a single time per run (from config plus the CLI's dev
/// flag) and passed by reference into the tag aggregator, tag queries,
/// and feed mapping, so the clock is read exactly once per run.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    pub now: DateTime<Utc>,
    pub margin: Duration,
    pub dev_mode: bool,
}

impl Schedule {
    /// Schedule anchored at the current wall-clock time.
    pub fn new(config: &SiteConfig, dev_mode: bool) -> Self {
        Self::at(Utc::now(), config.scheduled_post_margin(), dev_mode)
    }

    /// Schedule anchored at an explicit instant. Tests use this.
    pub fn at(now: DateTime<Utc>, margin: Duration, dev_mode: bool) -> Self {
        Self { now, margin, dev_mode }
    }

    pub fn is_visible(&self, post: &Post) -> bool {
        is_visible(post, self.now, self.margin, self.dev_mode)
    }
}
