//! Post ordering for listings and feeds.
//!
//! Posts sort by effective timestamp (last modification when present,
//! else publication) with the newest first. The sort is stable: posts
//! sharing a timestamp keep their input order, so paginated listings are
//! reproducible across builds.

use crate::types::Post;
use std::cmp::Reverse;

/// Return references to `posts` ordered newest-first by effective
/// timestamp. The input is untouched.
///
/// No visibility filtering happens here; compose with
/// [`crate::visibility::Schedule::is_visible`] at the call site.
pub fn sorted_posts(posts: &[Post]) -> Vec<&Post> {
    sort_newest_first(posts.iter().collect())
}

/// Sort an already-collected set of post references in place and return
/// it. Used by callers that filter before sorting (tag queries, feeds).
pub fn sort_newest_first(mut posts: Vec<&Post>) -> Vec<&Post> {
    // Vec::sort_by_key is stable, which the tie-order guarantee relies on.
    posts.sort_by_key(|p| Reverse(p.effective_datetime()));
    posts
}
