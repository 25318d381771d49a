//! CLI output formatting.
//!
//! Each subcommand has a `format_*` function returning `Vec<String>` and
//! a `print_*` wrapper that writes to stdout. Format functions are pure,
//! so tests assert on lines instead of capturing stdout.
//!
//! Display is information-centric: the header line for an entry is its
//! positional index plus title, with timestamps, tags, and source paths
//! as indented context lines.
//!
//! ```text
//! Posts
//! 001 Scheduling Posts
//!     Published: 2024-06-01 (modified 2024-06-10)
//!     Tags: meta, scheduling
//! ```

use crate::store::Site;
use crate::tags::Tag;
use crate::types::Post;

/// `check`: category counts plus every skipped entry with its reason.
pub fn format_check_output(site: &Site) -> Vec<String> {
    let mut lines = Vec::new();
    let drafts = |posts: &[Post]| posts.iter().filter(|p| p.draft).count();
    lines.push(format!(
        "Posts: {} ({} draft)",
        site.posts.len(),
        drafts(&site.posts)
    ));
    lines.push(format!(
        "Projects: {} ({} draft)",
        site.projects.len(),
        drafts(&site.projects)
    ));
    if !site.skipped.is_empty() {
        lines.push(String::new());
        lines.push(format!("Skipped {} malformed entries", site.skipped.len()));
        for skipped in &site.skipped {
            lines.push(format!("    {}", skipped.path.display()));
            lines.push(format!("        {}", skipped.reason));
        }
    }
    lines
}

/// `list`: indexed post headers with publication and tag context.
pub fn format_post_list(heading: &str, posts: &[&Post]) -> Vec<String> {
    let mut lines = vec![heading.to_string()];
    if posts.is_empty() {
        lines.push("    (none)".to_string());
        return lines;
    }
    for (i, post) in posts.iter().enumerate() {
        lines.push(format!("{:03} {}", i + 1, post.title));
        let mut published = format!("    Published: {}", post.pub_datetime.format("%Y-%m-%d"));
        if let Some(modified) = post.mod_datetime {
            published.push_str(&format!(" (modified {})", modified.format("%Y-%m-%d")));
        }
        lines.push(published);
        if !post.tags.is_empty() {
            lines.push(format!("    Tags: {}", post.tags.join(", ")));
        }
    }
    lines
}

/// `tags`: one line per tag with its slug and how many posts carry it.
pub fn format_tag_list(tags: &[(Tag, usize)]) -> Vec<String> {
    if tags.is_empty() {
        return vec!["(no tags)".to_string()];
    }
    tags.iter()
        .map(|(tag, count)| {
            let noun = if *count == 1 { "post" } else { "posts" };
            format!("{} ({} {noun})    Slug: {}", tag.tag_name, count, tag.tag)
        })
        .collect()
}

/// `og`: every generated image path plus a total.
pub fn format_og_summary(rendered: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = rendered.iter().map(|rel| format!("    {rel}")).collect();
    lines.push(format!("Generated {} OG images", rendered.len()));
    lines
}

pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{line}");
    }
}

pub fn print_post_list(heading: &str, posts: &[&Post]) {
    for line in format_post_list(heading, posts) {
        println!("{line}");
    }
}

pub fn print_tag_list(tags: &[(Tag, usize)]) {
    for line in format_tag_list(tags) {
        println!("{line}");
    }
}

pub fn print_og_summary(rendered: &[String]) {
    for line in format_og_summary(rendered) {
        println!("{line}");
    }
}
