//! Content loading: the filesystem is the data source.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/fonts/                # Font files for OG rendering
//! ├── posts/                       # Blog posts
//! │   ├── type-safety.md
//! │   └── 2024/scheduling.md       # Nesting is allowed, paths don't matter
//! └── projects/                    # Portfolio projects
//!     └── monopress.md
//! ```
//!
//! ## Entry Format
//!
//! Each `.md` file carries TOML front matter between `+++` lines,
//! followed by the markdown body:
//!
//! ```text
//! +++
//! title = "Type Safety"
//! pub_datetime = "2024-01-01T10:00:00Z"
//! tags = ["rust", "types"]
//! +++
//!
//! Body markdown...
//! ```
//!
//! `title` and `pub_datetime` are required; datetimes are RFC 3339
//! strings. When `description` is omitted, the first body paragraph
//! becomes the listing excerpt.
//!
//! ## Error Handling
//!
//! A malformed entry is fatal for that entry only: it is recorded in
//! [`Site::skipped`] with its path and reason, and the load carries on.
//! Config errors and IO errors on the tree walk still fail the whole
//! load.

use crate::config::{self, SiteConfig};
use crate::slug::slugify;
use crate::types::{Post, PostKind};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Why a single entry failed to parse.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("missing +++ front matter block")]
    MissingFrontMatter,
    #[error("front matter parse error: {0}")]
    FrontMatter(#[from] toml::de::Error),
    #[error("title must not be empty")]
    EmptyTitle,
}

/// An entry that failed to load, with enough context to fix it.
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything loaded from a content root.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub posts: Vec<Post>,
    pub projects: Vec<Post>,
    pub skipped: Vec<Skipped>,
}

impl Site {
    /// Entries of one category, optionally with drafts.
    pub fn entries(&self, kind: PostKind, include_drafts: bool) -> Vec<&Post> {
        let source = match kind {
            PostKind::Post => &self.posts,
            PostKind::Project => &self.projects,
        };
        source
            .iter()
            .filter(|p| include_drafts || !p.draft)
            .collect()
    }
}

/// Load config and all content entries from `root`.
pub fn load(root: &Path) -> Result<Site, StoreError> {
    let config = config::load_config(root)?;
    let mut skipped = Vec::new();
    let posts = load_category(root, PostKind::Post, &mut skipped)?;
    let projects = load_category(root, PostKind::Project, &mut skipped)?;
    Ok(Site {
        config,
        posts,
        projects,
        skipped,
    })
}

/// Load every `.md` entry under one category directory.
///
/// The walk is sorted by file name so load order (and with it the
/// first-seen tag spelling) is stable across platforms. A missing
/// category directory just yields no entries.
fn load_category(
    root: &Path,
    kind: PostKind,
    skipped: &mut Vec<Skipped>,
) -> Result<Vec<Post>, StoreError> {
    let dir = root.join(kind.segment());
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|e| e != "md") {
            continue;
        }
        let content = fs::read_to_string(path)?;
        match parse_entry(&content, kind) {
            Ok(post) => posts.push(post),
            Err(err) => skipped.push(Skipped {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }
    Ok(posts)
}

/// Front matter schema. Kept private: the public shape is [`Post`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    title: String,
    pub_datetime: DateTime<Utc>,
    mod_datetime: Option<DateTime<Utc>>,
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    draft: bool,
    og_image: Option<String>,
}

/// Parse one entry's text into a [`Post`].
pub fn parse_entry(content: &str, kind: PostKind) -> Result<Post, EntryError> {
    let (front, body) = split_front_matter(content).ok_or(EntryError::MissingFrontMatter)?;
    let fm: FrontMatter = toml::from_str(front)?;
    if fm.title.trim().is_empty() {
        return Err(EntryError::EmptyTitle);
    }

    let description = fm
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .or_else(|| excerpt(body))
        .unwrap_or_default();

    Ok(Post {
        kind,
        slug: slugify(&fm.title),
        title: fm.title,
        pub_datetime: fm.pub_datetime,
        mod_datetime: fm.mod_datetime,
        description,
        tags: fm.tags,
        draft: fm.draft,
        og_image: fm.og_image,
        body: body.to_string(),
    })
}

/// Split `+++`-delimited TOML front matter from the markdown body.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("+++")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
    let end = rest.find("\n+++")?;
    let front = rest[..end].trim_end_matches('\r');
    let body = rest[end + "\n+++".len()..].trim_start();
    Some((front, body))
}

const EXCERPT_MAX_CHARS: usize = 160;

/// Plain-text excerpt from the first markdown paragraph of `body`.
///
/// Inline formatting is flattened (link text survives, markup does not)
/// and long paragraphs are cut at a word boundary with an ellipsis.
pub fn excerpt(body: &str) -> Option<String> {
    use pulldown_cmark::{Event, Parser, Tag, TagEnd};

    let mut text = String::new();
    let mut in_paragraph = false;
    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) => {
                if !text.trim().is_empty() {
                    break;
                }
                in_paragraph = false;
            }
            Event::Text(t) if in_paragraph => text.push_str(&t),
            Event::Code(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        return Some(text.to_string());
    }
    let cut: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
    let cut = match cut.rfind(' ') {
        Some(pos) => &cut[..pos],
        None => &cut,
    };
    Some(format!("{}…", cut.trim_end()))
}
