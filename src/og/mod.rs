//! Open Graph preview image generation.
//!
//! Each post or project without an author-supplied image gets a generated
//! 1200×630 PNG social preview. The pipeline:
//!
//! ```text
//! Post ──template──► SVG markup ──usvg──► render tree ──tiny-skia──► PNG
//! ```
//!
//! The module is split into:
//! - **Fonts**: [`FontStore`], the construct-once font database shared by
//!   every render call
//! - **Layout**: pure character-grid math for monospace text (unit testable)
//! - **Template**: maud SVG layout trees, one per content kind
//! - **Render**: rasterization and PNG encoding
//!
//! Renders are independent and read-only over the font store, so callers
//! may run them in parallel (the CLI does, via rayon). Nothing is cached:
//! rendering the same post twice re-renders from scratch, which a
//! once-per-deploy build never notices.

mod fonts;
mod layout;
mod template;
mod render;

pub use fonts::FontStore;
pub use render::{OG_HEIGHT, OG_WIDTH, render_og_image};

use crate::types::Post;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OgError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("font file contains no usable faces: {0}")]
    NoFaces(PathBuf),
    #[error("font data contains no usable faces")]
    EmptyFontData,
    #[error("SVG parse error: {0}")]
    Svg(String),
    #[error("rasterization failed: {0}")]
    Raster(String),
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

/// The posts that need a generated image: not drafts, and without an
/// author-supplied `og_image`.
///
/// Callers run this once per category to build the static slug → image
/// mapping; the renderer itself never filters.
pub fn candidates(posts: &[Post]) -> Vec<&Post> {
    posts
        .iter()
        .filter(|p| !p.draft && p.og_image.is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::post;

    #[test]
    fn candidates_skip_drafts_and_custom_images() {
        let posts = vec![
            post("Needs image").build(),
            post("Has image").og_image("custom.png").build(),
            post("Draft").draft().build(),
        ];
        let c = candidates(&posts);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].title, "Needs image");
    }
}
