//! SVG rasterization and PNG encoding.
//!
//! The last stage of the OG pipeline: parse the template's SVG into a
//! usvg tree (which also lays out text against the shared [`FontStore`]),
//! rasterize it onto a tiny-skia pixmap, and encode PNG bytes. Every call
//! allocates its own pixmap and only reads the font store, so renders are
//! safe to run concurrently.

use super::fonts::FontStore;
use super::template;
use super::OgError;
use crate::config::SiteConfig;
use crate::types::{Post, PostKind};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

/// Fixed OG canvas size, per the Open Graph recommended 1.91:1 ratio.
pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

/// Render the preview image for one post as PNG bytes.
///
/// The template is selected by `post.kind`; both kinds share this
/// contract. Failures (unparseable markup, allocation, encoding) abort
/// this one image with no fallback output.
pub fn render_og_image(
    post: &Post,
    fonts: &FontStore,
    site: &SiteConfig,
) -> Result<Vec<u8>, OgError> {
    let svg = match post.kind {
        PostKind::Post => template::post_template(post, site, fonts.family()),
        PostKind::Project => template::project_template(post, site, fonts.family()),
    };
    rasterize(&svg, fonts)
}

fn rasterize(svg: &str, fonts: &FontStore) -> Result<Vec<u8>, OgError> {
    let mut options = usvg::Options::default();
    options.fontdb = fonts.database();
    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| OgError::Svg(e.to_string()))?;

    let mut pixmap = Pixmap::new(OG_WIDTH, OG_HEIGHT)
        .ok_or_else(|| OgError::Raster("could not allocate pixmap".to_string()))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| OgError::PngEncode(e.to_string()))
}
