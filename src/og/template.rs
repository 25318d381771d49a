//! Declarative OG image layouts, one per content kind.
//!
//! Templates are maud markup producing SVG: a fixed 1200×630 canvas with
//! background, frame, wrapped title, description, and an author/site
//! footer. Both templates share the same contract (post in, SVG string
//! out) and differ in theme and framing: posts get a full border box,
//! projects get a heavy accent bar down the left edge plus a category
//! label.
//!
//! All text is positioned on the monospace character grid from
//! [`super::layout`]; nothing here measures rendered glyphs.

use super::layout;
use super::render::{OG_HEIGHT, OG_WIDTH};
use crate::config::{SiteConfig, Theme};
use crate::types::Post;
use maud::{Markup, html};

const MARGIN: f32 = 48.0;
const PADDING: f32 = 48.0;

const TITLE_SIZE: f32 = 54.0;
const TITLE_LINE_HEIGHT: f32 = 72.0;
const TITLE_MAX_LINES: usize = 3;
const BODY_SIZE: f32 = 27.0;
const FOOTER_SIZE: f32 = 30.0;
const LABEL_SIZE: f32 = 24.0;

/// Blog post layout: bordered card, title block, footer rule.
pub fn post_template(post: &Post, site: &SiteConfig, family: &str) -> String {
    let theme = &site.colors.post;
    let text_x = MARGIN + PADDING;
    let text_width = OG_WIDTH as f32 - 2.0 * text_x;

    let svg = html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(OG_WIDTH) height=(OG_HEIGHT)
            viewBox=(format!("0 0 {OG_WIDTH} {OG_HEIGHT}")) {
            rect width="100%" height="100%" fill=(theme.background) {}
            rect x=(MARGIN) y=(MARGIN)
                width=(OG_WIDTH as f32 - 2.0 * MARGIN)
                height=(OG_HEIGHT as f32 - 2.0 * MARGIN)
                fill="none" stroke=(theme.accent) stroke-width="3" rx="12" {}
            (title_block(&post.title, text_x, 196.0, text_width, family, theme))
            (description_line(&post.description, text_x, 430.0, text_width, family, theme))
            line x1=(text_x) y1="496" x2=(OG_WIDTH as f32 - text_x) y2="496"
                stroke=(theme.accent) stroke-width="2" {}
            (footer(site, text_x, 548.0, family, theme))
        }
    };
    svg.into_string()
}

/// Project layout: accent bar, category label, title block, footer.
pub fn project_template(post: &Post, site: &SiteConfig, family: &str) -> String {
    let theme = &site.colors.project;
    let text_x = MARGIN + PADDING;
    let text_width = OG_WIDTH as f32 - text_x - MARGIN - PADDING;

    let svg = html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(OG_WIDTH) height=(OG_HEIGHT)
            viewBox=(format!("0 0 {OG_WIDTH} {OG_HEIGHT}")) {
            rect width="100%" height="100%" fill=(theme.background) {}
            rect x="0" y="0" width="24" height=(OG_HEIGHT) fill=(theme.accent) {}
            text x=(text_x) y="120"
                font-family=(family) font-size=(LABEL_SIZE) font-weight="bold"
                letter-spacing="6" fill=(theme.accent) { "PROJECT" }
            (title_block(&post.title, text_x, 216.0, text_width, family, theme))
            (description_line(&post.description, text_x, 450.0, text_width, family, theme))
            (footer(site, text_x, 548.0, family, theme))
        }
    };
    svg.into_string()
}

/// Wrapped title lines, anchored at the first baseline.
fn title_block(
    title: &str,
    x: f32,
    first_baseline: f32,
    width: f32,
    family: &str,
    theme: &Theme,
) -> Markup {
    let max_chars = layout::chars_that_fit(width, TITLE_SIZE);
    let lines = layout::wrap(title, max_chars, TITLE_MAX_LINES);
    html! {
        @for (i, line) in lines.iter().enumerate() {
            text x=(x) y=(first_baseline + i as f32 * TITLE_LINE_HEIGHT)
                font-family=(family) font-size=(TITLE_SIZE) font-weight="bold"
                fill=(theme.foreground) { (line) }
        }
    }
}

/// Single description line, truncated to fit.
fn description_line(
    description: &str,
    x: f32,
    baseline: f32,
    width: f32,
    family: &str,
    theme: &Theme,
) -> Markup {
    let max_chars = layout::chars_that_fit(width, BODY_SIZE);
    let line = layout::fit_line(description, max_chars);
    html! {
        @if !line.is_empty() {
            text x=(x) y=(baseline)
                font-family=(family) font-size=(BODY_SIZE)
                fill=(theme.foreground) fill-opacity="0.8" { (line) }
        }
    }
}

/// Author on the left, site title right-aligned.
fn footer(site: &SiteConfig, x: f32, baseline: f32, family: &str, theme: &Theme) -> Markup {
    html! {
        text x=(x) y=(baseline)
            font-family=(family) font-size=(FOOTER_SIZE)
            fill=(theme.foreground) { "by " (site.site.author) }
        text x=(OG_WIDTH as f32 - x) y=(baseline) text-anchor="end"
            font-family=(family) font-size=(FOOTER_SIZE) font-weight="bold"
            fill=(theme.accent) { (site.site.title) }
    }
}
