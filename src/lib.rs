//! # Monopress
//!
//! A minimal content pipeline for markdown blogs. Your filesystem is the
//! data source: markdown files with TOML front matter become posts and
//! projects, and monopress handles the part between files and pages —
//! which entries are public right now, how they are ordered, what the
//! tag index contains, and what their social preview images look like.
//!
//! # Architecture: Load, Select, Render
//!
//! ```text
//! 1. Load     content/  →  Site            (front matter → post records)
//! 2. Select   Site      →  visible posts   (schedule filter, sort, tags)
//! 3. Render   post      →  index.png       (SVG template → PNG buffer)
//! ```
//!
//! Everything after loading is pure: the selection functions take an
//! explicit [`visibility::Schedule`] (clock, margin, dev flag) instead of
//! reading the wall clock, so the same inputs always produce the same
//! listings — in tests and in builds alike.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Walks the content tree, parses `+++` TOML front matter into [`types::Post`] records |
//! | [`config`] | `config.toml` loading and validation: site identity, margins, fonts, OG themes |
//! | [`types`] | Shared records (`Post`, `PostKind`) |
//! | [`slug`] | URL-safe slug derivation for titles and tags |
//! | [`visibility`] | Draft/schedule predicate and the `Schedule` context |
//! | [`tags`] | Deduplicated tag index and tag queries |
//! | [`sorting`] | Stable newest-first ordering by effective date |
//! | [`og`] | Open Graph preview images: fonts, layout, SVG templates, PNG rasterization |
//! | [`feed`] | RSS feed item mapping |
//! | [`sitemap`] | Sitemap route inclusion predicate |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Scheduled Publishing With a Margin
//!
//! A post dated in the future is invisible until its time comes, which
//! turns "publish Friday 9am" into a front matter field instead of a
//! calendar reminder. Visibility uses a small grace margin (default 15
//! minutes) so a build started just before the hour does not ship a site
//! that misses the post by minutes. Drafts are a separate, stronger
//! switch: never public, in any mode.
//!
//! ## Maud Over Template Engines
//!
//! OG images start as SVG markup generated with
//! [Maud](https://maud.lambda.xyz/), a compile-time macro system:
//! malformed markup is a build error, interpolation is escaped by
//! default, and there is no template directory to ship. The same
//! reasoning applies to SVG as to HTML.
//!
//! ## Pure-Rust Rasterization (No Browser, No Native Libs)
//!
//! SVG becomes PNG through `resvg` (usvg for parsing and text layout,
//! tiny-skia for rasterization) — pure Rust, no headless browser, no C
//! dependencies. The fonts are two TTF files loaded from the content
//! tree exactly once at startup into a read-only store shared by all
//! renders; a missing or unparseable font aborts image generation
//! outright instead of producing previews with missing text.
//!
//! ## Monospace Layout Math
//!
//! Templates use a single monospace family, which makes text layout
//! arithmetic: every glyph advances 0.6em, so line wrapping is a
//! character-count computation (`og::layout`) that unit tests cover
//! without touching font files.
//!
//! ## Per-Entry Failure Isolation
//!
//! A malformed entry (bad TOML, bad timestamp) is skipped and reported
//! with its path and reason; one broken draft should not take down the
//! site build. Config errors and font errors, by contrast, are fatal —
//! they affect every page equally.

pub mod config;
pub mod feed;
pub mod og;
pub mod output;
pub mod sitemap;
pub mod slug;
pub mod sorting;
pub mod store;
pub mod tags;
pub mod types;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_helpers;
