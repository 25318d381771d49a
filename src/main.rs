use clap::{Parser, Subcommand};
use monopress::types::{Post, PostKind};
use monopress::visibility::Schedule;
use monopress::{feed, og, output, sorting, store, tags};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monopress")]
#[command(about = "Content pipeline for markdown blogs")]
#[command(long_about = "\
Content pipeline for markdown blogs

Your filesystem is the data source. Markdown files with TOML front matter
become posts and projects; monopress filters them by schedule, aggregates
tags, orders listings, and renders Open Graph preview images.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── assets/fonts/                # Regular + bold TTF for OG rendering
  ├── posts/
  │   ├── type-safety.md           # +++ TOML front matter +++ then markdown
  │   └── 2024/scheduling.md       # Nesting is fine
  └── projects/
      └── monopress.md

Front matter:

  +++
  title = \"Type Safety\"             # required
  pub_datetime = \"2024-01-01T10:00:00Z\"  # required, RFC 3339
  mod_datetime = \"2024-02-01T09:00:00Z\"  # optional
  description = \"...\"               # optional, falls back to first paragraph
  tags = [\"rust\", \"types\"]          # optional
  draft = true                      # optional, hides the entry everywhere
  og_image = \"custom.png\"           # optional, skips OG generation
  +++

Posts dated in the future stay hidden until their time arrives (minus a
small configurable margin). Pass --dev to preview scheduled posts early;
drafts stay hidden regardless.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory for generated images and manifests
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Dev mode: show scheduled (future-dated) posts ahead of time
    #[arg(long, global = true)]
    dev: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the content tree and report malformed entries
    Check,
    /// List visible posts, newest first
    List {
        /// List projects instead of blog posts
        #[arg(long)]
        projects: bool,
        /// Only posts carrying this tag (accepts a tag name or slug)
        #[arg(long)]
        tag: Option<String>,
        /// Machine-readable JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },
    /// Print the distinct tags across all visible posts
    Tags {
        /// Machine-readable JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },
    /// Render OG preview images for every visible entry without one
    Og,
    /// Print feed items (link, title, description, pub date) as JSON
    Feed,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let site = store::load(&cli.source)?;
    let schedule = Schedule::new(&site.config, cli.dev);

    match cli.command {
        Command::Check => {
            output::print_check_output(&site);
            println!("Content is valid");
        }
        Command::List {
            projects,
            tag,
            json,
        } => {
            let kind = if projects {
                PostKind::Project
            } else {
                PostKind::Post
            };
            let source = match kind {
                PostKind::Post => &site.posts,
                PostKind::Project => &site.projects,
            };
            let listed: Vec<&Post> = match &tag {
                Some(tag) => tags::posts_by_tag(source, &monopress::slug::slugify(tag), &schedule),
                None => sorting::sort_newest_first(
                    source.iter().filter(|p| schedule.is_visible(p)).collect(),
                ),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&listed)?);
            } else {
                let heading = match (kind, &tag) {
                    (PostKind::Post, None) => "Posts".to_string(),
                    (PostKind::Project, None) => "Projects".to_string(),
                    (kind, Some(tag)) => format!("{} tagged {tag}", heading_for(kind)),
                };
                output::print_post_list(&heading, &listed);
            }
        }
        Command::Tags { json } => {
            let unique = tags::unique_tags(&site.posts, &schedule);
            if json {
                println!("{}", serde_json::to_string_pretty(&unique)?);
            } else {
                let counted: Vec<_> = unique
                    .into_iter()
                    .map(|tag| {
                        let count = tags::posts_by_tag(&site.posts, &tag.tag, &schedule).len();
                        (tag, count)
                    })
                    .collect();
                output::print_tag_list(&counted);
            }
        }
        Command::Og => {
            // Fonts load once, before any render; a bad font setup aborts
            // the whole run rather than failing image by image.
            let fonts = og::FontStore::load(&cli.source, &site.config.fonts)?;
            let mut manifest: BTreeMap<String, String> = BTreeMap::new();
            let mut rendered: Vec<String> = Vec::new();

            for kind in [PostKind::Post, PostKind::Project] {
                let source = match kind {
                    PostKind::Post => &site.posts,
                    PostKind::Project => &site.projects,
                };
                let candidates = og::candidates(source);
                // Independent renders over a read-only font store.
                let images = candidates
                    .into_par_iter()
                    .map(|post| {
                        og::render_og_image(post, &fonts, &site.config)
                            .map(|png| (post.slug.clone(), png))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                for (slug, png) in images {
                    let dir = cli.output.join(kind.segment()).join(&slug);
                    std::fs::create_dir_all(&dir)?;
                    std::fs::write(dir.join("index.png"), png)?;
                    let rel = format!("{}/{}/index.png", kind.segment(), slug);
                    manifest.insert(format!("{}/{}", kind.segment(), slug), rel.clone());
                    rendered.push(rel);
                }
            }

            let manifest_path = cli.output.join("og-manifest.json");
            std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
            output::print_og_summary(&rendered);
            println!("Manifest: {}", manifest_path.display());
        }
        Command::Feed => {
            let items = feed::feed_items(&site.posts, &site.config, &schedule);
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}

fn heading_for(kind: PostKind) -> &'static str {
    match kind {
        PostKind::Post => "Posts",
        PostKind::Project => "Projects",
    }
}
