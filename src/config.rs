//! Site configuration module.
//!
//! Handles loading and validating the `config.toml` at the content root.
//! Config files are sparse: every option has a default and users override
//! only what they want. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! website = "https://example.com/"   # Absolute site URL, trailing slash
//! author = "Site Author"
//! title = "My Site"
//! description = "Posts and projects"
//! posts_per_page = 6
//! scheduled_post_margin_minutes = 15 # Grace window for scheduled posts
//!
//! [fonts]
//! family = "IBM Plex Mono"           # Family name inside the font files
//! regular = "assets/fonts/ibm-plex-mono-regular.ttf"
//! bold = "assets/fonts/ibm-plex-mono-bold.ttf"
//!
//! [colors.post]                      # OG image theme for blog posts
//! background = "#fefbfb"
//! foreground = "#282728"
//! accent = "#e0514d"
//!
//! [colors.project]                   # OG image theme for projects
//! background = "#282728"
//! foreground = "#eaedf3"
//! accent = "#ff6b01"
//! ```
//!
//! Font paths are relative to the content root (or absolute).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity and listing behavior.
    pub site: SiteInfo,
    /// Font files used by the OG image renderer.
    pub fonts: FontConfig,
    /// OG image color themes per content kind.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.posts_per_page == 0 {
            return Err(ConfigError::Validation(
                "site.posts_per_page must be at least 1".into(),
            ));
        }
        if self.site.scheduled_post_margin_minutes < 0 {
            return Err(ConfigError::Validation(
                "site.scheduled_post_margin_minutes must not be negative".into(),
            ));
        }
        if !self.site.website.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.website must end with a trailing slash".into(),
            ));
        }
        for theme in [&self.colors.post, &self.colors.project] {
            for color in [&theme.background, &theme.foreground, &theme.accent] {
                if !is_hex_color(color) {
                    return Err(ConfigError::Validation(format!(
                        "colors entries must be #rgb or #rrggbb hex values, got {color:?}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// The grace window during which a scheduled post already counts as
    /// published.
    pub fn scheduled_post_margin(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.site.scheduled_post_margin_minutes)
    }
}

fn is_hex_color(s: &str) -> bool {
    let Some(hex) = s.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Site identity and listing behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Absolute site URL with a trailing slash. Prefixes feed item links.
    pub website: String,
    /// Author name shown on generated OG images.
    pub author: String,
    /// Site title shown on generated OG images.
    pub title: String,
    /// Site description (feed metadata).
    pub description: String,
    /// Posts per paginated listing page.
    pub posts_per_page: usize,
    /// Minutes before `pub_datetime` at which a scheduled post becomes
    /// visible.
    pub scheduled_post_margin_minutes: i64,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            website: "https://example.com/".to_string(),
            author: "Site Author".to_string(),
            title: "My Site".to_string(),
            description: "Posts and projects".to_string(),
            posts_per_page: 6,
            scheduled_post_margin_minutes: 15,
        }
    }
}

/// Font files used by the OG image renderer.
///
/// One monospace family in two weights. Monospace is a rendering
/// requirement, not a taste: the title layout wraps by character count,
/// which is only exact when every glyph has the same advance width.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Family name as declared inside the font files.
    pub family: String,
    /// Regular-weight TTF, relative to the content root.
    pub regular: PathBuf,
    /// Bold-weight TTF, relative to the content root.
    pub bold: PathBuf,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "IBM Plex Mono".to_string(),
            regular: PathBuf::from("assets/fonts/ibm-plex-mono-regular.ttf"),
            bold: PathBuf::from("assets/fonts/ibm-plex-mono-bold.ttf"),
        }
    }
}

/// OG image color themes, one per content kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub post: Theme,
    pub project: Theme,
}

/// Colors for one OG image template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub background: String,
    pub foreground: String,
    pub accent: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#fefbfb".to_string(),
            foreground: "#282728".to_string(),
            accent: "#e0514d".to_string(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            post: Theme::default(),
            project: Theme {
                background: "#282728".to_string(),
                foreground: "#eaedf3".to_string(),
                accent: "#ff6b01".to_string(),
            },
        }
    }
}

/// Load `config.toml` from the content root.
///
/// A missing file yields the full default config; a present but invalid
/// file is an error (silently ignoring a typo'd config is worse than
/// failing the build).
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) {
        fs::write(dir.path().join("config.toml"), content).unwrap();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.site.posts_per_page, 6);
        assert_eq!(config.site.scheduled_post_margin_minutes, 15);
        assert_eq!(config.fonts.family, "IBM Plex Mono");
    }

    #[test]
    fn partial_config_overrides_only_named_values() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[site]
author = "Jane Doe"
"#,
        );
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.site.author, "Jane Doe");
        // Untouched values keep their defaults.
        assert_eq!(config.site.posts_per_page, 6);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[site]
athor = "typo"
"#,
        );
        assert!(matches!(load_config(dir.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[site\nbroken");
        assert!(matches!(load_config(dir.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn validation_rejects_zero_posts_per_page() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[site]
posts_per_page = 0
"#,
        );
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validation_rejects_bad_colors() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r##"
[colors.post]
background = "red"
foreground = "#282728"
accent = "#e0514d"
"##,
        );
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validation_rejects_website_without_trailing_slash() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[site]
website = "https://example.com"
"#,
        );
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn margin_converts_to_duration() {
        let config = SiteConfig::default();
        assert_eq!(config.scheduled_post_margin(), chrono::Duration::minutes(15));
    }
}
