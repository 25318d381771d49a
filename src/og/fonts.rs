//! The process-wide font store.
//!
//! Rendering needs the regular and bold weights of one monospace family.
//! Both files load exactly once, before any render call, into a fontdb
//! database that is shared read-only (`Arc`) by every subsequent render.
//! A failed load is fatal for the whole rendering subsystem: there is no
//! per-image retry and no fallback font, because a preview image with
//! missing glyph runs is worse than a failed build.

use super::OgError;
use crate::config::FontConfig;
use resvg::usvg::fontdb;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Construct-once, read-only font database for OG rendering.
///
/// Built at startup and passed by reference into [`super::render_og_image`].
/// Cloning is cheap (the database is behind an `Arc`).
#[derive(Debug, Clone)]
pub struct FontStore {
    database: Arc<fontdb::Database>,
    family: String,
}

impl FontStore {
    /// Load the font files named in `config`, resolved against the
    /// content root.
    ///
    /// Each file must contribute at least one face; a file fontdb cannot
    /// parse fails the load with [`OgError::NoFaces`].
    pub fn load(root: &Path, config: &FontConfig) -> Result<Self, OgError> {
        let mut database = fontdb::Database::new();
        for path in [&config.regular, &config.bold] {
            let resolved = if path.is_absolute() {
                path.clone()
            } else {
                root.join(path)
            };
            let before = database.len();
            database.load_font_data(fs::read(&resolved)?);
            if database.len() == before {
                return Err(OgError::NoFaces(resolved));
            }
        }
        Ok(Self {
            database: Arc::new(database),
            family: config.family.clone(),
        })
    }

    /// Build a store from in-memory font data (embedded fonts, tests).
    pub fn from_data(family: &str, faces: Vec<Vec<u8>>) -> Result<Self, OgError> {
        let mut database = fontdb::Database::new();
        for data in faces {
            database.load_font_data(data);
        }
        if database.is_empty() {
            return Err(OgError::EmptyFontData);
        }
        Ok(Self {
            database: Arc::new(database),
            family: family.to_string(),
        })
    }

    /// Family name to reference from SVG `font-family` attributes.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub(crate) fn database(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.database)
    }

    /// Store backed by whatever fonts the host system has. Rendering
    /// tests only assert structural output (PNG signature, dimensions),
    /// so they work even when no font resolves.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        let mut database = fontdb::Database::new();
        database.load_system_fonts();
        Self {
            database: Arc::new(database),
            family: "monospace".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_font_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = FontConfig::default();
        assert!(matches!(
            FontStore::load(dir.path(), &config),
            Err(OgError::Io(_))
        ));
    }

    #[test]
    fn unparseable_font_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let fonts = dir.path().join("assets/fonts");
        fs::create_dir_all(&fonts).unwrap();
        fs::write(fonts.join("ibm-plex-mono-regular.ttf"), b"not a font").unwrap();
        fs::write(fonts.join("ibm-plex-mono-bold.ttf"), b"not a font").unwrap();
        let config = FontConfig::default();
        assert!(matches!(
            FontStore::load(dir.path(), &config),
            Err(OgError::NoFaces(_))
        ));
    }

    #[test]
    fn from_data_rejects_empty_databases() {
        assert!(matches!(
            FontStore::from_data("Mono", vec![b"garbage".to_vec()]),
            Err(OgError::EmptyFontData)
        ));
    }
}
