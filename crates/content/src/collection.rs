//! Named content collections and their glob-based loader.

use crate::entry::ContentEntry;
use inkpress_core::{FrontmatterError, split_frontmatter};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a collection.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The source glob pattern itself was invalid.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying pattern error.
        source: glob::PatternError,
    },
    /// IO error while reading a source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The source file's frontmatter could not be extracted.
    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),
    /// The frontmatter did not match the entry schema.
    #[error("schema validation failed: {0}")]
    Schema(#[from] serde_json::Error),
}

/// A named, ordered set of content entries.
///
/// Order is the loader's deterministic discovery order; the query layer's
/// stable filter preserves it.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    name: String,
    entries: Vec<ContentEntry>,
}

impl Collection {
    /// Creates a collection from already-loaded entries.
    pub fn new(name: impl Into<String>, entries: Vec<ContentEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// The collection name, e.g. `"blog"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in discovery order.
    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a collection from source files matching `pattern` under
    /// `base`, e.g. `Collection::load("blog", content_dir, "**/*.md")`.
    ///
    /// Each matched file is split into frontmatter and body; the
    /// frontmatter is validated against the entry schema. Files that fail
    /// validation are skipped with a warning rather than failing the whole
    /// collection.
    pub fn load(
        name: impl Into<String>,
        base: &Path,
        pattern: &str,
    ) -> Result<Self, ContentError> {
        let full_pattern = base.join(pattern).to_string_lossy().into_owned();
        let paths = glob::glob(&full_pattern).map_err(|source| ContentError::Pattern {
            pattern: full_pattern.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for path in paths {
            match path {
                Ok(path) if path.is_file() => match load_entry(&path) {
                    Ok(entry) => entries.push(entry),
                    Err(err) => {
                        log::warn!("skipping {}: {err}", path.display());
                    }
                },
                Ok(_) => {}
                Err(err) => {
                    log::warn!("skipping unreadable path: {err}");
                }
            }
        }

        let collection = Self::new(name, entries);
        log::debug!(
            "loaded collection '{}' with {} entries",
            collection.name,
            collection.len()
        );
        Ok(collection)
    }
}

fn load_entry(path: &Path) -> Result<ContentEntry, ContentError> {
    let source = fs::read_to_string(path)?;
    let split = split_frontmatter(&source)?;
    Ok(serde_json::from_value(split.value)?)
}
