//! Persisted JSON artifacts.
//!
//! The four JSON files under the data directory are the only contract with
//! the web layer. Writes are whole-file replacements; loads treat malformed
//! data as fatal since the emitters have no other source of truth.

use std::{
    fs,
    path::{Path, PathBuf},
};

use insight_core::Post;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::indexes::{CategoryCount, SeriesGroup, TagCount};

/// Persisted posts artifact name.
pub const POSTS_FILE: &str = "posts.json";
/// Persisted category index artifact name.
pub const CATEGORIES_FILE: &str = "categories.json";
/// Persisted series index artifact name.
pub const SERIES_FILE: &str = "series.json";
/// Persisted tag index artifact name.
pub const TAGS_FILE: &str = "tags.json";

/// Artifact store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted JSON failed to parse or serialize.
    #[error("malformed persisted data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Reads and writes the persisted JSON artifacts.
#[derive(Debug)]
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Create a store rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the artifacts.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write all four artifacts.
    pub fn write(
        &self,
        posts: &[Post],
        categories: &[CategoryCount],
        series: &[SeriesGroup],
        tags: &[TagCount],
    ) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        self.write_artifact(POSTS_FILE, posts)?;
        self.write_artifact(CATEGORIES_FILE, categories)?;
        self.write_artifact(SERIES_FILE, series)?;
        self.write_artifact(TAGS_FILE, tags)?;

        Ok(())
    }

    /// Load the persisted post collection.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let path = self.data_dir.join(POSTS_FILE);
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed { path, source })
    }

    fn write_artifact<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.data_dir.join(name);
        let json =
            serde_json::to_string_pretty(value).map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, json)?;

        info!(path = %path.display(), "wrote artifact");
        Ok(())
    }
}
