//! Build orchestration.
//!
//! Coordinates the full generation run: ingest the content tree, derive the
//! indexes, persist the JSON artifacts, then regenerate the SEO artifacts
//! from the persisted collection. The emitters never see the in-memory
//! ingestion result; they read back what was written, the same way the
//! standalone commands do.

use std::{fs, path::Path, time::Instant};

use chrono::Utc;
use insight_core::Config;
use thiserror::Error;
use tracing::info;

use crate::{
    indexes::{build_categories, build_series, build_tags},
    ingest::{IngestError, IngestFailure, Ingestor},
    robots::RobotsGenerator,
    rss::RssGenerator,
    sitemap::SitemapGenerator,
    store::{DataStore, StoreError},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ingestion error.
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// Artifact store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of posts persisted.
    pub posts: usize,

    /// Number of categories in the index.
    pub categories: usize,

    /// Number of series groups.
    pub series: usize,

    /// Number of distinct tags.
    pub tags: usize,

    /// Folders that failed ingestion, with reasons.
    pub failures: Vec<IngestFailure>,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Orchestrates the generation run.
#[derive(Debug)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the full pipeline: data artifacts plus feed, sitemap, robots.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            content = %self.config.build.content_dir,
            output = %self.config.build.output_dir,
            "starting build"
        );

        let mut stats = self.generate_data()?;
        self.generate_feed()?;
        self.generate_sitemap()?;
        self.generate_robots()?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            posts = stats.posts,
            failures = stats.failures.len(),
            categories = stats.categories,
            series = stats.series,
            tags = stats.tags,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Ingest the content tree and persist the four JSON artifacts.
    pub fn generate_data(&self) -> Result<BuildStats> {
        let start = Instant::now();

        let ingestor = Ingestor::new(self.config.clone(), &self.config.build.content_dir);
        let report = ingestor.ingest()?;

        let categories = build_categories(&report.posts);
        let series = build_series(&report.posts);
        let tags = build_tags(&report.posts);

        self.store().write(&report.posts, &categories, &series, &tags)?;

        Ok(BuildStats {
            posts: report.posts.len(),
            categories: categories.len(),
            series: series.len(),
            tags: tags.len(),
            failures: report.failures,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Regenerate rss.xml from the persisted posts.
    pub fn generate_feed(&self) -> Result<()> {
        let posts = self.store().load_posts()?;
        let xml = RssGenerator::new(self.config.clone()).generate(&posts, Utc::now());
        self.write_output("rss.xml", &xml)
    }

    /// Regenerate sitemap.xml from the persisted posts.
    pub fn generate_sitemap(&self) -> Result<()> {
        let posts = self.store().load_posts()?;
        let xml = SitemapGenerator::new(self.config.clone()).generate(&posts, Utc::now());
        self.write_output("sitemap.xml", &xml)
    }

    /// Regenerate robots.txt.
    pub fn generate_robots(&self) -> Result<()> {
        let policy = RobotsGenerator::new(self.config.clone()).generate();
        self.write_output("robots.txt", &policy)
    }

    fn store(&self) -> DataStore {
        DataStore::new(&self.config.build.data_dir)
    }

    fn write_output(&self, name: &str, contents: &str) -> Result<()> {
        let dir = Path::new(&self.config.build.output_dir);
        fs::create_dir_all(dir)?;

        let path = dir.join(name);
        fs::write(&path, contents)?;

        info!(path = %path.display(), "wrote artifact");
        Ok(())
    }
}
