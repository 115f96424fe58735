//! Post ingestion.
//!
//! Walks the content tree `{category}/{post-folder}/index.md` and assembles
//! one post record per folder. A bad document fails only its own folder; the
//! run keeps going and reports every failure alongside the imported posts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use insight_core::{
    Config, Post,
    content::{self, ImageRef},
    frontmatter,
};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Ingestion errors. Only root-level problems are fatal.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The content root itself could not be read.
    #[error("unreadable content root {path}: {source}")]
    ContentRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// One folder that could not be turned into a post.
#[derive(Debug, Clone)]
pub struct IngestFailure {
    /// The document (or folder) that failed.
    pub source: PathBuf,

    /// Human-readable reason.
    pub reason: String,
}

/// Outcome of a full ingestion run.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Successfully imported posts, in sorted walk order.
    pub posts: Vec<Post>,

    /// Folders that were skipped, with reasons.
    pub failures: Vec<IngestFailure>,
}

/// A candidate post folder found during the walk.
#[derive(Debug, Clone)]
struct PostFolder {
    category: String,
    slug: String,
    path: PathBuf,
}

impl PostFolder {
    fn document_path(&self) -> PathBuf {
        self.path.join("index.md")
    }
}

/// Walks the content tree and parses post documents.
#[derive(Debug)]
pub struct Ingestor {
    config: Config,
    content_dir: PathBuf,
}

impl Ingestor {
    /// Create a new ingestor rooted at `content_dir`.
    #[must_use]
    pub fn new(config: Config, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            content_dir: content_dir.into(),
        }
    }

    /// Ingest the whole tree.
    pub fn ingest(&self) -> Result<IngestReport> {
        info!(dir = %self.content_dir.display(), "ingesting content");

        let (folders, mut failures) = self.scan()?;
        info!(count = folders.len(), "found post folders");

        // Per-folder parsing is independent; the folder list is already
        // sorted, and collect keeps indices, so the fan-out stays
        // deterministic.
        let outcomes: Vec<_> = folders
            .par_iter()
            .map(|folder| self.ingest_folder(folder))
            .collect();

        let mut posts = Vec::new();
        for (folder, outcome) in folders.iter().zip(outcomes) {
            match outcome {
                Ok(post) => {
                    debug!(slug = %post.slug, category = %post.category, "imported post");
                    posts.push(post);
                }
                Err(reason) => {
                    warn!(path = %folder.document_path().display(), %reason, "skipping folder");
                    failures.push(IngestFailure {
                        source: folder.document_path(),
                        reason,
                    });
                }
            }
        }

        info!(
            posts = posts.len(),
            failures = failures.len(),
            "ingestion complete"
        );

        Ok(IngestReport { posts, failures })
    }

    /// Find candidate post folders, two levels deep.
    ///
    /// Non-directories are skipped at both levels. An unreadable category
    /// directory is recorded as a failure rather than aborting the walk; an
    /// unreadable root is fatal.
    fn scan(&self) -> Result<(Vec<PostFolder>, Vec<IngestFailure>)> {
        let mut folders = Vec::new();
        let mut failures = Vec::new();

        let categories =
            read_dir_sorted(&self.content_dir).map_err(|source| IngestError::ContentRoot {
                path: self.content_dir.clone(),
                source,
            })?;

        for category_path in categories {
            if !category_path.is_dir() {
                continue;
            }
            let Some(category) = file_name_string(&category_path) else {
                continue;
            };

            let entries = match read_dir_sorted(&category_path) {
                Ok(entries) => entries,
                Err(e) => {
                    failures.push(IngestFailure {
                        source: category_path.clone(),
                        reason: format!("unreadable category directory: {e}"),
                    });
                    continue;
                }
            };

            for folder_path in entries {
                if !folder_path.is_dir() {
                    continue;
                }
                let Some(slug) = file_name_string(&folder_path) else {
                    continue;
                };

                folders.push(PostFolder {
                    category: category.clone(),
                    slug,
                    path: folder_path,
                });
            }
        }

        Ok((folders, failures))
    }

    /// Assemble a single post from its folder.
    fn ingest_folder(&self, folder: &PostFolder) -> std::result::Result<Post, String> {
        let document = folder.document_path();
        if !document.is_file() {
            return Err("no index.md document".to_string());
        }

        let raw = fs::read_to_string(&document).map_err(|e| format!("unreadable document: {e}"))?;
        let (front, body) = frontmatter::parse(&raw, &document).map_err(|e| e.to_string())?;

        let excerpt = content::excerpt(&body);
        let featured_image = content::first_image(&body).map(|image| match image {
            ImageRef::Absolute(url) => url,
            // Relative targets resolve against the source folder location,
            // not the (possibly overridden) category.
            ImageRef::Relative(path) => format!(
                "/{}/{}/{}/{}",
                self.content_root_name(),
                folder.category,
                folder.slug,
                path
            ),
        });

        let category = front
            .category
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| folder.category.clone());

        let seo_title = format!("{} | {}", front.title, self.config.site.title);
        let seo_description = front.description.clone().unwrap_or_else(|| excerpt.clone());
        let seo_keywords = front.tags.join(", ");

        Ok(Post {
            title: front.title,
            slug: folder.slug.clone(),
            content: body,
            excerpt,
            category,
            tags: front.tags,
            series: front.series,
            featured_image,
            published: true,
            seo_title,
            seo_description,
            seo_keywords,
            created_at: front.date,
            updated_at: front.update,
        })
    }

    fn content_root_name(&self) -> String {
        self.content_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "contents".to_string())
    }
}

fn read_dir_sorted(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();
    Ok(entries)
}

fn file_name_string(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use insight_core::Config;
    use tempfile::TempDir;

    use super::*;

    fn write_post(root: &Path, category: &str, folder: &str, document: &str) {
        let dir = root.join(category).join(folder);
        fs::create_dir_all(&dir).expect("create post folder");
        fs::write(dir.join("index.md"), document).expect("write document");
    }

    fn ingest(root: &Path) -> IngestReport {
        Ingestor::new(Config::default(), root)
            .ingest()
            .expect("ingest")
    }

    #[test]
    fn test_ingest_basic_scenario() {
        let root = TempDir::new().expect("tempdir");
        write_post(
            root.path(),
            "stocks",
            "2024-tech-review",
            "---\ntitle: \"Tech Review\"\ndate: \"2024-03-01\"\ntags:\n- ai\n- semiconductors\n---\n\nBig year for chips.\n",
        );

        let report = ingest(root.path());

        assert!(report.failures.is_empty());
        assert_eq!(report.posts.len(), 1);
        let post = &report.posts[0];
        assert_eq!(post.title, "Tech Review");
        assert_eq!(post.slug, "2024-tech-review");
        assert_eq!(post.category, "stocks");
        assert_eq!(post.tags, vec!["ai", "semiconductors"]);
        assert_eq!(post.created_at, "2024-03-01");
        assert!(post.published);
        assert_eq!(post.content, "Big year for chips.");
    }

    #[test]
    fn test_category_override() {
        let root = TempDir::new().expect("tempdir");
        write_post(
            root.path(),
            "etf",
            "bond-ladder",
            "---\ntitle: Bonds\ndate: 2024-01-01\ncategory: bond\n---\nBody",
        );

        let report = ingest(root.path());

        assert_eq!(report.posts[0].category, "bond");
    }

    #[test]
    fn test_seo_fields() {
        let root = TempDir::new().expect("tempdir");
        write_post(
            root.path(),
            "fund",
            "index-funds",
            "---\ntitle: Index Funds\ndate: 2024-01-01\ndescription: A primer\ntags:\n- funds\n- passive\n---\nBody",
        );

        let config = Config::default();
        let site_title = config.site.title.clone();
        let report = Ingestor::new(config, root.path()).ingest().expect("ingest");

        let post = &report.posts[0];
        assert_eq!(post.seo_title, format!("Index Funds | {site_title}"));
        assert_eq!(post.seo_description, "A primer");
        assert_eq!(post.seo_keywords, "funds, passive");
    }

    #[test]
    fn test_seo_description_falls_back_to_excerpt() {
        let root = TempDir::new().expect("tempdir");
        write_post(
            root.path(),
            "stock",
            "earnings",
            "---\ntitle: Earnings\ndate: 2024-01-01\n---\nQuarterly numbers.",
        );

        let report = ingest(root.path());

        assert_eq!(report.posts[0].seo_description, "Quarterly numbers.");
        assert_eq!(report.posts[0].seo_keywords, "");
    }

    #[test]
    fn test_featured_image_resolution() {
        let root = TempDir::new().expect("tempdir");
        write_post(
            root.path(),
            "stock",
            "charts",
            "---\ntitle: Charts\ndate: 2024-01-01\n---\n![q1](images/q1.png)",
        );
        write_post(
            root.path(),
            "stock",
            "remote",
            "---\ntitle: Remote\ndate: 2024-01-01\n---\n![cdn](https://cdn.example.com/a.png)",
        );

        let report = ingest(root.path());
        let root_name = root
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .expect("root name");

        assert_eq!(
            report.posts[0].featured_image.as_deref(),
            Some(format!("/{root_name}/stock/charts/images/q1.png").as_str())
        );
        assert_eq!(
            report.posts[1].featured_image.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn test_failures_do_not_abort_run() {
        let root = TempDir::new().expect("tempdir");
        write_post(root.path(), "stock", "bad", "No front matter here.");
        write_post(
            root.path(),
            "stock",
            "good",
            "---\ntitle: Good\ndate: 2024-01-01\n---\nBody",
        );
        // A folder without any document at all.
        fs::create_dir_all(root.path().join("stock").join("empty")).expect("mkdir");

        let report = ingest(root.path());

        assert_eq!(report.posts.len(), 1);
        assert_eq!(report.posts[0].slug, "good");
        assert_eq!(report.failures.len(), 2);
        assert!(
            report
                .failures
                .iter()
                .any(|f| f.reason.contains("No front matter block"))
        );
        assert!(
            report
                .failures
                .iter()
                .any(|f| f.reason.contains("no index.md"))
        );
    }

    #[test]
    fn test_missing_title_is_recorded() {
        let root = TempDir::new().expect("tempdir");
        write_post(
            root.path(),
            "stock",
            "untitled",
            "---\ndate: 2024-01-01\n---\nBody",
        );

        let report = ingest(root.path());

        assert!(report.posts.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].reason.contains("`title`"));
    }

    #[test]
    fn test_non_directories_are_skipped() {
        let root = TempDir::new().expect("tempdir");
        fs::write(root.path().join("README.md"), "stray file").expect("write");
        fs::create_dir_all(root.path().join("stock")).expect("mkdir");
        fs::write(root.path().join("stock").join("notes.txt"), "stray").expect("write");
        write_post(
            root.path(),
            "stock",
            "real",
            "---\ntitle: Real\ndate: 2024-01-01\n---\nBody",
        );

        let report = ingest(root.path());

        assert_eq!(report.posts.len(), 1);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_walk_order_is_sorted() {
        let root = TempDir::new().expect("tempdir");
        write_post(root.path(), "zeta", "z-post", "---\ntitle: Z\ndate: 2024-01-01\n---\nB");
        write_post(root.path(), "alpha", "b-post", "---\ntitle: B\ndate: 2024-01-01\n---\nB");
        write_post(root.path(), "alpha", "a-post", "---\ntitle: A\ndate: 2024-01-01\n---\nB");

        let report = ingest(root.path());

        let slugs: Vec<_> = report.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a-post", "b-post", "z-post"]);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let result = Ingestor::new(Config::default(), "/nonexistent/contents").ingest();
        assert!(matches!(result, Err(IngestError::ContentRoot { .. })));
    }
}
