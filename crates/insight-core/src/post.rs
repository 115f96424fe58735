//! The canonical post record.
//!
//! This struct is the persisted-artifact contract: field names serialize in
//! camelCase and optional fields are omitted rather than written as null.

use serde::{Deserialize, Serialize};

/// One blog post, assembled from a `{category}/{folder}/index.md` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post title from front matter.
    pub title: String,

    /// Routing key, taken verbatim from the containing folder name.
    /// Unique within a category.
    pub slug: String,

    /// Markdown body with the metadata header stripped, trimmed.
    pub content: String,

    /// Plain-text excerpt, capped at 150 characters plus an ellipsis marker.
    pub excerpt: String,

    /// Category; the front-matter value overrides the parent directory name.
    pub category: String,

    /// Tags in front-matter order; empty when absent.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Series label, when the post belongs to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    /// First image of the body: absolute URLs verbatim, relative paths
    /// resolved to a site-relative location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Always true; there is no draft concept.
    pub published: bool,

    /// Derived SEO title: `{title} | {site title}`.
    pub seo_title: String,

    /// Derived SEO description: explicit front-matter description, else the
    /// excerpt.
    pub seo_description: String,

    /// Derived SEO keywords: tags joined with a comma.
    pub seo_keywords: String,

    /// Publication date string from front matter.
    pub created_at: String,

    /// Last-update date string, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Post {
    /// Canonical route for the post: `{base}/{lowercased category}/{slug}`.
    ///
    /// An empty category routes under `etc`.
    pub fn route(&self, base_url: &str) -> String {
        let category = if self.category.is_empty() {
            "etc"
        } else {
            self.category.as_str()
        };
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            category.to_lowercase(),
            self.slug
        )
    }

    /// The date reflecting the latest touch, preferring the update date.
    pub fn effective_date(&self) -> &str {
        self.updated_at.as_deref().unwrap_or(&self.created_at)
    }
}
