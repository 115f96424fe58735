//! Sitemap generation.
//!
//! Generates the XML sitemap for search engine crawlers from the persisted
//! post collection.

use chrono::{DateTime, Duration, Utc};
use insight_core::{Config, Post, dates};
use tracing::debug;

/// Posts touched within this many days of generation get the higher priority.
const RECENT_WINDOW_DAYS: i64 = 30;

/// Change frequency hint for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    /// URL location.
    pub loc: String,

    /// Last modification date; static routes omit it.
    pub lastmod: Option<String>,

    /// Change frequency hint.
    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate sitemap XML.
    ///
    /// Static routes (home, the series listing) come first, then one entry
    /// per post. `now` anchors the recency window for post priorities.
    pub fn generate(&self, posts: &[Post], now: DateTime<Utc>) -> String {
        debug!(count = posts.len(), "generating sitemap");

        let base_url = self.config.site.base_url.trim_end_matches('/');

        let mut urls = vec![
            SitemapUrl {
                loc: base_url.to_string(),
                lastmod: None,
                changefreq: ChangeFreq::Daily,
                priority: 1.0,
            },
            SitemapUrl {
                loc: self.config.url_for("series"),
                lastmod: None,
                changefreq: ChangeFreq::Weekly,
                priority: 0.7,
            },
        ];
        urls.extend(posts.iter().map(|post| self.post_to_url(post, now)));

        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
        for url in &urls {
            xml.push_str(&url_to_xml(url));
        }
        xml.push_str("</urlset>\n");

        xml
    }

    /// Convert a post to a sitemap URL entry.
    fn post_to_url(&self, post: &Post, now: DateTime<Utc>) -> SitemapUrl {
        let effective = post.effective_date();
        let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
        let is_recent = dates::parse_datetime(effective).is_some_and(|date| date > cutoff);

        SitemapUrl {
            loc: post.route(&self.config.site.base_url),
            lastmod: Some(effective.to_string()),
            changefreq: ChangeFreq::Weekly,
            priority: if is_recent { 0.9 } else { 0.8 },
        }
    }
}

/// Convert a URL entry to XML.
fn url_to_xml(url: &SitemapUrl) -> String {
    let mut xml = String::from("  <url>\n");

    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
    xml.push_str(&format!(
        "    <changefreq>{}</changefreq>\n",
        url.changefreq.as_str()
    ));
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));

    if let Some(lastmod) = &url.lastmod {
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(lastmod)));
    }

    xml.push_str("  </url>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
