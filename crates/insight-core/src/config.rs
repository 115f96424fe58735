//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for insight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// RSS feed settings.
    #[serde(default)]
    pub rss: RssConfig,

    /// Robots policy settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, also used as the SEO title suffix.
    #[serde(default = "default_title")]
    pub title: String,

    /// Base URL for the site (e.g., "https://invest.advenoh.pe.kr").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Site description for the feed channel.
    #[serde(default = "default_description")]
    pub description: String,

    /// Content language code.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Root directory of the markdown content tree.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Output directory for generated SEO artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory for the persisted JSON data artifacts.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

/// RSS feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RssConfig {
    /// Maximum number of items in the feed.
    #[serde(default = "default_rss_limit")]
    pub limit: usize,
}

/// Robots policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// Allowed path prefixes.
    #[serde(default = "default_robots_allow")]
    pub allow: Vec<String>,

    /// Disallowed path prefixes.
    #[serde(default = "default_robots_disallow")]
    pub disallow: Vec<String>,

    /// Crawl delay hint in seconds.
    #[serde(default = "default_crawl_delay")]
    pub crawl_delay: Option<u32>,
}

// Default value functions
fn default_title() -> String {
    "투자 인사이트".to_string()
}

fn default_base_url() -> String {
    "https://invest.advenoh.pe.kr".to_string()
}

fn default_description() -> String {
    "국내외 주식, ETF, 채권, 펀드에 대한 전문적인 투자 정보와 분석".to_string()
}

fn default_language() -> String {
    "ko".to_string()
}

fn default_content_dir() -> String {
    "contents".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_data_dir() -> String {
    "public/data".to_string()
}

fn default_rss_limit() -> usize {
    20
}

fn default_robots_allow() -> Vec<String> {
    vec!["/".to_string()]
}

fn default_robots_disallow() -> Vec<String> {
    vec![
        "/admin/".to_string(),
        "/api/".to_string(),
        "/data/".to_string(),
    ]
}

fn default_crawl_delay() -> Option<u32> {
    Some(1)
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            description: default_description(),
            language: default_language(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            output_dir: default_output_dir(),
            data_dir: default_data_dir(),
        }
    }
}

impl Default for RssConfig {
    fn default() -> Self {
        Self {
            limit: default_rss_limit(),
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            allow: default_robots_allow(),
            disallow: default_robots_disallow(),
            crawl_delay: default_crawl_delay(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment overrides layered on top.
    ///
    /// The config file is optional; `INSIGHT__`-prefixed variables override
    /// individual fields (e.g. `INSIGHT__SITE__BASE_URL`), and the plain
    /// `SITE_URL` variable overrides the base URL as the deployment scripts set
    /// it.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("INSIGHT").separator("__"))
            .build()?;

        let mut config: Config = settings.try_deserialize()?;

        if let Ok(url) = std::env::var("SITE_URL")
            && !url.is_empty()
        {
            config.site.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
