//! Robots policy generation.
//!
//! Emits the robots.txt policy for search engine crawlers: allow-all with a
//! few disallowed internal paths, plus the sitemap and host references.

use insight_core::Config;
use tracing::debug;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate the policy text.
    pub fn generate(&self) -> String {
        debug!("generating robots policy");

        let mut out = String::from("User-agent: *\n");

        for path in &self.config.robots.allow {
            out.push_str(&format!("Allow: {path}\n"));
        }
        for path in &self.config.robots.disallow {
            out.push_str(&format!("Disallow: {path}\n"));
        }
        if let Some(delay) = self.config.robots.crawl_delay {
            out.push_str(&format!("Crawl-delay: {delay}\n"));
        }

        out.push('\n');
        out.push_str(&format!("Sitemap: {}\n", self.config.url_for("sitemap.xml")));
        out.push('\n');
        out.push_str(&format!("Host: {}\n", self.config.site.base_url));

        out
    }
}

#[cfg(test)]
mod tests {
    use insight_core::Config;

    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.site.base_url = "https://example.com".to_string();
        config
    }

    #[test]
    fn test_default_policy() {
        let generator = RobotsGenerator::new(test_config());

        let policy = generator.generate();

        assert!(policy.starts_with("User-agent: *\n"));
        assert!(policy.contains("Allow: /\n"));
        assert!(policy.contains("Disallow: /admin/\n"));
        assert!(policy.contains("Disallow: /api/\n"));
        assert!(policy.contains("Disallow: /data/\n"));
        assert!(policy.contains("Crawl-delay: 1\n"));
        assert!(policy.contains("Sitemap: https://example.com/sitemap.xml\n"));
        assert!(policy.contains("Host: https://example.com\n"));
    }

    #[test]
    fn test_crawl_delay_omitted_when_unset() {
        let mut config = test_config();
        config.robots.crawl_delay = None;

        let policy = RobotsGenerator::new(config).generate();

        assert!(!policy.contains("Crawl-delay"));
    }

    #[test]
    fn test_same_output_for_same_config() {
        let generator = RobotsGenerator::new(test_config());
        assert_eq!(generator.generate(), generator.generate());
    }
}
