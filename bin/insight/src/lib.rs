//! insight CLI Library
//!
//! Command implementations and process setup for the insight binary. The
//! binary entry point in `main.rs` stays thin; everything testable lives
//! here.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, data, feed, sitemap, robots)

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

pub mod cmd;

// Re-export core types for convenience
pub use insight_core::{Config, Post};
pub use insight_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// Verbosity maps 0 → WARN, 1 → INFO, 2 → DEBUG, 3+ → TRACE.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Load the configuration, applying the optional CLI base-URL override.
///
/// The config file is optional; the `SITE_URL` environment variable and
/// `INSIGHT__`-prefixed variables are layered on top of it, and an explicit
/// `--base-url` flag wins over everything.
pub fn load_config(path: &Path, base_url: Option<&str>) -> Result<Config> {
    let mut config = Config::load_with_env(path).wrap_err("Failed to load configuration")?;

    if let Some(url) = base_url {
        tracing::info!(base_url = url, "Overriding site base URL from CLI");
        config.site.base_url = url.to_string();
    }

    Ok(config)
}
