//! Build command - runs the full generation pipeline.

use color_eyre::eyre::{Result, WrapErr};
use insight_core::Config;
use insight_generator::Builder;

/// Run the build command.
///
/// Ingests the content tree, persists the JSON artifacts, and regenerates
/// the feed, sitemap, and robots policy.
pub fn run(config: Config) -> Result<()> {
    tracing::info!(
        content = %config.build.content_dir,
        output = %config.build.output_dir,
        "Starting build"
    );

    let stats = Builder::new(config).build().wrap_err("Build failed")?;

    super::print_stats(&stats);

    Ok(())
}
