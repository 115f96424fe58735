//! Sitemap command - regenerates sitemap.xml from the persisted posts.

use color_eyre::eyre::{Result, WrapErr};
use insight_core::Config;
use insight_generator::Builder;

/// Run the sitemap command.
pub fn run(config: Config) -> Result<()> {
    let output_dir = config.build.output_dir.clone();

    Builder::new(config)
        .generate_sitemap()
        .wrap_err("Sitemap generation failed")?;

    println!("  Generated: {output_dir}/sitemap.xml");

    Ok(())
}
