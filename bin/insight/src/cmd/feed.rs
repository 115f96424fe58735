//! Feed command - regenerates rss.xml from the persisted posts.

use color_eyre::eyre::{Result, WrapErr};
use insight_core::Config;
use insight_generator::Builder;

/// Run the feed command.
pub fn run(config: Config) -> Result<()> {
    let output_dir = config.build.output_dir.clone();

    Builder::new(config)
        .generate_feed()
        .wrap_err("Feed generation failed")?;

    println!("  Generated: {output_dir}/rss.xml");

    Ok(())
}
