//! Robots command - regenerates robots.txt.

use color_eyre::eyre::{Result, WrapErr};
use insight_core::Config;
use insight_generator::Builder;

/// Run the robots command.
pub fn run(config: Config) -> Result<()> {
    let output_dir = config.build.output_dir.clone();

    Builder::new(config)
        .generate_robots()
        .wrap_err("Robots generation failed")?;

    println!("  Generated: {output_dir}/robots.txt");

    Ok(())
}
