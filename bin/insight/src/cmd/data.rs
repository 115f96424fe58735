//! Data command - regenerates the JSON data artifacts.

use color_eyre::eyre::{Result, WrapErr};
use insight_core::Config;
use insight_generator::Builder;

/// Run the data command.
pub fn run(config: Config) -> Result<()> {
    let data_dir = config.build.data_dir.clone();

    let stats = Builder::new(config)
        .generate_data()
        .wrap_err("Data generation failed")?;

    super::print_stats(&stats);
    println!("  Output:       {data_dir}");
    println!();

    Ok(())
}
