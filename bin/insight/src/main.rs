//! insight CLI
//!
//! Command-line entry point for the blog data pipeline. The library
//! functionality lives in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for insight.
#[derive(Parser)]
#[command(
    name = "insight",
    version,
    about = "Static data and SEO artifact generator for the insight blog"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Override the site base URL (e.g., https://example.com)
    #[arg(long)]
    base_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Run the full pipeline: data artifacts, feed, sitemap, robots
    Build,
    /// Regenerate the JSON data artifacts from the content tree
    Data,
    /// Regenerate rss.xml from the persisted posts
    Feed,
    /// Regenerate sitemap.xml from the persisted posts
    Sitemap,
    /// Regenerate robots.txt
    Robots,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    insight::init_tracing(cli.verbose);

    let config = insight::load_config(&cli.config, cli.base_url.as_deref())?;

    match cli.command {
        Commands::Build => insight::cmd::build::run(config)?,
        Commands::Data => insight::cmd::data::run(config)?,
        Commands::Feed => insight::cmd::feed::run(config)?,
        Commands::Sitemap => insight::cmd::sitemap::run(config)?,
        Commands::Robots => insight::cmd::robots::run(config)?,
    }

    Ok(())
}
