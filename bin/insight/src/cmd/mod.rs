//! Command implementations.

pub mod build;
pub mod data;
pub mod feed;
pub mod robots;
pub mod sitemap;

use insight_generator::BuildStats;

/// Print the run report: counts, skipped folders, duration.
pub(crate) fn print_stats(stats: &BuildStats) {
    println!();
    println!("  Generated data:");
    println!("  - Posts:      {}", stats.posts);
    println!("  - Categories: {}", stats.categories);
    println!("  - Series:     {}", stats.series);
    println!("  - Tags:       {}", stats.tags);

    if !stats.failures.is_empty() {
        println!();
        println!("  Skipped {} folder(s):", stats.failures.len());
        for failure in &stats.failures {
            println!("  ✗ {}: {}", failure.source.display(), failure.reason);
        }
    }

    println!();
    println!("  Duration:     {:.2}s", stats.duration_ms as f64 / 1000.0);
    println!();
}
