//! insight Generator Library
//!
//! Static data generation engine for the insight blog: markdown ingestion,
//! derived indexes, persisted JSON artifacts, and the SEO emitters.
//!
//! # Modules
//!
//! - [`ingest`] - Content tree walking and post assembly
//! - [`indexes`] - Category, tag, and series index builders
//! - [`store`] - Persisted JSON artifacts
//! - [`rss`] - RSS feed generation
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - Robots policy generation
//! - [`build`] - Build orchestration

pub mod build;
pub mod indexes;
pub mod ingest;
pub mod robots;
pub mod rss;
pub mod sitemap;
pub mod store;

pub use build::{BuildStats, Builder};
pub use indexes::{CategoryCount, SeriesGroup, SeriesPost, TagCount};
pub use ingest::{IngestFailure, IngestReport, Ingestor};
pub use robots::RobotsGenerator;
pub use rss::RssGenerator;
pub use sitemap::SitemapGenerator;
pub use store::DataStore;
