//! RSS feed generation.
//!
//! Generates an RSS 2.0 feed from the persisted post collection.

use chrono::{DateTime, Utc};
use insight_core::{Config, Post, dates};
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use tracing::debug;

/// RSS feed generator.
#[derive(Debug)]
pub struct RssGenerator {
    config: Config,
}

impl RssGenerator {
    /// Create a new RSS generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate feed XML for the most recent posts.
    ///
    /// Posts order newest first by `createdAt`; the feed carries at most the
    /// configured limit. `now` stamps the channel's last build date.
    pub fn generate(&self, posts: &[Post], now: DateTime<Utc>) -> String {
        let limit = self.config.rss.limit;

        let mut recent: Vec<&Post> = posts.iter().collect();
        recent.sort_by(|a, b| dates::compare_desc(&a.created_at, &b.created_at));
        recent.truncate(limit);

        debug!(count = recent.len(), limit, "generating RSS feed");

        let items: Vec<Item> = recent.iter().map(|post| self.post_to_item(post)).collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.site.title)
            .link(&self.config.site.base_url)
            .description(&self.config.site.description)
            .language(Some(self.config.site.language.clone()))
            .generator(Some("insight".to_string()))
            .last_build_date(Some(now.to_rfc2822()))
            .items(items)
            .build();

        channel.to_string()
    }

    /// Convert a post to a feed item.
    ///
    /// The canonical route doubles as the item's permalink guid. The primary
    /// category leads the category elements, followed by one per tag.
    fn post_to_item(&self, post: &Post) -> Item {
        let url = post.route(&self.config.site.base_url);

        let guid = GuidBuilder::default().value(url.clone()).permalink(true).build();

        let mut builder = ItemBuilder::default();
        builder.title(Some(post.title.clone()));
        builder.link(Some(url));
        builder.guid(Some(guid));
        builder.description(Some(post.excerpt.clone()));

        if let Some(date) = dates::parse_datetime(&post.created_at) {
            builder.pub_date(Some(date.to_rfc2822()));
        }

        let primary = if post.category.is_empty() {
            "etc".to_string()
        } else {
            post.category.clone()
        };
        let mut categories = vec![rss::Category {
            name: primary,
            domain: None,
        }];
        categories.extend(post.tags.iter().map(|tag| rss::Category {
            name: tag.clone(),
            domain: None,
        }));
        builder.categories(categories);

        builder.build()
    }
}
