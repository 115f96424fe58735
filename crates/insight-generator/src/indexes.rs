//! Derived indexes over the post collection.
//!
//! Category and tag counts order count-descending; ties keep first-seen
//! order so repeated runs over the same tree produce identical artifacts.

use std::{cmp::Reverse, collections::HashMap};

use insight_core::{Post, dates};
use serde::{Deserialize, Serialize};

/// Post count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Post count for one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// One series of posts, newest member first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesGroup {
    pub name: String,
    pub count: usize,

    /// The newest `createdAt` among member posts.
    pub latest_date: String,

    pub posts: Vec<SeriesPost>,
}

/// Summary of one series member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPost {
    pub title: String,
    pub slug: String,
    pub date: String,
}

/// Count posts per category. Empty categories count under `uncategorized`.
pub fn build_categories(posts: &[Post]) -> Vec<CategoryCount> {
    count_first_seen(posts.iter().map(|post| {
        if post.category.is_empty() {
            "uncategorized"
        } else {
            post.category.as_str()
        }
    }))
    .into_iter()
    .map(|(category, count)| CategoryCount { category, count })
    .collect()
}

/// Count posts per tag across all posts.
pub fn build_tags(posts: &[Post]) -> Vec<TagCount> {
    count_first_seen(posts.iter().flat_map(|post| post.tags.iter().map(String::as_str)))
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect()
}

/// Group posts by series, in first-seen order.
pub fn build_series(posts: &[Post]) -> Vec<SeriesGroup> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Post>> = HashMap::new();

    for post in posts {
        if let Some(series) = post.series.as_deref() {
            groups
                .entry(series)
                .or_insert_with(|| {
                    order.push(series);
                    Vec::new()
                })
                .push(post);
        }
    }

    order
        .into_iter()
        .map(|name| {
            let mut members = groups.remove(name).unwrap_or_default();
            members.sort_by(|a, b| dates::compare_desc(&a.created_at, &b.created_at));

            SeriesGroup {
                name: name.to_string(),
                count: members.len(),
                latest_date: members
                    .first()
                    .map(|post| post.created_at.clone())
                    .unwrap_or_default(),
                posts: members
                    .into_iter()
                    .map(|post| SeriesPost {
                        title: post.title.clone(),
                        slug: post.slug.clone(),
                        date: post.created_at.clone(),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Count values, then order count-descending.
///
/// The input pass records first-seen order; the stable sort keeps that order
/// among equal counts.
fn count_first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for value in values {
        let entry = counts.entry(value).or_insert(0);
        if *entry == 0 {
            order.push(value);
        }
        *entry += 1;
    }

    let mut counted: Vec<(String, usize)> = order
        .into_iter()
        .map(|value| (value.to_string(), counts[value]))
        .collect();
    counted.sort_by_key(|(_, count)| Reverse(*count));
    counted
}
