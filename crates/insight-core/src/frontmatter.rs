//! Front matter parsing for post documents.
//!
//! Posts carry a `---`-delimited metadata header ahead of the markdown body.
//! The header is line-oriented rather than full YAML: a line is either
//! `key: value`, `key:` opening a list, or `- item` extending the open list.

use std::path::Path;

use crate::error::{CoreError, Result};

/// A single metadata value: a scalar string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

/// The parsed metadata section, preserving field order.
///
/// Unknown keys are kept so callers can inspect the full header; the typed
/// [`FrontMatter`] view only reads the fields it knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: Vec<(String, FieldValue)>,
}

impl Metadata {
    /// Look up a field by key. The last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up a scalar field by key.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            FieldValue::Scalar(value) => Some(value),
            FieldValue::List(_) => None,
        }
    }

    /// Look up a list field by key.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.get(key)? {
            FieldValue::List(items) => Some(items),
            FieldValue::Scalar(_) => None,
        }
    }

    /// All fields in order of appearance.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }
}

/// Typed front matter for a post document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Post title (required).
    pub title: String,

    /// Publication date string, e.g. `2024-03-01` (required).
    pub date: String,

    /// Explicit SEO description.
    pub description: Option<String>,

    /// Last-update date string.
    pub update: Option<String>,

    /// Category override; the containing directory name applies otherwise.
    pub category: Option<String>,

    /// Tags in order of appearance.
    pub tags: Vec<String>,

    /// Series label linking posts into a reading sequence.
    pub series: Option<String>,
}

/// Split a document into its metadata section and body.
///
/// Returns `None` unless the document starts with `---` on its own line and a
/// closing `---` line follows.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("\n---\n")?;
    Some((&rest[..end], &rest[end + "\n---\n".len()..]))
}

/// Parse a metadata section into ordered fields.
///
/// Two states: collecting scalars, or accumulating list items for the most
/// recent key that had an empty value. A new key line must close the open
/// list before it is recorded, otherwise its items would leak into the new
/// key. Blank lines and lines matching neither form are skipped.
pub fn parse_metadata(section: &str) -> Metadata {
    let mut fields: Vec<(String, FieldValue)> = Vec::new();
    let mut open_list: Option<(String, Vec<String>)> = None;

    for line in section.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ") {
            // List items only attach to a key that opened a list.
            if let Some((_, items)) = open_list.as_mut() {
                items.push(item.to_string());
            }
        } else if let Some((key, value)) = trimmed.split_once(':') {
            if let Some((open_key, items)) = open_list.take() {
                fields.push((open_key, FieldValue::List(items)));
            }

            let key = key.trim().to_string();
            let value = strip_quotes(value.trim());

            if value.is_empty() {
                open_list = Some((key, Vec::new()));
            } else {
                fields.push((key, FieldValue::Scalar(value.to_string())));
            }
        }
    }

    if let Some((key, items)) = open_list {
        fields.push((key, FieldValue::List(items)));
    }

    Metadata { fields }
}

/// Parse a full document into typed front matter and its trimmed body.
pub fn parse(content: &str, path: &Path) -> Result<(FrontMatter, String)> {
    let Some((section, body)) = split_front_matter(content) else {
        return Err(CoreError::missing_front_matter(path));
    };

    let metadata = parse_metadata(section);
    let front_matter = FrontMatter::from_metadata(&metadata, path)?;

    Ok((front_matter, body.trim().to_string()))
}

impl FrontMatter {
    /// Build the typed view from parsed metadata, validating required fields.
    pub fn from_metadata(metadata: &Metadata, path: &Path) -> Result<Self> {
        let title = metadata.scalar("title").unwrap_or_default();
        if title.is_empty() {
            return Err(CoreError::missing_field(path, "title"));
        }

        let date = metadata.scalar("date").unwrap_or_default();
        if date.is_empty() {
            return Err(CoreError::missing_field(path, "date"));
        }

        Ok(Self {
            title: title.to_string(),
            date: date.to_string(),
            description: metadata.scalar("description").map(str::to_string),
            update: metadata.scalar("update").map(str::to_string),
            category: metadata.scalar("category").map(str::to_string),
            tags: metadata.list("tags").map(<[String]>::to_vec).unwrap_or_default(),
            series: metadata.scalar("series").map(str::to_string),
        })
    }
}

/// Strip one layer of surrounding quotes.
///
/// A leading and a trailing quote character are removed independently, so an
/// unbalanced quote on either side is still stripped.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_doc(content: &str) -> (FrontMatter, String) {
        parse(content, Path::new("test/index.md")).expect("parse")
    }

    #[test]
    fn test_split_front_matter() {
        let content = "---\ntitle: Hello\n---\n\nBody text.";

        let (section, body) = split_front_matter(content).expect("split");
        assert_eq!(section, "title: Hello");
        assert_eq!(body, "\nBody text.");
    }

    #[test]
    fn test_split_requires_leading_delimiter() {
        assert!(split_front_matter("title: Hello\n---\nBody").is_none());
        assert!(split_front_matter("\n---\ntitle: Hello\n---\nBody").is_none());
    }

    #[test]
    fn test_split_requires_closing_delimiter() {
        assert!(split_front_matter("---\ntitle: Hello\nBody").is_none());
    }

    #[test]
    fn test_parse_scalars() {
        let (fm, body) = parse_doc(
            "---\ntitle: \"Tech Review\"\ndate: \"2024-03-01\"\nseries: 'ETF Basics'\n---\n\nBody here.\n",
        );

        assert_eq!(fm.title, "Tech Review");
        assert_eq!(fm.date, "2024-03-01");
        assert_eq!(fm.series.as_deref(), Some("ETF Basics"));
        assert_eq!(body, "Body here.");
    }

    #[test]
    fn test_parse_tag_list() {
        let (fm, _) = parse_doc("---\ntitle: T\ndate: 2024-01-01\ntags:\n- ai\n- semiconductors\n---\nBody");

        assert_eq!(fm.tags, vec!["ai", "semiconductors"]);
    }

    #[test]
    fn test_list_closes_before_next_key() {
        // The open tags list must be sealed when `series:` starts, otherwise
        // the series value would be swallowed by the list.
        let (fm, _) = parse_doc(
            "---\ntitle: T\ndate: 2024-01-01\ntags:\n- bonds\n- funds\nseries: Income Investing\n---\nBody",
        );

        assert_eq!(fm.tags, vec!["bonds", "funds"]);
        assert_eq!(fm.series.as_deref(), Some("Income Investing"));
    }

    #[test]
    fn test_list_open_at_end_of_section() {
        let (fm, _) = parse_doc("---\ntitle: T\ndate: 2024-01-01\ntags:\n- etf\n---\nBody");

        assert_eq!(fm.tags, vec!["etf"]);
    }

    #[test]
    fn test_dash_line_without_open_list_is_dropped() {
        let metadata = parse_metadata("- stray\ntitle: T");

        assert_eq!(metadata.scalar("title"), Some("T"));
        assert_eq!(metadata.fields().len(), 1);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let metadata = parse_metadata("title: T\n\n\ndate: 2024-01-01\n");

        assert_eq!(metadata.scalar("title"), Some("T"));
        assert_eq!(metadata.scalar("date"), Some("2024-01-01"));
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let metadata = parse_metadata("title: T\nlayout: wide\nrelated:\n- other-post");

        assert_eq!(metadata.scalar("layout"), Some("wide"));
        assert_eq!(metadata.list("related"), Some(&["other-post".to_string()][..]));
    }

    #[test]
    fn test_value_with_colon_splits_at_first() {
        let metadata = parse_metadata("title: Markets: A Recap");

        assert_eq!(metadata.scalar("title"), Some("Markets: A Recap"));
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"quoted\""), "quoted");
        assert_eq!(strip_quotes("'quoted'"), "quoted");
        assert_eq!(strip_quotes("\"mixed'"), "mixed");
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes("\"\"nested\"\""), "\"nested\"");
    }

    #[test]
    fn test_missing_front_matter_error() {
        let result = parse("No header at all.", Path::new("bad/index.md"));

        assert!(matches!(
            result,
            Err(CoreError::MissingFrontMatter { .. })
        ));
    }

    #[test]
    fn test_missing_title_error() {
        let result = parse("---\ndate: 2024-01-01\n---\nBody", Path::new("bad/index.md"));

        assert!(matches!(
            result,
            Err(CoreError::MissingField { field: "title", .. })
        ));
    }

    #[test]
    fn test_missing_date_error() {
        let result = parse("---\ntitle: T\n---\nBody", Path::new("bad/index.md"));

        assert!(matches!(
            result,
            Err(CoreError::MissingField { field: "date", .. })
        ));
    }

    #[test]
    fn test_body_is_trimmed() {
        let (_, body) = parse_doc("---\ntitle: T\ndate: 2024-01-01\n---\n\n\nBody text.\n\n");
        assert_eq!(body, "Body text.");
    }

    /// Serialize a metadata section back to header lines.
    ///
    /// Only used to check the parser round-trips what a writer would emit.
    fn serialize_metadata(metadata: &Metadata) -> String {
        let mut out = String::new();
        for (key, value) in metadata.fields() {
            match value {
                FieldValue::Scalar(v) => {
                    out.push_str(key);
                    out.push_str(": ");
                    out.push_str(v);
                    out.push('\n');
                }
                FieldValue::List(items) => {
                    out.push_str(key);
                    out.push_str(":\n");
                    for item in items {
                        out.push_str("- ");
                        out.push_str(item);
                        out.push('\n');
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_metadata_round_trip() {
        let section = "title: Tech Review\ndate: 2024-03-01\ntags:\n- ai\n- semiconductors\nseries: Reviews\nkeywords:\n- stocks\n";
        let metadata = parse_metadata(section);

        let reparsed = parse_metadata(&serialize_metadata(&metadata));

        assert_eq!(metadata, reparsed);
        // Array field order survives the trip.
        assert_eq!(
            reparsed.list("tags"),
            Some(&["ai".to_string(), "semiconductors".to_string()][..])
        );
    }
}
