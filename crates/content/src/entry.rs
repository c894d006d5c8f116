//! Content entry schema.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One piece of published content, built from a source file's frontmatter.
///
/// Entries are immutable once loaded within a build; everything downstream
/// (query layer, card helpers) only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// The post title.
    pub title: String,
    /// URL-friendly identifier.
    pub slug: String,
    /// Publication date.
    #[serde(deserialize_with = "flexible_date")]
    pub date: DateTime<Utc>,
    /// A brief summary of the post.
    #[serde(default)]
    pub description: Option<String>,
    /// Categories or topics, in source order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether this is a draft post.
    #[serde(default)]
    pub draft: bool,
    /// Whether this post is pinned on listing pages.
    #[serde(default)]
    pub pinned: bool,
    /// Legacy publish flag; `None` means the source never set it.
    #[serde(default)]
    pub published: Option<bool>,
}

/// Accepts `2024-01-05`, `2024-01-05 13:30:00`, or RFC 3339 date strings.
fn flexible_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        let midnight = parsed
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::custom("invalid time of day"))?;
        return Ok(midnight.and_utc());
    }

    Err(Error::custom(format!("unrecognized date format: '{raw}'")))
}
