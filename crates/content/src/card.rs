//! Presentation helpers for entry cards on listing pages.

use crate::entry::ContentEntry;
use inkpress_core::{DocumentData, MINUTES_READ_KEY};

/// Formats the entry date as en-US short-month text in UTC,
/// e.g. `"Jan 5, 2024"`.
pub fn format_date(entry: &ContentEntry) -> String {
    entry.date.format("%b %-d, %Y").to_string()
}

/// Joins the entry's tags for display, e.g. `"ml · math"`.
pub fn join_tags(entry: &ContentEntry) -> String {
    entry.tags.join(" · ")
}

/// Reads the reading-time string the annotator published for this
/// document, if the pipeline has run.
pub fn read_time(data: &DocumentData) -> Option<&str> {
    data.frontmatter_str(MINUTES_READ_KEY)
}
