//! Filtering and ordering for content collections.

use crate::collection::Collection;
use crate::entry::ContentEntry;
use std::borrow::Borrow;

/// Whether the site is being built for preview or for publication.
///
/// Passed explicitly by the caller; this layer never inspects the process
/// environment itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Local preview; draft entries are shown.
    Development,
    /// Published output; draft entries are hidden.
    Production,
}

impl RunMode {
    /// True in local preview mode.
    pub fn is_development(self) -> bool {
        matches!(self, RunMode::Development)
    }
}

/// An entry is eligible unless explicitly marked as a draft.
pub fn is_published(entry: &ContentEntry) -> bool {
    !entry.draft
}

/// An entry pinned to the top of listing pages.
pub fn is_pinned(entry: &ContentEntry) -> bool {
    entry.pinned
}

/// Legacy publish-flag policy: eligible unless `published: false` was set.
///
/// Some older sources carry a `published` boolean instead of `draft`;
/// callers pick whichever predicate matches their schema. An absent flag
/// counts as published.
pub fn has_published_flag(entry: &ContentEntry) -> bool {
    entry.published.unwrap_or(true)
}

/// Draft policy with the development-mode override: drafts become eligible
/// when previewing locally.
pub fn is_visible(mode: RunMode) -> impl Fn(&ContentEntry) -> bool {
    move |entry| mode.is_development() || !entry.draft
}

/// Returns the subsequence of entries for which every predicate holds,
/// preserving the input order (stable filter).
pub fn filter_entries<'a>(
    entries: &'a [ContentEntry],
    predicates: &[&dyn Fn(&ContentEntry) -> bool],
) -> Vec<&'a ContentEntry> {
    entries
        .iter()
        .filter(|&entry| predicates.iter().all(|predicate| predicate(entry)))
        .collect()
}

/// Returns the entries eligible under `mode` (optionally only pinned
/// ones), optionally sorted most-recent-first.
pub fn published_entries(
    collection: &Collection,
    mode: RunMode,
    pinned_only: bool,
    sort_by_date: bool,
) -> Vec<&ContentEntry> {
    let visible = is_visible(mode);
    let mut predicates: Vec<&dyn Fn(&ContentEntry) -> bool> = vec![&visible];
    if pinned_only {
        predicates.push(&is_pinned);
    }

    let mut entries = filter_entries(collection.entries(), &predicates);
    if sort_by_date {
        sort_entries(&mut entries);
    }
    entries
}

/// Sorts entries by date, most recent first.
///
/// Uses the standard library's stable sort, so entries with equal dates
/// retain their relative input order.
pub fn sort_entries<T: Borrow<ContentEntry>>(entries: &mut [T]) {
    entries.sort_by(|a, b| b.borrow().date.cmp(&a.borrow().date));
}
