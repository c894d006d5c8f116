//! Reading-time annotation for blog documents.

use inkpress_core::{
    AstTransform, DEFAULT_WORDS_PER_MINUTE, DocumentData, reading_time_with_speed, to_text,
};
use markdown::mdast::Node;

pub use inkpress_core::MINUTES_READ_KEY;

/// Writes a human-readable reading-time estimate into the document's
/// side channel under [`MINUTES_READ_KEY`].
///
/// The estimate is computed from the flattened plain text of the tree, so
/// re-running the annotator on an unmodified tree always produces the same
/// string.
#[derive(Debug, Clone, Copy)]
pub struct ReadingTimeAnnotator {
    words_per_minute: u32,
}

impl ReadingTimeAnnotator {
    /// Annotator at the default reading speed.
    pub fn new() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Annotator at a custom reading speed.
    pub fn with_speed(words_per_minute: u32) -> Self {
        Self { words_per_minute }
    }
}

impl Default for ReadingTimeAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl AstTransform for ReadingTimeAnnotator {
    fn transform(&self, root: &mut Node, data: &mut DocumentData) {
        let text = to_text(root);
        let estimate = reading_time_with_speed(&text, self.words_per_minute);
        data.set_frontmatter(MINUTES_READ_KEY, estimate.text());
    }
}
