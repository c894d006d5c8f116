#![deny(missing_docs)]
//! Inkpress core: markdown parsing, tree traversal, text metrics, and
//! frontmatter extraction.

/// Core error types.
pub mod error;
/// YAML frontmatter extraction helpers.
pub mod frontmatter;
/// Plain-text flattening and reading-time estimation.
pub mod metrics;
/// Markdown parsing utilities and the document transform pipeline.
pub mod parse;
/// Depth-first traversal over mdast trees.
pub mod visit;

pub use error::{PipelineError, SourceLocation};
pub use frontmatter::{FrontmatterError, FrontmatterSplit, split_frontmatter};
pub use metrics::{
    DEFAULT_WORDS_PER_MINUTE, MINUTES_READ_KEY, ReadingTime, reading_time,
    reading_time_with_speed, to_text,
};
pub use parse::{
    AstTransform, DocumentData, ParseOptions, ParserPipeline, ProcessedDocument, parse_mdast,
    parse_mdast_with_options,
};
pub use visit::{VisitControl, visit_mut};
