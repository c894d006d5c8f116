#![deny(missing_docs)]
//! Inkpress Astro engine: document transforms, the rendered-element tree,
//! and code-fence meta parsing.

/// Rendered-element tree and HTML serialization.
pub mod html;
/// Code-fence `meta` micro-format parsing.
pub mod meta;
/// Document transform passes.
pub mod transform;

pub use html::HtmlNode;
pub use meta::{meta_value, parse_meta};
pub use transform::blog_pipeline;
pub use transform::code_block::{CODE_COMPONENT, CodeBlockRewriter};
pub use transform::headings::{HeadingPromoter, MAX_HEADING_DEPTH};
pub use transform::inline_code::trim_inline_code;
pub use transform::reading_time::{MINUTES_READ_KEY, ReadingTimeAnnotator};
