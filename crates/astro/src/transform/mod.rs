//! Transform passes applied to each document during a build.
//!
//! - `reading_time`: writes a reading-duration estimate into the side channel.
//! - `code_block`: rewrites fenced code into `CodeBlock` component elements.
//! - `headings`: demotes headings one level under the page title.
//! - `inline_code`: trims inline code spans in the rendered-element tree.

/// Fenced-code-to-component rewriting.
pub mod code_block;
/// Heading depth promotion.
pub mod headings;
/// Inline code whitespace trimming (rendered-element tree).
pub mod inline_code;
/// Reading-time annotation.
pub mod reading_time;

use inkpress_core::{ParseOptions, ParserPipeline};

/// Builds the blog's document pipeline with the mdast transforms in the
/// order the build applies them: reading time, then code-block rewrite,
/// then heading promotion.
///
/// The inline-code trim is not part of this pipeline; it runs against the
/// rendered-element tree after the external highlighting pass.
pub fn blog_pipeline() -> ParserPipeline {
    let mut pipeline = ParserPipeline::new(ParseOptions::mdx());
    pipeline.add_transform(reading_time::ReadingTimeAnnotator::new());
    pipeline.add_transform(code_block::CodeBlockRewriter);
    pipeline.add_transform(headings::HeadingPromoter);
    pipeline
}
