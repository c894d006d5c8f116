//! Markdown parsing utilities and the document transform pipeline.

use crate::{PipelineError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};
use serde_json::{Map, Value as JsonValue};

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Enable MDX constructs (JSX, ESM, expressions).
    pub mdx: bool,
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable YAML frontmatter parsing.
    pub frontmatter: bool,
    /// Enable indented code blocks.
    pub code_indented: bool,
}

impl ParseOptions {
    /// Markdown-friendly defaults (no MDX).
    pub const fn markdown() -> Self {
        Self {
            mdx: false,
            gfm: true,
            frontmatter: true,
            code_indented: true,
        }
    }

    /// MDX-friendly defaults (JSX/ESM/expression enabled).
    pub const fn mdx() -> Self {
        Self {
            mdx: true,
            gfm: true,
            frontmatter: true,
            code_indented: false,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            code_indented: self.code_indented,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        if self.mdx {
            constructs.mdx_esm = true;
            constructs.mdx_expression_flow = true;
            constructs.mdx_expression_text = true;
            constructs.mdx_jsx_flow = true;
            constructs.mdx_jsx_text = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Per-document side channel populated during transformation.
///
/// One `DocumentData` exists per document per build pass. Transforms write
/// derived fields into `frontmatter` (e.g. the reading-time annotator sets
/// `minutesRead`), and the render path reads them back after the pipeline
/// has run. The bag is always passed explicitly so ownership and lifetime
/// are visible at every call site.
#[derive(Debug, Default)]
pub struct DocumentData {
    /// Derived frontmatter fields, keyed by field name.
    pub frontmatter: Map<String, JsonValue>,
}

impl DocumentData {
    /// Creates an empty side channel for a new document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a derived frontmatter field.
    pub fn set_frontmatter(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.frontmatter.insert(key.into(), value.into());
    }

    /// Reads a derived frontmatter field as a string, if present.
    pub fn frontmatter_str(&self, key: &str) -> Option<&str> {
        self.frontmatter.get(key).and_then(JsonValue::as_str)
    }
}

/// Trait for mutating the parsed MDAST after parsing.
pub trait AstTransform {
    /// Mutate the parsed markdown AST in place, with access to the
    /// document's side channel.
    fn transform(&self, root: &mut Node, data: &mut DocumentData);
}

impl<F> AstTransform for F
where
    F: Fn(&mut Node, &mut DocumentData),
{
    fn transform(&self, root: &mut Node, data: &mut DocumentData) {
        (self)(root, data)
    }
}

/// A parsed document after the transform pipeline has run.
#[derive(Debug)]
pub struct ProcessedDocument {
    /// The mutated syntax tree, ready for rendering.
    pub tree: Node,
    /// Derived fields written by the transforms.
    pub data: DocumentData,
}

/// Configurable parsing pipeline with ordered AST transforms.
///
/// Transforms run strictly sequentially in registration order, once per
/// document, against the same tree and side channel.
pub struct ParserPipeline {
    options: markdown::ParseOptions,
    transforms: Vec<Box<dyn AstTransform>>,
}

impl ParserPipeline {
    /// Create a new pipeline from core parse options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options: options.to_markdown(),
            transforms: Vec::new(),
        }
    }

    /// Add an AST transform at the end of the sequence.
    pub fn add_transform<T: AstTransform + 'static>(&mut self, transform: T) {
        self.transforms.push(Box::new(transform));
    }

    /// Parse a document and run all registered transforms against it.
    pub fn parse(&self, input: &str) -> Result<ProcessedDocument, PipelineError> {
        let mut tree = parse_mdast_with_options(input, &self.options)?;
        let mut data = DocumentData::new();
        self.apply(&mut tree, &mut data);
        Ok(ProcessedDocument { tree, data })
    }

    /// Run the registered transforms against a pre-parsed tree.
    pub fn apply(&self, root: &mut Node, data: &mut DocumentData) {
        for transform in &self.transforms {
            transform.transform(root, data);
        }
    }
}

/// Parse markdown into an MDAST tree using core options.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, PipelineError> {
    parse_mdast_with_options(input, &options.to_markdown())
}

/// Parse markdown into an MDAST tree using markdown-rs `ParseOptions`.
pub fn parse_mdast_with_options(
    input: &str,
    options: &markdown::ParseOptions,
) -> Result<Node, PipelineError> {
    markdown::to_mdast(input, options).map_err(|err| PipelineError::Parse {
        message: err.to_string(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}
