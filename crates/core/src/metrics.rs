//! Plain-text flattening and reading-time estimation.

use markdown::mdast::Node;

/// Default reading speed, in words per minute.
///
/// A policy constant, not a law; use [`reading_time_with_speed`] to apply
/// a different speed.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 150;

/// Side-channel key under which the reading-time estimate is published
/// and later read back by the render path.
pub const MINUTES_READ_KEY: &str = "minutesRead";

/// An estimated reading duration for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTime {
    /// Number of whitespace-separated words counted.
    pub words: usize,
    /// Estimated minutes, rounded up.
    pub minutes: u32,
}

impl ReadingTime {
    /// Renders the human-readable duration string, e.g. `"3 min read"`.
    pub fn text(&self) -> String {
        format!("{} min read", self.minutes)
    }
}

/// Flattens a tree to plain text by concatenating all text-bearing leaf
/// values in document order, ignoring structural markup.
///
/// YAML/TOML frontmatter nodes and MDX ESM/expression nodes are excluded;
/// they are metadata and glue, not prose.
pub fn to_text(node: &Node) -> String {
    let mut buffer = String::new();
    collect_text(node, &mut buffer);
    buffer
}

fn collect_text(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(n) => buffer.push_str(&n.value),
        Node::InlineCode(n) => buffer.push_str(&n.value),
        Node::Code(n) => buffer.push_str(&n.value),
        Node::Html(n) => buffer.push_str(&n.value),
        Node::Math(n) => buffer.push_str(&n.value),
        Node::InlineMath(n) => buffer.push_str(&n.value),
        Node::Yaml(_) | Node::Toml(_) => {}
        Node::MdxjsEsm(_) | Node::MdxFlowExpression(_) | Node::MdxTextExpression(_) => {}
        _ => {
            if let Some(children) = node.children() {
                for child in children {
                    collect_text(child, buffer);
                }
            }
        }
    }
}

/// Estimates reading time at the default speed.
pub fn reading_time(text: &str) -> ReadingTime {
    reading_time_with_speed(text, DEFAULT_WORDS_PER_MINUTE)
}

/// Estimates reading time at the given speed, rounding minutes up.
///
/// Zero-word input yields zero minutes rather than dividing by zero.
pub fn reading_time_with_speed(text: &str, words_per_minute: u32) -> ReadingTime {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(words_per_minute.max(1) as usize) as u32;
    ReadingTime { words, minutes }
}
