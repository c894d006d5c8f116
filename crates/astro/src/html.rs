//! Rendered-element tree produced by the external highlighting pass.
//!
//! After code highlighting, documents exist as a tree of HTML element and
//! text nodes rather than mdast. This is the shape the inline-code trimmer
//! operates on and the serializer emits.

use serde::Serialize;

/// A node of the rendered-element tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HtmlNode {
    /// An element with a tag name, attributes, and ordered children.
    Element {
        /// Lowercase tag name, e.g. `"code"`.
        tag_name: String,
        /// Attribute name/value pairs in source order.
        attributes: Vec<(String, String)>,
        /// Child nodes, owned exclusively by this element.
        children: Vec<HtmlNode>,
    },
    /// A text node.
    Text {
        /// The text content, unescaped.
        value: String,
    },
}

/// Elements serialized without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

impl HtmlNode {
    /// Creates an element node.
    pub fn element(
        tag_name: impl Into<String>,
        attributes: Vec<(String, String)>,
        children: Vec<HtmlNode>,
    ) -> Self {
        HtmlNode::Element {
            tag_name: tag_name.into(),
            attributes,
            children,
        }
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Text {
            value: value.into(),
        }
    }

    /// Returns the element's tag name, or `None` for text nodes.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            HtmlNode::Element { tag_name, .. } => Some(tag_name),
            HtmlNode::Text { .. } => None,
        }
    }

    /// Serializes the tree to an HTML string, escaping text content and
    /// double-quoted attribute values.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Text { value } => {
                out.push_str(&html_escape::encode_text(value));
            }
            HtmlNode::Element {
                tag_name,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(tag_name);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }

                if VOID_ELEMENTS.contains(&tag_name.as_str()) {
                    out.push_str(" />");
                    return;
                }

                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag_name);
                out.push('>');
            }
        }
    }
}
