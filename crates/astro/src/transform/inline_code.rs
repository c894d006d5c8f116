//! Trims incidental whitespace from inline code spans.

use crate::html::HtmlNode;

/// Trims leading/trailing whitespace from the direct text children of every
/// `code` element that is not nested under a `pre` element at any ancestor
/// depth.
///
/// Inline code spans inherit incidental whitespace from source formatting;
/// block code inside `pre` keeps exact whitespace because it is
/// semantically significant. Nested non-text children are never altered.
pub fn trim_inline_code(node: &mut HtmlNode) {
    trim_node(node, false);
}

fn trim_node(node: &mut HtmlNode, under_pre: bool) {
    let HtmlNode::Element {
        tag_name, children, ..
    } = node
    else {
        return;
    };

    if tag_name == "code" && !under_pre {
        for child in children.iter_mut() {
            if let HtmlNode::Text { value } = child {
                *value = value.trim().to_string();
            }
        }
    }

    let under_pre = under_pre || tag_name == "pre";
    for child in children.iter_mut() {
        trim_node(child, under_pre);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_with_text(text: &str) -> HtmlNode {
        HtmlNode::element("code", Vec::new(), vec![HtmlNode::text(text)])
    }

    fn first_text(node: &HtmlNode) -> &str {
        let HtmlNode::Element { children, .. } = node else {
            panic!("expected element");
        };
        let HtmlNode::Text { value } = &children[0] else {
            panic!("expected text child");
        };
        value
    }

    #[test]
    fn trims_inline_code_text() {
        let mut node = code_with_text("  y = 2  ");
        trim_inline_code(&mut node);
        assert_eq!(first_text(&node), "y = 2");
    }

    #[test]
    fn preserves_block_code_under_pre() {
        let mut node = HtmlNode::element(
            "pre",
            Vec::new(),
            vec![code_with_text("  x = 1\n  y = 2\n")],
        );
        trim_inline_code(&mut node);
        let HtmlNode::Element { children, .. } = &node else {
            panic!("expected element");
        };
        assert_eq!(first_text(&children[0]), "  x = 1\n  y = 2\n");
    }

    #[test]
    fn pre_shields_code_at_any_ancestor_depth() {
        let mut node = HtmlNode::element(
            "pre",
            Vec::new(),
            vec![HtmlNode::element(
                "span",
                Vec::new(),
                vec![code_with_text("  keep  ")],
            )],
        );
        trim_inline_code(&mut node);
        let HtmlNode::Element { children, .. } = &node else {
            panic!("expected element");
        };
        let HtmlNode::Element { children: inner, .. } = &children[0] else {
            panic!("expected span");
        };
        assert_eq!(first_text(&inner[0]), "  keep  ");
    }

    #[test]
    fn trims_sibling_outside_pre_but_not_pre_nested_inside_code() {
        // <code><pre>  x = 1  </pre></code> alongside <code>  y = 2  </code>:
        // the pre contents stay exact, the plain sibling is trimmed.
        let mut root = HtmlNode::element(
            "p",
            Vec::new(),
            vec![
                HtmlNode::element(
                    "code",
                    Vec::new(),
                    vec![HtmlNode::element(
                        "pre",
                        Vec::new(),
                        vec![HtmlNode::text("  x = 1  ")],
                    )],
                ),
                code_with_text("  y = 2  "),
            ],
        );
        trim_inline_code(&mut root);

        let HtmlNode::Element { children, .. } = &root else {
            panic!("expected element");
        };
        let HtmlNode::Element {
            children: outer_code,
            ..
        } = &children[0]
        else {
            panic!("expected code");
        };
        assert_eq!(first_text(&outer_code[0]), "  x = 1  ");
        assert_eq!(first_text(&children[1]), "y = 2");
    }

    #[test]
    fn leaves_non_code_elements_untouched() {
        let mut node = HtmlNode::element("em", Vec::new(), vec![HtmlNode::text("  spaced  ")]);
        trim_inline_code(&mut node);
        assert_eq!(first_text(&node), "  spaced  ");
    }

    #[test]
    fn does_not_alter_nested_non_text_children() {
        let mut node = HtmlNode::element(
            "code",
            Vec::new(),
            vec![
                HtmlNode::text("  lead"),
                HtmlNode::element("span", Vec::new(), vec![HtmlNode::text("  inner  ")]),
                HtmlNode::text("tail  "),
            ],
        );
        trim_inline_code(&mut node);

        let HtmlNode::Element { children, .. } = &node else {
            panic!("expected element");
        };
        assert_eq!(children[0], HtmlNode::text("lead"));
        // Text inside the nested span is not a direct child of code.
        let HtmlNode::Element { children: span, .. } = &children[1] else {
            panic!("expected span");
        };
        assert_eq!(span[0], HtmlNode::text("  inner  "));
        assert_eq!(children[2], HtmlNode::text("tail"));
    }
}
