//! Rewrites fenced code blocks into `CodeBlock` component elements.

use inkpress_core::{AstTransform, DocumentData, VisitControl, visit_mut};
use markdown::mdast::{
    AttributeContent, AttributeValue, MdxJsxAttribute, MdxJsxFlowElement, Node,
};

/// Component name the renderer binds for rewritten code blocks.
pub const CODE_COMPONENT: &str = "CodeBlock";

/// Fallback language tag when a fence declares none.
const DEFAULT_LANG: &str = "text";

/// Replaces every fenced code node, in place, with an MDX flow element
/// named [`CODE_COMPONENT`] carrying `code`, `lang`, and `meta` string
/// attributes and no children.
///
/// The node keeps its position among its parent's children, so document
/// order downstream is unaffected. The `meta` string is carried through
/// raw; parsing it is the renderer's concern (see [`crate::meta`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBlockRewriter;

impl AstTransform for CodeBlockRewriter {
    fn transform(&self, root: &mut Node, _data: &mut DocumentData) {
        let mut rewritten = 0usize;
        visit_mut(root, &mut |node, _index| {
            let Node::Code(code) = &mut *node else {
                return VisitControl::Continue;
            };

            let code_text = std::mem::take(&mut code.value);
            let lang = code.lang.take().unwrap_or_else(|| DEFAULT_LANG.to_string());
            let meta = code.meta.take().unwrap_or_default();
            let position = code.position.take();

            *node = Node::MdxJsxFlowElement(MdxJsxFlowElement {
                children: Vec::new(),
                name: Some(CODE_COMPONENT.to_string()),
                attributes: vec![
                    literal_attribute("code", code_text),
                    literal_attribute("lang", lang),
                    literal_attribute("meta", meta),
                ],
                position,
            });
            rewritten += 1;

            // The rewritten node is a leaf instruction for the renderer.
            VisitControl::SkipChildren
        });
        log::debug!("rewrote {rewritten} code block(s) into <{CODE_COMPONENT}>");
    }
}

fn literal_attribute(name: &str, value: String) -> AttributeContent {
    AttributeContent::Property(MdxJsxAttribute {
        name: name.to_string(),
        value: Some(AttributeValue::Literal(value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpress_core::{ParseOptions, parse_mdast};

    fn rewrite(input: &str) -> Node {
        let mut tree = parse_mdast(input, &ParseOptions::markdown()).unwrap();
        CodeBlockRewriter.transform(&mut tree, &mut DocumentData::new());
        tree
    }

    fn attribute<'a>(element: &'a MdxJsxFlowElement, name: &str) -> Option<&'a str> {
        element.attributes.iter().find_map(|attr| match attr {
            AttributeContent::Property(prop) if prop.name == name => match &prop.value {
                Some(AttributeValue::Literal(value)) => Some(value.as_str()),
                _ => None,
            },
            _ => None,
        })
    }

    #[test]
    fn rewrites_code_node_with_lang_and_meta() {
        let tree = rewrite("```python file=app.py highlight=2-3\nprint(1)\n```\n");
        let Node::Root(root) = &tree else {
            panic!("expected root");
        };
        let Node::MdxJsxFlowElement(element) = &root.children[0] else {
            panic!("expected rewritten element, got {:?}", root.children[0]);
        };

        assert_eq!(element.name.as_deref(), Some(CODE_COMPONENT));
        assert!(element.children.is_empty());
        assert_eq!(attribute(element, "code"), Some("print(1)"));
        assert_eq!(attribute(element, "lang"), Some("python"));
        assert_eq!(attribute(element, "meta"), Some("file=app.py highlight=2-3"));
    }

    #[test]
    fn defaults_missing_lang_and_meta() {
        let tree = rewrite("```\nplain\n```\n");
        let Node::Root(root) = &tree else {
            panic!("expected root");
        };
        let Node::MdxJsxFlowElement(element) = &root.children[0] else {
            panic!("expected rewritten element");
        };

        assert_eq!(attribute(element, "lang"), Some("text"));
        assert_eq!(attribute(element, "meta"), Some(""));
    }

    #[test]
    fn carries_raw_code_through_unescaped() {
        let tree = rewrite("```html\n<b>&amp; \"quotes\"</b>\n```\n");
        let Node::Root(root) = &tree else {
            panic!("expected root");
        };
        let Node::MdxJsxFlowElement(element) = &root.children[0] else {
            panic!("expected rewritten element");
        };

        assert_eq!(attribute(element, "code"), Some("<b>&amp; \"quotes\"</b>"));
    }

    #[test]
    fn preserves_position_among_siblings() {
        let tree = rewrite("before\n\n```js\n1\n```\n\nafter\n");
        let Node::Root(root) = &tree else {
            panic!("expected root");
        };

        assert_eq!(root.children.len(), 3);
        assert!(matches!(root.children[0], Node::Paragraph(_)));
        assert!(matches!(root.children[1], Node::MdxJsxFlowElement(_)));
        assert!(matches!(root.children[2], Node::Paragraph(_)));
    }

    #[test]
    fn rewrites_every_code_node() {
        let tree = rewrite("```a\n1\n```\n\ntext\n\n```b\n2\n```\n");
        let Node::Root(root) = &tree else {
            panic!("expected root");
        };
        let rewritten = root
            .children
            .iter()
            .filter(|child| matches!(child, Node::MdxJsxFlowElement(_)))
            .count();
        assert_eq!(rewritten, 2);
        assert!(!root.children.iter().any(|c| matches!(c, Node::Code(_))));
    }
}
