//! Demotes headings one level so embedded documents nest under the page title.

use inkpress_core::{AstTransform, DocumentData, VisitControl, visit_mut};
use markdown::mdast::Node;

/// Deepest heading level in the document model (`<h6>`).
pub const MAX_HEADING_DEPTH: u8 = 6;

/// Increases every heading's depth by one, clamped to
/// [`MAX_HEADING_DEPTH`].
///
/// A nested document must not introduce a heading that outranks the page's
/// own title; demoting all headings one level preserves their relative
/// hierarchy. Saturating at the clamp makes repeated runs converge.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingPromoter;

impl AstTransform for HeadingPromoter {
    fn transform(&self, root: &mut Node, _data: &mut DocumentData) {
        visit_mut(root, &mut |node, _index| {
            if let Node::Heading(heading) = node {
                heading.depth = (heading.depth + 1).min(MAX_HEADING_DEPTH);
            }
            VisitControl::Continue
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpress_core::{ParseOptions, parse_mdast};

    fn heading_depths(tree: &Node) -> Vec<u8> {
        let Node::Root(root) = tree else {
            panic!("expected root");
        };
        root.children
            .iter()
            .filter_map(|child| match child {
                Node::Heading(heading) => Some(heading.depth),
                _ => None,
            })
            .collect()
    }

    fn promote(tree: &mut Node) {
        HeadingPromoter.transform(tree, &mut DocumentData::new());
    }

    #[test]
    fn demotes_each_heading_one_level() {
        let mut tree = parse_mdast(
            "# a\n\n## b\n\n### c\n\n#### d\n\n##### e\n\n###### f\n",
            &ParseOptions::markdown(),
        )
        .unwrap();
        promote(&mut tree);
        assert_eq!(heading_depths(&tree), vec![2, 3, 4, 5, 6, 6]);
    }

    #[test]
    fn running_twice_adds_exactly_one_more_level_capped() {
        let mut tree = parse_mdast("# a\n\n##### e\n", &ParseOptions::markdown()).unwrap();
        promote(&mut tree);
        assert_eq!(heading_depths(&tree), vec![2, 6]);
        promote(&mut tree);
        assert_eq!(heading_depths(&tree), vec![3, 6]);
    }

    #[test]
    fn idempotent_once_saturated() {
        let mut tree = parse_mdast("##### e\n\n###### f\n", &ParseOptions::markdown()).unwrap();
        promote(&mut tree);
        let once = heading_depths(&tree);
        promote(&mut tree);
        assert_eq!(heading_depths(&tree), once);
        assert_eq!(once, vec![6, 6]);
    }
}
