//! Depth-first traversal over mdast trees with in-place mutation support.

use markdown::mdast::Node;

/// Controls descent after a node has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitControl {
    /// Descend into the node's children (if any).
    #[default]
    Continue,
    /// Do not descend. Required after a visitor rewrites the node in place
    /// and the old children no longer mean anything.
    SkipChildren,
}

/// Performs a depth-first, pre-order traversal of the tree, invoking the
/// visitor for every node.
///
/// The visitor receives the node and its position among its parent's
/// children (`None` for the root). Visitors may rewrite the visited node's
/// own fields, including replacing the node wholesale or clearing its
/// children; sibling traversal is index-based and re-reads the child list
/// on every step, so such rewrites never corrupt it. Returning
/// [`VisitControl::SkipChildren`] suppresses descent into the node just
/// visited.
///
/// Effects are entirely via mutation; nothing is returned.
pub fn visit_mut<F>(root: &mut Node, visitor: &mut F)
where
    F: FnMut(&mut Node, Option<usize>) -> VisitControl,
{
    walk(root, None, visitor);
}

fn walk<F>(node: &mut Node, index: Option<usize>, visitor: &mut F)
where
    F: FnMut(&mut Node, Option<usize>) -> VisitControl,
{
    if visitor(node, index) == VisitControl::SkipChildren {
        return;
    }

    let mut child = 0;
    while let Some(children) = node.children_mut() {
        if child >= children.len() {
            break;
        }
        walk(&mut children[child], Some(child), visitor);
        child += 1;
    }
}
