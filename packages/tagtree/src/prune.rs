//! Strip properties the downstream consumer doesn't need

use crate::tag_node::TagNode;
use crate::visitor::{walk_tag_node_mut, TagVisitorMut};

/// Style keys prefixed with this are host bookkeeping, not rendering input
const HOST_STYLE_PREFIX: &str = "-figma-";

struct PropPruner;

impl TagVisitorMut for PropPruner {
    fn visit_tag_node_mut(&mut self, node: &mut TagNode) {
        node.id = None;
        node.node_type = None;

        let trimmed = node.name.trim();
        if trimmed.len() != node.name.len() {
            node.name = trimmed.to_string();
        }

        node.css
            .retain(|key, value| !key.starts_with(HOST_STYLE_PREFIX) && !value.trim().is_empty());

        walk_tag_node_mut(self, node);
    }
}

/// Remove host ids, host node types and non-rendering style keys in place.
/// Node count and nesting are left untouched.
pub fn prune_tag_tree_in_place(tree: &mut TagNode) {
    PropPruner.visit_tag_node_mut(tree);
}

/// Pruned copy of `tree`
pub fn remove_unnecessary_props_from_tag_tree(tree: &TagNode) -> TagNode {
    let mut pruned = tree.clone();
    prune_tag_tree_in_place(&mut pruned);
    pruned
}
