use crate::tag_node::TagNode;

/// Visitor pattern for traversing tag trees immutably
///
/// The default implementation walks the entire tree in document order.
/// Override `visit_tag_node` to act on each node, calling
/// [`walk_tag_node`] to keep descending.
pub trait TagVisitor: Sized {
    fn visit_tag_node(&mut self, node: &TagNode) {
        walk_tag_node(self, node);
    }
}

/// Mutable visitor pattern for transforming tag trees in place
pub trait TagVisitorMut: Sized {
    fn visit_tag_node_mut(&mut self, node: &mut TagNode) {
        walk_tag_node_mut(self, node);
    }
}

pub fn walk_tag_node<V: TagVisitor>(visitor: &mut V, node: &TagNode) {
    for child in &node.children {
        visitor.visit_tag_node(child);
    }
}

pub fn walk_tag_node_mut<V: TagVisitorMut>(visitor: &mut V, node: &mut TagNode) {
    for child in &mut node.children {
        visitor.visit_tag_node_mut(child);
    }
}

struct NodeCounter {
    count: usize,
}

impl TagVisitor for NodeCounter {
    fn visit_tag_node(&mut self, node: &TagNode) {
        self.count += 1;
        walk_tag_node(self, node);
    }
}

pub fn count_nodes(root: &TagNode) -> usize {
    let mut counter = NodeCounter { count: 0 };
    counter.visit_tag_node(root);
    counter.count
}
