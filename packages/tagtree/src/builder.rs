//! Tag tree construction from a scene selection

use crate::classifier::{classify, extract_styles, has_own_content, ComponentRole};
use crate::tag_node::{Geometry, TagNode, TagType};
use figtag_scene::SceneNode;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, instrument, trace};

/// Distinct component names seen while building a tag tree, in the order
/// they were first encountered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UsedComponents {
    names: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl UsedComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a canonical component name; returns `false` if already known
    pub fn record(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Build the tag tree rooted at `root`.
///
/// Returns `None` when nothing in the subtree is visible, so callers can
/// tell "no visible content" apart from an empty container.
#[instrument(skip_all, fields(root = root.id()))]
pub fn build_tag_tree(root: SceneNode<'_>, used_components: &mut UsedComponents) -> Option<TagNode> {
    let tree = build_node(root, used_components);

    match &tree {
        Some(tree) => info!(
            nodes = tree.node_count(),
            components = used_components.len(),
            "Tag tree built"
        ),
        None => info!("Selection has no visible content"),
    }

    tree
}

fn build_node(node: SceneNode<'_>, used_components: &mut UsedComponents) -> Option<TagNode> {
    let Some(tag) = classify(&node) else {
        trace!(id = node.id(), kind = %node.kind(), "Skipping invisible node");
        return None;
    };

    let component_name = ComponentRole::resolve(&node).map(|role| role.display_name());
    if let Some(name) = &component_name {
        if used_components.record(name.clone()) {
            debug!(component = name.as_str(), "Recorded used component");
        }
    }

    let children: Vec<TagNode> = node
        .children()
        .filter_map(|child| build_node(child, used_components))
        .collect();

    if tag == TagType::Container && children.is_empty() && !has_own_content(&node) {
        trace!(id = node.id(), "Dropping empty container");
        return None;
    }

    let text = if tag == TagType::Text {
        Some(node.characters().unwrap_or_default().to_string())
    } else {
        None
    };

    Some(TagNode {
        tag,
        id: Some(node.id().to_string()),
        node_type: Some(node.kind().as_str().to_string()),
        name: node.name().to_string(),
        geometry: Geometry::new(node.x(), node.y(), node.width(), node.height()),
        css: extract_styles(&node, tag),
        text,
        component_name,
        children,
    })
}
