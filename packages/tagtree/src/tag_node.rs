use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic classification of a visible scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Container,
    Text,
    Image,
    Shape,
    Vector,
    Component,
    /// Fallback for host node types without a dedicated mapping
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Normalized representation of one visible scene node.
///
/// `children` must stay the last field: the chunk divider relies on the
/// serialized form ending with the children list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagNode {
    pub tag: TagType,

    /// Host node id, stripped by the prop pruner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Host node type (`FRAME`, `TEXT`, ...), stripped by the prop pruner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    pub name: String,

    pub geometry: Geometry,

    /// CSS-like style properties; ordered so serialization is deterministic
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub css: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Canonical name of the component this node instantiates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TagNode>,
}

impl TagNode {
    pub fn new(tag: TagType, name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            tag,
            id: None,
            node_type: None,
            name: name.into(),
            geometry,
            css: BTreeMap::new(),
            text: None,
            component_name: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn with_css(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.css.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    pub fn with_child(mut self, child: TagNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<TagNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Copy of this node's own properties without its children
    pub fn shallow_clone(&self) -> TagNode {
        TagNode {
            tag: self.tag,
            id: self.id.clone(),
            node_type: self.node_type.clone(),
            name: self.name.clone(),
            geometry: self.geometry,
            css: self.css.clone(),
            text: self.text.clone(),
            component_name: self.component_name.clone(),
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        crate::visitor::count_nodes(self)
    }
}
