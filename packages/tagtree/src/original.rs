//! Structural mirror of the selected layer tree, used for reference display

use figtag_scene::{NodeKind, SceneNode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<OriginalNode>,
}

impl OriginalNode {
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OriginalNode::node_count).sum::<usize>()
    }
}

/// Mirror every node under `node`, visible or not
pub fn build_original_layer_tree(node: SceneNode<'_>) -> OriginalNode {
    OriginalNode {
        id: node.id().to_string(),
        name: node.name().to_string(),
        kind: node.kind(),
        children: node.children().map(build_original_layer_tree).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figtag_scene::{NodeProps, Scene};

    #[test]
    fn test_mirrors_hidden_nodes() {
        let mut scene = Scene::new();
        scene
            .append_child("0:1", NodeProps::new("1", "Root", NodeKind::Frame).with_size(10.0, 10.0))
            .unwrap();
        scene
            .append_child("1", NodeProps::new("2", "Hidden", NodeKind::Rectangle).hidden())
            .unwrap();
        scene
            .append_child("1", NodeProps::new("3", "Flat", NodeKind::Line).with_size(10.0, 0.0))
            .unwrap();

        let tree = build_original_layer_tree(scene.node("1").unwrap());

        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.children[0].name, "Hidden");
        assert_eq!(tree.children[1].kind, NodeKind::Line);
    }

    #[test]
    fn test_serialized_shape() {
        let mut scene = Scene::new();
        scene
            .append_child("0:1", NodeProps::new("1", "Root", NodeKind::Frame))
            .unwrap();

        let tree = build_original_layer_tree(scene.node("1").unwrap());
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"Root","type":"FRAME","children":[]}"#);
    }
}
