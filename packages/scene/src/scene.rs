//! Arena-backed scene document and the read handle the pipeline walks

use crate::node::{AutoLayout, NodeKind, NodeProps, Paint, TextStyle};
use crate::SceneError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct NodeEntry {
    props: NodeProps,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Host-owned scene graph.
///
/// Nodes live in an arena and are addressed by their host id. The pipeline
/// only ever sees [`SceneNode`] handles borrowed from here; the single write
/// path is [`Scene::set_plugin_data`].
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<NodeEntry>,
    index: HashMap<String, usize>,
    current_page: usize,
    selection: Vec<usize>,
}

const DOCUMENT_ROOT: usize = 0;

impl Scene {
    /// Empty document with a single page, which becomes the current page
    pub fn new() -> Self {
        let mut scene = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            current_page: 0,
            selection: Vec::new(),
        };

        scene.push_entry(NodeProps::new("0:0", "Document", NodeKind::Document), None);
        scene.current_page =
            scene.push_entry(NodeProps::new("0:1", "Page 1", NodeKind::Page), Some(DOCUMENT_ROOT));
        scene
    }

    /// Load a scene from its JSON description (see [`SceneSpec`])
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let spec: SceneSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    pub fn from_spec(spec: SceneSpec) -> Result<Self, SceneError> {
        let mut scene = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            current_page: 0,
            selection: Vec::new(),
        };
        scene.push_entry(NodeProps::new("0:0", "Document", NodeKind::Document), None);

        if spec.pages.is_empty() {
            return Err(SceneError::NoPages);
        }

        for page in spec.pages {
            scene.insert_spec(DOCUMENT_ROOT, page)?;
        }

        scene.current_page = match spec.current_page {
            Some(id) => {
                let index = scene.lookup(&id)?;
                if scene.nodes[index].props.kind != NodeKind::Page {
                    return Err(SceneError::NotAPage(id));
                }
                index
            }
            None => scene.nodes[DOCUMENT_ROOT].children[0],
        };

        let selection: Vec<&str> = spec.selection.iter().map(String::as_str).collect();
        scene.set_selection(&selection)?;

        Ok(scene)
    }

    fn insert_spec(&mut self, parent: usize, spec: NodeSpec) -> Result<usize, SceneError> {
        if self.index.contains_key(&spec.props.id) {
            return Err(SceneError::DuplicateId(spec.props.id));
        }

        let index = self.push_entry(spec.props, Some(parent));
        for child in spec.children {
            self.insert_spec(index, child)?;
        }
        Ok(index)
    }

    fn push_entry(&mut self, props: NodeProps, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        self.index.insert(props.id.clone(), index);
        self.nodes.push(NodeEntry {
            props,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(index);
        }
        index
    }

    fn lookup(&self, id: &str) -> Result<usize, SceneError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| SceneError::NodeNotFound(id.to_string()))
    }

    /// Append a node as the last child of `parent_id`
    pub fn append_child(&mut self, parent_id: &str, props: NodeProps) -> Result<(), SceneError> {
        let parent = self.lookup(parent_id)?;
        if self.index.contains_key(&props.id) {
            return Err(SceneError::DuplicateId(props.id));
        }
        self.push_entry(props, Some(parent));
        Ok(())
    }

    /// Add another page to the document
    pub fn add_page(&mut self, props: NodeProps) -> Result<(), SceneError> {
        self.append_child("0:0", props)
    }

    pub fn set_current_page(&mut self, id: &str) -> Result<(), SceneError> {
        let index = self.lookup(id)?;
        if self.nodes[index].props.kind != NodeKind::Page {
            return Err(SceneError::NotAPage(id.to_string()));
        }
        self.current_page = index;
        self.selection.clear();
        Ok(())
    }

    pub fn set_selection(&mut self, ids: &[&str]) -> Result<(), SceneError> {
        let selection = ids
            .iter()
            .map(|id| self.lookup(id))
            .collect::<Result<Vec<_>, _>>()?;
        self.selection = selection;
        Ok(())
    }

    pub fn document(&self) -> SceneNode<'_> {
        self.handle(DOCUMENT_ROOT)
    }

    pub fn current_page(&self) -> SceneNode<'_> {
        self.handle(self.current_page)
    }

    /// Node by host id, anywhere in the document
    pub fn node(&self, id: &str) -> Option<SceneNode<'_>> {
        self.index.get(id).map(|&index| self.handle(index))
    }

    pub fn selection(&self) -> Vec<SceneNode<'_>> {
        self.selection.iter().map(|&index| self.handle(index)).collect()
    }

    /// The current selection, or every top-level node of the current page
    /// when nothing is selected
    pub fn selected_nodes_or_all_nodes(&self) -> Vec<SceneNode<'_>> {
        if self.selection.is_empty() {
            self.current_page().children().collect()
        } else {
            self.selection()
        }
    }

    /// Attach an opaque string to a node under `key`
    pub fn set_plugin_data(
        &mut self,
        id: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), SceneError> {
        let index = self.lookup(id)?;
        self.nodes[index]
            .props
            .plugin_data
            .insert(key.into(), value.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn handle(&self, index: usize) -> SceneNode<'_> {
        SceneNode { scene: self, index }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed, read-only view of one host node
#[derive(Clone, Copy)]
pub struct SceneNode<'a> {
    scene: &'a Scene,
    index: usize,
}

impl<'a> SceneNode<'a> {
    fn entry(&self) -> &'a NodeEntry {
        &self.scene.nodes[self.index]
    }

    pub fn props(&self) -> &'a NodeProps {
        &self.entry().props
    }

    pub fn id(&self) -> &'a str {
        &self.props().id
    }

    pub fn name(&self) -> &'a str {
        &self.props().name
    }

    pub fn kind(&self) -> NodeKind {
        self.props().kind
    }

    pub fn visible(&self) -> bool {
        self.props().visible
    }

    pub fn opacity(&self) -> f64 {
        self.props().opacity
    }

    pub fn x(&self) -> f64 {
        self.props().x
    }

    pub fn y(&self) -> f64 {
        self.props().y
    }

    pub fn width(&self) -> f64 {
        self.props().width
    }

    pub fn height(&self) -> f64 {
        self.props().height
    }

    pub fn fills(&self) -> &'a [Paint] {
        &self.props().fills
    }

    pub fn strokes(&self) -> &'a [Paint] {
        &self.props().strokes
    }

    pub fn stroke_weight(&self) -> f64 {
        self.props().stroke_weight
    }

    pub fn corner_radius(&self) -> f64 {
        self.props().corner_radius
    }

    pub fn layout(&self) -> Option<&'a AutoLayout> {
        self.props().layout.as_ref()
    }

    pub fn characters(&self) -> Option<&'a str> {
        self.props().characters.as_deref()
    }

    pub fn text_style(&self) -> Option<&'a TextStyle> {
        self.props().text_style.as_ref()
    }

    pub fn plugin_data(&self, key: &str) -> Option<&'a str> {
        self.props().plugin_data.get(key).map(String::as_str)
    }

    pub fn parent(&self) -> Option<SceneNode<'a>> {
        self.entry().parent.map(|index| self.scene.handle(index))
    }

    /// Children in document order (back-most first)
    pub fn children(&self) -> impl Iterator<Item = SceneNode<'a>> + 'a {
        let scene = self.scene;
        self.entry()
            .children
            .iter()
            .map(move |&index| scene.handle(index))
    }

    pub fn child_count(&self) -> usize {
        self.entry().children.len()
    }

    /// The component an instance points at, if it still exists
    pub fn main_component(&self) -> Option<SceneNode<'a>> {
        self.props()
            .main_component_id
            .as_deref()
            .and_then(|id| self.scene.node(id))
    }

    /// Pre-order walk over every descendant, excluding this node
    pub fn descendants(&self) -> Descendants<'a> {
        let mut stack: Vec<usize> = self.entry().children.clone();
        stack.reverse();
        Descendants {
            scene: self.scene,
            stack,
        }
    }

    /// First descendant matching `predicate`, in pre-order
    pub fn find_one<F>(&self, mut predicate: F) -> Option<SceneNode<'a>>
    where
        F: FnMut(&SceneNode<'a>) -> bool,
    {
        self.descendants().find(|node| predicate(node))
    }
}

impl std::fmt::Debug for SceneNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneNode")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}

impl PartialEq for SceneNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.scene, other.scene) && self.index == other.index
    }
}

pub struct Descendants<'a> {
    scene: &'a Scene,
    stack: Vec<usize>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = SceneNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let children = &self.scene.nodes[index].children;
        self.stack.extend(children.iter().rev());
        Some(self.scene.handle(index))
    }
}

/// JSON description of a scene: nested pages plus the current selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSpec {
    pub pages: Vec<NodeSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<String>,

    #[serde(default)]
    pub selection: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(flatten)]
    pub props: NodeProps,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}
