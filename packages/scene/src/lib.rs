//! # Figtag Scene
//!
//! The host design tool's scene graph as the plugin sees it: an externally
//! owned document of nodes with parent links, read through [`SceneNode`]
//! handles, plus per-node plugin data that the plugin may write.

pub mod node;
pub mod scene;

pub use node::{
    format_number, AutoLayout, LayoutMode, NodeKind, NodeProps, Paint, PaintKind, Rgba,
    TextAlign, TextStyle,
};
pub use scene::{Descendants, NodeSpec, Scene, SceneNode, SceneSpec};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Node is not a page: {0}")]
    NotAPage(String),

    #[error("Scene has no pages")]
    NoPages,

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}
