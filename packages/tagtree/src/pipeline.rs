//! # Selection Pipeline
//!
//! Runs every stage over one selected node:
//! build → prune → chunk, plus the original tree and the child fragments.

use crate::builder::{build_tag_tree, UsedComponents};
use crate::chunker::{divide_tag_tree_to_chunks, Chunk, ChunkError, ChunkOptions};
use crate::fragments::get_child_gql_fragments;
use crate::original::{build_original_layer_tree, OriginalNode};
use crate::prune::prune_tag_tree_in_place;
use crate::tag_node::TagNode;
use figtag_scene::SceneNode;

/// Everything the UI needs to know about a selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    /// Pruned tag tree
    pub tag_tree: TagNode,
    /// Chunks of the pruned tag tree
    pub chunks: Vec<Chunk>,
    pub original_tree: OriginalNode,
    pub used_component_names: Vec<String>,
    pub child_fragments: Vec<String>,
}

/// Result of running the pipeline over a selection
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineResult {
    Visible(SelectionSnapshot),
    /// Nothing under the selection renders
    NoVisibleNodes,
}

pub fn process_selection(
    node: SceneNode<'_>,
    options: &ChunkOptions,
) -> Result<PipelineResult, ChunkError> {
    let mut used_components = UsedComponents::new();
    let child_fragments = get_child_gql_fragments(node);
    let tag_tree = build_tag_tree(node, &mut used_components);
    let original_tree = build_original_layer_tree(node);

    let Some(mut tag_tree) = tag_tree else {
        return Ok(PipelineResult::NoVisibleNodes);
    };

    prune_tag_tree_in_place(&mut tag_tree);
    let chunks = divide_tag_tree_to_chunks(&tag_tree, options)?;

    Ok(PipelineResult::Visible(SelectionSnapshot {
        tag_tree,
        chunks,
        original_tree,
        used_component_names: used_components.into_names(),
        child_fragments,
    }))
}
