//! # Figtag Tag Tree
//!
//! Turns a selected layer tree into a simplified tag tree and prepares it
//! for downstream consumers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ scene: host layer tree (SceneNode handles)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ classifier + builder: visible nodes → tags  │
//! │ original: structural mirror of every node   │
//! │ fragments: query fragments on instances     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ prune: drop host-only props                 │
//! │ chunker: size-bounded slices of the JSON    │
//! └─────────────────────────────────────────────┘
//! ```

pub mod builder;
pub mod chunker;
pub mod classifier;
pub mod fragments;
pub mod original;
pub mod pipeline;
pub mod prune;
pub mod tag_node;
pub mod visitor;

#[cfg(test)]
mod tests_pipeline;

pub use builder::{build_tag_tree, UsedComponents};
pub use chunker::{
    divide_tag_tree_to_chunks, join_chunks, Chunk, ChunkError, ChunkOptions,
    DEFAULT_MAX_CHUNK_SIZE,
};
pub use classifier::{classify, extract_styles, has_own_content, is_visible, ComponentRole};
pub use fragments::{get_child_gql_fragments, GQL_FRAGMENT_KEY};
pub use original::{build_original_layer_tree, OriginalNode};
pub use pipeline::{process_selection, PipelineResult, SelectionSnapshot};
pub use prune::{prune_tag_tree_in_place, remove_unnecessary_props_from_tag_tree};
pub use tag_node::{Geometry, TagNode, TagType};
pub use visitor::{count_nodes, walk_tag_node, walk_tag_node_mut, TagVisitor, TagVisitorMut};
