//! Chunk division - split a serialized tag tree into size-bounded pieces
//!
//! Size is the UTF-8 byte length of the compact JSON encoding of the tree.
//! Chunks are contiguous slices of that encoding, so concatenating every
//! chunk's content in order gives back the serialized tree exactly.
//!
//! A subtree that fits within the maximum is never split. A larger subtree
//! is opened up: its own properties (up to the start of its children list)
//! form one segment, each child is handled recursively, and the closing of
//! the children list forms the last segment. A leaf larger than the
//! maximum stays whole, so the maximum is a soft target.

use crate::tag_node::TagNode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_MAX_CHUNK_SIZE: usize = 12_000;

const CHILDREN_OPEN: &str = ",\"children\":[";
const CHILDREN_CLOSE: &str = "]}";

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Maximum chunk size must be positive")]
    InvalidMaxSize,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkOptions {
    /// Soft upper bound on a chunk's content length, in bytes
    pub max_chunk_size: usize,
}

impl ChunkOptions {
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

/// One ordered slice of the serialized tag tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub index: usize,
    pub content: String,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Reassemble the serialized tree from its chunks
pub fn join_chunks(chunks: &[Chunk]) -> String {
    chunks.iter().map(|chunk| chunk.content.as_str()).collect()
}

#[instrument(skip_all, fields(max = options.max_chunk_size))]
pub fn divide_tag_tree_to_chunks(
    tree: &TagNode,
    options: &ChunkOptions,
) -> Result<Vec<Chunk>, ChunkError> {
    if options.max_chunk_size == 0 {
        return Err(ChunkError::InvalidMaxSize);
    }

    let mut segments = Vec::new();
    collect_segments(tree, "", options.max_chunk_size, &mut segments)?;

    let chunks = pack_segments(segments, options.max_chunk_size);
    debug!(chunks = chunks.len(), "Divided tag tree");
    Ok(chunks)
}

/// Atomic pieces of the serialization, in order. `prefix` is the separator
/// that precedes this subtree inside its parent's children list.
fn collect_segments(
    node: &TagNode,
    prefix: &str,
    max: usize,
    segments: &mut Vec<String>,
) -> Result<(), ChunkError> {
    let serialized = serde_json::to_string(node)?;

    if node.is_leaf() || prefix.len() + serialized.len() <= max {
        segments.push(format!("{}{}", prefix, serialized));
        return Ok(());
    }

    segments.push(format!("{}{}", prefix, node_header(node)?));
    for (i, child) in node.children.iter().enumerate() {
        let separator = if i == 0 { "" } else { "," };
        collect_segments(child, separator, max, segments)?;
    }
    segments.push(CHILDREN_CLOSE.to_string());

    Ok(())
}

/// Serialization of a node's own properties through the opening of its
/// children list, e.g. `{"tag":"container",...,"children":[`
fn node_header(node: &TagNode) -> Result<String, ChunkError> {
    let mut header = serde_json::to_string(&node.shallow_clone())?;
    header.pop();
    header.push_str(CHILDREN_OPEN);
    Ok(header)
}

fn pack_segments(segments: Vec<String>, max: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for segment in segments {
        if !current.is_empty() && current.len() + segment.len() > max {
            chunks.push(Chunk {
                index: chunks.len(),
                content: std::mem::take(&mut current),
            });
        }
        current.push_str(&segment);
    }

    if !current.is_empty() {
        chunks.push(Chunk {
            index: chunks.len(),
            content: current,
        });
    }

    chunks
}
