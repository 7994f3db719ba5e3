//! Error types for the plugin

use crate::storage::StorageError;
use figtag_scene::SceneError;
use figtag_tagtree::ChunkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Chunk error: {0}")]
    Chunk(#[from] ChunkError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("UI channel closed")]
    ChannelClosed,
}
