use crate::PluginError;
use figtag_tagtree::{ChunkOptions, DEFAULT_MAX_CHUNK_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "figtag.config.json";

/// Plugin build and runtime configuration, passed into the session at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Community build: the UI gets the user's own API url and key
    #[serde(default)]
    pub build_for_community_plugin: bool,

    /// Soft limit on chunk length, in bytes of serialized JSON
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,

    /// Size of the UI panel
    #[serde(default)]
    pub window: WindowSize,

    /// `tracing` filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 500,
            height: 600,
        }
    }
}

fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl PluginConfig {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(dir: &Path) -> Result<Self, PluginError> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, PluginError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PluginError> {
        if self.max_chunk_size == 0 {
            return Err(PluginError::InvalidConfig(
                "maxChunkSize must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn chunk_options(&self) -> ChunkOptions {
        ChunkOptions::new(self.max_chunk_size)
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            build_for_community_plugin: false,
            max_chunk_size: default_max_chunk_size(),
            window: WindowSize::default(),
            log_filter: default_log_filter(),
        }
    }
}
