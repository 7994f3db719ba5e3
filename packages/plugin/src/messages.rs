//! Messages exchanged with the UI process
//!
//! Both directions are JSON objects tagged by a `type` field.

use crate::saved_query::SavedGqlQuery;
use crate::PluginError;
use figtag_tagtree::{Chunk, OriginalNode, TagNode};
use serde::{Deserialize, Serialize};

/// Completion error code for inputs that overflow the model's context
pub const CONTEXT_LENGTH_EXCEEDED: &str = "context_length_exceeded";

/// Plugin → UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PluginToUiMessage {
    #[serde(rename = "sendSelectedNode")]
    SendSelectedNode(SelectedNodePayload),

    #[serde(rename = "get-openai-key", rename_all = "camelCase")]
    GetOpenAiKey { aoi_url: String, open_ai_key: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedNodePayload {
    pub node_id: String,
    pub chunks: Vec<Chunk>,
    #[serde(rename = "nodeJSON")]
    pub node_json: TagNode,
    pub original_node_tree: OriginalNode,
    pub used_component_names: Vec<String>,
    pub saved_gql_query: Option<SavedGqlQuery>,
    pub child_fragment_strings: Vec<String>,
}

/// UI → plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToPluginMessage {
    #[serde(rename = "save-gql-query", rename_all = "camelCase")]
    SaveGqlQuery {
        node_id: String,
        original_query: String,
        editing_mode: String,
    },

    #[serde(rename = "save-openai-key", rename_all = "camelCase")]
    SaveOpenAiKey { aoi_url: String, open_ai_key: String },

    /// The completion API rejected a request made by the UI
    #[serde(rename = "error-char-completion")]
    ErrorCharCompletion { error: CompletionErrorBody },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionErrorBody {
    pub error: CompletionError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CompletionError {
    pub fn is_context_length_exceeded(&self) -> bool {
        self.code.as_deref() == Some(CONTEXT_LENGTH_EXCEEDED)
    }
}

impl PluginToUiMessage {
    pub fn to_json(&self) -> Result<String, PluginError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl UiToPluginMessage {
    pub fn from_json(json: &str) -> Result<Self, PluginError> {
        Ok(serde_json::from_str(json)?)
    }
}
