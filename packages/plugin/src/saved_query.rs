//! Queries saved against a node through its plugin data

use crate::storage::GQL_QUERY_KEY;
use crate::PluginError;
use figtag_scene::{Scene, SceneNode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGqlQuery {
    pub original_query: String,
    pub editing_mode: String,
}

/// Read the query saved on `node`.
///
/// Unparseable data is logged and treated as if nothing were saved.
pub fn load_saved_gql_query(node: SceneNode<'_>) -> Option<SavedGqlQuery> {
    let raw = node.plugin_data(GQL_QUERY_KEY).filter(|raw| !raw.is_empty())?;

    match serde_json::from_str(raw) {
        Ok(query) => Some(query),
        Err(e) => {
            warn!(node = node.id(), error = %e, "Parsing saved GQL query failed");
            None
        }
    }
}

/// Store `query` on the node with `node_id` on the current page.
///
/// Returns `Ok(false)` without touching anything when the node is gone.
pub fn save_gql_query(
    scene: &mut Scene,
    node_id: &str,
    query: &SavedGqlQuery,
) -> Result<bool, PluginError> {
    let exists = scene
        .current_page()
        .find_one(|node| node.id() == node_id)
        .is_some();

    if !exists {
        debug!(node = node_id, "Node for saved query no longer exists");
        return Ok(false);
    }

    let value = serde_json::to_string(query)?;
    scene.set_plugin_data(node_id, GQL_QUERY_KEY, value)?;
    Ok(true)
}
