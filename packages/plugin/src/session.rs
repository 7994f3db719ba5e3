//! # Plugin Session
//!
//! One activation of the plugin: inspect the selection, hand the result to
//! the UI, then react to whatever the UI sends back until it goes away.
//!
//! ```rust,ignore
//! let (port, ui) = ui_channel();
//! let mut session = PluginSession::new(config, &mut scene, host, storage, port);
//! session.launch().await?;
//! ```

use crate::channel::PluginPort;
use crate::config::PluginConfig;
use crate::host::{
    Notification, PluginHost, API_KEY_SAVED, API_KEY_SAVE_FAILED, CONTEXT_TOO_LARGE,
    GENERATION_FAILED, NO_VISIBLE_NODES, QUERY_SAVED,
};
use crate::messages::{PluginToUiMessage, SelectedNodePayload, UiToPluginMessage};
use crate::saved_query::{load_saved_gql_query, save_gql_query, SavedGqlQuery};
use crate::storage::{ApiCredential, ClientStorage, OPENAI_API_KEY};
use crate::PluginError;
use figtag_scene::Scene;
use figtag_tagtree::{process_selection, PipelineResult};
use tracing::{debug, error, info, instrument, warn};

/// How the initial inspection ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Selection data was sent and the UI is open
    Shown { node_id: String },
    /// Nothing visible was selected; the plugin closed without a UI
    NoVisibleNodes,
}

pub struct PluginSession<'a, H, S> {
    config: PluginConfig,
    scene: &'a mut Scene,
    host: H,
    storage: S,
    port: PluginPort,
}

impl<'a, H, S> PluginSession<'a, H, S>
where
    H: PluginHost,
    S: ClientStorage,
{
    pub fn new(
        config: PluginConfig,
        scene: &'a mut Scene,
        host: H,
        storage: S,
        port: PluginPort,
    ) -> Self {
        Self {
            config,
            scene,
            host,
            storage,
            port,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Inspect the selection, then serve UI messages if the UI was opened
    pub async fn launch(&mut self) -> Result<RunOutcome, PluginError> {
        let outcome = self.run().await?;
        if let RunOutcome::Shown { .. } = outcome {
            self.serve().await?;
        }
        Ok(outcome)
    }

    /// Inspect the selection and send it to the UI.
    ///
    /// The selection message always goes out before the credential message
    /// of the community build. A selection that cannot be processed closes
    /// the plugin with an error notification before the error is returned.
    #[instrument(skip_all)]
    pub async fn run(&mut self) -> Result<RunOutcome, PluginError> {
        let options = self.config.chunk_options();

        let inspected = {
            let scene: &Scene = &*self.scene;
            match scene.selected_nodes_or_all_nodes().into_iter().next() {
                Some(node) => {
                    let saved_query = load_saved_gql_query(node);
                    let result = process_selection(node, &options);
                    Some((node.id().to_string(), saved_query, result))
                }
                None => None,
            }
        };

        let Some((node_id, saved_gql_query, result)) = inspected else {
            info!("Nothing selected and the page is empty");
            return Ok(self.close_without_ui());
        };

        let snapshot = match result {
            Ok(PipelineResult::Visible(snapshot)) => snapshot,
            Ok(PipelineResult::NoVisibleNodes) => return Ok(self.close_without_ui()),
            Err(e) => {
                error!(node = node_id.as_str(), error = %e, "Processing selection failed");
                self.host.notify(Notification::error(GENERATION_FAILED));
                self.host.close_plugin();
                return Err(e.into());
            }
        };

        self.host.show_ui(&self.config.window);

        info!(
            node = node_id.as_str(),
            chunks = snapshot.chunks.len(),
            components = snapshot.used_component_names.len(),
            fragments = snapshot.child_fragments.len(),
            "Sending selected node"
        );

        self.port
            .send(PluginToUiMessage::SendSelectedNode(SelectedNodePayload {
                node_id: node_id.clone(),
                chunks: snapshot.chunks,
                node_json: snapshot.tag_tree,
                original_node_tree: snapshot.original_tree,
                used_component_names: snapshot.used_component_names,
                saved_gql_query,
                child_fragment_strings: snapshot.child_fragments,
            }))?;

        if self.config.build_for_community_plugin {
            self.send_api_credential().await?;
        }

        Ok(RunOutcome::Shown { node_id })
    }

    fn close_without_ui(&mut self) -> RunOutcome {
        self.host.notify(Notification::info(NO_VISIBLE_NODES));
        self.host.close_plugin();
        RunOutcome::NoVisibleNodes
    }

    async fn send_api_credential(&mut self) -> Result<(), PluginError> {
        let stored = match self.storage.get(OPENAI_API_KEY).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "Reading API credential failed");
                return Ok(());
            }
        };

        let Some(stored) = stored else {
            debug!("No API credential stored");
            return Ok(());
        };

        let credential = ApiCredential::parse(&stored);
        self.port.send(PluginToUiMessage::GetOpenAiKey {
            aoi_url: credential.url,
            open_ai_key: credential.key,
        })
    }

    /// Handle inbound UI messages until the UI side closes its channel
    pub async fn serve(&mut self) -> Result<(), PluginError> {
        while let Some(message) = self.port.recv().await {
            self.handle_message(message).await?;
        }

        debug!("UI channel closed");
        Ok(())
    }

    pub async fn handle_message(&mut self, message: UiToPluginMessage) -> Result<(), PluginError> {
        match message {
            UiToPluginMessage::SaveGqlQuery {
                node_id,
                original_query,
                editing_mode,
            } => {
                let query = SavedGqlQuery {
                    original_query,
                    editing_mode,
                };
                if save_gql_query(&mut *self.scene, &node_id, &query)? {
                    info!(node = node_id.as_str(), "Saved GQL query");
                    self.host.notify(Notification::info(QUERY_SAVED));
                }
            }

            UiToPluginMessage::SaveOpenAiKey {
                aoi_url,
                open_ai_key,
            } => {
                let credential = ApiCredential::new(aoi_url, open_ai_key);
                match self
                    .storage
                    .set(OPENAI_API_KEY, credential.to_storage_string())
                    .await
                {
                    Ok(()) => self.host.notify(Notification::info(API_KEY_SAVED)),
                    Err(e) => {
                        error!(error = %e, "Saving API credential failed");
                        self.host.notify(Notification::error(API_KEY_SAVE_FAILED));
                    }
                }
            }

            UiToPluginMessage::ErrorCharCompletion { error } => {
                warn!(code = ?error.error.code, "Code generation failed");
                let message = if error.error.is_context_length_exceeded() {
                    CONTEXT_TOO_LARGE
                } else {
                    GENERATION_FAILED
                };
                self.host.notify(Notification::error(message));
            }
        }

        Ok(())
    }
}
