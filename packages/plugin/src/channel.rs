//! Two one-way typed channels between the plugin and its UI

use crate::messages::{PluginToUiMessage, UiToPluginMessage};
use crate::PluginError;
use tokio::sync::mpsc;

/// The plugin's ends: sends to the UI, receives from it
pub struct PluginPort {
    to_ui: mpsc::UnboundedSender<PluginToUiMessage>,
    from_ui: mpsc::UnboundedReceiver<UiToPluginMessage>,
}

/// The UI's ends
pub struct UiPort {
    pub to_plugin: mpsc::UnboundedSender<UiToPluginMessage>,
    pub from_plugin: mpsc::UnboundedReceiver<PluginToUiMessage>,
}

pub fn ui_channel() -> (PluginPort, UiPort) {
    let (to_ui, from_plugin) = mpsc::unbounded_channel();
    let (to_plugin, from_ui) = mpsc::unbounded_channel();

    (
        PluginPort { to_ui, from_ui },
        UiPort {
            to_plugin,
            from_plugin,
        },
    )
}

impl PluginPort {
    pub fn send(&self, message: PluginToUiMessage) -> Result<(), PluginError> {
        self.to_ui
            .send(message)
            .map_err(|_| PluginError::ChannelClosed)
    }

    /// Next inbound message, or `None` once the UI side has gone away
    pub async fn recv(&mut self) -> Option<UiToPluginMessage> {
        self.from_ui.recv().await
    }
}

impl UiPort {
    /// Decode a raw `postMessage` payload and forward it to the plugin
    pub fn post_json(&self, json: &str) -> Result<(), PluginError> {
        let message = UiToPluginMessage::from_json(json)?;
        self.to_plugin
            .send(message)
            .map_err(|_| PluginError::ChannelClosed)
    }
}
