//! Host-side effects the plugin asks for: notifications and the UI panel

use crate::config::WindowSize;

pub const NO_VISIBLE_NODES: &str = "No visible nodes found";
pub const QUERY_SAVED: &str = "Query saved";
pub const API_KEY_SAVED: &str = "OpenAI url & key saved";
pub const API_KEY_SAVE_FAILED: &str = "Error while saving OpenAI key";
pub const CONTEXT_TOO_LARGE: &str = "Too large layer selected. Please consider separating files";
pub const GENERATION_FAILED: &str = "Error while generating code";

/// Toast shown to the user by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub error: bool,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
        }
    }
}

pub trait PluginHost {
    fn notify(&mut self, notification: Notification);

    fn show_ui(&mut self, window: &WindowSize);

    fn close_plugin(&mut self);
}

/// Host that records every request, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub notifications: Vec<Notification>,
    pub shown_ui: Option<WindowSize>,
    pub closed: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .map(|notification| notification.message.as_str())
            .collect()
    }
}

impl PluginHost for RecordingHost {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn show_ui(&mut self, window: &WindowSize) {
        self.shown_ui = Some(*window);
    }

    fn close_plugin(&mut self) {
        self.closed = true;
    }
}
