//! # Figtag Plugin
//!
//! The plugin half of the design-tool integration. A session inspects the
//! current selection, ships a compact tag tree to the UI in chunks, and then
//! handles the UI's requests to persist queries and API credentials.
//!
//! ## Architecture
//!
//! ```text
//! Scene selection
//!     ↓
//! figtag_tagtree::process_selection
//!     ↓
//! PluginSession ──sendSelectedNode──→ UI
//!     ↑                                 │
//!     └──save-gql-query / save-openai-key / error-char-completion
//! ```
//!
//! Host effects go through [`PluginHost`], plugin-wide key-value data
//! through [`ClientStorage`], and the UI is reached over [`ui_channel`].

pub mod channel;
pub mod config;
pub mod errors;
pub mod host;
pub mod logging;
pub mod messages;
pub mod saved_query;
pub mod session;
pub mod storage;

pub use channel::{ui_channel, PluginPort, UiPort};
pub use config::{PluginConfig, WindowSize, DEFAULT_CONFIG_NAME};
pub use errors::PluginError;
pub use host::{Notification, PluginHost, RecordingHost};
pub use logging::init_tracing;
pub use messages::{
    CompletionError, CompletionErrorBody, PluginToUiMessage, SelectedNodePayload,
    UiToPluginMessage, CONTEXT_LENGTH_EXCEEDED,
};
pub use saved_query::{load_saved_gql_query, save_gql_query, SavedGqlQuery};
pub use session::{PluginSession, RunOutcome};
pub use storage::{
    ApiCredential, ClientStorage, MemoryClientStorage, StorageError, GQL_FRAGMENT_KEY,
    GQL_QUERY_KEY, OPENAI_API_KEY,
};
