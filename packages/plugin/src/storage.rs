//! Client storage - plugin-wide key-value data kept by the host

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

pub use figtag_tagtree::GQL_FRAGMENT_KEY;

/// Per-node plugin-data key for the saved query
pub const GQL_QUERY_KEY: &str = "gqlQuery";

/// Client-storage key for the `url|key` API credential
pub const OPENAI_API_KEY: &str = "openAiApiKey";

const CREDENTIAL_SEPARATOR: char = '|';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Read failed for {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Write failed for {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Host key-value storage scoped to the plugin installation
#[async_trait]
pub trait ClientStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// In-memory storage, optionally refusing writes
#[derive(Debug, Default)]
pub struct MemoryClientStorage {
    values: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryClientStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose every `set` fails, as a full or revoked store would
    pub fn failing_writes() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            fail_writes: true,
        }
    }

    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.into(), value.into());
        }
        self
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }
}

#[async_trait]
impl ClientStorage for MemoryClientStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "storage is read-only".to_string(),
            });
        }

        let mut values = self.values.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Completion API endpoint and key, stored as a single `url|key` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredential {
    pub url: String,
    pub key: String,
}

impl ApiCredential {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
        }
    }

    /// Split at the first separator; a value without one is all url
    pub fn parse(stored: &str) -> Self {
        match stored.split_once(CREDENTIAL_SEPARATOR) {
            Some((url, key)) => Self::new(url, key),
            None => Self::new(stored, ""),
        }
    }

    pub fn to_storage_string(&self) -> String {
        format!("{}{}{}", self.url, CREDENTIAL_SEPARATOR, self.key)
    }
}
