//! Greeting template storage.
//!
//! Holds the configured default template and the current (mutable) template.
//! Readers always observe the most recent write; last write wins.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared greeting template store.
///
/// Cloning is cheap; all clones observe the same current template.
#[derive(Debug, Clone)]
pub struct GreetingStore {
    default: Arc<String>,
    current: Arc<RwLock<String>>,
}

impl GreetingStore {
    /// Create a store whose current template starts at the configured default.
    pub fn new(default: impl Into<String>) -> Self {
        let default = default.into();
        Self {
            current: Arc::new(RwLock::new(default.clone())),
            default: Arc::new(default),
        }
    }

    /// The current greeting template.
    pub async fn message(&self) -> String {
        self.current.read().await.clone()
    }

    /// The immutable default configured at startup.
    pub fn default_message(&self) -> &str {
        &self.default
    }

    /// Overwrite the current template unconditionally.
    ///
    /// An empty string is accepted; presence validation happens at the HTTP
    /// boundary before this is called.
    pub async fn set_message(&self, new_message: impl Into<String>) {
        *self.current.write().await = new_message.into();
    }

    /// Format the greeting for `name` using the current template.
    pub async fn greet(&self, name: &str) -> String {
        format!("{} {}!", self.message().await, name)
    }
}
