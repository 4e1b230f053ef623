//! In-memory user registry for the demo login/signup flow.
//!
//! Records live for the process lifetime: no deletion, no in-place updates.
//! Lookups are linear scans, which is fine at demo scale.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// A stored username/password pair.
///
/// Passwords are stored and compared verbatim; this is a demo flow, not an
/// authentication system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Identity key, matched exactly and case-sensitively.
    pub username: String,
    /// Opaque plaintext credential.
    pub password: String,
}

/// Shared registry of user records.
///
/// Cloning is cheap; all clones share the same backing list.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Arc<Mutex<Vec<UserRecord>>>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `record` unless a record with the same username already exists.
    ///
    /// The existing record (including its password) wins silently; the caller
    /// gets no signal that the add was ignored. The scan and the append run
    /// under one lock, so two concurrent signups for the same new username
    /// cannot both slip in.
    pub async fn add(&self, record: UserRecord) {
        let mut users = self.users.lock().await;
        if users.iter().all(|u| u.username != record.username) {
            users.push(record);
        }
    }

    /// Find the first record matching both username and password exactly.
    pub async fn lookup(&self, username: &str, password: &str) -> Option<UserRecord> {
        let users = self.users.lock().await;
        users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    /// Whether the registry holds no records.
    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, password: &str) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn lookup_on_empty_registry_is_none() {
        let registry = UserRegistry::new();
        assert!(registry.is_empty().await);
        assert_eq!(registry.lookup("a", "p").await, None);
    }

    #[tokio::test]
    async fn add_then_lookup_round_trip() {
        let registry = UserRegistry::new();
        registry.add(record("a", "p")).await;

        assert_eq!(registry.lookup("a", "p").await, Some(record("a", "p")));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn wrong_password_is_not_found() {
        let registry = UserRegistry::new();
        registry.add(record("a", "p")).await;

        assert_eq!(registry.lookup("a", "wrong").await, None);
    }

    #[tokio::test]
    async fn usernames_are_case_sensitive() {
        let registry = UserRegistry::new();
        registry.add(record("Ann", "p")).await;

        assert_eq!(registry.lookup("ann", "p").await, None);
        assert!(registry.lookup("Ann", "p").await.is_some());
    }

    #[tokio::test]
    async fn duplicate_username_keeps_the_original_record() {
        let registry = UserRegistry::new();
        registry.add(record("a", "p")).await;
        registry.add(record("a", "other")).await;

        assert_eq!(registry.len().await, 1);
        assert_eq!(registry.lookup("a", "other").await, None);
        assert_eq!(registry.lookup("a", "p").await, Some(record("a", "p")));
    }

    #[tokio::test]
    async fn duplicate_passwords_across_users_are_allowed() {
        let registry = UserRegistry::new();
        registry.add(record("a", "p")).await;
        registry.add(record("b", "p")).await;

        assert_eq!(registry.len().await, 2);
        assert!(registry.lookup("b", "p").await.is_some());
    }
}
