//! In-memory user collection.
//!
//! Backs the account routes with a process-local map guarded by a
//! `parking_lot::RwLock`. Handles are cheap to clone and share one map.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::object_id::ObjectId;

/// A stored account.
///
/// The password hash is internal state and is skipped on serialization, so
/// it can never appear in a response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
}

impl User {
    /// Build a regular (non-admin) account with a freshly generated id.
    ///
    /// Admin status is never taken from client input; it is granted out of
    /// band by editing the stored record.
    pub fn new(name: &str, email: &str, password_hash: String) -> Self {
        Self {
            id: ObjectId::generate(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            is_admin: false,
        }
    }
}

/// Partial update applied to a stored user. `None` fields are left as-is.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Another account already uses this email address.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("email already registered")]
pub struct EmailTaken;

/// Thread-safe in-memory user store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<BTreeMap<ObjectId, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user. Email uniqueness is enforced under a single
    /// write lock, so concurrent inserts cannot race past the check.
    pub fn insert(&self, user: User) -> Result<User, EmailTaken> {
        let mut map = self.inner.write();
        if map.values().any(|existing| existing.email == user.email) {
            return Err(EmailTaken);
        }
        map.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    pub fn get(&self, id: &ObjectId) -> Option<User> {
        self.inner.read().get(id).cloned()
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.inner
            .read()
            .values()
            .find(|user| user.email == email)
            .cloned()
    }

    /// Apply a partial update, returning the updated record. `None` when no
    /// user exists under `id`.
    pub fn update(&self, id: &ObjectId, changes: UserUpdate) -> Option<User> {
        let mut map = self.inner.write();
        let user = map.get_mut(id)?;
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        Some(user.clone())
    }

    /// Remove a user, returning the record that was stored.
    pub fn remove(&self, id: &ObjectId) -> Option<User> {
        self.inner.write().remove(id)
    }

    /// Snapshot of every stored user, ordered by id.
    pub fn list(&self) -> Vec<User> {
        self.inner.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
