//! Client-side session state: the bearer token and the cached user profile.
//!
//! Both slots live in one injectable [`SessionStorage`] backend. The CLI uses
//! the file-backed [`crate::store::LocalStore`]; tests use [`MemoryStorage`].

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::model::{Role, UserProfile};

mod token;
mod user;

pub use self::token::{SessionToken, TokenClaims, TokenDecodeError, TokenStore};
pub use self::user::UserStore;

pub const TOKEN_KEY: &str = "jwt_token";
pub const USER_KEY: &str = "user_data";

/// Synchronous key/value slots that survive between console invocations.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.slots().remove(key);
        Ok(())
    }
}

/// Token and profile stores sharing one storage backend.
#[derive(Clone)]
pub struct Session {
    tokens: TokenStore,
    users: UserStore,
}

impl Session {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            tokens: TokenStore::new(storage.clone()),
            users: UserStore::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_valid()
    }

    /// The cached profile, but only while the token is still valid.
    pub fn current_user(&self) -> Option<UserProfile> {
        if !self.is_authenticated() {
            return None;
        }
        self.users.get()
    }

    /// Authorization-grade role check: requires a valid token as well as a
    /// cached profile carrying `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.has_any_role(&[role])
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.current_user()
            .is_some_and(|user| roles.contains(&user.role))
    }

    /// Session teardown. Both slots are always attempted; the first failure is returned.
    pub fn clear(&self) -> Result<()> {
        let token = self.tokens.remove();
        let user = self.users.remove();
        token.and(user)
    }
}

#[cfg(test)]
#[path = "tests/session/session_tests.rs"]
mod tests;
