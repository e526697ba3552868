use std::sync::Arc;

use anyhow::{Context, Result};

use crate::model::{Role, UserProfile};

use super::{SessionStorage, USER_KEY};

/// Cached profile of the logged-in user. May be stale until the next profile fetch.
#[derive(Clone)]
pub struct UserStore {
    storage: Arc<dyn SessionStorage>,
}

impl UserStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> Option<UserProfile> {
        let raw = match self.storage.get_item(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "read cached user profile");
                return None;
            }
        };
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::error!(error = %err, "failed to parse cached user profile");
                None
            }
        }
    }

    pub fn set(&self, user: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(user).context("serialize user profile")?;
        self.storage.set_item(USER_KEY, &raw)?;
        tracing::debug!(user_id = user.id, role = %user.role, "user store set");
        Ok(())
    }

    pub fn remove(&self) -> Result<()> {
        self.storage.remove_item(USER_KEY)?;
        tracing::debug!("user store remove");
        Ok(())
    }

    /// Checks the cached profile only. Use [`super::Session::has_role`] for
    /// authorization decisions.
    pub fn has_role(&self, role: Role) -> bool {
        self.get().is_some_and(|user| user.role == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_seller(&self) -> bool {
        self.has_role(Role::Seller)
    }

    pub fn is_customer(&self) -> bool {
        self.has_role(Role::Customer)
    }
}
