use crate::model::{EntityId, UserProfile, UserUpdate};

use super::{ApiClient, ApiError};

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn get_all(&self) -> Result<Vec<UserProfile>, ApiError> {
        tracing::debug!("list users");
        self.client.get("/api/users")?.into_json("users")
    }

    pub fn get_by_id(&self, id: EntityId) -> Result<UserProfile, ApiError> {
        self.client.get(&format!("/api/users/{}", id))?.into_json("user")
    }

    pub fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/api/users/profile")?.into_json("profile")
    }

    pub fn update(&self, id: EntityId, update: &UserUpdate) -> Result<UserProfile, ApiError> {
        self.client
            .put(&format!("/api/users/{}", id), update)?
            .into_json("user")
    }

    pub fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/users/{}", id))?;
        Ok(())
    }
}
