use crate::model::{EntityId, Store, StoreInput};

use super::{ApiClient, ApiError};

pub struct StoresApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StoresApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn get_all(&self) -> Result<Vec<Store>, ApiError> {
        self.client.get("/api/stores")?.into_json("stores")
    }

    pub fn get_by_id(&self, id: EntityId) -> Result<Store, ApiError> {
        self.client.get(&format!("/api/stores/{}", id))?.into_json("store")
    }

    pub fn get_by_manager(&self, manager_id: EntityId) -> Result<Vec<Store>, ApiError> {
        self.client
            .get(&format!("/api/stores/manager/{}", manager_id))?
            .into_json("stores")
    }

    pub fn create(&self, input: &StoreInput) -> Result<Store, ApiError> {
        self.client.post("/api/stores/create", input)?.into_json("store")
    }

    pub fn update(&self, id: EntityId, input: &StoreInput) -> Result<Store, ApiError> {
        self.client
            .put(&format!("/api/stores/{}", id), input)?
            .into_json("store")
    }

    pub fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/stores/{}", id))?;
        Ok(())
    }
}
