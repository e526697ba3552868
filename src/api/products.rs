use crate::model::{EntityId, Product, ProductCategory, ProductInput};

use super::{ApiClient, ApiError};

pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn get_all(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get("/api/products")?.into_json("products")
    }

    pub fn get_by_id(&self, id: EntityId) -> Result<Product, ApiError> {
        self.client
            .get(&format!("/api/products/{}", id))?
            .into_json("product")
    }

    pub fn get_by_store(&self, store_id: EntityId) -> Result<Vec<Product>, ApiError> {
        self.client
            .get(&format!("/api/products/store/{}", store_id))?
            .into_json("products")
    }

    pub fn get_by_category(&self, category: ProductCategory) -> Result<Vec<Product>, ApiError> {
        self.client
            .get(&format!("/api/products/category/{}", category.as_str()))?
            .into_json("products")
    }

    pub fn search(&self, keyword: &str) -> Result<Vec<Product>, ApiError> {
        self.client
            .get(&format!(
                "/api/products/search?keyword={}",
                urlencoding::encode(keyword)
            ))?
            .into_json("products")
    }

    pub fn search_by_store(
        &self,
        store_id: EntityId,
        keyword: &str,
    ) -> Result<Vec<Product>, ApiError> {
        self.client
            .get(&format!(
                "/api/products/store/{}/search?keyword={}",
                store_id,
                urlencoding::encode(keyword)
            ))?
            .into_json("products")
    }

    pub fn create(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.client.post("/api/products", input)?.into_json("product")
    }

    pub fn update(&self, id: EntityId, input: &ProductInput) -> Result<Product, ApiError> {
        self.client
            .put(&format!("/api/products/{}", id), input)?
            .into_json("product")
    }

    pub fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/products/{}", id))?;
        Ok(())
    }
}
