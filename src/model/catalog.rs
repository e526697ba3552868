use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Electronics,
    Grocery,
    Clothing,
    Toys,
    Books,
    Furniture,
    Beauty,
    Sports,
    Automotive,
    Health,
    PersonalCare,
    Household,
    Accessories,
    Others,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 14] = [
        ProductCategory::Electronics,
        ProductCategory::Grocery,
        ProductCategory::Clothing,
        ProductCategory::Toys,
        ProductCategory::Books,
        ProductCategory::Furniture,
        ProductCategory::Beauty,
        ProductCategory::Sports,
        ProductCategory::Automotive,
        ProductCategory::Health,
        ProductCategory::PersonalCare,
        ProductCategory::Household,
        ProductCategory::Accessories,
        ProductCategory::Others,
    ];

    /// Wire name, as used in paths like `/api/products/category/{cat}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "ELECTRONICS",
            ProductCategory::Grocery => "GROCERY",
            ProductCategory::Clothing => "CLOTHING",
            ProductCategory::Toys => "TOYS",
            ProductCategory::Books => "BOOKS",
            ProductCategory::Furniture => "FURNITURE",
            ProductCategory::Beauty => "BEAUTY",
            ProductCategory::Sports => "SPORTS",
            ProductCategory::Automotive => "AUTOMOTIVE",
            ProductCategory::Health => "HEALTH",
            ProductCategory::PersonalCare => "PERSONAL_CARE",
            ProductCategory::Household => "HOUSEHOLD",
            ProductCategory::Accessories => "ACCESSORIES",
            ProductCategory::Others => "OTHERS",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown product category `{}`", s.trim()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: EntityId,
    pub name: String,

    #[serde(default)]
    pub location: Option<String>,

    pub manager_id: EntityId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInput {
    pub name: String,
    pub location: String,
    pub manager_id: EntityId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub category: ProductCategory,
    pub store_id: EntityId,

    #[serde(default)]
    pub description: Option<String>,

    pub price: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub category: ProductCategory,
    pub store_id: EntityId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: f64,
}
