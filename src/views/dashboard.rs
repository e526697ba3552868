use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::model::{Product, ProductCategory, Role, Store, UserProfile};

const RECENT_PRODUCTS: usize = 5;
const MY_STORES_SHOWN: usize = 4;

#[derive(Clone, Debug, Serialize)]
pub struct RecentProduct {
    pub product: Product,
    pub store_name: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_stores: usize,

    /// Admins only; `None` when not an admin or when the listing failed.
    pub total_users: Option<usize>,

    pub recent_products: Vec<RecentProduct>,

    /// Up to four stores managed by the user (sellers and admins only).
    pub my_stores: Vec<Store>,

    /// Every category in display order, with its product count.
    pub categories: Vec<(ProductCategory, usize)>,
}

impl DashboardSummary {
    pub fn build(
        user: &UserProfile,
        products: &[Product],
        stores: &[Store],
        total_users: Option<usize>,
    ) -> Self {
        let recent_products = products
            .iter()
            .take(RECENT_PRODUCTS)
            .map(|p| RecentProduct {
                product: p.clone(),
                store_name: stores
                    .iter()
                    .find(|s| s.id == p.store_id)
                    .map(|s| s.name.clone()),
            })
            .collect();

        let my_stores = if matches!(user.role, Role::Seller | Role::Admin) {
            stores
                .iter()
                .filter(|s| s.manager_id == user.id)
                .take(MY_STORES_SHOWN)
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        let categories = ProductCategory::ALL
            .into_iter()
            .map(|c| (c, products.iter().filter(|p| p.category == c).count()))
            .collect();

        Self {
            total_products: products.len(),
            total_stores: stores.len(),
            total_users: if user.role == Role::Admin {
                total_users
            } else {
                None
            },
            recent_products,
            my_stores,
            categories,
        }
    }
}

/// Fetches products and stores concurrently (plus users for admins) and
/// summarizes them for `user`.
pub fn load_dashboard(
    client: &ApiClient,
    user: &UserProfile,
) -> Result<DashboardSummary, ApiError> {
    let (products, stores) = std::thread::scope(|s| {
        let products = s.spawn(|| client.products().get_all());
        let stores = client.stores().get_all();
        let products = products
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (products, stores)
    });
    let (products, stores) = (products?, stores?);

    let total_users = if user.role == Role::Admin {
        match client.users().get_all() {
            Ok(users) => Some(users.len()),
            Err(err) => {
                tracing::warn!(error = %err, "user total unavailable");
                None
            }
        }
    } else {
        None
    };

    Ok(DashboardSummary::build(user, &products, &stores, total_users))
}

#[cfg(test)]
#[path = "../tests/views/dashboard_tests.rs"]
mod tests;
