use crate::model::{EntityId, Product, ProductCategory, Role, Store, UserProfile};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn normalized(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

#[derive(Clone, Debug, Default)]
pub struct UserFilter {
    /// Case-insensitive match against name or email.
    pub search: Option<String>,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn apply<'a>(&self, users: &'a [UserProfile]) -> Vec<&'a UserProfile> {
        let search = normalized(&self.search);
        users
            .iter()
            .filter(|u| {
                search
                    .as_deref()
                    .is_none_or(|s| contains_ci(&u.name, s) || contains_ci(&u.email, s))
            })
            .filter(|u| self.role.is_none_or(|role| u.role == role))
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct StoreFilter {
    /// Case-insensitive match against name or location.
    pub search: Option<String>,
    /// Keep only stores managed by this user.
    pub manager_id: Option<EntityId>,
}

impl StoreFilter {
    pub fn apply<'a>(&self, stores: &'a [Store]) -> Vec<&'a Store> {
        let search = normalized(&self.search);
        stores
            .iter()
            .filter(|st| {
                search.as_deref().is_none_or(|s| {
                    contains_ci(&st.name, s)
                        || st.location.as_deref().is_some_and(|l| contains_ci(l, s))
                })
            })
            .filter(|st| self.manager_id.is_none_or(|id| st.manager_id == id))
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProductFilter {
    /// Case-insensitive match against name or description.
    pub search: Option<String>,
    pub category: Option<ProductCategory>,
    pub store_id: Option<EntityId>,
}

impl ProductFilter {
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let search = normalized(&self.search);
        products
            .iter()
            .filter(|p| {
                search.as_deref().is_none_or(|s| {
                    contains_ci(&p.name, s)
                        || p.description.as_deref().is_some_and(|d| contains_ci(d, s))
                })
            })
            .filter(|p| self.category.is_none_or(|c| p.category == c))
            .filter(|p| self.store_id.is_none_or(|id| p.store_id == id))
            .collect()
    }
}

/// Admins may edit any product; otherwise only the manager of the product's store.
pub fn can_edit_product(user: &UserProfile, product: &Product, stores: &[Store]) -> bool {
    if user.role == Role::Admin {
        return true;
    }
    stores
        .iter()
        .find(|s| s.id == product.store_id)
        .is_some_and(|s| s.manager_id == user.id)
}

#[cfg(test)]
#[path = "../tests/views/filters_tests.rs"]
mod tests;
