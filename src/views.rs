//! Console-side helpers over already-fetched collections: filtering,
//! permissions, the dashboard summary and display formatting.

mod dashboard;
mod filters;
mod format;

pub use self::dashboard::{DashboardSummary, RecentProduct, load_dashboard};
pub use self::filters::{ProductFilter, StoreFilter, UserFilter, can_edit_product};
pub use self::format::{format_category, format_currency};
