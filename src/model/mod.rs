mod catalog;
mod config;
mod ids;
mod user;

pub use self::catalog::{Product, ProductCategory, ProductInput, Store, StoreInput};
pub use self::config::{ConsoleConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, SessionState};
pub use self::ids::EntityId;
pub use self::user::{Credentials, Registration, Role, UserProfile, UserUpdate};
