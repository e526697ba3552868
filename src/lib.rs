//! Admin console client for the marketplace backend: session state, the
//! authenticated API client and its facades, and console view helpers.

pub mod api;
pub mod model;
pub mod navigation;
pub mod session;
pub mod store;
pub mod views;

pub use api::{ApiBody, ApiClient, ApiError};
pub use navigation::{Navigator, SessionObserver, View};
pub use session::{Session, SessionStorage, SessionToken};
