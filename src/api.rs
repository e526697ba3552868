//! Authenticated client for the marketplace REST backend.

use std::sync::Arc;
use std::time::Duration;

use crate::model::ConsoleConfig;
use crate::navigation::{NoopObserver, SessionObserver};
use crate::session::Session;

mod auth;
mod error;
mod http_client;
mod products;
mod stores;
mod users;

pub use self::auth::AuthApi;
pub use self::error::{ApiError, CONNECTIVITY_MESSAGE, GENERIC_ERROR_MESSAGE};
pub use self::http_client::{ApiBody, RequestOptions};
pub use self::products::ProductsApi;
pub use self::stores::StoresApi;
pub use self::users::UsersApi;

pub struct ApiClient {
    base_url: String,
    session: Session,
    observer: Arc<dyn SessionObserver>,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(config: &ConsoleConfig, session: Session) -> Result<Self, ApiError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent("market-console");
        builder = if config.timeout_secs > 0 {
            builder.timeout(Duration::from_secs(config.timeout_secs))
        } else {
            builder.timeout(None)
        };
        let client = builder.build().map_err(ApiError::Transport)?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            observer: Arc::new(NoopObserver),
            client,
        })
    }

    /// Routes session lifecycle events (401 teardown, logout) to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn stores(&self) -> StoresApi<'_> {
        StoresApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }
}
