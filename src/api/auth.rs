use reqwest::Method;

use crate::model::{Credentials, Registration, UserProfile};
use crate::session::SessionToken;

use super::{ApiBody, ApiClient, ApiError};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a token, stores it, then fetches and caches
    /// the profile.
    ///
    /// The two steps are not atomic: if the profile fetch fails the token
    /// stays stored and no profile is cached.
    pub fn login(&self, credentials: &Credentials) -> Result<UserProfile, ApiError> {
        let body = self.client.post("/api/users/login", credentials)?;
        let raw = match body {
            ApiBody::Text(raw) => raw,
            ApiBody::Json(serde_json::Value::String(raw)) => raw,
            ApiBody::Json(serde_json::Value::Object(map)) => match map.get("token") {
                Some(serde_json::Value::String(raw)) => raw.clone(),
                _ => {
                    return Err(ApiError::UnexpectedBody(
                        "login response has no token".to_string(),
                    ));
                }
            },
            other => {
                return Err(ApiError::UnexpectedBody(format!(
                    "login returned a {} body instead of a token",
                    other.kind()
                )));
            }
        };
        let token = SessionToken::from_login_body(&raw).ok_or_else(|| {
            ApiError::UnexpectedBody("login returned an empty token".to_string())
        })?;
        self.client
            .session()
            .tokens()
            .set(&token)
            .map_err(ApiError::Storage)?;
        tracing::info!("login token received");

        let user: UserProfile = self.client.get("/api/users/profile")?.into_json("profile")?;
        self.client
            .session()
            .users()
            .set(&user)
            .map_err(ApiError::Storage)?;
        tracing::info!(user_id = user.id, role = %user.role, "user profile cached");
        Ok(user)
    }

    pub fn register(&self, registration: &Registration) -> Result<UserProfile, ApiError> {
        self.client
            .post("/api/users/register", registration)?
            .into_json("register")
    }

    /// Best-effort server logout, then unconditional local teardown.
    pub fn logout(&self) -> Result<(), ApiError> {
        match self
            .client
            .send_unclassified(Method::POST, "/api/auth/logout")
        {
            Ok(status) if status.is_success() => tracing::debug!("server session closed"),
            Ok(status) => tracing::warn!(status = status.as_u16(), "server logout rejected"),
            Err(err) => tracing::warn!(error = %err, "server logout failed"),
        }
        let cleared = self.client.session().clear();
        self.client.observer.logged_out();
        cleared.map_err(ApiError::Storage)
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }
}
