use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::Deserialize;
use time::OffsetDateTime;

use super::{SessionStorage, TOKEN_KEY};

/// A signed `header.payload.signature` bearer token issued at login.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,

    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub iat: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenDecodeError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not a claims object: {0}")]
    Claims(#[from] serde_json::Error),
    #[error("token expiry {0} is out of range")]
    ExpiryOutOfRange(i64),
}

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Canonicalizes a token returned by the login endpoint. The backend may
    /// answer with the token wrapped in one pair of quotes (`"a.b.c"`).
    pub fn from_login_body(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw.strip_prefix(['"', '\'']).unwrap_or(raw);
        let raw = raw.strip_suffix(['"', '\'']).unwrap_or(raw);
        if raw.is_empty() {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn claims(&self) -> Result<TokenClaims, TokenDecodeError> {
        let payload = self
            .0
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or(TokenDecodeError::MissingPayload)?;
        let payload = payload.trim_end_matches('=');
        let bytes = match URL_SAFE_NO_PAD.decode(payload) {
            Ok(bytes) => bytes,
            Err(_) => STANDARD_NO_PAD.decode(payload)?,
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn expires_at(&self) -> Result<OffsetDateTime, TokenDecodeError> {
        let exp = self.claims()?.exp;
        OffsetDateTime::from_unix_timestamp(exp)
            .map_err(|_| TokenDecodeError::ExpiryOutOfRange(exp))
    }

    /// `true` when the token decodes and expires strictly after `now`.
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        match self.expires_at() {
            Ok(expiry) => expiry > now,
            Err(err) => {
                tracing::debug!(error = %err, "session token does not decode");
                false
            }
        }
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"<redacted>").finish()
    }
}

#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn SessionStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> Option<SessionToken> {
        let raw = match self.storage.get_item(TOKEN_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "read session token");
                return None;
            }
        };
        let token = raw.filter(|t| !t.trim().is_empty()).map(SessionToken);
        tracing::debug!(present = token.is_some(), "token store get");
        token
    }

    pub fn set(&self, token: &SessionToken) -> Result<()> {
        self.storage.set_item(TOKEN_KEY, token.as_str())?;
        tracing::debug!("token store set");
        Ok(())
    }

    pub fn remove(&self) -> Result<()> {
        self.storage.remove_item(TOKEN_KEY)?;
        tracing::debug!("token store remove");
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(OffsetDateTime::now_utc())
    }

    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        self.get().is_some_and(|token| token.is_valid_at(now))
    }

    /// Decoded expiry of the stored token; `None` when absent or undecodable.
    pub fn expiry(&self) -> Option<OffsetDateTime> {
        self.get()?.expires_at().ok()
    }
}

#[cfg(test)]
#[path = "../tests/session/token_tests.rs"]
mod tests;
