use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::GENERIC_ERROR_MESSAGE;
use super::{ApiClient, ApiError};

/// A classified, successfully received response body.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiBody {
    /// 204, or a successful response with nothing in it.
    Empty,
    Json(serde_json::Value),
    Text(String),
}

impl ApiBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiBody::Empty)
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ApiBody::Json(v) => Some(v),
            _ => None,
        }
    }

    /// The `message` field of a JSON error body.
    pub fn message(&self) -> Option<&str> {
        self.as_json()?.get("message")?.as_str()
    }

    pub fn validation_errors(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.as_json()?.get("validationErrors")?.as_object()
    }

    /// Decodes the body into `T`. A text body is given one chance to parse as
    /// JSON, for backends that omit the content type.
    pub fn into_json<T: DeserializeOwned>(self, context: &str) -> Result<T, ApiError> {
        let parsed = match self {
            ApiBody::Json(v) => serde_json::from_value(v),
            ApiBody::Text(s) => serde_json::from_str(&s),
            ApiBody::Empty => serde_json::from_value(serde_json::Value::Null),
        };
        parsed.map_err(|source| ApiError::Decode {
            context: context.to_string(),
            source,
        })
    }

    pub(super) fn kind(&self) -> &'static str {
        match self {
            ApiBody::Empty => "empty",
            ApiBody::Json(_) => "json",
            ApiBody::Text(_) => "text",
        }
    }
}

/// Per-call additions to the default request: extra headers and a JSON body.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides a default header. Supplying `Authorization` replaces the bearer token.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body).map_err(ApiError::Encode)?);
        Ok(self)
    }
}

impl ApiClient {
    pub(super) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.session.tokens().get() {
            match HeaderValue::from_str(&format!("Bearer {}", token.as_str())) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!("stored token is not a valid header value; sending without it")
                }
            }
        }
        headers
    }

    /// Sends one request and classifies the answer.
    ///
    /// 401 clears the session and notifies the observer before failing with
    /// [`ApiError::Unauthorized`]. 403 fails with [`ApiError::Forbidden`]. 204
    /// yields [`ApiBody::Empty`] without reading the body. Other non-2xx
    /// statuses fail with [`ApiError::Status`] carrying the parsed body.
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiBody, ApiError> {
        let url = self.url(endpoint);
        let mut headers = self.default_headers();
        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        tracing::debug!(%method, %url, "api request");

        let mut req = self.client.request(method, &url).headers(headers);
        if let Some(body) = options.body {
            req = req.body(body);
        }
        let resp = req.send().map_err(transport_error)?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_session();
            return Err(ApiError::Unauthorized);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden);
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(ApiBody::Empty);
        }

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let text = resp.text().map_err(transport_error)?;
        let body = if text.is_empty() {
            ApiBody::Empty
        } else if is_json {
            ApiBody::Json(serde_json::from_str(&text).map_err(ApiError::InvalidJson)?)
        } else {
            ApiBody::Text(text)
        };

        if !status.is_success() {
            let message = body.message().unwrap_or(GENERIC_ERROR_MESSAGE).to_string();
            tracing::debug!(status = status.as_u16(), %message, "api error response");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
                data: body,
            });
        }
        tracing::debug!(status = status.as_u16(), body = body.kind(), "api response");
        Ok(body)
    }

    pub fn get(&self, endpoint: &str) -> Result<ApiBody, ApiError> {
        self.request(Method::GET, endpoint, RequestOptions::new())
    }

    pub fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiBody, ApiError> {
        self.request(Method::POST, endpoint, RequestOptions::new().json(body)?)
    }

    pub fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiBody, ApiError> {
        self.request(Method::PUT, endpoint, RequestOptions::new().json(body)?)
    }

    pub fn delete(&self, endpoint: &str) -> Result<ApiBody, ApiError> {
        self.request(Method::DELETE, endpoint, RequestOptions::new())
    }

    /// Fires a request without status classification; only the status is reported.
    pub(super) fn send_unclassified(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<StatusCode, ApiError> {
        let resp = self
            .client
            .request(method, self.url(endpoint))
            .headers(self.default_headers())
            .send()
            .map_err(transport_error)?;
        Ok(resp.status())
    }

    fn invalidate_session(&self) {
        tracing::warn!("backend rejected the session token; clearing session");
        if let Err(err) = self.session.clear() {
            tracing::warn!(error = %format!("{:#}", err), "clear session after 401");
        }
        self.observer.session_invalidated();
    }
}

// Covers failures while sending and while reading the body: a connection
// dropped mid-body surfaces as a body or decode error.
fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_connect()
        || err.is_timeout()
        || err.is_request()
        || err.is_body()
        || err.is_decode()
    {
        tracing::debug!(error = %err, "transport failure");
        ApiError::Connectivity { cause: err }
    } else {
        ApiError::Transport(err)
    }
}

#[cfg(test)]
#[path = "../tests/api/http_client_tests.rs"]
mod tests;
