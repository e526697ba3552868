use super::ApiBody;

pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to server. Please check your internet connection.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401. The session has been torn down before this is returned.
    #[error("Session expired. Please login again.")]
    Unauthorized,

    /// 403. No state was touched.
    #[error("You do not have permission to perform this action.")]
    Forbidden,

    /// Any other non-2xx answer, with the parsed body kept for field-level display.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        data: ApiBody,
    },

    /// The request never got a response (refused, reset, DNS, timeout).
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Connectivity { cause: reqwest::Error },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("response declared JSON but did not parse: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unexpected {context} response: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response: {0}")]
    UnexpectedBody(String),

    #[error("persist session state: {0:#}")]
    Storage(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&ApiBody> {
        match self {
            ApiError::Status { data, .. } => Some(data),
            _ => None,
        }
    }

    /// `validationErrors` from the error body, keyed by field name.
    pub fn validation_errors(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.data()?.validation_errors()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Connectivity { .. })
    }
}
