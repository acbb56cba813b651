use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// Short, user-facing description for toasts
    pub fn summary(&self) -> String {
        match self {
            ApiError::Network(e) if e.is_timeout() => "request timed out".to_string(),
            ApiError::Network(e) if e.is_connect() => "server unreachable".to_string(),
            ApiError::Network(_) => "network error".to_string(),
            ApiError::Serialization(_) => "unexpected response".to_string(),
            ApiError::NotFound(_) => "endpoint not found".to_string(),
            ApiError::Unauthorized(_) => "not signed in".to_string(),
            ApiError::BadRequest(msg) | ApiError::Api(msg) => msg.clone(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
