use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tweetbox_types::{Tweet, TweetBody, TweetList};

use super::{ApiError, ApiResult, TweetApi};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// API client for communicating with the feed backend
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default timeout
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new API client with a per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Helper to handle API responses
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> ApiResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    /// Map a non-2xx response to an error category
    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        // Clean up HTML error messages (e.g., from a dev server 404 page)
        let clean_error = if error_text.contains("<html>") || error_text.contains("<!DOCTYPE") {
            format!("Server returned {} error. Please check the server URL.", status.as_u16())
        } else if error_text.trim().is_empty() {
            format!("Server returned {}", status.as_u16())
        } else {
            error_text
        };

        match status.as_u16() {
            404 => ApiError::NotFound(clean_error),
            401 => ApiError::Unauthorized(clean_error),
            400 => ApiError::BadRequest(clean_error),
            _ => ApiError::Api(clean_error),
        }
    }
}

/// Read a success body without validating it: JSON when it parses,
/// the raw text otherwise, null when empty.
fn lenient_body(text: &str) -> serde_json::Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| serde_json::Value::String(trimmed.to_string()))
}

#[async_trait]
impl TweetApi for ApiClient {
    async fn add_tweet(&self, body: &TweetBody) -> ApiResult<serde_json::Value> {
        let url = format!("{}/api/addTweet", self.base_url);
        log::debug!(target: "api_calls", "POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        // Any 2xx means the post is stored, whatever the body says
        let text = response.text().await?;
        Ok(lenient_body(&text))
    }

    async fn fetch_tweets(&self) -> ApiResult<Vec<Tweet>> {
        let url = format!("{}/api/getTweets", self.base_url);
        log::debug!(target: "api_calls", "GET {}", url);
        let response = self.client.get(&url).send().await?;
        let list: TweetList = self.handle_response(response).await?;
        Ok(list.tweets)
    }
}
