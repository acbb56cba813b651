mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;
use tweetbox_types::{Tweet, TweetBody};

/// Backend operations the compose form depends on.
///
/// `ApiClient` is the HTTP implementation; tests swap in in-memory fakes.
#[async_trait]
pub trait TweetApi: Send + Sync {
    /// Persist call. The response body is returned as-is and never validated.
    async fn add_tweet(&self, body: &TweetBody) -> ApiResult<serde_json::Value>;

    /// Refresh call. Returns the full, ordered feed.
    async fn fetch_tweets(&self) -> ApiResult<Vec<Tweet>>;
}
