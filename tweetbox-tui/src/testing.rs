//! In-memory fakes shared by unit tests
use std::sync::Mutex;

use async_trait::async_trait;
use tweetbox_types::{Tweet, TweetBody};

use crate::api::{ApiError, ApiResult, TweetApi};
use crate::feed::{AppEvent, FeedSink};

#[derive(Default)]
pub struct FakeApi {
    feed: Mutex<Vec<Tweet>>,
    posted: Mutex<Vec<TweetBody>>,
    fetches: Mutex<usize>,
    fail_persist: bool,
    fail_fetch: bool,
}

impl FakeApi {
    pub fn with_feed(feed: Vec<Tweet>) -> Self {
        Self {
            feed: Mutex::new(feed),
            ..Default::default()
        }
    }

    pub fn failing_persist() -> Self {
        Self {
            fail_persist: true,
            ..Default::default()
        }
    }

    pub fn failing_fetch() -> Self {
        Self {
            fail_fetch: true,
            ..Default::default()
        }
    }

    pub fn posted(&self) -> Vec<TweetBody> {
        self.posted.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl TweetApi for FakeApi {
    async fn add_tweet(&self, body: &TweetBody) -> ApiResult<serde_json::Value> {
        if self.fail_persist {
            return Err(ApiError::Api("persist unavailable".to_string()));
        }
        self.posted.lock().unwrap().push(body.clone());
        Ok(serde_json::json!({ "message": "Done!" }))
    }

    async fn fetch_tweets(&self) -> ApiResult<Vec<Tweet>> {
        *self.fetches.lock().unwrap() += 1;
        if self.fail_fetch {
            return Err(ApiError::Api("feed unavailable".to_string()));
        }
        Ok(self.feed.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AppEvent>>,
}

impl RecordingSink {
    pub fn take(&self) -> Vec<AppEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl FeedSink for RecordingSink {
    fn emit(&self, event: AppEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn tweet(id: &str, text: &str) -> Tweet {
    Tweet {
        id: id.to_string(),
        created_at: chrono::Utc::now(),
        text: text.to_string(),
        username: "alice".to_string(),
        profile_img: "http://x/a.png".to_string(),
        image: None,
        block_tweet: false,
    }
}

pub fn body(text: &str) -> TweetBody {
    TweetBody {
        text: text.to_string(),
        username: "alice".to_string(),
        profile_img: "http://x/a.png".to_string(),
        image: String::new(),
    }
}
