use std::sync::Arc;

use ratatui::widgets::ListState;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tweetbox_types::{Tweet, TweetBody};

use crate::api::TweetApi;
use crate::toast::Toast;

/// Messages from background requests back to the event loop
#[derive(Debug)]
pub enum AppEvent {
    /// Refresh call result; replaces the whole list
    FeedReplaced(Vec<Tweet>),
    /// Refresh call failed; the list is left as it was
    RefreshFailed(String),
    Notify(Toast),
    /// Persist call failed; carries the payload so the draft can be restored
    PersistFailed { payload: TweetBody, error: String },
    SubmissionFinished(SubmitOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Posted,
    PostedRefreshFailed,
    PersistFailed,
}

/// Receiver of feed updates. The list lives with the caller; background
/// work only ever talks to it through this interface.
pub trait FeedSink: Send + Sync + 'static {
    fn emit(&self, event: AppEvent);
}

impl FeedSink for mpsc::UnboundedSender<AppEvent> {
    fn emit(&self, event: AppEvent) {
        // Receiver gone means the app quit; in-flight work just finishes
        let _ = self.send(event);
    }
}

/// Caller-owned feed list
#[derive(Debug, Default)]
pub struct FeedState {
    pub tweets: Vec<Tweet>,
    pub list_state: ListState,
    pub loading: bool,
    pub last_refreshed: Option<chrono::DateTime<chrono::Utc>>,
}

impl FeedState {
    /// Replace the list wholesale. Concurrent refreshes: last write wins.
    pub fn replace(&mut self, tweets: Vec<Tweet>) {
        let selected = self.list_state.selected();
        self.tweets = tweets;
        self.loading = false;
        self.last_refreshed = Some(chrono::Utc::now());

        let visible = self.visible().count();
        let selected = match selected {
            _ if visible == 0 => None,
            Some(i) => Some(i.min(visible - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Tweets shown in the feed (blocked tweets are hidden)
    pub fn visible(&self) -> impl Iterator<Item = &Tweet> {
        self.tweets.iter().filter(|t| !t.block_tweet)
    }

    pub fn select_next(&mut self) {
        let count = self.visible().count();
        if count == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1).min(count - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.visible().next().is_none() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }
}

/// Persist the post, then refetch the whole feed and notify.
///
/// No retries. A persist failure skips the refresh and hands the payload back.
pub async fn run_submission(api: &dyn TweetApi, payload: TweetBody, sink: &dyn FeedSink) -> SubmitOutcome {
    log::info!(target: "api_calls", "persisting tweet ({} chars)", payload.text.chars().count());

    let outcome = match api.add_tweet(&payload).await {
        Ok(response) => {
            log::debug!(target: "api_calls", "addTweet response: {}", response);

            match api.fetch_tweets().await {
                Ok(tweets) => {
                    sink.emit(AppEvent::FeedReplaced(tweets));
                    sink.emit(AppEvent::Notify(Toast::posted()));
                    SubmitOutcome::Posted
                }
                Err(e) => {
                    log::warn!(target: "api_calls", "refresh after post failed: {}", e);
                    sink.emit(AppEvent::RefreshFailed(e.to_string()));
                    sink.emit(AppEvent::Notify(Toast::posted()));
                    sink.emit(AppEvent::Notify(Toast::warning(format!(
                        "Could not refresh feed: {}",
                        e.summary()
                    ))));
                    SubmitOutcome::PostedRefreshFailed
                }
            }
        }
        Err(e) => {
            log::error!(target: "api_calls", "addTweet failed: {}", e);
            sink.emit(AppEvent::Notify(Toast::error(format!("Tweet failed: {}", e.summary()))));
            sink.emit(AppEvent::PersistFailed {
                payload,
                error: e.to_string(),
            });
            SubmitOutcome::PersistFailed
        }
    };

    sink.emit(AppEvent::SubmissionFinished(outcome));
    outcome
}

/// Refetch the feed on its own (startup and manual refresh)
pub async fn run_refresh(api: &dyn TweetApi, sink: &dyn FeedSink) {
    match api.fetch_tweets().await {
        Ok(tweets) => {
            log::info!(target: "api_calls", "fetched {} tweets", tweets.len());
            sink.emit(AppEvent::FeedReplaced(tweets));
        }
        Err(e) => {
            log::warn!(target: "api_calls", "fetching tweets failed: {}", e);
            sink.emit(AppEvent::RefreshFailed(e.to_string()));
            sink.emit(AppEvent::Notify(Toast::warning(format!(
                "Could not load feed: {}",
                e.summary()
            ))));
        }
    }
}

/// Run a submission in the background. Submissions are independent:
/// nothing deduplicates or serializes them.
pub fn spawn_submission(
    api: Arc<dyn TweetApi>,
    payload: TweetBody,
    sink: Arc<dyn FeedSink>,
) -> JoinHandle<SubmitOutcome> {
    tokio::spawn(async move { run_submission(api.as_ref(), payload, sink.as_ref()).await })
}

pub fn spawn_refresh(api: Arc<dyn TweetApi>, sink: Arc<dyn FeedSink>) -> JoinHandle<()> {
    tokio::spawn(async move { run_refresh(api.as_ref(), sink.as_ref()).await })
}
