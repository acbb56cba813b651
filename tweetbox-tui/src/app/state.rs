use std::sync::Arc;

use tokio::sync::mpsc;
use tweetbox_types::Session;

use crate::api::TweetApi;
use crate::compose::ComposeForm;
use crate::feed::{AppEvent, FeedState};
use crate::logging::LogConfig;
use crate::toast::Toaster;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Navigation, // Browsing the feed, shortcuts active
    Typing,     // In the compose form, shortcuts disabled
}

/// Main application state
pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub session: Option<Session>,
    pub compose: ComposeForm,
    pub feed: FeedState,
    pub toaster: Toaster,
    pub api: Arc<dyn TweetApi>,
    pub server_url: String,
    /// Submissions started but not yet finished
    pub in_flight: usize,
    pub events_tx: mpsc::UnboundedSender<AppEvent>,
    pub events_rx: mpsc::UnboundedReceiver<AppEvent>,
    pub log_config: LogConfig,
}
