use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tweetbox_types::Session;

use crate::api::TweetApi;
use crate::compose::{ComposeForm, Focus};
use crate::feed::{self, AppEvent, FeedSink, FeedState, SubmitOutcome};
use crate::logging::LogConfig;
use crate::toast::{Toast, Toaster};
use crate::{log_api_call, log_compose};

pub mod state;
pub use state::*;
pub mod handlers;

impl App {
    pub fn new(api: Arc<dyn TweetApi>, session: Option<Session>, server_url: impl Into<String>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            // Signed-in users land in the compose box, like the web form
            input_mode: if session.is_some() {
                InputMode::Typing
            } else {
                InputMode::Navigation
            },
            show_help: false,
            session,
            compose: ComposeForm::new(),
            feed: FeedState::default(),
            toaster: Toaster::new(),
            api,
            server_url: server_url.into(),
            in_flight: 0,
            events_tx,
            events_rx,
            log_config: LogConfig::default(),
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key_event(self, key)
    }

    /// Bracketed paste goes to the focused compose input, never to key handling
    pub fn handle_paste(&mut self, text: &str) {
        if self.show_help || self.input_mode != InputMode::Typing {
            return;
        }
        log_compose!(self.log_config, "pasted {} chars into {:?}", text.chars().count(), self.compose.focus);
        self.compose.paste(text);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn can_submit(&self) -> bool {
        self.compose.can_submit(self.session.as_ref())
    }

    fn sink(&self) -> Arc<dyn FeedSink> {
        Arc::new(self.events_tx.clone())
    }

    /// Start a submission if the form allows it. The form is reset right away;
    /// the network work continues in the background.
    pub fn submit(&mut self) -> bool {
        let Some(payload) = self.compose.submit(self.session.as_ref()) else {
            log_compose!(self.log_config, "submit ignored: text empty or no session");
            return false;
        };

        log_compose!(self.log_config, "submitting tweet as {}", payload.username);
        self.in_flight += 1;
        feed::spawn_submission(self.api.clone(), payload, self.sink());
        true
    }

    /// Refetch the feed in the background
    pub fn refresh_feed(&mut self) {
        log_api_call!(self.log_config, "refreshing feed from {}", self.server_url);
        self.feed.loading = true;
        feed::spawn_refresh(self.api.clone(), self.sink());
    }

    /// Open (and focus) or close the image URL panel
    pub fn toggle_image_panel(&mut self) {
        self.compose.toggle_image_panel();
        self.compose.focus = if self.compose.image_panel_open {
            Focus::ImageUrl
        } else {
            Focus::Text
        };
        log_compose!(self.log_config, "image panel open={}", self.compose.image_panel_open);
    }

    pub fn add_image(&mut self) {
        if self.compose.add_image() {
            log_compose!(self.log_config, "image attached: {}", self.compose.image);
        }
    }

    /// Apply one background event to the state
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FeedReplaced(tweets) => {
                log_api_call!(self.log_config, "feed replaced with {} tweets", tweets.len());
                self.feed.replace(tweets);
            }
            AppEvent::RefreshFailed(error) => {
                log_api_call!(self.log_config, "feed refresh failed: {}", error);
                self.feed.loading = false;
            }
            AppEvent::Notify(toast) => self.toaster.push(toast),
            AppEvent::PersistFailed { payload, error } => {
                log_api_call!(self.log_config, "post failed: {}", error);
                if self.compose.restore_draft(&payload) {
                    self.input_mode = InputMode::Typing;
                    self.toaster.push(Toast::warning("Draft restored"));
                }
            }
            AppEvent::SubmissionFinished(outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if outcome != SubmitOutcome::Posted {
                    log::warn!("submission finished with {:?}", outcome);
                }
            }
        }
    }

    /// Apply every pending background event without blocking
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Housekeeping between frames
    pub fn tick(&mut self) {
        self.drain_events();
        self.toaster.expire(Instant::now());
    }

    pub fn quit(&mut self) {
        if self.in_flight > 0 {
            log::info!("quitting with {} submission(s) still in flight", self.in_flight);
        }
        self.running = false;
    }
}

#[cfg(test)]
mod tests;
