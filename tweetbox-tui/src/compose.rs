use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{Input, TextArea};
use tweetbox_types::{identity, Session, TweetBody};

use crate::ui::theme::ThemeColors;

/// Soft limit shown by the character counter
pub const MAX_CHARS: usize = 280;

pub const TEXT_PLACEHOLDER: &str = "What's Happening?";
pub const IMAGE_URL_PLACEHOLDER: &str = "Enter Image Url...";

/// Which input receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Text,
    ImageUrl,
}

/// The "compose a post" form.
///
/// Holds the draft (text + attached image), the image-URL entry buffer and
/// the panel toggle. The panel and the attached image are independent: the
/// preview stays visible whether the panel is open or not.
pub struct ComposeForm {
    pub textarea: TextArea<'static>,
    pub image: String,
    pub image_url_input: String,
    pub image_panel_open: bool,
    pub focus: Focus,
}

impl ComposeForm {
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(),
            image: String::new(),
            image_url_input: String::new(),
            image_panel_open: false,
            focus: Focus::Text,
        }
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn set_text(&mut self, text: &str) {
        let mut textarea = new_textarea();
        textarea.insert_str(text);
        self.textarea = textarea;
    }

    pub fn char_count(&self) -> usize {
        self.textarea.lines().iter().map(|l| l.chars().count()).sum()
    }

    pub fn is_over_limit(&self) -> bool {
        self.char_count() > MAX_CHARS
    }

    /// Draft text and attached image are both empty
    pub fn is_draft_empty(&self) -> bool {
        self.char_count() == 0 && self.image.is_empty()
    }

    /// Flip the image-URL panel. Nothing else changes.
    pub fn toggle_image_panel(&mut self) {
        self.image_panel_open = !self.image_panel_open;
    }

    /// Confirm the URL entry as the attached image.
    ///
    /// Returns `false` (and leaves everything untouched) when the entry is empty.
    pub fn add_image(&mut self) -> bool {
        if self.image_url_input.is_empty() {
            return false;
        }

        self.image = std::mem::take(&mut self.image_url_input);
        self.image_panel_open = false;
        self.focus = Focus::Text;
        true
    }

    pub fn remove_image(&mut self) {
        self.image.clear();
    }

    pub fn push_url_char(&mut self, c: char) {
        self.image_url_input.push(c);
    }

    pub fn pop_url_char(&mut self) {
        self.image_url_input.pop();
    }

    /// Submission needs a non-empty draft text and a session
    pub fn can_submit(&self, session: Option<&Session>) -> bool {
        self.char_count() > 0 && session.is_some()
    }

    /// Payload for the persist call, with fallback identity when signed out
    pub fn build_payload(&self, session: Option<&Session>) -> TweetBody {
        let (username, profile_img) = identity(session);
        TweetBody {
            text: self.text(),
            username: username.to_string(),
            profile_img: profile_img.to_string(),
            image: self.image.clone(),
        }
    }

    /// Start a submission: build the payload and reset the form.
    ///
    /// The reset happens here, before any network outcome is known.
    /// Returns `None` without touching state when submission is disabled.
    pub fn submit(&mut self, session: Option<&Session>) -> Option<TweetBody> {
        if !self.can_submit(session) {
            return None;
        }

        let payload = self.build_payload(session);
        self.reset();
        Some(payload)
    }

    /// Clear the draft, the URL entry, and close the panel
    pub fn reset(&mut self) {
        self.textarea = new_textarea();
        self.image.clear();
        self.image_url_input.clear();
        self.image_panel_open = false;
        self.focus = Focus::Text;
    }

    /// Put a failed submission back, unless the user already started a new draft
    pub fn restore_draft(&mut self, payload: &TweetBody) -> bool {
        if !self.is_draft_empty() {
            return false;
        }

        self.set_text(&payload.text);
        self.image = payload.image.clone();
        true
    }

    /// Insert pasted text into the focused input. Lines are joined with spaces.
    pub fn paste(&mut self, text: &str) {
        let line = text.lines().collect::<Vec<_>>().join(" ");
        match self.focus {
            Focus::Text => {
                self.textarea.insert_str(&line);
            }
            Focus::ImageUrl => self.image_url_input.push_str(line.trim()),
        }
    }

    /// Feed a key to the text input. Newlines are dropped: the input is a single line.
    pub fn handle_text_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter)
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('m'))
        {
            return;
        }

        let input = Input::from(crossterm::event::Event::Key(key));
        self.textarea.input(input);
    }
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self::new()
    }
}

fn new_textarea() -> TextArea<'static> {
    let theme = ThemeColors::default();
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(TEXT_PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(theme.text_dim));
    textarea.set_style(Style::default().fg(theme.text));
    textarea.set_cursor_style(Style::default().fg(theme.background).bg(theme.primary));
    textarea.set_cursor_line_style(Style::default());
    textarea
}
