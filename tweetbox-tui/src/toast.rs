use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Maximum number of toasts shown at once; older ones are dropped
pub const MAX_VISIBLE: usize = 3;

pub const POSTED_MESSAGE: &str = "Tweet Posted";
pub const POSTED_ICON: &str = "🚀";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub icon: Option<String>,
    pub level: ToastLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>, icon: Option<&str>) -> Self {
        Self::new(message, icon, ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Some("⚠"), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Some("✖"), ToastLevel::Error)
    }

    /// The notification raised after a successful post
    pub fn posted() -> Self {
        Self::success(POSTED_MESSAGE, Some(POSTED_ICON))
    }

    fn new(message: impl Into<String>, icon: Option<&str>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            icon: icon.map(String::from),
            level,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > TOAST_DURATION
    }

    /// Message with its icon prefix, e.g. "🚀 Tweet Posted"
    pub fn label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.message),
            None => self.message.clone(),
        }
    }
}

/// In-process replacement for a toast library: a short queue of
/// auto-dismissing notifications.
#[derive(Debug, Default)]
pub struct Toaster {
    toasts: VecDeque<Toast>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        log::debug!("toast: {}", toast.label());
        self.toasts.push_back(toast);
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts.len() != before
    }

    /// Oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posted_toast_label() {
        let toast = Toast::posted();
        assert_eq!(toast.label(), "🚀 Tweet Posted");
        assert_eq!(toast.level, ToastLevel::Success);
    }

    #[test]
    fn test_toasts_expire_after_duration() {
        let mut toaster = Toaster::new();
        toaster.push(Toast::posted());

        let created = toaster.visible().next().unwrap().created_at;
        assert!(!toaster.expire(created + Duration::from_secs(1)));
        assert_eq!(toaster.visible().count(), 1);

        assert!(toaster.expire(created + TOAST_DURATION + Duration::from_millis(1)));
        assert!(toaster.is_empty());
    }

    #[test]
    fn test_queue_is_capped() {
        let mut toaster = Toaster::new();
        for i in 0..5 {
            toaster.push(Toast::warning(format!("w{}", i)));
        }

        let messages: Vec<_> = toaster.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["w2", "w3", "w4"]);
    }
}
