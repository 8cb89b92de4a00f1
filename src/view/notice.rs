use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Danger,
}

/// Transient, auto-dismissing message shown after a request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    pub shown_at: Instant,
}

impl Notice {
    pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Success,
            shown_at: Instant::now(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Danger,
            shown_at: Instant::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Danger
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= Self::DISMISS_AFTER
    }
}
