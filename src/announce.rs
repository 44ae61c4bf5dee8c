//! One-shot assistive announcements
//!
//! Validation errors are announced once when they appear and disappear on
//! their own after a fixed delay.

use std::time::{Duration, Instant};

/// How long an announcement stays visible
pub const ANNOUNCEMENT_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub message: String,
    pub created: Instant,
}

impl Announcement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= ANNOUNCEMENT_TTL
    }
}
