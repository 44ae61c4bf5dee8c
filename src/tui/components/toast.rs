//! Toast notifications
//!
//! Announced picker errors and file failures show up here and clear
//! themselves after a few seconds.

use iocraft::prelude::*;
use std::time::Instant;

use crate::announce::{ANNOUNCEMENT_TTL, Announcement};
use crate::tui::theme::theme;

/// A toast notification message
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The severity level of the toast
    pub level: ToastLevel,
    /// When the toast was created
    pub timestamp: Instant,
}

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
    Success,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            timestamp: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    /// Show an announcement, keeping its creation time
    pub fn from_announcement(announcement: Announcement) -> Self {
        Self {
            message: announcement.message,
            level: ToastLevel::Error,
            timestamp: announcement.created,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp) >= ANNOUNCEMENT_TTL
    }

    /// Get the color associated with this toast's level
    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Error => theme().error,
            ToastLevel::Success => theme().success,
        }
    }
}

/// Props for the ToastNotification component
#[derive(Default, Props)]
pub struct ToastNotificationProps {
    /// The toast to display
    pub toast: Option<Toast>,
}

/// Toast bar rendered above the footer
#[component]
pub fn ToastNotification(props: &ToastNotificationProps) -> impl Into<AnyElement<'static>> {
    element! {
        View() {
            #(props.toast.as_ref().map(|t| {
                element! {
                    View(
                        width: 100pct,
                        height: 3,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        background_color: Color::Black,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: t.color(),
                    ) {
                        Text(content: t.message.clone(), color: t.color())
                    }
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_toast_expires_with_announcement_ttl() {
        let toast = Toast::error("File too large. Please upload a photo under 5MB!");
        assert!(!toast.is_expired(toast.timestamp + Duration::from_secs(2)));
        assert!(toast.is_expired(toast.timestamp + Duration::from_secs(3)));
    }

    #[test]
    fn test_from_announcement_keeps_time() {
        let announcement = Announcement::new("Please upload your avatar image!");
        let created = announcement.created;
        let toast = Toast::from_announcement(announcement);
        assert_eq!(toast.timestamp, created);
        assert_eq!(toast.level, ToastLevel::Error);
    }
}
