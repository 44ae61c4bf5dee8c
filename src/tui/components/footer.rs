//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "Tab", "C-s")
    pub key: String,
    /// Description of the action (e.g., "Next", "Generate")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.accent,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts while a text field is focused
pub fn field_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_focus_cycle()
        .with_submit()
        .with_quit()
        .build()
}

/// Shortcuts while the avatar picker is focused
pub fn avatar_shortcuts(has_image: bool) -> Vec<Shortcut> {
    let builder = if has_image {
        ShortcutsBuilder::new()
            .add("c", "Change Image")
            .add("x", "Remove Image")
    } else {
        ShortcutsBuilder::new().add("Enter", "Browse")
    };
    builder
        .add("/", "Drop Path")
        .with_focus_cycle()
        .with_submit()
        .with_quit()
        .build()
}

/// Shortcuts while a dropped path is being received
pub fn drag_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Drop")
        .add("Esc", "Cancel Drop")
        .with_quit()
        .build()
}

/// Shortcuts while the submit button is focused
pub fn submit_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Generate My Ticket")
        .with_focus_cycle()
        .with_quit()
        .build()
}

// =============================================================================
// Modal and ticket shortcuts
// =============================================================================

/// Shortcuts for the file browser modal
pub fn file_browser_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("j/k", "Up/Down")
        .add("Enter", "Open/Choose")
        .add("h", "Parent")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts on the generated ticket
pub fn ticket_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new().add("q", "Quit").build()
}
