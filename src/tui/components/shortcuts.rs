//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add Tab/S-Tab for moving between form controls
    pub fn with_focus_cycle(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("Tab", "Next"));
        self.shortcuts.push(Shortcut::new("S-Tab", "Prev"));
        self
    }

    /// Add Ctrl+s for generating the ticket
    pub fn with_submit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("C-s", "Generate"));
        self
    }

    /// Add Ctrl+q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("C-q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
