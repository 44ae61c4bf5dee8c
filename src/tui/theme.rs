//! Theme system for TUI colors and styles
//!
//! Colors line up with the CLI output of `generate` (yellow event marker,
//! cyan handle, red errors).

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Brand colors
    pub accent: Color,
    pub accent_soft: Color,

    // Validation colors
    pub error: Color,
    pub success: Color,
    pub dragging: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub handle: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb {
                r: 245,
                g: 116,
                b: 99,
            },
            accent_soft: Color::Rgb {
                r: 209,
                g: 208,
                b: 213,
            },

            error: Color::Red,
            success: Color::Green,
            dragging: Color::Blue,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Rgb {
                r: 245,
                g: 116,
                b: 99,
            },
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            handle: Color::Cyan,
        }
    }
}

impl Theme {
    /// Border color for an input, by focus and error state
    pub fn input_border(&self, focused: bool, has_error: bool) -> Color {
        if has_error {
            self.error
        } else if focused {
            self.border_focused
        } else {
            self.border
        }
    }

    /// Label color for an input
    pub fn label(&self, focused: bool) -> Color {
        if focused { self.accent } else { self.text }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wins_over_focus() {
        let theme = theme();
        assert_eq!(theme.input_border(true, true), Color::Red);
        assert_eq!(theme.input_border(true, false), theme.border_focused);
        assert_eq!(theme.input_border(false, false), theme.border);
    }
}
