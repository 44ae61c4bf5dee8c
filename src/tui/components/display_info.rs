//! Validation message / hint line shown under an input

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Icon shown in front of both errors and hints
pub const INFO_ICON: &str = "ⓘ";

/// What an info line shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoLine {
    Error(String),
    Hint(String),
}

impl InfoLine {
    pub fn text(&self) -> &str {
        match self {
            InfoLine::Error(text) | InfoLine::Hint(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, InfoLine::Error(_))
    }
}

/// The error when there is one, otherwise the hint, otherwise nothing
pub fn info_line(error: &str, hint: Option<&str>) -> Option<InfoLine> {
    if !error.is_empty() {
        return Some(InfoLine::Error(error.to_string()));
    }
    hint.filter(|h| !h.is_empty())
        .map(|h| InfoLine::Hint(h.to_string()))
}

#[derive(Default, Props)]
pub struct DisplayInfoProps {
    pub line: Option<InfoLine>,
}

#[component]
pub fn DisplayInfo(props: &DisplayInfoProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(flex_direction: FlexDirection::Row, min_height: 1) {
            #(props.line.as_ref().map(|line| {
                let color = if line.is_error() { theme.error } else { theme.text_dimmed };
                element! {
                    View(flex_direction: FlexDirection::Row, gap: 1) {
                        Text(content: INFO_ICON, color: color)
                        Text(content: line.text().to_string(), color: color)
                    }
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_takes_precedence() {
        let line = info_line("Please enter a valid name!", Some("hint"));
        assert_eq!(line, Some(InfoLine::Error("Please enter a valid name!".into())));
    }

    #[test]
    fn test_hint_without_error() {
        let line = info_line("", Some("Upload your photo (JPG or PNG, max size: 5MB)."));
        assert!(matches!(line, Some(InfoLine::Hint(_))));
        assert!(!line.unwrap().is_error());
    }

    #[test]
    fn test_nothing_to_show() {
        assert_eq!(info_line("", None), None);
        assert_eq!(info_line("", Some("")), None);
    }
}
