//! Labelled single-line input
//!
//! Text lives in the screen model; this only draws it.

use iocraft::prelude::*;

use super::display_info::{DisplayInfo, InfoLine};
use crate::tui::theme::theme;

/// Cursor drawn after the value of the focused field
pub const CURSOR: &str = "█";

#[derive(Default, Props)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub has_focus: bool,
    /// Error or hint under the input
    pub info: Option<InfoLine>,
}

#[component]
pub fn TextField(props: &TextFieldProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_error = props.info.as_ref().is_some_and(InfoLine::is_error);
    let border_color = theme.input_border(props.has_focus, has_error);

    // Placeholder text sits after the cursor, typed text before it
    let cursor_before = props.has_focus && props.value.is_empty();
    let cursor_after = props.has_focus && !props.value.is_empty();

    let (content, color) = if props.value.is_empty() {
        (props.placeholder.clone(), theme.text_dimmed)
    } else {
        (props.value.clone(), theme.text)
    };

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Column) {
            Text(
                content: props.label.clone(),
                color: theme.label(props.has_focus),
                weight: Weight::Bold,
            )
            View(
                width: 100pct,
                height: 3,
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                #(cursor_before.then(|| element! {
                    Text(content: CURSOR, color: theme.accent)
                }))
                Text(content: content, color: color)
                #(cursor_after.then(|| element! {
                    Text(content: CURSOR, color: theme.accent)
                }))
            }
            DisplayInfo(line: props.info.clone())
        }
    }
}
