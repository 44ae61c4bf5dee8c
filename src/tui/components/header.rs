//! Page header component
//!
//! Event logo on top, then the heading and subheading of the form.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Logo line (e.g. "◆ Coding Conf")
    pub logo: String,

    /// Main heading
    pub heading: String,

    /// Line under the heading
    pub subheading: Option<String>,
}

/// Page header with the event logo and headline
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            align_items: AlignItems::Center,
            padding_top: 1,
            gap: 1,
        ) {
            Text(
                content: props.logo.clone(),
                color: theme.accent,
                weight: Weight::Bold,
            )
            Text(
                content: props.heading.clone(),
                color: theme.text,
                weight: Weight::Bold,
            )
            #(props.subheading.clone().map(|sub| element! {
                Text(content: sub, color: theme.accent_soft)
            }))
        }
    }
}
