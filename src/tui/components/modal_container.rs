//! Modal container component
//!
//! A centered box with a title bar, content area and footer, drawn over the
//! rest of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Backdrop behind the modal box
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Modal width configuration
#[derive(Clone)]
pub enum ModalWidth {
    Fixed(u32),
    Percent(u32),
}

impl Default for ModalWidth {
    fn default() -> Self {
        Self::Fixed(60)
    }
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: Option<ModalWidth>,
    /// Fixed row count; content-determined when unset
    pub height: Option<u32>,

    pub title: Option<String>,
    pub footer_text: Option<String>,

    pub children: Vec<AnyElement<'a>>,
}

/// Centered modal box
///
/// ```ignore
/// element! {
///     ModalContainer(
///         title: "Choose an image".to_string(),
///         footer_text: "Enter to choose, Esc to cancel".to_string(),
///     ) {
///         Text(content: "...")
///     }
/// }
/// ```
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let width = match props.width.clone().unwrap_or_default() {
        ModalWidth::Fixed(n) => Size::Length(n),
        ModalWidth::Percent(n) => Size::Percent(n as f32),
    };
    let height = props.height.map(Size::Length).unwrap_or(Size::Auto);
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            View(
                width: width,
                height: height,
                background_color: MODAL_BACKDROP,
                border_style: BorderStyle::Double,
                border_color: theme.border_focused,
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                #(title.map(|title| element! {
                    View(
                        width: 100pct,
                        padding_bottom: 1,
                        border_edges: Edges::Bottom,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: title, color: theme.accent, weight: Weight::Bold)
                    }
                }))

                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::Hidden,
                ) {
                    #(std::mem::take(&mut props.children))
                }

                #(footer.map(|footer| element! {
                    View(
                        width: 100pct,
                        padding_top: 1,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: footer, color: theme.text_dimmed)
                    }
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_width_default() {
        assert!(matches!(ModalWidth::default(), ModalWidth::Fixed(60)));
    }

    #[test]
    fn test_modal_container_props_default() {
        let props = ModalContainerProps::default();
        assert!(props.title.is_none());
        assert!(props.footer_text.is_none());
        assert!(props.height.is_none());
    }
}
