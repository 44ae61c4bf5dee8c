//! File chooser modal

use iocraft::prelude::*;

use super::modal_container::{ModalContainer, ModalWidth};
use crate::picker::EntryKind;
use crate::tui::theme::theme;

/// Rows of entries shown at once
pub const VISIBLE_ENTRIES: usize = 15;

#[derive(Default, Props)]
pub struct FileBrowserModalProps {
    pub dir: String,
    pub entries: Vec<(String, EntryKind)>,
    pub selected_index: usize,
}

/// First entry to show so that `selected` stays in view
pub fn scroll_offset(selected: usize, len: usize, visible: usize) -> usize {
    if len <= visible {
        return 0;
    }
    selected
        .saturating_sub(visible.saturating_sub(1))
        .min(len - visible)
}

#[component]
pub fn FileBrowserModal(props: &FileBrowserModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let offset = scroll_offset(props.selected_index, props.entries.len(), VISIBLE_ENTRIES);
    let selected = props.selected_index;

    element! {
        ModalContainer(
            width: ModalWidth::Percent(60),
            height: (VISIBLE_ENTRIES + 8) as u32,
            title: "Choose an image".to_string(),
            footer_text: "Enter open/choose  h parent  Esc cancel".to_string(),
        ) {
            Text(content: props.dir.clone(), color: theme.text_dimmed)
            #(props.entries.iter().enumerate().skip(offset).take(VISIBLE_ENTRIES).map(|(i, (name, kind))| {
                let is_selected = i == selected;
                let label = match kind {
                    EntryKind::Dir | EntryKind::Parent => format!("{name}/"),
                    EntryKind::File => name.clone(),
                };
                element! {
                    View(
                        width: 100pct,
                        background_color: if is_selected { Some(theme.highlight) } else { None },
                    ) {
                        Text(
                            content: format!("{} {label}", if is_selected { ">" } else { " " }),
                            color: if *kind == EntryKind::File { theme.text } else { theme.accent },
                            weight: if is_selected { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }
            }))
            #(props.entries.is_empty().then(|| element! {
                Text(content: "(empty directory)", color: theme.text_dimmed)
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(3, 10, 15), 0);
        assert_eq!(scroll_offset(0, 40, 15), 0);
        assert_eq!(scroll_offset(14, 40, 15), 0);
        assert_eq!(scroll_offset(15, 40, 15), 1);
        assert_eq!(scroll_offset(39, 40, 15), 25);
    }
}
