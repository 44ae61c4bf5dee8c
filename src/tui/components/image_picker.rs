//! Avatar drop zone component
//!
//! Shows the upload prompt, the drag highlight, or the selected image as a
//! thumbnail, with the picker's error or hint underneath.

use iocraft::prelude::*;

use super::display_info::{DisplayInfo, InfoLine};
use crate::picker::Thumbnail;
use crate::tui::theme::theme;

/// Upload icon shown in an empty drop zone
pub const UPLOAD_ICON: &str = "⇪";

#[derive(Default, Props)]
pub struct ThumbnailViewProps {
    pub thumbnail: Option<Thumbnail>,
}

/// Draws a thumbnail with two terminal cells per pixel
#[component]
pub fn ThumbnailView(props: &ThumbnailViewProps) -> impl Into<AnyElement<'static>> {
    let rows: Vec<Vec<Color>> = props
        .thumbnail
        .as_ref()
        .map(|thumb| {
            thumb
                .rows()
                .map(|row| row.iter().map(|&[r, g, b]| Color::Rgb { r, g, b }).collect())
                .collect()
        })
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Column) {
            #(rows.into_iter().map(|row| element! {
                View(flex_direction: FlexDirection::Row, height: 1) {
                    #(row.into_iter().map(|color| element! {
                        View(width: 2, height: 1, background_color: color)
                    }))
                }
            }))
        }
    }
}

#[derive(Default, Props)]
pub struct ImagePickerViewProps {
    pub has_focus: bool,
    pub is_dragging: bool,
    /// Path typed so far while a drop is in progress
    pub drag_path: Option<String>,
    pub file_name: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    pub info: Option<InfoLine>,
}

#[component]
pub fn ImagePickerView(props: &ImagePickerViewProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_error = props.info.as_ref().is_some_and(InfoLine::is_error);
    let border_color = if props.is_dragging {
        theme.dragging
    } else {
        theme.input_border(props.has_focus, has_error)
    };
    let border_style = if props.is_dragging {
        BorderStyle::Double
    } else {
        BorderStyle::Round
    };

    let body = match (&props.drag_path, &props.file_name) {
        (Some(path), _) => element! {
            View(flex_direction: FlexDirection::Column, align_items: AlignItems::Center) {
                Text(content: "Drop your image here", color: theme.dragging, weight: Weight::Bold)
                Text(content: path.clone(), color: theme.text)
            }
        },
        (None, Some(name)) => element! {
            View(flex_direction: FlexDirection::Column, align_items: AlignItems::Center, gap: 1) {
                ThumbnailView(thumbnail: props.thumbnail.clone())
                Text(content: name.clone(), color: theme.text)
                Text(content: "[c] Change Image   [x] Remove Image", color: theme.text_dimmed)
            }
        },
        (None, None) => element! {
            View(flex_direction: FlexDirection::Column, align_items: AlignItems::Center) {
                Text(content: UPLOAD_ICON, color: theme.accent, weight: Weight::Bold)
                Text(content: "Drag and drop or click to upload", color: theme.text_dimmed)
            }
        },
    };

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Column) {
            Text(
                content: "Upload Avatar",
                color: theme.label(props.has_focus),
                weight: Weight::Bold,
            )
            View(
                width: 100pct,
                min_height: 5,
                border_style: border_style,
                border_color: border_color,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: 1,
            ) {
                #(Some(body))
            }
            DisplayInfo(line: props.info.clone())
        }
    }
}
