//! Generated ticket view
//!
//! Congratulation headline, the email notice and the ticket card itself.

use iocraft::prelude::*;

use super::image_picker::ThumbnailView;
use crate::tui::model::TicketViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct GeneratedTicketViewProps {
    pub ticket: Option<TicketViewModel>,
}

#[component]
pub fn GeneratedTicketView(props: &GeneratedTicketViewProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.clone() else {
        return element! { View() };
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            gap: 1,
        ) {
            View(flex_direction: FlexDirection::Row) {
                Text(content: "Congrats, ", color: theme.text, weight: Weight::Bold)
                Text(content: ticket.headline_name.clone(), color: theme.accent, weight: Weight::Bold)
                Text(content: "! Your ticket is ready.", color: theme.text, weight: Weight::Bold)
            }
            View(flex_direction: FlexDirection::Row) {
                Text(content: "We have emailed your ticket to ", color: theme.accent_soft)
                Text(content: ticket.email.clone(), color: theme.accent)
                Text(content: " and will send updates in the run up to the event.", color: theme.accent_soft)
            }

            View(
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                padding: 1,
                flex_direction: FlexDirection::Row,
                gap: 3,
            ) {
                View(flex_direction: FlexDirection::Column, gap: 1) {
                    View(flex_direction: FlexDirection::Column) {
                        Text(
                            content: format!("◆ {}", ticket.event_name),
                            color: theme.accent,
                            weight: Weight::Bold,
                        )
                        Text(content: ticket.when_and_where.clone(), color: theme.text_dimmed)
                    }
                    View(flex_direction: FlexDirection::Row, gap: 2) {
                        ThumbnailView(thumbnail: ticket.thumbnail.clone())
                        View(flex_direction: FlexDirection::Column, justify_content: JustifyContent::Center) {
                            Text(content: ticket.name.clone(), color: theme.text, weight: Weight::Bold)
                            Text(content: ticket.handle.clone(), color: theme.handle)
                            Text(content: ticket.profile_url.clone(), color: theme.text_dimmed)
                        }
                    }
                }
                View(
                    border_edges: Edges::Left,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    padding_left: 2,
                    justify_content: JustifyContent::Center,
                ) {
                    Text(content: ticket.number.clone(), color: theme.text_dimmed, weight: Weight::Bold)
                }
            }
        }
    }
}
