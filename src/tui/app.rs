//! Ticket form screen (`conf-ticket form`)
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! |            ◆ Coding Conf                  |
//! |   Your Journey to ... Start Here!        |
//! +------------------------------------------+
//! | Upload Avatar  [drop zone / thumbnail]   |
//! | Full Name      [.....................]   |
//! | Email Address  [.....................]   |
//! | GitHub Username[.....................]   |
//! | [ Generate My Ticket ]                   |
//! +------------------------------------------+
//! | Toast                                     |
//! | Footer                                    |
//! +------------------------------------------+
//! ```
//! Once the ticket is issued the form area shows the ticket instead.

use std::time::{Duration, Instant};

use iocraft::prelude::*;

use crate::config::Config;
use crate::tui::components::{
    FileBrowserModal, Footer, GeneratedTicketView, Header, ImagePickerView, TextField,
    ToastNotification,
};
use crate::tui::model::{
    BodyViewModel, FormViewModel, TicketScreen, compute_view_model, key_to_action,
};
use crate::tui::theme::theme;

/// How often the toast timer checks for expiry
const TOAST_TICK: Duration = Duration::from_millis(250);

/// Widest the form gets on large terminals
const FORM_MAX_WIDTH: u16 = 72;

#[derive(Default, Props)]
pub struct TicketAppProps {
    /// Configuration; defaults are used when unset
    pub config: Option<Config>,
}

#[component]
pub fn TicketApp(props: &TicketAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut screen: State<TicketScreen> = hooks.use_state({
        let config = props.config.clone().unwrap_or_default();
        move || TicketScreen::new(config)
    });

    // Announcements clear themselves
    hooks.use_future(async move {
        loop {
            tokio::time::sleep(TOAST_TICK).await;
            let now = Instant::now();
            if screen.read().toast_expired(now) {
                screen.write().expire_toast(now);
            }
        }
    });

    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => {
            let context = screen.read().key_context();
            if let Some(action) = key_to_action(code, modifiers, context) {
                tracing::trace!("key {code:?} -> {action:?}");
                screen.write().apply(action);
            }
        }
        _ => {}
    });

    if screen.read().should_exit() {
        system.exit();
    }

    let vm = compute_view_model(&screen.read());
    let theme = theme();
    let form_width = width.min(FORM_MAX_WIDTH).saturating_sub(4);

    let body = match vm.body {
        BodyViewModel::Form(form) => render_form(form, form_width),
        BodyViewModel::Ticket(ticket) => element! {
            View(width: 100pct, flex_direction: FlexDirection::Column, align_items: AlignItems::Center) {
                GeneratedTicketView(ticket: Some(ticket))
            }
        }
        .into_any(),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                logo: vm.logo,
                heading: vm.heading,
                subheading: Some(vm.subheading),
            )

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding_top: 1,
                overflow: Overflow::Hidden,
            ) {
                #(Some(body))
            }

            ToastNotification(toast: vm.toast)
            Footer(shortcuts: vm.shortcuts)

            #(vm.browser.map(|browser| element! {
                FileBrowserModal(
                    dir: browser.dir,
                    entries: browser.entries,
                    selected_index: browser.selected_index,
                )
            }))
        }
    }
}

fn render_form(form: FormViewModel, width: u16) -> AnyElement<'static> {
    let theme = theme();
    let avatar = form.avatar;
    let button_color = if form.submit_focused {
        theme.accent
    } else {
        theme.border
    };

    element! {
        View(width: width, flex_direction: FlexDirection::Column, gap: 1) {
            ImagePickerView(
                has_focus: avatar.focused,
                is_dragging: avatar.dragging,
                drag_path: avatar.drag_path,
                file_name: avatar.file_name,
                thumbnail: avatar.thumbnail,
                info: avatar.info,
            )

            #(form.fields.into_iter().map(|field| element! {
                TextField(
                    label: field.label.to_string(),
                    value: field.value,
                    placeholder: field.placeholder.to_string(),
                    has_focus: field.focused,
                    info: field.info,
                )
            }))

            View(
                width: 100pct,
                height: 3,
                border_style: BorderStyle::Round,
                border_color: button_color,
                background_color: if form.submit_focused { Some(theme.accent) } else { None },
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(
                    content: "Generate My Ticket",
                    color: if form.submit_focused { Color::Black } else { theme.text },
                    weight: Weight::Bold,
                )
            }
        }
    }
    .into_any()
}
