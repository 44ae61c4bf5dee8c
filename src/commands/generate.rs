//! Headless ticket generation (`conf-ticket generate`)
//!
//! Drives the same picker and form as the TUI: every field is filled and
//! blurred, the avatar goes through the chooser path, then the form is
//! submitted.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::form::{Field, ImageSlot, SubmitOutcome, TicketForm};
use crate::picker::{FileBlob, ImagePicker, PreviewStore};
use crate::ticket::GeneratedTicket;

pub struct GenerateArgs {
    pub name: String,
    pub email: String,
    pub github: String,
    pub avatar: PathBuf,
    pub json: bool,
}

/// Run the form without a terminal and issue a ticket
///
/// Fails with every message the form would show when a field does not match
/// its pattern, when the picker rejects the avatar, or when submit is
/// blocked.
pub fn generate_ticket(args: &GenerateArgs, config: &Config) -> Result<GeneratedTicket> {
    let previews = PreviewStore::new();
    let image = ImageSlot::new();
    let mut picker = ImagePicker::new(config.picker_options(), previews, image.on_select());
    let mut form = TicketForm::new(picker.handle(), image);

    let github = args.github.strip_prefix('@').unwrap_or(&args.github);
    form.set_value(Field::Name, args.name.trim());
    form.set_value(Field::Email, args.email.trim());
    form.set_value(Field::Social, github.trim());
    for field in Field::ALL {
        form.blur(field);
    }

    picker.choose(vec![FileBlob::open(&args.avatar)?]);

    let messages = visible_errors(&form, &picker);
    if !messages.is_empty() {
        return Err(AppError::Validation(messages));
    }

    match form.submit() {
        SubmitOutcome::Committed => {
            let inputs = form.committed().ok_or_else(|| {
                AppError::Other("form reported a commit without inputs".to_string())
            })?;
            GeneratedTicket::issue(inputs, config.event.clone())
        }
        SubmitOutcome::Blocked { missing } => {
            tracing::debug!("headless submit blocked: {missing:?}");
            Err(AppError::Validation(visible_errors(&form, &picker)))
        }
    }
}

fn visible_errors(form: &TicketForm, picker: &ImagePicker) -> Vec<String> {
    let mut messages = Vec::new();
    let avatar = picker.error_message();
    if !avatar.is_empty() {
        messages.push(avatar);
    }
    for field in Field::ALL {
        let error = form.error(field);
        if !error.is_empty() {
            messages.push(error.to_string());
        }
    }
    messages
}

/// Generate a ticket and print it
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = Config::load()?;
    let ticket = generate_ticket(&args, &config)?;
    tracing::info!("issued ticket {} for {}", ticket.number, ticket.email);

    let text = if io::stdout().is_terminal() {
        ticket.render_colored()
    } else {
        ticket.render_plain()
    };

    CommandOutput::new(serde_json::to_value(&ticket)?)
        .with_text(text)
        .print(args.json)
}
