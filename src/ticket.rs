//! The generated ticket
//!
//! Built from committed form inputs. Rendering is plain text (optionally
//! colored) for the headless command and JSON via serde.

use std::fmt;

use owo_colors::OwoColorize;
use rand::Rng;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::form::FormInputs;
use crate::picker::FileBlob;

pub const GITHUB_BASE_URL: &str = "https://github.com/";

/// Ticket number, shown as `#` plus five digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct TicketNumber(u32);

impl TicketNumber {
    pub const MAX: u32 = 99_999;

    pub fn new(value: u32) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn random() -> Self {
        Self(rand::rng().random_range(1..=Self::MAX))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:05}", self.0)
    }
}

impl From<TicketNumber> for String {
    fn from(number: TicketNumber) -> Self {
        number.to_string()
    }
}

/// Where and when the conference happens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    pub name: String,
    pub date: String,
    pub location: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            name: "Coding Conf".to_string(),
            date: "Jan 31, 2025".to_string(),
            location: "Austin, TX".to_string(),
        }
    }
}

impl EventDetails {
    /// `Jan 31, 2025 / Austin, TX`
    pub fn when_and_where(&self) -> String {
        format!("{} / {}", self.date, self.location)
    }
}

/// What the ticket shows about the avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarSummary {
    pub file_name: String,
    pub mime: String,
    pub size: u64,
}

impl From<&FileBlob> for AvatarSummary {
    fn from(blob: &FileBlob) -> Self {
        Self {
            file_name: blob.name().to_string(),
            mime: blob.mime().to_string(),
            size: blob.size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTicket {
    pub number: TicketNumber,
    pub name: String,
    pub email: String,
    pub github: String,
    pub profile_url: Url,
    pub avatar: AvatarSummary,
    pub event: EventDetails,
}

/// Profile link for a GitHub handle
///
/// The handle is appended as a single percent-encoded path segment, so the
/// link stays on github.com whatever the handle contains.
pub fn profile_url(handle: &str) -> Result<Url> {
    let mut url = Url::parse(GITHUB_BASE_URL)?;
    url.path_segments_mut()
        .map_err(|()| AppError::Other(format!("{GITHUB_BASE_URL} cannot be a base")))?
        .pop_if_empty()
        .push(handle);
    Ok(url)
}

impl GeneratedTicket {
    /// Issue a ticket from committed inputs with a fresh number
    pub fn issue(inputs: &FormInputs, event: EventDetails) -> Result<Self> {
        Self::with_number(inputs, event, TicketNumber::random())
    }

    pub fn with_number(
        inputs: &FormInputs,
        event: EventDetails,
        number: TicketNumber,
    ) -> Result<Self> {
        let avatar = inputs
            .image
            .as_ref()
            .map(AvatarSummary::from)
            .ok_or_else(|| AppError::Other("committed form has no avatar".to_string()))?;

        Ok(Self {
            number,
            name: inputs.name.clone(),
            email: inputs.email.clone(),
            github: inputs.social.clone(),
            profile_url: profile_url(&inputs.social)?,
            avatar,
            event,
        })
    }

    pub fn headline(&self) -> String {
        format!("Congrats, {}! Your ticket is ready.", self.name)
    }

    pub fn email_notice(&self) -> String {
        format!(
            "We have emailed your ticket to {} and will send updates in the run up to the event.",
            self.email
        )
    }

    pub fn handle(&self) -> String {
        format!("@{}", self.github)
    }

    /// Plain multi-line rendering
    pub fn render_plain(&self) -> String {
        self.render(false)
    }

    /// Rendering with terminal colors
    pub fn render_colored(&self) -> String {
        self.render(true)
    }

    fn render(&self, color: bool) -> String {
        let paint = |text: String, style: fn(&String) -> String| {
            if color { style(&text) } else { text }
        };

        let avatar = format!(
            "{} ({}, {} bytes)",
            self.avatar.file_name, self.avatar.mime, self.avatar.size
        );

        [
            paint(self.headline(), |s| s.bold().to_string()),
            self.email_notice(),
            String::new(),
            paint(format!("◆ {}", self.event.name), |s| s.yellow().to_string()),
            format!("  {}", self.event.when_and_where()),
            String::new(),
            format!("  {}", paint(self.name.clone(), |s| s.bold().to_string())),
            format!(
                "  {} <{}>",
                paint(self.handle(), |s| s.cyan().to_string()),
                self.profile_url
            ),
            format!("  avatar: {avatar}"),
            format!("  {}", paint(self.number.to_string(), |s| s.dimmed().to_string())),
        ]
        .join("\n")
    }
}
