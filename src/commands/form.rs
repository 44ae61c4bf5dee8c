//! Interactive ticket form (`conf-ticket form`)

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::tui::TicketApp;

/// Launch the ticket form TUI
pub fn cmd_form() -> Result<()> {
    let config = Config::load()?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| AppError::Tui(format!("Failed to create runtime: {e}")))?;

    rt.block_on(async {
        element!(TicketApp(config: Some(config)))
            .fullscreen()
            .await
            .map_err(|e| AppError::Tui(e.to_string()))
    })
}
