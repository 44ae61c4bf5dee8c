mod config;
mod form;
mod generate;

pub use config::{cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show};
pub use form::cmd_form;
pub use generate::{GenerateArgs, cmd_generate, generate_ticket};

use crate::error::Result;

/// Output of a non-interactive command, in both JSON and text form
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as pretty JSON when `json` is set, text otherwise
    ///
    /// Falls back to JSON when no text form was given.
    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}
