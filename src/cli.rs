use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::{
    GenerateArgs, cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show, cmd_form,
    cmd_generate,
};
use crate::error::Result;

#[derive(Parser)]
#[command(name = "conf-ticket")]
#[command(about = "Generate a conference ticket from your name, email, GitHub handle and avatar")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the ticket form interactively (default)
    Form,

    /// Generate a ticket without the interactive form
    #[command(visible_alias = "g")]
    Generate {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// GitHub username, without the leading @
        #[arg(long)]
        github: String,

        /// Avatar image file
        #[arg(long)]
        avatar: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one configuration value
    Get {
        /// Key, e.g. picker.max_file_size
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value
    Set {
        /// Key, e.g. event.location
        key: String,

        /// New value
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the config file location
    Path,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.command.unwrap_or(Commands::Form).run()
    }
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Form => cmd_form(),

            Commands::Generate {
                name,
                email,
                github,
                avatar,
                json,
            } => cmd_generate(GenerateArgs {
                name,
                email,
                github,
                avatar,
                json,
            }),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Path => cmd_config_path(),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "conf-ticket", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_form() {
        let cli = Cli::try_parse_from(["conf-ticket"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_requires_every_field() {
        let result = Cli::try_parse_from([
            "conf-ticket",
            "generate",
            "--name",
            "Ada Lovelace",
            "--email",
            "ada@example.com",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "conf-ticket",
            "g",
            "--name",
            "Ada Lovelace",
            "--email",
            "ada@example.com",
            "--github",
            "ada-l",
            "--avatar",
            "me.png",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate { github, json, .. }) => {
                assert_eq!(github, "ada-l");
                assert!(json);
            }
            _ => panic!("expected generate"),
        }
    }
}
