use clap::{Parser, ValueEnum};

use crate::cli::render::{JsonRenderer, Renderer, TableRenderer};
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "sectioned-rolodex",
    version,
    about = "Contact book grouped into CEO and Peasant sections"
)]
pub struct Cli {
    /// How contact lists are drawn (table, json)
    #[arg(long, env = "ROLODEX_FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Start with no contacts instead of the demo contacts
    #[arg(long, env = "ROLODEX_EMPTY")]
    pub empty: bool,

    /// Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, env = "ROLODEX_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,
}

/// Supported renderers
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Table => Box::new(TableRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Entries of the interactive menu
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    AddContact,
    ListContacts,
    DeleteContact,
    ToggleFavorite,
    Exit,
}

impl MenuCommand {
    pub const MENU: &'static str = "1. Add Contact\n\
        2. List Contacts\n\
        3. Delete Contact\n\
        4. Toggle Favorite\n\
        5. Exit";

    pub fn parse(action: &str) -> Result<Self, AppError> {
        match action.trim() {
            "1" => Ok(MenuCommand::AddContact),
            "2" => Ok(MenuCommand::ListContacts),
            "3" => Ok(MenuCommand::DeleteContact),
            "4" => Ok(MenuCommand::ToggleFavorite),
            "5" => Ok(MenuCommand::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

/// Per-row intents offered for every listed contact
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    ToggleFavorite,
}

impl RowAction {
    pub fn verb(&self) -> &'static str {
        match self {
            RowAction::Delete => "DELETE",
            RowAction::ToggleFavorite => "mark/unmark as FAVORITE",
        }
    }

    pub fn done_message(&self) -> &'static str {
        match self {
            RowAction::Delete => "Contact deleted successfully!",
            RowAction::ToggleFavorite => "Favorite updated successfully!",
        }
    }
}
