pub mod announce;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod picker;
pub mod ticket;
pub mod tui;

pub use config::Config;
pub use error::{AppError, Result};
pub use form::{Field, FormInputs, SubmitOutcome, TicketForm};
pub use picker::{FileBlob, ImagePicker, PickerError, PickerOptions, PreviewStore};
pub use ticket::{EventDetails, GeneratedTicket, TicketNumber};
