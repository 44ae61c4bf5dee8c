//! TUI for the interactive ticket form
//!
//! - `model` - screen state, key mapping and view models (no terminal needed)
//! - `app` - the iocraft component that drives the model
//! - `components` - leaf components drawn from view models

pub mod app;
pub mod components;
pub mod model;
pub mod theme;

pub use app::{TicketApp, TicketAppProps};
pub use model::{FormAction, KeyContext, TicketScreen, compute_view_model, key_to_action};
pub use theme::Theme;
