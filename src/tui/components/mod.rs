//! Shared TUI components
//!
//! Leaf components for the ticket screen. They only draw what the screen
//! model computed; none of them own form state.

pub mod display_info;
pub mod file_browser;
pub mod footer;
pub mod generated_ticket;
pub mod header;
pub mod image_picker;
pub mod modal_container;
pub mod shortcuts;
pub mod text_field;
pub mod toast;

pub use display_info::{DisplayInfo, DisplayInfoProps, InfoLine, info_line};
pub use file_browser::{FileBrowserModal, FileBrowserModalProps};
pub use footer::{Footer, FooterProps, Shortcut};
pub use generated_ticket::{GeneratedTicketView, GeneratedTicketViewProps};
pub use header::{Header, HeaderProps};
pub use image_picker::{ImagePickerView, ImagePickerViewProps, ThumbnailView};
pub use modal_container::{ModalContainer, ModalContainerProps, ModalWidth};
pub use text_field::{TextField, TextFieldProps};
pub use toast::{Toast, ToastLevel, ToastNotification, ToastNotificationProps};
