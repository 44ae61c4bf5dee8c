//! Avatar image picker
//!
//! Holds at most one selected image together with its preview handle, runs
//! the type/size checks for browse and drop selections, and exposes a
//! `PickerHandle` that a parent form uses to flag a missing image.

pub mod accept;
pub mod blob;
pub mod browse;
pub mod preview;

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::announce::Announcement;

pub use accept::{AcceptSet, DEFAULT_ACCEPT};
pub use blob::FileBlob;
pub use browse::{BrowseOutcome, BrowserEntry, EntryKind, FileBrowser};
pub use preview::{PreviewStore, PreviewUrl, Thumbnail};

pub const MIB: u64 = 1024 * 1024;
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * MIB;

/// Format a byte count as MiB the way limits are shown to users (`5`, `2.5`)
pub fn format_mib(bytes: u64) -> String {
    let mib = bytes as f64 / MIB as f64;
    if mib.fract() == 0.0 {
        format!("{}", mib as u64)
    } else {
        format!("{mib}")
    }
}

fn limit_mib(limit: &u64) -> String {
    format_mib(*limit)
}

/// User-facing picker validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("File type not accepted. Please upload: {accepted}")]
    TypeNotAccepted { accepted: String, found: String },

    #[error("File too large. Please upload a photo under {}MB!", limit_mib(.limit))]
    TooLarge { limit: u64, size: u64 },

    #[error("Please upload your avatar image!")]
    Required,

    #[error("Could not read {file}: {reason}")]
    Unreadable { file: String, reason: String },
}

/// Picker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// Largest accepted file, in bytes
    pub max_file_size: u64,
    /// Accepted MIME types / wildcards
    pub accepted: AcceptSet,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            accepted: AcceptSet::default(),
        }
    }
}

impl PickerOptions {
    /// Hint shown under the picker while there is no error
    pub fn hint(&self) -> String {
        format!(
            "Upload your photo (JPG or PNG, max size: {}MB).",
            format_mib(self.max_file_size)
        )
    }
}

/// Callback invoked with the newly selected image, or `None` when cleared
pub type OnSelectImage = Arc<dyn Fn(Option<FileBlob>) + Send + Sync>;

/// Capability handed from the picker to its parent form
pub trait ImageValidation: Send + Sync {
    /// Focus the picker and flag the image as required
    fn validate(&self);
}

#[derive(Default)]
struct PickerState {
    selected: Option<FileBlob>,
    preview: Option<PreviewUrl>,
    error: Option<PickerError>,
    dragging: bool,
    focus_requested: bool,
    announcement: Option<Announcement>,
}

impl PickerState {
    fn set_error(&mut self, error: PickerError) {
        // Announce only on change, like a live region re-rendering the same text
        if self.error.as_ref() != Some(&error) {
            self.announcement = Some(Announcement::new(error.to_string()));
        }
        self.error = Some(error);
    }
}

/// Parent-side handle to a picker
#[derive(Clone)]
pub struct PickerHandle {
    state: Arc<Mutex<PickerState>>,
}

impl ImageValidation for PickerHandle {
    fn validate(&self) {
        let mut state = self.state.lock();
        state.focus_requested = true;
        state.set_error(PickerError::Required);
        tracing::debug!("avatar flagged as required");
    }
}

/// Single-image picker
pub struct ImagePicker {
    options: PickerOptions,
    previews: PreviewStore,
    state: Arc<Mutex<PickerState>>,
    on_select: OnSelectImage,
}

impl ImagePicker {
    pub fn new(options: PickerOptions, previews: PreviewStore, on_select: OnSelectImage) -> Self {
        Self {
            options,
            previews,
            state: Arc::new(Mutex::new(PickerState::default())),
            on_select,
        }
    }

    /// Validation capability for the parent form
    pub fn handle(&self) -> PickerHandle {
        PickerHandle {
            state: Arc::clone(&self.state),
        }
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Files returned by the chooser; an empty list means it was cancelled
    pub fn choose(&mut self, files: Vec<FileBlob>) {
        self.state.lock().error = None;
        if let Some(file) = files.into_iter().next() {
            self.process(file);
        }
    }

    pub fn drag_enter(&mut self) {
        self.state.lock().dragging = true;
    }

    pub fn drag_over(&mut self) {
        self.state.lock().dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.state.lock().dragging = false;
    }

    /// Only the first dropped file is considered
    pub fn drop_files(&mut self, files: Vec<FileBlob>) {
        self.state.lock().dragging = false;
        if let Some(file) = files.into_iter().next() {
            self.process(file);
        }
    }

    /// Clear the selection, its preview and any error
    pub fn remove(&mut self) {
        let previous = {
            let mut state = self.state.lock();
            state.error = None;
            state.selected = None;
            state.preview.take()
        };
        if let Some(preview) = previous {
            preview.revoke();
        }
        (self.on_select)(None);
    }

    fn process(&mut self, file: FileBlob) {
        if !self.options.accepted.accepts(file.mime()) {
            tracing::info!("rejected {}: type {} not accepted", file.name(), file.mime());
            self.reject(PickerError::TypeNotAccepted {
                accepted: self.options.accepted.to_string(),
                found: file.mime().to_string(),
            });
            return;
        }

        if file.size() > self.options.max_file_size {
            tracing::info!(
                "rejected {}: {} bytes exceeds {}",
                file.name(),
                file.size(),
                self.options.max_file_size
            );
            self.reject(PickerError::TooLarge {
                limit: self.options.max_file_size,
                size: file.size(),
            });
            return;
        }

        // The old preview goes before the new one is created
        let previous = self.state.lock().preview.take();
        if let Some(preview) = previous {
            preview.revoke();
        }

        match self.previews.create(&file) {
            Ok(preview) => {
                {
                    let mut state = self.state.lock();
                    state.preview = Some(preview);
                    state.selected = Some(file.clone());
                    state.error = None;
                }
                tracing::info!("selected avatar {} ({})", file.name(), file.mime());
                (self.on_select)(Some(file));
            }
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", file.name());
                self.reject(PickerError::Unreadable {
                    file: file.name().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    fn reject(&mut self, error: PickerError) {
        let (previous, had_selection) = {
            let mut state = self.state.lock();
            state.set_error(error);
            let had_selection = state.selected.take().is_some();
            (state.preview.take(), had_selection)
        };
        if let Some(preview) = previous {
            preview.revoke();
        }
        if had_selection {
            (self.on_select)(None);
        }
    }

    pub fn error(&self) -> Option<PickerError> {
        self.state.lock().error.clone()
    }

    /// Current error text, empty when there is none
    pub fn error_message(&self) -> String {
        self.error().map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn hint(&self) -> String {
        self.options.hint()
    }

    pub fn selected(&self) -> Option<FileBlob> {
        self.state.lock().selected.clone()
    }

    pub fn has_preview(&self) -> bool {
        self.state.lock().preview.is_some()
    }

    pub fn preview_url(&self) -> Option<String> {
        self.state.lock().preview.as_ref().map(PreviewUrl::url)
    }

    pub fn thumbnail(&self) -> Option<Thumbnail> {
        self.state
            .lock()
            .preview
            .as_ref()
            .and_then(PreviewUrl::thumbnail)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.lock().dragging
    }

    /// Whether the parent asked for focus since the last call
    pub fn take_focus_request(&self) -> bool {
        std::mem::take(&mut self.state.lock().focus_requested)
    }

    /// The pending announcement, if an error appeared since the last call
    pub fn take_announcement(&self) -> Option<Announcement> {
        self.state.lock().announcement.take()
    }
}

impl Drop for ImagePicker {
    fn drop(&mut self) {
        let preview = self.state.lock().preview.take();
        if let Some(preview) = preview {
            preview.revoke();
        }
    }
}
