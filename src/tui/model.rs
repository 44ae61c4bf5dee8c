//! Ticket screen model for testable state management
//!
//! `TicketScreen` owns the picker, the form and the file browser and applies
//! `FormAction`s to them. Key mapping and view-model computation are plain
//! functions so the whole flow can be tested without iocraft running.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use directories::BaseDirs;
use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::config::Config;
use crate::form::{Field, ImageSlot, SubmitOutcome, TicketForm};
use crate::picker::{
    BrowseOutcome, EntryKind, FileBlob, FileBrowser, ImagePicker, PreviewStore, PreviewUrl,
    Thumbnail,
};
use crate::ticket::GeneratedTicket;
use crate::tui::components::display_info::{InfoLine, info_line};
use crate::tui::components::footer::{
    Shortcut, avatar_shortcuts, drag_shortcuts, field_shortcuts, file_browser_shortcuts,
    submit_shortcuts, ticket_shortcuts,
};
use crate::tui::components::toast::Toast;

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Avatar,
    Name,
    Email,
    Social,
    Submit,
}

impl Focus {
    /// Get the next control (wrapping)
    pub fn next(self) -> Self {
        match self {
            Focus::Avatar => Focus::Name,
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Social,
            Focus::Social => Focus::Submit,
            Focus::Submit => Focus::Avatar,
        }
    }

    /// Get the previous control (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Focus::Avatar => Focus::Submit,
            Focus::Name => Focus::Avatar,
            Focus::Email => Focus::Name,
            Focus::Social => Focus::Email,
            Focus::Submit => Focus::Social,
        }
    }

    /// The text field behind this control, if it is one
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Name => Some(Field::Name),
            Focus::Email => Some(Field::Email),
            Focus::Social => Some(Field::Social),
            Focus::Avatar | Focus::Submit => None,
        }
    }
}

/// What the keyboard is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Field(Field),
    Avatar { dragging: bool, has_image: bool },
    Submit,
    Browser,
    Ticket,
}

/// All possible actions on the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    // Focus
    FocusNext,
    FocusPrev,

    // Text input (into the focused field, or into a dropped path)
    Type(char),
    Backspace,

    // Avatar picker
    Browse,
    Remove,
    /// A path is arriving; the first character is kept
    StartDrag(char),
    Drop,
    LeaveDrag,

    // File browser
    BrowserDown,
    BrowserUp,
    BrowserActivate,
    BrowserParent,
    BrowserCancel,

    // App
    Submit,
    Quit,
}

/// Characters that begin a path pasted by a terminal drag-and-drop
const DRAG_START_CHARS: [char; 5] = ['/', '~', '\'', '"', '.'];

/// Convert a key event to a FormAction (pure function)
///
/// Returns `None` if the key doesn't map to any action.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    context: KeyContext,
) -> Option<FormAction> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && code == KeyCode::Char('q') {
        return Some(FormAction::Quit);
    }

    match context {
        KeyContext::Ticket => match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(FormAction::Quit),
            _ => None,
        },
        KeyContext::Browser => browser_key_to_action(code),
        _ if ctrl && code == KeyCode::Char('s') => Some(FormAction::Submit),
        _ if ctrl => None,
        KeyContext::Avatar { dragging: true, .. } => match code {
            KeyCode::Enter => Some(FormAction::Drop),
            KeyCode::Esc => Some(FormAction::LeaveDrag),
            KeyCode::Backspace => Some(FormAction::Backspace),
            KeyCode::Char(c) => Some(FormAction::Type(c)),
            KeyCode::Tab => Some(FormAction::FocusNext),
            KeyCode::BackTab => Some(FormAction::FocusPrev),
            _ => None,
        },
        _ if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) => {
            Some(FormAction::FocusPrev)
        }
        _ if code == KeyCode::Tab => Some(FormAction::FocusNext),
        _ if code == KeyCode::BackTab => Some(FormAction::FocusPrev),
        KeyContext::Avatar { has_image, .. } => match code {
            KeyCode::Enter | KeyCode::Char(' ') if !has_image => Some(FormAction::Browse),
            KeyCode::Char('c') if has_image => Some(FormAction::Browse),
            KeyCode::Char('x') | KeyCode::Delete if has_image => Some(FormAction::Remove),
            KeyCode::Char(c) if DRAG_START_CHARS.contains(&c) => Some(FormAction::StartDrag(c)),
            _ => None,
        },
        KeyContext::Field(_) => match code {
            KeyCode::Enter => Some(FormAction::FocusNext),
            KeyCode::Backspace => Some(FormAction::Backspace),
            KeyCode::Char(c) => Some(FormAction::Type(c)),
            _ => None,
        },
        KeyContext::Submit => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(FormAction::Submit),
            _ => None,
        },
    }
}

fn browser_key_to_action(code: KeyCode) -> Option<FormAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(FormAction::BrowserDown),
        KeyCode::Char('k') | KeyCode::Up => Some(FormAction::BrowserUp),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Some(FormAction::BrowserActivate),
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            Some(FormAction::BrowserParent)
        }
        KeyCode::Esc => Some(FormAction::BrowserCancel),
        _ => None,
    }
}

/// Turn text typed by a terminal drop into a path
///
/// Strips surrounding quotes, undoes backslash escapes and expands a leading
/// `~`. Returns `None` for blank input.
pub fn parse_dropped_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    let unquoted = ['\'', '"']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .map(str::to_string)
        .unwrap_or_else(|| unescape(trimmed));

    if unquoted.is_empty() {
        return None;
    }

    if let Some(rest) = unquoted.strip_prefix("~/")
        && let Some(dirs) = BaseDirs::new()
    {
        return Some(dirs.home_dir().join(rest));
    }
    Some(PathBuf::from(unquoted))
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// A ticket that has been issued, with the preview it displays
pub struct IssuedTicket {
    pub ticket: GeneratedTicket,
    pub preview: Option<PreviewUrl>,
}

/// Raw state for the whole ticket screen
pub struct TicketScreen {
    config: Config,
    year: i16,
    previews: PreviewStore,
    picker: Option<ImagePicker>,
    form: TicketForm,
    focus: Focus,
    drag_path: Option<String>,
    browser: Option<FileBrowser>,
    browse_dir: PathBuf,
    toast: Option<Toast>,
    issued: Option<IssuedTicket>,
    should_exit: bool,
}

impl TicketScreen {
    pub fn new(config: Config) -> Self {
        let previews = PreviewStore::new();
        let image = ImageSlot::new();
        let picker = ImagePicker::new(config.picker_options(), previews.clone(), image.on_select());
        let form = TicketForm::new(picker.handle(), image);

        Self {
            year: jiff::Zoned::now().year(),
            config,
            previews,
            picker: Some(picker),
            form,
            focus: Focus::default(),
            drag_path: None,
            browser: None,
            browse_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            toast: None,
            issued: None,
            should_exit: false,
        }
    }

    /// Start the file browser in `dir` instead of the working directory
    pub fn with_browse_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.browse_dir = dir.into();
        self
    }

    pub fn with_year(mut self, year: i16) -> Self {
        self.year = year;
        self
    }

    pub fn key_context(&self) -> KeyContext {
        if self.issued.is_some() {
            return KeyContext::Ticket;
        }
        if self.browser.is_some() {
            return KeyContext::Browser;
        }
        match self.focus.field() {
            Some(field) => KeyContext::Field(field),
            None if self.focus == Focus::Submit => KeyContext::Submit,
            None => KeyContext::Avatar {
                dragging: self.drag_path.is_some(),
                has_image: self.form.image().is_some(),
            },
        }
    }

    /// Apply one action (reducer)
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::FocusNext => self.move_focus(self.focus.next()),
            FormAction::FocusPrev => self.move_focus(self.focus.prev()),

            FormAction::Type(c) => match (self.focus.field(), self.drag_path.as_mut()) {
                (Some(field), _) => self.form.push_char(field, c),
                (None, Some(path)) => {
                    path.push(c);
                    if let Some(picker) = self.picker.as_mut() {
                        picker.drag_over();
                    }
                }
                (None, None) => {}
            },
            FormAction::Backspace => match (self.focus.field(), self.drag_path.as_mut()) {
                (Some(field), _) => self.form.pop_char(field),
                (None, Some(path)) => {
                    path.pop();
                }
                (None, None) => {}
            },

            FormAction::Browse => self.open_browser(),
            FormAction::Remove => {
                if let Some(picker) = self.picker.as_mut() {
                    let removed = picker.selected();
                    picker.remove();
                    if let Some(file) = removed {
                        self.toast = Some(Toast::info(format!("Removed {}", file.name())));
                    }
                }
            }
            FormAction::StartDrag(c) => {
                self.drag_path = Some(c.to_string());
                if let Some(picker) = self.picker.as_mut() {
                    picker.drag_enter();
                }
            }
            FormAction::Drop => self.drop_path(),
            FormAction::LeaveDrag => self.leave_drag(),

            FormAction::BrowserDown => {
                if let Some(browser) = self.browser.as_mut() {
                    browser.move_down();
                }
            }
            FormAction::BrowserUp => {
                if let Some(browser) = self.browser.as_mut() {
                    browser.move_up();
                }
            }
            FormAction::BrowserActivate => self.activate_browser_entry(),
            FormAction::BrowserParent => {
                if let Some(Err(e)) = self.browser.as_mut().map(FileBrowser::parent) {
                    self.toast = Some(Toast::error(e.to_string()));
                }
            }
            FormAction::BrowserCancel => {
                self.close_browser();
                self.choose(Vec::new());
            }

            FormAction::Submit => self.submit(),
            FormAction::Quit => self.should_exit = true,
        }

        self.collect_announcement();
    }

    fn move_focus(&mut self, to: Focus) {
        if self.drag_path.is_some() {
            self.leave_drag();
        }
        if let Some(field) = self.focus.field() {
            self.form.blur(field);
        }
        self.focus = to;
    }

    fn leave_drag(&mut self) {
        self.drag_path = None;
        if let Some(picker) = self.picker.as_mut() {
            picker.drag_leave();
        }
    }

    fn drop_path(&mut self) {
        let raw = self.drag_path.take().unwrap_or_default();
        let files = match parse_dropped_path(&raw).map(|path| FileBlob::open(&path)) {
            Some(Ok(blob)) => vec![blob],
            Some(Err(e)) => {
                self.toast = Some(Toast::error(e.to_string()));
                Vec::new()
            }
            None => Vec::new(),
        };
        if let Some(picker) = self.picker.as_mut() {
            picker.drop_files(files);
        }
    }

    fn open_browser(&mut self) {
        match FileBrowser::open(&self.browse_dir) {
            Ok(browser) => self.browser = Some(browser),
            Err(e) => {
                tracing::warn!("could not open {}: {e}", self.browse_dir.display());
                self.toast = Some(Toast::error(e.to_string()));
            }
        }
    }

    fn close_browser(&mut self) {
        if let Some(browser) = self.browser.take() {
            self.browse_dir = browser.dir().to_path_buf();
        }
    }

    fn activate_browser_entry(&mut self) {
        let Some(browser) = self.browser.as_mut() else {
            return;
        };
        match browser.activate() {
            Ok(BrowseOutcome::Chosen(path)) => {
                self.close_browser();
                match FileBlob::open(&path) {
                    Ok(blob) => self.choose(vec![blob]),
                    Err(e) => {
                        self.toast = Some(Toast::error(e.to_string()));
                        self.choose(Vec::new());
                    }
                }
            }
            Ok(BrowseOutcome::Navigated | BrowseOutcome::Nothing) => {}
            Err(e) => self.toast = Some(Toast::error(e.to_string())),
        }
    }

    fn choose(&mut self, files: Vec<FileBlob>) {
        if let Some(picker) = self.picker.as_mut() {
            picker.choose(files);
        }
    }

    fn submit(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.blur(field);
        }

        match self.form.submit() {
            SubmitOutcome::Committed => self.issue(),
            SubmitOutcome::Blocked { .. } => {
                let wants_focus = self
                    .picker
                    .as_ref()
                    .is_some_and(ImagePicker::take_focus_request);
                if wants_focus {
                    self.leave_drag();
                    self.focus = Focus::Avatar;
                }
            }
        }
    }

    fn issue(&mut self) {
        let Some(inputs) = self.form.committed() else {
            return;
        };

        match GeneratedTicket::issue(inputs, self.config.event.clone()) {
            Ok(ticket) => {
                let preview = inputs.image.as_ref().and_then(|blob| {
                    self.previews
                        .create(blob)
                        .inspect_err(|e| tracing::warn!("no preview for ticket avatar: {e}"))
                        .ok()
                });
                // The form is read-only from here on; the picker goes away
                self.collect_announcement();
                self.picker = None;
                self.browser = None;
                self.drag_path = None;
                self.toast = Some(Toast::success(format!("Ticket {} issued", ticket.number)));
                self.issued = Some(IssuedTicket { ticket, preview });
            }
            Err(e) => self.toast = Some(Toast::error(e.to_string())),
        }
    }

    fn collect_announcement(&mut self) {
        let announcement = self
            .picker
            .as_ref()
            .and_then(ImagePicker::take_announcement);
        if let Some(announcement) = announcement {
            self.toast = Some(Toast::from_announcement(announcement));
        }
    }

    pub fn toast_expired(&self, now: Instant) -> bool {
        self.toast.as_ref().is_some_and(|t| t.is_expired(now))
    }

    /// Drop the toast once its time is up
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast_expired(now) {
            self.toast = None;
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn form(&self) -> &TicketForm {
        &self.form
    }

    pub fn picker(&self) -> Option<&ImagePicker> {
        self.picker.as_ref()
    }

    pub fn previews(&self) -> &PreviewStore {
        &self.previews
    }

    pub fn browser(&self) -> Option<&FileBrowser> {
        self.browser.as_ref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn issued(&self) -> Option<&IssuedTicket> {
        self.issued.as_ref()
    }

    pub fn browse_dir(&self) -> &Path {
        &self.browse_dir
    }
}

// ============================================================================
// View models
// ============================================================================

/// Computed view model for rendering the entire screen
#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    pub logo: String,
    pub heading: String,
    pub subheading: String,
    pub body: BodyViewModel,
    pub browser: Option<BrowserViewModel>,
    pub toast: Option<Toast>,
    pub shortcuts: Vec<Shortcut>,
}

#[derive(Debug, Clone)]
pub enum BodyViewModel {
    Form(FormViewModel),
    Ticket(TicketViewModel),
}

#[derive(Debug, Clone)]
pub struct FormViewModel {
    pub avatar: AvatarViewModel,
    pub fields: Vec<FieldViewModel>,
    pub submit_focused: bool,
}

#[derive(Debug, Clone)]
pub struct AvatarViewModel {
    pub focused: bool,
    pub dragging: bool,
    /// Path typed so far while a drop is in progress
    pub drag_path: Option<String>,
    pub file_name: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    pub info: Option<InfoLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViewModel {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub focused: bool,
    pub info: Option<InfoLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserViewModel {
    pub dir: String,
    pub entries: Vec<(String, EntryKind)>,
    pub selected_index: usize,
}

#[derive(Debug, Clone)]
pub struct TicketViewModel {
    pub headline_name: String,
    pub email: String,
    pub event_name: String,
    pub when_and_where: String,
    pub name: String,
    pub handle: String,
    pub profile_url: String,
    pub number: String,
    pub thumbnail: Option<Thumbnail>,
}

/// Pure function: compute view model from state
pub fn compute_view_model(screen: &TicketScreen) -> ScreenViewModel {
    let event_name = screen.config.event.name.clone();

    let body = match &screen.issued {
        Some(issued) => BodyViewModel::Ticket(ticket_view_model(issued)),
        None => BodyViewModel::Form(form_view_model(screen)),
    };

    let browser = screen.browser.as_ref().map(|browser| BrowserViewModel {
        dir: browser.dir().display().to_string(),
        entries: browser
            .entries()
            .iter()
            .map(|e| (e.name.clone(), e.kind))
            .collect(),
        selected_index: browser.selected_index(),
    });

    let shortcuts = match screen.key_context() {
        KeyContext::Ticket => ticket_shortcuts(),
        KeyContext::Browser => file_browser_shortcuts(),
        KeyContext::Avatar { dragging: true, .. } => drag_shortcuts(),
        KeyContext::Avatar { has_image, .. } => avatar_shortcuts(has_image),
        KeyContext::Field(_) => field_shortcuts(),
        KeyContext::Submit => submit_shortcuts(),
    };

    ScreenViewModel {
        logo: format!("◆ {event_name}"),
        heading: format!("Your Journey to {event_name} {} Start Here!", screen.year),
        subheading: "Secure your spot at next year's biggest coding conference.".to_string(),
        body,
        browser,
        toast: screen.toast.clone(),
        shortcuts,
    }
}

fn form_view_model(screen: &TicketScreen) -> FormViewModel {
    let avatar = match &screen.picker {
        Some(picker) => AvatarViewModel {
            focused: screen.focus == Focus::Avatar,
            dragging: picker.is_dragging(),
            drag_path: screen.drag_path.clone(),
            file_name: picker.selected().map(|f| f.name().to_string()),
            thumbnail: picker.thumbnail(),
            info: info_line(&picker.error_message(), Some(&picker.hint())),
        },
        None => AvatarViewModel {
            focused: false,
            dragging: false,
            drag_path: None,
            file_name: None,
            thumbnail: None,
            info: None,
        },
    };

    let fields = Field::ALL
        .iter()
        .map(|&field| FieldViewModel {
            field,
            label: field.label(),
            value: screen.form.value(field).to_string(),
            placeholder: field.placeholder(),
            focused: screen.focus.field() == Some(field),
            info: info_line(screen.form.error(field), None),
        })
        .collect();

    FormViewModel {
        avatar,
        fields,
        submit_focused: screen.focus == Focus::Submit,
    }
}

fn ticket_view_model(issued: &IssuedTicket) -> TicketViewModel {
    let ticket = &issued.ticket;
    TicketViewModel {
        headline_name: ticket.name.clone(),
        email: ticket.email.clone(),
        event_name: ticket.event.name.clone(),
        when_and_where: ticket.event.when_and_where(),
        name: ticket.name.clone(),
        handle: ticket.handle(),
        profile_url: ticket.profile_url.to_string(),
        number: ticket.number.to_string(),
        thumbnail: issued.preview.as_ref().and_then(PreviewUrl::thumbnail),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::toast::ToastLevel;
    use image::{DynamicImage, ImageOutputFormat, RgbImage};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn png_bytes() -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, image::Rgb([10, 20, 30])))
            .write_to(&mut bytes, ImageOutputFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("me.png"), png_bytes()).unwrap();
        std::fs::write(dir.path().join("cv.pdf"), b"%PDF-1.4\n").unwrap();
        dir
    }

    fn screen(dir: &TempDir) -> TicketScreen {
        TicketScreen::new(Config::default())
            .with_browse_dir(dir.path())
            .with_year(2025)
    }

    fn type_text(screen: &mut TicketScreen, text: &str) {
        for c in text.chars() {
            screen.apply(FormAction::Type(c));
        }
    }

    fn choose_in_browser(screen: &mut TicketScreen, name: &str) {
        screen.apply(FormAction::Browse);
        let index = screen
            .browser()
            .unwrap()
            .entries()
            .iter()
            .position(|e| e.name == name)
            .unwrap();
        for _ in 0..index {
            screen.apply(FormAction::BrowserDown);
        }
        screen.apply(FormAction::BrowserActivate);
    }

    fn ctx(dragging: bool, has_image: bool) -> KeyContext {
        KeyContext::Avatar {
            dragging,
            has_image,
        }
    }

    // ========================================================================
    // Key mapping
    // ========================================================================

    #[test]
    fn test_ctrl_q_quits_everywhere() {
        for context in [
            KeyContext::Field(Field::Name),
            ctx(true, false),
            KeyContext::Submit,
            KeyContext::Browser,
            KeyContext::Ticket,
        ] {
            assert_eq!(
                key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, context),
                Some(FormAction::Quit)
            );
        }
    }

    #[test]
    fn test_field_keys() {
        let context = KeyContext::Field(Field::Email);
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, context),
            Some(FormAction::Type('q'))
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, context),
            Some(FormAction::FocusNext)
        );
        assert_eq!(
            key_to_action(KeyCode::Tab, KeyModifiers::SHIFT, context),
            Some(FormAction::FocusPrev)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::CONTROL, context),
            Some(FormAction::Submit)
        );
    }

    #[test]
    fn test_avatar_keys() {
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, ctx(false, false)),
            Some(FormAction::Browse)
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, ctx(false, true)),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::NONE, ctx(false, true)),
            Some(FormAction::Browse)
        );
        assert_eq!(
            key_to_action(KeyCode::Delete, KeyModifiers::NONE, ctx(false, true)),
            Some(FormAction::Remove)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('\''), KeyModifiers::NONE, ctx(false, false)),
            Some(FormAction::StartDrag('\''))
        );
        assert_eq!(
            key_to_action(KeyCode::Char('a'), KeyModifiers::NONE, ctx(false, false)),
            None
        );
    }

    #[test]
    fn test_drag_keys() {
        assert_eq!(
            key_to_action(KeyCode::Char('x'), KeyModifiers::NONE, ctx(true, true)),
            Some(FormAction::Type('x'))
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, ctx(true, false)),
            Some(FormAction::Drop)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, ctx(true, false)),
            Some(FormAction::LeaveDrag)
        );
    }

    #[test]
    fn test_browser_and_ticket_keys() {
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, KeyContext::Browser),
            Some(FormAction::BrowserDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, KeyContext::Browser),
            Some(FormAction::BrowserCancel)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::CONTROL, KeyContext::Browser),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, KeyContext::Ticket),
            Some(FormAction::Quit)
        );
    }

    // ========================================================================
    // Dropped paths
    // ========================================================================

    #[test]
    fn test_parse_dropped_path() {
        assert_eq!(
            parse_dropped_path("'/tmp/my photo.png' "),
            Some(PathBuf::from("/tmp/my photo.png"))
        );
        assert_eq!(
            parse_dropped_path("/tmp/my\\ photo.png"),
            Some(PathBuf::from("/tmp/my photo.png"))
        );
        assert_eq!(parse_dropped_path("  "), None);
        assert_eq!(parse_dropped_path("''"), None);
    }

    // ========================================================================
    // Reducer
    // ========================================================================

    #[test]
    fn test_focus_cycle_blurs_fields() {
        let dir = fixture();
        let mut screen = screen(&dir);
        screen.apply(FormAction::FocusNext);
        assert_eq!(screen.focus(), Focus::Name);

        type_text(&mut screen, "Al");
        assert_eq!(screen.form().error(Field::Name), "");
        screen.apply(FormAction::FocusNext);
        assert_eq!(screen.form().error(Field::Name), "Please enter a valid name!");
        assert_eq!(screen.focus(), Focus::Email);

        screen.apply(FormAction::FocusPrev);
        screen.apply(FormAction::FocusPrev);
        screen.apply(FormAction::FocusPrev);
        assert_eq!(screen.focus(), Focus::Submit);
    }

    #[test]
    fn test_browse_and_choose() {
        let dir = fixture();
        let mut screen = screen(&dir);
        choose_in_browser(&mut screen, "me.png");

        assert!(screen.browser().is_none());
        let picker = screen.picker().unwrap();
        assert_eq!(picker.selected().unwrap().name(), "me.png");
        assert!(picker.thumbnail().is_some());
        assert!(screen.form().image().is_some());
    }

    #[test]
    fn test_rejected_file_is_announced() {
        let dir = fixture();
        let mut screen = screen(&dir);
        choose_in_browser(&mut screen, "cv.pdf");

        assert!(screen.form().image().is_none());
        let toast = screen.toast().unwrap();
        assert_eq!(toast.message, "File type not accepted. Please upload: image/*");
    }

    #[test]
    fn test_cancel_browser_clears_error() {
        let dir = fixture();
        let mut screen = screen(&dir);
        screen.apply(FormAction::FocusPrev);
        screen.apply(FormAction::Submit);
        assert!(screen.picker().unwrap().error().is_some());

        screen.apply(FormAction::Browse);
        screen.apply(FormAction::BrowserCancel);
        assert!(screen.picker().unwrap().error().is_none());
    }

    #[test]
    fn test_drop_path() {
        let dir = fixture();
        let mut screen = screen(&dir);
        let path = dir.path().join("me.png").display().to_string();

        let mut chars = path.chars();
        screen.apply(FormAction::StartDrag(chars.next().unwrap()));
        assert!(screen.picker().unwrap().is_dragging());
        type_text(&mut screen, chars.as_str());
        screen.apply(FormAction::Drop);

        let picker = screen.picker().unwrap();
        assert!(!picker.is_dragging());
        assert_eq!(picker.selected().unwrap().name(), "me.png");
    }

    #[test]
    fn test_drop_missing_file_shows_toast() {
        let dir = fixture();
        let mut screen = screen(&dir);
        screen.apply(FormAction::StartDrag('/'));
        type_text(&mut screen, "definitely/not/here.png");
        screen.apply(FormAction::Drop);

        assert!(screen.toast().unwrap().message.contains("definitely"));
        assert!(screen.picker().unwrap().selected().is_none());
    }

    #[test]
    fn test_leaving_avatar_cancels_drag() {
        let dir = fixture();
        let mut screen = screen(&dir);
        screen.apply(FormAction::StartDrag('~'));
        screen.apply(FormAction::FocusNext);
        assert!(!screen.picker().unwrap().is_dragging());
        assert_eq!(screen.key_context(), KeyContext::Field(Field::Name));
    }

    #[test]
    fn test_submit_without_image_focuses_picker() {
        let dir = fixture();
        let mut screen = screen(&dir);
        screen.apply(FormAction::FocusNext);
        type_text(&mut screen, "Ada Lovelace");
        screen.apply(FormAction::Submit);

        assert_eq!(screen.focus(), Focus::Avatar);
        assert!(screen.issued().is_none());
        assert_eq!(
            screen.toast().unwrap().message,
            "Please upload your avatar image!"
        );
        assert_eq!(screen.form().error(Field::Name), "");
        assert_eq!(
            screen.form().error(Field::Email),
            "Please enter a valid email address!"
        );
    }

    #[test]
    fn test_full_flow_issues_ticket() {
        let dir = fixture();
        let mut screen = screen(&dir);
        choose_in_browser(&mut screen, "me.png");
        screen.apply(FormAction::FocusNext);
        type_text(&mut screen, "Ada Lovelace");
        screen.apply(FormAction::FocusNext);
        type_text(&mut screen, "ada@example.com");
        screen.apply(FormAction::FocusNext);
        type_text(&mut screen, "ada-l");
        screen.apply(FormAction::FocusNext);
        screen.apply(FormAction::Submit);

        let issued = screen.issued().unwrap();
        assert_eq!(issued.ticket.name, "Ada Lovelace");
        assert!(issued.preview.is_some());
        assert!(screen.picker().is_none());
        assert_eq!(screen.previews().live_count(), 1);
        assert_eq!(screen.previews().revoked_count(), 1);
        assert_eq!(screen.key_context(), KeyContext::Ticket);
        assert_eq!(screen.toast().unwrap().level, ToastLevel::Success);

        let vm = compute_view_model(&screen);
        let BodyViewModel::Ticket(ticket) = vm.body else {
            panic!("expected ticket view");
        };
        assert_eq!(ticket.handle, "@ada-l");
        assert_eq!(ticket.profile_url, "https://github.com/ada-l");
        assert!(ticket.thumbnail.is_some());
    }

    #[test]
    fn test_url_like_handle_still_issues_ticket() {
        let dir = fixture();
        let mut screen = screen(&dir);
        choose_in_browser(&mut screen, "me.png");
        screen.apply(FormAction::FocusNext);
        type_text(&mut screen, "Ada Lovelace");
        screen.apply(FormAction::FocusNext);
        type_text(&mut screen, "ada@example.com");
        screen.apply(FormAction::FocusNext);
        type_text(&mut screen, "http://");
        screen.apply(FormAction::Submit);

        assert_eq!(screen.key_context(), KeyContext::Ticket);
        let issued = screen.issued().unwrap();
        assert_eq!(issued.ticket.github, "http://");
        assert_eq!(issued.ticket.profile_url.host_str(), Some("github.com"));
    }

    #[test]
    fn test_toast_expiry() {
        let dir = fixture();
        let mut screen = screen(&dir);
        screen.apply(FormAction::Submit);
        let created = screen.toast().unwrap().timestamp;

        screen.expire_toast(created + std::time::Duration::from_millis(2500));
        assert!(screen.toast().is_some());
        screen.expire_toast(created + std::time::Duration::from_secs(3));
        assert!(screen.toast().is_none());
    }

    // ========================================================================
    // View model
    // ========================================================================

    #[test]
    fn test_initial_view_model() {
        let dir = fixture();
        let screen = screen(&dir);
        let vm = compute_view_model(&screen);

        assert_eq!(vm.logo, "◆ Coding Conf");
        assert_eq!(vm.heading, "Your Journey to Coding Conf 2025 Start Here!");
        let BodyViewModel::Form(form) = vm.body else {
            panic!("expected form view");
        };
        assert!(form.avatar.focused);
        assert_eq!(
            form.avatar.info,
            Some(InfoLine::Hint(
                "Upload your photo (JPG or PNG, max size: 5MB).".to_string()
            ))
        );
        let placeholders: Vec<_> = form.fields.iter().map(|f| f.placeholder).collect();
        assert_eq!(
            placeholders,
            vec!["anonymous", "example@email.com", "@github-username"]
        );
        assert!(vm.shortcuts.iter().any(|s| s.action == "Browse"));
    }

    #[test]
    fn test_browser_view_model() {
        let dir = fixture();
        let mut screen = screen(&dir);
        screen.apply(FormAction::Browse);
        let vm = compute_view_model(&screen);
        let browser = vm.browser.unwrap();
        let names: Vec<_> = browser.entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["..", "cv.pdf", "me.png"]);
        assert!(vm.shortcuts.iter().any(|s| s.action == "Open/Choose"));
    }
}
