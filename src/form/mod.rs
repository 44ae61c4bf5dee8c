//! Ticket form state
//!
//! The form owns the three text fields and receives the avatar through an
//! `ImageSlot` that the picker's selection callback writes into. Fields are
//! pattern-checked on blur; submit only checks that everything is present and
//! then freezes the inputs.

pub mod validator;

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::picker::{FileBlob, ImageValidation, OnSelectImage};

pub use validator::{ValidationResult, invalid_message, validate_field};

/// The three text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Social,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Social];

    /// Label shown above the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Social => "GitHub Username",
        }
    }

    /// Wording used inside error messages
    pub fn title(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email address",
            Field::Social => "github username",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "anonymous",
            Field::Email => "example@email.com",
            Field::Social => "@github-username",
        }
    }
}

/// Values collected by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub name: String,
    pub email: String,
    pub social: String,
    pub image: Option<FileBlob>,
}

impl FormInputs {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Social => &self.social,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Social => &mut self.social,
        }
    }
}

/// Per-field error text; empty means no error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub social: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Social => &self.social,
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Social => &mut self.social,
        };
        *slot = message.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, String::new());
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Something submit found missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Field(Field),
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission stopped; the listed data were missing
    Blocked { missing: Vec<Requirement> },
    /// The inputs were frozen
    Committed,
}

/// Shared slot the picker callback writes the current image into
#[derive(Clone, Default)]
pub struct ImageSlot(Arc<Mutex<Option<FileBlob>>>);

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection callback that stores whatever the picker selects
    pub fn on_select(&self) -> OnSelectImage {
        let slot = self.clone();
        Arc::new(move |file| *slot.0.lock() = file)
    }

    pub fn get(&self) -> Option<FileBlob> {
        self.0.lock().clone()
    }
}

pub struct TicketForm {
    draft: FormInputs,
    image: ImageSlot,
    errors: FieldErrors,
    picker: Box<dyn ImageValidation>,
    committed: Option<FormInputs>,
}

impl TicketForm {
    pub fn new(picker: impl ImageValidation + 'static, image: ImageSlot) -> Self {
        Self {
            draft: FormInputs::default(),
            image,
            errors: FieldErrors::default(),
            picker: Box::new(picker),
            committed: None,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.value(field)
    }

    /// Replace a field's text; no validation happens while typing
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        if self.committed.is_some() {
            return;
        }
        *self.draft.value_mut(field) = value.into();
    }

    /// Append one typed character
    pub fn push_char(&mut self, field: Field, c: char) {
        if self.committed.is_some() {
            return;
        }
        self.draft.value_mut(field).push(c);
    }

    /// Delete the last character
    pub fn pop_char(&mut self, field: Field) {
        if self.committed.is_some() {
            return;
        }
        self.draft.value_mut(field).pop();
    }

    /// The field lost focus: re-check its pattern
    ///
    /// Empty values are left alone, so tabbing through an untouched field does
    /// not flag it.
    pub fn blur(&mut self, field: Field) {
        let value = self.draft.value(field);
        if value.is_empty() {
            return;
        }
        match validate_field(field, value).error {
            Some(message) => self.errors.set(field, message),
            None => self.errors.clear(field),
        }
    }

    /// Check presence of every field and the image; commit when complete
    ///
    /// Only emptiness is checked here. A value that was never blurred is not
    /// pattern-checked.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.committed.is_some() {
            return SubmitOutcome::Committed;
        }

        let image = self.image.get();
        let mut missing = Vec::new();

        if image.is_none() {
            self.picker.validate();
            missing.push(Requirement::Image);
        }
        for field in Field::ALL {
            if self.draft.value(field).is_empty() {
                self.errors.set(field, invalid_message(field));
                missing.push(Requirement::Field(field));
            }
        }

        if !missing.is_empty() {
            tracing::debug!("submit blocked, missing {missing:?}");
            return SubmitOutcome::Blocked { missing };
        }

        self.committed = Some(FormInputs {
            image,
            ..self.draft.clone()
        });
        tracing::info!("ticket form committed for {}", self.draft.email);
        SubmitOutcome::Committed
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> &str {
        self.errors.get(field)
    }

    /// The image currently selected in the picker
    pub fn image(&self) -> Option<FileBlob> {
        self.image.get()
    }

    /// The frozen inputs, once submit succeeded
    pub fn committed(&self) -> Option<&FormInputs> {
        self.committed.as_ref()
    }

    pub fn is_committed(&self) -> bool {
        self.committed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct CountingPicker(Arc<AtomicUsize>);

    impl ImageValidation for CountingPicker {
        fn validate(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn form() -> (TicketForm, ImageSlot, CountingPicker) {
        let slot = ImageSlot::new();
        let picker = CountingPicker::default();
        (TicketForm::new(picker.clone(), slot.clone()), slot, picker)
    }

    fn fill(form: &mut TicketForm) {
        form.set_value(Field::Name, "Ada Lovelace");
        form.set_value(Field::Email, "ada@example.com");
        form.set_value(Field::Social, "ada-l");
    }

    fn avatar() -> FileBlob {
        FileBlob::from_bytes("ada.png", "image/png", vec![1, 2, 3])
    }

    #[test]
    fn test_blur_sets_and_clears_only_that_field() {
        let (mut form, _slot, _picker) = form();
        form.set_value(Field::Name, "Al");
        form.set_value(Field::Email, "bad");
        form.blur(Field::Name);

        assert_eq!(form.error(Field::Name), "Please enter a valid name!");
        assert_eq!(form.error(Field::Email), "");

        form.set_value(Field::Name, "Alan");
        form.blur(Field::Name);
        assert_eq!(form.error(Field::Name), "");
    }

    #[test]
    fn test_blur_ignores_empty_value() {
        let (mut form, _slot, _picker) = form();
        form.set_value(Field::Email, "bad");
        form.blur(Field::Email);
        form.set_value(Field::Email, "");
        form.blur(Field::Email);
        assert_eq!(form.error(Field::Email), "Please enter a valid email address!");
    }

    #[test]
    fn test_typing_helpers() {
        let (mut form, _slot, _picker) = form();
        for c in "octo".chars() {
            form.push_char(Field::Social, c);
        }
        form.pop_char(Field::Social);
        assert_eq!(form.value(Field::Social), "oct");
    }

    #[test]
    fn test_submit_without_image_is_blocked() {
        let (mut form, _slot, picker) = form();
        fill(&mut form);

        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Blocked {
                missing: vec![Requirement::Image]
            }
        );
        assert_eq!(picker.0.load(Ordering::SeqCst), 1);
        assert!(!form.is_committed());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_empty_flags_everything() {
        let (mut form, _slot, picker) = form();
        let outcome = form.submit();

        let SubmitOutcome::Blocked { missing } = outcome else {
            panic!("empty form must not commit");
        };
        assert_eq!(missing.len(), 4);
        assert_eq!(picker.0.load(Ordering::SeqCst), 1);
        assert_eq!(form.error(Field::Name), "Please enter a valid name!");
        assert_eq!(form.error(Field::Email), "Please enter a valid email address!");
        assert_eq!(form.error(Field::Social), "Please enter a valid github username!");
    }

    #[test]
    fn test_submit_commits_exact_values() {
        let (mut form, slot, picker) = form();
        fill(&mut form);
        (slot.on_select())(Some(avatar()));

        assert_eq!(form.submit(), SubmitOutcome::Committed);
        assert_eq!(picker.0.load(Ordering::SeqCst), 0);

        let committed = form.committed().unwrap();
        assert_eq!(committed.name, "Ada Lovelace");
        assert_eq!(committed.email, "ada@example.com");
        assert_eq!(committed.social, "ada-l");
        assert_eq!(committed.image, Some(avatar()));
    }

    #[test]
    fn test_submit_checks_presence_not_pattern() {
        let (mut form, slot, _picker) = form();
        form.set_value(Field::Name, "Al");
        form.set_value(Field::Email, "not-an-email");
        form.set_value(Field::Social, "-bad-");
        (slot.on_select())(Some(avatar()));

        assert_eq!(form.submit(), SubmitOutcome::Committed);
    }

    #[test]
    fn test_committed_form_is_frozen() {
        let (mut form, slot, _picker) = form();
        fill(&mut form);
        (slot.on_select())(Some(avatar()));
        form.submit();

        form.set_value(Field::Name, "Someone Else");
        (slot.on_select())(None);
        assert_eq!(form.submit(), SubmitOutcome::Committed);
        assert_eq!(form.committed().unwrap().name, "Ada Lovelace");
        assert!(form.committed().unwrap().image.is_some());
    }

    #[test]
    fn test_cleared_image_blocks_again() {
        let (mut form, slot, picker) = form();
        fill(&mut form);
        (slot.on_select())(Some(avatar()));
        (slot.on_select())(None);

        assert!(matches!(form.submit(), SubmitOutcome::Blocked { .. }));
        assert_eq!(picker.0.load(Ordering::SeqCst), 1);
    }
}
