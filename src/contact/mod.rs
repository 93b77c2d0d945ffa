// SPDX-License-Identifier: MPL-2.0
//! Contact form model, validation, and the simulated submission flow.
//!
//! # Components
//!
//! - [`validation`] - Pure per-field rules returning a [`ValidationResult`]
//! - [`submission`] - The `idle → validating → sending → success →
//!   resetting → idle` state machine
//!
//! The form tracks which field is being edited so that moving to another
//! field acts as a blur of the previous one: blur re-validates, editing only
//! clears the error.

pub mod submission;
pub mod validation;

pub use submission::{FlowEvent, Phase, SubmissionFlow, SubmitError, SubmitOutcome, Submission};
pub use validation::{validate, validate_field, ValidationResult};

use crate::app::config::{COUNTER_DANGER_CHARS, COUNTER_WARNING_CHARS};

/// Input control type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select,
    TextArea,
}

/// Fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    ProjectType,
    Timeline,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::ProjectType,
        FieldId::Timeline,
        FieldId::Message,
    ];

    /// Form name of the field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::ProjectType => "project-type",
            FieldId::Timeline => "timeline",
            FieldId::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Full Name",
            FieldId::Email => "Email Address",
            FieldId::ProjectType => "Project Type",
            FieldId::Timeline => "Timeline",
            FieldId::Message => "Project Details",
        }
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Name => FieldKind::Text,
            FieldId::Email => FieldKind::Email,
            FieldId::ProjectType | FieldId::Timeline => FieldKind::Select,
            FieldId::Message => FieldKind::TextArea,
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        true
    }
}

/// One input of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// Message shown under the field while its last validation failed.
    pub error: Option<String>,
}

impl FormField {
    fn new(id: FieldId) -> Self {
        Self {
            id,
            kind: id.kind(),
            required: id.is_required(),
            value: String::new(),
            error: None,
        }
    }
}

/// Color tier of the message character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTone {
    Neutral,
    Warning,
    Danger,
}

impl CounterTone {
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        if count > COUNTER_DANGER_CHARS {
            CounterTone::Danger
        } else if count > COUNTER_WARNING_CHARS {
            CounterTone::Warning
        } else {
            CounterTone::Neutral
        }
    }
}

/// State of the contact form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<FormField>,
    active: Option<FieldId>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.into_iter().map(FormField::new).collect(),
            active: None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> &FormField {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .unwrap_or_else(|| unreachable!("every FieldId has a field"))
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        self.fields
            .iter_mut()
            .find(|field| field.id == id)
            .unwrap_or_else(|| unreachable!("every FieldId has a field"))
    }

    #[must_use]
    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    #[must_use]
    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.field(id).error.as_deref()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.error.is_some())
    }

    /// Field currently being edited.
    #[must_use]
    pub fn active(&self) -> Option<FieldId> {
        self.active
    }

    /// Applies a keystroke-level edit.
    ///
    /// The field's error is cleared without re-validating. If another field
    /// was active it is blurred first, and its validation result is returned.
    pub fn edit(&mut self, id: FieldId, value: impl Into<String>) -> Option<(FieldId, ValidationResult)> {
        let blurred = self.focus(id);
        let field = self.field_mut(id);
        field.value = value.into();
        field.error = None;
        blurred
    }

    /// Makes `id` the active field, blurring the previous one.
    pub fn focus(&mut self, id: FieldId) -> Option<(FieldId, ValidationResult)> {
        match self.active.replace(id) {
            Some(previous) if previous != id => Some((previous, self.blur(previous))),
            _ => None,
        }
    }

    /// Re-validates a field that lost focus and updates its error display.
    pub fn blur(&mut self, id: FieldId) -> ValidationResult {
        if self.active == Some(id) {
            self.active = None;
        }
        self.revalidate(id)
    }

    fn revalidate(&mut self, id: FieldId) -> ValidationResult {
        let field = self.field(id);
        let result = validate(id.name(), field.kind, field.required, &field.value);
        self.field_mut(id).error = result.message.clone().filter(|_| !result.valid);
        result
    }

    /// Validates every required field, showing every error at once.
    ///
    /// Returns the fields that failed, in display order.
    pub fn validate_all(&mut self) -> Vec<FieldId> {
        let required: Vec<FieldId> = self
            .fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.id)
            .collect();

        required
            .into_iter()
            .filter(|&id| !self.revalidate(id).valid)
            .collect()
    }

    /// Restores the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Length of the raw message, as shown by the counter.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value(FieldId::Message).chars().count()
    }

    #[must_use]
    pub fn counter_tone(&self) -> CounterTone {
        CounterTone::for_count(self.char_count())
    }
}
