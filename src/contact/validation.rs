// SPDX-License-Identifier: MPL-2.0
//! Contact field validation rules.
//!
//! Rules run in order and the first failure wins:
//! 1. a required field must not be empty;
//! 2. an e-mail must look like `local@domain.tld`;
//! 3. a free-text message must be between 20 and 500 characters.
//!
//! Values are trimmed before any rule runs. Validation never touches the
//! UI; the caller decides how to render the returned [`ValidationResult`].

use super::{FieldId, FieldKind};
use crate::app::config::{MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MESSAGE_TOO_SHORT: &str = "Please provide more details (minimum 20 characters)";
pub const MESSAGE_TOO_LONG: &str = "Message is too long (maximum 500 characters)";

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Message shown when a required field is left empty.
#[must_use]
pub fn required_message(name: &str) -> String {
    let action = match name {
        "project-type" => "select a project type",
        "timeline" => "select a timeline",
        _ => "fill in this field",
    };
    format!("Please {action}")
}

/// Validates a raw field value.
///
/// `name` is the field's form name (it only selects the wording of the
/// "required" message).
#[must_use]
pub fn validate(name: &str, kind: FieldKind, required: bool, raw: &str) -> ValidationResult {
    let value = raw.trim();

    if value.is_empty() {
        return if required {
            ValidationResult::invalid(required_message(name))
        } else {
            ValidationResult::ok()
        };
    }

    match kind {
        FieldKind::Email if !is_valid_email(value) => ValidationResult::invalid(INVALID_EMAIL),
        FieldKind::TextArea => {
            let length = value.chars().count();
            if length < MESSAGE_MIN_CHARS {
                ValidationResult::invalid(MESSAGE_TOO_SHORT)
            } else if length > MESSAGE_MAX_CHARS {
                ValidationResult::invalid(MESSAGE_TOO_LONG)
            } else {
                ValidationResult::ok()
            }
        }
        _ => ValidationResult::ok(),
    }
}

/// Validates a field of the contact form.
#[must_use]
pub fn validate_field(id: FieldId, raw: &str) -> ValidationResult {
    validate(id.name(), id.kind(), id.is_required(), raw)
}

/// Checks the `local@domain.tld` shape: exactly one `@`, no whitespace, a
/// non-empty local part, and a domain holding a dot with at least one
/// character on each side.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}
