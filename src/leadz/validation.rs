//! Field validation for the lead form.
//!
//! Every check trims its input first, then applies one rule:
//! - name: required, at most 100 characters
//! - phone: required, 7-20 of digits, whitespace, `-`, `(`, `)`, `+`, `.`
//! - source / status: required (membership in the allowed set is enforced by
//!   whatever UI offers the choices, not here)
//!
//! [`validate_form`] runs all four and reports every failure at once.

use crate::model::LeadForm;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MAX_CHARS: usize = 100;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-()+.]{7,20}$").expect("phone pattern is valid"));

/// Outcome of checking a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub valid: bool,
    pub message: String,
}

impl FieldCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Source,
    Status,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Phone => write!(f, "phone"),
            Field::Source => write!(f, "source"),
            Field::Status => write!(f, "status"),
        }
    }
}

pub fn validate_name(value: &str) -> FieldCheck {
    let value = value.trim();
    if value.is_empty() {
        return FieldCheck::fail("Name is required");
    }
    if value.chars().count() > NAME_MAX_CHARS {
        return FieldCheck::fail(format!(
            "Name is too long (max {} characters)",
            NAME_MAX_CHARS
        ));
    }
    FieldCheck::ok()
}

pub fn validate_phone(value: &str) -> FieldCheck {
    let value = value.trim();
    if value.is_empty() {
        return FieldCheck::fail("Phone is required");
    }
    if !PHONE_PATTERN.is_match(value) {
        return FieldCheck::fail("Phone must be 7-20 characters: digits, spaces, - ( ) + .");
    }
    FieldCheck::ok()
}

pub fn validate_source(value: &str) -> FieldCheck {
    if value.trim().is_empty() {
        return FieldCheck::fail("Please select a source");
    }
    FieldCheck::ok()
}

pub fn validate_status(value: &str) -> FieldCheck {
    if value.trim().is_empty() {
        return FieldCheck::fail("Please select a status");
    }
    FieldCheck::ok()
}

/// Result of validating the whole form: one check per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    pub name: FieldCheck,
    pub phone: FieldCheck,
    pub source: FieldCheck,
    pub status: FieldCheck,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.name.valid && self.phone.valid && self.source.valid && self.status.valid
    }

    /// Failing fields with their messages, in form order.
    pub fn errors(&self) -> Vec<(Field, &str)> {
        [
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Source, &self.source),
            (Field::Status, &self.status),
        ]
        .into_iter()
        .filter(|(_, check)| !check.valid)
        .map(|(field, check)| (field, check.message.as_str()))
        .collect()
    }
}

/// Checks all four fields. Never stops at the first failure.
pub fn validate_form(form: &LeadForm) -> FormValidation {
    FormValidation {
        name: validate_name(&form.name),
        phone: validate_phone(&form.phone),
        source: validate_source(&form.source),
        status: validate_status(&form.status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_required() {
        assert_eq!(validate_name(""), FieldCheck::fail("Name is required"));
        assert!(!validate_name("   \t").valid);
    }

    #[test]
    fn name_length_limit_counts_characters() {
        assert!(validate_name(&"a".repeat(100)).valid);
        assert!(!validate_name(&"a".repeat(101)).valid);
        // 100 two-byte characters are still 100 characters
        assert!(validate_name(&"é".repeat(100)).valid);
    }

    #[test]
    fn name_is_trimmed_before_length_check() {
        let padded = format!("  {}  ", "a".repeat(100));
        assert!(validate_name(&padded).valid);
    }

    #[test]
    fn valid_phones() {
        assert!(validate_phone("555-1234567").valid);
        assert!(validate_phone("+1 (555) 123.4567").valid);
        assert!(validate_phone("  5551234  ").valid);
    }

    #[test]
    fn phone_length_bounds() {
        assert!(!validate_phone("123456").valid);
        assert!(validate_phone("1234567").valid);
        assert!(validate_phone(&"1".repeat(20)).valid);
        assert!(!validate_phone(&"1".repeat(21)).valid);
    }

    #[test]
    fn phone_rejects_letters_and_symbols() {
        assert!(!validate_phone("555-CALL-NOW").valid);
        assert!(!validate_phone("555#1234567").valid);
        assert_eq!(validate_phone("").message, "Phone is required");
    }

    #[test]
    fn selects_require_a_value() {
        assert_eq!(validate_source(" ").message, "Please select a source");
        assert_eq!(validate_status("").message, "Please select a status");
        assert!(validate_source("anything-goes").valid);
        assert!(validate_status("qualified").valid);
    }

    #[test]
    fn form_reports_every_failure() {
        let result = validate_form(&LeadForm::default());
        assert!(!result.is_valid());
        let fields: Vec<Field> = result.errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Phone, Field::Source, Field::Status]
        );
    }

    #[test]
    fn form_passes_when_all_fields_pass() {
        let form = LeadForm::new("Jo Smith", "555-1234567", "web", "new");
        let result = validate_form(&form);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn form_with_one_bad_field() {
        let form = LeadForm::new("Jo Smith", "abc", "web", "new");
        let result = validate_form(&form);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].0, Field::Phone);
    }
}
