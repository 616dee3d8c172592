//! Field validation
//!
//! Optional fields are not checked. Required fields must be non-empty after
//! trimming and pass the check for their kind:
//! - `email`: `local@domain.tld`, no whitespace, exactly one `@` per part
//! - `url`: parses as an absolute URL
//! - `tel`: digits, spaces, `+`, `-` and parentheses, at least 9 digits
//!
//! Failing fields are flagged on the form so a renderer can mark them.

use crate::field::{Field, FieldKind};
use crate::form::Form;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern compiles"));

/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 9;

/// Why a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueReason {
    /// Required but blank
    Missing,
    /// Not an e-mail address
    InvalidEmail,
    /// Not an absolute URL
    InvalidUrl,
    /// Not a phone number
    InvalidPhone,
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IssueReason::Missing => "required",
            IssueReason::InvalidEmail => "invalid email",
            IssueReason::InvalidUrl => "invalid url",
            IssueReason::InvalidPhone => "invalid phone",
        };
        f.write_str(text)
    }
}

/// One failing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name
    pub field: String,
    /// Failure
    pub reason: IssueReason,
}

/// Validation rejected the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", issues.len())]
pub struct ValidationError {
    /// Failing fields in document order
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Names of failing fields
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.field.as_str()).collect()
    }

    /// Check if a field failed
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

/// Check an e-mail address
#[inline]
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Check an absolute URL
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Check a phone number
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Check a single field
///
/// Only required fields are checked; optional fields always pass.
pub fn check_field(field: &Field) -> Result<(), IssueReason> {
    if !field.required {
        return Ok(());
    }
    let value = field.trimmed();
    if value.is_empty() {
        return Err(IssueReason::Missing);
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => Err(IssueReason::InvalidEmail),
        FieldKind::Url if !is_valid_url(value) => Err(IssueReason::InvalidUrl),
        FieldKind::Tel if !is_valid_phone(value) => Err(IssueReason::InvalidPhone),
        _ => Ok(()),
    }
}

/// Validate a whole form, clearing old flags and flagging failures
pub fn validate(form: &mut Form) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    for field in form.fields_mut() {
        field.flagged = false;
        if let Err(reason) = check_field(field) {
            field.flagged = true;
            issues.push(FieldIssue {
                field: field.name.clone(),
                reason,
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        tracing::debug!(form = %form.form_type(), count = issues.len(), "validation failed");
        Err(ValidationError { issues })
    }
}
