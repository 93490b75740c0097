//! Field-level validation of contact form submissions
//!
//! Every rule is evaluated on every call, so a rejected submission reports
//! all of its problems at once. Lengths are measured on trimmed values in
//! Unicode scalar values.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use super::payload::{NormalizedPayload, SubmissionPayload};

// local@domain, domain made of dot-separated labels with at least one dot
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("Invalid regex pattern")
});

pub const NAME_LENGTH: LengthRule = LengthRule { min: 2, max: 100 };
pub const SUBJECT_LENGTH: LengthRule = LengthRule { min: 5, max: 200 };
pub const MESSAGE_LENGTH: LengthRule = LengthRule { min: 10, max: 2000 };

/// Inclusive character-count bounds for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub min: usize,
    pub max: usize,
}

impl LengthRule {
    pub fn check(&self, value: &str) -> Option<FieldViolation> {
        let len = value.chars().count();
        if len < self.min {
            Some(FieldViolation::TooShort { min: self.min })
        } else if len > self.max {
            Some(FieldViolation::TooLong { max: self.max })
        } else {
            None
        }
    }
}

/// Submission fields that carry rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidFormat,
}

impl FieldViolation {
    /// Message shown next to the offending form field.
    pub fn message(&self, field: ContactField) -> String {
        match self {
            FieldViolation::TooShort { min } => {
                format!("{} must be at least {} characters", field.label(), min)
            }
            FieldViolation::TooLong { max } => {
                format!("{} must be at most {} characters", field.label(), max)
            }
            FieldViolation::InvalidFormat => match field {
                ContactField::Email => "Please enter a valid email address".to_string(),
                _ => format!("{} has an invalid format", field.label()),
            },
        }
    }
}

/// Every violated field of a rejected submission
///
/// Never empty when returned from [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    violations: BTreeMap<ContactField, FieldViolation>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: ContactField, violation: FieldViolation) {
        self.violations.insert(field, violation);
    }

    pub fn get(&self, field: ContactField) -> Option<FieldViolation> {
        self.violations.get(&field).copied()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.violations.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldViolation)> + '_ {
        self.violations.iter().map(|(f, v)| (*f, *v))
    }

    /// Field name to human-readable message, as sent to the client.
    pub fn messages(&self) -> BTreeMap<ContactField, String> {
        self.iter()
            .map(|(field, violation)| (field, violation.message(field)))
            .collect()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, violation)| format!("{}: {}", field, violation.message(field)))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

fn optional_trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

/// Validate a submission
///
/// # Arguments
///
/// * `payload` - Submission as received; missing fields count as empty
///
/// # Returns
///
/// The trimmed submission, or one violation per failing field
pub fn validate(payload: &SubmissionPayload) -> Result<NormalizedPayload, FieldErrors> {
    let name = trimmed(&payload.name);
    let email = trimmed(&payload.email);
    let subject = trimmed(&payload.subject);
    let message = trimmed(&payload.message);

    let mut errors = FieldErrors::default();

    if let Some(violation) = NAME_LENGTH.check(name) {
        errors.insert(ContactField::Name, violation);
    }
    if !is_valid_email(email) {
        errors.insert(ContactField::Email, FieldViolation::InvalidFormat);
    }
    if let Some(violation) = SUBJECT_LENGTH.check(subject) {
        errors.insert(ContactField::Subject, violation);
    }
    if let Some(violation) = MESSAGE_LENGTH.check(message) {
        errors.insert(ContactField::Message, violation);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NormalizedPayload {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
        budget: optional_trimmed(&payload.budget),
        timeline: optional_trimmed(&payload.timeline),
    })
}
