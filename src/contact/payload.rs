use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Contact form submission as received from the client
///
/// Every field is optional on the wire; a missing required field is judged
/// as empty by the validator rather than rejected during parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

impl SubmissionPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
            budget: None,
            timeline: None,
        }
    }

    /// Read a submission out of an arbitrary JSON value
    ///
    /// A field that is absent or not a string is left empty, and a value
    /// that is not an object gives an all-empty payload. The validator then
    /// reports those fields instead of the request failing as a whole.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
            budget: field("budget"),
            timeline: field("timeline"),
        }
    }

    /// Parse a raw request body. Only bytes that are not JSON are an error.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }
}

/// A submission that passed validation, with every value trimmed
///
/// Blank `budget`/`timeline` values are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrong_typed_fields_are_left_empty() {
        let payload = SubmissionPayload::from_value(&json!({
            "name": 5,
            "email": "ada@example.org",
            "subject": ["Hello"],
            "message": null,
            "budget": { "min": 10 }
        }));
        assert_eq!(payload.name, None);
        assert_eq!(payload.email.as_deref(), Some("ada@example.org"));
        assert_eq!(payload.subject, None);
        assert_eq!(payload.message, None);
        assert_eq!(payload.budget, None);
    }

    #[test]
    fn test_non_object_body_is_all_empty() {
        let bodies: [&[u8]; 4] = [b"[]", b"42", b"\"text\"", b"null"];
        for body in bodies {
            let payload = SubmissionPayload::from_slice(body).unwrap();
            assert_eq!(payload, SubmissionPayload::default());
        }
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        assert!(SubmissionPayload::from_slice(b"{not json").is_err());
        assert!(SubmissionPayload::from_slice(b"").is_err());
    }
}
