//! Response bodies of the HTTP API

use serde::Serialize;

use crate::catalog::{ProjectRecord, ProjectSummary};
use crate::contact::FieldErrors;

pub const VALIDATION_FAILED_MESSAGE: &str = "Please check your form data";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Body returned by `POST /api/contact`
///
/// `errors` is present only for validation failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ContactResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn rejected(errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors: Some(errors),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            success: false,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            errors: None,
        }
    }
}

/// Generic failure body for non-contact routes.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub projects: usize,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse<'a> {
    pub category: String,
    pub search: String,
    pub count: usize,
    pub projects: Vec<&'a ProjectRecord>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse<'a> {
    pub project: &'a ProjectRecord,
    pub next: ProjectSummary,
}
