//! Contact form submission pipeline
//!
//! `validate` turns a raw [`SubmissionPayload`] into either a
//! [`NormalizedPayload`] or a [`FieldErrors`] map; accepted submissions are
//! passed to a [`ContactDelivery`] implementation.

pub mod delivery;
pub mod payload;
pub mod validator;

pub use delivery::{ContactDelivery, FailingDelivery, LogDelivery, MemoryDelivery};
pub use payload::{NormalizedPayload, SubmissionPayload};
pub use validator::{validate, ContactField, FieldErrors, FieldViolation};
