//! Hand-off of accepted submissions to whatever sends them on
//!
//! Sending email is outside this crate. The server only needs something
//! that accepts a [`NormalizedPayload`]; [`LogDelivery`] records it in the
//! log so the site works without any mail provider configured.

use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

use super::payload::NormalizedPayload;
use crate::error::{Error, Result};

const NOT_SPECIFIED: &str = "Not specified";

#[async_trait]
pub trait ContactDelivery: Send + Sync {
    async fn deliver(&self, submission: &NormalizedPayload) -> Result<()>;
}

/// Writes each submission to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDelivery;

#[async_trait]
impl ContactDelivery for LogDelivery {
    async fn deliver(&self, submission: &NormalizedPayload) -> Result<()> {
        info!(
            email = %submission.email,
            subject = %submission.subject,
            "Contact form submission received"
        );
        tracing::debug!("{}", render_notification(submission));
        Ok(())
    }
}

/// Keeps submissions in memory; used by tests to observe what was handed off.
#[derive(Debug, Default)]
pub struct MemoryDelivery {
    delivered: Mutex<Vec<NormalizedPayload>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> Vec<NormalizedPayload> {
        self.delivered
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContactDelivery for MemoryDelivery {
    async fn deliver(&self, submission: &NormalizedPayload) -> Result<()> {
        self.delivered
            .lock()
            .map_err(|_| Error::Delivery("submission store poisoned".to_string()))?
            .push(submission.clone());
        Ok(())
    }
}

/// Always fails; exercises the internal-error path of the contact route.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingDelivery;

#[async_trait]
impl ContactDelivery for FailingDelivery {
    async fn deliver(&self, _submission: &NormalizedPayload) -> Result<()> {
        Err(Error::Delivery("delivery unavailable".to_string()))
    }
}

/// Subject line for the notification sent to the site owner.
pub fn notification_subject(submission: &NormalizedPayload) -> String {
    format!("New Contact Form Submission: {}", submission.subject)
}

/// Plain-text notification body for a submission.
pub fn render_notification(submission: &NormalizedPayload) -> String {
    format!(
        "{}\n\nName: {}\nEmail: {}\nSubject: {}\nBudget: {}\nTimeline: {}\n\nMessage:\n{}\n",
        notification_subject(submission),
        submission.name,
        submission.email,
        submission.subject,
        submission.budget.as_deref().unwrap_or(NOT_SPECIFIED),
        submission.timeline.as_deref().unwrap_or(NOT_SPECIFIED),
        submission.message,
    )
}
