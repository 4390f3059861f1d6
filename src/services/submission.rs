//! Contact submission model and intake validation.
//!
//! DESIGN
//! ======
//! Intake is split in two steps. `validate` turns a raw payload into a
//! `ContactForm` with every field present and trimmed; `SubmissionDraft`
//! stamps it with the caller address and the current time. The id is
//! assigned later by the store writer, which is the only place that knows
//! the last persisted id.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

/// Persisted contact-form entry. One element of the store array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Creation time in Unix milliseconds; strictly increasing per store.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    /// ISO-8601 UTC with millisecond precision.
    pub timestamp: String,
    #[serde(rename = "sourceAddress", alias = "ipAddress", default)]
    pub source_address: String,
}

/// Raw request payload. Every field is optional so that a missing field is a
/// validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Validated, trimmed contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Check that name, email and message are present and non-blank.
///
/// # Errors
///
/// Returns `MissingField` naming the first absent or blank field.
pub fn validate(payload: ContactPayload) -> Result<ContactForm, SubmissionError> {
    let name = required("name", payload.name)?;
    let email = required("email", payload.email)?;
    let message = required("message", payload.message)?;
    Ok(ContactForm { name, email, message })
}

fn required(field: &'static str, value: Option<String>) -> Result<String, SubmissionError> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(SubmissionError::MissingField(field)),
    }
}

/// A validated submission waiting for the writer to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub form: ContactForm,
    pub source_address: String,
    pub created_at: OffsetDateTime,
}

impl SubmissionDraft {
    #[must_use]
    pub fn new(form: ContactForm, source_address: impl Into<String>, created_at: OffsetDateTime) -> Self {
        Self { form, source_address: source_address.into(), created_at }
    }

    /// Preferred id for this draft: its creation time in milliseconds.
    #[must_use]
    pub fn created_ms(&self) -> u64 {
        unix_millis(self.created_at)
    }

    /// Finish the record with the id chosen by the writer.
    #[must_use]
    pub fn into_submission(self, id: u64) -> Submission {
        Submission {
            id,
            name: self.form.name,
            email: self.form.email,
            message: self.form.message,
            timestamp: iso_timestamp(self.created_at),
            source_address: self.source_address,
        }
    }
}

/// Pick the id for a new record: creation millis, bumped past `last_id` when
/// the clock has not advanced. `None` once the id space is used up.
#[must_use]
pub fn next_id(created_ms: u64, last_id: Option<u64>) -> Option<u64> {
    match last_id {
        Some(last) if created_ms <= last => last.checked_add(1),
        _ => Some(created_ms),
    }
}

#[must_use]
pub fn unix_millis(at: OffsetDateTime) -> u64 {
    u64::try_from(at.unix_timestamp_nanos() / 1_000_000).unwrap_or(0)
}

/// Format as `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC.
#[must_use]
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.to_offset(time::UtcOffset::UTC)
        .format(&format)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
