//! Contact form payload, validation and submit outcomes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The DOM layer reads the three inputs, calls [`ContactForm::from_inputs`],
//! posts the form, and hands the result to [`SubmitOutcome::from_reply`].
//! The outcome then decides both the banner and the local echo entry, so
//! every submit attempt produces exactly one of each.

use serde::{Deserialize, Serialize};

use crate::toast::{Toast, ToastKind};

pub const MISSING_FIELDS_ALERT: &str = "Please fill out all fields";
pub const SENT_MESSAGE: &str = "Message sent successfully! ✅";
pub const OFFLINE_MESSAGE: &str = "Message saved locally (Server not connected)";

/// Body of the contact POST, and the local echo shape when the server did
/// not store it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("please fill out all fields")]
    MissingFields,
}

impl ContactForm {
    /// Build a form from raw input values. Values are sent as typed; the
    /// server trims them.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` if any value is empty or whitespace.
    pub fn from_inputs(name: &str, email: &str, message: &str) -> Result<Self, FormError> {
        if [name, email, message].iter().any(|v| v.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        Ok(Self { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }
}

/// Record returned by the server on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSubmission {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
    #[serde(rename = "sourceAddress", alias = "ipAddress", default)]
    pub source_address: String,
}

/// JSON envelope of a submit response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SavedSubmission>,
}

/// What happened to one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server stored the record.
    Accepted(SavedSubmission),
    /// Server answered but refused or failed to store.
    Rejected(String),
    /// No usable answer: network failure or an undecodable body.
    Unreachable,
}

impl SubmitOutcome {
    /// Classify a network result. `Err` covers both transport errors and
    /// bodies that are not a reply envelope.
    pub fn from_reply(reply: Result<ServerReply, String>) -> Self {
        match reply {
            Ok(ServerReply { success: true, data: Some(record), .. }) => Self::Accepted(record),
            Ok(ServerReply { success: true, data: None, .. }) => Self::Unreachable,
            Ok(ServerReply { success: false, message, .. }) => {
                Self::Rejected(message.unwrap_or_else(|| "Unknown error".to_owned()))
            }
            Err(_) => Self::Unreachable,
        }
    }

    /// Banner to show for this outcome.
    pub fn toast(&self) -> Toast {
        match self {
            Self::Accepted(_) => Toast::new(ToastKind::Success, SENT_MESSAGE),
            Self::Rejected(message) => Toast::new(ToastKind::Error, format!("Error: {message}")),
            Self::Unreachable => Toast::new(ToastKind::Warning, OFFLINE_MESSAGE),
        }
    }

    /// Local echo entry for this outcome: the stored record when there is
    /// one, otherwise the payload as submitted.
    pub fn echo_entry(&self, form: &ContactForm) -> EchoEntry {
        match self {
            Self::Accepted(record) => EchoEntry::Saved(record.clone()),
            Self::Rejected(_) | Self::Unreachable => EchoEntry::Local(form.clone()),
        }
    }
}

/// One element of the local echo array.
///
/// Unknown shapes are preserved as raw JSON so a foreign entry never makes
/// the rest of the list unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EchoEntry {
    Saved(SavedSubmission),
    Local(ContactForm),
    Other(serde_json::Value),
}

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;
