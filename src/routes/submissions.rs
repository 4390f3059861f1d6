//! Contact submission routes.
//!
//! Every handler answers with a `{ success, ... }` JSON envelope, except the
//! download route which streams the raw store file. Store failures are
//! logged here and mapped to a status code; they never escape as panics.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::Form;
use axum::extract::{ConnectInfo, FromRequest, Request, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

use crate::services::store::StoreError;
use crate::services::submission::{self, ContactPayload, Submission, SubmissionDraft, unix_millis};
use crate::state::AppState;

pub const MSG_RECEIVED: &str = "Message received successfully!";
pub const MSG_MISSING_FIELDS: &str = "Please fill out all fields";
pub const MSG_SAVE_FAILED: &str = "Error saving your message. Please try again.";
pub const MSG_READ_FAILED: &str = "Error reading submissions";
pub const MSG_DOWNLOAD_FAILED: &str = "Error downloading submissions";
pub const MSG_CLEARED: &str = "All submissions cleared";
pub const MSG_CLEAR_FAILED: &str = "Error clearing submissions";

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: Submission,
}

#[derive(Serialize)]
pub struct SubmissionsResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Value>,
}

// =============================================================================
// BODY EXTRACTOR
// =============================================================================

/// Contact payload decoded from either a JSON body or an HTML form body.
///
/// Decode failures are kept as the rejection text instead of rejecting the
/// request, so the handler can answer with the usual 400 envelope.
pub struct ContactBody(pub Result<ContactPayload, String>);

impl<S> FromRequest<S> for ContactBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let payload = if is_form {
            Form::<ContactPayload>::from_request(req, state)
                .await
                .map(|Form(p)| p)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<ContactPayload>::from_request(req, state)
                .await
                .map(|Json(p)| p)
                .map_err(|rejection| rejection.body_text())
        };
        Ok(Self(payload))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/submit-contact-form`: validate and persist one submission.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    ContactBody(body): ContactBody,
) -> Response {
    let payload = match body {
        Ok(payload) => payload,
        Err(reason) => {
            debug!(%reason, "undecodable contact body");
            return failure(StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS);
        }
    };
    let form = match submission::validate(payload) {
        Ok(form) => form,
        Err(e) => {
            debug!(error = %e, "rejected contact submission");
            return failure(StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS);
        }
    };

    let draft = SubmissionDraft::new(form, addr.ip().to_string(), OffsetDateTime::now_utc());
    match state.store.append(draft).await {
        Ok(appended) => {
            info!(
                email = %appended.submission.email,
                id = appended.submission.id,
                total = appended.total,
                "new submission saved"
            );
            Json(SubmitResponse { success: true, message: MSG_RECEIVED, data: appended.submission }).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to save submission");
            failure(store_error_to_status(&e), MSG_SAVE_FAILED)
        }
    }
}

/// `GET /api/get-submissions`: list every stored submission.
pub async fn get_submissions(State(state): State<AppState>) -> Response {
    match state.store.read_all().await {
        Ok(data) => Json(SubmissionsResponse { success: true, count: data.len(), data }).into_response(),
        Err(e) => {
            error!(error = %e, "failed to read submissions");
            failure(store_error_to_status(&e), MSG_READ_FAILED)
        }
    }
}

/// `GET /api/download-submissions`: the raw store file as an attachment.
pub async fn download_submissions(State(state): State<AppState>) -> Response {
    match state.store.read_raw().await {
        Ok(bytes) => {
            info!(bytes = bytes.len(), "submissions downloaded");
            let filename = download_filename(unix_millis(OffsetDateTime::now_utc()));
            (
                [
                    (CONTENT_TYPE, "application/json".to_owned()),
                    (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to download submissions");
            failure(store_error_to_status(&e), MSG_DOWNLOAD_FAILED)
        }
    }
}

/// `POST /api/clear-submissions`: replace the store with an empty array.
pub async fn clear_submissions(State(state): State<AppState>) -> Response {
    match state.store.clear().await {
        Ok(()) => {
            warn!("all submissions cleared");
            Json(MessageResponse { success: true, message: MSG_CLEARED }).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to clear submissions");
            failure(store_error_to_status(&e), MSG_CLEAR_FAILED)
        }
    }
}

pub(crate) fn download_filename(now_ms: u64) -> String {
    format!("submissions_{now_ms}.json")
}

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Io(_) | StoreError::Json(_) | StoreError::IdsExhausted { .. } | StoreError::WriterPanicked => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        StoreError::WriterClosed => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn failure(status: StatusCode, message: &'static str) -> Response {
    (status, Json(MessageResponse { success: false, message })).into_response()
}

#[cfg(test)]
#[path = "submissions_test.rs"]
mod tests;
