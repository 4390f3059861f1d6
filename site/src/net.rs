//! Contact endpoint client.
//!
//! Browser builds send a real request via `gloo-net`. Native builds have no
//! network path and always report failure, which classifies as
//! [`SubmitOutcome::Unreachable`](crate::form::SubmitOutcome::Unreachable).
//!
//! ERROR HANDLING
//! ==============
//! Every failure is flattened to a `String`. The response body is decoded
//! regardless of HTTP status; 4xx/5xx answers carry the same
//! `{ success, message }` envelope.

#![allow(clippy::unused_async)]

use crate::form::{ContactForm, ServerReply};

/// POST the form and decode the reply envelope.
///
/// # Errors
///
/// Returns an error string on transport failure or an undecodable body.
#[cfg_attr(not(feature = "browser"), allow(unused_variables))]
pub async fn post_contact(form: &ContactForm) -> Result<ServerReply, String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::post(crate::consts::SUBMIT_ENDPOINT)
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<ServerReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "browser"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

#[cfg(all(test, not(feature = "browser")))]
#[path = "net_test.rs"]
mod net_test;
