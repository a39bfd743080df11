//! Submit coordinator: one request per submit, two ways to fail.
//!
//! DESIGN
//! ======
//! The transport is a trait so the browser (`gloo-net`) and the CLI
//! (`reqwest`) share the same request/response interpretation. Transports only
//! report the HTTP status or a transport failure; the response body is never
//! read. The trait is `?Send` because browser futures are not `Send`.
//!
//! ERROR HANDLING
//! ==============
//! `RequestRejected` and `RequestFailed` render the same way today but stay
//! separate variants so messaging can diverge without restructuring callers.

use crate::form::VehicleForm;
use crate::{DraftField, VehiclePayload};

pub const SUCCESS_TEXT: &str = "Car added successfully!";
pub const REJECTED_TEXT: &str = "Failed to add car.";
pub const FAILED_TEXT: &str = "Error submitting form.";

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Why a submit did not end in success.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Required fields were empty; no request was issued.
    #[error("missing required field(s): {}", join_fields(.0))]
    MissingRequired(Vec<DraftField>),

    /// Another submit is still waiting on its response; no request was issued.
    #[error("a submit is already in flight")]
    AlreadySubmitting,

    /// The server answered with a non-2xx status.
    #[error("server rejected the vehicle: status {status}")]
    RequestRejected { status: u16 },

    /// The request could not be completed.
    #[error("request failed: {0}")]
    RequestFailed(String),
}

impl SubmitError {
    /// Text shown in the status banner, if this error resolves a request.
    #[must_use]
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::RequestRejected { .. } => Some(REJECTED_TEXT),
            Self::RequestFailed(_) => Some(FAILED_TEXT),
            Self::MissingRequired(_) | Self::AlreadySubmitting => None,
        }
    }
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sends a create payload and reports the response status.
#[async_trait::async_trait(?Send)]
pub trait VehicleTransport {
    /// `POST /api/vehicles` with `payload` as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no HTTP response was received.
    async fn create_vehicle(&self, payload: &VehiclePayload) -> Result<u16, TransportError>;
}

/// Map a transport result onto the submit outcome. Any 2xx is success.
///
/// # Errors
///
/// Returns `RequestRejected` for non-2xx statuses and `RequestFailed` for
/// transport errors.
pub fn classify_response(result: Result<u16, TransportError>) -> Result<(), SubmitError> {
    match result {
        Ok(status) if (200..300).contains(&status) => Ok(()),
        Ok(status) => Err(SubmitError::RequestRejected { status }),
        Err(e) => Err(SubmitError::RequestFailed(e.0)),
    }
}

/// Run one full submit cycle against `transport`.
///
/// On success the form is reset; on failure the draft is kept. The status
/// message is updated only when a request was actually issued.
///
/// # Errors
///
/// Returns the [`SubmitError`] that ended the cycle.
pub async fn submit<T>(form: &mut VehicleForm, transport: &T) -> Result<(), SubmitError>
where
    T: VehicleTransport + ?Sized,
{
    let payload = form.begin_submit()?;
    let result = transport.create_vehicle(&payload).await;
    form.finish_submit(result)
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
