//! Form state holder: the draft car entry, the status banner, and the submit
//! phase.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser page keeps one `VehicleForm` inside a signal and the CLI keeps
//! one on the stack. Both drive it through `set_field`, then either the
//! all-in-one `submit::submit` or the split `begin_submit` / `finish_submit`
//! pair when the request must be spawned separately.
//!
//! DESIGN
//! ======
//! `begin_submit` moves Idle -> Submitting and hands out the payload;
//! `finish_submit` moves back to Idle. A second `begin_submit` while
//! Submitting is refused, so at most one request is in flight.

use crate::submit::{SUCCESS_TEXT, SubmitError, TransportError, classify_response};
use crate::{DraftField, VehicleDraft, VehiclePayload};

/// Tone of the status banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    None,
    Success,
    Error,
}

impl MessageKind {
    /// CSS modifier used by the banner.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient feedback from the last resolved submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }

    /// The banner is only shown when there is text.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Draft entry plus status message, owned by a single controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VehicleForm {
    draft: VehicleDraft,
    message: StatusMessage,
    phase: SubmitPhase,
}

impl VehicleForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &VehicleDraft {
        &self.draft
    }

    #[must_use]
    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Replace one field of the draft, leaving the rest untouched.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft = self.draft.with_field(field, value);
    }

    /// Restore the canonical empty draft.
    pub fn reset(&mut self) {
        self.draft = VehicleDraft::default();
    }

    /// Validate the draft and enter the Submitting phase.
    ///
    /// # Errors
    ///
    /// Returns `AlreadySubmitting` if a request is in flight and
    /// `MissingRequired` if VIN, make or model is empty. Neither touches the
    /// status message.
    pub fn begin_submit(&mut self) -> Result<VehiclePayload, SubmitError> {
        if self.is_submitting() {
            tracing::debug!("submit ignored; request already in flight");
            return Err(SubmitError::AlreadySubmitting);
        }
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            tracing::debug!(?missing, "submit blocked by empty required fields");
            return Err(SubmitError::MissingRequired(missing));
        }
        self.phase = SubmitPhase::Submitting;
        tracing::debug!(vin = %self.draft.vin, "submitting car");
        Ok(VehiclePayload::car(self.draft.clone()))
    }

    /// Apply the result of the request started by [`Self::begin_submit`].
    ///
    /// # Errors
    ///
    /// Returns `RequestRejected` or `RequestFailed`; the draft is kept and an
    /// error message is set in both cases.
    pub fn finish_submit(&mut self, result: Result<u16, TransportError>) -> Result<(), SubmitError> {
        self.phase = SubmitPhase::Idle;
        match classify_response(result) {
            Ok(()) => {
                tracing::info!(vin = %self.draft.vin, "car added");
                self.message = StatusMessage::success(SUCCESS_TEXT);
                self.reset();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "car submit failed");
                if let Some(text) = e.user_message() {
                    self.message = StatusMessage::error(text);
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
