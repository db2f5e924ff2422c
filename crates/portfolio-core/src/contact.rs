//! Contact form state machine.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Acknowledged ──dismiss──▶ Idle
//!                      │
//!                      └──err──▶ Failed ──dismiss──▶ Idle
//!                                  └──submit──▶ Submitting
//! ```
//!
//! Fields can be edited in every phase. A successful send clears them; a
//! failed send leaves them exactly as typed so the visitor can retry.

use std::time::Duration;

use crate::data::field_descriptor;
use crate::error::{PortfolioError, PortfolioResult};
use crate::records::{ContactField, FieldId};
use crate::relay::{EmailRelay, RelayCredentials, TemplateParams};

/// How long a send may take before it counts as failed
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// What the form checks before handing values to the relay
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ValidationPolicy {
    /// Forward whatever was typed, empty strings included
    #[default]
    AcceptAsIs,
    /// Refuse to send while any field is empty or whitespace
    RequireNonEmpty,
}

impl ValidationPolicy {
    pub fn check(&self, params: &TemplateParams) -> PortfolioResult<()> {
        if *self == ValidationPolicy::AcceptAsIs {
            return Ok(());
        }
        for (id, value) in [
            (FieldId::Name, &params.name),
            (FieldId::Email, &params.email),
            (FieldId::Message, &params.message),
        ] {
            if value.trim().is_empty() {
                return Err(PortfolioError::EmptyField(id));
            }
        }
        Ok(())
    }
}

/// Where the form is in its submit cycle
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Waiting on the relay
    Submitting,
    /// Relay accepted; the thank-you overlay is up
    Acknowledged,
    /// Relay refused or timed out; the failure banner is up
    Failed { reason: String },
}

/// Transient input state of the contact panel
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    phase: SubmissionPhase,
    /// Successful sends so far; identifies the current acknowledgment
    acknowledgments: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    /// Keystroke update for one field
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        let value = value.into();
        match id {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Message => self.message = value,
        }
    }

    /// The three fields with their descriptors and current values
    pub fn fields(&self) -> [ContactField; 3] {
        FieldId::ALL.map(|id| {
            let (label, kind, placeholder) = field_descriptor(id);
            ContactField {
                id,
                label,
                kind,
                value: self.field(id).to_string(),
                placeholder,
            }
        })
    }

    pub fn payload(&self) -> TemplateParams {
        TemplateParams {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    pub fn submission_acknowledged(&self) -> bool {
        self.phase == SubmissionPhase::Acknowledged
    }

    /// Identifier of the acknowledgment on screen, if any.
    ///
    /// Each successful send gets a fresh id, so a timer started for one
    /// overlay can tell it apart from a later one.
    pub fn acknowledgment_id(&self) -> Option<u64> {
        self.submission_acknowledged().then_some(self.acknowledgments)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Reason of the last failed send, while the banner is up
    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Moves to `Submitting` and returns the payload to send.
    ///
    /// Leaves the phase untouched when a send is already in flight or the
    /// policy rejects the values.
    pub fn begin_submit(&mut self, policy: ValidationPolicy) -> PortfolioResult<TemplateParams> {
        if self.is_submitting() {
            return Err(PortfolioError::InvalidOperation(
                "a message is already being sent".to_string(),
            ));
        }
        let params = self.payload();
        policy.check(&params)?;

        tracing::debug!(
            name_len = params.name.len(),
            message_len = params.message.len(),
            "submitting contact form"
        );
        self.phase = SubmissionPhase::Submitting;
        Ok(params)
    }

    /// Applies the relay's answer to a send started with [`Self::begin_submit`]
    pub fn complete(&mut self, outcome: PortfolioResult<()>) {
        if !self.is_submitting() {
            tracing::warn!(phase = ?self.phase, "ignoring send result outside of a submission");
            return;
        }
        match outcome {
            Ok(()) => {
                tracing::info!("contact message delivered");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.acknowledgments += 1;
                self.phase = SubmissionPhase::Acknowledged;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to send contact message");
                self.phase = SubmissionPhase::Failed {
                    reason: e.to_string(),
                };
            }
        }
    }

    /// Closes the overlay or the failure banner
    pub fn dismiss(&mut self) {
        if matches!(
            self.phase,
            SubmissionPhase::Acknowledged | SubmissionPhase::Failed { .. }
        ) {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// Closes the overlay only if it is still acknowledgment `id`.
    ///
    /// Returns whether anything was dismissed.
    pub fn dismiss_acknowledgment(&mut self, id: u64) -> bool {
        if self.acknowledgment_id() != Some(id) {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        true
    }

    /// Full submit cycle against `relay`.
    ///
    /// Returns the relay outcome after it has been applied to the form.
    pub async fn submit(
        &mut self,
        relay: &dyn EmailRelay,
        credentials: &RelayCredentials,
        policy: ValidationPolicy,
        timeout: Duration,
    ) -> PortfolioResult<()> {
        let params = self.begin_submit(policy)?;
        let outcome = deliver(relay, credentials, &params, timeout).await;
        self.complete(outcome.clone());
        outcome
    }
}

/// Sends one message, bounded by `timeout`
pub async fn deliver(
    relay: &dyn EmailRelay,
    credentials: &RelayCredentials,
    params: &TemplateParams,
    timeout: Duration,
) -> PortfolioResult<()> {
    match tokio::time::timeout(timeout, relay.send(credentials, params)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(PortfolioError::RelayTimeout(timeout)),
    }
}
