//! Email relay collaborator.
//!
//! The contact form never talks to a mail server. It hands three template
//! parameters to a hosted relay (EmailJS) and only looks at whether the
//! relay said yes or no.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::{PortfolioError, PortfolioResult};

/// EmailJS REST endpoint
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Fixed identifiers the relay needs; not user input
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key (sent as `user_id`)
    pub public_key: String,
}

impl Default for RelayCredentials {
    fn default() -> Self {
        Self {
            service_id: "service_come8lh".to_string(),
            template_id: "template_x2k0qja".to_string(),
            public_key: "neVplf6b15Pacpgs-".to_string(),
        }
    }
}

/// Values substituted into the relay's email template
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Anything that can deliver a contact message
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> PortfolioResult<()>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// HTTP client for the EmailJS send API
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> PortfolioResult<serde_json::Value> {
        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        };
        serde_json::to_value(&request)
            .map_err(|e| PortfolioError::SubmissionFailed(format!("encode request: {}", e)))
    }
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_ENDPOINT)
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> PortfolioResult<()> {
        let body = Self::request_body(credentials, params)?;

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        if status.is_success() {
            tracing::info!(status = status.as_u16(), "email relay accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(PortfolioError::RelayRejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Relay that accepts every message
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysSucceeds;

#[async_trait]
impl EmailRelay for AlwaysSucceeds {
    async fn send(
        &self,
        _credentials: &RelayCredentials,
        _params: &TemplateParams,
    ) -> PortfolioResult<()> {
        Ok(())
    }
}

/// Relay that rejects every message
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysFails;

#[async_trait]
impl EmailRelay for AlwaysFails {
    async fn send(
        &self,
        _credentials: &RelayCredentials,
        _params: &TemplateParams,
    ) -> PortfolioResult<()> {
        Err(PortfolioError::SubmissionFailed("relay unavailable".to_string()))
    }
}

/// Relay that records every payload and replays scripted outcomes
#[derive(Default)]
pub struct RecordingRelay {
    sent: Mutex<Vec<TemplateParams>>,
    outcomes: Mutex<Vec<PortfolioResult<()>>>,
}

impl RecordingRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next send; sends succeed once the queue is empty
    pub fn push_outcome(&self, outcome: PortfolioResult<()>) {
        self.outcomes.lock().unwrap_or_else(|e| e.into_inner()).push(outcome);
    }

    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl EmailRelay for RecordingRelay {
    async fn send(
        &self,
        _credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> PortfolioResult<()> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(params.clone());

        let mut outcomes = self.outcomes.lock().unwrap_or_else(|e| e.into_inner());
        if outcomes.is_empty() {
            Ok(())
        } else {
            outcomes.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_emailjs_field_names() {
        let params = TemplateParams {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            message: "Hello".to_string(),
        };
        let body = EmailJsRelay::request_body(&RelayCredentials::default(), &params).unwrap();

        assert_eq!(body["service_id"], "service_come8lh");
        assert_eq!(body["template_id"], "template_x2k0qja");
        assert_eq!(body["user_id"], "neVplf6b15Pacpgs-");
        assert_eq!(body["template_params"]["name"], "Ada");
        assert_eq!(body["template_params"]["email"], "ada@x.com");
        assert_eq!(body["template_params"]["message"], "Hello");
    }

    #[test]
    fn default_endpoint() {
        assert_eq!(EmailJsRelay::default().endpoint(), DEFAULT_RELAY_ENDPOINT);
    }

    #[tokio::test]
    async fn recording_relay_replays_outcomes() {
        let relay = RecordingRelay::new();
        relay.push_outcome(Err(PortfolioError::Network("offline".to_string())));
        let creds = RelayCredentials::default();
        let params = TemplateParams::default();

        assert!(relay.send(&creds, &params).await.is_err());
        assert!(relay.send(&creds, &params).await.is_ok());
        assert_eq!(relay.sent().len(), 2);
    }

    #[tokio::test]
    async fn stub_relays() {
        let creds = RelayCredentials::default();
        let params = TemplateParams::default();
        assert!(AlwaysSucceeds.send(&creds, &params).await.is_ok());
        assert!(AlwaysFails.send(&creds, &params).await.is_err());
    }
}
