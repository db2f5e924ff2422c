//! Runtime configuration for the portfolio shell.

use std::time::Duration;

use crate::contact::{ValidationPolicy, DEFAULT_SEND_TIMEOUT};
use crate::error::{PortfolioError, PortfolioResult};
use crate::relay::{RelayCredentials, DEFAULT_RELAY_ENDPOINT};
use crate::view::Theme;

/// How long the thank-you overlay stays up before closing itself
pub const DEFAULT_ACK_DISMISS: Duration = Duration::from_secs(4);

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PortfolioConfig {
    pub theme: Theme,
    pub relay_endpoint: String,
    pub credentials: RelayCredentials,
    pub send_timeout: Duration,
    /// `None` keeps the overlay up until the close button is used
    pub acknowledgment_dismiss: Option<Duration>,
    pub validation: ValidationPolicy,
    /// When false, sections reveal on mount instead of waiting for the viewport
    pub reveal_gating: bool,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            credentials: RelayCredentials::default(),
            send_timeout: DEFAULT_SEND_TIMEOUT,
            acknowledgment_dismiss: Some(DEFAULT_ACK_DISMISS),
            validation: ValidationPolicy::default(),
            reveal_gating: true,
        }
    }
}

impl PortfolioConfig {
    /// Rejects values the relay could never accept
    pub fn validate(&self) -> PortfolioResult<()> {
        if !self.relay_endpoint.starts_with("http://") && !self.relay_endpoint.starts_with("https://")
        {
            return Err(PortfolioError::Config(format!(
                "relay endpoint must be an http(s) URL, got '{}'",
                self.relay_endpoint
            )));
        }
        for (name, value) in [
            ("service id", &self.credentials.service_id),
            ("template id", &self.credentials.template_id),
            ("public key", &self.credentials.public_key),
        ] {
            if value.trim().is_empty() {
                return Err(PortfolioError::Config(format!("relay {} is empty", name)));
            }
        }
        if self.send_timeout.is_zero() {
            return Err(PortfolioError::Config("send timeout must be positive".to_string()));
        }
        Ok(())
    }
}
