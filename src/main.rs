#![allow(non_snake_case)]

mod app;
mod assets;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{PortfolioConfig, RelayCredentials, Theme, ValidationPolicy};
use tracing_subscriber::EnvFilter;

/// Global configuration, set from command line
static CONFIG: OnceLock<PortfolioConfig> = OnceLock::new();

/// Get the configuration (set from command line or default)
pub fn get_config() -> PortfolioConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - education, projects and contact
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio with an email-relay contact form")]
struct Args {
    /// Colour theme (light or dark)
    #[arg(long, env = "PORTFOLIO_THEME", default_value = "dark")]
    theme: Theme,

    /// Email relay send endpoint
    #[arg(long, env = "PORTFOLIO_RELAY_ENDPOINT")]
    relay_endpoint: Option<String>,

    /// Relay service id
    #[arg(long, env = "PORTFOLIO_SERVICE_ID")]
    service_id: Option<String>,

    /// Relay template id
    #[arg(long, env = "PORTFOLIO_TEMPLATE_ID")]
    template_id: Option<String>,

    /// Relay public key
    #[arg(long, env = "PORTFOLIO_PUBLIC_KEY")]
    public_key: Option<String>,

    /// Seconds to wait for the relay before reporting a failure
    #[arg(long, env = "PORTFOLIO_SEND_TIMEOUT_SECS", default_value_t = 15)]
    send_timeout_secs: u64,

    /// Seconds before the thank-you overlay closes itself (0 = close button only)
    #[arg(long, env = "PORTFOLIO_ACK_DISMISS_SECS", default_value_t = 4)]
    ack_dismiss_secs: u64,

    /// Refuse to send while a form field is empty
    #[arg(long, env = "PORTFOLIO_REQUIRE_NON_EMPTY")]
    require_non_empty: bool,

    /// Reveal every section on mount instead of when it scrolls into view
    #[arg(long, env = "PORTFOLIO_NO_REVEAL_GATING")]
    no_reveal_gating: bool,
}

impl Args {
    fn into_config(self) -> PortfolioConfig {
        let defaults = PortfolioConfig::default();
        let default_creds = RelayCredentials::default();

        PortfolioConfig {
            theme: self.theme,
            relay_endpoint: self.relay_endpoint.unwrap_or(defaults.relay_endpoint),
            credentials: RelayCredentials {
                service_id: self.service_id.unwrap_or(default_creds.service_id),
                template_id: self.template_id.unwrap_or(default_creds.template_id),
                public_key: self.public_key.unwrap_or(default_creds.public_key),
            },
            send_timeout: Duration::from_secs(self.send_timeout_secs),
            acknowledgment_dismiss: (self.ack_dismiss_secs > 0)
                .then(|| Duration::from_secs(self.ack_dismiss_secs)),
            validation: if self.require_non_empty {
                ValidationPolicy::RequireNonEmpty
            } else {
                ValidationPolicy::AcceptAsIs
            },
            reveal_gating: !self.no_reveal_gating,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();
    config.validate().context("invalid configuration")?;

    tracing::info!(
        theme = ?config.theme,
        endpoint = %config.relay_endpoint,
        "Starting portfolio"
    );

    // Store configuration globally
    let _ = CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
