//! Context providers for the portfolio sections.
//!
//! The App component provides three values; sections read them with the
//! hooks below instead of reaching for globals.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_config();
//! let relay = use_relay();
//! let observer = use_visibility();
//! ```

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{
    EmailJsRelay, EmailRelay, ImmediateVisibility, PortfolioConfig, VisibilityObserver,
};

/// Relay shared by every contact submission
pub type SharedRelay = Arc<dyn EmailRelay>;

/// Viewport observer shared by the gated sections
pub type SharedVisibility = Rc<dyn VisibilityObserver>;

/// Get the configuration built from command line args.
pub fn get_config() -> PortfolioConfig {
    crate::get_config()
}

pub fn make_relay(config: &PortfolioConfig) -> SharedRelay {
    Arc::new(EmailJsRelay::new(config.relay_endpoint.clone()))
}

pub fn make_visibility(config: &PortfolioConfig) -> SharedVisibility {
    if config.reveal_gating {
        Rc::new(ViewportObserver)
    } else {
        Rc::new(ImmediateVisibility)
    }
}

/// Hook to access the configuration from context.
pub fn use_config() -> PortfolioConfig {
    use_context::<PortfolioConfig>()
}

/// Hook to access the email relay from context.
pub fn use_relay() -> SharedRelay {
    use_context::<SharedRelay>()
}

/// Hook to access the visibility observer from context.
pub fn use_visibility() -> SharedVisibility {
    use_context::<SharedVisibility>()
}

/// Watches an element with an `IntersectionObserver` inside the webview.
///
/// Fires once when at least 10% of the element is on screen. If the element
/// is missing or the script fails, the callback fires anyway so content is
/// never stuck hidden.
pub struct ViewportObserver;

const OBSERVE_SCRIPT: &str = r#"
const target = document.getElementById(TARGET_ID);
if (!target) {
  dioxus.send(false);
} else {
  const observer = new IntersectionObserver((entries) => {
    if (entries.some((entry) => entry.isIntersecting)) {
      observer.disconnect();
      dioxus.send(true);
    }
  }, { threshold: 0.1 });
  observer.observe(target);
}
"#;

impl VisibilityObserver for ViewportObserver {
    fn on_became_visible(&self, target_id: &str, callback: Box<dyn FnOnce() + 'static>) {
        let id_literal = serde_json::to_string(target_id).unwrap_or_else(|_| "\"\"".to_string());
        let script = OBSERVE_SCRIPT.replace("TARGET_ID", &id_literal);
        let target_id = target_id.to_string();

        spawn(async move {
            let mut eval = document::eval(&script);
            match eval.recv::<bool>().await {
                Ok(true) => tracing::debug!(%target_id, "element entered viewport"),
                Ok(false) => tracing::warn!(%target_id, "element not found, revealing anyway"),
                Err(e) => tracing::warn!(%target_id, "viewport observer failed: {:?}", e),
            }
            callback();
        });
    }
}
