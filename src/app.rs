use dioxus::prelude::*;

use crate::components::{ContactPanel, EducationPanel, ProjectGallery};
use crate::context::{get_config, make_relay, make_visibility};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the relay and visibility contexts, and mounts the
/// three sections with the current theme.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let mut theme = use_signal(|| config.theme);

    // Provide shared collaborators to all sections
    use_context_provider(|| make_relay(&config));
    use_context_provider(|| make_visibility(&config));
    use_context_provider(|| config.clone());

    let current = theme();
    let toggle_label = match current.toggled() {
        portfolio_core::Theme::Light => "\u{2600} light",
        portfolio_core::Theme::Dark => "\u{263D} dark",
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "portfolio {current.class()}",
            header { class: "site-header",
                button {
                    class: "theme-toggle",
                    onclick: move |_| {
                        let next = theme().toggled();
                        tracing::info!(?next, "switching theme");
                        theme.set(next);
                    },
                    "{toggle_label}"
                }
            }
            EducationPanel { theme: current }
            ProjectGallery { theme: current }
            ContactPanel { theme: current }
        }
    }
}
