//! Acknowledgment Overlay Component
//!
//! Full-screen confirmation shown after the relay accepted a message.

use dioxus::prelude::*;

/// Acknowledgment Overlay
///
/// Closed by the close button, a click on the backdrop, or the auto-dismiss
/// timer owned by the contact panel.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AcknowledgmentOverlay {
///         text: acknowledgment_overlay(&form.read()),
///         on_close: move |_| form.write().dismiss(),
///     }
/// }
/// ```
#[component]
pub fn AcknowledgmentOverlay(
    /// Heading and body; `None` hides the overlay
    text: Option<[&'static str; 2]>,
    /// Callback when overlay is closed
    on_close: EventHandler<()>,
) -> Element {
    let Some([title, body]) = text else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "acknowledgment-modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "close-btn",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
                h3 { class: "modal-title", "{title}" }
                p { class: "modal-description", "{body}" }
            }
        }
    }
}
