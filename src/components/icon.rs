//! Glyph icons for records and links.

use dioxus::prelude::*;
use portfolio_core::IconKind;

/// Icon badge with an accessible label
#[component]
pub fn Icon(
    kind: IconKind,
    /// Extra CSS classes for the badge
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let extra_class = class.as_deref().unwrap_or("");
    let glyph = kind.glyph();

    rsx! {
        span {
            class: "icon {extra_class}",
            role: "img",
            "aria-label": kind.label(),
            "{glyph}"
        }
    }
}
