//! Contact Panel Component
//!
//! Static contact details next to a controlled form that forwards messages
//! to the email relay.

use dioxus::prelude::*;
use portfolio_core::contact::deliver;
use portfolio_core::data::{CONTACT_HEADING, CONTACT_INFO, CONTACT_INFO_HEADING};
use portfolio_core::reveal::CONTACT_ROW;
use portfolio_core::view::{acknowledgment_overlay, contact_rows, ContactRowView};
use portfolio_core::{ContactForm, Theme, Trigger, VisualState};

use super::acknowledgment_overlay::AcknowledgmentOverlay;
use super::form_field::FormField;
use super::icon::Icon;
use super::reveal::use_staggered_reveal;
use crate::context::{use_config, use_relay};

pub const CONTACT_SECTION_ID: &str = "contact";

/// Contact Panel
///
/// Contact rows reveal on mount. Submitting runs the relay call on a spawned
/// task; the form stays editable meanwhile and the button shows progress.
/// Success brings up the thank-you overlay, failure a banner with a retry.
#[component]
pub fn ContactPanel(#[props(default)] theme: Theme) -> Element {
    let config = use_config();
    let relay = use_relay();
    let mut form = use_signal(ContactForm::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let rows = contact_rows(CONTACT_INFO);
    let mut reveal = use_staggered_reveal(CONTACT_SECTION_ID, CONTACT_ROW, rows.len());

    // Auto-dismiss the overlay; a timer only closes the acknowledgment it was started for
    let dismiss_after = config.acknowledgment_dismiss;
    let mut dismiss_timer = use_signal(|| Option::<u64>::None);
    use_effect(move || {
        let Some(id) = form.read().acknowledgment_id() else {
            return;
        };
        let Some(delay) = dismiss_after else {
            return;
        };
        if dismiss_timer.peek().as_ref() == Some(&id) {
            return;
        }
        dismiss_timer.set(Some(id));
        spawn(async move {
            tokio::time::sleep(delay).await;
            if form.peek().acknowledgment_id() == Some(id) {
                tracing::debug!(id, "auto-dismissing acknowledgment overlay");
                form.write().dismiss_acknowledgment(id);
            }
        });
    });

    let validation = config.validation;
    let credentials = config.credentials.clone();
    let send_timeout = config.send_timeout;
    let mut send = move || {
        let params = match form.write().begin_submit(validation) {
            Ok(params) => params,
            Err(e) => {
                tracing::warn!("contact form not sent: {}", e);
                notice.set(Some(e.to_string()));
                return;
            }
        };
        notice.set(None);

        let relay = relay.clone();
        let credentials = credentials.clone();
        spawn(async move {
            let outcome = deliver(relay.as_ref(), &credentials, &params, send_timeout).await;
            form.write().complete(outcome);
        });
    };

    let snapshot = form.read().clone();
    let submitting = snapshot.is_submitting();
    let failure = snapshot.failure().map(str::to_string);
    let overlay_text = acknowledgment_overlay(&snapshot);

    rsx! {
        section {
            id: CONTACT_SECTION_ID,
            class: "section contact-section {theme.class()}",

            h2 { class: "section-title", "{CONTACT_HEADING}" }

            div { class: "contact-grid",
                div { class: "contact-info",
                    h3 { class: "section-subtitle", "{CONTACT_INFO_HEADING}" }
                    for (index, row) in rows.into_iter().enumerate() {
                        ContactRow {
                            key: "{index}",
                            row: row,
                            state: reveal.state(index),
                            on_pointer: move |trigger| reveal.apply(index, trigger),
                        }
                    }
                }

                form {
                    class: "contact-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        send();
                    },

                    for (index, field) in snapshot.fields().into_iter().enumerate() {
                        FormField {
                            key: "{index}",
                            index: index,
                            field: field.clone(),
                            oninput: move |value: String| form.write().set_field(field.id, value),
                        }
                    }

                    if let Some(message) = notice() {
                        p { class: "error-text", "\u{26A0} {message}" }
                    }

                    if let Some(reason) = failure {
                        div { class: "failure-banner", role: "alert",
                            span { "Your message could not be sent: {reason}" }
                            div { class: "failure-actions",
                                button {
                                    class: "btn-primary",
                                    r#type: "submit",
                                    "Try again"
                                }
                                button {
                                    class: "btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| form.write().dismiss(),
                                    "Dismiss"
                                }
                            }
                        }
                    }

                    button {
                        class: "btn-submit",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "spinner" }
                            "Sending..."
                        } else {
                            "Send Message"
                        }
                    }
                }
            }

            AcknowledgmentOverlay {
                text: overlay_text,
                on_close: move |_| form.write().dismiss(),
            }
        }
    }
}

/// One line of static contact information
#[component]
fn ContactRow(row: ContactRowView, state: VisualState, on_pointer: EventHandler<Trigger>) -> Element {
    let delay = format!("{}ms", row.reveal_delay.as_millis());

    rsx! {
        div {
            class: "contact-row reveal-item reveal-slide-left {state.class()}",
            style: "--reveal-delay: {delay}",
            onmouseenter: move |_| on_pointer.call(Trigger::PointerEnter),
            onmouseleave: move |_| on_pointer.call(Trigger::PointerLeave),

            Icon { kind: row.icon, class: Some("contact-icon".to_string()) }
            span { class: "contact-text", "{row.text}" }
        }
    }
}
