//! Education Panel Component
//!
//! Credential cards that cascade in once the section scrolls into view.

use dioxus::prelude::*;
use portfolio_core::data::{CREDENTIALS, EDUCATION_HEADING};
use portfolio_core::reveal::CREDENTIAL_CARD;
use portfolio_core::view::{education_cards, CredentialCardView};
use portfolio_core::{Theme, Trigger, VisualState};

use super::icon::Icon;
use super::reveal::use_staggered_reveal;

pub const EDUCATION_SECTION_ID: &str = "education";

#[component]
pub fn EducationPanel(#[props(default)] theme: Theme) -> Element {
    let cards = education_cards(CREDENTIALS);
    let mut reveal = use_staggered_reveal(EDUCATION_SECTION_ID, CREDENTIAL_CARD, cards.len());

    rsx! {
        section {
            id: EDUCATION_SECTION_ID,
            class: "section education-section {theme.class()}",

            h2 { class: "section-title", "{EDUCATION_HEADING}" }

            div { class: "card-grid card-grid--three",
                for (index, card) in cards.into_iter().enumerate() {
                    CredentialCard {
                        key: "{index}",
                        card: card,
                        state: reveal.state(index),
                        on_pointer: move |trigger| reveal.apply(index, trigger),
                    }
                }
            }
        }
    }
}

/// Single credential card; text is shown verbatim
#[component]
fn CredentialCard(
    card: CredentialCardView,
    state: VisualState,
    on_pointer: EventHandler<Trigger>,
) -> Element {
    let delay = format!("{}ms", card.reveal_delay.as_millis());

    rsx! {
        article {
            class: "credential-card reveal-item reveal-rise {state.class()}",
            style: "--reveal-delay: {delay}",
            onmouseenter: move |_| on_pointer.call(Trigger::PointerEnter),
            onmouseleave: move |_| on_pointer.call(Trigger::PointerLeave),

            Icon { kind: card.icon, class: Some("credential-icon".to_string()) }

            div { class: "credential-body",
                h3 { class: "card-title", "{card.title}" }
                p { class: "credential-institution", "{card.institution}" }
                p { class: "credential-period", "{card.period}" }
                p { class: "card-description", "{card.description}" }
            }
        }
    }
}
