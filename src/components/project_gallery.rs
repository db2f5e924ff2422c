//! Project Gallery Component
//!
//! Project cards with an image, technology tags, and repository / live-demo
//! links that slide in while the card is hovered.

use dioxus::prelude::*;
use portfolio_core::data::{PROJECTS, PROJECTS_HEADING};
use portfolio_core::reveal::PROJECT_CARD;
use portfolio_core::view::{project_cards, LinkView, ProjectCardView};
use portfolio_core::{Theme, Trigger, VisualState};

use super::icon::Icon;
use super::reveal::use_staggered_reveal;
use crate::assets::image_uri;

pub const PROJECTS_SECTION_ID: &str = "projects";

#[component]
pub fn ProjectGallery(#[props(default)] theme: Theme) -> Element {
    let cards = project_cards(PROJECTS);
    let mut reveal = use_staggered_reveal(PROJECTS_SECTION_ID, PROJECT_CARD, cards.len());

    rsx! {
        section {
            id: PROJECTS_SECTION_ID,
            class: "section projects-section {theme.class()}",

            h2 { class: "section-title", "{PROJECTS_HEADING}" }

            div { class: "card-grid",
                for (index, card) in cards.into_iter().enumerate() {
                    ProjectCard {
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

#[component]
fn ProjectCard(card: ProjectCardView, state: VisualState, on_pointer: EventHandler<Trigger>) -> Element {
    let delay = format!("{}ms", card.reveal_delay.as_millis());
    let links_class = if state == VisualState::Hovered {
        "project-links revealed"
    } else {
        "project-links"
    };

    rsx! {
        article {
            class: "project-card reveal-item reveal-rise {state.class()}",
            style: "--reveal-delay: {delay}",
            onmouseenter: move |_| on_pointer.call(Trigger::PointerEnter),
            onmouseleave: move |_| on_pointer.call(Trigger::PointerLeave),

            div { class: "project-media",
                img {
                    class: "project-image",
                    src: "{image_uri(card.image)}",
                    alt: "{card.title}",
                }
                div { class: "{links_class}",
                    ProjectLink { link: card.repo_link.clone() }
                    ProjectLink { link: card.live_link.clone() }
                }
            }

            div { class: "project-body",
                h3 { class: "card-title", "{card.title}" }
                p { class: "card-description", "{card.description}" }
                div { class: "tech-tags",
                    for (tag_index, tech) in card.tech.iter().enumerate() {
                        span { key: "{tag_index}", class: "tech-tag", "{tech}" }
                    }
                }
            }
        }
    }
}

/// Plain outbound hyperlink; the target is not checked
#[component]
fn ProjectLink(link: LinkView) -> Element {
    rsx! {
        a {
            class: "project-link",
            href: "{link.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            title: link.icon.label(),
            Icon { kind: link.icon }
        }
    }
}
