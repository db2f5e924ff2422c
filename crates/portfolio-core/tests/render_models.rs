//! Render model checks against the authored content.

use portfolio_core::data::{CREDENTIALS, PROJECTS};
use portfolio_core::view::{education_cards, project_cards};
use portfolio_core::VisibleText;

#[test]
fn test_education_renders_three_cards_verbatim() {
    let cards = education_cards(CREDENTIALS);
    assert_eq!(cards.len(), 3);

    for (card, record) in cards.iter().zip(CREDENTIALS) {
        assert_eq!(card.title, record.title);
        assert_eq!(card.institution, record.institution);
        assert_eq!(card.period, record.period);
        assert_eq!(card.description, record.description);
    }

    // Double space in the institution name survives untouched
    assert_eq!(
        cards[0].institution,
        "Kakinada Institute of  Engineering and Technology"
    );
}

#[test]
fn test_gallery_renders_five_cards_with_ordered_tags() {
    let cards = project_cards(PROJECTS);
    assert_eq!(cards.len(), 5);

    for (card, record) in cards.iter().zip(PROJECTS) {
        let expected: Vec<String> = record.tech.iter().map(|t| t.to_string()).collect();
        assert_eq!(card.tech, expected);
    }
    assert_eq!(cards[1].tech, vec!["Python", "Flask", "OpenCV", "MedaPipe"]);
}

#[test]
fn test_visible_text_is_stable_between_renders() {
    let first = project_cards(PROJECTS);
    let second = project_cards(PROJECTS);
    assert_eq!(first, second);
    assert_eq!(first.visible_text(), second.visible_text());

    let text = education_cards(CREDENTIALS).visible_text();
    assert_eq!(text.len(), CREDENTIALS.len() * 4);
    assert_eq!(text[0], "Bachelor of Technology");
}

#[test]
fn test_every_project_card_links_repo_and_live_demo() {
    let cards = project_cards(PROJECTS);
    let without_live: Vec<_> = cards
        .iter()
        .filter(|c| c.live_link.href.is_empty())
        .map(|c| c.title.as_str())
        .collect();
    assert!(without_live.is_empty(), "cards without live-demo link: {without_live:?}");

    for (card, record) in cards.iter().zip(PROJECTS) {
        assert_eq!(card.repo_link.href, record.repo_url);
        assert_eq!(card.live_link.href, record.live_url);
    }
}
