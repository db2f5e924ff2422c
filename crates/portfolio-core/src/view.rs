//! Render models for the sections.
//!
//! Components only map these structs onto markup, so everything a visitor
//! can read is decided here, as a pure function of the static tables.

use std::time::Duration;

use crate::contact::ContactForm;
use crate::data::{ACKNOWLEDGMENT_BODY, ACKNOWLEDGMENT_TITLE};
use crate::records::{AssetHandle, ContactInfoRow, CredentialRecord, IconKind, ProjectRecord};
use crate::reveal::{StaggerSchedule, CONTACT_STAGGER, EDUCATION_STAGGER, PROJECT_STAGGER};

/// Colour scheme, passed explicitly into every section
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Ordered visible strings of a rendered list
pub trait VisibleText {
    fn visible_text(&self) -> Vec<String>;
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CredentialCardView {
    pub title: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub icon: IconKind,
    pub reveal_delay: Duration,
}

pub fn education_cards(records: &[CredentialRecord]) -> Vec<CredentialCardView> {
    staggered(records, EDUCATION_STAGGER, |record, reveal_delay| {
        CredentialCardView {
            title: record.title.to_string(),
            institution: record.institution.to_string(),
            period: record.period.to_string(),
            description: record.description.to_string(),
            icon: record.icon,
            reveal_delay,
        }
    })
}

impl VisibleText for [CredentialCardView] {
    fn visible_text(&self) -> Vec<String> {
        self.iter()
            .flat_map(|card| {
                [
                    card.title.clone(),
                    card.institution.clone(),
                    card.period.clone(),
                    card.description.clone(),
                ]
            })
            .collect()
    }
}

/// An outbound hyperlink; the target is not validated
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LinkView {
    pub href: String,
    pub icon: IconKind,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProjectCardView {
    pub title: String,
    pub description: String,
    pub image: AssetHandle,
    pub tech: Vec<String>,
    pub repo_link: LinkView,
    pub live_link: LinkView,
    pub reveal_delay: Duration,
}

pub fn project_cards(records: &[ProjectRecord]) -> Vec<ProjectCardView> {
    staggered(records, PROJECT_STAGGER, |record, reveal_delay| {
        ProjectCardView {
            title: record.title.to_string(),
            description: record.description.to_string(),
            image: record.image,
            tech: record.tech.iter().map(|t| t.to_string()).collect(),
            repo_link: LinkView {
                href: record.repo_url.to_string(),
                icon: IconKind::Github,
            },
            live_link: LinkView {
                href: record.live_url.to_string(),
                icon: IconKind::ExternalLink,
            },
            reveal_delay,
        }
    })
}

impl VisibleText for [ProjectCardView] {
    fn visible_text(&self) -> Vec<String> {
        self.iter()
            .flat_map(|card| {
                [card.title.clone(), card.description.clone()]
                    .into_iter()
                    .chain(card.tech.iter().cloned())
            })
            .collect()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContactRowView {
    pub icon: IconKind,
    pub text: String,
    pub reveal_delay: Duration,
}

pub fn contact_rows(rows: &[ContactInfoRow]) -> Vec<ContactRowView> {
    staggered(rows, CONTACT_STAGGER, |row, reveal_delay| ContactRowView {
        icon: row.icon,
        text: row.text.to_string(),
        reveal_delay,
    })
}

impl VisibleText for [ContactRowView] {
    fn visible_text(&self) -> Vec<String> {
        self.iter().map(|row| row.text.clone()).collect()
    }
}

/// Heading and body of the thank-you overlay, while it is up
pub fn acknowledgment_overlay(form: &ContactForm) -> Option<[&'static str; 2]> {
    form.submission_acknowledged()
        .then_some([ACKNOWLEDGMENT_TITLE, ACKNOWLEDGMENT_BODY])
}

fn staggered<T, V>(
    items: &[T],
    schedule: StaggerSchedule,
    build: impl Fn(&T, Duration) -> V,
) -> Vec<V> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| build(item, schedule.delay_for(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CONTACT_INFO, CREDENTIALS, PROJECTS};

    #[test]
    fn theme_parse_and_toggle() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::default().class(), "theme-dark");
    }

    #[test]
    fn credential_delays_follow_schedule() {
        let cards = education_cards(CREDENTIALS);
        let delays: Vec<_> = cards.iter().map(|c| c.reveal_delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 300, 600]);
    }

    #[test]
    fn project_links() {
        let cards = project_cards(PROJECTS);
        assert_eq!(
            cards[0].repo_link.href,
            "https://github.com/Prudhvi2k3/Project-K"
        );
        assert_eq!(cards.len(), 5);
        for card in &cards {
            assert!(!card.repo_link.href.is_empty(), "{} has no repo link", card.title);
            assert!(!card.live_link.href.is_empty(), "{} has no live link", card.title);
            assert_eq!(card.live_link.icon, IconKind::ExternalLink);
        }
        // Placeholder targets are passed through untouched
        assert_eq!(cards[2].live_link.href, "#");
    }

    #[test]
    fn contact_row_text() {
        let rows = contact_rows(CONTACT_INFO);
        assert_eq!(rows[1].text, "+91 6305845312");
        assert_eq!(rows[2].reveal_delay, Duration::from_millis(700));
        assert_eq!(rows.visible_text().len(), 3);
    }
}
