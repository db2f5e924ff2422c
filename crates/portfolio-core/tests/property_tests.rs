//! Property-based tests for the contact form and render models
//!
//! Uses proptest to check the submit cycle against stub relays for arbitrary
//! field values, and that rendering is a pure function of the static tables.

use std::time::Duration;

use portfolio_core::contact::DEFAULT_SEND_TIMEOUT;
use portfolio_core::data::{CONTACT_INFO, CREDENTIALS, PROJECTS};
use portfolio_core::reveal::{StaggerSchedule, CONTACT_ROW, CREDENTIAL_CARD, PROJECT_CARD};
use portfolio_core::view::{contact_rows, education_cards, project_cards};
use portfolio_core::{
    AlwaysFails, AlwaysSucceeds, ContactForm, FieldId, RelayCredentials, Trigger,
    ValidationPolicy, VisibleText, VisualState,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any field value, empty strings included
fn field_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,200}").expect("valid regex")
}

fn trigger_strategy() -> impl Strategy<Value = Trigger> {
    prop_oneof![
        Just(Trigger::Mounted),
        Just(Trigger::BecameVisible),
        Just(Trigger::PointerEnter),
        Just(Trigger::PointerLeave),
    ]
}

fn filled_form(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(FieldId::Name, name);
    form.set_field(FieldId::Email, email);
    form.set_field(FieldId::Message, message);
    form
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A succeeding relay clears every field and acknowledges the visitor
    #[test]
    fn success_clears_and_acknowledges(
        name in field_value_strategy(),
        email in field_value_strategy(),
        message in field_value_strategy(),
    ) {
        let mut form = filled_form(&name, &email, &message);
        let outcome = runtime().block_on(form.submit(
            &AlwaysSucceeds,
            &RelayCredentials::default(),
            ValidationPolicy::AcceptAsIs,
            DEFAULT_SEND_TIMEOUT,
        ));

        prop_assert!(outcome.is_ok());
        prop_assert!(form.submission_acknowledged());
        prop_assert_eq!(form.field(FieldId::Name), "");
        prop_assert_eq!(form.field(FieldId::Email), "");
        prop_assert_eq!(form.field(FieldId::Message), "");
    }

    /// A failing relay leaves every field as typed and never acknowledges
    #[test]
    fn failure_keeps_fields(
        name in field_value_strategy(),
        email in field_value_strategy(),
        message in field_value_strategy(),
    ) {
        let mut form = filled_form(&name, &email, &message);
        let outcome = runtime().block_on(form.submit(
            &AlwaysFails,
            &RelayCredentials::default(),
            ValidationPolicy::AcceptAsIs,
            DEFAULT_SEND_TIMEOUT,
        ));

        prop_assert!(outcome.is_err());
        prop_assert!(!form.submission_acknowledged());
        prop_assert!(form.failure().is_some());
        prop_assert_eq!(form.field(FieldId::Name), name.as_str());
        prop_assert_eq!(form.field(FieldId::Email), email.as_str());
        prop_assert_eq!(form.field(FieldId::Message), message.as_str());
    }

    /// Later siblings never start before earlier ones
    #[test]
    fn stagger_is_monotonic(initial in 0u64..5_000, step in 0u64..5_000, index in 0usize..1_000) {
        let schedule = StaggerSchedule::new(
            Duration::from_millis(initial),
            Duration::from_millis(step),
        );
        prop_assert!(schedule.delay_for(index) <= schedule.delay_for(index + 1));
        prop_assert_eq!(
            schedule.delay_for(index),
            Duration::from_millis(initial + step * index as u64)
        );
    }

    /// No trigger sequence can hover an element before it was revealed
    #[test]
    fn hover_requires_reveal(triggers in prop::collection::vec(trigger_strategy(), 0..30)) {
        for table in [CONTACT_ROW, CREDENTIAL_CARD, PROJECT_CARD] {
            let mut state = VisualState::Hidden;
            let mut revealed = false;
            for trigger in &triggers {
                let next = table.next(state, *trigger);
                if state == VisualState::Hidden && next != VisualState::Hidden {
                    prop_assert_eq!(next, VisualState::Visible);
                    revealed = true;
                }
                state = next;
            }
            prop_assert_eq!(state.is_revealed(), revealed);
        }
    }

    /// Rendering any slice of a table twice yields the same cards, in table order
    #[test]
    fn rendering_is_idempotent(
        credentials in prop::sample::subsequence(CREDENTIALS.to_vec(), 0..=CREDENTIALS.len()),
        projects in Just(PROJECTS.to_vec()).prop_shuffle(),
        rows in prop::sample::subsequence(CONTACT_INFO.to_vec(), 0..=CONTACT_INFO.len()),
    ) {
        let first = education_cards(&credentials);
        prop_assert_eq!(&first, &education_cards(&credentials));
        prop_assert_eq!(first.visible_text().len(), credentials.len() * 4);
        for (card, record) in first.iter().zip(&credentials) {
            prop_assert_eq!(card.title.as_str(), record.title);
        }

        let first = project_cards(&projects);
        prop_assert_eq!(first.visible_text(), project_cards(&projects).visible_text());
        let expected_len: usize = projects.iter().map(|p| 2 + p.tech.len()).sum();
        prop_assert_eq!(first.visible_text().len(), expected_len);
        for (card, record) in first.iter().zip(&projects) {
            prop_assert_eq!(card.title.as_str(), record.title);
            prop_assert_eq!(card.live_link.href.as_str(), record.live_url);
        }

        let first = contact_rows(&rows);
        prop_assert_eq!(&first, &contact_rows(&rows));
        let texts: Vec<&str> = rows.iter().map(|r| r.text).collect();
        prop_assert_eq!(first.visible_text(), texts);
    }
}
