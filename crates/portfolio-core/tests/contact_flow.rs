//! End-to-end submit cycles against scripted relays.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use portfolio_core::contact::{deliver, DEFAULT_SEND_TIMEOUT};
use portfolio_core::view::acknowledgment_overlay;
use portfolio_core::{
    AlwaysSucceeds, ContactForm, EmailRelay, FieldId, PortfolioError, PortfolioResult,
    RecordingRelay, RelayCredentials, SubmissionPhase, TemplateParams, ValidationPolicy,
};

/// Relay that never answers within any reasonable window
struct StalledRelay;

#[async_trait]
impl EmailRelay for StalledRelay {
    async fn send(
        &self,
        _credentials: &RelayCredentials,
        _params: &TemplateParams,
    ) -> PortfolioResult<()> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}

fn ada() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(FieldId::Name, "Ada");
    form.set_field(FieldId::Email, "ada@x.com");
    form.set_field(FieldId::Message, "Hello");
    form
}

#[tokio::test]
async fn test_successful_submission_shows_thank_you() {
    let mut form = ada();
    assert_eq!(acknowledgment_overlay(&form), None);

    form.submit(
        &AlwaysSucceeds,
        &RelayCredentials::default(),
        ValidationPolicy::AcceptAsIs,
        DEFAULT_SEND_TIMEOUT,
    )
    .await
    .unwrap();

    assert!(form.submission_acknowledged());
    let [title, body] = acknowledgment_overlay(&form).unwrap();
    assert!(title.contains("Thank you for contacting Me!"));
    assert_eq!(body, "I'll get back to you as soon as possible.");
    assert_eq!(form.name, "");
    assert_eq!(form.email, "");
    assert_eq!(form.message, "");
}

#[tokio::test]
async fn test_relay_receives_exact_fields() {
    let relay = RecordingRelay::new();
    let mut form = ada();

    form.submit(
        &relay,
        &RelayCredentials::default(),
        ValidationPolicy::AcceptAsIs,
        DEFAULT_SEND_TIMEOUT,
    )
    .await
    .unwrap();

    assert_eq!(
        relay.sent(),
        vec![TemplateParams {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            message: "Hello".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_retry_after_failure() {
    let relay = RecordingRelay::new();
    relay.push_outcome(Err(PortfolioError::RelayRejected {
        status: 429,
        body: "quota exceeded".to_string(),
    }));
    let creds = RelayCredentials::default();
    let mut form = ada();

    let first = form
        .submit(&relay, &creds, ValidationPolicy::AcceptAsIs, DEFAULT_SEND_TIMEOUT)
        .await;
    assert!(first.is_err());
    assert!(matches!(form.phase(), SubmissionPhase::Failed { .. }));
    assert_eq!(form.name, "Ada");

    // Retry straight from the failure banner
    form.submit(&relay, &creds, ValidationPolicy::AcceptAsIs, DEFAULT_SEND_TIMEOUT)
        .await
        .unwrap();
    assert!(form.submission_acknowledged());
    assert_eq!(relay.sent().len(), 2);
    assert_eq!(relay.sent()[0], relay.sent()[1]);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_relay_times_out() {
    let mut form = ada();
    let timeout = Duration::from_secs(15);

    let outcome = form
        .submit(
            &StalledRelay,
            &RelayCredentials::default(),
            ValidationPolicy::AcceptAsIs,
            timeout,
        )
        .await;

    assert_eq!(outcome, Err(PortfolioError::RelayTimeout(timeout)));
    assert!(form.failure().is_some());
    assert_eq!(form.message, "Hello");
}

#[tokio::test]
async fn test_required_fields_never_reach_relay() {
    let relay = RecordingRelay::new();
    let mut form = ContactForm::new();
    form.set_field(FieldId::Name, "Ada");

    let outcome = form
        .submit(
            &relay,
            &RelayCredentials::default(),
            ValidationPolicy::RequireNonEmpty,
            DEFAULT_SEND_TIMEOUT,
        )
        .await;

    assert_eq!(outcome, Err(PortfolioError::EmptyField(FieldId::Email)));
    assert!(relay.sent().is_empty());
    assert_eq!(form.phase(), &SubmissionPhase::Idle);
}

#[tokio::test]
async fn test_split_submit_matches_ui_flow() {
    // The UI begins the submit, sends on a spawned task, then completes
    let relay = RecordingRelay::new();
    let creds = RelayCredentials::default();
    let mut form = ada();

    let params = form.begin_submit(ValidationPolicy::AcceptAsIs).unwrap();
    form.set_field(FieldId::Message, "Hello again");
    assert!(form.is_submitting());

    let outcome = deliver(&relay, &creds, &params, DEFAULT_SEND_TIMEOUT).await;
    form.complete(outcome);

    assert!(form.submission_acknowledged());
    assert_eq!(relay.sent()[0].message, "Hello");
    assert_eq!(form.message, "");
}

/// Starts the overlay auto-dismiss timer the way the contact panel does
fn start_dismiss_timer(
    form: &Arc<Mutex<ContactForm>>,
    delay: Duration,
) -> tokio::task::JoinHandle<bool> {
    let id = form.lock().unwrap().acknowledgment_id().unwrap();
    let form = Arc::clone(form);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        form.lock().unwrap().dismiss_acknowledgment(id)
    })
}

#[tokio::test(start_paused = true)]
async fn test_old_dismiss_timer_leaves_newer_overlay_up() {
    let delay = Duration::from_secs(4);
    let form = Arc::new(Mutex::new(ada()));
    let start = tokio::time::Instant::now();

    {
        let mut f = form.lock().unwrap();
        f.begin_submit(ValidationPolicy::AcceptAsIs).unwrap();
        f.complete(Ok(()));
    }
    let first_timer = start_dismiss_timer(&form, delay);

    // Closed by hand after 1s, then a second message goes out
    tokio::time::sleep(Duration::from_secs(1)).await;
    {
        let mut f = form.lock().unwrap();
        f.dismiss();
        f.set_field(FieldId::Message, "One more thing");
        f.begin_submit(ValidationPolicy::AcceptAsIs).unwrap();
    }
    tokio::time::sleep(Duration::from_secs(1)).await;
    form.lock().unwrap().complete(Ok(()));
    let second_timer = start_dismiss_timer(&form, delay);

    // First timer fires at 4s and must not touch the second overlay
    assert!(!first_timer.await.unwrap());
    assert!(form.lock().unwrap().submission_acknowledged());

    assert!(second_timer.await.unwrap());
    assert!(start.elapsed() >= Duration::from_secs(6));
    assert_eq!(form.lock().unwrap().phase(), &SubmissionPhase::Idle);
}
