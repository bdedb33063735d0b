use std::sync::{Arc, Mutex};
use std::time::Duration;

use cleo_core::{ContactField, ContactForm, ContactFormValues, SubmissionStatus, SubmitAttempt};
use cleo_relay::{
    submit_contact, FailureKind, MailRelay, RelayError, RelayEvent, RelayHandle, TemplateParams,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct FakeRelay {
    fail: bool,
    sent: Arc<Mutex<Vec<TemplateParams>>>,
}

impl FakeRelay {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailRelay for FakeRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        self.sent.lock().unwrap().push(params.clone());
        if self.fail {
            Err(RelayError {
                kind: FailureKind::HttpStatus(500),
                message: "boom".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

fn filled_form(email: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.update_field(ContactField::FirstName, "Grace");
    form.update_field(ContactField::LastName, "Hopper");
    form.update_field(ContactField::Email, email);
    form.update_field(ContactField::Message, "We would love a workshop.");
    form
}

#[tokio::test]
async fn successful_send_resets_form() {
    let relay = FakeRelay::default();
    let mut form = filled_form("grace@example.com");

    let attempt = submit_contact(&mut form, &relay, "CLEO Initiative").await;

    assert!(matches!(attempt, SubmitAttempt::Started(_)));
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.values(), &ContactFormValues::default());
    assert_eq!(
        relay.sent(),
        vec![TemplateParams {
            from_name: "Grace Hopper".to_string(),
            from_email: "grace@example.com".to_string(),
            message: "We would love a workshop.".to_string(),
            to_name: "CLEO Initiative".to_string(),
        }]
    );
}

#[tokio::test]
async fn failed_send_keeps_values_and_does_not_retry() {
    let relay = FakeRelay::failing();
    let mut form = filled_form("grace@example.com");
    let before = form.values().clone();

    submit_contact(&mut form, &relay, "CLEO Initiative").await;

    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.values(), &before);
    assert_eq!(relay.sent().len(), 1);
}

#[tokio::test]
async fn invalid_form_never_calls_relay() {
    let relay = FakeRelay::default();
    let mut form = filled_form("not-an-email");

    let attempt = submit_contact(&mut form, &relay, "CLEO Initiative").await;

    let SubmitAttempt::Invalid(result) = attempt else {
        panic!("expected validation failure, got {attempt:?}");
    };
    assert_eq!(result.invalid_fields(), vec![ContactField::Email]);
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(relay.sent().is_empty());
}

#[test]
fn handle_reports_completion_from_background_runtime() {
    let relay = Arc::new(FakeRelay::default());
    let handle = RelayHandle::with_relay(relay.clone()).expect("runtime");

    assert!(handle
        .send(TemplateParams {
            from_name: "Grace Hopper".to_string(),
            from_email: "grace@example.com".to_string(),
            message: "hi".to_string(),
            to_name: "CLEO Initiative".to_string(),
        })
        .is_ok());

    let event = handle.recv_timeout(Duration::from_secs(5));
    assert_eq!(event, Some(RelayEvent::Completed { result: Ok(()) }));
    assert_eq!(relay.sent().len(), 1);
}

#[test]
fn handle_passes_relay_errors_through() {
    let handle = RelayHandle::with_relay(Arc::new(FakeRelay::failing())).expect("runtime");

    assert!(handle
        .send(TemplateParams {
            from_name: "A B".to_string(),
            from_email: "a@example.com".to_string(),
            message: "m".to_string(),
            to_name: "CLEO Initiative".to_string(),
        })
        .is_ok());

    match handle.recv_timeout(Duration::from_secs(5)) {
        Some(RelayEvent::Completed { result: Err(err) }) => {
            assert_eq!(err.kind, FailureKind::HttpStatus(500));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
