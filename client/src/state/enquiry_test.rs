use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

/// Records every email and answers with a canned result.
struct MockTransport {
    sent: RefCell<Vec<OutboundEmail>>,
    fail_with: Option<SendError>,
}

impl MockTransport {
    fn ok() -> Self {
        Self { sent: RefCell::new(Vec::new()), fail_with: None }
    }

    fn failing(err: SendError) -> Self {
        Self { sent: RefCell::new(Vec::new()), fail_with: Some(err) }
    }
}

impl EmailTransport for MockTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<(), SendError> {
        self.sent.borrow_mut().push(email.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn filled() -> EnquiryForm {
    EnquiryForm {
        name: "Meera".to_owned(),
        email: "meera@example.com".to_owned(),
        organization: "PWD".to_owned(),
        project_type: "Bridge / Flyover".to_owned(),
        message: "Flyover inspection".to_owned(),
    }
}

/// Drive a full submit the way the component does.
fn run(state: &mut EnquiryState, transport: &MockTransport) -> u64 {
    let snapshot = state.begin_submit().unwrap();
    let outcome = block_on(submit_enquiry(&snapshot, transport, 2026));
    state.finish(outcome)
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_filled_form() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn validate_rejects_each_missing_required_field() {
    for field in [Field::Name, Field::Email, Field::Message] {
        let mut form = filled();
        form.set(field, "   ".to_owned());
        assert_eq!(form.validate(), Err(EnquiryError::MissingRequired), "{field:?}");
    }
}

#[test]
fn optional_fields_may_be_blank() {
    let mut form = filled();
    form.set(Field::Organization, String::new());
    form.set(Field::ProjectType, String::new());
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn field_accessors_round_trip() {
    let mut form = EnquiryForm::default();
    form.set(Field::ProjectType, "Railway".to_owned());
    assert_eq!(form.get(Field::ProjectType), "Railway");
    assert_eq!(form.get(Field::Name), "");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn missing_field_shows_error_and_sends_nothing() {
    let transport = MockTransport::ok();
    let mut state = EnquiryState { form: filled(), ..EnquiryState::default() };
    state.form.email.clear();

    run(&mut state, &transport);

    assert!(transport.sent.borrow().is_empty());
    assert_eq!(state.status, FormStatus::Error("Please fill in all required fields.".to_owned()));
    assert_eq!(state.form.name, "Meera");
}

#[test]
fn valid_submit_sends_exactly_once_with_values() {
    let transport = MockTransport::ok();
    let mut state = EnquiryState { form: filled(), ..EnquiryState::default() };

    run(&mut state, &transport);

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("Meera"));
    assert!(sent[0].html.contains("meera@example.com"));
    assert!(sent[0].html.contains("Flyover inspection"));
    assert_eq!(sent[0].subject, "New Project Enquiry from Meera - Bridge / Flyover");
}

#[test]
fn success_shows_message_and_clears_fields() {
    let transport = MockTransport::ok();
    let mut state = EnquiryState { form: filled(), ..EnquiryState::default() };

    run(&mut state, &transport);

    assert_eq!(state.status, FormStatus::Success(SUCCESS_MESSAGE.to_owned()));
    assert_eq!(state.form, EnquiryForm::default());
}

#[test]
fn failure_shows_message_and_keeps_fields() {
    let transport = MockTransport::failing(SendError::Status(500));
    let mut state = EnquiryState { form: filled(), ..EnquiryState::default() };

    run(&mut state, &transport);

    assert_eq!(transport.sent.borrow().len(), 1);
    assert_eq!(
        state.status,
        FormStatus::Error("Failed to send enquiry. Please try again or contact us directly.".to_owned())
    );
    assert_eq!(state.form, filled());
}

#[test]
fn transport_error_is_reported_like_bad_status() {
    let transport = MockTransport::failing(SendError::Transport("network down".into()));
    let outcome = block_on(submit_enquiry(&filled(), &transport, 2026));
    assert_eq!(outcome, Err(EnquiryError::Send(SendError::Transport("network down".into()))));
    assert_eq!(outcome.unwrap_err().to_string(), "Failed to send enquiry. Please try again or contact us directly.");
}

#[test]
fn begin_submit_rejects_double_submit() {
    let mut state = EnquiryState { form: filled(), ..EnquiryState::default() };
    assert!(state.begin_submit().is_some());
    assert!(state.status.is_submitting());
    assert!(state.begin_submit().is_none());
}

// =============================================================
// Status clearing
// =============================================================

#[test]
fn clear_status_only_clears_matching_sequence() {
    let transport = MockTransport::ok();
    let mut state = EnquiryState { form: filled(), ..EnquiryState::default() };

    let first = run(&mut state, &transport);
    state.form = filled();
    let second = run(&mut state, &transport);
    assert_ne!(first, second);

    assert!(!state.clear_status(first));
    assert!(state.status.is_success());
    assert!(state.clear_status(second));
    assert_eq!(state.status, FormStatus::Idle);
}

#[test]
fn clear_status_leaves_in_flight_submission() {
    let mut state = EnquiryState::default();
    let seq = state.finish(Err(EnquiryError::MissingRequired));
    state.form = filled();
    state.begin_submit();
    assert!(!state.clear_status(seq));
    assert!(state.status.is_submitting());
}

#[test]
fn status_message_accessor() {
    assert_eq!(FormStatus::Idle.message(), None);
    assert_eq!(FormStatus::Submitting.message(), None);
    assert_eq!(FormStatus::Error("x".into()).message(), Some("x"));
}

#[test]
fn project_types_match_select_options() {
    assert_eq!(PROJECT_TYPES.len(), 5);
    assert_eq!(PROJECT_TYPES[1], "Bridge / Flyover");
}
