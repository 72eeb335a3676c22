use std::cell::Cell;

use super::*;
use crate::net::submit::Submitter;
use crate::test_support::block_on;

/// Counts deliveries and answers with a fixed result.
struct CountingSubmitter {
    calls: Cell<usize>,
    result: Result<(), SubmitError>,
}

impl CountingSubmitter {
    fn new(result: Result<(), SubmitError>) -> Self {
        Self { calls: Cell::new(0), result }
    }
}

impl Submitter for CountingSubmitter {
    async fn submit(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactFormState {
    let mut form = ContactFormState::default();
    form.input(Field::Name, name.to_owned());
    form.input(Field::Email, email.to_owned());
    form.input(Field::Subject, subject.to_owned());
    form.input(Field::Message, message.to_owned());
    form
}

/// Press submit and, when allowed, deliver and settle like the component does.
fn press_submit(form: &mut ContactFormState, submitter: &CountingSubmitter) -> Option<SubmitOutcome> {
    match form.begin_submit() {
        SubmitDecision::Proceed(message) => {
            let result = block_on(submitter.submit(&message));
            form.finish_submit(result)
        }
        SubmitDecision::Blocked | SubmitDecision::Busy => None,
    }
}

// =============================================================
// validate_field
// =============================================================

#[test]
fn name_rules() {
    assert_eq!(validate_field(Field::Name, ""), Err(FieldError::NameRequired));
    assert_eq!(validate_field(Field::Name, "   "), Err(FieldError::NameRequired));
    assert_eq!(validate_field(Field::Name, " A "), Err(FieldError::NameTooShort));
    assert_eq!(validate_field(Field::Name, "Al"), Ok(()));
}

#[test]
fn subject_rules() {
    assert_eq!(validate_field(Field::Subject, ""), Err(FieldError::SubjectRequired));
    assert_eq!(validate_field(Field::Subject, "Hola"), Err(FieldError::SubjectTooShort));
    assert_eq!(validate_field(Field::Subject, "Hola!"), Ok(()));
}

#[test]
fn message_rules() {
    assert_eq!(validate_field(Field::Message, ""), Err(FieldError::MessageRequired));
    assert_eq!(validate_field(Field::Message, "123456789"), Err(FieldError::MessageTooShort));
    assert_eq!(validate_field(Field::Message, "1234567890"), Ok(()));
}

#[test]
fn lengths_count_characters_not_bytes() {
    // Two characters, four bytes.
    assert_eq!(validate_field(Field::Name, "Ñá"), Ok(()));
    // Four characters, eight bytes.
    assert_eq!(validate_field(Field::Subject, "ñañá"), Err(FieldError::SubjectTooShort));
}

#[test]
fn values_at_thresholds_are_valid() {
    for (field, value) in [
        (Field::Name, "ab"),
        (Field::Email, "x@y.io"),
        (Field::Subject, "abcde"),
        (Field::Message, "abcdefghij"),
    ] {
        assert_eq!(validate_field(field, value), Ok(()), "{field:?} = {value:?}");
    }
}

#[test]
fn email_rules() {
    assert_eq!(validate_field(Field::Email, ""), Err(FieldError::EmailRequired));
    assert_eq!(validate_field(Field::Email, "  a@b.com  "), Ok(()));
    assert_eq!(validate_field(Field::Email, "a@b"), Err(FieldError::EmailInvalid));
}

#[test]
fn email_requires_at_sign_and_domain_segment() {
    for bad in ["ab.com", "a@", "@b.com", "a@b.", "a@.com", "a b@c.com", "a@@b.com", "a@b .com"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
    for good in ["a@b.com", "first.last@sub.domain.org", "x+tag@y.co"] {
        assert!(is_valid_email(good), "{good:?} should be accepted");
    }
}

#[test]
fn field_error_messages_are_localized() {
    assert_eq!(FieldError::NameRequired.to_string(), "El nombre es requerido");
    assert_eq!(FieldError::EmailInvalid.to_string(), "Por favor ingresa un email válido");
    assert_eq!(FieldError::MessageTooShort.to_string(), "El mensaje debe tener al menos 10 caracteres");
}

// =============================================================
// Field metadata
// =============================================================

#[test]
fn field_ids_match_error_slots() {
    for field in Field::ALL {
        assert_eq!(field.error_id(), format!("{}-error", field.id()));
    }
}

#[test]
fn only_message_is_multiline() {
    assert_eq!(Field::ALL.iter().filter(|f| f.is_multiline()).count(), 1);
    assert!(Field::Message.is_multiline());
    assert_eq!(Field::Email.input_type(), "email");
}

// =============================================================
// Live validation
// =============================================================

#[test]
fn blur_marks_status_and_border() {
    let mut form = ContactFormState::default();
    form.input(Field::Name, "A".to_owned());
    assert!(!form.blur(Field::Name));
    assert_eq!(form.status(Field::Name), FieldStatus::Invalid(FieldError::NameTooShort));
    assert_eq!(form.status(Field::Name).border_color(), Some(INVALID_BORDER_COLOR));

    form.input(Field::Name, "Ana".to_owned());
    assert!(form.blur(Field::Name));
    assert_eq!(form.status(Field::Name).border_color(), Some(VALID_BORDER_COLOR));
}

#[test]
fn input_with_text_clears_error() {
    let mut form = ContactFormState::default();
    form.blur(Field::Email);
    assert_eq!(form.status(Field::Email).error(), Some(FieldError::EmailRequired));

    form.input(Field::Email, "a".to_owned());
    assert_eq!(form.status(Field::Email), FieldStatus::Untouched);
    assert_eq!(form.status(Field::Email).border_color(), None);
}

#[test]
fn blank_input_keeps_error() {
    let mut form = ContactFormState::default();
    form.blur(Field::Subject);
    form.input(Field::Subject, "   ".to_owned());
    assert_eq!(form.status(Field::Subject).error(), Some(FieldError::SubjectRequired));
}

// =============================================================
// Submission state machine
// =============================================================

#[test]
fn scenario_short_name_still_submits() {
    let mut form = filled("Al", "a@b.com", "Hi there", "This is a message");
    let submitter = CountingSubmitter::new(Ok(()));

    assert_eq!(press_submit(&mut form, &submitter), Some(SubmitOutcome::Sent));
    assert_eq!(submitter.calls.get(), 1);
}

#[test]
fn proceed_carries_trimmed_values() {
    let mut form = filled("  Al ", " a@b.com ", " Hi there ", " This is a message ");
    let decision = form.begin_submit();
    assert_eq!(
        decision,
        SubmitDecision::Proceed(ContactMessage {
            name: "Al".to_owned(),
            email: "a@b.com".to_owned(),
            subject: "Hi there".to_owned(),
            message: "This is a message".to_owned(),
        })
    );
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert!(form.is_submitting());
}

#[test]
fn any_invalid_field_blocks_delivery() {
    let valid = ["Al", "a@b.com", "Hi there", "This is a message"];
    let invalid = ["A", "a@b", "Hi", "short"];
    for i in 0..4 {
        let mut values = valid;
        values[i] = invalid[i];
        let mut form = filled(values[0], values[1], values[2], values[3]);
        let submitter = CountingSubmitter::new(Ok(()));

        assert_eq!(press_submit(&mut form, &submitter), None);
        assert_eq!(submitter.calls.get(), 0, "field {i} invalid must not submit");
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert!(form.status(Field::ALL[i]).error().is_some());
    }
}

#[test]
fn blocked_submit_marks_every_field() {
    let mut form = ContactFormState::default();
    assert_eq!(form.begin_submit(), SubmitDecision::Blocked);
    for field in Field::ALL {
        assert!(form.status(field).error().is_some(), "{field:?}");
    }
}

#[test]
fn success_clears_values_and_errors() {
    let mut form = filled("Ana", "ana@example.com", "Consulta", "Quisiera un presupuesto.");
    let submitter = CountingSubmitter::new(Ok(()));

    assert_eq!(press_submit(&mut form, &submitter), Some(SubmitOutcome::Sent));
    assert_eq!(form.phase(), FormPhase::Succeeded);
    for field in Field::ALL {
        assert_eq!(form.value(field), "");
        assert_eq!(form.status(field), FieldStatus::Untouched);
    }
}

#[test]
fn failure_keeps_values() {
    let mut form = filled("Ana", "ana@example.com", "Consulta", "Quisiera un presupuesto.");
    let submitter = CountingSubmitter::new(Err(SubmitError::Simulated));

    assert_eq!(press_submit(&mut form, &submitter), Some(SubmitOutcome::Failed));
    assert_eq!(form.phase(), FormPhase::Failed);
    assert_eq!(form.value(Field::Name), "Ana");
    assert!(!form.is_submitting());
}

#[test]
fn second_press_while_submitting_is_busy() {
    let mut form = filled("Ana", "ana@example.com", "Consulta", "Quisiera un presupuesto.");
    assert!(matches!(form.begin_submit(), SubmitDecision::Proceed(_)));
    assert_eq!(form.begin_submit(), SubmitDecision::Busy);
}

#[test]
fn finish_without_submission_is_ignored() {
    let mut form = ContactFormState::default();
    assert_eq!(form.finish_submit(Ok(())), None);
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn editing_after_settle_returns_to_idle() {
    let mut form = ContactFormState::default();
    form.begin_submit();
    assert_eq!(form.phase(), FormPhase::Invalid);
    form.input(Field::Name, "Ana".to_owned());
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn outcome_notices() {
    assert_eq!(SubmitOutcome::Sent.message(), SENT_MESSAGE);
    assert_eq!(SubmitOutcome::Sent.severity(), Severity::Success);
    assert_eq!(SubmitOutcome::Failed.message(), FAILED_MESSAGE);
    assert_eq!(SubmitOutcome::Failed.severity(), Severity::Error);
}
