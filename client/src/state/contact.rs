//! Contact form model: field rules and the submission state machine.
//!
//! DESIGN
//! ======
//! The form moves `Idle -> Validating -> Invalid | Submitting`, and a
//! submission settles as `Succeeded` or `Failed`. The resting states
//! (`Invalid`, `Succeeded`, `Failed`) return to `Idle` on the next edit.
//! Validation runs before any transport is touched, so an invalid form never
//! reaches the submitter.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::submit::SubmitError;
use crate::state::notification::Severity;

/// Shown when a submit attempt is blocked by field errors.
pub const INVALID_FORM_MESSAGE: &str = "Por favor corrige los errores en el formulario";
pub const SENT_MESSAGE: &str = "¡Mensaje enviado correctamente! Te contactaré pronto.";
pub const FAILED_MESSAGE: &str = "Hubo un error al enviar el mensaje. Por favor intenta nuevamente.";

pub const VALID_BORDER_COLOR: &str = "#10b981";
pub const INVALID_BORDER_COLOR: &str = "#ef4444";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// =============================================================================
// FIELDS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// DOM id of the input element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// DOM id of the inline error slot.
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "name-error",
            Self::Email => "email-error",
            Self::Subject => "subject-error",
            Self::Message => "message-error",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::Email => "Email",
            Self::Subject => "Asunto",
            Self::Message => "Mensaje",
        }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    #[must_use]
    pub fn is_multiline(self) -> bool {
        self == Self::Message
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }
}

/// A failed field rule. `Display` is the message shown under the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("El nombre es requerido")]
    NameRequired,
    #[error("El nombre debe tener al menos 2 caracteres")]
    NameTooShort,
    #[error("El email es requerido")]
    EmailRequired,
    #[error("Por favor ingresa un email válido")]
    EmailInvalid,
    #[error("El asunto es requerido")]
    SubjectRequired,
    #[error("El asunto debe tener al menos 5 caracteres")]
    SubjectTooShort,
    #[error("El mensaje es requerido")]
    MessageRequired,
    #[error("El mensaje debe tener al menos 10 caracteres")]
    MessageTooShort,
}

/// Check `raw` (untrimmed) against the rule for `field`.
///
/// # Errors
///
/// Returns the first rule the trimmed value violates.
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    let chars = value.chars().count();
    match field {
        Field::Name if value.is_empty() => Err(FieldError::NameRequired),
        Field::Name if chars < 2 => Err(FieldError::NameTooShort),
        Field::Email if value.is_empty() => Err(FieldError::EmailRequired),
        Field::Email if !is_valid_email(value) => Err(FieldError::EmailInvalid),
        Field::Subject if value.is_empty() => Err(FieldError::SubjectRequired),
        Field::Subject if chars < 5 => Err(FieldError::SubjectTooShort),
        Field::Message if value.is_empty() => Err(FieldError::MessageRequired),
        Field::Message if chars < 10 => Err(FieldError::MessageTooShort),
        _ => Ok(()),
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

// =============================================================================
// FIELD STATUS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    #[must_use]
    pub fn border_color(self) -> Option<&'static str> {
        match self {
            Self::Untouched => None,
            Self::Valid => Some(VALID_BORDER_COLOR),
            Self::Invalid(_) => Some(INVALID_BORDER_COLOR),
        }
    }

    #[must_use]
    pub fn error(self) -> Option<FieldError> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Trimmed field values handed to the submitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Result of pressing submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Every field passed; send this message.
    Proceed(ContactMessage),
    /// At least one field failed; nothing is sent.
    Blocked,
    /// A submission is already in flight.
    Busy,
}

/// Notice produced when a submission settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Sent => SENT_MESSAGE,
            Self::Failed => FAILED_MESSAGE,
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Sent => Severity::Success,
            Self::Failed => Severity::Error,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    values: [String; 4],
    statuses: [FieldStatus; 4],
    phase: FormPhase,
}

impl ContactFormState {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    #[must_use]
    pub fn status(&self, field: Field) -> FieldStatus {
        self.statuses[field.index()]
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Record typed input. A non-blank value hides the field's error and
    /// clears its border; a blank value leaves the status alone.
    pub fn input(&mut self, field: Field, raw: String) {
        let has_text = !raw.trim().is_empty();
        self.values[field.index()] = raw;
        if has_text {
            self.statuses[field.index()] = FieldStatus::Untouched;
        }
        if matches!(self.phase, FormPhase::Invalid | FormPhase::Succeeded | FormPhase::Failed) {
            self.phase = FormPhase::Idle;
        }
    }

    /// Validate one field, as on `blur`. Returns whether it passed.
    pub fn blur(&mut self, field: Field) -> bool {
        let status = match validate_field(field, self.value(field)) {
            Ok(()) => FieldStatus::Valid,
            Err(e) => FieldStatus::Invalid(e),
        };
        self.statuses[field.index()] = status;
        status == FieldStatus::Valid
    }

    /// Validate every field, marking each one. Returns whether all passed.
    pub fn validate_all(&mut self) -> bool {
        Field::ALL.iter().fold(true, |ok, &field| self.blur(field) && ok)
    }

    /// Handle a submit press.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::Busy;
        }
        self.phase = FormPhase::Validating;
        if !self.validate_all() {
            self.phase = FormPhase::Invalid;
            return SubmitDecision::Blocked;
        }
        self.phase = FormPhase::Submitting;
        SubmitDecision::Proceed(self.message())
    }

    /// Settle an in-flight submission. Success resets every field.
    ///
    /// Returns `None` when no submission was in flight.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> Option<SubmitOutcome> {
        if !self.is_submitting() {
            return None;
        }
        match result {
            Ok(()) => {
                self.clear();
                self.phase = FormPhase::Succeeded;
                Some(SubmitOutcome::Sent)
            }
            Err(_) => {
                self.phase = FormPhase::Failed;
                Some(SubmitOutcome::Failed)
            }
        }
    }

    fn clear(&mut self) {
        self.values = Default::default();
        self.statuses = [FieldStatus::Untouched; 4];
    }

    fn message(&self) -> ContactMessage {
        ContactMessage {
            name: self.value(Field::Name).trim().to_owned(),
            email: self.value(Field::Email).trim().to_owned(),
            subject: self.value(Field::Subject).trim().to_owned(),
            message: self.value(Field::Message).trim().to_owned(),
        }
    }
}
