//! Contact form model, validation and submission flow.
//!
//! Submission is simulated: after validation the flow waits a fixed latency,
//! then clears the form. Nothing leaves the browser.

use super::motion::{Ease, Props, Tween};
use std::time::Duration;

/// Fixed delay standing in for a network round trip
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(2000);

/// Scale bump played on the submit button after a successful send
pub const SUCCESS_PULSE: Tween = Tween::new(Props::new().scale(1.0), Props::new().scale(1.1))
    .duration(0.2)
    .ease(Ease::Power2Out);

/// Out and back
pub const SUCCESS_PULSE_LEGS: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

/// Per-field validation failures, with the message shown under the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageRequired => Field::Message,
        }
    }
}

/// At most one error per field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }
}

/// Something shaped like `local@domain`: no whitespace, and an `@` with at
/// least one character on each side
pub fn is_email_like(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + 1 < value.len())
}

/// Current form contents
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(FieldError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.email = Some(FieldError::EmailRequired);
        } else if !is_email_like(&self.email) {
            errors.email = Some(FieldError::EmailInvalid);
        }

        if self.message.trim().is_empty() {
            errors.message = Some(FieldError::MessageRequired);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Snapshot of an accepted form, handed to the (simulated) transport
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Idle -> Submitting -> Idle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactFlow {
    state: SubmitState,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Validate and enter `Submitting`. Invalid forms never leave `Idle`.
    pub fn begin(&mut self, form: &ContactForm) -> Result<Submission, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        form.validate().map_err(SubmitError::Invalid)?;

        self.state = SubmitState::Submitting;
        Ok(Submission {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        })
    }

    /// Finish the in-flight submission: clear the form and return to `Idle`.
    /// Returns `false` if nothing was in flight.
    pub fn complete(&mut self, form: &mut ContactForm) -> bool {
        if !self.is_submitting() {
            return false;
        }
        form.clear();
        self.state = SubmitState::Idle;
        true
    }
}

/// Label for the submit button
pub fn submit_label(state: SubmitState) -> &'static str {
    match state {
        SubmitState::Idle => "Send Message",
        SubmitState::Submitting => "Sending...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_like("a@b"));
        assert!(is_email_like("ada@example.com"));
        assert!(is_email_like("a@b@c"));
        assert!(!is_email_like("adaexample.com"));
        assert!(!is_email_like("@example.com"));
        assert!(!is_email_like("ada@"));
        assert!(!is_email_like("ada @example.com"));
        assert!(!is_email_like("@"));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameRequired));
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.message, Some(FieldError::MessageRequired));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = filled();
        form.set(Field::Name, "   ");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_invalid_email_message() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.email, Some(FieldError::EmailInvalid));
        assert_eq!(errors.email.map(|e| e.to_string()).as_deref(), Some("Invalid email address"));
        assert_eq!(FieldError::EmailInvalid.field(), Field::Email);
    }

    #[test]
    fn test_invalid_form_never_submits() {
        let mut flow = ContactFlow::new();
        let result = flow.begin(&ContactForm::default());
        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn test_submit_cycle() {
        let mut flow = ContactFlow::new();
        let mut form = filled();

        let submission = flow.begin(&form).unwrap();
        assert_eq!(submission.email, "ada@example.com");
        assert!(flow.is_submitting());
        assert_eq!(submit_label(flow.state()), "Sending...");

        // Second click while waiting is rejected
        assert_eq!(flow.begin(&form), Err(SubmitError::InFlight));

        assert!(flow.complete(&mut form));
        assert_eq!(form, ContactForm::default());
        assert_eq!(flow.state(), SubmitState::Idle);
        assert!(!flow.complete(&mut form));
    }

    #[test]
    fn test_latency_and_pulse() {
        assert_eq!(SIMULATED_LATENCY.as_millis(), 2000);
        assert_eq!(SUCCESS_PULSE.to.scale, Some(1.1));
        assert_eq!(SUCCESS_PULSE_LEGS, 2);
    }
}
