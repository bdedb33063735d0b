use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid")
});

/// Address shape check applied to the trimmed input.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Message,
    ];

    fn index(self) -> usize {
        match self {
            ContactField::FirstName => 0,
            ContactField::LastName => 1,
            ContactField::Email => 2,
            ContactField::Message => 3,
        }
    }

    /// Form field name as used by the page markup.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact field {0:?} (expected firstName, lastName, email or message)")]
pub struct ContactFieldParseError(pub String);

impl FromStr for ContactField {
    type Err = ContactFieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "firstName" | "first_name" => Ok(ContactField::FirstName),
            "lastName" | "last_name" => Ok(ContactField::LastName),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            other => Err(ContactFieldParseError(other.to_string())),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(ContactField),
    InvalidEmail,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required(ContactField::FirstName) => "First name is required",
            FieldError::Required(ContactField::LastName) => "Last name is required",
            FieldError::Required(ContactField::Email) => "Email is required",
            FieldError::Required(ContactField::Message) => "Message is required",
            FieldError::InvalidEmail => "Enter a valid email",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-field validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    errors: [Option<FieldError>; 4],
}

impl ValidationResult {
    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        self.errors[field.index()]
    }

    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    pub fn invalid_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.error(*field).is_some())
            .collect()
    }

    /// Keeps only the errors of fields marked as touched.
    pub fn only_touched(mut self, touched: &TouchedFields) -> Self {
        for field in ContactField::ALL {
            if !touched.is_touched(field) {
                self.errors[field.index()] = None;
            }
        }
        self
    }
}

/// Validates every field. Pure; never looks at touched state.
pub fn validate(values: &ContactFormValues) -> ValidationResult {
    let mut result = ValidationResult::default();
    for field in ContactField::ALL {
        let value = values.get(field).trim();
        result.errors[field.index()] = if value.is_empty() {
            Some(FieldError::Required(field))
        } else if field == ContactField::Email && !is_valid_email(value) {
            Some(FieldError::InvalidEmail)
        } else {
            None
        };
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchedFields([bool; 4]);

impl TouchedFields {
    pub fn touch(&mut self, field: ContactField) {
        self.0[field.index()] = true;
    }

    pub fn touch_all(&mut self) {
        self.0 = [true; 4];
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.0[field.index()]
    }

    pub fn clear(&mut self) {
        self.0 = [false; 4];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Result reported by the mail relay, with error causes already collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed,
}

/// Snapshot of the form handed to the mail relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactFormValues> for ContactSubmission {
    fn from(values: &ContactFormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message: values.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Status moved to `Submitting`; the submission must be sent.
    Started(ContactSubmission),
    /// Validation failed; nothing changed except touched flags.
    Invalid(ValidationResult),
    /// A submission is already in flight.
    InFlight,
}

/// Contact form values plus the submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    values: ContactFormValues,
    touched: TouchedFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Allowed in every state, including while submitting.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    pub fn touch(&mut self, field: ContactField) {
        self.touched.touch(field);
    }

    pub fn validate(&self) -> ValidationResult {
        validate(&self.values)
    }

    /// Errors to show inline: only for fields the user has touched.
    pub fn visible_errors(&self) -> ValidationResult {
        self.validate().only_touched(&self.touched)
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.status == SubmissionStatus::Submitting {
            return SubmitAttempt::InFlight;
        }
        let result = self.validate();
        if !result.is_valid() {
            self.touched.touch_all();
            return SubmitAttempt::Invalid(result);
        }
        self.status = SubmissionStatus::Submitting;
        SubmitAttempt::Started(ContactSubmission::from(&self.values))
    }

    /// Applies the relay outcome. Returns false when nothing was in flight.
    pub fn complete_submit(&mut self, outcome: SubmissionOutcome) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        match outcome {
            SubmissionOutcome::Delivered => {
                self.status = SubmissionStatus::Success;
                self.values = ContactFormValues::default();
                self.touched.clear();
            }
            SubmissionOutcome::Failed => {
                self.status = SubmissionStatus::Error;
            }
        }
        true
    }

    /// `Success`/`Error` back to `Idle`. Returns whether the status changed.
    pub fn dismiss_notification(&mut self) -> bool {
        match self.status {
            SubmissionStatus::Success | SubmissionStatus::Error => {
                self.status = SubmissionStatus::Idle;
                true
            }
            SubmissionStatus::Idle | SubmissionStatus::Submitting => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email(" first.last+tag@sub.example.org "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(field.name().parse::<ContactField>(), Ok(field));
        }
        assert_eq!("first_name".parse::<ContactField>(), Ok(ContactField::FirstName));
        assert_eq!(
            "phone".parse::<ContactField>(),
            Err(ContactFieldParseError("phone".to_string()))
        );
    }

    #[test]
    fn whitespace_only_is_required_error() {
        let values = ContactFormValues {
            first_name: "   ".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            message: "\n\t".into(),
        };
        let result = validate(&values);
        assert_eq!(
            result.invalid_fields(),
            vec![ContactField::FirstName, ContactField::Message]
        );
        assert_eq!(
            result.error(ContactField::FirstName).map(|e| e.message()),
            Some("First name is required")
        );
    }
}
