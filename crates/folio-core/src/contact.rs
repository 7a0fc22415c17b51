#![forbid(unsafe_code)]

//! Contact form stub.
//!
//! Submission never leaves the page. A form with every field filled is
//! "sent" (cleared, success notice); anything else is rejected with the input
//! left in place for correction.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Notice text for a rejected submission.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
/// Notice text for an accepted submission.
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Element id of the input in the page markup.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Name => "contact-name",
            Self::Email => "contact-email",
            Self::Subject => "contact-subject",
            Self::Message => "contact-message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        })
    }
}

/// Current values of the contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Value of one field.
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Mutable access to one field.
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Fields left empty, in form order.
    ///
    /// Only the empty string counts as missing; whitespace is accepted as-is.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|&field| self.field(field).is_empty())
            .collect()
    }

    /// Accept the form only if every field is non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// A contact submission with one or more empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Empty fields, in form order. Never empty.
    pub missing: Vec<ContactField>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("missing contact fields: ")?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result of a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// All fields were filled; the form was cleared.
    Sent,
    /// Some fields were empty; the form was left untouched.
    Rejected(ValidationError),
    /// The page has no contact form.
    NoForm,
}
