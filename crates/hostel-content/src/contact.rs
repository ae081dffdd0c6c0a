//! Contact form state machine
//!
//! The form moves `Idle -> Submitting -> Idle`. There is no failure state:
//! once the required fields are present a submission always completes and
//! the fields are cleared.

use serde::Deserialize;

/// The four fields of the contact form, all required
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    /// Names of required fields left empty; whitespace counts as filled in
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

/// Confirmation shown once a submission completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionNotice {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MESSAGE_SENT: SubmissionNotice = SubmissionNotice {
    title: "Message Sent!",
    description: "Thank you for contacting us. We will get back to you soon.",
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("no submission in progress")]
    NotSubmitting,

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// A contact form and its submission state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ContactFields::default())
    }
}

impl ContactForm {
    pub fn new(fields: ContactFields) -> Self {
        Self {
            fields,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Enter `Submitting` and hand out the inquiry to deliver.
    ///
    /// Blank required fields send the form straight back to `Idle` with
    /// the entered values kept.
    pub fn begin_submit(&mut self) -> Result<ContactFields, ContactError> {
        if self.state == FormState::Submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        self.state = FormState::Submitting;

        let missing = self.fields.missing_required();
        if !missing.is_empty() {
            self.state = FormState::Idle;
            return Err(ContactError::MissingFields(missing));
        }
        Ok(self.fields.clone())
    }

    /// Leave `Submitting`: clear every field and return the confirmation
    pub fn complete(&mut self) -> Result<SubmissionNotice, ContactError> {
        if self.state != FormState::Submitting {
            return Err(ContactError::NotSubmitting);
        }
        self.fields = ContactFields::default();
        self.state = FormState::Idle;
        Ok(MESSAGE_SENT)
    }
}
