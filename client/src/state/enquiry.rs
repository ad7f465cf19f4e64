//! Enquiry form state and submission flow.
//!
//! DESIGN
//! ======
//! `EnquiryState` holds the field values, the visible status, and a status
//! sequence number. Each finished submission bumps the sequence and the
//! component schedules a clear for that sequence; a later submission makes
//! the older clear a no-op.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the network. Send failures keep the
//! fields so the user can retry.

#[cfg(test)]
#[path = "enquiry_test.rs"]
mod enquiry_test;

use thiserror::Error;

use crate::net::enquiry::{EmailTransport, OutboundEmail, SendError};

pub const SUCCESS_MESSAGE: &str = "Thank you! We'll get back to you within 24 hours.";

/// How long a success or error message stays visible.
pub const STATUS_CLEAR_MS: u32 = 5_000;

/// Options for the project type select.
pub const PROJECT_TYPES: [&str; 5] = [
    "Road Construction",
    "Bridge / Flyover",
    "Building",
    "Railway",
    "Other Infrastructure",
];

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnquiryError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Failed to send enquiry. Please try again or contact us directly.")]
    Send(#[from] SendError),
}

/// Form fields addressable from input handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Organization,
    ProjectType,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub project_type: String,
    pub message: String,
}

impl EnquiryForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Organization => &self.organization,
            Field::ProjectType => &self.project_type,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Organization => &mut self.organization,
            Field::ProjectType => &mut self.project_type,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Name, email and message must be non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`EnquiryError::MissingRequired`] when any required field is blank.
    pub fn validate(&self) -> Result<(), EnquiryError> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(EnquiryError::MissingRequired);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(msg) | Self::Error(msg) => Some(msg),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryState {
    pub form: EnquiryForm,
    pub status: FormStatus,
    pub status_seq: u64,
}

impl EnquiryState {
    /// Enter `Submitting` and return a snapshot of the fields, or `None` if a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<EnquiryForm> {
        if self.status.is_submitting() {
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(self.form.clone())
    }

    /// Record a submission outcome. Clears the fields on success. Returns the
    /// sequence number a clear timer should carry.
    pub fn finish(&mut self, outcome: Result<(), EnquiryError>) -> u64 {
        self.status = match outcome {
            Ok(()) => {
                self.form = EnquiryForm::default();
                FormStatus::Success(SUCCESS_MESSAGE.to_owned())
            }
            Err(e) => FormStatus::Error(e.to_string()),
        };
        self.status_seq += 1;
        self.status_seq
    }

    /// Hide the status message if it is still the one scheduled as `seq`.
    pub fn clear_status(&mut self, seq: u64) -> bool {
        if seq != self.status_seq || self.status.is_submitting() {
            return false;
        }
        self.status = FormStatus::Idle;
        true
    }
}

/// Validate, build the email, and send it through `transport`.
///
/// # Errors
///
/// [`EnquiryError::MissingRequired`] before any request is made, or
/// [`EnquiryError::Send`] when the transport fails.
pub async fn submit_enquiry<T: EmailTransport>(form: &EnquiryForm, transport: &T, year: i32) -> Result<(), EnquiryError> {
    form.validate()?;
    let email = OutboundEmail::for_enquiry(form, year);
    transport.send(&email).await?;
    Ok(())
}
