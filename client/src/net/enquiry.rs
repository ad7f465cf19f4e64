//! Enquiry email request: payload, endpoint, and transports.
//!
//! DESIGN
//! ======
//! The form posts straight to a third-party transactional-email endpoint as
//! JSON `{to, subject, html, from}`. The transport is a trait so submission
//! logic can be exercised natively with a recording mock; the browser build
//! uses [`GlooTransport`].
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses both map to [`SendError`]. There
//! is no retry; the caller surfaces one generic failure message.

#[cfg(test)]
#[path = "enquiry_test.rs"]
mod enquiry_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::email_template::render_enquiry_html;
use crate::state::enquiry::EnquiryForm;

/// Email-sending endpoint. Override at build time with
/// `BHARAT3D_ENQUIRY_ENDPOINT`.
pub const ENQUIRY_ENDPOINT: &str = match option_env!("BHARAT3D_ENQUIRY_ENDPOINT") {
    Some(url) => url,
    None => "https://vocoxp.staffhandler.com/vocoxp/tenant/tenant_backend/api/tenant/email",
};

/// Mailbox that receives enquiries.
pub const ENQUIRY_RECIPIENT: &str = "info@microintegrated.in";

/// Sender shown on enquiry emails.
pub const ENQUIRY_SENDER: &str = "\"3D Bharat Enquiry\" <transactions@mounarchtech.com>";

/// Subject fallback when no project type was chosen.
pub const GENERAL_ENQUIRY: &str = "General Enquiry";

/// JSON body accepted by the email endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub from: String,
}

impl OutboundEmail {
    /// Build the notification email for a validated form.
    pub fn for_enquiry(form: &EnquiryForm, year: i32) -> Self {
        Self {
            to: ENQUIRY_RECIPIENT.to_owned(),
            subject: enquiry_subject(&form.name, &form.project_type),
            html: render_enquiry_html(form, year),
            from: ENQUIRY_SENDER.to_owned(),
        }
    }
}

/// `New Project Enquiry from {name} - {project type}`.
pub fn enquiry_subject(name: &str, project_type: &str) -> String {
    let project_type = project_type.trim();
    let project_type = if project_type.is_empty() { GENERAL_ENQUIRY } else { project_type };
    format!("New Project Enquiry from {} - {project_type}", name.trim())
}

/// Why an email could not be delivered to the endpoint.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint returned status {0}")]
    Status(u16),
}

/// Delivers an [`OutboundEmail`]. Implementations issue exactly one request
/// per call.
#[allow(async_fn_in_trait)]
pub trait EmailTransport {
    /// Send the email.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] on transport failure or a non-2xx response.
    async fn send(&self, email: &OutboundEmail) -> Result<(), SendError>;
}

/// Browser transport posting JSON with `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
pub struct GlooTransport {
    endpoint: &'static str,
}

#[cfg(feature = "hydrate")]
impl Default for GlooTransport {
    fn default() -> Self {
        Self { endpoint: ENQUIRY_ENDPOINT }
    }
}

#[cfg(feature = "hydrate")]
impl EmailTransport for GlooTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<(), SendError> {
        let resp = gloo_net::http::Request::post(self.endpoint)
            .json(email)
            .map_err(|e| SendError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(SendError::Status(resp.status()));
        }
        Ok(())
    }
}
