//! Outbound network helpers.

pub mod assets;
pub mod email_template;
pub mod enquiry;
