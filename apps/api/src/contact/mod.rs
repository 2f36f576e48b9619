use serde::{Deserialize, Serialize};

pub mod handlers;

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const RECEIVED_MESSAGE: &str = "Message received successfully!";

/// Raw contact-form payload. Every field is optional at the wire level so a
/// missing field is a validation failure rather than a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A submission with all four fields present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: &'static str,
}

impl ContactSubmission {
    /// Returns `None` if any field is absent or empty.
    pub fn validate(self) -> Option<ContactMessage> {
        Some(ContactMessage {
            name: present(self.name)?,
            email: present(self.email)?,
            subject: present(self.subject)?,
            message: present(self.message)?,
        })
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}
