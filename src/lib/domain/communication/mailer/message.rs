//! Email message

use chrono::Local;

use crate::domain::communication::email_addresses::EmailAddress;

/// Content id under which the logo is embedded in every message
pub const LOGO_CONTENT_ID: &str = "logo.png";

/// Delivery priority, carried to the wire as an `X-Priority` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Normal delivery priority
    Normal,

    /// High delivery priority
    High,
}

/// An inline attachment, referenced from the HTML body by its content id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAttachment {
    /// The content id the HTML body can reference
    pub content_id: String,

    /// The raw attachment bytes
    pub content: Vec<u8>,
}

/// Email message
///
/// Built fresh for every send and discarded after transmission, whatever
/// the outcome.
#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The subject of the email, with a local-time suffix
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The logo embedded in the email
    pub attachment: InlineAttachment,

    /// The delivery priority of the email
    pub priority: Priority,
}

impl OutgoingMessage {
    /// Composes the message sent to `to`.
    ///
    /// The subject gains a `M/D/YYYY H:MM AM` local-time suffix. The body
    /// has every literal two-character `\n` escape sequence rewritten to
    /// `<br/>`; an actual line feed character is left untouched.
    pub fn compose(to: EmailAddress, body_text: &str, subject: &str, logo: &[u8]) -> Self {
        let timestamp = Local::now().format("%-m/%-d/%Y %-I:%M %p");

        Self {
            to,
            subject: format!("{subject}  -  {timestamp}"),
            html_body: body_text.replace(r"\n", "<br/>"),
            attachment: InlineAttachment {
                content_id: LOGO_CONTENT_ID.to_string(),
                content: logo.to_vec(),
            },
            priority: Priority::High,
        }
    }
}
