//! Email service module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;
mod message;
mod service;

pub use errors::MailerError;
pub use message::{InlineAttachment, OutgoingMessage, Priority, LOGO_CONTENT_ID};
pub use service::MailSender;

/// Email service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `recipient` - The address to send the email to.
    /// * `body_text` - The body of the email.
    /// * `subject` - The subject of the email.
    ///
    /// # Returns
    /// `true` when the message was handed to the relay, `false` otherwise.
    /// A malformed or empty recipient, and every transport failure, surface
    /// only as `false`; this method never panics and never returns an error.
    async fn send(&self, recipient: &str, body_text: &str, subject: &str) -> bool;
}

/// Transport used to hand a composed message to the relay
#[async_trait]
pub trait MessageTransport: Send + Sync + 'static {
    /// Deliver a single message
    ///
    /// One attempt, one session; nothing is retried or kept open between
    /// calls.
    async fn deliver(&self, message: &OutgoingMessage) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, recipient: &str, body_text: &str, subject: &str) -> bool;
    }
}

#[cfg(test)]
mock! {
    pub MessageTransport {}

    #[async_trait]
    impl MessageTransport for MessageTransport {
        async fn deliver(&self, message: &OutgoingMessage) -> Result<(), MailerError>;
    }
}

#[cfg(test)]
pub mod tests {
    pub use super::{MockMailer, MockMessageTransport};
}
