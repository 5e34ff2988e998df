//! Mail sending service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::communication::{
    email_addresses::EmailAddress,
    mailer::{Mailer, MessageTransport, OutgoingMessage},
};

/// Mail sending service
///
/// Holds the logo embedded in every message and the transport used to hand
/// composed messages to the relay. Stateless between calls: each send
/// composes its own message and opens its own transport session, so a
/// single instance is safe to share across concurrent sends.
#[derive(Debug)]
pub struct MailSender<T>
where
    T: MessageTransport,
{
    logo: Arc<Vec<u8>>,
    transport: Arc<T>,
}

impl<T> MailSender<T>
where
    T: MessageTransport,
{
    /// Creates a new mail sender embedding `logo` in every message.
    pub fn new(logo: Vec<u8>, transport: Arc<T>) -> Self {
        Self {
            logo: Arc::new(logo),
            transport,
        }
    }
}

impl<T> Clone for MailSender<T>
where
    T: MessageTransport,
{
    fn clone(&self) -> Self {
        Self {
            logo: Arc::clone(&self.logo),
            transport: Arc::clone(&self.transport),
        }
    }
}

#[async_trait]
impl<T> Mailer for MailSender<T>
where
    T: MessageTransport,
{
    async fn send(&self, recipient: &str, body_text: &str, subject: &str) -> bool {
        // A rejected recipient is silent: no message, no session, no log.
        let to = match EmailAddress::new(recipient) {
            Ok(to) => to,
            Err(_) => return false,
        };

        let message = OutgoingMessage::compose(to, body_text, subject, &self.logo);

        match self.transport.deliver(&message).await {
            Ok(()) => {
                info!(recipient, "email handed off to the relay");
                true
            }
            Err(cause) => {
                error!(%cause, recipient, "failed to send email");
                false
            }
        }
    }
}
