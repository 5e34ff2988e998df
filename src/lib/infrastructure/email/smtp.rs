//! SMTP email service implementation

use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{
        header::{ContentType, Header, HeaderName, HeaderValue},
        Attachment, Mailbox, MultiPart, SinglePart,
    },
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::domain::communication::mailer::{
    MailSender, MailerError, MessageTransport, OutgoingMessage, Priority,
};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: String,

    /// The sender email address
    #[clap(long, env = "SMTP_SENDER")]
    pub sender: String,

    /// The sender display name
    #[clap(long, env = "SMTP_SENDER_NAME")]
    pub sender_name: String,
}

/// `X-Priority` header carrying the message priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct XPriority(Priority);

impl Header for XPriority {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str("X-Priority")
    }

    fn parse(s: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        match s.trim() {
            "1" => Ok(Self(Priority::High)),
            "3" => Ok(Self(Priority::Normal)),
            other => Err(format!("unrecognised priority value: {other}").into()),
        }
    }

    fn display(&self) -> HeaderValue {
        let value = match self.0 {
            Priority::High => "1",
            Priority::Normal => "3",
        };

        HeaderValue::new(Self::name(), value.to_string())
    }
}

/// SMTP message transport
///
/// Opens a fresh plaintext client session per delivery; no connection is
/// pooled or reused between calls.
#[derive(Debug, Default, Clone)]
pub struct SmtpDelivery {
    config: SmtpConfig,
}

impl SmtpDelivery {
    /// Creates a new SMTP transport
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Builds the client used for a single delivery.
    ///
    /// Credentials are attached whenever a username is configured,
    /// independent of the sender address.
    fn client(&self) -> AsyncSmtpTransport<Tokio1Executor> {
        let builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
            self.config.host.as_str(),
        )
        .port(self.config.port);

        if self.config.username.is_empty() {
            builder.build()
        } else {
            builder
                .credentials(Credentials::new(
                    self.config.username.clone(),
                    self.config.password.clone(),
                ))
                .build()
        }
    }

    /// Maps a composed message onto its MIME form.
    fn to_mime(&self, message: &OutgoingMessage) -> Result<Message, MailerError> {
        let from = Mailbox::new(
            Some(self.config.sender_name.clone()),
            self.config.sender.parse()?,
        );

        let logo = Attachment::new_inline(message.attachment.content_id.clone()).body(
            message.attachment.content.clone(),
            ContentType::parse("image/png")?,
        );

        Ok(Message::builder()
            .from(from)
            .to(message.to.to_string().parse()?)
            .subject(message.subject.clone())
            .header(XPriority(message.priority))
            .multipart(
                MultiPart::related()
                    .singlepart(SinglePart::html(message.html_body.clone()))
                    .singlepart(logo),
            )?)
    }
}

#[async_trait]
impl MessageTransport for SmtpDelivery {
    async fn deliver(&self, message: &OutgoingMessage) -> Result<(), MailerError> {
        let mime = self.to_mime(message)?;

        self.client().send(mime).await?;

        Ok(())
    }
}

/// Wires an SMTP transport and logo into a ready-to-use [`MailSender`].
pub fn smtp_mail_sender(config: SmtpConfig, logo: Vec<u8>) -> MailSender<SmtpDelivery> {
    MailSender::new(logo, Arc::new(SmtpDelivery::new(config)))
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use testresult::TestResult;

    use crate::domain::communication::email_addresses::EmailAddress;

    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 2525,
            username: "mailer".to_string(),
            password: "secret".to_string(),
            sender: "noreply@example.com".to_string(),
            sender_name: "Example App".to_string(),
        }
    }

    fn message() -> OutgoingMessage {
        OutgoingMessage::compose(
            EmailAddress::new_unchecked("user@example.com"),
            r"hello\nworld",
            "Welcome",
            b"png logo bytes",
        )
    }

    #[test]
    fn test_mime_message_carries_addresses_and_subject() -> TestResult {
        let mime = SmtpDelivery::new(config()).to_mime(&message())?;
        let rendered = String::from_utf8(mime.formatted())?;

        assert!(rendered.contains("Example App"));
        assert!(rendered.contains("<noreply@example.com>"));
        assert!(rendered.contains("To: user@example.com"));
        assert!(rendered.contains("Subject: Welcome  -  "));

        Ok(())
    }

    #[test]
    fn test_mime_message_is_high_priority_html() -> TestResult {
        let mime = SmtpDelivery::new(config()).to_mime(&message())?;
        let rendered = String::from_utf8(mime.formatted())?;

        assert!(rendered.contains("X-Priority: 1"));
        assert!(rendered.contains("Content-Type: text/html"));
        assert!(rendered.contains("hello<br/>world"));

        Ok(())
    }

    #[test]
    fn test_mime_message_embeds_base64_logo_inline() -> TestResult {
        let mime = SmtpDelivery::new(config()).to_mime(&message())?;
        let rendered = String::from_utf8(mime.formatted())?;

        assert!(rendered.contains("Content-ID: <logo.png>"));
        assert!(rendered.contains("Content-Disposition: inline"));
        assert!(rendered.contains("Content-Transfer-Encoding: base64"));
        assert!(rendered.contains(&STANDARD.encode(b"png logo bytes")));

        Ok(())
    }

    #[test]
    fn test_mime_message_rejects_malformed_sender() {
        let mut bad = config();
        bad.sender = "not-a-mailbox".to_string();

        let result = SmtpDelivery::new(bad).to_mime(&message());

        assert!(matches!(result, Err(MailerError::InvalidEmail)));
    }

    #[test]
    fn test_priority_header_round_trip() {
        assert_eq!(XPriority::parse("1").unwrap(), XPriority(Priority::High));
        assert_eq!(XPriority::parse("3").unwrap(), XPriority(Priority::Normal));
        assert!(XPriority::parse("urgent").is_err());
    }
}
