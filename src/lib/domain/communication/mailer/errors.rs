//! Mailer errors

use lettre::{
    address::AddressError, error::Error as MessageError, message::header::ContentTypeErr,
    transport::smtp::Error as SmtpError,
};
use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// An error occurred while sending the email
    #[error("An error occurred while sending the email")]
    SendError,

    /// Invalid email address
    #[error("Invalid email address")]
    InvalidEmail,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidEmail
    }
}

impl From<MessageError> for MailerError {
    fn from(err: MessageError) -> Self {
        MailerError::UnknownError(err.into())
    }
}

impl From<ContentTypeErr> for MailerError {
    fn from(err: ContentTypeErr) -> Self {
        MailerError::UnknownError(err.into())
    }
}

impl From<SmtpError> for MailerError {
    fn from(err: SmtpError) -> Self {
        MailerError::UnknownError(err.into())
    }
}
