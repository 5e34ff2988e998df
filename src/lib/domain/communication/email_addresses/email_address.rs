//! Email Address

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_SYNTAX: Regex = Regex::new(
        r"^((\w+['.+-])+\w+|\w+)@((([0-1]?[0-9]{1,2}|25[0-5]|2[0-4][0-9])\.([0-1]?[0-9]{1,2}|25[0-5]|2[0-4][0-9])\.([0-1]?[0-9]{1,2}|25[0-5]|2[0-4][0-9])\.([0-1]?[0-9]{1,2}|25[0-5]|2[0-4][0-9]))|([a-zA-Z0-9]+[\w-]*\.)+[a-zA-Z]{2,9})$"
    )
    .unwrap();
}

use std::fmt;

use thiserror::Error;

use EmailAddressError::*;

/// Checks whether `email` is a syntactically well-formed address.
///
/// Syntax only: no network access, no check that the mailbox exists. The
/// local part is word-character segments separated by single `'`, `.`, `-`
/// or `+` characters; the domain is either a dotted quad of 1-3 digit
/// groups or dot-separated labels ending in a 2-9 letter top-level label.
/// The dotted-quad branch admits some out-of-range octets (e.g. `192` vs
/// `299`); it is a syntax filter, not an IP parser.
///
/// The empty string is not a well-formed address and returns `false`.
pub fn is_valid_syntax(email: &str) -> bool {
    EMAIL_SYNTAX.is_match(email)
}

/// An error that can occur when creating an email address
#[derive(Debug, Error)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is invalid
    #[error("email is invalid")]
    InvalidEmailAddress,
}

/// An email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        if raw.is_empty() {
            return Err(EmptyEmailAddress);
        }

        if !is_valid_syntax(raw) {
            return Err(InvalidEmailAddress);
        }

        Ok(Self(raw.to_string()))
    }

    /// Create a new email address without validating it
    pub fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
