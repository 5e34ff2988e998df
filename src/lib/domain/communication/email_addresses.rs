//! Email addresses module.

mod email_address;

pub use email_address::{is_valid_syntax, EmailAddress, EmailAddressError};
