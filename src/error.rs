//! Contract violations raised by validators
//!
//! A value that fails a rule is not an error: it is reported as an invalid
//! [`ValidationResult`](crate::ValidationResult). [`ValidatorError`] is reserved
//! for calls the validator cannot evaluate at all.

use std::error::Error as StdError;
use std::fmt;

/// A validator was invoked with a context it cannot evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// The comparison target is a member of the owning object, but the
    /// context carries no owning object to read it from.
    MissingInstance {
        /// Name of the member that could not be read.
        member: String,
    },
}

impl fmt::Display for ValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorError::MissingInstance { member } => write!(
                f,
                "cannot read member '{}' to compare against: the validation context has no instance",
                member
            ),
        }
    }
}

impl StdError for ValidatorError {}
