//! Error types for command execution.
//!
//! Every refused command is reported as an [`Error`]:
//! - **Domain** errors come straight from the stores and the registration index
//! - **InvalidInput** errors come from input validation, before any domain call
//!
//! Both map onto the same three-kind taxonomy, so the request layer only
//! needs [`Error::kind`] / [`Error::status_code`] to build a response.
//!
//! # Example
//!
//! ```ignore
//! use enrollment_executor::{Command, Error, Executor};
//!
//! match executor.execute(cmd) {
//!     Ok(output) => respond(output.status_code(), output),
//!     Err(e) => respond(e.status_code(), e.to_string()),
//! }
//! ```

use enrollment_core::ErrorKind;

/// Command execution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Refused by the domain logic
    #[error(transparent)]
    Domain(#[from] enrollment_core::Error),

    /// Input failed validation (blank field, malformed email)
    #[error("{message}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Human readable reason
        message: String,
    },
}

impl Error {
    /// Refusal kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Domain(e) => e.kind(),
            Error::InvalidInput { .. } => ErrorKind::BadRequest,
        }
    }

    /// Status code the request layer should answer with
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub(crate) fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for command execution
pub type Result<T> = std::result::Result<T, Error>;
