//! Core error type for all APDU operations
//!
//! Each layer keeps its own error type; this enum gathers them so callers can
//! tell an argument error, a transport failure, a malformed reply and a
//! non-success status word apart.

use crate::command::CommandError;
use crate::response::error::{ResponseError, StatusError};
use crate::response::status::StatusWord;
use crate::transport::TransportError;

/// Result type for APDU operations
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Core error type that encompasses all possible errors in the crate
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The command could not be built, nothing was sent
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The transport failed, propagated unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The reply could not be split into data and status
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The card answered with a status other than `90 00`
    #[error(transparent)]
    Status(#[from] StatusError),
}

impl Error {
    /// Create a new status error
    pub const fn status(sw1: u8, sw2: u8) -> Self {
        Self::Status(StatusError::new(sw1, sw2))
    }

    /// Create a new parse error
    pub const fn parse(message: &'static str) -> Self {
        Self::Response(ResponseError::Parse(message))
    }

    /// The observed status word, if this is a status error
    pub const fn status_word(&self) -> Option<StatusWord> {
        match self {
            Self::Status(err) => Some(err.status),
            _ => None,
        }
    }

    /// Check if this error has the given status word
    pub fn has_status(&self, status: impl Into<StatusWord>) -> bool {
        self.status_word() == Some(status.into())
    }
}
