//! Error types specific to APDU responses

use thiserror::Error;

use super::status::StatusWord;

/// A well-formed response whose trailer is not `90 00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Status error {status}: {}", .status.description())]
pub struct StatusError {
    /// Status word that caused the error
    pub status: StatusWord,
}

impl StatusError {
    /// Create a new status error
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self {
            status: StatusWord::new(sw1, sw2),
        }
    }

    /// Create a status error from an observed status word
    pub const fn from_status(status: StatusWord) -> Self {
        Self { status }
    }

    /// Get the status word
    pub const fn status_word(&self) -> StatusWord {
        self.status
    }
}

/// Error for APDU response processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Fewer than the two status bytes were received
    #[error("Incomplete response: {0} bytes, status word needs 2")]
    Incomplete(usize),

    /// Response data did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(&'static str),
}

impl ResponseError {
    /// Create a parse error with a message
    pub const fn parse(message: &'static str) -> Self {
        Self::Parse(message)
    }
}
