//! Error types specific to APDU commands

use thiserror::Error;

/// Error raised while building or parsing an APDU command
///
/// These are caller errors: they are detected before anything is sent to
/// the card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Payload does not fit in a one-byte LC field
    #[error("Data too long: {length} bytes (max {max})")]
    DataTooLong {
        /// Length of the rejected payload
        length: usize,
        /// Largest accepted payload
        max: usize,
    },

    /// Invalid command length
    #[error("Invalid command length: {0}")]
    InvalidLength(usize),

    /// Invalid CLA byte
    #[error("Invalid CLA byte: {0:#04X}")]
    InvalidCla(u8),

    /// Invalid command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(&'static str),
}

impl CommandError {
    /// Create a parse error with a message
    pub const fn parse(message: &'static str) -> Self {
        Self::Parse(message)
    }

    /// Create a data too long error
    pub const fn data_too_long(length: usize, max: usize) -> Self {
        Self::DataTooLong { length, max }
    }
}
