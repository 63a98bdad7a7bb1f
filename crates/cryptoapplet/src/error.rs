use cryptoapplet_apdu_core::command::CommandError;
use cryptoapplet_apdu_core::response::error::{ResponseError, StatusError};
use cryptoapplet_apdu_core::{StatusWord, TransportError};

use crate::commands::Parameter;
use crate::types::SignatureError;

/// Result type for CryptoApplet operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for CryptoApplet operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// APDU layer errors: argument, transport, reply framing or status
    #[error(transparent)]
    Apdu(#[from] cryptoapplet_apdu_core::Error),

    /// The card returned a malformed DER signature
    #[error("Invalid signature encoding: {0}")]
    Signature(#[from] SignatureError),

    /// The applet rejected the hash as not being 32 bytes
    #[error("Hash must be exactly 32 bytes")]
    InvalidHashLength,

    /// A curve parameter read from the card differs from the reference
    #[error("Curve parameter {parameter} does not match the reference curve")]
    CurveMismatch {
        /// First parameter that differed
        parameter: Parameter,
    },

    /// Response data had the wrong size
    #[error("Unexpected response length: expected {expected}, got {actual}")]
    UnexpectedLength {
        /// Required length
        expected: usize,
        /// Received length
        actual: usize,
    },

    /// Response data did not have the required content
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(&'static str),

    /// AID outside the 5 to 16 byte range
    #[error("Invalid AID length: {0} bytes")]
    InvalidAid(usize),

    /// AID was not valid hex
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    /// The status word the card answered with, if this is a status error
    pub const fn status_word(&self) -> Option<StatusWord> {
        match self {
            Self::Apdu(err) => err.status_word(),
            Self::InvalidHashLength => Some(crate::constants::status::SW_WRONG_HASH_LENGTH),
            _ => None,
        }
    }
}

impl From<StatusError> for Error {
    fn from(err: StatusError) -> Self {
        Self::Apdu(err.into())
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Self::Apdu(err.into())
    }
}

impl From<CommandError> for Error {
    fn from(err: CommandError) -> Self {
        Self::Apdu(err.into())
    }
}

impl From<ResponseError> for Error {
    fn from(err: ResponseError) -> Self {
        Self::Apdu(err.into())
    }
}
