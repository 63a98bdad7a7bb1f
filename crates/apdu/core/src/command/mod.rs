//! APDU command definitions and traits
//!
//! Only short-form commands without an `Le` field are produced:
//! `00 | INS | P1 | P2 | [LC | DATA]`, where `LC` is present iff the
//! payload is non-empty.

pub mod error;
pub mod select;

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

pub use error::CommandError;
pub use select::Select;

use crate::{Error, Response};

/// Class byte for interindustry commands, the only class the applet accepts
pub const CLA_ISO7816: u8 = 0x00;

/// Largest payload that fits in a one-byte `LC` field
pub const MAX_DATA_LENGTH: usize = 255;

/// Length of the `CLA INS P1 P2` header
const HEADER_LENGTH: usize = 4;

/// Encode a short APDU command.
///
/// The `LC` byte is omitted entirely when `data` is empty. Payloads longer
/// than [`MAX_DATA_LENGTH`] are rejected before anything is built.
pub fn encode(ins: u8, p1: u8, p2: u8, data: &[u8]) -> Result<Bytes, CommandError> {
    let lc = u8::try_from(data.len())
        .map_err(|_| CommandError::data_too_long(data.len(), MAX_DATA_LENGTH))?;

    let mut buffer = BytesMut::with_capacity(encoded_length(data.len()));

    // Header: CLA, INS, P1, P2
    buffer.put_u8(CLA_ISO7816);
    buffer.put_u8(ins);
    buffer.put_u8(p1);
    buffer.put_u8(p2);

    if lc > 0 {
        buffer.put_u8(lc);
        buffer.put_slice(data);
    }

    Ok(buffer.freeze())
}

/// Serialized length of a command carrying `data_len` payload bytes
pub const fn encoded_length(data_len: usize) -> usize {
    if data_len == 0 {
        HEADER_LENGTH
    } else {
        HEADER_LENGTH + 1 + data_len
    }
}

/// Core trait for APDU commands
pub trait ApduCommand {
    /// Success response type
    type Success;

    /// Error response type
    type Error: From<Error> + fmt::Debug;

    /// Instruction code (INS)
    fn instruction(&self) -> u8;

    /// First parameter (P1)
    fn p1(&self) -> u8;

    /// Second parameter (P2)
    fn p2(&self) -> u8;

    /// Command payload, empty when the command carries no data
    fn data(&self) -> &[u8];

    /// Convert to raw APDU bytes
    fn to_bytes(&self) -> Result<Bytes, CommandError> {
        encode(self.instruction(), self.p1(), self.p2(), self.data())
    }

    /// Calculate length of serialized command
    fn command_length(&self) -> usize {
        encoded_length(self.data().len())
    }

    /// Convert to a generic Command
    fn to_command(&self) -> Command {
        Command {
            ins: self.instruction(),
            p1: self.p1(),
            p2: self.p2(),
            data: Bytes::copy_from_slice(self.data()),
        }
    }

    /// Parse response into the command's response type
    fn parse_response(response: Response) -> Result<Self::Success, Self::Error>;
}

/// Generic APDU command structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    /// Command data, possibly empty
    pub data: Bytes,
}

impl Command {
    /// Create a new command with just the header bytes
    pub const fn new(ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            ins,
            p1,
            p2,
            data: Bytes::new(),
        }
    }

    /// Create a new command with data payload
    pub fn new_with_data<T: Into<Bytes>>(ins: u8, p1: u8, p2: u8, data: T) -> Self {
        Self {
            ins,
            p1,
            p2,
            data: data.into(),
        }
    }

    /// Set the data field
    pub fn with_data<T: Into<Bytes>>(mut self, data: T) -> Self {
        self.data = data.into();
        self
    }

    /// Parse a command from raw bytes
    ///
    /// Accepts exactly the forms [`encode`] produces: a bare header, or a
    /// header followed by a non-zero `LC` and that many data bytes.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, CommandError> {
        if raw.len() < HEADER_LENGTH {
            return Err(CommandError::InvalidLength(raw.len()));
        }
        if raw[0] != CLA_ISO7816 {
            return Err(CommandError::InvalidCla(raw[0]));
        }

        let mut command = Self::new(raw[1], raw[2], raw[3]);

        if let Some((&lc, data)) = raw[HEADER_LENGTH..].split_first() {
            if lc == 0 {
                return Err(CommandError::parse("LC must not be zero"));
            }
            if data.len() != usize::from(lc) {
                return Err(CommandError::InvalidLength(raw.len()));
            }
            command.data = Bytes::copy_from_slice(data);
        }

        Ok(command)
    }
}

impl ApduCommand for Command {
    type Success = Response;
    type Error = Error;

    fn instruction(&self) -> u8 {
        self.ins
    }

    fn p1(&self) -> u8 {
        self.p1
    }

    fn p2(&self) -> u8 {
        self.p2
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    // The raw command leaves status interpretation to the caller
    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        Ok(response)
    }
}
