use bytes::{BufMut, Bytes, BytesMut};
use cryptoapplet_apdu_core::command::{CommandError, MAX_DATA_LENGTH};
use cryptoapplet_apdu_core::{ApduCommand, Response};

use crate::Error;
use crate::constants::ins;
use crate::types::Signature;

/// Ask the card to verify a signature over `message` with its public key
///
/// P1 carries the message length and P2 the DER signature length; the data
/// field is `message || der`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifySignature {
    message_len: u8,
    signature_len: u8,
    data: Bytes,
}

impl VerifySignature {
    /// Build the command, rejecting a combined payload over 255 bytes
    pub fn new(message: &[u8], signature: &Signature) -> Result<Self, CommandError> {
        let der = signature.to_der();
        let length = message.len() + der.len();
        if length > MAX_DATA_LENGTH {
            return Err(CommandError::data_too_long(length, MAX_DATA_LENGTH));
        }

        let mut data = BytesMut::with_capacity(length);
        data.put_slice(message);
        data.put_slice(&der);

        // Both lengths are bounded by the check above
        Ok(Self {
            message_len: message.len() as u8,
            signature_len: der.len() as u8,
            data: data.freeze(),
        })
    }
}

impl ApduCommand for VerifySignature {
    type Success = bool;
    type Error = Error;

    fn instruction(&self) -> u8 {
        ins::ECDSA_VERIFY
    }

    fn p1(&self) -> u8 {
        self.message_len
    }

    fn p2(&self) -> u8 {
        self.signature_len
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        match response.into_data()?.as_ref() {
            [0x01] => Ok(true),
            [0x00] => Ok(false),
            _ => Err(Error::UnexpectedResponse(
                "verification reply is not a single 00/01 byte",
            )),
        }
    }
}
