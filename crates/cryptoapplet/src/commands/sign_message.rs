use cryptoapplet_apdu_core::{ApduCommand, Response};

use super::parse_signature;
use crate::Error;
use crate::constants::ins;
use crate::types::Signature;

/// Hash `message` with SHA-256 on the card and sign the digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignMessage<'a> {
    message: &'a [u8],
}

impl<'a> SignMessage<'a> {
    /// Sign `message`, at most 255 bytes
    pub const fn new(message: &'a [u8]) -> Self {
        Self { message }
    }
}

impl ApduCommand for SignMessage<'_> {
    type Success = Signature;
    type Error = Error;

    fn instruction(&self) -> u8 {
        ins::ECDSA_SIGN_MESSAGE
    }

    fn p1(&self) -> u8 {
        0x00
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> &[u8] {
        self.message
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        parse_signature(response)
    }
}
