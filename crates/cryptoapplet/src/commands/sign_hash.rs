use cryptoapplet_apdu_core::{ApduCommand, Response};

use super::parse_signature;
use crate::Error;
use crate::constants::{HASH_LENGTH, ins, status};
use crate::types::Signature;

/// Sign a precomputed SHA-256 digest with the card key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignHash<'a> {
    hash: &'a [u8; HASH_LENGTH],
}

impl<'a> SignHash<'a> {
    /// Sign `hash`
    pub const fn new(hash: &'a [u8; HASH_LENGTH]) -> Self {
        Self { hash }
    }
}

impl ApduCommand for SignHash<'_> {
    type Success = Signature;
    type Error = Error;

    fn instruction(&self) -> u8 {
        ins::ECDSA_SIGN
    }

    fn p1(&self) -> u8 {
        0x00
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> &[u8] {
        self.hash
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        if response.status() == status::SW_WRONG_HASH_LENGTH {
            return Err(Error::InvalidHashLength);
        }
        parse_signature(response)
    }
}
