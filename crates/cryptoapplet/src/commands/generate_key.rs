use cryptoapplet_apdu_core::{ApduCommand, Response};

use crate::Error;
use crate::constants::ins;

/// Replace the card keypair with a freshly generated one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateKey;

impl ApduCommand for GenerateKey {
    type Success = ();
    type Error = Error;

    fn instruction(&self) -> u8 {
        ins::ECDSA_GENKEY
    }

    fn p1(&self) -> u8 {
        0x00
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> &[u8] {
        &[]
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        Ok(response.validate_status()?)
    }
}
