use cryptoapplet_apdu_core::{ApduCommand, Response};

use crate::Error;
use crate::constants::{HELLO_WORLD, ins};

/// HELLO command, answered with `"Hello World!"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hello;

impl ApduCommand for Hello {
    type Success = ();
    type Error = Error;

    fn instruction(&self) -> u8 {
        ins::HELLO
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
        let data = response.into_data()?;
        if data.as_ref() != HELLO_WORLD {
            return Err(Error::UnexpectedResponse("HELLO reply is not \"Hello World!\""));
        }
        Ok(())
    }
}
