//! SELECT command
//!
//! Selects an on-card application by its AID.

use bytes::Bytes;

use super::ApduCommand;
use crate::{Error, Response};

/// SELECT instruction code
pub const INS_SELECT: u8 = 0xA4;

/// P1 for selection by DF name (AID)
pub const P1_SELECT_BY_NAME: u8 = 0x04;

/// P2 for "first or only occurrence, return FCI"
pub const P2_SELECT_FIRST: u8 = 0x00;

/// SELECT by AID
///
/// The response status is validated: anything other than `90 00` is
/// returned as a status error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    aid: Bytes,
}

impl Select {
    /// Create a SELECT command for the given application identifier
    pub fn by_name(aid: impl Into<Bytes>) -> Self {
        Self { aid: aid.into() }
    }

    /// The application identifier being selected
    pub fn aid(&self) -> &[u8] {
        &self.aid
    }
}

impl ApduCommand for Select {
    type Success = Response;
    type Error = Error;

    fn instruction(&self) -> u8 {
        INS_SELECT
    }

    fn p1(&self) -> u8 {
        P1_SELECT_BY_NAME
    }

    fn p2(&self) -> u8 {
        P2_SELECT_FIRST
    }

    fn data(&self) -> &[u8] {
        &self.aid
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        response.validate_status()?;
        Ok(response)
    }
}
