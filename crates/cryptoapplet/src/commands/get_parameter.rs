use cryptoapplet_apdu_core::{ApduCommand, Bytes, Response};

use crate::Error;
use crate::constants::{FIELD_ELEMENT_LENGTH, ins, param};

/// Key or domain parameter selectable through `ECDSA_CONFIG`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Parameter {
    /// Private scalar
    #[display("SECRET")]
    Secret,
    /// Public point, `x || y`
    #[display("PUBLIC")]
    Public,
    /// Field prime p
    #[display("FIELD")]
    Field,
    /// Coefficient a
    #[display("A")]
    A,
    /// Coefficient b
    #[display("B")]
    B,
    /// Base point, `x || y`
    #[display("G")]
    G,
    /// Group order n
    #[display("R")]
    R,
}

impl Parameter {
    /// Every parameter, in P1 order
    pub const ALL: [Self; 7] = [
        Self::Secret,
        Self::Public,
        Self::Field,
        Self::A,
        Self::B,
        Self::G,
        Self::R,
    ];

    /// The P1 byte selecting this parameter
    pub const fn p1(self) -> u8 {
        match self {
            Self::Secret => param::SECRET,
            Self::Public => param::PUBLIC,
            Self::Field => param::FIELD,
            Self::A => param::A,
            Self::B => param::B,
            Self::G => param::G,
            Self::R => param::R,
        }
    }

    /// Length of the value returned by the applet
    ///
    /// Points come back as `x || y`; the applet strips the `04` prefix.
    pub const fn expected_len(self) -> usize {
        match self {
            Self::Public | Self::G => 2 * FIELD_ELEMENT_LENGTH,
            _ => FIELD_ELEMENT_LENGTH,
        }
    }
}

/// Read one parameter with `ECDSA_CONFIG`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetParameter {
    parameter: Parameter,
}

impl GetParameter {
    /// Request `parameter`
    pub const fn new(parameter: Parameter) -> Self {
        Self { parameter }
    }

    /// The requested parameter
    pub const fn parameter(&self) -> Parameter {
        self.parameter
    }
}

impl ApduCommand for GetParameter {
    type Success = Bytes;
    type Error = Error;

    fn instruction(&self) -> u8 {
        ins::ECDSA_CONFIG
    }

    fn p1(&self) -> u8 {
        self.parameter.p1()
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> &[u8] {
        &[]
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        Ok(response.into_data()?)
    }
}

impl From<Parameter> for GetParameter {
    fn from(parameter: Parameter) -> Self {
        Self::new(parameter)
    }
}
