//! Elliptic curve domain parameters reported by the applet

use crate::commands::Parameter;
use crate::constants::p256;
use crate::types::PublicKey;
use crate::{Error, Result};

/// Domain parameters of the curve the applet operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParameters {
    /// Field prime p
    pub field: [u8; 32],
    /// Coefficient a
    pub a: [u8; 32],
    /// Coefficient b
    pub b: [u8; 32],
    /// Base point G
    pub generator: PublicKey,
    /// Order n of G
    pub order: [u8; 32],
}

impl CurveParameters {
    /// NIST P-256, the curve the applet is built for
    pub const fn nist_p256() -> Self {
        Self {
            field: p256::FIELD,
            a: p256::A,
            b: p256::B,
            generator: PublicKey::new(p256::GX, p256::GY),
            order: p256::ORDER,
        }
    }

    /// Require every parameter to equal `reference`
    ///
    /// Parameters are compared in card order (p, a, b, G, n) and the first
    /// difference is reported.
    pub fn verify_matches(&self, reference: &Self) -> Result<()> {
        let checks = [
            (Parameter::Field, self.field == reference.field),
            (Parameter::A, self.a == reference.a),
            (Parameter::B, self.b == reference.b),
            (Parameter::G, self.generator == reference.generator),
            (Parameter::R, self.order == reference.order),
        ];

        match checks.into_iter().find(|(_, matches)| !matches) {
            Some((parameter, _)) => Err(Error::CurveMismatch { parameter }),
            None => Ok(()),
        }
    }
}
