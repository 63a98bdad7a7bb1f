use core::fmt;

use zeroize::Zeroize;

use crate::constants::FIELD_ELEMENT_LENGTH;
use crate::{Error, Result};

/// SEC1 tag of an uncompressed point
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Affine P-256 point as returned by the applet
///
/// The card sends `x || y` without the SEC1 `04` prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    /// x coordinate, big-endian
    pub x: [u8; 32],
    /// y coordinate, big-endian
    pub y: [u8; 32],
}

impl PublicKey {
    /// Create a point from its coordinates
    pub const fn new(x: [u8; 32], y: [u8; 32]) -> Self {
        Self { x, y }
    }

    /// Parse `x || y`, or the SEC1 form `04 || x || y`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let coordinates = match bytes {
            [UNCOMPRESSED_TAG, rest @ ..] if rest.len() == 2 * FIELD_ELEMENT_LENGTH => rest,
            _ if bytes.len() == 2 * FIELD_ELEMENT_LENGTH => bytes,
            _ => {
                return Err(Error::UnexpectedLength {
                    expected: 2 * FIELD_ELEMENT_LENGTH,
                    actual: bytes.len(),
                });
            }
        };

        let (x, y) = coordinates.split_at(FIELD_ELEMENT_LENGTH);
        Ok(Self {
            x: crate::util::to_array(x)?,
            y: crate::util::to_array(y)?,
        })
    }

    /// `x || y`
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.x);
        out[32..].copy_from_slice(&self.y);
        out
    }

    /// SEC1 uncompressed encoding `04 || x || y`
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[0] = UNCOMPRESSED_TAG;
        out[1..].copy_from_slice(&self.to_bytes());
        out
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("x", &hex::encode(self.x))
            .field("y", &hex::encode(self.y))
            .finish()
    }
}

/// Private scalar exported by the applet
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Wrap a 32-byte scalar
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        crate::util::to_array(bytes).map(Self)
    }

    /// The big-endian scalar
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Keypair read back after generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    /// Private scalar
    pub private_key: PrivateKey,
    /// Public point
    pub public_key: PublicKey,
}
