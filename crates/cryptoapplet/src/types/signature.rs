//! DER codec for ECDSA signatures
//!
//! The applet returns `SEQUENCE { INTEGER r, INTEGER s }` and expects the same
//! form back for on-card verification. Encoding is always minimal; decoding
//! tolerates redundant leading zeros and the one-octet long length form.

use alloy_primitives::U256;
use bytes::{BufMut, Bytes, BytesMut};
use core::fmt;

use crate::util::{uint_from_be, uint_to_minimal_be};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// Long form marker for a single length octet
const LENGTH_ONE_OCTET: u8 = 0x81;

/// Element of the DER structure an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DerField {
    /// The outer SEQUENCE
    #[display("SEQUENCE")]
    Sequence,
    /// The INTEGER at this position, `0` for `r` and `1` for `s`
    #[display("INTEGER #{_0}")]
    Integer(usize),
}

/// Malformed DER signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// Tag byte was not the one required at this position
    #[error("{field}: expected tag {expected:#04x}, found {}", display_tag(.found))]
    UnexpectedTag {
        /// Field being read
        field: DerField,
        /// Required tag
        expected: u8,
        /// Tag read, `None` if the input ended
        found: Option<u8>,
    },

    /// Indefinite or multi-octet length form
    #[error("{field}: unsupported length form {octet:#04x}")]
    UnsupportedLength {
        /// Field being read
        field: DerField,
        /// First length octet
        octet: u8,
    },

    /// Outer length disagrees with the bytes that follow it
    #[error("SEQUENCE length {declared} does not match {actual} remaining bytes")]
    LengthMismatch {
        /// Length stated in the header
        declared: usize,
        /// Bytes actually present
        actual: usize,
    },

    /// The SEQUENCE ended before this integer
    #[error("{0}: missing")]
    MissingInteger(DerField),

    /// Bytes left after the second integer
    #[error("{0} trailing bytes after INTEGER #1")]
    TrailingData(usize),

    /// Declared length runs past the end of the input
    #[error("{field}: needs {needed} bytes, {available} available")]
    Truncated {
        /// Field being read
        field: DerField,
        /// Bytes required
        needed: usize,
        /// Bytes present
        available: usize,
    },

    /// Integer with zero content octets
    #[error("{0}: empty integer")]
    EmptyInteger(DerField),

    /// Integer with the sign bit set
    #[error("{0}: negative integer")]
    NegativeInteger(DerField),

    /// Integer wider than 256 bits
    #[error("{0}: integer exceeds 256 bits")]
    IntegerTooLarge(DerField),
}

fn display_tag(tag: &Option<u8>) -> String {
    tag.map_or_else(|| "end of input".to_string(), |tag| format!("{tag:#04x}"))
}

/// ECDSA signature as the pair of scalars `(r, s)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signature {
    /// The `r` scalar
    pub r: U256,
    /// The `s` scalar
    pub s: U256,
}

impl Signature {
    /// Create a signature from its scalars
    pub const fn new(r: U256, s: U256) -> Self {
        Self { r, s }
    }

    /// Create a signature from fixed-width big-endian scalars
    pub fn from_scalars(r: [u8; 32], s: [u8; 32]) -> Self {
        Self {
            r: U256::from_be_bytes(r),
            s: U256::from_be_bytes(s),
        }
    }

    /// Fixed-width `r || s`
    pub fn to_scalars(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r.to_be_bytes::<32>());
        out[32..].copy_from_slice(&self.s.to_be_bytes::<32>());
        out
    }

    /// Encode as `30 L 02 Lr r 02 Ls s`
    pub fn to_der(&self) -> Bytes {
        let mut body = BytesMut::with_capacity(70);
        put_integer(&mut body, self.r);
        put_integer(&mut body, self.s);

        let mut out = BytesMut::with_capacity(body.len() + 2);
        out.put_u8(TAG_SEQUENCE);
        // Two integers of at most 33 bytes each fit the short form
        out.put_u8(body.len() as u8);
        out.put_slice(&body);
        out.freeze()
    }

    /// Decode a DER `SEQUENCE { INTEGER r, INTEGER s }`
    pub fn from_der(der: &[u8]) -> Result<Self, SignatureError> {
        let mut reader = DerReader::new(der);

        reader.expect_tag(DerField::Sequence, TAG_SEQUENCE)?;
        let declared = reader.read_length(DerField::Sequence)?;
        if declared != reader.remaining() {
            return Err(SignatureError::LengthMismatch {
                declared,
                actual: reader.remaining(),
            });
        }

        let r = reader.read_integer(0)?;
        let s = reader.read_integer(1)?;

        if reader.remaining() != 0 {
            return Err(SignatureError::TrailingData(reader.remaining()));
        }

        Ok(Self { r, s })
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = SignatureError;

    fn try_from(der: &[u8]) -> Result<Self, Self::Error> {
        Self::from_der(der)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r={} s={}",
            hex::encode(self.r.to_be_bytes::<32>()),
            hex::encode(self.s.to_be_bytes::<32>())
        )
    }
}

fn put_integer(out: &mut BytesMut, value: U256) {
    let magnitude = uint_to_minimal_be(value);
    let sign_guard = magnitude[0] & 0x80 != 0;

    out.put_u8(TAG_INTEGER);
    out.put_u8((magnitude.len() + usize::from(sign_guard)) as u8);
    if sign_guard {
        out.put_u8(0x00);
    }
    out.put_slice(&magnitude);
}

struct DerReader<'a> {
    input: &'a [u8],
}

impl<'a> DerReader<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self { input }
    }

    const fn remaining(&self) -> usize {
        self.input.len()
    }

    fn take(&mut self, field: DerField, needed: usize) -> Result<&'a [u8], SignatureError> {
        if needed > self.input.len() {
            return Err(SignatureError::Truncated {
                field,
                needed,
                available: self.input.len(),
            });
        }
        let (head, rest) = self.input.split_at(needed);
        self.input = rest;
        Ok(head)
    }

    fn expect_tag(&mut self, field: DerField, expected: u8) -> Result<(), SignatureError> {
        match self.input.split_first() {
            Some((&tag, rest)) if tag == expected => {
                self.input = rest;
                Ok(())
            }
            other => Err(SignatureError::UnexpectedTag {
                field,
                expected,
                found: other.map(|(&tag, _)| tag),
            }),
        }
    }

    fn read_length(&mut self, field: DerField) -> Result<usize, SignatureError> {
        match self.take(field, 1)?[0] {
            short @ 0x00..=0x7F => Ok(usize::from(short)),
            LENGTH_ONE_OCTET => Ok(usize::from(self.take(field, 1)?[0])),
            octet => Err(SignatureError::UnsupportedLength { field, octet }),
        }
    }

    fn read_integer(&mut self, index: usize) -> Result<U256, SignatureError> {
        let field = DerField::Integer(index);
        if self.input.is_empty() {
            return Err(SignatureError::MissingInteger(field));
        }

        self.expect_tag(field, TAG_INTEGER)?;
        let length = self.read_length(field)?;
        let content = self.take(field, length)?;

        match content.first() {
            None => Err(SignatureError::EmptyInteger(field)),
            Some(first) if first & 0x80 != 0 => Err(SignatureError::NegativeInteger(field)),
            Some(_) => uint_from_be(content).ok_or(SignatureError::IntegerTooLarge(field)),
        }
    }
}
