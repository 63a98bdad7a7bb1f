//! Byte and integer helpers shared by the DER codec and the typed commands

use alloy_primitives::U256;
use bytes::Bytes;

use crate::{Error, Result};

/// Strip leading `00` bytes, returning an empty slice for an all-zero input
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Minimal big-endian magnitude of `value`, never shorter than one byte
pub fn uint_to_minimal_be(value: U256) -> Vec<u8> {
    let bytes = value.to_be_bytes::<32>();
    match trim_leading_zeros(&bytes) {
        [] => vec![0x00],
        trimmed => trimmed.to_vec(),
    }
}

/// Interpret big-endian bytes as an unsigned integer
///
/// Leading zeros are ignored. Returns `None` when more than 256 significant
/// bits remain.
pub fn uint_from_be(bytes: &[u8]) -> Option<U256> {
    U256::try_from_be_slice(trim_leading_zeros(bytes))
}

/// Copy `bytes` into a fixed-width array
pub fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| Error::UnexpectedLength {
            expected: N,
            actual: bytes.len(),
        })
}

/// Parse a hex application identifier such as `"5714e4720af2152cb449b1d8"`
///
/// Whitespace between byte pairs is accepted. AIDs are 5 to 16 bytes long.
pub fn parse_aid(aid: &str) -> Result<Bytes> {
    let digits: String = aid.chars().filter(|c| !c.is_whitespace()).collect();
    let aid = hex::decode(digits)?;
    if !(5..=16).contains(&aid.len()) {
        return Err(Error::InvalidAid(aid.len()));
    }
    Ok(Bytes::from(aid))
}
