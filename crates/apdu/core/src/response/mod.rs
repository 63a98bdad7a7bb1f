//! APDU response definitions
//!
//! A raw response is `DATA(n) | SW1 | SW2`. [`Response`] keeps the two parts
//! apart and offers the single success check the protocol defines.

pub mod error;
pub mod status;
pub mod utils;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use error::{ResponseError, StatusError};
use status::StatusWord;

/// Basic APDU response structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response data, possibly empty
    data: Bytes,
    /// Status word
    status: StatusWord,
}

impl Response {
    /// Create a new response with data and status
    pub fn new(data: impl Into<Bytes>, status: impl Into<StatusWord>) -> Self {
        Self {
            data: data.into(),
            status: status.into(),
        }
    }

    /// Create a success response
    pub const fn success(data: Bytes) -> Self {
        Self {
            data,
            status: status::common::SUCCESS,
        }
    }

    /// Create an error response from a status word
    pub fn error(status: impl Into<StatusWord>) -> Self {
        Self {
            data: Bytes::new(),
            status: status.into(),
        }
    }

    /// Parse response from raw bytes (including status word)
    pub fn from_bytes(raw: &[u8]) -> Result<Self, ResponseError> {
        let (status, data) = utils::extract_status_and_data(raw)?;

        trace!(
            sw1 = format_args!("{:#04x}", status.sw1),
            sw2 = format_args!("{:#04x}", status.sw2),
            data_len = data.len(),
            "Parsed APDU response"
        );

        Ok(Self {
            data: Bytes::copy_from_slice(data),
            status,
        })
    }

    /// Response data without the status trailer
    pub const fn data(&self) -> &Bytes {
        &self.data
    }

    /// Get the status word
    pub const fn status(&self) -> StatusWord {
        self.status
    }

    /// Get the status word as a tuple (SW1, SW2)
    pub const fn status_tuple(&self) -> (u8, u8) {
        (self.status.sw1, self.status.sw2)
    }

    /// Check if the response indicates success
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Fail with the observed status word unless it is `90 00`
    pub const fn validate_status(&self) -> Result<(), StatusError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(StatusError::from_status(self.status))
        }
    }

    /// Validate the status and hand back the data
    pub fn into_data(self) -> Result<Bytes, StatusError> {
        self.validate_status()?;
        Ok(self.data)
    }
}

impl TryFrom<&[u8]> for Response {
    type Error = ResponseError;

    fn try_from(raw: &[u8]) -> Result<Self, ResponseError> {
        Self::from_bytes(raw)
    }
}

impl TryFrom<Bytes> for Response {
    type Error = ResponseError;

    fn try_from(raw: Bytes) -> Result<Self, ResponseError> {
        let (status, data_len) = {
            let (status, data) = utils::extract_status_and_data(&raw)?;
            (status, data.len())
        };
        // Slicing keeps the original allocation
        Ok(Self {
            data: raw.slice(..data_len),
            status,
        })
    }
}

impl From<Response> for Bytes {
    fn from(response: Response) -> Self {
        let mut buf = BytesMut::with_capacity(response.data.len() + 2);
        buf.put_slice(&response.data);
        buf.put_u8(response.status.sw1);
        buf.put_u8(response.status.sw2);
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_response_creation() {
        let resp = Response::new(Bytes::from_static(&[0x01, 0x02, 0x03]), (0x90, 0x00));
        assert_eq!(resp.data().as_ref(), &[0x01, 0x02, 0x03]);
        assert_eq!(resp.status(), StatusWord::new(0x90, 0x00));
        assert!(resp.is_success());
    }

    #[test]
    fn test_response_from_bytes() {
        let resp = Response::from_bytes(&hex!("010203 9000")).unwrap();
        assert_eq!(resp.data().as_ref(), &[0x01, 0x02, 0x03]);
        assert_eq!(resp.status_tuple(), (0x90, 0x00));
        assert!(resp.is_success());

        let resp = Response::from_bytes(&hex!("9000")).unwrap();
        assert!(resp.data().is_empty());
        assert!(resp.is_success());

        assert_eq!(
            Response::from_bytes(&[0x01]),
            Err(ResponseError::Incomplete(1))
        );
        assert_eq!(Response::from_bytes(&[]), Err(ResponseError::Incomplete(0)));
    }

    #[test]
    fn test_response_from_owned_bytes() {
        let raw = Bytes::copy_from_slice(&hex!("48656c6c6f 6A82"));
        let resp = Response::try_from(raw).unwrap();
        assert_eq!(resp.data().as_ref(), b"Hello");
        assert_eq!(resp.status(), StatusWord::new(0x6A, 0x82));
    }

    #[test]
    fn test_validate_status() {
        let success = Response::success(Bytes::from_static(&[0x01]));
        assert!(success.validate_status().is_ok());
        assert_eq!(success.into_data().unwrap().as_ref(), &[0x01]);

        let not_found = Response::error((0x6A, 0x82));
        let err = not_found.validate_status().unwrap_err();
        assert_eq!(err.status, StatusWord::new(0x6A, 0x82));
        assert_eq!(err.status.to_u16(), 0x6A82);

        // Warnings are not success either
        let warning = Response::error((0x62, 0x83));
        assert!(warning.into_data().is_err());
    }

    #[test]
    fn test_response_into_raw() {
        let resp = Response::new(Bytes::from_static(&[0xAA, 0xBB]), (0x90, 0x00));
        let raw: Bytes = resp.into();
        assert_eq!(raw.as_ref(), hex!("AABB9000"));
    }
}
