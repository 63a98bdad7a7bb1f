//! Utility functions for APDU response handling

use tracing::debug;

use crate::response::error::ResponseError;
use crate::response::status::StatusWord;

/// Split a raw response into `((SW1, SW2), data)`
///
/// # Errors
/// Returns [`ResponseError::Incomplete`] if the data is too short to contain
/// a status word.
pub fn extract_response_parts(raw: &[u8]) -> Result<((u8, u8), &[u8]), ResponseError> {
    match raw {
        [data @ .., sw1, sw2] => Ok(((*sw1, *sw2), data)),
        _ => {
            debug!("Response too short: {} bytes", raw.len());
            Err(ResponseError::Incomplete(raw.len()))
        }
    }
}

/// Split a raw response into a [`StatusWord`] and the data preceding it
///
/// # Errors
/// Returns [`ResponseError::Incomplete`] if the data is too short to contain
/// a status word.
pub fn extract_status_and_data(raw: &[u8]) -> Result<(StatusWord, &[u8]), ResponseError> {
    let ((sw1, sw2), data) = extract_response_parts(raw)?;
    Ok((StatusWord::new(sw1, sw2), data))
}
