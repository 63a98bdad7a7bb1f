//! Transport traits for APDU communication with cards
//!
//! A transport moves raw bytes to and from one card. It has no knowledge of
//! command structure or status words.

pub mod error;
mod shared;

use std::fmt;

use bytes::Bytes;
pub use error::TransportError;
pub use shared::SharedTransport;
use tracing::{debug, trace};

/// Trait for basic card transports
///
/// The card protocol is half-duplex: one command is in flight at a time and
/// `transmit_raw` blocks until the reply arrives or the exchange fails.
/// Timeouts and card-removal detection belong to the implementation.
pub trait CardTransport: Send + Sync + fmt::Debug {
    /// Send raw APDU bytes to card and return response bytes
    ///
    /// The returned bytes include the trailing `SW1 SW2`.
    fn transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        trace!(command = %hex::encode(command), "Transmitting raw command");
        let result = self.do_transmit_raw(command);
        match &result {
            Ok(response) => {
                trace!(response = %hex::encode(response), "Received raw response");
            }
            Err(e) => {
                debug!(error = ?e, "Transport error during transmission");
            }
        }
        result
    }

    /// Internal implementation of transmit_raw
    /// This is the method that concrete implementations should override
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError>;

    /// Check if the transport is connected to a physical card
    fn is_connected(&self) -> bool;

    /// Reset the transport connection
    fn reset(&mut self) -> Result<(), TransportError>;
}

#[cfg(test)]
pub(crate) use mock::MockTransport;

#[cfg(test)]
mod mock {
    use super::*;

    /// Mock transport for testing
    #[derive(Debug, Clone)]
    pub(crate) struct MockTransport {
        /// Responses returned in order, the last one repeats
        pub(crate) responses: Vec<Bytes>,
        /// Commands that were sent
        pub(crate) commands: Vec<Bytes>,
        /// Whether the transport is connected
        pub(crate) connected: bool,
    }

    impl MockTransport {
        /// Create a new mock transport with the given responses
        pub(crate) fn new(responses: Vec<Bytes>) -> Self {
            Self {
                responses,
                commands: Vec::new(),
                connected: true,
            }
        }

        /// Create a new mock transport that always returns the given response
        pub(crate) fn with_response(response: impl Into<Bytes>) -> Self {
            Self::new(vec![response.into()])
        }

        /// Create a new mock transport that always returns success (90 00)
        pub(crate) fn with_success() -> Self {
            Self::with_response(Bytes::from_static(&[0x90, 0x00]))
        }

        /// Create a transport with no card behind it
        pub(crate) fn disconnected() -> Self {
            Self {
                connected: false,
                ..Self::new(Vec::new())
            }
        }
    }

    impl CardTransport for MockTransport {
        fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
            if !self.connected {
                return Err(TransportError::NoCard);
            }

            self.commands.push(Bytes::copy_from_slice(command));

            match self.responses.len() {
                0 => Err(TransportError::Transmission),
                1 => Ok(self.responses[0].clone()),
                _ => Ok(self.responses.remove(0)),
            }
        }

        fn is_connected(&self) -> bool {
            self.connected
        }

        fn reset(&mut self) -> Result<(), TransportError> {
            self.connected = true;
            self.commands.clear();
            Ok(())
        }
    }
}
