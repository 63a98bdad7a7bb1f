//! Core traits and types for exchanging APDUs with the CryptoApplet
//!
//! This crate provides the host side of the ISO/IEC 7816-4 command/response
//! protocol used to talk to the applet:
//!
//! - Framing short commands (`00 | INS | P1 | P2 | [LC | DATA]`)
//! - Splitting responses into data and the `SW1 SW2` trailer
//! - Validating status words against `90 00`
//! - Abstracting the physical connection behind [`CardTransport`]
//!
//! Reader discovery and connection management are left to transport
//! implementations supplied by the caller.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::{Bytes, BytesMut};

pub mod command;
pub mod error;
pub mod executor;
pub mod response;
pub mod transport;

pub use command::{ApduCommand, Command, Select, encode};
pub use error::{Error, Result};
pub use executor::{CardExecutor, Executor, select_application, transmit};
pub use response::Response;
pub use response::status::StatusWord;
pub use transport::{CardTransport, SharedTransport, TransportError};

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::{
        Bytes, BytesMut, CardExecutor, Command, Error, Response, Result,
        command::{ApduCommand, CommandError, Select},
        executor::Executor,
        response::error::{ResponseError, StatusError},
        response::status::{StatusWord, common as status},
        transport::{CardTransport, SharedTransport, TransportError},
    };
}
