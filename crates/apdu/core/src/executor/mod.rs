//! Executor for APDU command execution
//!
//! Ties a [`CardTransport`] to the command codec: encode, exchange once,
//! split the reply, and optionally validate the status word. There is no
//! retry at this layer.

use bytes::Bytes;
use core::fmt;
use tracing::{Level, debug, info, instrument, trace, warn};

use crate::command::{ApduCommand, Select};
use crate::response::Response;
use crate::response::status::StatusWord;
use crate::transport::CardTransport;
use crate::{Error, Result};

/// Send one command over `transport` and split the reply
///
/// The status word is returned as received; use
/// [`Response::validate_status`] to require success.
pub fn transmit<C, T>(command: &C, transport: &mut T) -> Result<Response>
where
    C: ApduCommand,
    T: CardTransport + ?Sized,
{
    let raw_command = command.to_bytes()?;
    let raw_response = transport.transmit_raw(&raw_command)?;
    parse_reply(command.instruction(), raw_response)
}

/// SELECT the application `aid` and require a `90 00` reply
pub fn select_application<T>(aid: &[u8], transport: &mut T) -> Result<Response>
where
    T: CardTransport + ?Sized,
{
    let response = transmit(&Select::by_name(Bytes::copy_from_slice(aid)), transport)?;
    response.validate_status()?;
    Ok(response)
}

fn parse_reply(ins: u8, raw_response: Bytes) -> Result<Response> {
    let response = Response::try_from(raw_response)?;
    log_status(ins, response.status());
    Ok(response)
}

fn log_status(ins: u8, status: StatusWord) {
    let level = status.tracing_level();
    if level == Level::DEBUG {
        debug!(ins = format_args!("{ins:#04x}"), %status, "Command completed");
    } else if level == Level::INFO {
        info!(
            ins = format_args!("{ins:#04x}"),
            %status,
            description = status.description(),
            "Command completed with warning"
        );
    } else {
        warn!(
            ins = format_args!("{ins:#04x}"),
            %status,
            description = status.description(),
            "Command failed"
        );
    }
}

/// Trait for APDU command execution
pub trait Executor: Send + Sync + fmt::Debug {
    /// Transmit raw APDU bytes and return the raw reply
    #[instrument(level = "trace", skip(self), fields(executor = std::any::type_name::<Self>()))]
    fn transmit(&mut self, command: &[u8]) -> Result<Bytes> {
        trace!(command = %hex::encode(command), "Transmitting command");
        let response = self.do_transmit(command);
        match &response {
            Ok(bytes) => {
                trace!(response = %hex::encode(bytes), "Received response");
            }
            Err(err) => {
                debug!(error = ?err, "Error during transmission");
            }
        }
        response
    }

    /// Internal implementation of transmit
    fn do_transmit(&mut self, command: &[u8]) -> Result<Bytes>;

    /// Encode `command`, exchange it and split the reply
    ///
    /// Argument errors are raised before anything is sent.
    fn transmit_command<C: ApduCommand>(&mut self, command: &C) -> Result<Response>
    where
        Self: Sized,
    {
        let raw_command = command.to_bytes()?;
        let raw_response = self.transmit(&raw_command)?;
        parse_reply(command.instruction(), raw_response)
    }

    /// Execute a typed APDU command
    fn execute<C: ApduCommand>(&mut self, command: &C) -> core::result::Result<C::Success, C::Error>
    where
        Self: Sized,
    {
        let response = self.transmit_command(command)?;
        C::parse_response(response)
    }

    /// SELECT the application `aid`, requiring a `90 00` reply
    fn select_application(&mut self, aid: &[u8]) -> Result<Response>
    where
        Self: Sized,
    {
        self.execute(&Select::by_name(Bytes::copy_from_slice(aid)))
    }

    /// Reset the executor, including the transport
    fn reset(&mut self) -> Result<()>;
}

/// Executor driving a single card transport
#[derive(Debug)]
pub struct CardExecutor<T: CardTransport> {
    /// The transport used for communication
    transport: T,
}

impl<T: CardTransport> CardExecutor<T> {
    /// Create a new card executor with the given transport
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get a reference to the underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the underlying transport
    pub const fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Take ownership of the transport and return it
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T: CardTransport> Executor for CardExecutor<T> {
    fn do_transmit(&mut self, command: &[u8]) -> Result<Bytes> {
        Ok(self.transport.transmit_raw(command)?)
    }

    fn reset(&mut self) -> Result<()> {
        Ok(self.transport.reset()?)
    }
}

impl<T: CardTransport> From<T> for CardExecutor<T> {
    fn from(transport: T) -> Self {
        Self::new(transport)
    }
}
