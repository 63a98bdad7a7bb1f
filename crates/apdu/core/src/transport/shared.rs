//! A transport handle that can be shared between threads

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::{Mutex, MutexGuard};

use super::{CardTransport, TransportError};

/// Cloneable handle to a single card connection
///
/// Every exchange holds the lock from request until reply, so callers on
/// different threads queue instead of interleaving commands on the card.
/// Use [`SharedTransport::lock`] to keep the card to yourself across a
/// sequence of commands.
#[derive(Debug)]
pub struct SharedTransport<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for SharedTransport<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: CardTransport> SharedTransport<T> {
    /// Wrap a transport
    pub fn new(transport: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(transport)),
        }
    }

    /// Take exclusive access to the underlying transport
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock()
    }

    /// Recover the transport if this is the last handle
    pub fn into_inner(self) -> Result<T, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T: CardTransport> CardTransport for SharedTransport<T> {
    // The inner transport's tracing is skipped, the outer transmit_raw logs
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        self.inner.lock().do_transmit_raw(command)
    }

    fn is_connected(&self) -> bool {
        self.inner.lock().is_connected()
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        self.inner.lock().reset()
    }
}
