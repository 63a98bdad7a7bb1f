//! Session configuration for the CryptoApplet

use bytes::Bytes;

use crate::Result;
use crate::constants::CRYPTOAPPLET_AID;
use crate::util::parse_aid;

/// Configuration options for a [`CryptoApplet`](crate::CryptoApplet) session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppletConfig {
    /// Application identifier sent with SELECT
    pub aid: Bytes,

    /// Read the curve parameters after SELECT and require NIST P-256
    pub verify_curve: bool,
}

impl Default for AppletConfig {
    fn default() -> Self {
        Self {
            aid: Bytes::from_static(CRYPTOAPPLET_AID),
            verify_curve: true,
        }
    }
}

impl AppletConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application identifier
    pub fn with_aid(mut self, aid: impl Into<Bytes>) -> Self {
        self.aid = aid.into();
        self
    }

    /// Set the application identifier from hex
    pub fn with_aid_hex(self, aid: &str) -> Result<Self> {
        Ok(self.with_aid(parse_aid(aid)?))
    }

    /// Set whether SELECT also checks the curve parameters
    pub const fn with_verify_curve(mut self, verify_curve: bool) -> Self {
        self.verify_curve = verify_curve;
        self
    }
}
