//! Host-side driver for the CryptoApplet ECDSA P-256 JavaCard applet
//!
//! The applet keeps one P-256 keypair and signs, verifies and exports it on
//! request. [`CryptoApplet`] drives it over any
//! [`CardTransport`](cryptoapplet_apdu_core::CardTransport):
//!
//! ```no_run
//! # fn demo<T: cryptoapplet_apdu_core::CardTransport>(transport: T) -> cryptoapplet::Result<()> {
//! use cryptoapplet::CryptoApplet;
//!
//! let mut applet = CryptoApplet::from_transport(transport);
//! applet.select()?;
//! applet.generate_key()?;
//! let signature = applet.sign_message(b"Hello")?;
//! assert!(applet.verify_signature(b"Hello", &signature)?);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]

mod applet;
pub mod commands;
mod config;
pub mod constants;
mod error;
pub mod types;
pub mod util;

pub use applet::CryptoApplet;
pub use commands::Parameter;
pub use config::AppletConfig;
pub use error::{Error, Result};
pub use types::{
    CurveParameters, DerField, Keypair, PrivateKey, PublicKey, Signature, SignatureError,
};

pub use constants::{CRYPTOAPPLET_AID, HELLO_WORLD};
