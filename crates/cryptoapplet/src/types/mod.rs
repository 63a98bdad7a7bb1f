//! Values exchanged with the applet

mod curve;
mod keys;
mod signature;

pub use curve::CurveParameters;
pub use keys::{Keypair, PrivateKey, PublicKey};
pub use signature::{DerField, Signature, SignatureError};
