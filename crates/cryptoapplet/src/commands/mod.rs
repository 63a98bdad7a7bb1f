//! Typed APDU commands understood by the CryptoApplet

mod generate_key;
mod get_parameter;
mod hello;
mod sign_hash;
mod sign_message;
mod verify_signature;

pub use generate_key::GenerateKey;
pub use get_parameter::{GetParameter, Parameter};
pub use hello::Hello;
pub use sign_hash::SignHash;
pub use sign_message::SignMessage;
pub use verify_signature::VerifySignature;

use cryptoapplet_apdu_core::Response;

use crate::Result;
use crate::types::Signature;

/// Decode the DER signature carried by a successful signing reply
fn parse_signature(response: Response) -> Result<Signature> {
    let der = response.into_data()?;
    Ok(Signature::from_der(&der)?)
}
