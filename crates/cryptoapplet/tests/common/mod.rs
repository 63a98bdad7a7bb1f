//! Common test utilities

#![allow(dead_code, unreachable_pub)]

use cryptoapplet::CurveParameters;
use cryptoapplet::constants::{CRYPTOAPPLET_AID, HASH_LENGTH, HELLO_WORLD, ins, param};
use cryptoapplet_apdu_core::{Bytes, CardTransport, Command, TransportError};
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::signature::{Signer, Verifier};
use k256::ecdsa::{Signature as K256Signature, SigningKey};
use rand::Rng;

/// Install a `RUST_LOG` driven subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory stand-in for a card running the CryptoApplet
///
/// Reports the P-256 domain parameters like the real applet, but signs with
/// secp256k1 through `k256`. The host only handles the DER framing and the
/// raw coordinates, so the curve behind the signatures does not matter here.
#[derive(Debug)]
pub struct EmulatedApplet {
    signing_key: SigningKey,
    curve: CurveParameters,
    selected: bool,
    padded_signatures: bool,
    /// Number of exchanges seen
    pub exchanges: usize,
}

impl Default for EmulatedApplet {
    fn default() -> Self {
        Self::new()
    }
}

impl EmulatedApplet {
    pub fn new() -> Self {
        Self {
            signing_key: random_key(),
            curve: CurveParameters::nist_p256(),
            selected: false,
            padded_signatures: false,
            exchanges: 0,
        }
    }

    /// Report `curve` through `ECDSA_CONFIG`
    pub fn with_curve(mut self, curve: CurveParameters) -> Self {
        self.curve = curve;
        self
    }

    /// Emit every integer as 33 content bytes, with redundant leading zeros
    pub fn with_padded_signatures(mut self) -> Self {
        self.padded_signatures = true;
        self
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    fn process(&mut self, command: &Command) -> Vec<u8> {
        if command.ins == ins::SELECT {
            self.selected = command.data.as_ref() == CRYPTOAPPLET_AID;
            return if self.selected {
                ok(&[])
            } else {
                sw(0x6A, 0x82)
            };
        }

        if !self.selected {
            return sw(0x69, 0x85);
        }

        match command.ins {
            ins::HELLO => ok(HELLO_WORLD),
            ins::ECDSA_CONFIG => self.parameter(command.p1),
            ins::ECDSA_GENKEY => {
                self.signing_key = random_key();
                ok(&[])
            }
            ins::ECDSA_SIGN => {
                if command.data.len() != HASH_LENGTH {
                    return sw(0x67, 0x20);
                }
                let signature: K256Signature = self
                    .signing_key
                    .sign_prehash(&command.data)
                    .expect("32-byte prehash");
                ok(&self.encode(&signature))
            }
            ins::ECDSA_SIGN_MESSAGE => {
                let signature: K256Signature = self.signing_key.sign(&command.data);
                ok(&self.encode(&signature))
            }
            ins::ECDSA_VERIFY => {
                let message_len = usize::from(command.p1);
                if command.data.len() != message_len + usize::from(command.p2) {
                    return sw(0x67, 0x00);
                }

                let (message, der) = command.data.split_at(message_len);
                let valid = K256Signature::from_der(der).is_ok_and(|signature| {
                    self.signing_key
                        .verifying_key()
                        .verify(message, &signature)
                        .is_ok()
                });
                ok(&[u8::from(valid)])
            }
            _ => sw(0x6D, 0x00),
        }
    }

    fn parameter(&self, p1: u8) -> Vec<u8> {
        match p1 {
            param::SECRET => ok(self.signing_key.to_bytes().as_slice()),
            param::PUBLIC => {
                let point = self.signing_key.verifying_key().to_encoded_point(false);
                ok(&point.as_bytes()[1..])
            }
            param::FIELD => ok(&self.curve.field),
            param::A => ok(&self.curve.a),
            param::B => ok(&self.curve.b),
            param::G => ok(&self.curve.generator.to_bytes()),
            param::R => ok(&self.curve.order),
            _ => sw(0x6A, 0x86),
        }
    }

    fn encode(&self, signature: &K256Signature) -> Vec<u8> {
        if !self.padded_signatures {
            return signature.to_der().as_bytes().to_vec();
        }

        let (r, s) = signature.split_bytes();
        let mut der = vec![0x30, 0x46];
        for scalar in [r, s] {
            der.extend_from_slice(&[0x02, 0x21, 0x00]);
            der.extend_from_slice(&scalar);
        }
        der
    }
}

impl CardTransport for EmulatedApplet {
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        self.exchanges += 1;
        let reply = match Command::from_bytes(command) {
            Ok(command) => self.process(&command),
            Err(_) => sw(0x67, 0x00),
        };
        Ok(Bytes::from(reply))
    }

    fn is_connected(&self) -> bool {
        true
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        self.selected = false;
        Ok(())
    }
}

fn random_key() -> SigningKey {
    let mut rng = rand::rng();
    loop {
        if let Ok(key) = SigningKey::from_slice(&rng.random::<[u8; 32]>()) {
            return key;
        }
    }
}

fn ok(data: &[u8]) -> Vec<u8> {
    [data, &[0x90, 0x00]].concat()
}

fn sw(sw1: u8, sw2: u8) -> Vec<u8> {
    vec![sw1, sw2]
}
