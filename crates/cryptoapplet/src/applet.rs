//! CryptoApplet application interface
//!
//! Wraps an [`Executor`] with the operations the applet supports. Every call
//! is a single request/response exchange and returns its result directly;
//! nothing read from the card is cached between calls.

use bytes::Bytes;
use cryptoapplet_apdu_core::prelude::*;
use tracing::{debug, warn};

use crate::commands::{
    GenerateKey, GetParameter, Hello, Parameter, SignHash, SignMessage, VerifySignature,
};
use crate::config::AppletConfig;
use crate::constants::HASH_LENGTH;
use crate::types::{CurveParameters, Keypair, PrivateKey, PublicKey, Signature};
use crate::util::to_array;
use crate::{Error, Result};

/// CryptoApplet session over a command executor
#[derive(Debug)]
pub struct CryptoApplet<E: Executor> {
    /// Command executor
    executor: E,
    /// Session configuration
    config: AppletConfig,
}

impl<E: Executor> CryptoApplet<E> {
    /// Create a session with the default configuration
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, AppletConfig::default())
    }

    /// Create a session with `config`
    pub const fn with_config(executor: E, config: AppletConfig) -> Self {
        Self { executor, config }
    }

    /// The session configuration
    pub const fn config(&self) -> &AppletConfig {
        &self.config
    }

    /// The underlying executor
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Mutable access to the underlying executor
    pub const fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    /// Give back the executor
    pub fn into_executor(self) -> E {
        self.executor
    }

    /// SELECT the applet
    ///
    /// With [`AppletConfig::verify_curve`] set, the curve parameters are read
    /// afterwards and must match NIST P-256.
    pub fn select(&mut self) -> Result<Response> {
        debug!(aid = %hex::encode(&self.config.aid), "Selecting CryptoApplet");
        let response = self.executor.select_application(&self.config.aid)?;

        if self.config.verify_curve {
            self.check_curve()?;
        }

        Ok(response)
    }

    /// Send HELLO and require the `"Hello World!"` reply
    pub fn hello(&mut self) -> Result<()> {
        self.executor.execute(&Hello)
    }

    /// Read one key or domain parameter, checking its length
    pub fn parameter(&mut self, parameter: Parameter) -> Result<Bytes> {
        debug!(%parameter, "Reading parameter");
        let value = self.executor.execute(&GetParameter::new(parameter))?;

        if value.len() != parameter.expected_len() {
            return Err(Error::UnexpectedLength {
                expected: parameter.expected_len(),
                actual: value.len(),
            });
        }

        Ok(value)
    }

    /// Read the curve domain parameters
    pub fn curve_parameters(&mut self) -> Result<CurveParameters> {
        Ok(CurveParameters {
            field: to_array(&self.parameter(Parameter::Field)?)?,
            a: to_array(&self.parameter(Parameter::A)?)?,
            b: to_array(&self.parameter(Parameter::B)?)?,
            generator: PublicKey::from_bytes(&self.parameter(Parameter::G)?)?,
            order: to_array(&self.parameter(Parameter::R)?)?,
        })
    }

    /// Require the card curve to be NIST P-256
    pub fn check_curve(&mut self) -> Result<CurveParameters> {
        let curve = self.curve_parameters()?;
        if let Err(err) = curve.verify_matches(&CurveParameters::nist_p256()) {
            warn!(error = %err, "Card curve differs from NIST P-256");
            return Err(err);
        }
        Ok(curve)
    }

    /// Generate a new keypair on the card
    pub fn generate_key(&mut self) -> Result<()> {
        debug!("Generating keypair");
        self.executor.execute(&GenerateKey)
    }

    /// Read the private scalar
    pub fn private_key(&mut self) -> Result<PrivateKey> {
        PrivateKey::from_bytes(&self.parameter(Parameter::Secret)?)
    }

    /// Read the public point
    pub fn public_key(&mut self) -> Result<PublicKey> {
        PublicKey::from_bytes(&self.parameter(Parameter::Public)?)
    }

    /// Generate a keypair and read both halves back
    pub fn keys(&mut self) -> Result<Keypair> {
        self.generate_key()?;
        Ok(Keypair {
            private_key: self.private_key()?,
            public_key: self.public_key()?,
        })
    }

    /// Sign a 32-byte digest
    pub fn sign_hash(&mut self, hash: &[u8; HASH_LENGTH]) -> Result<Signature> {
        debug!(hash = %hex::encode(hash), "Signing hash");
        self.executor.execute(&SignHash::new(hash))
    }

    /// Sign `message`; the card computes the SHA-256 digest
    pub fn sign_message(&mut self, message: &[u8]) -> Result<Signature> {
        debug!(length = message.len(), "Signing message");
        self.executor.execute(&SignMessage::new(message))
    }

    /// Verify `signature` over `message` with the card public key
    pub fn verify_signature(&mut self, message: &[u8], signature: &Signature) -> Result<bool> {
        let command = VerifySignature::new(message, signature)?;
        let valid = self.executor.execute(&command)?;
        debug!(valid, "Signature verified on card");
        Ok(valid)
    }
}

impl<T: CardTransport> CryptoApplet<CardExecutor<T>> {
    /// Create a session directly over a transport
    pub fn from_transport(transport: T) -> Self {
        Self::new(CardExecutor::new(transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CRYPTOAPPLET_AID, p256};
    use hex_literal::hex;
    use std::collections::VecDeque;

    /// Transport replaying canned replies and recording commands
    #[derive(Debug, Default)]
    struct ScriptedTransport {
        replies: VecDeque<Vec<u8>>,
        sent: Vec<Bytes>,
    }

    impl ScriptedTransport {
        fn with_replies<I: IntoIterator<Item = Vec<u8>>>(replies: I) -> Self {
            Self {
                replies: replies.into_iter().collect(),
                sent: Vec::new(),
            }
        }
    }

    impl CardTransport for ScriptedTransport {
        fn do_transmit_raw(&mut self, command: &[u8]) -> std::result::Result<Bytes, TransportError> {
            self.sent.push(Bytes::copy_from_slice(command));
            self.replies
                .pop_front()
                .map(Bytes::from)
                .ok_or(TransportError::Transmission)
        }

        fn is_connected(&self) -> bool {
            true
        }

        fn reset(&mut self) -> std::result::Result<(), TransportError> {
            self.sent.clear();
            Ok(())
        }
    }

    fn ok(data: &[u8]) -> Vec<u8> {
        [data, &[0x90, 0x00]].concat()
    }

    fn curve_replies() -> Vec<Vec<u8>> {
        let generator = [p256::GX, p256::GY].concat();
        vec![
            ok(&p256::FIELD),
            ok(&p256::A),
            ok(&p256::B),
            ok(&generator),
            ok(&p256::ORDER),
        ]
    }

    fn applet(replies: Vec<Vec<u8>>) -> CryptoApplet<CardExecutor<ScriptedTransport>> {
        CryptoApplet::from_transport(ScriptedTransport::with_replies(replies))
    }

    fn sent(applet: &CryptoApplet<CardExecutor<ScriptedTransport>>) -> &[Bytes] {
        &applet.executor().transport().sent
    }

    #[test]
    fn test_select_without_curve_check() {
        let config = AppletConfig::new().with_verify_curve(false);
        let mut applet = CryptoApplet::with_config(
            CardExecutor::new(ScriptedTransport::with_replies([ok(&[])])),
            config,
        );

        applet.select().unwrap();

        let select = &sent(&applet)[0];
        assert_eq!(&select[..5], &hex!("00A404000C"));
        assert_eq!(&select[5..], CRYPTOAPPLET_AID);
    }

    #[test]
    fn test_select_checks_curve() {
        let mut replies = vec![ok(&[])];
        replies.extend(curve_replies());
        let mut applet = applet(replies);

        applet.select().unwrap();

        let p1: Vec<u8> = sent(&applet)[1..].iter().map(|c| c[2]).collect();
        assert_eq!(p1, [0x02, 0x03, 0x04, 0x05, 0x06]);
    }

    #[test]
    fn test_select_rejects_other_curve() {
        let mut replies = vec![ok(&[])];
        replies.extend(curve_replies());
        replies[3] = ok(&[0x07; 32]);
        let mut applet = applet(replies);

        assert_eq!(
            applet.select().unwrap_err(),
            Error::CurveMismatch {
                parameter: Parameter::B
            }
        );
    }

    #[test]
    fn test_select_not_found() {
        let mut applet = applet(vec![hex!("6A82").to_vec()]);
        let err = applet.select().unwrap_err();

        assert!(err.status_word().is_some_and(|sw| sw == StatusWord::new(0x6A, 0x82)));
        assert_eq!(sent(&applet).len(), 1);
    }

    #[test]
    fn test_hello() {
        let mut applet = applet(vec![ok(b"Hello World!")]);
        applet.hello().unwrap();
        assert_eq!(sent(&applet)[0].as_ref(), hex!("00400000"));
    }

    #[test]
    fn test_parameter_length_is_checked() {
        let mut applet = applet(vec![ok(&[0x01; 31])]);
        assert_eq!(
            applet.parameter(Parameter::Field).unwrap_err(),
            Error::UnexpectedLength {
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn test_keys() {
        let public = [[0x11; 32], [0x22; 32]].concat();
        let mut applet = applet(vec![ok(&[]), ok(&[0x33; 32]), ok(&public)]);

        let keypair = applet.keys().unwrap();
        assert_eq!(keypair.private_key.as_bytes(), &[0x33; 32]);
        assert_eq!(keypair.public_key.x, [0x11; 32]);
        assert_eq!(keypair.public_key.y, [0x22; 32]);

        let commands: Vec<&[u8]> = sent(&applet).iter().map(|c| c.as_ref()).collect();
        assert_eq!(
            commands,
            [&hex!("00ED0000")[..], &hex!("00EC0000"), &hex!("00EC0100")]
        );
    }

    #[test]
    fn test_sign_and_verify() {
        let der = hex!("3006020101020102");
        let mut applet = applet(vec![ok(&der), ok(&der), ok(&[0x01]), ok(&[0x00])]);

        let by_hash = applet.sign_hash(&[0xAB; 32]).unwrap();
        let by_message = applet.sign_message(b"Hello").unwrap();
        assert_eq!(by_hash, by_message);

        assert!(applet.verify_signature(b"Hello", &by_hash).unwrap());
        assert!(!applet.verify_signature(b"Hello", &by_hash).unwrap());

        let verify = &sent(&applet)[2];
        assert_eq!(&verify[..5], &hex!("00EB05080D"));
    }

    #[test]
    fn test_sign_hash_rejected_length() {
        let mut applet = applet(vec![hex!("6720").to_vec()]);
        assert_eq!(
            applet.sign_hash(&[0u8; 32]).unwrap_err(),
            Error::InvalidHashLength
        );
    }

    #[test]
    fn test_verify_too_long_sends_nothing() {
        let mut applet = applet(vec![]);
        let signature = Signature::new(alloy_primitives::U256::MAX, alloy_primitives::U256::MAX);

        let err = applet.verify_signature(&[0u8; 200], &signature).unwrap_err();
        assert_eq!(err, Error::from(CommandError::data_too_long(272, 255)));
        assert!(sent(&applet).is_empty());
    }

    #[test]
    fn test_transport_error_propagates() {
        let mut applet = applet(vec![]);
        assert_eq!(
            applet.hello().unwrap_err(),
            Error::from(TransportError::Transmission)
        );
    }
}
