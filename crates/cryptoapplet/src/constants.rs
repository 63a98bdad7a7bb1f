//! Wire constants of the CryptoApplet

/// Application identifier of the CryptoApplet
pub const CRYPTOAPPLET_AID: &[u8] = b"\x57\x14\xE4\x72\x0A\xF2\x15\x2C\xB4\x49\xB1\xD8";

/// Reply to the HELLO instruction
pub const HELLO_WORLD: &[u8] = b"Hello World!";

/// Length of a SHA-256 digest accepted by the sign-hash instruction
pub const HASH_LENGTH: usize = 32;

/// Length of one P-256 field element or scalar
pub const FIELD_ELEMENT_LENGTH: usize = 32;

/// Instruction bytes
pub mod ins {
    /// Returns [`HELLO_WORLD`](super::HELLO_WORLD)
    pub const HELLO: u8 = 0x40;
    /// SELECT by name
    pub const SELECT: u8 = 0xA4;
    /// Sign a precomputed 32-byte hash
    pub const ECDSA_SIGN: u8 = 0xEA;
    /// Verify `message || signature` on the card
    pub const ECDSA_VERIFY: u8 = 0xEB;
    /// Read a key or domain parameter, selected by P1
    pub const ECDSA_CONFIG: u8 = 0xEC;
    /// Generate a fresh keypair
    pub const ECDSA_GENKEY: u8 = 0xED;
    /// Hash (SHA-256) and sign a message
    pub const ECDSA_SIGN_MESSAGE: u8 = 0xEE;
}

/// P1 values of the `ECDSA_CONFIG` instruction
pub mod param {
    pub const SECRET: u8 = 0x00;
    pub const PUBLIC: u8 = 0x01;
    pub const FIELD: u8 = 0x02;
    pub const A: u8 = 0x03;
    pub const B: u8 = 0x04;
    pub const G: u8 = 0x05;
    pub const R: u8 = 0x06;
}

/// Status words, including the ISO 7816-4 ones
pub mod status {
    use cryptoapplet_apdu_core::StatusWord;

    pub use cryptoapplet_apdu_core::response::status::common::*;

    /// Sign-hash input was not exactly 32 bytes
    pub const SW_WRONG_HASH_LENGTH: StatusWord = StatusWord::new(0x67, 0x20);
}

/// NIST P-256 (secp256r1) domain parameters, big-endian
pub mod p256 {
    use hex_literal::hex;

    /// Field prime p
    pub const FIELD: [u8; 32] =
        hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    /// Coefficient a (p - 3)
    pub const A: [u8; 32] =
        hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
    /// Coefficient b
    pub const B: [u8; 32] =
        hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
    /// Base point x coordinate
    pub const GX: [u8; 32] =
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
    /// Base point y coordinate
    pub const GY: [u8; 32] =
        hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");
    /// Group order n
    pub const ORDER: [u8; 32] =
        hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
}
