//! Known answer tests for ECDSA.

pub mod p192;
pub mod p224;

/// ECDSA test vector: a prehashed message signed with a fixed nonce.
///
/// Every field is big-endian, padded to the width of the curve.
#[derive(Clone, Copy, Debug)]
pub struct TestVector {
    /// Message digest
    pub m: &'static [u8],

    /// Secret key
    pub d: &'static [u8],

    /// Public key x-coordinate
    pub q_x: &'static [u8],

    /// Public key y-coordinate
    pub q_y: &'static [u8],

    /// Nonce
    pub k: &'static [u8],

    /// Signature `r` component
    pub r: &'static [u8],

    /// Signature `s` component
    pub s: &'static [u8],
}
