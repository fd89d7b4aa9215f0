//! Elliptic Curve Digital Signature Algorithm (ECDSA) as defined in FIPS 186-5 and SEC 1.
//!
//! Signing is deterministic per [RFC 6979]: the nonce is derived with HMAC-DRBG from the secret
//! key and the message digest. The `RandomizedSigner` impls additionally mix caller randomness
//! into the DRBG ([RFC 6979 § 3.6]), which keeps the signature valid under either source.
//!
//! ## Usage
//!
//! ```
//! # fn example() -> ecdsa_engine::Result<()> {
//! use ecdsa_engine::{
//!     CurveName, SigningKey,
//!     signature::{Signer, Verifier},
//! };
//!
//! // Signing
//! let signing_key = SigningKey::from_bytes(
//!     CurveName::P192.curve(),
//!     &[0x42; 24],
//! )?;
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature = signing_key.sign(message);
//!
//! // Verifying
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify(message, &signature).is_ok());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [RFC 6979]: https://www.rfc-editor.org/rfc/rfc6979
//! [RFC 6979 § 3.6]: https://www.rfc-editor.org/rfc/rfc6979#section-3.6

pub mod hazmat;

mod der;
mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};
pub use signature;

use crate::{Curve, Error, Result};
use alloc::vec::Vec;
use core::fmt;
use primefield::{FieldBytes, FieldElement, MAX_FIELD_BYTES};
use subtle::{ConditionallySelectable, ConstantTimeGreater};

/// ECDSA signature: the scalars `r` and `s`, both in `[1, n-1]`, over a registered curve.
///
/// Parsing needs the curve out of band for every encoding since none of them name it.
#[derive(Copy, Clone)]
pub struct Signature {
    r: FieldElement,
    s: FieldElement,
    curve: &'static Curve,
}

impl Signature {
    /// Create a signature from its scalar components.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScalar`] if either scalar is zero or not reduced modulo the curve order.
    pub fn from_scalars(curve: &'static Curve, r: FieldElement, s: FieldElement) -> Result<Self> {
        let order = curve.order();

        if r.modulus() != order || s.modulus() != order || bool::from(r.is_zero() | s.is_zero()) {
            return Err(Error::InvalidScalar);
        }

        Ok(Self { r, s, curve })
    }

    /// Parse a raw `r || s` signature, each component big-endian and exactly
    /// [`Curve::scalar_bytes`] wide.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScalar`] on a length mismatch or a component outside `[1, n-1]`.
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let width = curve.scalar_bytes();

        if bytes.len() != 2 * width {
            return Err(Error::InvalidScalar);
        }

        let (r, s) = bytes.split_at(width);
        Self::from_scalar_bytes(curve, r, s)
    }

    /// Parse big-endian `r` and `s` which may omit leading zeros.
    pub(crate) fn from_scalar_bytes(curve: &'static Curve, r: &[u8], s: &[u8]) -> Result<Self> {
        Self::from_scalars(
            curve,
            scalar_from_slice(curve, r)?,
            scalar_from_slice(curve, s)?,
        )
    }

    /// Serialize as raw `r || s`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 * self.curve.scalar_bytes());
        bytes.extend_from_slice(&self.r_bytes());
        bytes.extend_from_slice(&self.s_bytes());
        bytes
    }

    /// The `r` component.
    pub fn r(&self) -> FieldElement {
        self.r
    }

    /// The `s` component.
    pub fn s(&self) -> FieldElement {
        self.s
    }

    /// Split the signature into its `r` and `s` scalars.
    pub fn split_scalars(&self) -> (FieldElement, FieldElement) {
        (self.r, self.s)
    }

    /// Big-endian `r`, padded to the scalar width.
    pub fn r_bytes(&self) -> FieldBytes {
        self.r.to_be_bytes()
    }

    /// Big-endian `s`, padded to the scalar width.
    pub fn s_bytes(&self) -> FieldBytes {
        self.s.to_be_bytes()
    }

    /// Curve this signature was produced over.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Is `s` in the upper half of `[1, n-1]`?
    pub fn is_high_s(&self) -> bool {
        let half_order = self.curve.order().shr_vartime(1);
        ConstantTimeGreater::ct_gt(&self.s.to_canonical(), &half_order).into()
    }

    /// Normalize the signature into "low S" form, replacing `s` with `n - s` when `s > n/2`.
    ///
    /// Both forms verify; low-S form removes the malleability some protocols care about.
    pub fn normalize_s(&self) -> Self {
        let half_order = self.curve.order().shr_vartime(1);
        let is_high = ConstantTimeGreater::ct_gt(&self.s.to_canonical(), &half_order);

        Self {
            s: FieldElement::conditional_select(&self.s, &-self.s, is_high),
            ..*self
        }
    }
}

/// Parse a big-endian scalar of at most [`Curve::scalar_bytes`] bytes, in `[1, n-1]`.
pub(crate) fn scalar_from_slice(curve: &Curve, bytes: &[u8]) -> Result<FieldElement> {
    let width = curve.scalar_bytes();

    if bytes.is_empty() || bytes.len() > width {
        return Err(Error::InvalidScalar);
    }

    let mut padded = [0u8; MAX_FIELD_BYTES];
    padded[width - bytes.len()..width].copy_from_slice(bytes);

    let scalar = FieldElement::from_be_bytes(curve.params().scalar_params(), &padded[..width]);
    Option::<FieldElement>::from(scalar)
        .filter(|scalar| !bool::from(scalar.is_zero()))
        .ok_or(Error::InvalidScalar)
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.r == other.r && self.s == other.s
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecdsa_engine::Signature<{}>(", self.curve.name())?;

        for byte in self.to_bytes() {
            write!(f, "{byte:02X}")?;
        }

        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::{CurveName, Error};
    use hex_literal::hex;

    const SIG_P192: [u8; 48] = hex!(
        "4B0B8CE98A92866A2820E20AA6B75B56382E0F9BFD5ECB55"
        "CCDB006926EA9565CBADC840829D8C384E06DE1F1E381B85"
    );

    #[test]
    fn raw_round_trip() {
        let curve = CurveName::P192.curve();
        let sig = Signature::from_bytes(curve, &SIG_P192).unwrap();
        assert_eq!(sig.to_bytes(), SIG_P192);
        assert_eq!(sig.r_bytes().as_slice(), &SIG_P192[..24]);
        assert_eq!(sig.s_bytes().as_slice(), &SIG_P192[24..]);
    }

    #[test]
    fn rejects_wrong_length() {
        let curve = CurveName::P192.curve();
        assert_eq!(
            Signature::from_bytes(curve, &SIG_P192[..47]),
            Err(Error::InvalidScalar)
        );
        assert_eq!(
            Signature::from_bytes(CurveName::P224.curve(), &SIG_P192),
            Err(Error::InvalidScalar)
        );
    }

    #[test]
    fn rejects_zero_and_overflowing_components() {
        let curve = CurveName::P192.curve();

        let mut bytes = SIG_P192;
        bytes[..24].fill(0);
        assert_eq!(Signature::from_bytes(curve, &bytes), Err(Error::InvalidScalar));

        let mut bytes = SIG_P192;
        bytes[24..].fill(0xff);
        assert_eq!(Signature::from_bytes(curve, &bytes), Err(Error::InvalidScalar));
    }

    #[test]
    fn normalize_s() {
        let curve = CurveName::P192.curve();
        let sig = Signature::from_bytes(curve, &SIG_P192).unwrap();
        assert!(sig.is_high_s());

        let normalized = sig.normalize_s();
        assert!(!normalized.is_high_s());
        assert_eq!(normalized.r(), sig.r());
        assert_eq!(normalized.s(), -sig.s());
        assert_eq!(normalized.normalize_s(), normalized);
    }
}
