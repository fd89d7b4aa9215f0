//! ECDSA verifying: checking signed messages using a public key.

use super::{Signature, hazmat};
use crate::{Curve, Error, Result, registry::with_hash};
use alloc::vec::Vec;
use core::fmt;
use digest::Digest;
use primeorder::{AffinePoint, sec1::EncodedPoint};
use signature::{DigestVerifier, Verifier, hazmat::PrehashVerifier};

/// ECDSA public key used for verifying signatures.
///
/// Always a valid, non-identity point on its curve.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature
/// - [`DigestVerifier`]: verify a message [`Digest`] against a provided key and signature
/// - [`PrehashVerifier`]: verify the low-level raw output bytes of a message digest
#[derive(Clone, Copy)]
pub struct VerifyingKey {
    point: AffinePoint<'static>,
    curve: &'static Curve,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedPoint`] if the point is the identity or lies on another curve.
    pub fn from_affine(curve: &'static Curve, point: AffinePoint<'static>) -> Result<Self> {
        if point.curve() != curve.params() || bool::from(point.is_identity()) {
            return Err(Error::MalformedPoint);
        }

        Ok(Self { point, curve })
    }

    /// Public key of a secret scalar in `[1, n-1]`, which is never the identity.
    pub(crate) fn from_secret_point(curve: &'static Curve, point: AffinePoint<'static>) -> Self {
        debug_assert!(!bool::from(point.is_identity()));
        Self { point, curve }
    }

    /// Parse raw `x || y` coordinates, each big-endian and exactly [`Curve::field_bytes`] wide.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedPoint`] on a length mismatch, a coordinate not below `p`, or a point
    /// not on the curve.
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let width = curve.field_bytes();

        if bytes.len() != 2 * width {
            return Err(Error::MalformedPoint);
        }

        let (x, y) = bytes.split_at(width);
        let point = AffinePoint::from_be_coordinates(curve.params(), x, y);
        let point = Option::<AffinePoint<'static>>::from(point).ok_or(Error::MalformedPoint)?;
        Self::from_affine(curve, point)
    }

    /// Parse a SEC1 encoded point (compressed or uncompressed).
    ///
    /// # Errors
    ///
    /// [`Error::MalformedPoint`] if the encoding is invalid or encodes the identity.
    pub fn from_sec1_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let point = AffinePoint::from_sec1_bytes(curve.params(), bytes)?;
        Self::from_affine(curve, point)
    }

    /// Serialize as raw `x || y`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 * self.curve.field_bytes());
        bytes.extend_from_slice(&self.point.x_bytes());
        bytes.extend_from_slice(&self.point.y_bytes());
        bytes
    }

    /// Serialize as a SEC1 encoded point, optionally compressed.
    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        self.to_encoded_point(compress).as_bytes().to_vec()
    }

    /// Serialize this [`VerifyingKey`] as a SEC1 [`EncodedPoint`], optionally applying point
    /// compression.
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        self.point.to_encoded_point(compress)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint<'static> {
        &self.point
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Verify a signature over a message digest.
    ///
    /// # Errors
    ///
    /// [`Error::BadSignature`] if the signature is invalid for this key and digest.
    pub fn verify_prehashed(&self, prehash: &[u8], signature: &Signature) -> Result<()> {
        hazmat::verify_prehashed(self.curve, &self.point, prehash, signature)
    }
}

//
// `*Verifier` trait impls
//

impl<D> DigestVerifier<D, Signature> for VerifyingKey
where
    D: Digest,
{
    fn verify_digest(&self, msg_digest: D, signature: &Signature) -> signature::Result<()> {
        Ok(self.verify_prehashed(&msg_digest.finalize(), signature)?)
    }
}

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        Ok(self.verify_prehashed(prehash, signature)?)
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        with_hash!(self.curve.hash(), D => self.verify_digest(D::new_with_prefix(msg), signature))
    }
}

//
// Other trait impls
//

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.point == other.point
    }
}

impl Eq for VerifyingKey {}

impl fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerifyingKey<{}>(", self.curve.name())?;

        for byte in self.to_sec1_bytes(true) {
            write!(f, "{byte:02X}")?;
        }

        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::VerifyingKey;
    use crate::{CurveName, Error, Signature, SigningKey};
    use alloc::format;
    use hex_literal::hex;
    use primeorder::AffinePoint;
    use sha2::{Digest, Sha256};
    use signature::{DigestVerifier, Signer, Verifier, hazmat::PrehashVerifier};

    const PUBLIC_P192: [u8; 48] = hex!(
        "AC2C77F529F91689FEA0EA5EFEC7F210D8EEA0B9E047ED56"
        "3BC723E57670BD4887EBC732C523063D0A7C957BC97C1C43"
    );

    const SIG_P192: [u8; 48] = hex!(
        "4B0B8CE98A92866A2820E20AA6B75B56382E0F9BFD5ECB55"
        "CCDB006926EA9565CBADC840829D8C384E06DE1F1E381B85"
    );

    #[test]
    fn verifies_rfc6979_sample() {
        let curve = CurveName::P192.curve();
        let key = VerifyingKey::from_bytes(curve, &PUBLIC_P192).unwrap();
        let sig = Signature::from_bytes(curve, &SIG_P192).unwrap();

        assert!(key.verify(b"sample", &sig).is_ok());
        assert!(key.verify_digest(Sha256::new_with_prefix(b"sample"), &sig).is_ok());
        assert!(key.verify_prehash(&Sha256::digest(b"sample"), &sig).is_ok());
        assert!(key.verify(b"simple", &sig).is_err());
        assert!(key.verify(b"sample", &sig.normalize_s()).is_ok());
    }

    #[test]
    fn sec1_round_trip() {
        let curve = CurveName::P192.curve();
        let key = VerifyingKey::from_bytes(curve, &PUBLIC_P192).unwrap();

        let uncompressed = key.to_sec1_bytes(false);
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(&uncompressed[1..], &PUBLIC_P192[..]);
        assert_eq!(VerifyingKey::from_sec1_bytes(curve, &uncompressed), Ok(key));

        let compressed = key.to_sec1_bytes(true);
        assert_eq!(compressed.len(), 25);
        assert_eq!(VerifyingKey::from_sec1_bytes(curve, &compressed), Ok(key));
    }

    #[test]
    fn rejects_malformed_points() {
        let curve = CurveName::P192.curve();

        let mut off_curve = PUBLIC_P192;
        off_curve[47] ^= 1;
        assert_eq!(VerifyingKey::from_bytes(curve, &off_curve), Err(Error::MalformedPoint));

        let mut too_large = PUBLIC_P192;
        too_large[..24].fill(0xff);
        assert_eq!(VerifyingKey::from_bytes(curve, &too_large), Err(Error::MalformedPoint));

        assert_eq!(
            VerifyingKey::from_bytes(curve, &PUBLIC_P192[..47]),
            Err(Error::MalformedPoint)
        );
        assert_eq!(VerifyingKey::from_sec1_bytes(curve, &[0]), Err(Error::MalformedPoint));
        assert_eq!(
            VerifyingKey::from_affine(curve, AffinePoint::identity(curve.params())),
            Err(Error::MalformedPoint)
        );
    }

    #[test]
    fn rejects_points_from_other_curves() {
        let p192 = CurveName::P192.curve();
        let p224 = CurveName::P224.curve();
        assert_eq!(
            VerifyingKey::from_affine(p192, p224.generator()),
            Err(Error::MalformedPoint)
        );
    }

    #[test]
    fn signature_over_another_curve_is_rejected() {
        let p192 = SigningKey::from_bytes(CurveName::P192.curve(), &[3; 24]).unwrap();
        let p256 = SigningKey::from_bytes(CurveName::P256.curve(), &[3; 32]).unwrap();

        let sig = p256.sign(b"cross-curve");
        let verifying_key = p192.verifying_key();
        assert!(verifying_key.verify(b"cross-curve", &sig).is_err());
        assert_eq!(
            verifying_key.verify_prehashed(&Sha256::digest(b"cross-curve"), &sig),
            Err(Error::BadSignature)
        );
    }

    #[test]
    fn debug_shows_compressed_point() {
        let key = VerifyingKey::from_bytes(CurveName::P192.curve(), &PUBLIC_P192).unwrap();
        assert_eq!(
            format!("{key:?}"),
            "VerifyingKey<P-192>(03AC2C77F529F91689FEA0EA5EFEC7F210D8EEA0B9E047ED56)"
        );
    }
}
