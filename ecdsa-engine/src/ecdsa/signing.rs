//! ECDSA signing: generate signatures using a secret key.

use super::{Signature, VerifyingKey, hazmat, scalar_from_slice};
use crate::{Curve, Error, Result, registry::with_hash};
use core::fmt::{self, Debug};
use digest::{Digest, FixedOutputReset, core_api::BlockSizeUser};
use primefield::{FieldBytes, FieldElement, MAX_FIELD_BYTES, Uint};
use primeorder::ProjectivePoint;
use rand_core::CryptoRngCore;
use signature::{
    DigestSigner, Keypair, RandomizedDigestSigner, RandomizedSigner, Signer,
    hazmat::{PrehashSigner, RandomizedPrehashSigner},
};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

/// ECDSA secret key used for signing messages and producing signatures.
///
/// The secret scalar is zeroized on drop. The matching [`VerifyingKey`] is computed on demand.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`Signer`]: sign a message, hashing it with the curve's default hash
/// - [`DigestSigner`]: sign the output of any [`Digest`]
/// - [`PrehashSigner`]: sign the low-level raw output bytes of a message digest
///
/// Each has a `Randomized*` counterpart which hedges the deterministic nonce with caller
/// randomness.
#[derive(Clone)]
pub struct SigningKey {
    /// Secret scalar in `[1, n-1]`, in canonical form.
    secret_scalar: Uint,

    curve: &'static Curve,
}

impl SigningKey {
    /// Generate a cryptographically random [`SigningKey`], uniform in `[1, n-1]`.
    pub fn random(curve: &'static Curve, rng: &mut impl CryptoRngCore) -> Self {
        let scalars = curve.params().scalar_params();

        loop {
            let scalar = FieldElement::random(scalars, rng);

            if !bool::from(scalar.is_zero()) {
                return Self {
                    secret_scalar: scalar.to_canonical(),
                    curve,
                };
            }
        }
    }

    /// Parse a signing key from a big-endian scalar of exactly [`Curve::scalar_bytes`] bytes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScalar`] on a length mismatch, zero, or a value not below `n`.
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.scalar_bytes() {
            return Err(Error::InvalidScalar);
        }

        Self::from_scalar(curve, &scalar_from_slice(curve, bytes)?)
    }

    /// Create a signing key from a scalar modulo the curve order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScalar`] if the scalar is zero or belongs to another modulus.
    pub fn from_scalar(curve: &'static Curve, scalar: &FieldElement) -> Result<Self> {
        if scalar.modulus() != curve.order() || bool::from(scalar.is_zero()) {
            return Err(Error::InvalidScalar);
        }

        Ok(Self {
            secret_scalar: scalar.to_canonical(),
            curve,
        })
    }

    /// Create a signing key from an integer in `[1, n-1]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScalar`] if the integer is zero or not below `n`.
    pub fn from_uint(curve: &'static Curve, secret: &Uint) -> Result<Self> {
        let scalar = FieldElement::from_uint(curve.params().scalar_params(), secret);
        let scalar = Option::<FieldElement>::from(scalar).ok_or(Error::InvalidScalar)?;
        Self::from_scalar(curve, &scalar)
    }

    /// Serialize as a big-endian scalar of [`Curve::scalar_bytes`] bytes.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn to_bytes(&self) -> Zeroizing<FieldBytes> {
        Zeroizing::new(self.as_scalar().to_be_bytes())
    }

    /// Get the secret scalar for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> FieldElement {
        FieldElement::from_uint_reduced(self.curve.params().scalar_params(), &self.secret_scalar)
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Compute the [`VerifyingKey`] which corresponds to this [`SigningKey`]: `dG`.
    pub fn verifying_key(&self) -> VerifyingKey {
        let point = ProjectivePoint::mul_by_generator(self.curve.params(), &self.as_scalar());
        VerifyingKey::from_secret_point(self.curve, point.to_affine())
    }

    /// Sign a message digest, deriving the nonce per RFC 6979 with `D` as the HMAC hash.
    ///
    /// `additional_data` is mixed into the nonce derivation when non-empty.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScalar`] if nonce derivation is exhausted.
    pub fn sign_prehash_with<D>(&self, prehash: &[u8], additional_data: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser + FixedOutputReset,
    {
        hazmat::sign_prehashed_rfc6979::<D>(
            self.curve,
            &self.as_scalar(),
            prehash,
            additional_data,
        )
    }

    /// Draw hedging data for randomized signing.
    fn hedge(&self, rng: &mut impl CryptoRngCore) -> Result<Zeroizing<[u8; MAX_FIELD_BYTES]>> {
        let mut data = Zeroizing::new([0u8; MAX_FIELD_BYTES]);
        rng.try_fill_bytes(&mut data[..self.curve.scalar_bytes()])
            .map_err(|_| Error::InvalidScalar)?;
        Ok(data)
    }
}

//
// `*Signer` trait impls
//

impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        Ok(with_hash!(self.curve.hash(), D => self.sign_prehash_with::<D>(prehash, &[]))?)
    }
}

impl RandomizedPrehashSigner<Signature> for SigningKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        let data = self.hedge(rng)?;
        let data = &data[..self.curve.scalar_bytes()];
        Ok(with_hash!(self.curve.hash(), D => self.sign_prehash_with::<D>(prehash, data))?)
    }
}

impl<D> DigestSigner<D, Signature> for SigningKey
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    fn try_sign_digest(&self, msg_digest: D) -> signature::Result<Signature> {
        Ok(self.sign_prehash_with::<D>(&msg_digest.finalize(), &[])?)
    }
}

impl<D> RandomizedDigestSigner<D, Signature> for SigningKey
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    fn try_sign_digest_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg_digest: D,
    ) -> signature::Result<Signature> {
        let data = self.hedge(rng)?;
        let data = &data[..self.curve.scalar_bytes()];
        Ok(self.sign_prehash_with::<D>(&msg_digest.finalize(), data)?)
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        with_hash!(self.curve.hash(), D => self.try_sign_digest(D::new_with_prefix(msg)))
    }
}

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        with_hash!(self.curve.hash(), D => {
            self.try_sign_digest_with_rng(rng, D::new_with_prefix(msg))
        })
    }
}

//
// Other trait impls
//

impl Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> VerifyingKey {
        SigningKey::verifying_key(self)
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key()
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(u8::from(self.curve == other.curve))
            & self.secret_scalar.ct_eq(&other.secret_scalar)
    }
}

/// Constant-time comparison
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SigningKey {}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("curve", &self.curve.name())
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret_scalar.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::SigningKey;
    use crate::{CurveName, Error};
    use alloc::format;
    use hex_literal::hex;
    use primefield::Uint;
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
    use sha2::{Digest, Sha256};
    use signature::{DigestSigner, RandomizedSigner, Signer, hazmat::PrehashSigner};

    const SECRET_P192: [u8; 24] = hex!("6FAB034934E4C0FC9AE67F5B5659A9D7D1FEFD187EE09FD4");

    #[test]
    fn derives_rfc6979_public_key() {
        let key = SigningKey::from_bytes(CurveName::P192.curve(), &SECRET_P192).unwrap();
        let point = key.verifying_key().to_bytes();
        assert_eq!(
            point.as_slice(),
            hex!(
                "AC2C77F529F91689FEA0EA5EFEC7F210D8EEA0B9E047ED56"
                "3BC723E57670BD4887EBC732C523063D0A7C957BC97C1C43"
            )
        );
    }

    #[test]
    fn signer_uses_the_default_hash() {
        let key = SigningKey::from_bytes(CurveName::P192.curve(), &SECRET_P192).unwrap();
        let sig = key.sign(b"sample");
        assert_eq!(sig, key.sign_digest(Sha256::new_with_prefix(b"sample")));
        assert_eq!(sig, key.sign_prehash(&Sha256::digest(b"sample")).unwrap());
        assert_eq!(
            sig.to_bytes(),
            hex!(
                "4B0B8CE98A92866A2820E20AA6B75B56382E0F9BFD5ECB55"
                "CCDB006926EA9565CBADC840829D8C384E06DE1F1E381B85"
            )
        );
    }

    #[test]
    fn rfc6979_p256_sha256() {
        let key = SigningKey::from_bytes(
            CurveName::P256.curve(),
            &hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
        )
        .unwrap();
        assert_eq!(
            key.sign(b"sample").to_bytes(),
            hex!(
                "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"
                "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8"
            )
        );
    }

    #[test]
    fn rfc6979_p224_sha224() {
        let key = SigningKey::from_bytes(
            CurveName::P224.curve(),
            &hex!("F220266E1105BFE3083E03EC7A3A654651F45E37167E88600BF257C1"),
        )
        .unwrap();

        assert_eq!(
            key.sign(b"sample").to_bytes(),
            hex!(
                "1CDFE6662DDE1E4A1EC4CDEDF6A1F5A2FB7FBD9145C12113E6ABFD3E"
                "A6694FD7718A21053F225D3F46197CA699D45006C06F871808F43EBC"
            )
        );
        assert_eq!(
            key.sign(b"test").to_bytes(),
            hex!(
                "C441CE8E261DED634E4CF84910E4C5D1D22C5CF3B732BB204DBEF019"
                "902F42847A63BDC5F6046ADA114953120F99442D76510150F372A3F4"
            )
        );
    }

    #[test]
    fn randomized_signatures_differ() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        let key = SigningKey::random(CurveName::P256.curve(), &mut rng);

        let deterministic = key.sign(b"hedged");
        let hedged = key.sign_with_rng(&mut rng, b"hedged");
        assert_ne!(deterministic, hedged);
        assert_ne!(hedged, key.sign_with_rng(&mut rng, b"hedged"));
    }

    #[test]
    fn rejects_zero_and_order() {
        let curve = CurveName::P192.curve();
        assert_eq!(SigningKey::from_bytes(curve, &[0; 24]), Err(Error::InvalidScalar));
        assert_eq!(
            SigningKey::from_bytes(curve, &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831")),
            Err(Error::InvalidScalar)
        );
        assert_eq!(
            SigningKey::from_bytes(curve, &SECRET_P192[1..]),
            Err(Error::InvalidScalar)
        );
        assert_eq!(
            SigningKey::from_uint(curve, curve.order()),
            Err(Error::InvalidScalar)
        );
        assert!(SigningKey::from_uint(curve, &curve.order().wrapping_sub(&Uint::ONE)).is_ok());
    }

    #[test]
    fn equality_is_per_curve() {
        let secret = [1u8; 24];
        let p192 = SigningKey::from_bytes(CurveName::P192.curve(), &secret).unwrap();
        let p192_again = SigningKey::from_bytes(CurveName::P192.curve(), &secret).unwrap();
        assert_eq!(p192, p192_again);

        let mut padded = [0u8; 28];
        padded[4..].copy_from_slice(&secret);
        let p224 = SigningKey::from_bytes(CurveName::P224.curve(), &padded).unwrap();
        assert_ne!(p192, p224);
    }

    #[test]
    fn debug_hides_the_secret() {
        let key = SigningKey::from_bytes(CurveName::P192.curve(), &SECRET_P192).unwrap();
        assert_eq!(format!("{key:?}"), "SigningKey { curve: P192, .. }");
    }
}
