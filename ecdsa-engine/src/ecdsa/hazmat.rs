//! Low-level ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives are easy-to-misuse low-level interfaces. Signing with a caller-chosen `k`
//! that is ever reused, or predictable, leaks the secret key.
//!
//! If you are an end user / non-expert in cryptography, do not use these! Failure to use them
//! correctly can lead to catastrophic failures including FULL PRIVATE KEY RECOVERY!

use super::Signature;
use crate::{Curve, Error, Result};
use digest::{Digest, FixedOutputReset, core_api::BlockSizeUser};
use primefield::{FieldElement, MAX_FIELD_BYTES, Uint};
use primeorder::{AffinePoint, ProjectivePoint};
use rfc6979::HmacDrbg;
use zeroize::Zeroizing;

/// Upper bound on nonce candidates tried by [`sign_prehashed_rfc6979`].
///
/// Each candidate fails with probability about `2^-bits(n)`.
pub const MAX_NONCE_ATTEMPTS: usize = 64;

/// Convert a bit string into an integer per [RFC 6979 § 2.3.2]: keep the leftmost `qlen` bits.
///
/// Inputs shorter than `qlen` bits are taken whole.
///
/// [RFC 6979 § 2.3.2]: https://www.rfc-editor.org/rfc/rfc6979#section-2.3.2
pub fn bits2int(bits: &[u8], qlen: usize) -> Uint {
    let len = bits.len().min(qlen.div_ceil(8)).min(MAX_FIELD_BYTES);

    let mut padded = Zeroizing::new([0u8; MAX_FIELD_BYTES]);
    padded[MAX_FIELD_BYTES - len..].copy_from_slice(&bits[..len]);
    let int = Uint::from_be_slice(padded.as_slice());

    if len * 8 > qlen {
        int.shr_vartime(len * 8 - qlen)
    } else {
        int
    }
}

/// Convert a message digest into a scalar: [`bits2int`] truncation to the bit length of `n`,
/// then reduction modulo `n` (a single conditional subtraction, as the truncated value is below
/// `2n`).
pub fn bits2field(curve: &Curve, prehash: &[u8]) -> FieldElement {
    let scalars = curve.params().scalar_params();
    FieldElement::from_uint_reduced(scalars, &bits2int(prehash, scalars.bits()))
}

/// Sign a reduced message digest `z` with secret scalar `d` and nonce `k`.
///
/// # Errors
///
/// - [`Error::InvalidScalar`] if `k` is zero, or if `r` or `s` come out zero for this `k`; the
///   caller must pick another nonce.
/// - [`Error::InvalidOperand`] if a scalar belongs to a different curve.
pub fn sign_prehashed(
    curve: &'static Curve,
    d: &FieldElement,
    k: &FieldElement,
    z: &FieldElement,
) -> Result<Signature> {
    let params = curve.params();
    let order = curve.order();

    if d.modulus() != order || k.modulus() != order || z.modulus() != order {
        return Err(Error::InvalidOperand);
    }

    // R = kG
    let big_r = ProjectivePoint::mul_by_generator(params, k).to_affine();
    if bool::from(big_r.is_identity()) {
        return Err(Error::InvalidScalar);
    }

    // r = R.x mod n
    let r = FieldElement::from_uint_reduced(params.scalar_params(), &big_r.x().to_canonical());

    // k⁻¹ exists: k = 0 would have produced the identity above
    let k_inv = Option::<FieldElement>::from(k.invert()).ok_or(Error::InvalidOperand)?;

    // s = k⁻¹(z + rd) mod n
    let s = k_inv * (z + r * d);

    // rejects r = 0 and s = 0
    Signature::from_scalars(curve, r, s)
}

/// Sign a message digest with a nonce derived deterministically per [RFC 6979 § 3.2], using `D`
/// as the HMAC-DRBG hash.
///
/// Non-empty `additional_data` is mixed into the DRBG per [RFC 6979 § 3.6] (hedged signing).
///
/// # Errors
///
/// [`Error::InvalidScalar`] if [`MAX_NONCE_ATTEMPTS`] candidates are exhausted.
///
/// [RFC 6979 § 3.2]: https://www.rfc-editor.org/rfc/rfc6979#section-3.2
/// [RFC 6979 § 3.6]: https://www.rfc-editor.org/rfc/rfc6979#section-3.6
pub fn sign_prehashed_rfc6979<D>(
    curve: &'static Curve,
    d: &FieldElement,
    prehash: &[u8],
    additional_data: &[u8],
) -> Result<Signature>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    let scalars = curve.params().scalar_params();
    let qlen = scalars.bits();
    let rlen = scalars.byte_len();

    let z = bits2field(curve, prehash);

    // int2octets(x), bits2octets(h)
    let mut x = d.to_be_bytes();
    let mut drbg = HmacDrbg::<D>::new(&x, &z.to_be_bytes(), additional_data);
    zeroize::Zeroize::zeroize(&mut x);

    let mut t = Zeroizing::new([0u8; MAX_FIELD_BYTES]);

    for _ in 0..MAX_NONCE_ATTEMPTS {
        drbg.fill_bytes(&mut t[..rlen]);
        let candidate = FieldElement::from_uint(scalars, &bits2int(&t[..rlen], qlen));

        if let Some(k) = Option::<FieldElement>::from(candidate) {
            match sign_prehashed(curve, d, &k, &z) {
                Ok(signature) => return Ok(signature),
                Err(Error::InvalidScalar) => {}
                Err(err) => return Err(err),
            }
        }

        debug!(curve = %curve.name(), "rejected RFC 6979 nonce candidate");
    }

    Err(Error::InvalidScalar)
}

/// Verify a signature over a message digest against public key `q`.
///
/// # Errors
///
/// [`Error::BadSignature`] on any failure, including a signature or key over another curve.
pub fn verify_prehashed(
    curve: &Curve,
    q: &AffinePoint<'_>,
    prehash: &[u8],
    signature: &Signature,
) -> Result<()> {
    let params = curve.params();

    if signature.curve() != curve || q.curve() != params || bool::from(q.is_identity()) {
        return Err(Error::BadSignature);
    }

    let (r, s) = signature.split_scalars();
    if bool::from(r.is_zero() | s.is_zero()) {
        return Err(Error::BadSignature);
    }

    let z = bits2field(curve, prehash);
    let s_inv = Option::<FieldElement>::from(s.invert()).ok_or(Error::BadSignature)?;
    let u1 = z * s_inv;
    let u2 = r * s_inv;

    // P = u1 G + u2 Q
    let x = ProjectivePoint::generator(params)
        .lincomb(&u1, &q.to_projective(), &u2)
        .to_affine();

    if bool::from(x.is_identity()) {
        return Err(Error::BadSignature);
    }

    let v = FieldElement::from_uint_reduced(params.scalar_params(), &x.x().to_canonical());

    if v == r {
        Ok(())
    } else {
        Err(Error::BadSignature)
    }
}

#[cfg(test)]
mod tests {
    use super::{bits2field, bits2int, sign_prehashed, sign_prehashed_rfc6979, verify_prehashed};
    use crate::{CurveName, Error, test_vectors};
    use hex_literal::hex;
    use primefield::{FieldElement, Uint};
    use primeorder::AffinePoint;
    use sha2::{Digest, Sha256};

    #[test]
    fn bits2int_truncates_to_qlen() {
        // 521-bit order: a 64 byte digest is used whole
        let digest = [0xffu8; 64];
        let mut expected = [0u8; 72];
        expected[8..].fill(0xff);
        assert_eq!(bits2int(&digest, 521), Uint::from_be_slice(&expected));

        // 192-bit order: a 32 byte digest keeps its leftmost 24 bytes
        let digest = hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf");
        let mut expected = [0u8; 72];
        expected[48..].copy_from_slice(&digest[..24]);
        assert_eq!(bits2int(&digest, 192), Uint::from_be_slice(&expected));

        // 163-bit order: 21 bytes, shifted right by 5 bits
        let mut expected = [0u8; 72];
        expected[51..].copy_from_slice(&digest[..21]);
        let expected = Uint::from_be_slice(&expected).shr_vartime(5);
        assert_eq!(bits2int(&digest, 163), expected);
    }

    #[test]
    fn bits2field_reduces() {
        let curve = CurveName::P192.curve();
        let mut all_ones = [0u8; 72];
        all_ones[48..].fill(0xff);
        let all_ones = Uint::from_be_slice(&all_ones);

        // 2^192 - 1 lies in [n, 2n)
        let reduced = bits2field(curve, &[0xff; 24]);
        assert_eq!(reduced.to_canonical(), all_ones.wrapping_sub(curve.order()));
    }

    /// RFC 6979 § A.2.3: P-192, SHA-256.
    #[test]
    fn rfc6979_p192_sha256() {
        let curve = CurveName::P192.curve();
        let scalars = curve.params().scalar_params();
        let x = hex!("6FAB034934E4C0FC9AE67F5B5659A9D7D1FEFD187EE09FD4");
        let d = Option::<FieldElement>::from(FieldElement::from_be_bytes(scalars, &x)).unwrap();

        let cases: [(&[u8], [u8; 48]); 2] = [
            (
                b"sample",
                hex!(
                    "4B0B8CE98A92866A2820E20AA6B75B56382E0F9BFD5ECB55"
                    "CCDB006926EA9565CBADC840829D8C384E06DE1F1E381B85"
                ),
            ),
            (
                b"test",
                hex!(
                    "3A718BD8B4926C3B52EE6BBE67EF79B18CB6EB62B1AD97AE"
                    "5662E6848A4A19B1F1AE2F72ACD4B8BBE50F1EAC65D9124F"
                ),
            ),
        ];

        for (msg, expected) in cases {
            let prehash = Sha256::digest(msg);
            let sig = sign_prehashed_rfc6979::<Sha256>(curve, &d, &prehash, &[]).unwrap();
            assert_eq!(sig.to_bytes(), expected);
        }
    }

    /// RFC 6979 § A.2.3: the nonce for "sample" is recovered by fixed-k signing.
    #[test]
    fn rfc6979_p192_fixed_k() {
        let curve = CurveName::P192.curve();
        let scalars = curve.params().scalar_params();
        let fe = |bytes: &[u8]| {
            Option::<FieldElement>::from(FieldElement::from_be_bytes(scalars, bytes)).unwrap()
        };

        let d = fe(&hex!("6FAB034934E4C0FC9AE67F5B5659A9D7D1FEFD187EE09FD4"));
        let k = fe(&hex!("32B1B6D7D42A05CB449065727A84804FB1A3E34D8F261496"));
        let z = bits2field(curve, &Sha256::digest(b"sample"));

        let sig = sign_prehashed(curve, &d, &k, &z).unwrap();
        assert_eq!(
            sig.r_bytes().as_slice(),
            hex!("4B0B8CE98A92866A2820E20AA6B75B56382E0F9BFD5ECB55")
        );
    }

    #[test]
    fn zero_nonce_is_rejected() {
        let curve = CurveName::P192.curve();
        let scalars = curve.params().scalar_params();
        let d = FieldElement::from_u64(scalars, 7);
        let z = FieldElement::from_u64(scalars, 1);
        let k = FieldElement::zero(scalars);
        assert_eq!(sign_prehashed(curve, &d, &k, &z), Err(Error::InvalidScalar));
    }

    #[test]
    fn scalars_from_another_curve_are_rejected() {
        let curve = CurveName::P192.curve();
        let other = CurveName::P224.curve().params().scalar_params();
        let one = FieldElement::one(other);
        assert_eq!(sign_prehashed(curve, &one, &one, &one), Err(Error::InvalidOperand));
    }

    fn check_fips_vectors(name: CurveName, vectors: &[test_vectors::TestVector]) {
        let curve = name.curve();
        let params = curve.params();
        let scalars = params.scalar_params();
        let fe = |bytes: &[u8]| {
            Option::<FieldElement>::from(FieldElement::from_be_bytes(scalars, bytes)).unwrap()
        };

        for vector in vectors {
            let d = fe(vector.d);
            let k = fe(vector.k);
            let z = bits2field(curve, vector.m);

            let sig = sign_prehashed(curve, &d, &k, &z).unwrap();
            assert_eq!(sig.r_bytes().as_slice(), vector.r);
            assert_eq!(sig.s_bytes().as_slice(), vector.s);

            let q = AffinePoint::from_be_coordinates(params, vector.q_x, vector.q_y).unwrap();
            assert!(verify_prehashed(curve, &q, vector.m, &sig).is_ok());

            let mut tampered = vector.m.to_vec();
            tampered[vector.m.len() - 1] ^= 1;
            assert_eq!(
                verify_prehashed(curve, &q, &tampered, &sig),
                Err(Error::BadSignature)
            );
        }
    }

    #[test]
    fn fips_186_p192() {
        check_fips_vectors(CurveName::P192, test_vectors::p192::ECDSA_TEST_VECTORS);
    }

    #[test]
    fn fips_186_p224() {
        check_fips_vectors(CurveName::P224, test_vectors::p224::ECDSA_TEST_VECTORS);
    }
}
