//! X.509 `SubjectPublicKeyInfo` (RFC 5280, RFC 5480) encoding of verifying keys.

use super::{ALGORITHM_OID, rejected};
use crate::{Error, Result, VerifyingKey, registry::lookup_der_oid};
use alloc::vec::Vec;
use der::{Decode, Document, asn1::BitStringRef};
use spki::{AlgorithmIdentifierRef, EncodePublicKey, SubjectPublicKeyInfoRef};

#[cfg(feature = "pem")]
use {super::pem, crate::LineEnding, alloc::string::String, core::str::FromStr};

impl VerifyingKey {
    /// Parse a DER encoded `SubjectPublicKeyInfo`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnexpectedDer`] on malformed DER, an algorithm other than `id-ecPublicKey`
    ///   or an unknown curve
    /// - [`Error::MalformedPoint`] if the point is invalid
    pub fn from_public_key_der(bytes: &[u8]) -> Result<Self> {
        rejected(
            "public key",
            SubjectPublicKeyInfoRef::from_der(bytes)
                .map_err(Error::from)
                .and_then(|spki| Self::from_public_key_info(&spki)),
        )
    }

    /// Serialize as a DER encoded `SubjectPublicKeyInfo` holding the uncompressed point.
    pub fn to_public_key_der(&self) -> Result<Vec<u8>> {
        Ok(self.public_key_document()?.into_vec())
    }

    /// Parse a PEM encoded `SubjectPublicKeyInfo` (`PUBLIC KEY` label).
    #[cfg(feature = "pem")]
    pub fn from_public_key_pem(pem: &str) -> Result<Self> {
        Self::from_public_key_der(&pem::decode(pem, pem::PUBLIC_KEY_LABEL)?)
    }

    /// Serialize as a PEM encoded `SubjectPublicKeyInfo` (`PUBLIC KEY` label).
    #[cfg(feature = "pem")]
    pub fn to_public_key_pem(&self, line_ending: LineEnding) -> Result<String> {
        pem::encode(pem::PUBLIC_KEY_LABEL, line_ending, &self.to_public_key_der()?)
    }

    fn from_public_key_info(spki: &SubjectPublicKeyInfoRef<'_>) -> Result<Self> {
        spki.algorithm.assert_algorithm_oid(ALGORITHM_OID)?;
        let curve = lookup_der_oid(spki.algorithm.parameters_oid()?)?;

        let point = spki
            .subject_public_key
            .as_bytes()
            .ok_or(Error::UnexpectedDer)?;

        Self::from_sec1_bytes(curve, point)
    }

    fn public_key_document(&self) -> Result<Document> {
        let curve_oid = self.curve().oid();
        let point = self.to_sec1_bytes(false);

        let spki = SubjectPublicKeyInfoRef {
            algorithm: AlgorithmIdentifierRef {
                oid: ALGORITHM_OID,
                parameters: Some((&curve_oid).into()),
            },
            subject_public_key: BitStringRef::from_bytes(&point)?,
        };

        Ok(Document::encode_msg(&spki)?)
    }
}

impl TryFrom<SubjectPublicKeyInfoRef<'_>> for VerifyingKey {
    type Error = spki::Error;

    fn try_from(spki: SubjectPublicKeyInfoRef<'_>) -> spki::Result<Self> {
        Ok(Self::from_public_key_info(&spki)?)
    }
}

impl EncodePublicKey for VerifyingKey {
    fn to_public_key_der(&self) -> spki::Result<Document> {
        Ok(self.public_key_document()?)
    }
}

#[cfg(feature = "pem")]
impl FromStr for VerifyingKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_public_key_pem(s)
    }
}

#[cfg(test)]
mod tests {
    use super::ALGORITHM_OID;
    use crate::{CurveName, Error, SigningKey, VerifyingKey};
    use der::{Encode, asn1::BitStringRef};
    use hex_literal::hex;
    use spki::{AlgorithmIdentifierRef, DecodePublicKey, SubjectPublicKeyInfoRef};

    // P-256 public key from RFC 6979 A.2.5
    const PUBLIC_P256_DER: [u8; 91] = hex!(
        "3059301306072a8648ce3d020106082a8648ce3d03010703420004"
        "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"
        "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"
    );

    fn verifying_key() -> VerifyingKey {
        SigningKey::from_bytes(
            CurveName::P256.curve(),
            &hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
        )
        .unwrap()
        .verifying_key()
    }

    #[test]
    fn encodes_known_answer() {
        assert_eq!(verifying_key().to_public_key_der().unwrap(), PUBLIC_P256_DER);
    }

    #[test]
    fn der_round_trip() {
        let key = verifying_key();
        assert_eq!(VerifyingKey::from_public_key_der(&PUBLIC_P256_DER), Ok(key));
        assert_eq!(
            <VerifyingKey as DecodePublicKey>::from_public_key_der(&PUBLIC_P256_DER).unwrap(),
            key
        );
    }

    #[test]
    fn accepts_compressed_points() {
        let key = verifying_key();
        let oid = CurveName::P256.oid();
        let point = key.to_sec1_bytes(true);
        let der = SubjectPublicKeyInfoRef {
            algorithm: AlgorithmIdentifierRef {
                oid: ALGORITHM_OID,
                parameters: Some((&oid).into()),
            },
            subject_public_key: BitStringRef::from_bytes(&point).unwrap(),
        }
        .to_der()
        .unwrap();
        assert_eq!(VerifyingKey::from_public_key_der(&der), Ok(key));
    }

    #[test]
    fn rejects_unknown_curve() {
        let mut der = PUBLIC_P256_DER;
        // 1.2.840.10045.3.1.7 -> 1.2.840.10045.3.1.6
        der[22] = 0x06;
        assert_eq!(VerifyingKey::from_public_key_der(&der), Err(Error::UnexpectedDer));
    }

    #[test]
    fn rejects_invalid_point() {
        let mut der = PUBLIC_P256_DER;
        der[90] ^= 1;
        assert_eq!(VerifyingKey::from_public_key_der(&der), Err(Error::MalformedPoint));
    }

    #[test]
    fn rejects_truncated_input() {
        assert_eq!(
            VerifyingKey::from_public_key_der(&PUBLIC_P256_DER[..90]),
            Err(Error::UnexpectedDer)
        );
        assert_eq!(VerifyingKey::from_public_key_der(&[]), Err(Error::UnexpectedDer));
    }

    #[cfg(feature = "pem")]
    #[test]
    fn pem_round_trip() {
        let key = verifying_key();
        let pem = key.to_public_key_pem(Default::default()).unwrap();
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
        assert_eq!(pem.parse::<VerifyingKey>(), Ok(key));
        assert_eq!(
            VerifyingKey::from_public_key_pem(&pem.replace("PUBLIC KEY", "PRIVATE KEY")),
            Err(Error::UnexpectedDer)
        );
    }
}
