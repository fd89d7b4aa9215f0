//! PEM (RFC 7468) framing of DER documents.

use crate::{Error, LineEnding, Result};
use alloc::{string::String, vec::Vec};
use zeroize::Zeroizing;

/// SEC1 `ECPrivateKey`.
pub(crate) const SEC1_LABEL: &str = "EC PRIVATE KEY";

/// PKCS#8 `PrivateKeyInfo`.
#[cfg(feature = "pkcs8")]
pub(crate) const PKCS8_LABEL: &str = "PRIVATE KEY";

/// X.509 `SubjectPublicKeyInfo`.
pub(crate) const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// DER `Ecdsa-Sig-Value`.
pub(crate) const SIGNATURE_LABEL: &str = "ECDSA SIGNATURE";

/// Strip the encapsulation boundaries and decode the Base64 body of a document with the
/// expected label.
///
/// The decoded bytes are zeroized on drop since they may hold a private key.
pub(crate) fn decode(pem: &str, expected_label: &'static str) -> Result<Zeroizing<Vec<u8>>> {
    let (label, der) = pem_rfc7468::decode_vec(pem.as_bytes()).map_err(|_err| {
        debug!(err = %_err, expected_label, "malformed PEM");
        Error::UnexpectedDer
    })?;
    let der = Zeroizing::new(der);

    if label != expected_label {
        debug!(label, expected_label, "unexpected PEM label");
        return Err(Error::UnexpectedDer);
    }

    Ok(der)
}

/// Encode a DER document as PEM with the given label.
pub(crate) fn encode(label: &'static str, line_ending: LineEnding, der: &[u8]) -> Result<String> {
    Ok(pem_rfc7468::encode_string(label, line_ending, der)?)
}

#[cfg(test)]
mod tests {
    use super::{PUBLIC_KEY_LABEL, SIGNATURE_LABEL, decode, encode};
    use crate::{Error, LineEnding};

    #[test]
    fn round_trip() {
        let pem = encode(SIGNATURE_LABEL, LineEnding::LF, b"\x30\x00").unwrap();
        assert_eq!(
            pem,
            "-----BEGIN ECDSA SIGNATURE-----\nMAA=\n-----END ECDSA SIGNATURE-----\n"
        );
        assert_eq!(decode(&pem, SIGNATURE_LABEL).unwrap().as_slice(), b"\x30\x00");
    }

    #[test]
    fn rejects_wrong_label() {
        let pem = encode(SIGNATURE_LABEL, LineEnding::CRLF, b"\x30\x00").unwrap();
        assert_eq!(decode(&pem, PUBLIC_KEY_LABEL), Err(Error::UnexpectedDer));
    }

    #[test]
    fn rejects_bad_framing() {
        assert_eq!(
            decode("-----BEGIN PUBLIC KEY-----\nM!A=\n-----END PUBLIC KEY-----\n", PUBLIC_KEY_LABEL),
            Err(Error::UnexpectedDer)
        );
        assert_eq!(
            decode("-----BEGIN PUBLIC KEY-----\nMAA=\n-----END PRIVATE KEY-----\n", PUBLIC_KEY_LABEL),
            Err(Error::UnexpectedDer)
        );
        assert_eq!(decode("MAA=", PUBLIC_KEY_LABEL), Err(Error::UnexpectedDer));
    }
}
