//! Structured encodings of keys: SEC1 `ECPrivateKey`, PKCS#8 `PrivateKeyInfo`,
//! X.509 `SubjectPublicKeyInfo`, and PEM.
//!
//! Each container names its curve with an object identifier, so decoding needs no curve hint.
//! A curve identifier the registry does not know is a framing error here.

mod ec_private_key;
#[cfg(feature = "pem")]
pub(crate) mod pem;
#[cfg(feature = "pkcs8")]
mod private_key_info;
mod public_key_info;

use crate::Result;
use der::asn1::ObjectIdentifier;

/// Algorithm [`ObjectIdentifier`] for elliptic curve public key cryptography
/// (`id-ecPublicKey`).
///
/// <http://oid-info.com/get/1.2.840.10045.2.1>
pub const ALGORITHM_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Report a rejected input before handing the result back.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn rejected<T>(what: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        debug!(?err, what, "decoding failed");
    }

    result
}
