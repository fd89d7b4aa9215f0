#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

/// Emit a `tracing` debug event when the `tracing` feature is enabled.
///
/// Never pass key material or nonces.
macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    };
}

pub mod ecdsa;
pub mod registry;

mod curves;
mod encoding;
mod error;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    ecdsa::{Signature, SigningKey, VerifyingKey},
    encoding::ALGORITHM_OID,
    error::{Error, Result},
    registry::{Curve, CurveName, HashAlgorithm, lookup, lookup_oid},
};
pub use {der, primefield, primeorder, rand_core, sec1, signature, spki};

#[cfg(feature = "pkcs8")]
pub use pkcs8;

#[cfg(feature = "pem")]
pub use pem_rfc7468::LineEnding;
