#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

mod dev;
mod encoding;
mod error;
mod monty;
mod params;

pub use crate::{
    encoding::FieldBytes,
    error::{Error, Result},
    monty::FieldElement,
    params::FieldParams,
};
pub use bigint;
pub use rand_core;
pub use subtle;
pub use zeroize;

/// Number of limbs in the fixed-capacity integers backing every field.
pub const LIMBS: usize = bigint::U576::LIMBS;

/// Fixed-capacity unsigned integer large enough to hold any supported modulus.
pub type Uint = bigint::Uint<LIMBS>;

/// Maximum size of a serialized field element in bytes.
pub const MAX_FIELD_BYTES: usize = Uint::BYTES;
