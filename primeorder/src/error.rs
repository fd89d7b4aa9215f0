//! Error types.

use core::fmt;

/// Elliptic curve errors: invalid curve parameters, or a point which is malformed or not on
/// the curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "elliptic curve error")
    }
}

impl core::error::Error for Error {}

impl From<primefield::Error> for Error {
    fn from(_: primefield::Error) -> Error {
        Error
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
