//! Error types.

use core::fmt;

/// Result type with the `ecdsa-engine` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// ECDSA engine errors.
///
/// Errors are deliberately coarse: they never carry key material, and a failed verification
/// does not say which check rejected the signature.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Scalar is zero, not below the group order, or has the wrong length.
    InvalidScalar,

    /// Point coordinates are out of range, the point is not on the curve, or it is the identity
    /// where the identity is not allowed.
    MalformedPoint,

    /// Curve name or object identifier is not in the registry.
    UnknownCurve,

    /// Structured binary (ASN.1 DER) or PEM framing error: truncated input, wrong tag or label,
    /// unresolvable or mismatched curve identifier, trailing data.
    UnexpectedDer,

    /// Signature verification failed.
    BadSignature,

    /// Operand has no result for the requested operation (e.g. inversion of zero).
    InvalidOperand,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidScalar => "invalid scalar",
            Error::MalformedPoint => "malformed curve point",
            Error::UnknownCurve => "unknown curve",
            Error::UnexpectedDer => "unexpected DER or PEM encoding",
            Error::BadSignature => "signature verification failed",
            Error::InvalidOperand => "invalid operand",
        })
    }
}

impl core::error::Error for Error {}

impl From<primeorder::Error> for Error {
    fn from(_: primeorder::Error) -> Error {
        Error::MalformedPoint
    }
}

impl From<der::Error> for Error {
    fn from(_: der::Error) -> Error {
        Error::UnexpectedDer
    }
}

impl From<spki::Error> for Error {
    fn from(_: spki::Error) -> Error {
        Error::UnexpectedDer
    }
}

impl From<sec1::Error> for Error {
    fn from(err: sec1::Error) -> Error {
        match err {
            sec1::Error::PointEncoding => Error::MalformedPoint,
            sec1::Error::Crypto => Error::InvalidScalar,
            _ => Error::UnexpectedDer,
        }
    }
}

#[cfg(feature = "pkcs8")]
impl From<pkcs8::Error> for Error {
    fn from(_: pkcs8::Error) -> Error {
        Error::UnexpectedDer
    }
}

#[cfg(feature = "pem")]
impl From<pem_rfc7468::Error> for Error {
    fn from(_: pem_rfc7468::Error) -> Error {
        Error::UnexpectedDer
    }
}

impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}

impl From<Error> for sec1::Error {
    fn from(err: Error) -> sec1::Error {
        match err {
            Error::MalformedPoint => sec1::Error::PointEncoding,
            Error::UnexpectedDer | Error::UnknownCurve => {
                sec1::Error::Asn1(der::Tag::Sequence.value_error())
            }
            _ => sec1::Error::Crypto,
        }
    }
}

#[cfg(feature = "pkcs8")]
impl From<Error> for pkcs8::Error {
    fn from(err: Error) -> pkcs8::Error {
        match err {
            Error::UnexpectedDer | Error::UnknownCurve => pkcs8::Error::ParametersMalformed,
            _ => pkcs8::Error::KeyMalformed,
        }
    }
}

impl From<Error> for spki::Error {
    fn from(err: Error) -> spki::Error {
        match err {
            Error::UnexpectedDer | Error::UnknownCurve => spki::Error::AlgorithmParametersMissing,
            _ => spki::Error::KeyMalformed,
        }
    }
}
