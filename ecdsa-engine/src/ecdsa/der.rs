//! ASN.1 DER encoding for ECDSA signatures.
//!
//! Signatures are encoded as `Ecdsa-Sig-Value` per [RFC 3279 § 2.2.3]:
//!
//! ```text
//! Ecdsa-Sig-Value  ::=  SEQUENCE  {
//!      r     INTEGER,
//!      s     INTEGER  }
//! ```
//!
//! [RFC 3279 § 2.2.3]: https://www.rfc-editor.org/rfc/rfc3279#section-2.2.3

use super::Signature;
use crate::{Curve, Result, encoding::rejected};
use alloc::vec::Vec;
use ::der::{
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Writer,
    asn1::UintRef,
};

#[cfg(feature = "pem")]
use {
    crate::{LineEnding, encoding::pem},
    alloc::string::String,
};

impl Signature {
    /// Parse a DER encoded `SEQUENCE { r INTEGER, s INTEGER }` over the given curve.
    ///
    /// # Errors
    ///
    /// - [`Error::UnexpectedDer`] if the input is not exactly one well formed sequence of two
    ///   non-negative, minimally encoded integers
    /// - [`Error::InvalidScalar`] if `r` or `s` is outside `[1, n-1]`
    ///
    /// [`Error::UnexpectedDer`]: crate::Error::UnexpectedDer
    /// [`Error::InvalidScalar`]: crate::Error::InvalidScalar
    pub fn from_der(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        rejected("signature", Self::decode_der(curve, bytes))
    }

    fn decode_der(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let SignatureRef { r, s } = SignatureRef::from_der(bytes)?;
        Self::from_scalar_bytes(curve, r.as_bytes(), s.as_bytes())
    }

    /// Serialize as a DER encoded `SEQUENCE { r INTEGER, s INTEGER }`.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let (r, s) = (self.r_bytes(), self.s_bytes());

        let sig = SignatureRef {
            r: UintRef::new(&r)?,
            s: UintRef::new(&s)?,
        };

        Ok(sig.to_der()?)
    }

    /// Parse a PEM encoded signature with the `ECDSA SIGNATURE` label.
    ///
    /// # Errors
    ///
    /// [`Error::UnexpectedDer`](crate::Error::UnexpectedDer) on malformed PEM or the wrong
    /// label, plus everything [`Signature::from_der`] rejects.
    #[cfg(feature = "pem")]
    pub fn from_pem(curve: &'static Curve, pem: &str) -> Result<Self> {
        let der = pem::decode(pem, pem::SIGNATURE_LABEL)?;
        Self::from_der(curve, &der)
    }

    /// Serialize as PEM with the `ECDSA SIGNATURE` label.
    #[cfg(feature = "pem")]
    pub fn to_pem(&self, line_ending: LineEnding) -> Result<String> {
        pem::encode(pem::SIGNATURE_LABEL, line_ending, &self.to_der()?)
    }
}

struct SignatureRef<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl EncodeValue for SignatureRef<'_> {
    fn value_len(&self) -> ::der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, encoder: &mut impl Writer) -> ::der::Result<()> {
        self.r.encode(encoder)?;
        self.s.encode(encoder)?;
        Ok(())
    }
}

impl<'a> DecodeValue<'a> for SignatureRef<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, _header: Header) -> ::der::Result<Self> {
        Ok(Self {
            r: UintRef::decode(reader)?,
            s: UintRef::decode(reader)?,
        })
    }
}

impl<'a> Sequence<'a> for SignatureRef<'a> {}
