//! Built-in curve definitions.
//!
//! Constants are big-endian, full field width, as published in SP 800-186 (NIST curves) and SEC 2 (secp256k1).

pub(crate) mod p192;
pub(crate) mod p224;
pub(crate) mod p256;
pub(crate) mod p384;
pub(crate) mod p521;
pub(crate) mod secp256k1;

use primeorder::{Error, FieldElement, FieldParams, PrimeCurveParams};

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b` with cofactor 1.
pub(crate) struct Definition {
    pub(crate) modulus: &'static [u8],
    pub(crate) order: &'static [u8],
    pub(crate) a: &'static [u8],
    pub(crate) b: &'static [u8],
    pub(crate) gx: &'static [u8],
    pub(crate) gy: &'static [u8],
}

impl Definition {
    /// Parse and validate the parameters.
    pub(crate) fn build(&self) -> primeorder::Result<PrimeCurveParams> {
        let field = FieldParams::from_be_bytes(self.modulus)?;
        let scalar = FieldParams::from_be_bytes(self.order)?;
        let fe = |bytes: &[u8]| {
            Option::<FieldElement>::from(FieldElement::from_be_bytes(&field, bytes)).ok_or(Error)
        };
        let (a, b) = (fe(self.a)?, fe(self.b)?);
        let generator = (fe(self.gx)?, fe(self.gy)?);

        PrimeCurveParams::new(field, scalar, a, b, generator, 1)
    }
}
