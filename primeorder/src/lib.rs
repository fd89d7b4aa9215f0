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

pub mod point_arithmetic;
pub mod sec1;

mod affine;
#[cfg(any(feature = "dev", test))]
mod dev;
mod error;
mod lookup_table;
mod projective;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
    lookup_table::LookupTable,
    point_arithmetic::EquationA,
    projective::ProjectivePoint,
};
pub use primefield::{self, FieldBytes, FieldElement, FieldParams, Uint};

use subtle::ConstantTimeEq;

/// Parameters for an elliptic curve of prime order described by the short Weierstrass equation
/// `y² = x³ + ax + b` over `GF(p)`.
///
/// Points borrow the parameters of the curve they live on.
#[derive(Clone, Debug)]
pub struct PrimeCurveParams {
    field: FieldParams,
    scalar: FieldParams,
    a: FieldElement,
    b: FieldElement,
    b3: FieldElement,
    generator: (FieldElement, FieldElement),
    equation_a: EquationA,
}

impl PrimeCurveParams {
    /// Create curve parameters, validating them.
    ///
    /// - `field` is the base field `GF(p)`
    /// - `scalar` is the scalar field `GF(n)`, where `n` is the order of the generator
    /// - `a` and `b` are the curve equation coefficients
    /// - `generator` is the affine base point `G`
    /// - `cofactor` is `h = #E / n`
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the coefficients are not elements of `field`, the curve is
    /// singular, the generator is not on the curve or does not have order `n`, or the cofactor
    /// is not 1 (the complete formulas require a prime order group).
    pub fn new(
        field: FieldParams,
        scalar: FieldParams,
        a: FieldElement,
        b: FieldElement,
        generator: (FieldElement, FieldElement),
        cofactor: u64,
    ) -> Result<Self> {
        for coeff in [&a, &b, &generator.0, &generator.1] {
            if coeff.modulus() != field.modulus() {
                return Err(Error);
            }
        }

        if cofactor != 1 {
            return Err(Error);
        }

        // 4a³ + 27b² != 0
        let discriminant = FieldElement::from_u64(&field, 4) * a.square() * a
            + FieldElement::from_u64(&field, 27) * b.square();
        if bool::from(discriminant.is_zero()) {
            return Err(Error);
        }

        let equation_a = if a.ct_eq(&-FieldElement::from_u64(&field, 3)).into() {
            EquationA::MinusThree
        } else {
            EquationA::Generic
        };

        let params = Self {
            field,
            scalar,
            a,
            b,
            b3: b.double() + b,
            generator,
            equation_a,
        };

        let generator: Option<AffinePoint<'_>> =
            AffinePoint::from_coordinates(&params, &generator.0, &generator.1).into();
        let generator = generator.ok_or(Error)?;

        if !bool::from(generator.to_projective().mul_uint(params.order()).is_identity()) {
            return Err(Error);
        }

        Ok(params)
    }

    /// Base field parameters.
    pub fn field_params(&self) -> &FieldParams {
        &self.field
    }

    /// Scalar field parameters (integers modulo the group order `n`).
    pub fn scalar_params(&self) -> &FieldParams {
        &self.scalar
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &Uint {
        self.field.modulus()
    }

    /// Group order `n`.
    pub fn order(&self) -> &Uint {
        self.scalar.modulus()
    }

    /// Cofactor `h`. Always 1: only prime order curves can be constructed.
    pub fn cofactor(&self) -> u64 {
        1
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// `3b`, used by the point arithmetic.
    pub(crate) fn b3(&self) -> &FieldElement {
        &self.b3
    }

    /// Special properties of the `a`-coefficient.
    pub fn equation_a(&self) -> EquationA {
        self.equation_a
    }

    /// Size of a serialized base field element in bytes.
    pub fn field_bytes(&self) -> usize {
        self.field.byte_len()
    }

    /// Size of a serialized scalar in bytes.
    pub fn scalar_bytes(&self) -> usize {
        self.scalar.byte_len()
    }

    /// The base point `G`.
    pub fn generator(&self) -> AffinePoint<'_> {
        AffinePoint::new_unchecked(self, self.generator.0, self.generator.1)
    }

    /// Compute `x³ + ax + b`, the right hand side of the curve equation.
    pub(crate) fn equation_rhs(&self, x: &FieldElement) -> FieldElement {
        (x.square() + self.a) * x + self.b
    }
}

impl PartialEq for PrimeCurveParams {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && self.scalar == other.scalar
            && self.a == other.a
            && self.b == other.b
            && self.generator == other.generator
    }
}

impl Eq for PrimeCurveParams {}
