//! Affine curve points.

use crate::{
    Error, PrimeCurveParams, ProjectivePoint, Result,
    sec1::{Coordinates, EncodedPoint},
};
use core::{fmt, ops::Neg};
use primefield::{FieldBytes, FieldElement, Uint};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Copy)]
pub struct AffinePoint<'c> {
    /// x-coordinate
    pub(crate) x: FieldElement,

    /// y-coordinate
    pub(crate) y: FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    pub(crate) infinity: u8,

    /// Curve this point lies on.
    pub(crate) curve: &'c PrimeCurveParams,
}

impl<'c> AffinePoint<'c> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(curve: &'c PrimeCurveParams) -> Self {
        let zero = FieldElement::zero(curve.field_params());
        Self {
            x: zero,
            y: zero,
            infinity: 1,
            curve,
        }
    }

    /// Base point of the curve.
    pub fn generator(curve: &'c PrimeCurveParams) -> Self {
        curve.generator()
    }

    pub(crate) fn new_unchecked(
        curve: &'c PrimeCurveParams,
        x: FieldElement,
        y: FieldElement,
    ) -> Self {
        Self {
            x,
            y,
            infinity: 0,
            curve,
        }
    }

    /// Create a point from affine coordinates, checking that it satisfies the curve equation.
    ///
    /// # Returns
    ///
    /// `None` value if `(x, y)` is not on the curve.
    pub fn from_coordinates(
        curve: &'c PrimeCurveParams,
        x: &FieldElement,
        y: &FieldElement,
    ) -> CtOption<Self> {
        let lhs = y.square();
        let rhs = curve.equation_rhs(x);
        CtOption::new(Self::new_unchecked(curve, *x, *y), lhs.ct_eq(&rhs))
    }

    /// Create a point from integer coordinates, checking that both are below the field modulus
    /// and that the point satisfies the curve equation.
    pub fn from_uint_coordinates(curve: &'c PrimeCurveParams, x: &Uint, y: &Uint) -> CtOption<Self> {
        let field = curve.field_params();
        let x = FieldElement::from_uint(field, x);
        let y = FieldElement::from_uint(field, y);
        let zero = FieldElement::zero(field);

        let point = Self::from_coordinates(curve, &x.unwrap_or(zero), &y.unwrap_or(zero));
        let is_some = x.is_some() & y.is_some() & point.is_some();
        CtOption::new(point.unwrap_or(Self::identity(curve)), is_some)
    }

    /// Create a point from big-endian fixed-width coordinates, checking that both are
    /// canonical field elements and that the point satisfies the curve equation.
    pub fn from_be_coordinates(
        curve: &'c PrimeCurveParams,
        x_bytes: &[u8],
        y_bytes: &[u8],
    ) -> CtOption<Self> {
        let field = curve.field_params();
        let x = FieldElement::from_be_bytes(field, x_bytes);
        let y = FieldElement::from_be_bytes(field, y_bytes);
        let zero = FieldElement::zero(field);

        let point = Self::from_coordinates(curve, &x.unwrap_or(zero), &y.unwrap_or(zero));
        let is_some = x.is_some() & y.is_some() & point.is_some();
        CtOption::new(point.unwrap_or(Self::identity(curve)), is_some)
    }

    /// Recover a point from its x-coordinate and the parity of its y-coordinate.
    ///
    /// # Returns
    ///
    /// `None` value if `x_bytes` is not a canonical field element, or is not the x-coordinate
    /// of any point on the curve.
    pub fn decompress(curve: &'c PrimeCurveParams, x_bytes: &[u8], y_is_odd: Choice) -> CtOption<Self> {
        let field = curve.field_params();
        let zero = FieldElement::zero(field);
        let x = FieldElement::from_be_bytes(field, x_bytes);
        let x_value = x.unwrap_or(zero);

        let alpha = curve.equation_rhs(&x_value);
        let beta = alpha.sqrt(field);
        let beta_value = beta.unwrap_or(zero);

        let y = FieldElement::conditional_select(
            &-beta_value,
            &beta_value,
            !(beta_value.is_odd() ^ y_is_odd),
        );

        CtOption::new(
            Self::new_unchecked(curve, x_value, y),
            x.is_some() & beta.is_some(),
        )
    }

    /// Decode a SEC1 encoded point: compressed, uncompressed or the identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the encoding is malformed or the point is not on the curve.
    pub fn from_sec1_bytes(curve: &'c PrimeCurveParams, bytes: &[u8]) -> Result<Self> {
        let encoded = EncodedPoint::from_bytes(bytes, curve.field_bytes())?;

        let point = match encoded.coordinates() {
            Coordinates::Identity => CtOption::new(Self::identity(curve), Choice::from(1)),
            Coordinates::Compressed { x, y_is_odd } => {
                Self::decompress(curve, x, Choice::from(y_is_odd as u8))
            }
            Coordinates::Uncompressed { x, y } => Self::from_be_coordinates(curve, x, y),
        };

        Option::<Self>::from(point).ok_or(Error)
    }

    /// Serialize this point in SEC1 format, optionally compressed.
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        if self.is_identity().into() {
            return EncodedPoint::identity();
        }

        EncodedPoint::from_affine_coordinates(&self.x_bytes(), &self.y_bytes(), compress)
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Curve this point lies on.
    pub fn curve(&self) -> &'c PrimeCurveParams {
        self.curve
    }

    /// Affine x-coordinate. Zero for the identity.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Affine y-coordinate. Zero for the identity.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Big-endian serialized x-coordinate.
    pub fn x_bytes(&self) -> FieldBytes {
        self.x.to_be_bytes()
    }

    /// Big-endian serialized y-coordinate.
    pub fn y_bytes(&self) -> FieldBytes {
        self.y.to_be_bytes()
    }

    /// Is the y-coordinate odd?
    pub fn y_is_odd(&self) -> Choice {
        self.y.is_odd()
    }

    /// Convert to projective coordinates.
    pub fn to_projective(&self) -> ProjectivePoint<'c> {
        ProjectivePoint::from(*self)
    }
}

impl ConditionallySelectable for AffinePoint<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        debug_assert!(core::ptr::eq(a.curve, b.curve) || a.curve == b.curve);
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
            curve: a.curve,
        }
    }
}

impl ConstantTimeEq for AffinePoint<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl PartialEq for AffinePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint<'_> {}

impl fmt::Debug for AffinePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffinePoint")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("infinity", &self.infinity)
            .finish()
    }
}

impl<'c> From<ProjectivePoint<'c>> for AffinePoint<'c> {
    fn from(p: ProjectivePoint<'c>) -> AffinePoint<'c> {
        p.to_affine()
    }
}

impl<'c> From<&ProjectivePoint<'c>> for AffinePoint<'c> {
    fn from(p: &ProjectivePoint<'c>) -> AffinePoint<'c> {
        p.to_affine()
    }
}

//
// Arithmetic trait impls
//

impl<'c> Neg for AffinePoint<'c> {
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
            curve: self.curve,
        }
    }
}

impl<'c> Neg for &AffinePoint<'c> {
    type Output = AffinePoint<'c>;

    fn neg(self) -> AffinePoint<'c> {
        -(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use crate::{sec1::Tag, tests::p192};
    use hex_literal::hex;
    use primefield::{FieldElement, Uint};

    const UNCOMPRESSED_BASEPOINT: &[u8] = &hex!(
        "04 188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012
            07192b95ffc8da78631011ed6b24cdd573f977a11e794811"
    );

    const COMPRESSED_BASEPOINT: &[u8] =
        &hex!("03 188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012");

    #[test]
    fn uncompressed_round_trip() {
        let curve = p192();
        let point = AffinePoint::from_sec1_bytes(&curve, UNCOMPRESSED_BASEPOINT).unwrap();
        assert_eq!(point, curve.generator());
        assert_eq!(point.to_encoded_point(false).as_bytes(), UNCOMPRESSED_BASEPOINT);
    }

    #[test]
    fn compressed_round_trip() {
        let curve = p192();
        let point = AffinePoint::from_sec1_bytes(&curve, COMPRESSED_BASEPOINT).unwrap();
        assert_eq!(point, curve.generator());

        let encoded = point.to_encoded_point(true);
        assert_eq!(encoded.tag(), Tag::CompressedOddY);
        assert_eq!(encoded.as_bytes(), COMPRESSED_BASEPOINT);
    }

    #[test]
    fn identity_encoding() {
        let curve = p192();
        let identity = AffinePoint::identity(&curve);
        assert_eq!(identity.to_encoded_point(true).as_bytes(), &[0]);
        assert_eq!(AffinePoint::from_sec1_bytes(&curve, &[0]).unwrap(), identity);
    }

    #[test]
    fn rejects_point_off_curve() {
        let curve = p192();
        let mut bytes = [0u8; 49];
        bytes.copy_from_slice(UNCOMPRESSED_BASEPOINT);
        bytes[48] ^= 1;
        assert!(AffinePoint::from_sec1_bytes(&curve, &bytes).is_err());
    }

    #[test]
    fn rejects_coordinate_overflow() {
        let curve = p192();
        let g = curve.generator();
        let x_plus_p = g.x().to_canonical().wrapping_add(curve.modulus());
        let y = g.y().to_canonical();

        // x + p reduces to the same field element, but is not canonical
        assert!(bool::from(
            AffinePoint::from_uint_coordinates(&curve, &x_plus_p, &y).is_none()
        ));
        assert!(bool::from(
            AffinePoint::from_uint_coordinates(&curve, &g.x().to_canonical(), &y).is_some()
        ));
    }

    #[test]
    fn rejects_x_without_square_root() {
        let curve = p192();
        let field = curve.field_params();

        // find an x for which x³ + ax + b is a non-residue
        let x = (1u64..)
            .map(|n| FieldElement::from_u64(field, n))
            .find(|x| bool::from(curve.equation_rhs(x).sqrt(field).is_none()))
            .unwrap();

        let mut bytes = [0u8; 25];
        bytes[0] = 0x02;
        bytes[1..].copy_from_slice(&x.to_be_bytes());
        assert!(AffinePoint::from_sec1_bytes(&curve, &bytes).is_err());
    }

    #[test]
    fn negation() {
        let curve = p192();
        let g = curve.generator();
        let minus_g = -g;
        assert_eq!(minus_g.x(), g.x());
        assert_eq!(minus_g.y() + g.y(), FieldElement::zero(curve.field_params()));
        assert_ne!(bool::from(minus_g.y_is_odd()), bool::from(g.y_is_odd()));
        assert_eq!(Uint::ZERO, (g.y() + minus_g.y()).to_canonical());
    }
}
