//! Projective curve points.

use crate::{AffinePoint, LookupTable, PrimeCurveParams, point_arithmetic};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use primefield::{FieldElement, Uint, bigint::Word};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a Weierstrass curve in projective coordinates.
#[derive(Clone, Copy)]
pub struct ProjectivePoint<'c> {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) curve: &'c PrimeCurveParams,
}

impl<'c> ProjectivePoint<'c> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(curve: &'c PrimeCurveParams) -> Self {
        let field = curve.field_params();
        Self {
            x: FieldElement::zero(field),
            y: FieldElement::one(field),
            z: FieldElement::zero(field),
            curve,
        }
    }

    /// Base point of the curve.
    pub fn generator(curve: &'c PrimeCurveParams) -> Self {
        curve.generator().into()
    }

    /// Curve this point lies on.
    pub fn curve(&self) -> &'c PrimeCurveParams {
        self.curve
    }

    /// Returns the affine representation of this point, or the identity if it is the point
    /// at infinity.
    pub fn to_affine(&self) -> AffinePoint<'c> {
        let zinv = self.z.invert();
        let zinv_value = zinv.unwrap_or(FieldElement::zero(self.curve.field_params()));
        let affine = AffinePoint::new_unchecked(self.curve, self.x * zinv_value, self.y * zinv_value);
        AffinePoint::conditional_select(&AffinePoint::identity(self.curve), &affine, zinv.is_some())
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        point_arithmetic::add(self, other)
    }

    /// Returns `self + other`.
    pub fn add_mixed(&self, other: &AffinePoint<'c>) -> Self {
        point_arithmetic::add_mixed(self, other)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self - other`.
    pub fn sub_mixed(&self, other: &AffinePoint<'c>) -> Self {
        self.add_mixed(&other.neg())
    }

    /// Returns `[2] self`.
    pub fn double(&self) -> Self {
        point_arithmetic::double(self)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
            curve: self.curve,
        }
    }

    /// Returns `[k] self` for an integer `k < 2^bits(n)`, where `n` is the group order.
    ///
    /// Constant time with respect to `k` and `self`: uses a fixed 4-bit window over exactly
    /// `ceil(bits(n) / 4)` windows, reading the precomputed table in full for every window.
    pub fn mul_uint(&self, k: &Uint) -> Self {
        let table = LookupTable::new(*self);
        let mut pos = self.curve.scalar_params().bits().div_ceil(4) - 1;
        let mut q = Self::identity(self.curve);

        loop {
            q = q.add(&table.select(nibble(k, pos)));

            if pos == 0 {
                break;
            }

            q = q.double().double().double().double();
            pos -= 1;
        }

        q
    }

    /// Returns `[k] self` for a scalar `k`, an element of the scalar field.
    pub fn mul(&self, k: &FieldElement) -> Self {
        debug_assert_eq!(k.modulus(), self.curve.order());
        self.mul_uint(&k.to_canonical())
    }

    /// Returns `[k] G` where `G` is the curve's base point.
    pub fn mul_by_generator(curve: &'c PrimeCurveParams, k: &FieldElement) -> Self {
        Self::generator(curve).mul(k)
    }

    /// Calculates `[k] self + [l] other` with shared doublings.
    ///
    /// Constant time with respect to all inputs.
    pub fn lincomb(&self, k: &FieldElement, other: &Self, l: &FieldElement) -> Self {
        let k = k.to_canonical();
        let l = l.to_canonical();
        let tables = [LookupTable::new(*self), LookupTable::new(*other)];
        let mut pos = self.curve.scalar_params().bits().div_ceil(4) - 1;
        let mut q = Self::identity(self.curve);

        loop {
            q = q.add(&tables[0].select(nibble(&k, pos)));
            q = q.add(&tables[1].select(nibble(&l, pos)));

            if pos == 0 {
                break;
            }

            q = q.double().double().double().double();
            pos -= 1;
        }

        q
    }
}

/// Extract the 4-bit window at position `pos` (counting from the least significant nibble).
fn nibble(k: &Uint, pos: usize) -> u8 {
    let bit = pos * 4;
    let word = k.as_words()[bit / Word::BITS as usize];
    ((word >> (bit % Word::BITS as usize)) & 0xf) as u8
}

impl<'c> From<AffinePoint<'c>> for ProjectivePoint<'c> {
    fn from(p: AffinePoint<'c>) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: FieldElement::one(p.curve.field_params()),
            curve: p.curve,
        };
        Self::conditional_select(&projective, &Self::identity(p.curve), p.is_identity())
    }
}

impl<'c> From<&AffinePoint<'c>> for ProjectivePoint<'c> {
    fn from(p: &AffinePoint<'c>) -> Self {
        Self::from(*p)
    }
}

impl ConditionallySelectable for ProjectivePoint<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        debug_assert!(core::ptr::eq(a.curve, b.curve) || a.curve == b.curve);
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            curve: a.curve,
        }
    }
}

impl ConstantTimeEq for ProjectivePoint<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;

        let y1 = self.y * other.z;
        let y2 = other.y * self.z;

        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero) // Both point at infinity
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
        // Neither point at infinity, coordinates are the same
    }
}

impl PartialEq for ProjectivePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint<'_> {}

impl fmt::Debug for ProjectivePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectivePoint")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

//
// Arithmetic trait impls
//

impl<'c> Add<ProjectivePoint<'c>> for ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn add(self, other: ProjectivePoint<'c>) -> ProjectivePoint<'c> {
        ProjectivePoint::add(&self, &other)
    }
}

impl<'c> Add<&ProjectivePoint<'c>> for ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn add(self, other: &ProjectivePoint<'c>) -> ProjectivePoint<'c> {
        ProjectivePoint::add(&self, other)
    }
}

impl<'c> Add<&AffinePoint<'c>> for ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn add(self, other: &AffinePoint<'c>) -> ProjectivePoint<'c> {
        ProjectivePoint::add_mixed(&self, other)
    }
}

impl<'c> AddAssign<&ProjectivePoint<'c>> for ProjectivePoint<'c> {
    fn add_assign(&mut self, rhs: &ProjectivePoint<'c>) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<'c> AddAssign<&AffinePoint<'c>> for ProjectivePoint<'c> {
    fn add_assign(&mut self, rhs: &AffinePoint<'c>) {
        *self = ProjectivePoint::add_mixed(self, rhs);
    }
}

impl<'c> Sub<&ProjectivePoint<'c>> for ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn sub(self, other: &ProjectivePoint<'c>) -> ProjectivePoint<'c> {
        ProjectivePoint::sub(&self, other)
    }
}

impl<'c> Sub<&AffinePoint<'c>> for ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn sub(self, other: &AffinePoint<'c>) -> ProjectivePoint<'c> {
        ProjectivePoint::sub_mixed(&self, other)
    }
}

impl<'c> SubAssign<&ProjectivePoint<'c>> for ProjectivePoint<'c> {
    fn sub_assign(&mut self, rhs: &ProjectivePoint<'c>) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl<'c> Mul<&FieldElement> for ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn mul(self, scalar: &FieldElement) -> ProjectivePoint<'c> {
        ProjectivePoint::mul(&self, scalar)
    }
}

impl<'c> Mul<&FieldElement> for &ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn mul(self, scalar: &FieldElement) -> ProjectivePoint<'c> {
        ProjectivePoint::mul(self, scalar)
    }
}

impl<'c> Neg for ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn neg(self) -> ProjectivePoint<'c> {
        ProjectivePoint::neg(&self)
    }
}

impl<'c> Neg for &ProjectivePoint<'c> {
    type Output = ProjectivePoint<'c>;

    fn neg(self) -> ProjectivePoint<'c> {
        ProjectivePoint::neg(self)
    }
}
