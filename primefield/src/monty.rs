//! Field elements which use an internal Montgomery form representation, implemented using
//! `crypto-bigint`'s [`DynResidue`].

pub(crate) mod sqrt;

use crate::{
    FieldBytes, FieldParams, LIMBS, MAX_FIELD_BYTES, Uint,
    encoding::uint_from_be_slice,
};
use bigint::modular::runtime_mod::DynResidue;
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};
use zeroize::Zeroize;

/// Element of a prime field whose modulus is chosen at runtime.
///
/// The element carries its Montgomery parameters, so arithmetic needs no further context.
/// Combining elements of different fields is a logic error and is caught by debug assertions.
#[derive(Clone, Copy)]
pub struct FieldElement {
    inner: DynResidue<LIMBS>,
}

impl FieldElement {
    /// Zero element (additive identity).
    pub fn zero(params: &FieldParams) -> Self {
        Self {
            inner: DynResidue::zero(params.monty()),
        }
    }

    /// Multiplicative identity.
    pub fn one(params: &FieldParams) -> Self {
        Self {
            inner: DynResidue::one(params.monty()),
        }
    }

    /// Create a field element from a small integer, reducing it modulo `p`.
    pub fn from_u64(params: &FieldParams, w: u64) -> Self {
        Self::from_uint_reduced(params, &Uint::from_u64(w))
    }

    /// Convert [`Uint`] into a [`FieldElement`], first converting it into Montgomery form:
    ///
    /// ```text
    /// w * R^2 * R^-1 mod p = wR mod p
    /// ```
    ///
    /// Reduces the input modulo `p`.
    pub fn from_uint_reduced(params: &FieldParams, uint: &Uint) -> Self {
        Self {
            inner: DynResidue::new(uint, params.monty()),
        }
    }

    /// Convert [`Uint`] into a [`FieldElement`].
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    pub fn from_uint(params: &FieldParams, uint: &Uint) -> CtOption<Self> {
        let is_some = ConstantTimeLess::ct_lt(uint, params.modulus());
        CtOption::new(Self::from_uint_reduced(params, uint), is_some)
    }

    /// Decode a field element from its canonical big-endian encoding.
    ///
    /// The input must be exactly [`FieldParams::byte_len`] bytes and encode a value below the
    /// modulus. The length is treated as public.
    pub fn from_be_bytes(params: &FieldParams, bytes: &[u8]) -> CtOption<Self> {
        match uint_from_be_slice(bytes) {
            Ok(uint) if bytes.len() == params.byte_len() => Self::from_uint(params, &uint),
            _ => CtOption::new(Self::zero(params), Choice::from(0)),
        }
    }

    /// Sample a uniformly random field element by rejection sampling.
    pub fn random(params: &FieldParams, rng: &mut impl CryptoRngCore) -> Self {
        let len = params.byte_len();
        let excess_bits = len * 8 - params.bits();
        let mut bytes = [0u8; MAX_FIELD_BYTES];

        loop {
            rng.fill_bytes(&mut bytes[..len]);
            bytes[0] &= 0xff >> excess_bits;

            let candidate = Self::from_be_bytes(params, &bytes[..len]);
            if let Some(fe) = Option::<Self>::from(candidate) {
                bytes.zeroize();
                return fe;
            }
        }
    }

    /// Translate the field element out of the Montgomery domain, returning a [`Uint`] in
    /// canonical form.
    pub fn to_canonical(&self) -> Uint {
        self.inner.retrieve()
    }

    /// Returns the big-endian encoding of this field element, padded to the field's byte width.
    pub fn to_be_bytes(&self) -> FieldBytes {
        let len = self.modulus().bits_vartime().div_ceil(8);
        FieldBytes::from_uint(&self.to_canonical(), len)
    }

    /// Modulus of the field this element belongs to.
    pub fn modulus(&self) -> &Uint {
        self.inner.params().modulus()
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    ///
    /// # Returns
    ///
    /// If odd, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical().as_words()[0] & 1) as u8)
    }

    /// Determine if this field element is even: `self mod 2 == 0`.
    pub fn is_even(&self) -> Choice {
        !self.is_odd()
    }

    /// Determine if this field element is zero.
    pub fn is_zero(&self) -> Choice {
        ConstantTimeEq::ct_eq(&self.inner.retrieve(), &Uint::ZERO)
    }

    /// Double element (add it to itself).
    #[must_use]
    pub fn double(&self) -> Self {
        *self + self
    }

    /// Compute modular square.
    #[must_use]
    pub fn square(&self) -> Self {
        Self {
            inner: self.inner.square(),
        }
    }

    /// Returns `self^(2^n) mod p`.
    ///
    /// **This operation is variable time with respect to the exponent `n`.**
    pub fn sqn_vartime(&self, n: usize) -> Self {
        let mut x = *self;
        for _ in 0..n {
            x = x.square();
        }
        x
    }

    /// Returns `self^exp`, constant time with respect to both `self` and `exp`.
    pub fn pow(&self, exp: &Uint) -> Self {
        Self {
            inner: self.inner.pow_bounded_exp(exp, Uint::BITS),
        }
    }

    /// Returns `self^exp`.
    ///
    /// **This operation is variable time with respect to the bit length of `exp`.** It is
    /// constant time with respect to `self`, so `exp` may be any public value.
    pub fn pow_vartime(&self, exp: &Uint) -> Self {
        Self {
            inner: self.inner.pow_bounded_exp(exp, exp.bits_vartime()),
        }
    }

    /// Compute field inversion: `1 / self`, using Fermat's little theorem (`self^(p - 2)`).
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` when `self` is zero.
    pub fn invert(&self) -> CtOption<Self> {
        let exp = self.modulus().wrapping_sub(&Uint::from_u8(2));
        CtOption::new(self.pow_vartime(&exp), !self.is_zero())
    }

    fn debug_assert_same_field(&self, rhs: &Self) {
        debug_assert_eq!(self.modulus(), rhs.modulus(), "field element moduli differ");
    }
}

//
// Arithmetic trait impls
//

/// Emit `core::ops` trait impls for owned and borrowed operands.
macro_rules! field_op {
    ($op:tt, $func:ident, $assign_op:tt, $assign_func:ident) => {
        impl $op for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: FieldElement) -> FieldElement {
                self.debug_assert_same_field(&rhs);
                FieldElement {
                    inner: $op::$func(self.inner, rhs.inner),
                }
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: &FieldElement) -> FieldElement {
                $op::$func(self, *rhs)
            }
        }

        impl $op<FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: FieldElement) -> FieldElement {
                $op::$func(*self, rhs)
            }
        }

        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: &FieldElement) -> FieldElement {
                $op::$func(*self, *rhs)
            }
        }

        impl $assign_op for FieldElement {
            #[inline]
            fn $assign_func(&mut self, rhs: FieldElement) {
                *self = $op::$func(*self, rhs);
            }
        }

        impl $assign_op<&FieldElement> for FieldElement {
            #[inline]
            fn $assign_func(&mut self, rhs: &FieldElement) {
                *self = $op::$func(*self, *rhs);
            }
        }
    };
}

field_op!(Add, add, AddAssign, add_assign);
field_op!(Sub, sub, SubAssign, sub_assign);
field_op!(Mul, mul, MulAssign, mul_assign);

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        FieldElement { inner: -self.inner }
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        -*self
    }
}

//
// `subtle` trait impls
//

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            inner: DynResidue::conditional_select(&a.inner, &b.inner, choice),
        }
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.debug_assert_same_field(other);
        ConstantTimeEq::ct_eq(&self.inner.retrieve(), &other.inner.retrieve())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x")?;
        for byte in self.to_be_bytes().as_slice() {
            write!(f, "{byte:02X}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::{FieldParams, Uint};
    use hex_literal::hex;
    use proptest::prelude::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    const P192: [u8; 24] = hex!("fffffffffffffffffffffffffffffffeffffffffffffffff");

    fn p192() -> FieldParams {
        FieldParams::from_be_bytes(&P192).unwrap()
    }

    crate::test_primefield!(p192());

    #[test]
    fn from_uint_rejects_modulus() {
        let params = p192();
        let p = *params.modulus();
        assert!(bool::from(FieldElement::from_uint(&params, &p).is_none()));
        let p_minus_1 = p.wrapping_sub(&Uint::ONE);
        assert!(bool::from(FieldElement::from_uint(&params, &p_minus_1).is_some()));
    }

    #[test]
    fn from_be_bytes_checks_length_and_range() {
        let params = p192();
        assert!(bool::from(FieldElement::from_be_bytes(&params, &[1u8; 23]).is_none()));
        assert!(bool::from(FieldElement::from_be_bytes(&params, &[0xff; 24]).is_none()));

        let mut bytes = [0u8; 24];
        bytes[23] = 1;
        let one = FieldElement::from_be_bytes(&params, &bytes);
        assert_eq!(one.unwrap(), FieldElement::one(&params));
    }

    #[test]
    fn from_be_bytes_rejects_modulus() {
        let params = p192();
        assert!(bool::from(FieldElement::from_be_bytes(&params, &P192).is_none()));

        let mut three = [0u8; 24];
        three[23] = 3;
        assert_eq!(
            FieldElement::from_be_bytes(&params, &three).unwrap(),
            FieldElement::from_u64(&params, 3)
        );
    }

    #[test]
    fn invert_zero_is_none() {
        let params = p192();
        assert!(bool::from(FieldElement::zero(&params).invert().is_none()));
    }

    #[test]
    fn negation_wraps() {
        let params = p192();
        let minus_one = -FieldElement::one(&params);
        let expected = params.modulus().wrapping_sub(&Uint::ONE);
        assert_eq!(minus_one.to_canonical(), expected);
        assert_eq!(minus_one + FieldElement::one(&params), FieldElement::zero(&params));
    }

    #[test]
    fn random_is_in_range() {
        let params = p192();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            let fe = FieldElement::random(&params, &mut rng);
            assert!(fe.to_canonical() < *params.modulus());
        }
    }

    #[test]
    fn pow_matches_vartime() {
        let params = p192();
        let x = FieldElement::from_u64(&params, 0x1234_5678);
        let exp = Uint::from_u64(0xdead_beef);
        assert_eq!(x.pow(&exp), x.pow_vartime(&exp));
    }

    proptest! {
        #[test]
        fn mul_by_inverse_is_one(bytes in any::<[u8; 24]>()) {
            let params = p192();
            let mut wide = [0u8; 72];
            wide[48..].copy_from_slice(&bytes);
            let fe = FieldElement::from_uint_reduced(&params, &Uint::from_be_slice(&wide));
            prop_assume!(!bool::from(fe.is_zero()));
            prop_assert_eq!(fe * fe.invert().unwrap(), FieldElement::one(&params));
        }

        #[test]
        fn distributive(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            let params = p192();
            let (a, b, c) = (
                FieldElement::from_u64(&params, a),
                FieldElement::from_u64(&params, b),
                FieldElement::from_u64(&params, c),
            );
            prop_assert_eq!(a * (b + c), a * b + a * c);
            prop_assert_eq!((a - b) + b, a);
        }
    }
}
