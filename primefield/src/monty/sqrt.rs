//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::{Error, FieldElement, FieldParams, Result, Uint};
use bigint::Word;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Upper bound on the candidates tried when searching for a quadratic non-residue.
const NON_RESIDUE_SEARCH_LIMIT: u64 = 1 << 12;

/// Square root algorithms, along with the exponents each one needs.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Algorithm {
    /// Atkins algorithm for `q ≡ 5 (mod 8)`, with `exp = (q - 5) / 8`.
    Atkins { exp: Uint },

    /// Shanks algorithm for `q ≡ 3 (mod 4)`, with `exp = (q + 1) / 4`.
    Shanks { exp: Uint },

    /// Tonelli-Shanks algorithm for any odd prime, with `q - 1 = 2^s * t`.
    TonelliShanks {
        s: u32,
        t_minus_1_over_2: Uint,
        root_of_unity: Uint,
    },
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    pub(crate) fn for_params(params: &FieldParams) -> Result<Self> {
        let p = params.modulus();

        if mod_residue(p, 4) == 3 {
            return Ok(Self::Shanks {
                exp: p.wrapping_add(&Uint::ONE).shr_vartime(2),
            });
        }

        if mod_residue(p, 8) == 5 {
            return Ok(Self::Atkins {
                exp: p.wrapping_sub(&Uint::from_u8(5)).shr_vartime(3),
            });
        }

        let p_minus_1 = p.wrapping_sub(&Uint::ONE);
        let s = trailing_zeros(&p_minus_1);
        let t = p_minus_1.shr_vartime(s as usize);
        let euler_exp = p_minus_1.shr_vartime(1);
        let minus_one = -FieldElement::one(params);

        let non_residue = (2..NON_RESIDUE_SEARCH_LIMIT)
            .map(|c| FieldElement::from_u64(params, c))
            .find(|c| c.pow_vartime(&euler_exp) == minus_one)
            .ok_or(Error)?;

        Ok(Self::TonelliShanks {
            s,
            t_minus_1_over_2: t.wrapping_sub(&Uint::ONE).shr_vartime(1),
            root_of_unity: non_residue.pow_vartime(&t).to_canonical(),
        })
    }
}

impl FieldElement {
    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// `params` must describe the field this element belongs to.
    pub fn sqrt(&self, params: &FieldParams) -> CtOption<Self> {
        debug_assert_eq!(self.modulus(), params.modulus());

        match &params.sqrt {
            Algorithm::Atkins { exp } => self.sqrt_atkins(params, exp),
            Algorithm::Shanks { exp } => self.sqrt_shanks(exp),
            Algorithm::TonelliShanks {
                s,
                t_minus_1_over_2,
                root_of_unity,
            } => self.sqrt_tonelli_shanks(params, *s, t_minus_1_over_2, root_of_unity),
        }
    }

    /// Atkins algorithm for `q ≡ 5 (mod 8)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
    fn sqrt_atkins(&self, params: &FieldParams, mod_minus_5_over_8: &Uint) -> CtOption<Self> {
        let one = Self::one(params);
        let two = Self::from_u64(params, 2);

        let t = two.pow_vartime(mod_minus_5_over_8);
        let a1 = self.pow_vartime(mod_minus_5_over_8);
        let a0 = (a1.square() * self).square();
        let b = t * a1;
        let ab = self * &b;
        let i = two * ab * b;
        let x = ab * (i - one);
        CtOption::new(x, !a0.ct_eq(&-one))
    }

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    ///
    /// For `q = 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((q + 1) / 4) (mod q)`.
    fn sqrt_shanks(&self, mod_plus_1_over_4: &Uint) -> CtOption<Self> {
        let sqrt = self.pow_vartime(mod_plus_1_over_4);
        CtOption::new(sqrt, (sqrt * sqrt).ct_eq(self))
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// Constant time for a fixed modulus: the loop bounds depend only on `s`.
    fn sqrt_tonelli_shanks(
        &self,
        params: &FieldParams,
        s: u32,
        t_minus_1_over_2: &Uint,
        root_of_unity: &Uint,
    ) -> CtOption<Self> {
        let one = Self::one(params);
        let w = self.pow_vartime(t_minus_1_over_2);

        let mut v = s;
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = Self::from_uint_reduced(params, root_of_unity);

        for max_v in (1..=s).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&one);
                let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Self::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Self::conditional_select(&result, &x, b.ct_eq(&one));
            z = z.square();
            b *= z;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }
}

/// Compute residue classes of the modulus for selecting particular square root algorithms.
fn mod_residue(p: &Uint, n: Word) -> Word {
    debug_assert!(n.is_power_of_two());
    p.as_words()[0] & (n - 1)
}

/// Number of trailing zero bits. Variable-time.
fn trailing_zeros(x: &Uint) -> u32 {
    let mut count = 0;

    for word in x.as_words() {
        if *word == 0 {
            count += Word::BITS;
        } else {
            return count + word.trailing_zeros();
        }
    }

    count
}
