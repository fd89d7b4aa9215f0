//! Runtime field parameters.

use crate::{
    Error, LIMBS, Result, Uint,
    encoding::uint_from_be_slice,
    monty::sqrt::Algorithm,
};
use bigint::modular::runtime_mod::DynResidueParams;
use core::fmt;

/// Parameters of a prime field `GF(p)` chosen at runtime.
///
/// Holds the modulus together with its precomputed Montgomery constants and square root
/// parameters. The modulus is treated as public: constructing parameters and querying them is
/// variable-time.
#[derive(Clone, Copy)]
pub struct FieldParams {
    modulus: Uint,
    monty: DynResidueParams<LIMBS>,
    bits: usize,
    byte_len: usize,
    pub(crate) sqrt: Algorithm,
}

impl FieldParams {
    /// Create parameters for the field with the given modulus.
    ///
    /// The modulus must be an odd prime greater than 2. Oddness is checked; primality is the
    /// caller's responsibility, although a composite modulus is likely to be rejected while
    /// searching for a quadratic non-residue.
    pub fn new(modulus: &Uint) -> Result<Self> {
        if modulus.as_words()[0] & 1 == 0 || *modulus <= Uint::from_u8(2) {
            return Err(Error);
        }

        let monty = DynResidueParams::new(modulus);
        let bits = modulus.bits_vartime();

        let mut params = Self {
            modulus: *modulus,
            monty,
            bits,
            byte_len: bits.div_ceil(8),
            sqrt: Algorithm::Shanks {
                exp: Uint::ZERO,
            },
        };

        params.sqrt = Algorithm::for_params(&params)?;
        Ok(params)
    }

    /// Create parameters from a big-endian modulus.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(&uint_from_be_slice(bytes)?)
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &Uint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Size of a serialized field element in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub(crate) fn monty(&self) -> DynResidueParams<LIMBS> {
        self.monty
    }
}

impl fmt::Debug for FieldParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldParams")
            .field("modulus", &self.modulus)
            .field("bits", &self.bits)
            .finish_non_exhaustive()
    }
}

impl PartialEq for FieldParams {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Eq for FieldParams {}
