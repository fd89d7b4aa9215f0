//! NIST P-224 (secp224r1).

use super::Definition;
use hex_literal::hex;

pub(crate) const DEFINITION: Definition = Definition {
    modulus: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
    order: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
    a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
    b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
    gx: &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
    gy: &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
};
