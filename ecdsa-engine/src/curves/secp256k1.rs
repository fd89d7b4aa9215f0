//! secp256k1, the Koblitz curve from SEC 2 (`a = 0`).

use super::Definition;
use hex_literal::hex;

pub(crate) const DEFINITION: Definition = Definition {
    modulus: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
    order: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    a: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
    b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
    gx: &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    gy: &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
};
