//! Registry of named curves.
//!
//! The registry is a fixed, read-only catalog. Each [`Curve`] is built and validated once, on
//! first use, and shared by `&'static` reference afterwards.

use crate::{Error, Result, curves};
use core::{fmt, str::FromStr};
use der::asn1::ObjectIdentifier;
use once_cell::sync::Lazy;
use primeorder::{AffinePoint, PrimeCurveParams, Uint};

/// Name of a curve in the registry.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum CurveName {
    /// NIST P-192, the default curve.
    #[default]
    P192,

    /// NIST P-224.
    P224,

    /// NIST P-256.
    P256,

    /// NIST P-384.
    P384,

    /// NIST P-521.
    P521,

    /// SEC 2 secp256k1.
    Secp256k1,
}

impl CurveName {
    /// Every registered curve, shortest field first.
    pub const ALL: [CurveName; 6] = [
        CurveName::P192,
        CurveName::P224,
        CurveName::P256,
        CurveName::P384,
        CurveName::P521,
        CurveName::Secp256k1,
    ];

    /// Canonical name of the curve.
    pub const fn as_str(self) -> &'static str {
        match self {
            CurveName::P192 => "P-192",
            CurveName::P224 => "P-224",
            CurveName::P256 => "P-256",
            CurveName::P384 => "P-384",
            CurveName::P521 => "P-521",
            CurveName::Secp256k1 => "secp256k1",
        }
    }

    /// Alternative names accepted by [`FromStr`].
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            CurveName::P192 => &["NIST192p", "secp192r1", "prime192v1"],
            CurveName::P224 => &["NIST224p", "secp224r1"],
            CurveName::P256 => &["NIST256p", "secp256r1", "prime256v1"],
            CurveName::P384 => &["NIST384p", "secp384r1"],
            CurveName::P521 => &["NIST521p", "secp521r1"],
            CurveName::Secp256k1 => &["SECP256k1"],
        }
    }

    /// Object identifier naming the curve in `ECParameters` / `AlgorithmIdentifier` structures.
    pub const fn oid(self) -> ObjectIdentifier {
        match self {
            CurveName::P192 => ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1"),
            CurveName::P224 => ObjectIdentifier::new_unwrap("1.3.132.0.33"),
            CurveName::P256 => ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"),
            CurveName::P384 => ObjectIdentifier::new_unwrap("1.3.132.0.34"),
            CurveName::P521 => ObjectIdentifier::new_unwrap("1.3.132.0.35"),
            CurveName::Secp256k1 => ObjectIdentifier::new_unwrap("1.3.132.0.10"),
        }
    }

    /// Resolve a curve object identifier.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownCurve`] if no registered curve has this identifier.
    pub fn from_oid(oid: ObjectIdentifier) -> Result<Self> {
        match Self::ALL.into_iter().find(|name| name.oid() == oid) {
            Some(name) => Ok(name),
            None => {
                debug!(%oid, "unknown curve object identifier");
                Err(Error::UnknownCurve)
            }
        }
    }

    /// Hash function used by default for messages signed over this curve.
    pub const fn default_hash(self) -> HashAlgorithm {
        match self {
            CurveName::P224 => HashAlgorithm::Sha224,
            CurveName::P192 | CurveName::P256 | CurveName::Secp256k1 => HashAlgorithm::Sha256,
            CurveName::P384 => HashAlgorithm::Sha384,
            CurveName::P521 => HashAlgorithm::Sha512,
        }
    }

    /// Parameters of this curve.
    pub fn curve(self) -> &'static Curve {
        match self {
            CurveName::P192 => &*P192,
            CurveName::P224 => &*P224,
            CurveName::P256 => &*P256,
            CurveName::P384 => &*P384,
            CurveName::P521 => &*P521,
            CurveName::Secp256k1 => &*SECP256K1,
        }
    }

    fn definition(self) -> &'static curves::Definition {
        match self {
            CurveName::P192 => &curves::p192::DEFINITION,
            CurveName::P224 => &curves::p224::DEFINITION,
            CurveName::P256 => &curves::p256::DEFINITION,
            CurveName::P384 => &curves::p384::DEFINITION,
            CurveName::P521 => &curves::p521::DEFINITION,
            CurveName::Secp256k1 => &curves::secp256k1::DEFINITION,
        }
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive lookup by canonical name or alias.
impl FromStr for CurveName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|curve| {
                core::iter::once(curve.as_str())
                    .chain(curve.aliases().iter().copied())
                    .any(|candidate| candidate.eq_ignore_ascii_case(name))
            })
            .ok_or(Error::UnknownCurve)
    }
}

/// Hash functions paired with curves by default.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HashAlgorithm {
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// Size of the digest in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

/// Run `$body` with the type alias `$d` bound to the `sha2` hasher selected by `$hash`.
macro_rules! with_hash {
    ($hash:expr, $d:ident => $body:expr) => {
        match $hash {
            $crate::registry::HashAlgorithm::Sha224 => {
                type $d = ::sha2::Sha224;
                $body
            }
            $crate::registry::HashAlgorithm::Sha256 => {
                type $d = ::sha2::Sha256;
                $body
            }
            $crate::registry::HashAlgorithm::Sha384 => {
                type $d = ::sha2::Sha384;
                $body
            }
            $crate::registry::HashAlgorithm::Sha512 => {
                type $d = ::sha2::Sha512;
                $body
            }
        }
    };
}

pub(crate) use with_hash;

/// A registered curve: validated domain parameters plus identity.
pub struct Curve {
    name: CurveName,
    params: PrimeCurveParams,
}

impl Curve {
    /// # Panics
    ///
    /// If a built-in definition fails validation. Every definition is exercised by the test
    /// suite.
    fn build(name: CurveName) -> Self {
        match name.definition().build() {
            Ok(params) => Self { name, params },
            Err(_) => panic!("built-in {name} parameters failed validation"),
        }
    }

    /// Name of this curve.
    pub fn name(&self) -> CurveName {
        self.name
    }

    /// Object identifier of this curve.
    pub fn oid(&self) -> ObjectIdentifier {
        self.name.oid()
    }

    /// Default message hash for this curve.
    pub fn hash(&self) -> HashAlgorithm {
        self.name.default_hash()
    }

    /// Domain parameters.
    pub fn params(&self) -> &PrimeCurveParams {
        &self.params
    }

    /// Group order `n`.
    pub fn order(&self) -> &Uint {
        self.params.order()
    }

    /// Width of an encoded field element (point coordinate) in bytes.
    pub fn field_bytes(&self) -> usize {
        self.params.field_bytes()
    }

    /// Width of an encoded scalar (private key, `r`, `s`) in bytes.
    pub fn scalar_bytes(&self) -> usize {
        self.params.scalar_bytes()
    }

    /// Base point `G`.
    pub fn generator(&self) -> AffinePoint<'_> {
        self.params.generator()
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Curve").field(&self.name).finish()
    }
}

/// Curves are singletons; two are equal when they carry the same name.
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Curve {}

static P192: Lazy<Curve> = Lazy::new(|| Curve::build(CurveName::P192));
static P224: Lazy<Curve> = Lazy::new(|| Curve::build(CurveName::P224));
static P256: Lazy<Curve> = Lazy::new(|| Curve::build(CurveName::P256));
static P384: Lazy<Curve> = Lazy::new(|| Curve::build(CurveName::P384));
static P521: Lazy<Curve> = Lazy::new(|| Curve::build(CurveName::P521));
static SECP256K1: Lazy<Curve> = Lazy::new(|| Curve::build(CurveName::Secp256k1));

/// Look up a curve by canonical name or alias (ASCII case-insensitive).
///
/// # Errors
///
/// [`Error::UnknownCurve`] if the name is not registered.
pub fn lookup(name: &str) -> Result<&'static Curve> {
    match name.parse::<CurveName>() {
        Ok(name) => Ok(name.curve()),
        Err(err) => {
            debug!(name, "unknown curve name");
            Err(err)
        }
    }
}

/// Look up a curve by object identifier.
///
/// # Errors
///
/// [`Error::UnknownCurve`] if the identifier is not registered.
pub fn lookup_oid(oid: ObjectIdentifier) -> Result<&'static Curve> {
    CurveName::from_oid(oid).map(CurveName::curve)
}

/// Resolve a curve identifier found inside a DER structure, where an unknown curve is a framing
/// error.
pub(crate) fn lookup_der_oid(oid: ObjectIdentifier) -> Result<&'static Curve> {
    lookup_oid(oid).map_err(|_| Error::UnexpectedDer)
}

#[cfg(test)]
mod tests {
    use super::{CurveName, HashAlgorithm, lookup, lookup_oid};
    use crate::Error;
    use der::asn1::ObjectIdentifier;

    #[test]
    fn default_is_p192() {
        assert_eq!(CurveName::default(), CurveName::P192);
        assert_eq!(CurveName::default().curve().field_bytes(), 24);
    }

    #[test]
    fn lookup_by_name_and_alias() {
        for name in CurveName::ALL {
            assert_eq!(lookup(name.as_str()).unwrap().name(), name);
            for alias in name.aliases() {
                assert_eq!(lookup(alias).unwrap().name(), name);
            }
        }

        assert_eq!("nist256P".parse::<CurveName>(), Ok(CurveName::P256));
        assert_eq!(lookup("brainpoolP256r1"), Err(Error::UnknownCurve));
        assert_eq!("".parse::<CurveName>(), Err(Error::UnknownCurve));
    }

    #[test]
    fn lookup_by_oid() {
        for name in CurveName::ALL {
            assert_eq!(lookup_oid(name.oid()).unwrap().name(), name);
        }

        let sm2 = ObjectIdentifier::new_unwrap("1.2.156.10197.1.301");
        assert_eq!(lookup_oid(sm2), Err(Error::UnknownCurve));
    }

    #[test]
    fn widths() {
        let widths = CurveName::ALL.map(|name| {
            let curve = name.curve();
            (curve.field_bytes(), curve.scalar_bytes())
        });
        assert_eq!(widths, [(24, 24), (28, 28), (32, 32), (48, 48), (66, 66), (32, 32)]);
    }

    #[test]
    fn default_hashes() {
        assert_eq!(CurveName::P192.default_hash(), HashAlgorithm::Sha256);
        assert_eq!(CurveName::P224.default_hash(), HashAlgorithm::Sha224);
        assert_eq!(CurveName::P384.default_hash(), HashAlgorithm::Sha384);
        assert_eq!(CurveName::P521.default_hash().output_size(), 64);
    }
}
