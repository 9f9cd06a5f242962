//! Registry of named curves and their domain parameters.
//!
//! Every curve is in short Weierstrass form `y² = x³ + ax + b` over the
//! prime field `𝔽ₚ`, with a base point `G` of prime order `n` and cofactor
//! `h = #E(𝔽ₚ) / n`.

use crate::{
    arithmetic::{self, field, Modulus, Point},
    validation, Error, Result,
};
use alloc::string::String;
use core::{fmt, str::FromStr};
use num_bigint::BigUint;
use num_traits::{Num, One, Zero};

/// Identifiers of the built-in curves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum CurveId {
    /// Textbook curve `y² = x³ + 2x + 2` over `𝔽₁₇` with `G = (5, 1)` and
    /// `n = 19`.
    ///
    /// Offers no security whatsoever. Small enough to enumerate every group
    /// element in tests.
    Test17,

    /// SEC 2 secp256k1, as used by Bitcoin.
    Secp256k1,

    /// NIST P-192 (a.k.a. secp192r1, prime192v1).
    NistP192,

    /// NIST P-224 (a.k.a. secp224r1).
    NistP224,

    /// NIST P-256 (a.k.a. secp256r1, prime256v1).
    NistP256,

    /// NIST P-384 (a.k.a. secp384r1).
    NistP384,

    /// NIST P-521 (a.k.a. secp521r1).
    NistP521,
}

impl CurveId {
    /// All built-in curves.
    pub const ALL: [CurveId; 7] = [
        CurveId::Test17,
        CurveId::Secp256k1,
        CurveId::NistP192,
        CurveId::NistP224,
        CurveId::NistP256,
        CurveId::NistP384,
        CurveId::NistP521,
    ];

    /// Canonical name of this curve.
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// ASN.1 object identifier of this curve, where one is assigned.
    pub fn oid(self) -> Option<&'static str> {
        match self {
            CurveId::Test17 => None,
            CurveId::Secp256k1 => Some("1.3.132.0.10"),
            CurveId::NistP192 => Some("1.2.840.10045.3.1.1"),
            CurveId::NistP224 => Some("1.3.132.0.33"),
            CurveId::NistP256 => Some("1.2.840.10045.3.1.7"),
            CurveId::NistP384 => Some("1.3.132.0.34"),
            CurveId::NistP521 => Some("1.3.132.0.35"),
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            CurveId::Test17 => &["test17", "test"],
            CurveId::Secp256k1 => &["secp256k1", "k-256", "k256"],
            CurveId::NistP192 => &["P-192", "p192", "secp192r1", "prime192v1", "nistp192"],
            CurveId::NistP224 => &["P-224", "p224", "secp224r1", "nistp224"],
            CurveId::NistP256 => &["P-256", "p256", "secp256r1", "prime256v1", "nistp256"],
            CurveId::NistP384 => &["P-384", "p384", "secp384r1", "nistp384"],
            CurveId::NistP521 => &["P-521", "p521", "secp521r1", "nistp521"],
        }
    }

    fn params(self) -> &'static DomainParams {
        match self {
            CurveId::Test17 => &TEST17,
            CurveId::Secp256k1 => &SECP256K1,
            CurveId::NistP192 => &NIST_P192,
            CurveId::NistP224 => &NIST_P224,
            CurveId::NistP256 => &NIST_P256,
            CurveId::NistP384 => &NIST_P384,
            CurveId::NistP521 => &NIST_P521,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    /// Accepts canonical names and common aliases, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim();

        CurveId::ALL
            .iter()
            .copied()
            .find(|id| id.aliases().iter().any(|a| a.eq_ignore_ascii_case(name)))
            .ok_or(Error::UnknownCurve)
    }
}

/// Hardcoded domain parameters, hex encoded.
struct DomainParams {
    name: &'static str,
    p: &'static str,
    a: &'static str,
    b: &'static str,
    gx: &'static str,
    gy: &'static str,
    n: &'static str,
    h: u32,
}

const TEST17: DomainParams = DomainParams {
    name: "test17",
    p: "11",
    a: "2",
    b: "2",
    gx: "5",
    gy: "1",
    n: "13",
    h: 1,
};

/// SEC 2 § 2.4.1
const SECP256K1: DomainParams = DomainParams {
    name: "secp256k1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "0",
    b: "7",
    gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    h: 1,
};

/// SP 800-186 § 3.2.1.1
const NIST_P192: DomainParams = DomainParams {
    name: "P-192",
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    gx: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    gy: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
    n: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    h: 1,
};

/// SP 800-186 § 3.2.1.2
const NIST_P224: DomainParams = DomainParams {
    name: "P-224",
    p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    gx: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    gy: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
    n: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    h: 1,
};

/// SP 800-186 § 3.2.1.3
const NIST_P256: DomainParams = DomainParams {
    name: "P-256",
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    h: 1,
};

/// SP 800-186 § 3.2.1.4
const NIST_P384: DomainParams = DomainParams {
    name: "P-384",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    gx: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
    gy: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    n: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    h: 1,
};

/// SP 800-186 § 3.2.1.5
const NIST_P521: DomainParams = DomainParams {
    name: "P-521",
    p: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    a: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
    b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    gx: "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
    gy: "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
    n: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
    h: 1,
};

/// Elliptic curve domain parameters.
///
/// Immutable once constructed: obtain one with [`Curve::lookup`] (or by
/// name via [`Curve::by_name`]), or validate custom parameters with
/// [`Curve::new`]. Key pairs and protocol sessions keep their own copy, so
/// a session can never observe a different curve than the one its keys
/// were created on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    id: Option<CurveId>,
    name: String,
    field: Modulus,
    scalars: Modulus,
    a: BigUint,
    b: BigUint,
    generator: Point,
    cofactor: BigUint,
}

impl Curve {
    /// Domain parameters of a built-in curve.
    pub fn lookup(id: CurveId) -> Self {
        let params = id.params();
        tracing::debug!(curve = params.name, "looked up curve");

        // Built-in tables are covered by tests, so parsing cannot fail here
        let parse = |hex: &str| BigUint::from_str_radix(hex, 16).unwrap_or_default();

        Self {
            id: Some(id),
            name: params.name.into(),
            field: Modulus::new(parse(params.p)),
            scalars: Modulus::new(parse(params.n)),
            a: parse(params.a),
            b: parse(params.b),
            generator: Point::new(parse(params.gx), parse(params.gy)),
            cofactor: BigUint::from(params.h),
        }
    }

    /// Domain parameters of a built-in curve identified by name or alias.
    ///
    /// Fails with [`Error::UnknownCurve`] for any other input.
    pub fn by_name(name: &str) -> Result<Self> {
        name.parse().map(Self::lookup)
    }

    /// Validate and assemble custom domain parameters.
    ///
    /// Checks that `p` is an odd prime greater than 3, that the curve is
    /// non-singular, that `G` is a finite point on the curve, that `n` is a
    /// prime with `n·G = 𝒪`, and that `h ≥ 1`.
    pub fn new(
        name: &str,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: Point,
        n: BigUint,
        h: BigUint,
    ) -> Result<Self> {
        if p <= BigUint::from(3u8) || !p.bit(0) || !field::is_probable_prime(&p) {
            return Err(Error::InvalidArgument("field modulus must be an odd prime > 3"));
        }

        if !field::is_probable_prime(&n) {
            return Err(Error::InvalidArgument("group order must be prime"));
        }

        if h.is_zero() {
            return Err(Error::InvalidArgument("cofactor must be nonzero"));
        }

        let field = Modulus::new(p);
        if !field.contains(&a) || !field.contains(&b) {
            return Err(Error::InvalidArgument("coefficient out of range"));
        }

        // 4a³ + 27b² ≢ 0 (mod p)
        let a3 = field.mul(&field.square(&a), &a);
        let discriminant = field.add(
            &field.mul(&BigUint::from(4u8), &a3),
            &field.mul(&BigUint::from(27u8), &field.square(&b)),
        );
        if discriminant.is_zero() {
            return Err(Error::InvalidArgument("curve is singular"));
        }

        let curve = Self {
            id: None,
            name: name.into(),
            field,
            scalars: Modulus::new(n),
            a,
            b,
            generator,
            cofactor: h,
        };

        let g = curve.generator();
        let on_curve = match g.coordinates() {
            Some((x, y)) => {
                curve.field.contains(x) && curve.field.contains(y) && validation::is_on_curve(g, &curve)
            }
            None => false,
        };
        if !on_curve {
            return Err(Error::InvalidArgument("generator is not a point on the curve"));
        }

        if !arithmetic::scalar_multiply(curve.order(), g, &curve).is_identity() {
            return Err(Error::InvalidArgument("generator does not have order n"));
        }

        tracing::debug!(curve = name, "validated custom curve parameters");
        Ok(curve)
    }

    /// Identifier of this curve, if it is one of the built-in curves.
    pub fn id(&self) -> Option<CurveId> {
        self.id
    }

    /// Name of this curve.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coefficient `a` of the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Field prime `p`.
    pub fn p(&self) -> &BigUint {
        self.field.value()
    }

    /// Base field `𝔽ₚ`, for arithmetic on coordinates.
    pub fn field(&self) -> &Modulus {
        &self.field
    }

    /// Scalar field `ℤ/nℤ`, for arithmetic on scalars.
    pub fn scalars(&self) -> &Modulus {
        &self.scalars
    }

    /// Base point `G`.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        self.scalars.value()
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Does this curve have a cofactor greater than one?
    pub fn has_cofactor(&self) -> bool {
        !self.cofactor.is_one()
    }

    /// Bit length of the field prime `p`.
    pub fn bits(&self) -> u64 {
        self.field.bits()
    }

    /// Bit length of the group order `n`.
    pub fn order_bits(&self) -> u64 {
        self.scalars.bits()
    }

    /// Size in bytes of a serialized field element.
    pub fn field_bytes(&self) -> usize {
        ((self.bits() + 7) / 8) as usize
    }

    /// Size in bytes of a serialized scalar.
    pub fn scalar_bytes(&self) -> usize {
        ((self.order_bits() + 7) / 8) as usize
    }

    /// Compute `k·G`.
    pub fn mul_generator(&self, k: &BigUint) -> Point {
        arithmetic::scalar_multiply(k, &self.generator, self)
    }
}

impl From<CurveId> for Curve {
    fn from(id: CurveId) -> Curve {
        Curve::lookup(id)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
