//! Modular arithmetic over a prime modulus.
//!
//! The same type serves the base field (modulus `p`, for coordinates) and
//! the scalar field (modulus `n`, for private keys, nonces and signature
//! components). Each [`Curve`](crate::Curve) owns one of each, so call sites
//! always name the modulus they work in.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// An odd prime modulus together with the operations of its residue field.
///
/// Operands need not be reduced; every result is.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Modulus {
    value: BigUint,
}

impl Modulus {
    pub(crate) fn new(value: BigUint) -> Self {
        Self { value }
    }

    /// The modulus itself.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.value.bits()
    }

    /// Is `a` a canonical representative, i.e. `a < m`?
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.value
    }

    /// Returns `a mod m`.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.value
    }

    /// Returns `a + b mod m`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.value
    }

    /// Returns `a - b mod m`.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = a % &self.value;
        let b = b % &self.value;

        if a >= b {
            a - b
        } else {
            &self.value - b + a
        }
    }

    /// Returns `-a mod m`.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// Returns `a * b mod m`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.value
    }

    /// Returns `a² mod m`.
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Returns `a^e mod m`.
    pub fn pow(&self, a: &BigUint, e: &BigUint) -> BigUint {
        a.modpow(e, &self.value)
    }

    /// Returns `a⁻¹ mod m`, or `None` when `a ≡ 0`.
    ///
    /// Uses the extended Euclidean algorithm, so it also reports
    /// non-invertible elements if the modulus is not actually prime.
    pub fn invert(&self, a: &BigUint) -> Option<BigUint> {
        let a = BigInt::from_biguint(Sign::Plus, a % &self.value);
        let m = BigInt::from_biguint(Sign::Plus, self.value.clone());

        let egcd = a.extended_gcd(&m);
        if !egcd.gcd.is_one() {
            return None;
        }

        egcd.x.mod_floor(&m).to_biguint()
    }

    /// Returns a square root of `a` modulo a prime `m`, or `None` if `a` is
    /// a quadratic non-residue.
    ///
    /// Tonelli–Shanks; collapses to a single exponentiation when
    /// `m ≡ 3 (mod 4)`.
    pub fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        let one = BigUint::one();
        let two = BigUint::from(2u8);
        let a = self.reduce(a);

        if a.is_zero() {
            return Some(a);
        }

        let p_minus_one = &self.value - &one;
        let euler = &p_minus_one >> 1u32;
        if self.pow(&a, &euler) != one {
            return None;
        }

        if self.value.bit(1) {
            let root = self.pow(&a, &((&self.value + &one) >> 2u32));
            return Some(root);
        }

        // p - 1 = q·2^s with q odd
        let s = p_minus_one.trailing_zeros().unwrap_or(0);
        let q = &p_minus_one >> s;

        let mut z = two;
        while self.pow(&z, &euler) != p_minus_one {
            z += 1u32;
        }

        let mut m = s;
        let mut c = self.pow(&z, &q);
        let mut t = self.pow(&a, &q);
        let mut r = self.pow(&a, &((&q + &one) >> 1u32));

        while !t.is_one() {
            let mut i = 0;
            let mut t2i = t.clone();
            while !t2i.is_one() {
                t2i = self.square(&t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = self.square(&b);
            }

            m = i;
            c = self.square(&b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        Some(r)
    }
}

/// Small primes used both for trial division and as Miller–Rabin bases.
const SMALL_PRIMES: [u32; 24] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
];

/// Miller–Rabin probable-prime test with fixed bases.
///
/// Deterministic for every `n < 3.3·10²⁴`; for larger inputs a composite
/// passes with probability at most `4⁻²⁴` unless it was constructed
/// against these specific bases. Only used to vet custom domain parameters.
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::one();

    if n <= &one {
        return false;
    }

    for &sp in SMALL_PRIMES.iter() {
        let sp = BigUint::from(sp);
        if n == &sp {
            return true;
        }
        if (n % &sp).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &base in SMALL_PRIMES.iter() {
        let mut x = BigUint::from(base).modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&BigUint::from(2u8), n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}
