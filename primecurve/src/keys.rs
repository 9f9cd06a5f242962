//! Key pair generation and import.

use crate::{encoding, validation, Curve, Error, Point, Result};
use alloc::string::String;
use core::fmt;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Secret scalar in `[1, n - 1]`, used as a private key or an ECDSA nonce.
///
/// Its `Debug` output is redacted.
#[derive(Clone, Eq, PartialEq)]
pub struct SecretScalar(BigUint);

impl SecretScalar {
    /// Draw a scalar uniformly from `[1, n - 1]`.
    pub fn random(curve: &Curve, rng: &mut (impl CryptoRng + RngCore)) -> Self {
        Self(rng.gen_biguint_range(&BigUint::one(), curve.order()))
    }

    /// Wrap `d`, checking that `1 ≤ d ≤ n - 1`.
    pub fn new(d: BigUint, curve: &Curve) -> Result<Self> {
        if validation::is_in_range(&d, curve) {
            Ok(Self(d))
        } else {
            Err(Error::InvalidArgument("scalar out of range [1, n - 1]"))
        }
    }

    /// Borrow the scalar.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Lowercase hexadecimal encoding of the scalar.
    pub fn to_hex(&self) -> String {
        encoding::to_hex(&self.0)
    }
}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretScalar(..)")
    }
}

/// Private scalar `d` together with the public point `Q = d·G`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPair {
    curve: Curve,
    secret: SecretScalar,
    public: Point,
}

impl KeyPair {
    /// Generate a fresh key pair, drawing `d` uniformly from `[1, n - 1]`.
    pub fn generate(curve: &Curve, rng: &mut (impl CryptoRng + RngCore)) -> Self {
        let secret = SecretScalar::random(curve, rng);
        let key_pair = Self::from_secret(secret, curve);
        debug_assert!(validation::validate_key_pair(&key_pair, curve));

        tracing::debug!(curve = curve.name(), "generated key pair");
        key_pair
    }

    /// Generate a fresh key pair using the operating system's random number
    /// generator.
    #[cfg(feature = "getrandom")]
    pub fn random(curve: &Curve) -> Self {
        Self::generate(curve, &mut rand::rngs::OsRng)
    }

    /// Import a private scalar and recompute its public point.
    ///
    /// Fails with [`Error::InvalidArgument`] unless `1 ≤ d ≤ n - 1`.
    pub fn from_private_scalar(d: BigUint, curve: &Curve) -> Result<Self> {
        let secret = SecretScalar::new(d, curve)?;
        tracing::debug!(curve = curve.name(), "imported key pair");
        Ok(Self::from_secret(secret, curve))
    }

    /// Import a private scalar from hexadecimal or decimal text (see
    /// [`encoding`]).
    pub fn from_private_hex(d: &str, curve: &Curve) -> Result<Self> {
        Self::from_private_scalar(encoding::parse_scalar(d)?, curve)
    }

    fn from_secret(secret: SecretScalar, curve: &Curve) -> Self {
        let public = curve.mul_generator(secret.as_biguint());

        Self {
            curve: curve.clone(),
            secret,
            public,
        }
    }

    /// Curve this key pair lives on.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Private scalar `d`.
    pub fn secret(&self) -> &SecretScalar {
        &self.secret
    }

    /// Public point `Q = d·G`.
    pub fn public_key(&self) -> &Point {
        &self.public
    }

    pub(crate) fn ensure_curve(&self, curve: &Curve) -> Result<()> {
        if &self.curve == curve {
            Ok(())
        } else {
            Err(Error::InvalidArgument("key pair belongs to a different curve"))
        }
    }
}
