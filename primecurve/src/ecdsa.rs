//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! This module contains support for computing and verifying ECDSA
//! signatures over any [`Curve`] with any hash function.
//!
//! ## Signing/Verification Example
//!
//! ```
//! use primecurve::{
//!     ecdsa::{HashAlgorithm, Signer},
//!     Curve, CurveId, KeyPair,
//! };
//! use rand::rngs::OsRng;
//!
//! let curve = Curve::lookup(CurveId::NistP256);
//!
//! // Signing
//! let signer = Signer::new(KeyPair::generate(&curve, &mut OsRng), HashAlgorithm::Sha256);
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature = signer.sign_with_rng(&mut OsRng, message).unwrap();
//!
//! // Verification
//! let verifier = signer.verifier();
//! assert!(verifier.verify(message, &signature));
//! ```
//!
//! ## Nonces
//!
//! Every signature needs a fresh secret nonce `k`. Two signatures made with
//! the same `k` and the same key reveal the private key. The fixed-nonce
//! entry points ([`sign_message_with_nonce`], [`sign_prehash_with_nonce`])
//! exist only to reproduce published test vectors.
//!
//! The random-nonce loop retries until it finds a `k` for which neither
//! `r` nor `s` is zero. For curves of cryptographic size the probability of
//! even a single retry is negligible, so the loop is deliberately left
//! without an iteration cap.

mod hash;
mod sign;
mod signature;
mod verify;

pub use self::{
    hash::{HashAlgorithm, MessageDigest},
    sign::Signer,
    signature::Signature,
    verify::{VerifyError, Verifier},
};

use crate::{encoding, keys::SecretScalar, validation, Curve, Error, KeyPair, Point, Result};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// Convert a hexadecimal digest into the integer `e` used by ECDSA.
///
/// The digest is read as a big-endian integer of `4 · len` bits, leading
/// zeros included. If that is longer than the bit length of the group
/// order, only its leftmost `bits(n)` bits are kept (FIPS 186-4 § 6.4).
pub fn truncate_digest(digest_hex: &str, curve: &Curve) -> Result<BigUint> {
    let e = encoding::parse_hex(digest_hex)
        .map_err(|_| Error::InvalidArgument("malformed message digest"))?;

    let digest_bits = 4 * encoding::hex_digit_count(digest_hex) as u64;
    let order_bits = curve.order_bits();

    if digest_bits > order_bits {
        Ok(e >> (digest_bits - order_bits))
    } else {
        Ok(e)
    }
}

/// The raw signing equation:
///
/// ```text
/// R = k·G,  r = R.x mod n,  s = k⁻¹·(e + d·r) mod n
/// ```
///
/// Performs no retry: the result is degenerate (see
/// [`Signature::is_degenerate`]) if `r` or `s` comes out zero, and is
/// `(0, 0)` if `k ≡ 0 (mod n)`.
pub fn generate_signature(e: &BigUint, k: &BigUint, key_pair: &KeyPair, curve: &Curve) -> Signature {
    let n = curve.scalars();

    let k_inverse = match n.invert(k) {
        Some(inv) => inv,
        None => return Signature::from_scalars_unchecked(BigUint::default(), BigUint::default()),
    };

    let r = match curve.mul_generator(k).x() {
        Some(x) => n.reduce(x),
        None => BigUint::default(),
    };

    let d = key_pair.secret().as_biguint();
    let s = n.mul(&k_inverse, &n.add(e, &n.mul(d, &r)));

    Signature::from_scalars_unchecked(r, s)
}

/// Sign a prehashed message with random nonces drawn from `rng`.
pub fn sign_prehash(
    digest_hex: &str,
    curve: &Curve,
    key_pair: &KeyPair,
    rng: &mut (impl CryptoRng + RngCore),
) -> Result<Signature> {
    key_pair.ensure_curve(curve)?;
    let e = truncate_digest(digest_hex, curve)?;

    let mut attempt = 0u64;
    loop {
        attempt += 1;

        let k = SecretScalar::random(curve, rng);
        let signature = generate_signature(&e, k.as_biguint(), key_pair, curve);

        if !signature.is_degenerate() {
            return Ok(signature);
        }

        tracing::trace!(curve = curve.name(), attempt, "degenerate signature, retrying with a new nonce");
    }
}

/// Hash `message` and sign it with random nonces drawn from `rng`.
pub fn sign_message(
    message: &[u8],
    hash: &impl MessageDigest,
    curve: &Curve,
    key_pair: &KeyPair,
    rng: &mut (impl CryptoRng + RngCore),
) -> Result<Signature> {
    sign_prehash(&hash.digest_hex(message), curve, key_pair, rng)
}

/// Sign a prehashed message with the caller-supplied nonce `k`.
///
/// **For test vectors only.** Reusing `k`, or using a predictable `k`,
/// discloses the private key. Fails with [`Error::InvalidArgument`] if `k`
/// is not in `[1, n - 1]` or the signature degenerates.
pub fn sign_prehash_with_nonce(
    digest_hex: &str,
    k: &BigUint,
    curve: &Curve,
    key_pair: &KeyPair,
) -> Result<Signature> {
    key_pair.ensure_curve(curve)?;

    if !validation::is_in_range(k, curve) {
        return Err(Error::InvalidArgument("nonce out of range [1, n - 1]"));
    }

    let e = truncate_digest(digest_hex, curve)?;
    let signature = generate_signature(&e, k, key_pair, curve);

    if signature.is_degenerate() {
        tracing::warn!(curve = curve.name(), "fixed nonce produced a degenerate signature");
        return Err(Error::InvalidArgument("nonce yields a degenerate signature"));
    }

    Ok(signature)
}

/// Hash `message` and sign it with the caller-supplied nonce `k`.
///
/// **For test vectors only**; see [`sign_prehash_with_nonce`].
pub fn sign_message_with_nonce(
    message: &[u8],
    k: &BigUint,
    hash: &impl MessageDigest,
    curve: &Curve,
    key_pair: &KeyPair,
) -> Result<Signature> {
    sign_prehash_with_nonce(&hash.digest_hex(message), k, curve, key_pair)
}

/// Verify `signature` over a prehashed message.
pub fn verify_prehash(
    digest_hex: &str,
    public_key: &Point,
    signature: &Signature,
    curve: &Curve,
) -> bool {
    verify::verify_prehash_detailed(digest_hex, public_key, signature, curve).is_ok()
}

/// Hash `message` and verify `signature` over it.
///
/// Returns `false` for a mismatch and for malformed input alike; use
/// [`Verifier::verify_detailed`] to tell the two apart.
pub fn verify_signature(
    message: &[u8],
    public_key: &Point,
    signature: &Signature,
    hash: &impl MessageDigest,
    curve: &Curve,
) -> bool {
    verify_prehash(&hash.digest_hex(message), public_key, signature, curve)
}
