//! ECDSA verification.

use super::{truncate_digest, HashAlgorithm, MessageDigest, Signature};
use crate::{arithmetic, validation, Curve, InvalidKeyReason, Point};
use core::fmt;

/// Why a signature was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VerifyError {
    /// The digest, public key or signature components could not be used:
    /// `r` or `s` outside `[1, n - 1]`, an invalid public key, or a digest
    /// that is not hexadecimal.
    Malformed,

    /// Well-formed inputs, but the signature does not match.
    Mismatch,
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::Malformed => f.write_str("malformed signature or public key"),
            VerifyError::Mismatch => f.write_str("signature mismatch"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VerifyError {}

/// ECDSA verification key: a validated public key bound to a hash
/// function.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verifier<H = HashAlgorithm> {
    curve: Curve,
    public_key: Point,
    hash: H,
}

impl<H: MessageDigest> Verifier<H> {
    /// Validate `public_key` and bind it to `hash`.
    pub fn new(curve: &Curve, public_key: Point, hash: H) -> Result<Self, InvalidKeyReason> {
        validation::validate_public_key(&public_key, curve)?;
        Ok(Self::from_trusted_key(curve.clone(), public_key, hash))
    }

    pub(super) fn from_trusted_key(curve: Curve, public_key: Point, hash: H) -> Self {
        Self {
            curve,
            public_key,
            hash,
        }
    }

    /// The public key signatures are checked against.
    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    /// Curve of the public key.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Is `signature` valid for `message`?
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_detailed(message, signature).is_ok()
    }

    /// Like [`Verifier::verify`], but reports why a signature was rejected.
    pub fn verify_detailed(&self, message: &[u8], signature: &Signature) -> Result<(), VerifyError> {
        self.verify_prehash(&self.hash.digest_hex(message), signature)
    }

    /// Verify `signature` over a prehashed message.
    pub fn verify_prehash(&self, digest_hex: &str, signature: &Signature) -> Result<(), VerifyError> {
        verify_prehash_detailed(digest_hex, &self.public_key, signature, &self.curve)
    }
}

/// ```text
/// w = s⁻¹,  u₁ = e·w,  u₂ = r·w,  (x₁, y₁) = u₁·G + u₂·Q
/// ```
///
/// The signature is valid iff `x₁ ≡ r (mod n)`.
pub(super) fn verify_prehash_detailed(
    digest_hex: &str,
    public_key: &Point,
    signature: &Signature,
    curve: &Curve,
) -> Result<(), VerifyError> {
    let (r, s) = (signature.r(), signature.s());

    if !validation::is_in_range(r, curve) || !validation::is_in_range(s, curve) {
        tracing::debug!(curve = curve.name(), "signature component out of range");
        return Err(VerifyError::Malformed);
    }

    if let Err(reason) = validation::validate_public_key(public_key, curve) {
        tracing::debug!(curve = curve.name(), %reason, "invalid public key");
        return Err(VerifyError::Malformed);
    }

    let e = truncate_digest(digest_hex, curve).map_err(|_| {
        tracing::debug!(curve = curve.name(), "malformed message digest");
        VerifyError::Malformed
    })?;

    let n = curve.scalars();
    let w = n.invert(s).ok_or(VerifyError::Malformed)?;
    let u1 = n.mul(&e, &w);
    let u2 = n.mul(r, &w);

    let point = arithmetic::add(
        &curve.mul_generator(&u1),
        &arithmetic::scalar_multiply(&u2, public_key, curve),
        curve,
    );

    match point.x() {
        Some(x) if &n.reduce(x) == r => Ok(()),
        _ => {
            tracing::debug!(curve = curve.name(), "signature mismatch");
            Err(VerifyError::Mismatch)
        }
    }
}
