//! ECDSA signatures.

use crate::{encoding, sec1, validation, Curve, Error, Result};
use alloc::{string::String, vec::Vec};
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;

/// ECDSA signature `(r, s)`.
///
/// Signatures returned by the signing functions always have both
/// components in `[1, n - 1]`. [`generate_signature`](super::generate_signature)
/// may return a degenerate signature with a zero component; see
/// [`Signature::is_degenerate`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Assemble a signature, checking that `r` and `s` are in `[1, n - 1]`.
    pub fn from_scalars(r: BigUint, s: BigUint, curve: &Curve) -> Result<Self> {
        if validation::is_in_range(&r, curve) && validation::is_in_range(&s, curve) {
            Ok(Self { r, s })
        } else {
            Err(Error::InvalidArgument("signature component out of range [1, n - 1]"))
        }
    }

    /// Parse `r` and `s` from hexadecimal or decimal text (see
    /// [`encoding`]), checking their range.
    pub fn from_hex(r: &str, s: &str, curve: &Curve) -> Result<Self> {
        Self::from_scalars(encoding::parse_scalar(r)?, encoding::parse_scalar(s)?, curve)
    }

    /// Parse the fixed-width `r ‖ s` encoding.
    pub fn from_bytes(bytes: &[u8], curve: &Curve) -> Result<Self> {
        let len = curve.scalar_bytes();
        if bytes.len() != 2 * len {
            return Err(Error::InvalidArgument("signature has wrong length"));
        }

        let (r, s) = bytes.split_at(len);
        Self::from_scalars(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s), curve)
    }

    /// Build a signature without range checks.
    ///
    /// Verification still rejects out-of-range components.
    pub fn from_scalars_unchecked(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Is either component zero?
    pub fn is_degenerate(&self) -> bool {
        self.r.is_zero() || self.s.is_zero()
    }

    /// `r` and `s` as lowercase hexadecimal.
    pub fn to_hex(&self) -> (String, String) {
        (encoding::to_hex(&self.r), encoding::to_hex(&self.s))
    }

    /// Fixed-width big-endian `r ‖ s`, each component padded to the size
    /// of the group order. Components of an unchecked signature are reduced
    /// modulo `n` first.
    pub fn to_bytes(&self, curve: &Curve) -> Vec<u8> {
        let n = curve.scalars();
        let len = curve.scalar_bytes();
        let mut out = sec1::to_fixed_bytes(&n.reduce(&self.r), len);
        out.extend_from_slice(&sec1::to_fixed_bytes(&n.reduce(&self.s), len));
        out
    }

    /// Is `s ≤ ⌊n / 2⌋`?
    pub fn is_low_s(&self, curve: &Curve) -> bool {
        self.s <= curve.order() >> 1u32
    }

    /// Normalize into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1], replacing `s` with `n - s`
    /// when `s > n / 2`. Both forms verify.
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self, curve: &Curve) -> Self {
        if self.is_low_s(curve) {
            self.clone()
        } else {
            Self {
                r: self.r.clone(),
                s: curve.scalars().neg(&self.s),
            }
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:x}, {:x})", self.r, self.s)
    }
}
