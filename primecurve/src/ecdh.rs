//! Elliptic Curve Diffie-Hellman (ECDH) key agreement.
//!
//! ## Example
//!
//! ```
//! use primecurve::{ecdh::Ecdh, Curve, CurveId};
//! use rand::rngs::OsRng;
//!
//! let curve = Curve::lookup(CurveId::NistP256);
//! let mut alice = Ecdh::new(&curve, &mut OsRng);
//! let mut bob = Ecdh::new(&curve, &mut OsRng);
//!
//! alice.set_peer_public_key(bob.public_key().clone()).unwrap();
//! bob.set_peer_public_key(alice.public_key().clone()).unwrap();
//!
//! assert_eq!(alice.shared_secret().unwrap(), bob.shared_secret().unwrap());
//! ```

use crate::{
    arithmetic, encoding, validation, Curve, Error, InvalidKeyReason, KeyPair, Point, Result,
};
use alloc::string::String;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// One party's side of an ECDH exchange.
///
/// Owns its key pair for its whole lifetime; the peer's public key can be
/// stored once validated, or supplied per call.
#[derive(Clone, Debug)]
pub struct Ecdh {
    key_pair: KeyPair,
    peer_public_key: Option<Point>,
}

impl Ecdh {
    /// Start a session with a freshly generated key pair.
    pub fn new(curve: &Curve, rng: &mut (impl CryptoRng + RngCore)) -> Self {
        Self::from_key_pair(KeyPair::generate(curve, rng))
    }

    /// Start a session with an imported private scalar.
    pub fn from_private_scalar(d: BigUint, curve: &Curve) -> Result<Self> {
        KeyPair::from_private_scalar(d, curve).map(Self::from_key_pair)
    }

    /// Start a session with an existing key pair.
    pub fn from_key_pair(key_pair: KeyPair) -> Self {
        Self {
            key_pair,
            peer_public_key: None,
        }
    }

    /// Curve of this session.
    pub fn curve(&self) -> &Curve {
        self.key_pair.curve()
    }

    /// Our key pair.
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Our public key, to be sent to the peer.
    pub fn public_key(&self) -> &Point {
        self.key_pair.public_key()
    }

    /// The stored peer public key, if any.
    pub fn peer_public_key(&self) -> Option<&Point> {
        self.peer_public_key.as_ref()
    }

    /// Validate and store the peer's public key.
    ///
    /// On failure the previously stored key (if any) is left untouched.
    pub fn set_peer_public_key(&mut self, peer: Point) -> core::result::Result<(), InvalidKeyReason> {
        self.check_peer(&peer)?;
        self.peer_public_key = Some(peer);
        Ok(())
    }

    /// Shared secret with the stored peer public key.
    ///
    /// Fails with [`Error::InvalidArgument`] if no peer key has been set.
    pub fn shared_secret(&self) -> Result<String> {
        let peer = self
            .peer_public_key
            .as_ref()
            .ok_or(Error::InvalidArgument("no peer public key set"))?;

        self.derive(peer)
    }

    /// Shared secret with `peer`, validated exactly as by
    /// [`Ecdh::set_peer_public_key`] but without storing it.
    pub fn shared_secret_with(&self, peer: &Point) -> Result<String> {
        self.check_peer(peer)?;
        self.derive(peer)
    }

    fn check_peer(&self, peer: &Point) -> core::result::Result<(), InvalidKeyReason> {
        validation::validate_public_key(peer, self.curve()).map_err(|reason| {
            tracing::debug!(curve = self.curve().name(), %reason, "rejected peer public key");
            reason
        })
    }

    /// `x`-coordinate of `d·peer`, as lowercase hexadecimal.
    fn derive(&self, peer: &Point) -> Result<String> {
        let curve = self.curve();
        let shared = arithmetic::scalar_multiply(self.key_pair.secret().as_biguint(), peer, curve);

        let x = shared.x().ok_or(Error::DegenerateSharedSecret)?;
        Ok(encoding::to_hex(&curve.field().reduce(x)))
    }
}

/// Compute the shared secret between `d` and `peer` in one shot.
pub fn shared_secret(d: &BigUint, peer: &Point, curve: &Curve) -> Result<String> {
    Ecdh::from_private_scalar(d.clone(), curve)?.shared_secret_with(peer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveId;

    #[test]
    fn identity_peer_gives_degenerate_secret() {
        let curve = Curve::lookup(CurveId::NistP256);
        let session = Ecdh::from_private_scalar(BigUint::from(7u8), &curve).unwrap();
        assert_eq!(session.derive(&Point::Identity), Err(Error::DegenerateSharedSecret));
    }

    #[test]
    fn small_order_peer_gives_degenerate_secret() {
        // y² = x³ + x + 6 over 𝔽₂₉, cofactor 2; (16, 0) has order 2
        let curve = Curve::new(
            "cofactor-2",
            BigUint::from(29u8),
            BigUint::from(1u8),
            BigUint::from(6u8),
            Point::new(BigUint::from(0u8), BigUint::from(8u8)),
            BigUint::from(19u8),
            BigUint::from(2u8),
        )
        .unwrap();
        let peer = Point::new(BigUint::from(16u8), BigUint::from(0u8));

        let session = Ecdh::from_private_scalar(BigUint::from(4u8), &curve).unwrap();
        assert_eq!(session.derive(&peer), Err(Error::DegenerateSharedSecret));
        assert_eq!(
            session.shared_secret_with(&peer),
            Err(Error::InvalidKey(InvalidKeyReason::WrongOrder))
        );
    }
}
