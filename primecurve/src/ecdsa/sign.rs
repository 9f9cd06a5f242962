//! ECDSA signing.

use super::{HashAlgorithm, MessageDigest, Signature, Verifier};
use crate::{Curve, KeyPair, Result};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// ECDSA signing key: a key pair bound to a hash function.
#[derive(Clone, Debug)]
pub struct Signer<H = HashAlgorithm> {
    key_pair: KeyPair,
    hash: H,
}

impl<H: MessageDigest> Signer<H> {
    /// Bind `key_pair` to `hash`.
    pub fn new(key_pair: KeyPair, hash: H) -> Self {
        Self { key_pair, hash }
    }

    /// The key pair used to sign.
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// The hash function applied to messages.
    pub fn hash(&self) -> &H {
        &self.hash
    }

    /// Curve of the underlying key pair.
    pub fn curve(&self) -> &Curve {
        self.key_pair.curve()
    }

    /// Sign `message` with nonces drawn from `rng`.
    ///
    /// Fails only if the hash function returns something other than
    /// hexadecimal.
    pub fn sign_with_rng(&self, rng: &mut (impl CryptoRng + RngCore), message: &[u8]) -> Result<Signature> {
        super::sign_message(message, &self.hash, self.curve(), &self.key_pair, rng)
    }

    /// Sign `message` with nonces drawn from the operating system's random
    /// number generator.
    #[cfg(feature = "getrandom")]
    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        self.sign_with_rng(&mut rand::rngs::OsRng, message)
    }

    /// Sign a prehashed message with nonces drawn from `rng`.
    ///
    /// Fails if `digest_hex` is not hexadecimal.
    pub fn sign_prehash_with_rng(
        &self,
        rng: &mut (impl CryptoRng + RngCore),
        digest_hex: &str,
    ) -> Result<Signature> {
        super::sign_prehash(digest_hex, self.curve(), &self.key_pair, rng)
    }

    /// Sign `message` with the caller-supplied nonce `k`.
    ///
    /// **For test vectors only**; see
    /// [`sign_prehash_with_nonce`](super::sign_prehash_with_nonce).
    pub fn sign_with_nonce(&self, message: &[u8], k: &BigUint) -> Result<Signature> {
        super::sign_message_with_nonce(message, k, &self.hash, self.curve(), &self.key_pair)
    }

    /// Verifier for signatures made by this signer.
    pub fn verifier(&self) -> Verifier<H>
    where
        H: Clone,
    {
        Verifier::from_trusted_key(self.curve().clone(), self.key_pair.public_key().clone(), self.hash.clone())
    }
}

impl<H> From<Signer<H>> for KeyPair {
    fn from(signer: Signer<H>) -> KeyPair {
        signer.key_pair
    }
}
