//! Message digests consumed by ECDSA.
//!
//! Signing and verification only see a digest as a hexadecimal string, so
//! any hash function can be plugged in through [`MessageDigest`].

use crate::Error;
use alloc::string::String;
use core::{fmt, str::FromStr};
use sha2::Digest;

/// Hash function producing a hexadecimal digest.
pub trait MessageDigest {
    /// Hash `message`, returning the digest as hexadecimal.
    fn digest_hex(&self, message: &[u8]) -> String;
}

impl<F> MessageDigest for F
where
    F: Fn(&[u8]) -> String,
{
    fn digest_hex(&self, message: &[u8]) -> String {
        self(message)
    }
}

/// The SHA-1 and SHA-2 hash functions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum HashAlgorithm {
    /// SHA-1. Broken for collision resistance; for legacy verification.
    #[cfg(feature = "sha1")]
    Sha1,

    /// SHA-224.
    Sha224,

    /// SHA-256.
    Sha256,

    /// SHA-384.
    Sha384,

    /// SHA-512.
    Sha512,

    /// SHA-512/224.
    Sha512_224,

    /// SHA-512/256.
    Sha512_256,
}

impl HashAlgorithm {
    /// Name as written in FIPS 180-4.
    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "sha1")]
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha512_224 => "SHA-512/224",
            HashAlgorithm::Sha512_256 => "SHA-512/256",
        }
    }

    /// Digest size in bits.
    pub fn output_bits(self) -> usize {
        match self {
            #[cfg(feature = "sha1")]
            HashAlgorithm::Sha1 => 160,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 => 224,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512_256 => 256,
            HashAlgorithm::Sha384 => 384,
            HashAlgorithm::Sha512 => 512,
        }
    }
}

impl MessageDigest for HashAlgorithm {
    fn digest_hex(&self, message: &[u8]) -> String {
        match self {
            #[cfg(feature = "sha1")]
            HashAlgorithm::Sha1 => hex::encode(sha1::Sha1::digest(message)),
            HashAlgorithm::Sha224 => hex::encode(sha2::Sha224::digest(message)),
            HashAlgorithm::Sha256 => hex::encode(sha2::Sha256::digest(message)),
            HashAlgorithm::Sha384 => hex::encode(sha2::Sha384::digest(message)),
            HashAlgorithm::Sha512 => hex::encode(sha2::Sha512::digest(message)),
            HashAlgorithm::Sha512_224 => hex::encode(sha2::Sha512_224::digest(message)),
            HashAlgorithm::Sha512_256 => hex::encode(sha2::Sha512_256::digest(message)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Accepts `SHA-256`, `SHA256`, `sha-256`, `sha256` and so on.
    fn from_str(name: &str) -> Result<Self, Error> {
        let all = [
            #[cfg(feature = "sha1")]
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha224,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
            HashAlgorithm::Sha512_224,
            HashAlgorithm::Sha512_256,
        ];

        let wanted = name.trim();
        all.iter()
            .copied()
            .find(|alg| {
                let canonical = alg.name();
                canonical.eq_ignore_ascii_case(wanted)
                    || eq_ignoring_dash(canonical, wanted)
            })
            .ok_or(Error::InvalidArgument("unsupported hash algorithm"))
    }
}

/// Case-insensitive comparison that skips the `-` after `SHA`.
fn eq_ignoring_dash(canonical: &str, candidate: &str) -> bool {
    let mut a = canonical.bytes().filter(|&b| b != b'-');
    let mut b = candidate.bytes().filter(|&b| b != b'-');

    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => continue,
            _ => return false,
        }
    }
}
