#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Security notes
//!
//! All arithmetic in this crate is **variable time**: the big integer
//! operations and the double-and-add ladder branch on secret data. Do not
//! use it where an attacker can observe timing of private key operations.
//!
//! Random scalars (private keys, ECDSA nonces) are always drawn from a
//! caller-supplied [`CryptoRng`] so that each session owns its own stream.
//! With the `getrandom` feature enabled, convenience constructors backed by
//! [`rand::rngs::OsRng`] are also available.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod curve;
pub mod encoding;
pub mod error;
pub mod keys;
pub mod sec1;
pub mod validation;

#[cfg(feature = "ecdh")]
pub mod ecdh;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::Point,
    curve::{Curve, CurveId},
    error::{Error, InvalidKeyReason, Result},
    keys::{KeyPair, SecretScalar},
};
pub use num_bigint::{self, BigUint};
pub use rand::{self, CryptoRng, RngCore};

