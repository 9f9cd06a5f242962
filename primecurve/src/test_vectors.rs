//! Test vectors.
//!
//! All values are hexadecimal strings, parsed with [`crate::encoding`]
//! at the point of use.

pub mod ecdh;
pub mod ecdsa;
pub mod group;
