//! Error types.

use core::fmt::{self, Display};

/// Result type with the `primecurve` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Elliptic curve errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The curve identifier does not name any supported curve.
    UnknownCurve,

    /// A caller-supplied value failed a precondition.
    ///
    /// The message names the precondition, never the offending value.
    InvalidArgument(&'static str),

    /// A public key was rejected by domain validation.
    InvalidKey(InvalidKeyReason),

    /// Key agreement produced the point at infinity.
    DegenerateSharedSecret,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCurve => f.write_str("unknown curve"),
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::InvalidKey(reason) => write!(f, "invalid public key: {}", reason),
            Error::DegenerateSharedSecret => f.write_str("shared secret is the identity point"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<InvalidKeyReason> for Error {
    fn from(reason: InvalidKeyReason) -> Error {
        Error::InvalidKey(reason)
    }
}

/// Reasons a public key fails domain validation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidKeyReason {
    /// The point at infinity is never a valid public key.
    Identity,

    /// A coordinate is not reduced modulo the field prime.
    CoordinateOutOfRange,

    /// The coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// The point is not in the prime-order subgroup generated by `G`.
    WrongOrder,
}

impl Display for InvalidKeyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidKeyReason::Identity => "point at infinity",
            InvalidKeyReason::CoordinateOutOfRange => "coordinate out of range",
            InvalidKeyReason::NotOnCurve => "point is not on the curve",
            InvalidKeyReason::WrongOrder => "point is not in the prime-order subgroup",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidKeyReason {}
