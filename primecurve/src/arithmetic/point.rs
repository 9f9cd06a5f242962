//! Curve points in affine coordinates.

use crate::{encoding, Result};
use alloc::string::String;
use core::fmt;
use num_bigint::BigUint;

/// Point on a short Weierstrass curve in affine coordinates, or the point
/// at infinity.
///
/// A `Point` does not know which curve it belongs to and constructing one
/// does not check the curve equation. Use
/// [`validate_public_key`](crate::validation::validate_public_key) before
/// trusting points from outside.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    Identity,

    /// Finite point `(x, y)`.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Finite point with the given coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Finite point from textual coordinates (see [`encoding`]).
    pub fn from_hex(x: &str, y: &str) -> Result<Self> {
        Ok(Point::new(
            encoding::parse_scalar(x)?,
            encoding::parse_scalar(y)?,
        ))
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Coordinates as lowercase hexadecimal strings.
    pub fn to_hex(&self) -> Option<(String, String)> {
        self.coordinates()
            .map(|(x, y)| (encoding::to_hex(x), encoding::to_hex(y)))
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::Identity
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("𝒪"),
            Point::Affine { x, y } => write!(f, "({:x}, {:x})", x, y),
        }
    }
}
