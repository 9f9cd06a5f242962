//! SEC1 `Elliptic-Curve-Point-to-Octet-String` encoding.
//!
//! Described in SEC 1: Elliptic Curve Cryptography (Version 2.0) section
//! 2.3.3 (page 10).
//!
//! <http://www.secg.org/sec1-v2.pdf>

use crate::{validation, Curve, Error, InvalidKeyReason, Point, Result};
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

const TAG_IDENTITY: u8 = 0x00;
const TAG_COMPRESSED_EVEN_Y: u8 = 0x02;
const TAG_COMPRESSED_ODD_Y: u8 = 0x03;
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Serialize `point`.
///
/// The identity encodes as the single byte `0x00`. Finite points encode
/// with fixed-width big-endian coordinates, compressed (`02`/`03 ‖ x`) or
/// uncompressed (`04 ‖ x ‖ y`).
pub fn encode_point(point: &Point, curve: &Curve, compress: bool) -> Vec<u8> {
    let (x, y) = match point.coordinates() {
        Some(coords) => coords,
        None => return alloc::vec![TAG_IDENTITY],
    };

    let f = curve.field();
    let (x, y) = (f.reduce(x), f.reduce(y));

    let len = curve.field_bytes();
    let mut out = Vec::with_capacity(1 + 2 * len);

    if compress {
        out.push(if y.bit(0) {
            TAG_COMPRESSED_ODD_Y
        } else {
            TAG_COMPRESSED_EVEN_Y
        });
        out.extend_from_slice(&to_fixed_bytes(&x, len));
    } else {
        out.push(TAG_UNCOMPRESSED);
        out.extend_from_slice(&to_fixed_bytes(&x, len));
        out.extend_from_slice(&to_fixed_bytes(&y, len));
    }

    out
}

/// Parse a SEC1-encoded point, decompressing if necessary.
///
/// Checks coordinate ranges and the curve equation, but not subgroup
/// membership: run [`validation::validate_public_key`] on the result
/// before using it as a peer key.
pub fn decode_point(bytes: &[u8], curve: &Curve) -> Result<Point> {
    let len = curve.field_bytes();
    let (&tag, body) = bytes
        .split_first()
        .ok_or(Error::InvalidArgument("empty SEC1 encoding"))?;

    let point = match (tag, body.len()) {
        (TAG_IDENTITY, 0) => return Ok(Point::Identity),
        (TAG_UNCOMPRESSED, l) if l == 2 * len => {
            let x = BigUint::from_bytes_be(&body[..len]);
            let y = BigUint::from_bytes_be(&body[len..]);
            check_coordinates(&x, &y, curve)?;
            Point::new(x, y)
        }
        (TAG_COMPRESSED_EVEN_Y | TAG_COMPRESSED_ODD_Y, l) if l == len => {
            let x = BigUint::from_bytes_be(body);
            decompress(x, tag == TAG_COMPRESSED_ODD_Y, curve)?
        }
        _ => return Err(Error::InvalidArgument("malformed SEC1 encoding")),
    };

    if !validation::is_on_curve(&point, curve) {
        return Err(InvalidKeyReason::NotOnCurve.into());
    }

    Ok(point)
}

/// Recover `y` from `x` and the parity of `y`.
fn decompress(x: BigUint, y_is_odd: bool, curve: &Curve) -> Result<Point> {
    let f = curve.field();

    if !f.contains(&x) {
        return Err(InvalidKeyReason::CoordinateOutOfRange.into());
    }

    let alpha = f.add(&f.add(&f.mul(&f.square(&x), &x), &f.mul(curve.a(), &x)), curve.b());
    let beta = f.sqrt(&alpha).ok_or(InvalidKeyReason::NotOnCurve)?;

    // y = 0 has no odd representative
    if y_is_odd && beta.is_zero() {
        return Err(Error::InvalidArgument("malformed SEC1 encoding"));
    }

    let y = if beta.bit(0) == y_is_odd {
        beta
    } else {
        f.neg(&beta)
    };

    Ok(Point::new(x, y))
}

fn check_coordinates(x: &BigUint, y: &BigUint, curve: &Curve) -> Result<()> {
    if curve.field().contains(x) && curve.field().contains(y) {
        Ok(())
    } else {
        Err(InvalidKeyReason::CoordinateOutOfRange.into())
    }
}

/// Big-endian encoding of `value`, left padded with zeros to `len` bytes.
pub(crate) fn to_fixed_bytes(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= len, "value wider than {} bytes", len);
    let mut out = alloc::vec![0u8; len.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}
