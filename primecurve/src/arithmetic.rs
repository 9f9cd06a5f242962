//! Group law on short Weierstrass curves in affine coordinates.
//!
//! Points are assumed to lie on the given curve with reduced coordinates;
//! the results for other inputs are unspecified (but never a panic).
//! Every branch of the group law is explicit, including the ones that
//! produce the point at infinity, so no operation ever divides by zero.

pub(crate) mod field;
mod point;

pub use self::{field::Modulus, point::Point};

use crate::Curve;
use num_bigint::BigUint;
use num_traits::Zero;

/// Returns `p + q`.
pub fn add(p: &Point, q: &Point, curve: &Curve) -> Point {
    let (px, py, qx, qy) = match (p, q) {
        (Point::Identity, _) => return q.clone(),
        (_, Point::Identity) => return p.clone(),
        (Point::Affine { x: px, y: py }, Point::Affine { x: qx, y: qy }) => (px, py, qx, qy),
    };

    let f = curve.field();

    if f.reduce(px) == f.reduce(qx) {
        // Same x: either q = p, or q = -p and the sum is 𝒪
        return if f.reduce(py) == f.reduce(qy) {
            double(p, curve)
        } else {
            Point::Identity
        };
    }

    // Nonzero denominator modulo a prime is always invertible
    let denominator = match f.invert(&f.sub(px, qx)) {
        Some(inv) => inv,
        None => return Point::Identity,
    };

    let s = f.mul(&f.sub(py, qy), &denominator);
    let x = f.sub(&f.sub(&f.square(&s), px), qx);
    let y = f.sub(&f.mul(&s, &f.sub(px, &x)), py);

    Point::new(x, y)
}

/// Returns `p + p`.
pub fn double(p: &Point, curve: &Curve) -> Point {
    let (px, py) = match p.coordinates() {
        Some(coords) => coords,
        None => return Point::Identity,
    };

    let f = curve.field();

    // Points with y = 0 have order two
    if f.reduce(py).is_zero() {
        return Point::Identity;
    }

    let denominator = match f.invert(&f.add(py, py)) {
        Some(inv) => inv,
        None => return Point::Identity,
    };

    let numerator = f.add(&f.mul(&BigUint::from(3u8), &f.square(px)), curve.a());
    let s = f.mul(&numerator, &denominator);
    let x = f.sub(&f.square(&s), &f.add(px, px));
    let y = f.sub(&f.mul(&s, &f.sub(px, &x)), py);

    Point::new(x, y)
}

/// Returns `-p`.
pub fn negate(p: &Point, curve: &Curve) -> Point {
    match p {
        Point::Identity => Point::Identity,
        Point::Affine { x, y } => Point::new(curve.field().reduce(x), curve.field().neg(y)),
    }
}

/// Returns `p - q`.
pub fn sub(p: &Point, q: &Point, curve: &Curve) -> Point {
    add(p, &negate(q, curve), curve)
}

/// Returns `k·p` by left-to-right double-and-add.
///
/// `k` is an ordinary integer: it is not reduced modulo the group order and
/// every bit below the most significant one is visited. The most
/// significant bit is consumed by starting the accumulator at `p`.
///
/// **Not constant time**: both the number of iterations and the additions
/// performed depend on `k`.
pub fn scalar_multiply(k: &BigUint, p: &Point, curve: &Curve) -> Point {
    if k.is_zero() || p.is_identity() {
        return Point::Identity;
    }

    let mut acc = p.clone();

    for i in (0..k.bits() - 1).rev() {
        acc = double(&acc, curve);

        if k.bit(i) {
            acc = add(&acc, p, curve);
        }
    }

    acc
}
