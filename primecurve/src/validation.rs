//! Domain validation of points, scalars and key pairs.

use crate::{
    arithmetic::{self, Point},
    Curve, InvalidKeyReason, KeyPair,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// Does `point` satisfy `y² ≡ x³ + ax + b (mod p)`?
///
/// The point at infinity is on every curve.
pub fn is_on_curve(point: &Point, curve: &Curve) -> bool {
    let (x, y) = match point.coordinates() {
        Some(coords) => coords,
        None => return true,
    };

    let f = curve.field();
    let lhs = f.square(y);
    let rhs = f.add(
        &f.add(&f.mul(&f.square(x), x), &f.mul(curve.a(), x)),
        curve.b(),
    );

    lhs == rhs
}

/// Is `point` the point at infinity?
pub fn is_identity(point: &Point) -> bool {
    point.is_identity()
}

/// Is `k` a valid nonzero scalar, i.e. `1 ≤ k ≤ n - 1`?
pub fn is_in_range(k: &BigUint, curve: &Curve) -> bool {
    !k.is_zero() && k < curve.order()
}

/// Full public key validation.
///
/// Rejects the point at infinity, coordinates outside `[0, p - 1]`, points
/// not on the curve, and, on curves with a cofactor, points outside the
/// subgroup of order `n`.
pub fn validate_public_key(point: &Point, curve: &Curve) -> Result<(), InvalidKeyReason> {
    let (x, y) = point.coordinates().ok_or(InvalidKeyReason::Identity)?;

    if !curve.field().contains(x) || !curve.field().contains(y) {
        return Err(InvalidKeyReason::CoordinateOutOfRange);
    }

    if !is_on_curve(point, curve) {
        return Err(InvalidKeyReason::NotOnCurve);
    }

    // With h = 1 every finite point on the curve already has order n
    if curve.has_cofactor() && !arithmetic::scalar_multiply(curve.order(), point, curve).is_identity()
    {
        return Err(InvalidKeyReason::WrongOrder);
    }

    Ok(())
}

/// Is `key_pair` consistent: private scalar in range and public point
/// equal to `d·G`?
pub fn validate_key_pair(key_pair: &KeyPair, curve: &Curve) -> bool {
    let d = key_pair.secret().as_biguint();
    is_in_range(d, curve) && &curve.mul_generator(d) == key_pair.public_key()
}
