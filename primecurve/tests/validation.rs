//! Public key and domain parameter validation tests.

use primecurve::{
    validation::{is_on_curve, validate_key_pair, validate_public_key},
    BigUint, Curve, CurveId, Error, InvalidKeyReason, KeyPair, Point,
};

fn point(x: u32, y: u32) -> Point {
    Point::new(BigUint::from(x), BigUint::from(y))
}

/// `y² = x³ + x + 6` over `𝔽₂₉`: 38 points, `G = (0, 8)` of order 19,
/// cofactor 2.
fn cofactor_curve() -> Curve {
    Curve::new(
        "cofactor-2",
        BigUint::from(29u8),
        BigUint::from(1u8),
        BigUint::from(6u8),
        point(0, 8),
        BigUint::from(19u8),
        BigUint::from(2u8),
    )
    .unwrap()
}

#[test]
fn accepts_generator_and_multiples() {
    for id in CurveId::ALL {
        let curve = Curve::lookup(id);
        assert_eq!(validate_public_key(curve.generator(), &curve), Ok(()));
        let q = curve.mul_generator(&BigUint::from(7u8));
        assert_eq!(validate_public_key(&q, &curve), Ok(()));
    }
}

#[test]
fn rejects_identity() {
    let curve = Curve::lookup(CurveId::NistP256);
    assert_eq!(
        validate_public_key(&Point::Identity, &curve),
        Err(InvalidKeyReason::Identity)
    );
}

#[test]
fn rejects_off_curve_point() {
    let curve = Curve::lookup(CurveId::Test17);
    let p = point(5, 2);
    assert!(!is_on_curve(&p, &curve));
    assert_eq!(validate_public_key(&p, &curve), Err(InvalidKeyReason::NotOnCurve));

    let curve = Curve::lookup(CurveId::NistP256);
    let (x, y) = curve.generator().coordinates().unwrap();
    let p = Point::new(x.clone(), y + 1u8);
    assert_eq!(validate_public_key(&p, &curve), Err(InvalidKeyReason::NotOnCurve));
}

#[test]
fn rejects_unreduced_coordinates() {
    // (5 + 17, 1) satisfies the curve equation modulo 17
    let curve = Curve::lookup(CurveId::Test17);
    let p = point(22, 1);
    assert!(is_on_curve(&p, &curve));
    assert_eq!(
        validate_public_key(&p, &curve),
        Err(InvalidKeyReason::CoordinateOutOfRange)
    );
}

#[test]
fn rejects_points_outside_subgroup() {
    let curve = cofactor_curve();
    assert!(curve.has_cofactor());
    assert_eq!(validate_public_key(curve.generator(), &curve), Ok(()));

    // order 2
    let p = point(16, 0);
    assert!(is_on_curve(&p, &curve));
    assert_eq!(validate_public_key(&p, &curve), Err(InvalidKeyReason::WrongOrder));

    // order 38, a generator of the whole group
    let p = point(2, 4);
    assert!(is_on_curve(&p, &curve));
    assert_eq!(validate_public_key(&p, &curve), Err(InvalidKeyReason::WrongOrder));
}

#[test]
fn key_pairs_are_consistent() {
    let curve = Curve::lookup(CurveId::Test17);
    for d in 1u8..19 {
        let key_pair = KeyPair::from_private_scalar(BigUint::from(d), &curve).unwrap();
        assert!(validate_key_pair(&key_pair, &curve));
    }
}

#[test]
fn private_scalar_range() {
    let curve = Curve::lookup(CurveId::Test17);
    for d in [0u8, 19, 20] {
        assert!(matches!(
            KeyPair::from_private_scalar(BigUint::from(d), &curve),
            Err(Error::InvalidArgument(_))
        ));
    }
}

#[test]
fn custom_curve_parameters() {
    let g = point(0, 8);
    let new = |p: u32, a: u32, b: u32, g: Point, n: u32, h: u32| {
        Curve::new(
            "custom",
            BigUint::from(p),
            BigUint::from(a),
            BigUint::from(b),
            g,
            BigUint::from(n),
            BigUint::from(h),
        )
    };

    assert!(new(29, 1, 6, g.clone(), 19, 2).is_ok());
    // composite field modulus
    assert!(new(27, 1, 6, g.clone(), 19, 2).is_err());
    // composite order
    assert!(new(29, 1, 6, g.clone(), 38, 1).is_err());
    // zero cofactor
    assert!(new(29, 1, 6, g.clone(), 19, 0).is_err());
    // singular: 4·0³ + 27·0² = 0
    assert!(new(29, 0, 0, point(0, 0), 19, 2).is_err());
    // generator off the curve
    assert!(new(29, 1, 6, point(0, 9), 19, 2).is_err());
    // generator at infinity
    assert!(new(29, 1, 6, Point::Identity, 19, 2).is_err());
    // wrong order: (2, 4) has order 38
    assert!(new(29, 1, 6, point(2, 4), 19, 2).is_err());
}

#[test]
fn curve_names() {
    assert_eq!(Curve::by_name("secp256r1").unwrap().id(), Some(CurveId::NistP256));
    assert_eq!(Curve::by_name(" P-384 ").unwrap().id(), Some(CurveId::NistP384));
    assert_eq!(Curve::by_name("K256").unwrap().id(), Some(CurveId::Secp256k1));
    assert_eq!(Curve::by_name("curve25519"), Err(Error::UnknownCurve));
    assert_eq!("test17".parse::<CurveId>(), Ok(CurveId::Test17));
}
