#![no_main]
// Targets: every built-in curve
use libfuzzer_sys::fuzz_target;
use primecurve::{
    arithmetic::{add, double, negate, scalar_multiply, sub},
    sec1::{decode_point, encode_point},
    validation::{is_on_curve, validate_public_key},
    BigUint, Curve, CurveId, Point,
};
use rand_chacha::{
    ChaChaRng,
    rand_core::{RngCore, SeedableRng},
};

fn test_group(p1: &Point, p2: &Point, s: &BigUint, curve: &Curve) {
    // Test point arithmetic
    let sum = add(p1, p2, curve);
    let scalar_mul = scalar_multiply(s, p1, curve);
    assert!(is_on_curve(&sum, curve));
    assert!(is_on_curve(&scalar_mul, curve));

    // Test that addition and doubling are consistent
    assert_eq!(double(p1, curve), add(p1, p1, curve));
    assert_eq!(sub(&sum, p2, curve), *p1);

    // Test that negation works correctly
    assert_eq!(add(&sum, &negate(&sum, curve), curve), Point::Identity);

    // Test scalar multiplication distributive property
    assert_eq!(
        add(&scalar_mul, &scalar_mul, curve),
        scalar_multiply(&(s + s), p1, curve)
    );
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 160 {
        return;
    }

    let seed: [u8; 32] = match data[0..32].try_into() {
        Ok(seed) => seed,
        Err(_) => return,
    };
    let mut rng = ChaChaRng::from_seed(seed);

    for id in CurveId::ALL {
        let curve = Curve::lookup(id);
        let len = curve.field_bytes();

        // Attacker-controlled encodings must never panic, and whatever
        // decodes must be on the curve
        let encoded = &data[32..32 + usize::from(data[3] & 0x7f).min(data.len() - 32)];
        let p1 = match decode_point(encoded, &curve) {
            Ok(p) => {
                assert!(is_on_curve(&p, &curve));
                assert_eq!(decode_point(&encode_point(&p, &curve, true), &curve), Ok(p.clone()));
                p
            }
            Err(_) => curve.mul_generator(&BigUint::from(rng.next_u64())),
        };

        let p2 = curve.mul_generator(&BigUint::from_bytes_be(&data[64..64 + len.min(96)]));
        if validate_public_key(&p2, &curve).is_ok() {
            assert!(!p2.is_identity());
        }

        let s = BigUint::from_bytes_be(&data[128..160]);
        test_group(&p1, &p2, &s, &curve);
    }
});
