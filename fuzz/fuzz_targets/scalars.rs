#![no_main]
use libfuzzer_sys::fuzz_target;
use primecurve::{
    BigUint, Curve, CurveId, KeyPair,
    arithmetic::Modulus,
    ecdsa::{HashAlgorithm, sign_message, verify_signature},
    encoding::{parse_hex, parse_scalar},
};
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

fn test_field(m: &Modulus, fe1: &BigUint, fe2: &BigUint, fe3: &BigUint) {
    let (fe1, fe2, fe3) = (m.reduce(fe1), m.reduce(fe2), m.reduce(fe3));
    let zero = BigUint::default();

    // Associativity
    assert_eq!(m.add(&fe1, &m.add(&fe2, &fe3)), m.add(&m.add(&fe1, &fe2), &fe3));
    assert_eq!(m.mul(&fe1, &m.mul(&fe2, &fe3)), m.mul(&m.mul(&fe1, &fe2), &fe3));

    // Commutativity
    assert_eq!(m.add(&fe1, &fe2), m.add(&fe2, &fe1));
    assert_eq!(m.mul(&fe1, &fe2), m.mul(&fe2, &fe1));

    // Identity
    assert_eq!(m.sub(&fe1, &fe1), zero);
    assert_eq!(m.add(&fe1, &m.neg(&fe1)), zero);

    // Distributivity
    assert_eq!(
        m.mul(&fe1, &m.add(&fe2, &fe3)),
        m.add(&m.mul(&fe1, &fe2), &m.mul(&fe1, &fe3))
    );

    // Inverse and square root
    match m.invert(&fe1) {
        Some(inv) => assert_eq!(m.mul(&fe1, &inv), BigUint::from(1u8)),
        None => assert_eq!(fe1, zero),
    }
    let fe1_sq = m.square(&fe1);
    match m.sqrt(&fe1_sq) {
        Some(root) => assert_eq!(m.square(&root), fe1_sq),
        None => panic!("square has no root"),
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    // Text parsing must never panic
    if let Ok(text) = core::str::from_utf8(&data[96..]) {
        let _ = parse_scalar(text);
        let _ = parse_hex(text);
    }

    let fe1 = BigUint::from_bytes_be(&data[0..32]);
    let fe2 = BigUint::from_bytes_be(&data[32..64]);
    let fe3 = BigUint::from_bytes_be(&data[64..96]);

    for id in CurveId::ALL {
        let curve = Curve::lookup(id);
        test_field(curve.field(), &fe1, &fe2, &fe3);
        test_field(curve.scalars(), &fe1, &fe2, &fe3);
    }

    // Sign and verify with a key derived from the input
    let curve = Curve::lookup(CurveId::NistP256);
    let d = BigUint::from_bytes_be(&data[0..32]) % curve.order();
    if let Ok(key_pair) = KeyPair::from_private_scalar(d, &curve) {
        let mut rng = ChaChaRng::from_seed([data[40]; 32]);
        let hash = HashAlgorithm::Sha256;
        let message = &data[96..];
        let signature = sign_message(message, &hash, &curve, &key_pair, &mut rng)
            .expect("SHA-256 output is hexadecimal");
        assert!(verify_signature(message, key_pair.public_key(), &signature, &hash, &curve));
    }
});
