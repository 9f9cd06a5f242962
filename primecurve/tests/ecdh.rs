//! ECDH key agreement tests.

#![cfg(feature = "ecdh")]

use primecurve::{
    ecdh::{self, Ecdh},
    encoding::parse_scalar,
    BigUint, Curve, CurveId, Error, InvalidKeyReason, Point,
};
use proptest::{prelude::*, test_runner::Config};
use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

#[test]
fn parties_agree_on_every_curve() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xec_d4);

    for id in CurveId::ALL {
        let curve = Curve::lookup(id);
        let mut alice = Ecdh::new(&curve, &mut rng);
        let mut bob = Ecdh::new(&curve, &mut rng);

        alice.set_peer_public_key(bob.public_key().clone()).unwrap();
        bob.set_peer_public_key(alice.public_key().clone()).unwrap();

        assert_eq!(alice.shared_secret().unwrap(), bob.shared_secret().unwrap(), "{}", id);
    }
}

#[test]
fn p256_known_shared_secret() {
    let curve = Curve::lookup(CurveId::NistP256);
    let d_a = parse_scalar("0x519B423D715F8B581F4FA8EE59F4771A5B44C8130B4E3EACCA54A56DDA72B464").unwrap();
    let d_b = parse_scalar("0x94A1BBB14B906A61A280F245F9E93C7F3B4A6247824F5D33B9670787642A68DE").unwrap();

    let alice = Ecdh::from_private_scalar(d_a.clone(), &curve).unwrap();
    let bob = Ecdh::from_private_scalar(d_b, &curve).unwrap();

    let expected = "7ff2da2997bacc2d13a24373649c43030e1b7f3fce8ae33c959c46dd91682add";
    assert_eq!(alice.shared_secret_with(bob.public_key()).unwrap(), expected);
    assert_eq!(bob.shared_secret_with(alice.public_key()).unwrap(), expected);
    assert_eq!(ecdh::shared_secret(&d_a, bob.public_key(), &curve).unwrap(), expected);
}

#[test]
fn test17_shared_secret() {
    // 3·7·G = 21·G = 2·G = (6, 3)
    let curve = Curve::lookup(CurveId::Test17);
    let alice = Ecdh::from_private_scalar(BigUint::from(3u8), &curve).unwrap();
    let bob = Ecdh::from_private_scalar(BigUint::from(7u8), &curve).unwrap();

    assert_eq!(alice.shared_secret_with(bob.public_key()).unwrap(), "6");
    assert_eq!(bob.shared_secret_with(alice.public_key()).unwrap(), "6");
}

#[cfg(feature = "test-vectors")]
#[test]
fn ecdh_test_vectors() {
    use primecurve::test_vectors::ecdh::ECDH_TEST_VECTORS;

    for vector in ECDH_TEST_VECTORS {
        let curve = Curve::lookup(vector.curve);
        let alice = Ecdh::from_private_scalar(parse_scalar(vector.d_a).unwrap(), &curve).unwrap();
        let bob = Ecdh::from_private_scalar(parse_scalar(vector.d_b).unwrap(), &curve).unwrap();

        let secret = alice.shared_secret_with(bob.public_key()).unwrap();
        assert_eq!(parse_scalar(&secret), parse_scalar(vector.shared_x));
    }
}

#[test]
fn shared_secret_requires_peer_key() {
    let curve = Curve::lookup(CurveId::Secp256k1);
    let alice = Ecdh::from_private_scalar(BigUint::from(42u8), &curve).unwrap();
    assert!(matches!(alice.shared_secret(), Err(Error::InvalidArgument(_))));
}

#[test]
fn rejected_peer_key_is_not_stored() {
    let curve = Curve::lookup(CurveId::NistP256);
    let mut alice = Ecdh::from_private_scalar(BigUint::from(1234u16), &curve).unwrap();
    let bob = curve.mul_generator(&BigUint::from(5678u16));

    alice.set_peer_public_key(bob.clone()).unwrap();
    let before = alice.shared_secret().unwrap();

    assert_eq!(
        alice.set_peer_public_key(Point::Identity),
        Err(InvalidKeyReason::Identity)
    );

    let (x, y) = bob.coordinates().unwrap();
    let off_curve = Point::new(x.clone(), y + 1u8);
    assert_eq!(
        alice.set_peer_public_key(off_curve.clone()),
        Err(InvalidKeyReason::NotOnCurve)
    );

    assert_eq!(alice.peer_public_key(), Some(&bob));
    assert_eq!(alice.shared_secret().unwrap(), before);

    assert_eq!(
        alice.shared_secret_with(&off_curve),
        Err(Error::InvalidKey(InvalidKeyReason::NotOnCurve))
    );
}

#[test]
fn public_key_matches_private_scalar() {
    let curve = Curve::lookup(CurveId::NistP256);
    let d = parse_scalar("0x519B423D715F8B581F4FA8EE59F4771A5B44C8130B4E3EACCA54A56DDA72B464").unwrap();
    let session = Ecdh::from_private_scalar(d, &curve).unwrap();

    let expected = Point::from_hex(
        "1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83",
        "ce4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9",
    )
    .unwrap();
    assert_eq!(session.public_key(), &expected);
}

prop_compose! {
    fn secp256k1_scalar()(bytes in any::<[u8; 32]>()) -> BigUint {
        let n = Curve::lookup(CurveId::Secp256k1).order().clone();
        BigUint::from_bytes_be(&bytes) % (&n - 1u8) + 1u8
    }
}

proptest! {
    #![proptest_config(Config::with_cases(16))]

    #[test]
    fn agreement(d_a in secp256k1_scalar(), d_b in secp256k1_scalar()) {
        let curve = Curve::lookup(CurveId::Secp256k1);
        let alice = Ecdh::from_private_scalar(d_a, &curve).unwrap();
        let bob = Ecdh::from_private_scalar(d_b, &curve).unwrap();

        prop_assert_eq!(
            alice.shared_secret_with(bob.public_key()).unwrap(),
            bob.shared_secret_with(alice.public_key()).unwrap()
        );
    }
}
