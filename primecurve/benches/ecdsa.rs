//! ECDSA benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use primecurve::{
    ecdsa::{HashAlgorithm, Signer},
    Curve, CurveId, KeyPair,
};
use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
use std::hint::black_box;

const SIGNING_KEY: &str = "0x1cf6bc6c7f642a84994119e206c9f0753ff100709f4fd12f2338c1be60bf4175";
const MESSAGE: &[u8] = b"ECDSA proves knowledge of a secret number in the context of a single message";

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECDSA");
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    for (id, hash) in [
        (CurveId::NistP256, HashAlgorithm::Sha256),
        (CurveId::Secp256k1, HashAlgorithm::Sha256),
        (CurveId::NistP384, HashAlgorithm::Sha384),
    ] {
        let curve = Curve::lookup(id);
        let signer = Signer::new(KeyPair::from_private_hex(SIGNING_KEY, &curve).unwrap(), hash);
        let verifier = signer.verifier();
        let signature = signer.sign_with_rng(&mut rng, MESSAGE).unwrap();

        group.bench_function(format!("{} ({}) sign", id, hash), |b| {
            b.iter(|| signer.sign_with_rng(&mut rng, black_box(MESSAGE)))
        });

        group.bench_function(format!("{} ({}) verify", id, hash), |b| {
            b.iter(|| verifier.verify(black_box(MESSAGE), black_box(&signature)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
