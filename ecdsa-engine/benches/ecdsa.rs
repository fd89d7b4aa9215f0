//! ECDSA benchmarks over every registered curve

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ecdsa_engine::{
    CurveName, SigningKey,
    signature::{Signer, Verifier},
};

const MESSAGE: &[u8] = b"Nothing up my sleeve";

fn signing_key(curve: CurveName) -> SigningKey {
    let curve = curve.curve();
    let mut secret = vec![0u8; curve.scalar_bytes()];
    secret[1..].fill(0x5c);
    SigningKey::from_bytes(curve, &secret).unwrap()
}

fn bench_sign<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, key: &SigningKey) {
    group.bench_function("sign", |b| b.iter(|| key.sign(MESSAGE)));
}

fn bench_verify<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, key: &SigningKey) {
    let verifying_key = key.verifying_key();
    let signature = key.sign(MESSAGE);
    group.bench_function("verify", |b| {
        b.iter(|| verifying_key.verify(MESSAGE, &signature))
    });
}

fn bench_ecdsa(c: &mut Criterion) {
    for curve in CurveName::ALL {
        let key = signing_key(curve);
        let mut group = c.benchmark_group(format!("ECDSA/{curve} ({:?})", curve.default_hash()));
        bench_sign(&mut group, &key);
        bench_verify(&mut group, &key);
        group.finish();
    }
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
