// Benchmarks for ECDSA signing and verification on the NIST curves

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jcurve_algorithms::ec::CurveId;
use jcurve_sign::Ecdsa;
use rand::rngs::OsRng;

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");
    let message = b"benchmark message";

    for id in CurveId::ALL {
        let ecdsa: Ecdsa = Ecdsa::for_curve(id);
        let keys = ecdsa.generate_keypair(&mut OsRng).unwrap();
        let signature = ecdsa.sign(keys.secret(), message, &mut OsRng).unwrap();

        group.bench_function(format!("{}-sign", id.name()), |b| {
            b.iter(|| black_box(ecdsa.sign(keys.secret(), message, &mut OsRng).unwrap()))
        });

        group.bench_function(format!("{}-verify", id.name()), |b| {
            b.iter(|| black_box(ecdsa.verify(keys.public(), &signature, message).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
