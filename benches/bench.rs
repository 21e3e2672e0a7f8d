use criterion::{criterion_group, criterion_main};

mod checksum_benchmark {
    use criterion::{black_box, Criterion};
    use dd_nid::{ChileanRutChecksum, SpanishDniChecksum, SpanishNieChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let dnis = vec!["12345678Z", "00000000T", "99999999R", " 1234 5678-z ", "12345678A"];
        let nies = vec!["X1234567L", "Y0000000Z", "Z0000000M", "x-1234567-l", "X1234567A"];
        let ruts = vec!["12.345.678-5", "123456785", "1.000.005-K", "1.000.030-0", "12.345.678-4"];

        c.bench_function("spanish-dni-checksum", |b| {
            b.iter(|| {
                for dni in dnis.iter() {
                    SpanishDniChecksum.is_valid_match(black_box(dni));
                }
            })
        });
        c.bench_function("spanish-nie-checksum", |b| {
            b.iter(|| {
                for nie in nies.iter() {
                    SpanishNieChecksum.is_valid_match(black_box(nie));
                }
            })
        });
        c.bench_function("chilean-rut-checksum", |b| {
            b.iter(|| {
                for rut in ruts.iter() {
                    ChileanRutChecksum.is_valid_match(black_box(rut));
                }
            })
        });
    }
}

mod document_validation_benchmark {
    use criterion::{black_box, Criterion};
    use dd_nid::{classify_id, DocumentValidatorConfig};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let documents = vec![
            "12345678Z",
            "X1234567L",
            "B1234567A",
            "12.345.678-5",
            "not a document",
        ];

        c.bench_function("classify-id", |b| {
            b.iter(|| {
                for document in documents.iter() {
                    classify_id(black_box(document));
                }
            })
        });

        let validator = DocumentValidatorConfig::new()
            .verify_spanish_checksums(true)
            .build();
        c.bench_function("validate-document", |b| {
            b.iter(|| {
                for document in documents.iter() {
                    validator.validate(black_box(document));
                }
            })
        });
    }
}

criterion_group!(
    benches,
    checksum_benchmark::criterion_benchmark,
    document_validation_benchmark::criterion_benchmark
);
criterion_main!(benches);
