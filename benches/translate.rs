use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrisrun::core::PauseGate;
use tetrisrun::input::{classify, Translator};

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_all_bytes", |b| {
        b.iter(|| {
            for byte in 0..=u8::MAX {
                black_box(classify(black_box(byte)));
            }
        })
    });
}

fn bench_translate_stream(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    // A typical burst: aliases, arrows, and noise.
    let mut input = Vec::new();
    for _ in 0..256 {
        input.extend_from_slice(b"wasdijkl\x1b[A\x1b[D\r");
    }

    c.bench_function("translate_4k_stream", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut translator = Translator::new(input.as_slice(), PauseGate::new());
                let mut n = 0usize;
                while translator.next_command().await.is_ok() {
                    n += 1;
                }
                black_box(n)
            })
        })
    });
}

criterion_group!(benches, bench_classify, bench_translate_stream);
criterion_main!(benches);
