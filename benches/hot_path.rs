use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fastuuid::{hex128, valid_hex128, Generator};

const CONTENDED_THREADS: u64 = 4;

fn bench_next(c: &mut Criterion) {
    let generator = Generator::must_new();

    c.bench_function("next_uncontended", |b| {
        b.iter(|| black_box(generator.next()));
    });
}

fn bench_next_contended(c: &mut Criterion) {
    let generator = Arc::new(Generator::must_new());

    c.bench_function("next_contended_4_threads", |b| {
        b.iter_custom(|iters| {
            let per_thread = iters.div_ceil(CONTENDED_THREADS);
            let start = Instant::now();
            let handles: Vec<_> = (0..CONTENDED_THREADS)
                .map(|_| {
                    let generator = Arc::clone(&generator);
                    thread::spawn(move || {
                        for _ in 0..per_thread {
                            black_box(generator.next());
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("bench worker panicked");
            }
            start.elapsed().max(Duration::from_nanos(1))
        });
    });
}

fn bench_hex128(c: &mut Criterion) {
    let generator = Generator::must_new();
    let uuid = generator.next();
    let rendered = hex128(&uuid);

    c.bench_function("hex128_render", |b| {
        b.iter(|| black_box(hex128(black_box(&uuid))));
    });

    c.bench_function("hex128_validate", |b| {
        b.iter(|| black_box(valid_hex128(black_box(&rendered))));
    });
}

criterion_group!(benches, bench_next, bench_next_contended, bench_hex128);
criterion_main!(benches);
