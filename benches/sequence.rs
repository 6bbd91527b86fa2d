use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;
use unilib::Sequence;

fn bench_sequence(c: &mut Criterion) {
    let n = 256;
    {
        let mut group = c.benchmark_group("VecDeque vs Sequence (PushBack 256)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        // Grows one slot per push.
        group.bench_function("Sequence<i32> (default capacity)", |b| {
            b.iter(|| {
                let mut s: Sequence<i32> = Sequence::new().unwrap();
                for i in 0..n {
                    s.push_back(black_box(i as i32)).unwrap();
                }
                s
            })
        });

        group.bench_function("Sequence<i32> (presized)", |b| {
            b.iter(|| {
                let mut s: Sequence<i32> = Sequence::with_capacity(n).unwrap();
                for i in 0..n {
                    s.push_back(black_box(i as i32)).unwrap();
                }
                s
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Sequence (PushFront 256)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("Sequence<i32> (presized)", |b| {
            b.iter(|| {
                let mut s: Sequence<i32> = Sequence::with_capacity(n).unwrap();
                for i in 0..n {
                    s.push_front(black_box(i as i32)).unwrap();
                }
                s
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Sequence (Get 256)");
        let mut d_std = VecDeque::new();
        let mut s_seq: Sequence<i32> = Sequence::with_capacity(n).unwrap();
        for i in 0..n {
            d_std.push_back(i as i32);
            s_seq.push_back(i as i32).unwrap();
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("Sequence<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(s_seq.get(black_box(i)));
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_sequence);
criterion_main!(benches);
