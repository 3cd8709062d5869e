//! Benchmarks comparing `OptionalValue` against the standard `Option`.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use optslot::OptionalValue;

fn bench_store_and_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_and_clear");

    group.bench_function("OptionalValue<u64>", |b| {
        b.iter(|| {
            let mut slot: OptionalValue<u64> = OptionalValue::new();
            for i in 0..64u64 {
                slot.set(black_box(i));
            }
            slot.reset();
            slot
        });
    });

    group.bench_function("Option<u64>", |b| {
        b.iter(|| {
            let mut slot: Option<u64> = None;
            for i in 0..64u64 {
                slot = Some(black_box(i));
            }
            slot = None;
            slot
        });
    });

    group.finish();
}

fn bench_read_occupied(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_occupied");

    let slot = OptionalValue::with_value(0xDEAD_BEEF_u64);
    group.bench_function("OptionalValue::get", |b| {
        b.iter(|| black_box(slot.get()));
    });
    group.bench_function("OptionalValue::get_unchecked", |b| {
        b.iter(|| {
            // SAFETY: the holder above stays occupied for the whole run.
            unsafe { black_box(*slot.get_unchecked()) }
        });
    });

    let model = Some(0xDEAD_BEEF_u64);
    group.bench_function("Option::as_ref", |b| {
        b.iter(|| black_box(model.as_ref()));
    });

    group.finish();
}

fn bench_emplace(c: &mut Criterion) {
    let mut group = c.benchmark_group("emplace");

    group.bench_function("OptionalValue<String>", |b| {
        b.iter_batched(
            OptionalValue::<String>::new,
            |mut slot| {
                slot.emplace(|| String::from(black_box("forty two")));
                slot
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("Option<String>", |b| {
        b.iter_batched(
            || Option::<String>::None,
            |mut slot| {
                slot = Some(String::from(black_box("forty two")));
                slot
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_take_and_refill(c: &mut Criterion) {
    let mut group = c.benchmark_group("take_and_refill");

    group.bench_function("OptionalValue<u64>", |b| {
        b.iter_batched(
            || OptionalValue::with_value(7_u64),
            |mut slot| {
                let value = slot.take().unwrap_or_default();
                slot.set(value + 1);
                slot
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("Option<u64>", |b| {
        b.iter_batched(
            || Some(7_u64),
            |mut slot: Option<u64>| {
                let value = slot.take().unwrap_or_default();
                slot = Some(value + 1);
                slot
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_store_and_clear,
    bench_read_occupied,
    bench_emplace,
    bench_take_and_refill
);
criterion_main!(benches);
