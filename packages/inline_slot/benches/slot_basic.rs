//! Basic benchmarks for the `inline_slot` crate.
//!
//! The allocation tracker reports the bytes allocated per operation, which is expected to be
//! zero for every operation here because the slot never touches the heap.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use inline_slot::Slot;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = [u64; 4];
const TEST_VALUE: TestItem = [1, 2, 3, 4];

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("slot_basic");

    let allocs_op = allocs.operation("new_and_drop");
    group.bench_function("new_and_drop", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(Slot::new(black_box(TEST_VALUE))));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("assign_and_reset");
    group.bench_function("assign_and_reset", |b| {
        b.iter_custom(|iters| {
            let mut slot = Slot::<TestItem>::empty();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                slot.assign(black_box(TEST_VALUE));
                slot.reset();
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("read_checked");
    group.bench_function("read_checked", |b| {
        b.iter_custom(|iters| {
            let slot = Slot::new(TEST_VALUE);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(black_box(&slot).value());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("read_unchecked");
    group.bench_function("read_unchecked", |b| {
        b.iter_custom(|iters| {
            let slot = Slot::new(TEST_VALUE);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                // SAFETY: The slot is engaged.
                _ = black_box(unsafe { black_box(&slot).get_unchecked() });
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("assign_from_engaged");
    group.bench_function("assign_from_engaged", |b| {
        b.iter_custom(|iters| {
            let source = Slot::new(TEST_VALUE);
            let mut target = Slot::new(TEST_VALUE);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                target.assign_from(black_box(&source));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("emplace_over_engaged");
    group.bench_function("emplace_over_engaged", |b| {
        b.iter_custom(|iters| {
            let mut slot = Slot::new(TEST_VALUE);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(slot.emplace_with(|| black_box(TEST_VALUE)));
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
