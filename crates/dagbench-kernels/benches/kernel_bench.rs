// ─────────────────────────────────────────────────────────────────────
// Dagbench — Kernel Bank Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the kernel bank; the per-iteration cost
//! here is what the task-graph drivers pay per point.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dagbench_kernels::execute_kernel;
use dagbench_types::{KernelParams, KernelType};

fn params(kind: KernelType, iterations: i64) -> KernelParams {
    KernelParams {
        kind,
        iterations,
        ..KernelParams::default()
    }
}

fn scratch_buffer(bytes: usize) -> Vec<u64> {
    vec![0u64; bytes / 8]
}

fn bench_compute_bound(c: &mut Criterion) {
    let p = params(KernelType::ComputeBound, 1024);
    c.bench_function("compute_bound_1k", |b| {
        b.iter(|| execute_kernel(black_box(&p), 0, 0, 0, &mut []))
    });
}

fn bench_busy_wait(c: &mut Criterion) {
    let p = params(KernelType::BusyWait, 10_000);
    c.bench_function("busy_wait_10k", |b| {
        b.iter(|| execute_kernel(black_box(&p), 0, 0, 0, &mut []))
    });
}

fn bench_memory_bound(c: &mut Criterion) {
    let mut p = params(KernelType::MemoryBound, 64);
    p.samples = 16;
    let mut words = scratch_buffer(64 * 1024);
    let scratch: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
    c.bench_function("memory_bound_64k", |b| {
        b.iter(|| execute_kernel(black_box(&p), 0, 0, 0, scratch))
    });
}

fn bench_dgemm(c: &mut Criterion) {
    let p = params(KernelType::ComputeDgemm, 1);
    // Three 32x32 double matrices.
    let mut words = scratch_buffer(3 * 32 * 32 * 8);
    let scratch: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
    c.bench_function("dgemm_32", |b| {
        b.iter(|| execute_kernel(black_box(&p), 0, 0, 0, scratch))
    });
}

fn bench_load_imbalance(c: &mut Criterion) {
    let mut p = params(KernelType::LoadImbalance, 1024);
    p.imbalance = 1.0;
    c.bench_function("load_imbalance_1k", |b| {
        let mut point = 0i64;
        b.iter(|| {
            point += 1;
            execute_kernel(black_box(&p), 0, 0, point, &mut [])
        })
    });
}

criterion_group!(
    benches,
    bench_compute_bound,
    bench_busy_wait,
    bench_memory_bound,
    bench_dgemm,
    bench_load_imbalance,
);
criterion_main!(benches);
