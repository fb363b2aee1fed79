// ─────────────────────────────────────────────────────────────────────
// Dagbench — Kernel Implementations
// ─────────────────────────────────────────────────────────────────────

use std::hint::black_box;

use dagbench_types::{KernelParams, KernelType};

use crate::imbalance::{select_dist_iterations, select_imbalance_iterations};

/// Width of the compute-bound working set (doubles).
const COMPUTE_WIDTH: usize = 64;
/// Width of the secondary compute-bound working set.
const COMPUTE2_WIDTH: usize = 32;
const DAXPY_ALPHA: f64 = 2.0;

/// Execute one kernel invocation for `(timestep, point)`.
///
/// `scratch` is the per-call scratch region prepared by the driver;
/// kernels that need one panic if it is empty (driver contract). The
/// caller has already verified the scratch magic.
pub fn execute_kernel(
    params: &KernelParams,
    graph_index: i64,
    timestep: i64,
    point: i64,
    scratch: &mut [u8],
) {
    if params.kind.uses_scratch() && scratch.is_empty() {
        log::error!(
            "kernel \"{}\" invoked without a scratch region (driver bug)",
            params.kind.name()
        );
        panic!(
            "kernel \"{}\" requires a scratch region",
            params.kind.name()
        );
    }

    match params.kind {
        KernelType::Empty => {}
        KernelType::BusyWait => kernel_busy_wait(params.iterations),
        KernelType::MemoryBound => {
            kernel_memory(scratch, params.iterations, params.samples, timestep)
        }
        KernelType::ComputeDgemm => kernel_dgemm(scratch, params.iterations),
        KernelType::MemoryDaxpy => {
            kernel_daxpy(scratch, params.iterations, params.samples, timestep)
        }
        KernelType::ComputeBound => kernel_compute(params.iterations),
        KernelType::ComputeBound2 => kernel_compute2(params.iterations),
        KernelType::IoBound => kernel_busy_wait(params.iterations),
        KernelType::LoadImbalance => {
            debug_assert!(timestep >= 0 && point >= 0);
            kernel_compute(select_imbalance_iterations(
                params,
                graph_index,
                timestep,
                point,
            ));
        }
        KernelType::DistImbalance => {
            debug_assert!(timestep >= 0 && point >= 0);
            kernel_compute(select_dist_iterations(params, graph_index, timestep, point));
        }
        KernelType::ComputeAndMem => {
            let mem_iters =
                (params.iterations as f64 * params.fraction_mem).round() as i64;
            let compute_iters = (params.iterations - mem_iters).max(0);
            kernel_compute(compute_iters);
            kernel_memory(scratch, mem_iters, params.samples, timestep);
        }
    }
}

/// Integer spin; no floating-point work, nothing written anywhere.
fn kernel_busy_wait(iterations: i64) {
    let mut acc = 0u64;
    for i in 0..iterations {
        acc = acc.rotate_left(1) ^ i as u64;
    }
    black_box(acc);
}

/// FMA chain over a 64-wide working set, plus a final reduction.
fn kernel_compute(iterations: i64) {
    let mut a = [0.0f64; COMPUTE_WIDTH];
    for (j, v) in a.iter_mut().enumerate() {
        *v = 0.5 + j as f64 / COMPUTE_WIDTH as f64;
    }
    for _ in 0..iterations {
        for v in a.iter_mut() {
            *v = *v * *v + *v;
        }
    }
    black_box(a.iter().sum::<f64>());
}

/// Scaled FMA chain over a 32-wide working set; no reduction.
fn kernel_compute2(iterations: i64) {
    const ALPHA: f64 = 1.000_000_1;
    const BETA: f64 = 1.0e-9;
    let mut a = [0.0f64; COMPUTE2_WIDTH];
    for (j, v) in a.iter_mut().enumerate() {
        *v = 1.0 + j as f64 * 1.0e-3;
    }
    for _ in 0..iterations {
        for v in a.iter_mut() {
            *v = ALPHA * *v + BETA;
        }
    }
    black_box(a);
}

/// Stream copies between scratch chunks.
///
/// The scratch is split into `samples` equal chunks; each iteration
/// copies one chunk onto the next, starting at a chunk rotated by
/// `timestep` so consecutive timesteps touch different regions first.
fn kernel_memory(scratch: &mut [u8], iterations: i64, samples: i32, timestep: i64) {
    let samples = samples.max(1) as usize;
    let chunk = scratch.len() / samples;
    if chunk == 0 {
        return;
    }
    for i in 0..iterations as usize {
        let src = (timestep as usize + i) % samples * chunk;
        let dst = (timestep as usize + i + 1) % samples * chunk;
        scratch.copy_within(src..src + chunk, dst);
    }
}

/// `y += alpha * x` over one scratch segment per iteration.
///
/// The scratch is split into an `x` half and a `y` half of doubles; the
/// segment walked per iteration is `1/samples` of each half, rotated by
/// `timestep` like `kernel_memory`.
fn kernel_daxpy(scratch: &mut [u8], iterations: i64, samples: i32, timestep: i64) {
    let elems: &mut [f64] = bytemuck::cast_slice_mut(scratch);
    let half = elems.len() / 2;
    let (x, y) = elems.split_at_mut(half);
    for (j, v) in x.iter_mut().enumerate() {
        *v = 1.0 + j as f64 * 1.0e-6;
    }
    let samples = samples.max(1) as usize;
    let seg = half / samples;
    if seg == 0 {
        return;
    }
    for i in 0..iterations as usize {
        let start = (timestep as usize + i) % samples * seg;
        for j in start..start + seg {
            y[j] += DAXPY_ALPHA * x[j];
        }
    }
    black_box(y.first().copied());
}

/// Naive square matrix multiply, `C += A * B`, over scratch.
///
/// The matrix order is the largest `N` with three `N x N` double
/// matrices fitting in the scratch region.
fn kernel_dgemm(scratch: &mut [u8], iterations: i64) {
    let elems: &mut [f64] = bytemuck::cast_slice_mut(scratch);
    let n = ((elems.len() / 3) as f64).sqrt() as usize;
    if n == 0 {
        return;
    }
    for (j, v) in elems[..2 * n * n].iter_mut().enumerate() {
        *v = 0.5 + (j % 7) as f64 * 0.125;
    }
    let (ab, c) = elems.split_at_mut(2 * n * n);
    let (a, b) = (&ab[..n * n], &ab[n * n..]);
    let c = &mut c[..n * n];
    c.fill(0.0);
    for _ in 0..iterations {
        for i in 0..n {
            for k in 0..n {
                let aik = a[i * n + k];
                for j in 0..n {
                    c[i * n + j] += aik * b[k * n + j];
                }
            }
        }
    }
    black_box(c.first().copied());
}

#[cfg(test)]
mod tests {
    use super::*;
    use dagbench_types::{DistParams, DistType};

    /// 8-aligned scratch region of `words * 8` bytes.
    fn scratch_words(words: usize) -> Vec<u64> {
        vec![0u64; words]
    }

    fn params(kind: KernelType, iterations: i64) -> KernelParams {
        KernelParams {
            kind,
            iterations,
            ..KernelParams::default()
        }
    }

    #[test]
    fn test_empty_and_busy_wait_need_no_scratch() {
        execute_kernel(&params(KernelType::Empty, 0), 0, 0, 0, &mut []);
        execute_kernel(&params(KernelType::BusyWait, 1000), 0, 0, 0, &mut []);
        execute_kernel(&params(KernelType::IoBound, 100), 0, 0, 0, &mut []);
        execute_kernel(&params(KernelType::ComputeBound, 10), 0, 0, 0, &mut []);
        execute_kernel(&params(KernelType::ComputeBound2, 10), 0, 0, 0, &mut []);
    }

    #[test]
    #[should_panic(expected = "requires a scratch region")]
    fn test_memory_kernel_panics_without_scratch() {
        execute_kernel(&params(KernelType::MemoryBound, 1), 0, 0, 0, &mut []);
    }

    #[test]
    fn test_memory_bound_moves_bytes() {
        let mut words = scratch_words(64);
        let scratch: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
        scratch[0] = 0xAB;
        let mut p = params(KernelType::MemoryBound, 1);
        p.samples = 4;
        execute_kernel(&p, 0, 0, 0, scratch);
        // One iteration at timestep 0 copies chunk 0 onto chunk 1.
        let chunk = scratch.len() / 4;
        assert_eq!(scratch[chunk], 0xAB);
    }

    #[test]
    fn test_daxpy_touches_y_half() {
        let mut words = scratch_words(64);
        let scratch: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
        let mut p = params(KernelType::MemoryDaxpy, 4);
        p.samples = 1;
        execute_kernel(&p, 0, 0, 0, scratch);
        let elems: &[f64] = bytemuck::cast_slice(scratch);
        let half = elems.len() / 2;
        // y accumulated alpha * x four times; x[0] = 1.0.
        assert!((elems[half] - 4.0 * DAXPY_ALPHA).abs() < 1e-12);
    }

    #[test]
    fn test_dgemm_runs_on_small_scratch() {
        // 3 matrices of 4x4 doubles = 384 bytes.
        let mut words = scratch_words(48);
        let scratch: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
        execute_kernel(&params(KernelType::ComputeDgemm, 2), 0, 0, 0, scratch);
        let elems: &[f64] = bytemuck::cast_slice(scratch);
        // C (last third) accumulated non-zero products.
        assert!(elems[32..48].iter().all(|v| *v > 0.0));
    }

    #[test]
    fn test_compute_and_mem_splits_iterations() {
        let mut words = scratch_words(32);
        let scratch: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
        let mut p = params(KernelType::ComputeAndMem, 10);
        p.fraction_mem = 0.5;
        p.samples = 2;
        execute_kernel(&p, 0, 0, 0, scratch);
    }

    #[test]
    fn test_imbalance_kernels_dispatch() {
        let mut p = params(KernelType::LoadImbalance, 100);
        p.imbalance = 1.0;
        execute_kernel(&p, 0, 3, 5, &mut []);

        let mut p = params(KernelType::DistImbalance, 100);
        p.dist = DistParams {
            dist: DistType::Uniform,
            max: 200,
            ..DistParams::default()
        };
        execute_kernel(&p, 0, 3, 5, &mut []);
    }
}
