// ─────────────────────────────────────────────────────────────────────
// Dagbench — Analytic Work Accounting
// ─────────────────────────────────────────────────────────────────────
//! FLOP and byte counts per task, derived from the kernel parameters.
//!
//! These formulas must track the kernel implementations in
//! `dagbench-kernels`; the imbalance variants call the same iteration
//! selectors the kernels use, so reported work equals executed work.

use dagbench_kernels::{select_dist_iterations, select_imbalance_iterations};
use dagbench_types::KernelType;

use crate::graph::TaskGraph;

/// Floating-point operations one `(timestep, point)` task performs.
pub fn count_flops_per_task(g: &TaskGraph, timestep: i64, point: i64) -> i64 {
    let k = &g.kernel;
    match k.kind {
        KernelType::Empty | KernelType::BusyWait | KernelType::MemoryBound => 0,
        KernelType::ComputeDgemm => {
            let n = ((g.scratch_bytes_per_task / (3 * 8)) as f64).sqrt() as i64;
            2 * n * n * n * k.iterations
        }
        KernelType::MemoryDaxpy => 0,
        KernelType::ComputeBound => 2 * 64 * k.iterations + 64,
        KernelType::ComputeBound2 => 2 * 32 * k.iterations,
        KernelType::IoBound => 0,
        KernelType::LoadImbalance => {
            let iterations = select_imbalance_iterations(k, g.graph_index, timestep, point);
            2 * 64 * iterations + 64
        }
        KernelType::DistImbalance => {
            let iterations = select_dist_iterations(k, g.graph_index, timestep, point);
            2 * 64 * iterations + 64
        }
        KernelType::ComputeAndMem => {
            (2.0 * 64.0 * k.iterations as f64 * (1.0 - k.fraction_mem)) as i64 + 64
        }
    }
}

/// Scratch bytes one `(timestep, point)` task moves.
pub fn count_bytes_per_task(g: &TaskGraph, _timestep: i64, _point: i64) -> i64 {
    let k = &g.kernel;
    let samples = i64::from(k.samples.max(1));
    match k.kind {
        KernelType::MemoryBound | KernelType::MemoryDaxpy => {
            g.scratch_bytes_per_task as i64 * k.iterations / samples
        }
        KernelType::ComputeAndMem => {
            (g.scratch_bytes_per_task as f64 * k.iterations as f64 * k.fraction_mem
                / samples as f64) as i64
        }
        _ => 0,
    }
}

/// Total FLOPs over every active point of every timestep.
pub fn count_flops(g: &TaskGraph) -> i64 {
    sum_over_window(g, count_flops_per_task)
}

/// Total scratch bytes over every active point of every timestep.
pub fn count_bytes(g: &TaskGraph) -> i64 {
    sum_over_window(g, count_bytes_per_task)
}

fn sum_over_window(g: &TaskGraph, per_task: fn(&TaskGraph, i64, i64) -> i64) -> i64 {
    let mut total = 0;
    for t in 0..g.timesteps {
        let offset = g.offset_at_timestep(t);
        let width = g.width_at_timestep(t);
        for point in offset..offset + width {
            total += per_task(g, t, point);
        }
    }
    total
}
