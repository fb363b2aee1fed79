// ─────────────────────────────────────────────────────────────────────
// Dagbench — Timing Report
// ─────────────────────────────────────────────────────────────────────
//! Post-run reporting: task and dependency totals, analytic FLOP and
//! byte counts with rates, and (when a node count was given) estimates
//! of how much dependency traffic stays node-local under a blocked
//! point-to-node assignment.

use dagbench_graph::{count_bytes, count_flops, executed_graph_mask};

use crate::app::App;

/// Clamp `[start, end]` to `[min_value, max_value]`; an empty result is
/// returned as an inverted pair so interval lengths stay additive.
fn clamp(start: i64, end: i64, min_value: i64, max_value: i64) -> (i64, i64) {
    if end < min_value {
        (min_value, min_value - 1)
    } else if start > max_value {
        (max_value, max_value - 1)
    } else {
        (start.max(min_value), end.min(max_value))
    }
}

impl App {
    /// Print totals and rates for a finished run.
    ///
    /// In debug builds, a graph that was configured but never executed
    /// is a fatal mistake unless `-skip-graph-validation` was given, in
    /// which case it is only warned about.
    pub fn report_timing(&self, elapsed_seconds: f64) {
        let mut total_num_tasks: i64 = 0;
        let mut total_num_deps: i64 = 0;
        let mut total_local_deps: i64 = 0;
        let mut total_nonlocal_deps: i64 = 0;
        let mut flops: i64 = 0;
        let mut bytes: i64 = 0;
        let mut local_transfer: i64 = 0;
        let mut nonlocal_transfer: i64 = 0;

        for g in &self.graphs {
            if let Some(mask) = executed_graph_mask() {
                if mask & (1 << g.graph_index) == 0 {
                    if self.enable_graph_validation {
                        panic!(
                            "graph {} was configured but never executed",
                            g.graph_index
                        );
                    }
                    log::warn!("graph {} was configured but never executed", g.graph_index);
                }
            }

            let mut num_deps: i64 = 0;
            let mut local_deps: i64 = 0;
            let mut nonlocal_deps: i64 = 0;

            for t in 0..g.timesteps {
                let offset = g.offset_at_timestep(t);
                let width = g.width_at_timestep(t);
                let last_offset = g.offset_at_timestep(t - 1);
                let last_width = g.width_at_timestep(t - 1);
                let dset = g.dependence_set_at_timestep(t);

                total_num_tasks += width;

                for p in offset..offset + width {
                    let mut node_first = 0;
                    let mut node_last = -1;
                    if self.nodes > 0 {
                        let point_node = p * self.nodes / g.max_width;
                        node_first = point_node * g.max_width / self.nodes;
                        node_last = (point_node + 1) * g.max_width / self.nodes - 1;
                    }

                    for (lo, hi) in g.dependencies(dset, p) {
                        let (dep_first, dep_last) =
                            clamp(lo, hi, last_offset, last_offset + last_width - 1);
                        num_deps += dep_last - dep_first + 1;
                        if self.nodes > 0 {
                            let (before_first, before_last) =
                                clamp(dep_first, dep_last, 0, node_first - 1);
                            let (local_first, local_last) =
                                clamp(dep_first, dep_last, node_first, node_last);
                            let (after_first, after_last) =
                                clamp(dep_first, dep_last, node_last + 1, g.max_width - 1);
                            nonlocal_deps += before_last - before_first + 1;
                            local_deps += local_last - local_first + 1;
                            nonlocal_deps += after_last - after_first + 1;
                        }
                    }
                }
            }

            total_num_deps += num_deps;
            total_local_deps += local_deps;
            total_nonlocal_deps += nonlocal_deps;
            flops += count_flops(g);
            bytes += count_bytes(g);
            local_transfer += local_deps * g.output_bytes_per_task as i64;
            nonlocal_transfer += nonlocal_deps * g.output_bytes_per_task as i64;
        }

        println!("Total Tasks {total_num_tasks}");
        println!("Total Dependencies {total_num_deps}");
        if self.nodes > 0 {
            println!("  Local Dependencies {total_local_deps} (estimated)");
            println!("  Nonlocal Dependencies {total_nonlocal_deps} (estimated)");
            println!("  Number of Nodes (used for estimate) {}", self.nodes);
        } else {
            println!("  Unable to estimate local/nonlocal dependencies");
        }
        println!("Total FLOPs {flops}");
        println!("Total Bytes {bytes}");
        println!("Elapsed Time {elapsed_seconds:e} seconds");
        println!("FLOP/s {:e}", flops as f64 / elapsed_seconds);
        println!("B/s {:e}", bytes as f64 / elapsed_seconds);
        println!("Transfer (estimated):");
        if self.nodes > 0 {
            println!("  Local Bytes {local_transfer}");
            println!("  Nonlocal Bytes {nonlocal_transfer}");
            println!(
                "  Local Bandwidth {:e} B/s",
                local_transfer as f64 / elapsed_seconds
            );
            println!(
                "  Nonlocal Bandwidth {:e} B/s",
                nonlocal_transfer as f64 / elapsed_seconds
            );
        } else {
            println!("  Unable to estimate local/nonlocal transfer");
        }

        if let Some(mask) = executed_graph_mask() {
            println!("Task Graph Execution Mask {mask:x}");
        }
    }
}
