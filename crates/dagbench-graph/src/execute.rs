// ─────────────────────────────────────────────────────────────────────
// Dagbench — Execute-and-Verify Entry
// ─────────────────────────────────────────────────────────────────────
//! The per-point entry a runtime adapter calls for every task.
//!
//! The core does not trust the driver: it re-derives the expected
//! dependency set for `(timestep, point)`, checks every delivered input
//! buffer against the stamps its producer must have written, stamps the
//! new output, verifies the scratch tag, and only then runs the kernel.
//! All violations are driver bugs and panic with a diagnostic.

#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicU64, Ordering};

use dagbench_kernels::execute_kernel;
use dagbench_types::stamp::{read_stamps, write_stamps};
use dagbench_types::{Stamp, SCRATCH_MAGIC, STAMP_BYTES};

use crate::graph::TaskGraph;

/// Bit per graph index that has executed at least one point.
#[cfg(debug_assertions)]
static EXECUTED_GRAPHS: AtomicU64 = AtomicU64::new(0);

/// Debug-build record of which graph indices have executed at least one
/// point; `None` in release builds. The reporter uses it to flag graphs
/// that were configured but never run.
pub fn executed_graph_mask() -> Option<u64> {
    #[cfg(debug_assertions)]
    {
        Some(EXECUTED_GRAPHS.load(Ordering::Relaxed))
    }
    #[cfg(not(debug_assertions))]
    {
        None
    }
}

impl TaskGraph {
    /// Tag a scratch region as initialized.
    ///
    /// Fills the region with [`SCRATCH_MAGIC`] at 8-byte granularity;
    /// the length must be a multiple of 8. Idempotent, and safe to call
    /// on a region holding stale kernel data.
    pub fn prepare_scratch(scratch: &mut [u8]) {
        assert!(
            scratch.len() % 8 == 0,
            "scratch length must be a multiple of 8, got {}",
            scratch.len()
        );
        for word in scratch.chunks_exact_mut(8) {
            word.copy_from_slice(&SCRATCH_MAGIC.to_le_bytes());
        }
    }

    /// Validate inputs, stamp the output, and run the kernel for one
    /// `(timestep, point)` task.
    ///
    /// `inputs` must hold the output buffers of this task's dependencies
    /// from the previous active timestep, in interval-then-peer order as
    /// returned by [`TaskGraph::dependencies`]; dependencies outside the
    /// previous active window are skipped. Extra trailing entries are
    /// tolerated (some runtimes pad), missing ones are not.
    ///
    /// # Panics
    ///
    /// On any driver contract violation: `timestep` or `point` outside
    /// the active window, too few inputs, an input shorter than one
    /// stamp, a stamp that does not match its expected producer, an
    /// output shorter than one stamp, a scratch length different from
    /// the descriptor's, or a scratch region missing the magic tag.
    pub fn execute_point(
        &self,
        timestep: i64,
        point: i64,
        output: &mut [u8],
        inputs: &[&[u8]],
        scratch: &mut [u8],
    ) {
        #[cfg(debug_assertions)]
        {
            assert!(
                (0..64).contains(&self.graph_index),
                "graph_index {} does not fit the execution mask",
                self.graph_index
            );
            EXECUTED_GRAPHS.fetch_or(1 << self.graph_index, Ordering::Relaxed);
        }

        assert!(
            timestep >= 0 && timestep < self.timesteps,
            "timestep {timestep} out of range [0, {})",
            self.timesteps
        );
        let offset = self.offset_at_timestep(timestep);
        let width = self.width_at_timestep(timestep);
        assert!(
            point >= offset && point < offset + width,
            "point {point} outside active window [{offset}, {})",
            offset + width
        );

        let last_offset = self.offset_at_timestep(timestep - 1);
        let last_width = self.width_at_timestep(timestep - 1);

        // Replay the dependency list and verify each delivered input.
        let dset = self.dependence_set_at_timestep(timestep);
        let mut idx = 0;
        for (lo, hi) in self.dependencies(dset, point) {
            for dep in lo..=hi {
                if dep < last_offset || dep >= last_offset + last_width {
                    continue;
                }
                assert!(
                    idx < inputs.len(),
                    "expected at least {} inputs for (timestep {timestep} point \
                     {point}), got {}",
                    idx + 1,
                    inputs.len()
                );
                let input = inputs[idx];
                assert!(
                    input.len() >= STAMP_BYTES,
                    "input {idx} for (timestep {timestep} point {point}) is {} \
                     bytes, shorter than one stamp",
                    input.len()
                );
                for (pos, stamp) in read_stamps(input).enumerate() {
                    let expected = Stamp::new(timestep - 1, dep);
                    if stamp != expected {
                        let diag = format!(
                            "corrupted value in task (graph {} timestep {timestep} \
                             point {point}) input {idx}: at position {pos}, expected \
                             (timestep {} point {}) but got (timestep {} point {})",
                            self.graph_index,
                            expected.timestep,
                            expected.point,
                            stamp.timestep,
                            stamp.point
                        );
                        log::error!("{diag}");
                        panic!("{diag}");
                    }
                }
                idx += 1;
            }
        }

        // Stamp the output.
        assert!(
            output.len() >= STAMP_BYTES,
            "output for (timestep {timestep} point {point}) is {} bytes, shorter \
             than one stamp",
            output.len()
        );
        write_stamps(output, Stamp::new(timestep, point));

        // Verify the scratch tag.
        assert!(
            scratch.len() == self.scratch_bytes_per_task,
            "scratch is {} bytes, descriptor says {}",
            scratch.len(),
            self.scratch_bytes_per_task
        );
        if !scratch.is_empty() {
            let mut word = [0u8; 8];
            word.copy_from_slice(&scratch[..8]);
            let tag = u64::from_le_bytes(word);
            if tag != SCRATCH_MAGIC {
                log::error!(
                    "scratch for (graph {} timestep {timestep} point {point}) is \
                     missing the magic tag: got {tag:#x}",
                    self.graph_index
                );
                panic!("scratch region was not initialized with prepare_scratch");
            }
        }

        execute_kernel(&self.kernel, self.graph_index, timestep, point, scratch);
    }
}
