// ─────────────────────────────────────────────────────────────────────
// Dagbench — Heterogeneous Output-Size Planner
// ─────────────────────────────────────────────────────────────────────
//! Assigns a per-cell output size to every active `(timestep, point)`.
//!
//! `output_bytes_per_task` is the per-point budget; the planner spreads
//! the per-timestep total `budget * width(t)` across the active window
//! according to the configured distribution. Sizes are expressed in
//! "stars" of 16 bytes above the 16-byte floor each cell always keeps,
//! so every cell stays a positive multiple of one stamp record and the
//! per-timestep sum is preserved exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Gamma, Normal};

use dagbench_types::{DagbenchError, DagbenchResult};

use crate::graph::TaskGraph;

const NROLLS: i64 = 10_000;

impl TaskGraph {
    /// Build `output_bytes_size` for every timestep.
    ///
    /// Called once at configuration; the table is immutable afterwards.
    /// Cells outside the active window stay zero. Reproducible: the
    /// histogram RNG is seeded by `graph_index`.
    pub fn allocate_output_bytes(&mut self) -> DagbenchResult<()> {
        let budget = self.output_bytes_per_task as i64;
        let mut table = vec![vec![0usize; self.max_width as usize]; self.timesteps as usize];
        let mut rng = StdRng::seed_from_u64(self.graph_index as u64);

        for t in 0..self.timesteps {
            let width = self.width_at_timestep(t);
            let offset = self.offset_at_timestep(t) as usize;
            let row = &mut table[t as usize];
            if width == 0 {
                continue;
            }

            if budget == 16 || self.output_case == 0 {
                for i in 0..width as usize {
                    row[offset + i] = budget as usize;
                }
                continue;
            }

            let hist = self.roll_histogram(width, &mut rng)?;
            assign_stars(&hist, budget, offset, row);
        }

        self.output_bytes_size = table;
        Ok(())
    }

    /// Draw 10 000 samples from the configured distribution and bin
    /// them into `width` buckets, dropping out-of-range draws.
    fn roll_histogram(&self, width: i64, rng: &mut StdRng) -> DagbenchResult<Vec<i64>> {
        let mut hist = vec![0i64; width as usize];
        match self.output_case {
            1 => {
                let normal = Normal::new(self.onormal_mu, self.onormal_std)
                    .map_err(|e| DagbenchError::Config(format!("output normal: {e}")))?;
                fill_histogram(&normal, rng, &mut hist);
            }
            2 => {
                let mu = rng.gen_range(0..width) as f64;
                let sigma = rng.gen_range(0..width) as f64;
                let normal = Normal::new(mu, sigma)
                    .map_err(|e| DagbenchError::Config(format!("output normal: {e}")))?;
                fill_histogram(&normal, rng, &mut hist);
            }
            3 => {
                let gamma = Gamma::new(self.ogamma_alpha, self.ogamma_beta)
                    .map_err(|e| DagbenchError::Config(format!("output gamma: {e}")))?;
                fill_histogram(&gamma, rng, &mut hist);
            }
            other => {
                return Err(DagbenchError::Config(format!(
                    "output case {other} is not in 0..=3"
                )));
            }
        }
        Ok(hist)
    }
}

fn fill_histogram<D: Distribution<f64>>(dist: &D, rng: &mut StdRng, hist: &mut [i64]) {
    let width = hist.len() as f64;
    for _ in 0..NROLLS {
        let x = dist.sample(rng);
        if x >= 0.0 && x < width {
            hist[x as usize] += 1;
        }
    }
}

/// Convert a histogram into per-cell byte sizes.
///
/// Every cell gets the 16-byte floor plus its proportional share of the
/// timestep's stars; a second pass hands out the rounding slack in the
/// same proportions, and whatever remains lands on the last active
/// cell, so the sum over the window is exactly `budget * width`.
fn assign_stars(hist: &[i64], budget: i64, offset: usize, row: &mut [usize]) {
    let width = hist.len();
    let nstars = (budget - 16) * width as i64 / 16;

    let mut iroll = 0i64;
    for i in 0..width {
        let size = (hist[i] * nstars / NROLLS + 1) * 16;
        row[offset + i] = size as usize;
        iroll += (size - 16) / 16;
    }
    for i in 0..width {
        let add = hist[i] * (nstars - iroll) / NROLLS * 16;
        row[offset + i] += add as usize;
        iroll += add / 16;
    }
    row[offset + width - 1] += ((nstars - iroll) * 16) as usize;
}
