// ─────────────────────────────────────────────────────────────────────
// Dagbench — Imbalance Iteration Selection
// ─────────────────────────────────────────────────────────────────────
//! Per-point iteration counts for the imbalance kernels.
//!
//! Both selectors are pure functions of `(params, graph_index, timestep,
//! point)`: the FLOP accounting re-runs them and must land on the same
//! counts the kernel executed.

use std::f64::consts::{PI, TAU};

use dagbench_random::uniform_f64;
use dagbench_types::{DistType, KernelParams};

/// Iteration count for `load_imbalance`:
/// `round(iterations * (1 + (u - 0.5) * imbalance))` with `u` drawn from
/// the stable oracle keyed by `(graph_index, timestep, point)`.
pub fn select_imbalance_iterations(
    params: &KernelParams,
    graph_index: i64,
    timestep: i64,
    point: i64,
) -> i64 {
    let u = uniform_f64(&[graph_index, timestep, point]);
    let scaled = (1.0 + (u - 0.5) * params.imbalance) * params.iterations as f64;
    (scaled.round() as i64).max(0)
}

/// Iteration count for `dist_imbalance`, drawn from the configured
/// distribution with `-iter` as the baseline (uniform minimum, normal
/// mean, cauchy median, gamma offset). Negative draws clamp to zero.
pub fn select_dist_iterations(
    params: &KernelParams,
    graph_index: i64,
    timestep: i64,
    point: i64,
) -> i64 {
    let d = &params.dist;
    let base = params.iterations as f64;
    let draw = |k: i64| uniform_f64(&[graph_index, timestep, point, k]);

    let value = match d.dist {
        DistType::Uniform => base + draw(0) * (d.max - params.iterations) as f64,
        DistType::Normal => {
            // Box-Muller over two independent oracle draws.
            let u1 = draw(0).max(1e-300);
            let u2 = draw(1);
            let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
            base + z * d.std_dev as f64
        }
        DistType::Gamma => {
            // Integer-shape gamma: sum of `alpha` exponentials, scale `beta`.
            let mut sum = 0.0;
            for k in 0..d.alpha {
                sum -= draw(k).max(1e-300).ln();
            }
            base + d.beta * sum
        }
        DistType::Cauchy => base + d.beta * (PI * (draw(0) - 0.5)).tan(),
    };

    (value.round() as i64).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dagbench_types::{DistParams, KernelType};

    fn imbalance_params(iterations: i64, imbalance: f64) -> KernelParams {
        KernelParams {
            kind: KernelType::LoadImbalance,
            iterations,
            imbalance,
            ..KernelParams::default()
        }
    }

    fn dist_params(iterations: i64, dist: DistParams) -> KernelParams {
        KernelParams {
            kind: KernelType::DistImbalance,
            iterations,
            dist,
            ..KernelParams::default()
        }
    }

    #[test]
    fn test_imbalance_deterministic() {
        let p = imbalance_params(1000, 1.0);
        let a = select_imbalance_iterations(&p, 2, 7, 13);
        let b = select_imbalance_iterations(&p, 2, 7, 13);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_imbalance_is_exact() {
        let p = imbalance_params(1000, 0.0);
        for point in 0..32 {
            assert_eq!(select_imbalance_iterations(&p, 0, 0, point), 1000);
        }
    }

    #[test]
    fn test_imbalance_stays_in_band() {
        // imbalance 2.0 scales by (1 + (u - 0.5) * 2) in (0, 2).
        let p = imbalance_params(1000, 2.0);
        for point in 0..256 {
            let it = select_imbalance_iterations(&p, 1, 3, point);
            assert!((0..=2000).contains(&it), "iterations {it} out of band");
        }
    }

    #[test]
    fn test_imbalance_varies_across_points() {
        let p = imbalance_params(1000, 1.0);
        let counts: Vec<i64> = (0..16)
            .map(|point| select_imbalance_iterations(&p, 0, 0, point))
            .collect();
        assert!(counts.iter().any(|&c| c != counts[0]));
    }

    #[test]
    fn test_uniform_dist_band() {
        let p = dist_params(
            100,
            DistParams {
                max: 300,
                ..DistParams::default()
            },
        );
        for point in 0..256 {
            let it = select_dist_iterations(&p, 0, 1, point);
            assert!((100..=300).contains(&it), "iterations {it} out of band");
        }
    }

    #[test]
    fn test_normal_dist_deterministic_and_clamped() {
        let p = dist_params(
            10,
            DistParams {
                dist: DistType::Normal,
                std_dev: 50,
                ..DistParams::default()
            },
        );
        for point in 0..256 {
            let a = select_dist_iterations(&p, 0, 0, point);
            assert_eq!(a, select_dist_iterations(&p, 0, 0, point));
            assert!(a >= 0);
        }
    }

    #[test]
    fn test_gamma_dist_offsets_base() {
        let p = dist_params(
            100,
            DistParams {
                dist: DistType::Gamma,
                alpha: 2,
                beta: 2.0,
                ..DistParams::default()
            },
        );
        for point in 0..64 {
            assert!(select_dist_iterations(&p, 0, 0, point) >= 100);
        }
    }

    #[test]
    fn test_cauchy_dist_deterministic() {
        let p = dist_params(
            100,
            DistParams {
                dist: DistType::Cauchy,
                beta: 5.0,
                ..DistParams::default()
            },
        );
        let a = select_dist_iterations(&p, 3, 1, 4);
        assert_eq!(a, select_dist_iterations(&p, 3, 1, 4));
        assert!(a >= 0);
    }
}
