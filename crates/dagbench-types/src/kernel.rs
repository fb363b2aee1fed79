// ─────────────────────────────────────────────────────────────────────
// Dagbench — Kernel and Distribution Parameters
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{DagbenchError, DagbenchResult};

/// Microbenchmark kernel executed once per `(timestep, point)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelType {
    Empty,
    BusyWait,
    MemoryBound,
    ComputeDgemm,
    MemoryDaxpy,
    ComputeBound,
    ComputeBound2,
    IoBound,
    LoadImbalance,
    DistImbalance,
    ComputeAndMem,
}

impl KernelType {
    pub const ALL: [KernelType; 11] = [
        KernelType::Empty,
        KernelType::BusyWait,
        KernelType::MemoryBound,
        KernelType::ComputeDgemm,
        KernelType::MemoryDaxpy,
        KernelType::ComputeBound,
        KernelType::ComputeBound2,
        KernelType::IoBound,
        KernelType::LoadImbalance,
        KernelType::DistImbalance,
        KernelType::ComputeAndMem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KernelType::Empty => "empty",
            KernelType::BusyWait => "busy_wait",
            KernelType::MemoryBound => "memory_bound",
            KernelType::ComputeDgemm => "compute_dgemm",
            KernelType::MemoryDaxpy => "memory_daxpy",
            KernelType::ComputeBound => "compute_bound",
            KernelType::ComputeBound2 => "compute_bound2",
            KernelType::IoBound => "io_bound",
            KernelType::LoadImbalance => "load_imbalance",
            KernelType::DistImbalance => "dist_imbalance",
            KernelType::ComputeAndMem => "compute_and_mem",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Kernels that operate on a driver-provided scratch region.
    pub fn uses_scratch(self) -> bool {
        matches!(
            self,
            KernelType::MemoryBound
                | KernelType::ComputeDgemm
                | KernelType::MemoryDaxpy
                | KernelType::ComputeAndMem
        )
    }

    /// Kernels that walk scratch in `samples` equal chunks.
    pub fn walks_samples(self) -> bool {
        matches!(
            self,
            KernelType::MemoryBound | KernelType::MemoryDaxpy | KernelType::ComputeAndMem
        )
    }
}

/// Statistical distribution for the `dist_imbalance` kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistType {
    Uniform,
    Normal,
    Gamma,
    Cauchy,
}

impl DistType {
    pub const ALL: [DistType; 4] = [
        DistType::Uniform,
        DistType::Normal,
        DistType::Gamma,
        DistType::Cauchy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DistType::Uniform => "uniform",
            DistType::Normal => "normal",
            DistType::Gamma => "gamma",
            DistType::Cauchy => "cauchy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }
}

/// Parameters of the iteration-count distribution.
///
/// `max` applies to `uniform`, `std_dev` to `normal`, `alpha` and `beta`
/// to `gamma`, `beta` alone to `cauchy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistParams {
    pub dist: DistType,
    pub max: i64,
    pub std_dev: i64,
    pub alpha: i64,
    pub beta: f64,
}

impl Default for DistParams {
    fn default() -> Self {
        Self {
            dist: DistType::Uniform,
            max: 0,
            std_dev: 0,
            alpha: 0,
            beta: 0.0,
        }
    }
}

/// Full kernel configuration for one task graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelParams {
    pub kind: KernelType,
    /// Baseline iteration count; minimum/center of the imbalance variants.
    pub iterations: i64,
    /// Number of scratch chunks walked by the memory-class kernels.
    pub samples: i32,
    /// Load imbalance as a fraction of `iterations`, in [0, 2].
    pub imbalance: f64,
    /// Fraction of iterations spent on memory traffic (`compute_and_mem`).
    pub fraction_mem: f64,
    pub dist: DistParams,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            kind: KernelType::Empty,
            iterations: 0,
            samples: 16,
            imbalance: 0.0,
            fraction_mem: 0.0,
            dist: DistParams::default(),
        }
    }
}

impl KernelParams {
    /// Validate the parameter combination for the selected kernel.
    pub fn validate(&self) -> DagbenchResult<()> {
        if self.kind == KernelType::DistImbalance {
            match self.dist.dist {
                DistType::Uniform => {
                    if self.dist.max < self.iterations {
                        return Err(DagbenchError::Config(format!(
                            "uniform distribution requires a maximum >= the minimum \
                             given by -iter, got max {} < {}",
                            self.dist.max, self.iterations
                        )));
                    }
                }
                DistType::Normal => {
                    if self.dist.std_dev <= 0 {
                        return Err(DagbenchError::Config(
                            "normal distribution requires a standard deviation > 0"
                                .to_string(),
                        ));
                    }
                }
                DistType::Gamma => {
                    if self.dist.alpha <= 0 {
                        return Err(DagbenchError::Config(
                            "gamma distribution requires a shape alpha > 0".to_string(),
                        ));
                    }
                }
                DistType::Cauchy => {
                    if self.dist.beta <= 0.0 {
                        return Err(DagbenchError::Config(
                            "cauchy distribution requires a scale b > 0".to_string(),
                        ));
                    }
                }
            }
        }
        if self.kind.walks_samples() && self.samples < 1 {
            return Err(DagbenchError::Config(format!(
                "kernel \"{}\" requires -sample >= 1, got {}",
                self.kind.name(),
                self.samples
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_name_round_trip() {
        for k in KernelType::ALL {
            assert_eq!(KernelType::from_name(k.name()), Some(k));
        }
    }

    #[test]
    fn test_dist_name_round_trip() {
        for d in DistType::ALL {
            assert_eq!(DistType::from_name(d.name()), Some(d));
        }
    }

    #[test]
    fn test_scratch_kernel_classes() {
        assert!(KernelType::MemoryBound.uses_scratch());
        assert!(KernelType::ComputeDgemm.uses_scratch());
        assert!(!KernelType::ComputeDgemm.walks_samples());
        assert!(!KernelType::ComputeBound.uses_scratch());
    }

    #[test]
    fn test_default_kernel_is_empty() {
        let k = KernelParams::default();
        assert_eq!(k.kind, KernelType::Empty);
        assert_eq!(k.iterations, 0);
        assert_eq!(k.samples, 16);
        assert!(k.validate().is_ok());
    }

    #[test]
    fn test_dist_imbalance_requires_params() {
        let mut k = KernelParams {
            kind: KernelType::DistImbalance,
            iterations: 100,
            ..KernelParams::default()
        };
        // Default uniform max of 0 is below the 100-iteration minimum.
        assert!(k.validate().is_err());
        k.dist.max = 200;
        assert!(k.validate().is_ok());

        k.dist.dist = DistType::Normal;
        assert!(k.validate().is_err());
        k.dist.std_dev = 10;
        assert!(k.validate().is_ok());

        k.dist.dist = DistType::Gamma;
        assert!(k.validate().is_err());
        k.dist.alpha = 2;
        assert!(k.validate().is_ok());

        k.dist.dist = DistType::Cauchy;
        assert!(k.validate().is_err());
        k.dist.beta = 1.5;
        assert!(k.validate().is_ok());
    }

    #[test]
    fn test_sample_chunk_kernels_reject_zero_samples() {
        let k = KernelParams {
            kind: KernelType::MemoryBound,
            samples: 0,
            ..KernelParams::default()
        };
        assert!(k.validate().is_err());
    }
}
