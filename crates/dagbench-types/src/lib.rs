// ─────────────────────────────────────────────────────────────────────
// Dagbench — Task-Graph Benchmark Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, parameter records, and error hierarchy for the
//! dagbench task-graph benchmarking core.

pub mod error;
pub mod kernel;
pub mod pattern;
pub mod stamp;

pub use error::{DagbenchError, DagbenchResult};
pub use kernel::{DistParams, DistType, KernelParams, KernelType};
pub use pattern::DependenceType;
pub use stamp::{Stamp, SCRATCH_MAGIC, STAMP_BYTES};
