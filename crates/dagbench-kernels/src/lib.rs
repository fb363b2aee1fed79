// ─────────────────────────────────────────────────────────────────────
// Dagbench — Kernel Bank
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Microbenchmark kernels executed once per `(timestep, point)`.
//!
//! Each kernel performs a configurable quantity of compute or memory
//! work against the caller's scratch region. Work quantities are
//! deterministic functions of the kernel parameters (and, for the
//! imbalance variants, of the stable random oracle), so the analytic
//! FLOP/byte accounting stays in lockstep with what actually runs.
//! Bit-level results are irrelevant; `black_box` only keeps the
//! optimizer from deleting the loops.

pub mod bank;
pub mod imbalance;

pub use bank::execute_kernel;
pub use imbalance::{select_dist_iterations, select_imbalance_iterations};
