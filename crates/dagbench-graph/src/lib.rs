// ─────────────────────────────────────────────────────────────────────
// Dagbench — Task-Graph Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! The task-graph core: closed-form dependency oracle, per-point
//! execute-and-verify entry, heterogeneous output-size planner, and
//! analytic work accounting.
//!
//! The core is stateless and re-entrant: every entry point is a pure
//! function of its arguments and an immutable [`TaskGraph`]. Drivers may
//! call it from any number of threads at once as long as per-invocation
//! output/input/scratch buffers are disjoint. Graphs are never
//! materialized; dependency queries cost O(out-degree).
//!
//! # Verification Invariants
//!
//! 1. **Forward and reverse dependencies are exact mirrors**:
//!    `p ∈ deps(dset, q) ⇔ q ∈ rdeps(dset, p)` for every pair in the
//!    active window, including the randomized patterns (both views hash
//!    the same `(producer, consumer)` key).
//! 2. **Every buffer is provably routed**: outputs are stamped with
//!    their producing `(timestep, point)`; consumers re-derive their
//!    expected producers and check every 16-byte record, so a misrouted
//!    or stale buffer is caught one timestep after the mistake.
//! 3. **Scratch is provably initialized**: `prepare_scratch` tags the
//!    region with a magic word that `execute_point` re-checks.

pub mod accounting;
pub mod execute;
pub mod graph;
pub mod planner;

pub use accounting::{count_bytes, count_bytes_per_task, count_flops, count_flops_per_task};
pub use execute::executed_graph_mask;
pub use graph::{Interval, TaskGraph};
