// ─────────────────────────────────────────────────────────────────────
// Dagbench — Configuration and Reporting
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Multi-graph configuration for the dagbench core.
//!
//! A driver hands its command line to [`App::parse`] and receives one
//! or more fully validated, immutable task-graph descriptors plus the
//! reporting knobs (`-nodes`, verbosity). Sub-specifications separated
//! by `-and` configure independent graphs. Unrecognized arguments are
//! skipped so runtime adapters can carry their own flags on the same
//! command line.

pub mod app;
pub mod report;

pub use app::App;
