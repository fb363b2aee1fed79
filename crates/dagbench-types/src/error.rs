// ─────────────────────────────────────────────────────────────────────
// Dagbench — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all dagbench failures.
///
/// Driver contract violations (bad stamps, wrong scratch magic,
/// out-of-range points) are deliberately *not* represented here: they
/// are programmer errors in the calling runtime adapter and panic with
/// a diagnostic instead.
#[derive(Error, Debug)]
pub enum DagbenchError {
    /// Invalid or inconsistent benchmark configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Help was requested; the payload is the rendered help text.
    /// Drivers should print it and exit 0.
    #[error("{0}")]
    Help(String),
}

pub type DagbenchResult<T> = Result<T, DagbenchError>;
