// ─────────────────────────────────────────────────────────────────────
// Dagbench — Dependence Patterns
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Communication/computation pattern connecting one timestep to the next.
///
/// Each variant is a closed-form family of dependency edges; the graph
/// oracle evaluates them on demand without materializing the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependenceType {
    /// No dependencies at all.
    Trivial,
    /// Each point depends only on itself.
    NoComm,
    /// Three-point stencil clipped at the edges.
    #[serde(rename = "stencil_1d")]
    Stencil1d,
    /// Three-point stencil with wraparound at the edges.
    #[serde(rename = "stencil_1d_periodic")]
    Stencil1dPeriodic,
    /// Diamond-shaped wavefront (grows then shrinks).
    Dom,
    /// Binary tree: width doubles per timestep, child depends on parent.
    Tree,
    /// FFT butterfly with a stride that rotates through `log2(width)` sets.
    Fft,
    /// Every point depends on every point.
    AllToAll,
    /// Contiguous window of `radix` neighbors.
    Nearest,
    /// `radix` points spread evenly across the width, rotated per set.
    Spread,
    /// Random subset of the `nearest` window, chosen by the stable oracle.
    RandomNearest,
    /// Reserved; accepted by the parser but has no dependency generator.
    RandomSpread,
}

impl DependenceType {
    pub const ALL: [DependenceType; 12] = [
        DependenceType::Trivial,
        DependenceType::NoComm,
        DependenceType::Stencil1d,
        DependenceType::Stencil1dPeriodic,
        DependenceType::Dom,
        DependenceType::Tree,
        DependenceType::Fft,
        DependenceType::AllToAll,
        DependenceType::Nearest,
        DependenceType::Spread,
        DependenceType::RandomNearest,
        DependenceType::RandomSpread,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DependenceType::Trivial => "trivial",
            DependenceType::NoComm => "no_comm",
            DependenceType::Stencil1d => "stencil_1d",
            DependenceType::Stencil1dPeriodic => "stencil_1d_periodic",
            DependenceType::Dom => "dom",
            DependenceType::Tree => "tree",
            DependenceType::Fft => "fft",
            DependenceType::AllToAll => "all_to_all",
            DependenceType::Nearest => "nearest",
            DependenceType::Spread => "spread",
            DependenceType::RandomNearest => "random_nearest",
            DependenceType::RandomSpread => "random_spread",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    /// Patterns whose dependence sets rotate with a user-configured period.
    pub fn needs_period(self) -> bool {
        matches!(self, DependenceType::Spread | DependenceType::RandomNearest)
    }
}
