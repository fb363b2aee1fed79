// ─────────────────────────────────────────────────────────────────────
// Dagbench — Task-Graph Descriptor and Dependency Oracle
// ─────────────────────────────────────────────────────────────────────
//! The graph descriptor and its closed-form dependency oracle.
//!
//! A [`TaskGraph`] is a parameterized family of DAG edges, never an
//! adjacency list. Given a dependence set and a point, the oracle
//! answers "which earlier-timestep points feed this one" (and the
//! reverse) as a list of inclusive intervals, coalesced into maximal
//! runs of consecutive peers.

use serde::{Deserialize, Serialize};

use dagbench_random::uniform_f64;
use dagbench_types::{DependenceType, KernelParams};

/// Inclusive `[lo, hi]` run of peer points.
pub type Interval = (i64, i64);

/// Immutable descriptor of one task graph.
///
/// Built by configuration, then read-only: the oracle, the planner
/// table, and the execute entry all hang off this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskGraph {
    /// Unique small index; disambiguates graphs and salts the oracle.
    pub graph_index: i64,
    /// Height of the graph.
    pub timesteps: i64,
    /// Maximum number of points at any timestep.
    pub max_width: i64,
    pub dependence: DependenceType,
    /// Maximum dependency count for nearest/spread/random patterns.
    pub radix: i64,
    /// Rotation period for patterns with multiple dependence sets.
    pub period: i64,
    /// Edge-inclusion probability for random patterns.
    pub fraction_connected: f64,
    pub kernel: KernelParams,
    /// Per-point output budget in bytes; baseline for the planner.
    pub output_bytes_per_task: usize,
    pub scratch_bytes_per_task: usize,
    /// Field count for drivers that rotate buffers modulo `nb_fields`;
    /// 0 until finalized, then defaults to `timesteps`.
    pub nb_fields: i64,
    /// Output-size distribution: 0 uniform, 1 fixed normal, 2 random
    /// normal, 3 gamma.
    pub output_case: i32,
    pub onormal_mu: f64,
    pub onormal_std: f64,
    pub ogamma_alpha: f64,
    pub ogamma_beta: f64,
    /// Planned per-cell output sizes, `[timesteps][max_width]`; cells
    /// outside the active window are zero.
    pub output_bytes_size: Vec<Vec<usize>>,
}

impl TaskGraph {
    /// Descriptor with default parameters for the given index.
    pub fn with_index(graph_index: i64) -> Self {
        Self {
            graph_index,
            timesteps: 4,
            max_width: 4,
            dependence: DependenceType::Trivial,
            radix: 3,
            period: 0,
            fraction_connected: 0.25,
            kernel: KernelParams::default(),
            output_bytes_per_task: 16,
            scratch_bytes_per_task: 0,
            nb_fields: 0,
            output_case: 0,
            onormal_mu: 2.0,
            onormal_std: 2.0,
            ogamma_alpha: 2.0,
            ogamma_beta: 2.0,
            output_bytes_size: Vec::new(),
        }
    }

    /// First active point at `timestep`; 0 for negative timesteps.
    pub fn offset_at_timestep(&self, timestep: i64) -> i64 {
        if timestep < 0 {
            return 0;
        }
        match self.dependence {
            DependenceType::Trivial
            | DependenceType::NoComm
            | DependenceType::Stencil1d
            | DependenceType::Stencil1dPeriodic => 0,
            DependenceType::Dom => (timestep + self.max_width - self.timesteps).max(0),
            DependenceType::Tree
            | DependenceType::Fft
            | DependenceType::AllToAll
            | DependenceType::Nearest
            | DependenceType::Spread
            | DependenceType::RandomNearest
            | DependenceType::RandomSpread => 0,
        }
    }

    /// Number of active points at `timestep`; 0 for negative timesteps.
    pub fn width_at_timestep(&self, timestep: i64) -> i64 {
        if timestep < 0 {
            return 0;
        }
        match self.dependence {
            DependenceType::Trivial
            | DependenceType::NoComm
            | DependenceType::Stencil1d
            | DependenceType::Stencil1dPeriodic => self.max_width,
            DependenceType::Dom => self
                .max_width
                .min((timestep + 1).min(self.timesteps - timestep)),
            DependenceType::Tree => self.max_width.min(1i64 << timestep.min(62)),
            DependenceType::Fft
            | DependenceType::AllToAll
            | DependenceType::Nearest
            | DependenceType::Spread
            | DependenceType::RandomNearest
            | DependenceType::RandomSpread => self.max_width,
        }
    }

    /// Number of distinct dependency relations this pattern rotates
    /// through.
    pub fn max_dependence_sets(&self) -> i64 {
        match self.dependence {
            DependenceType::Trivial
            | DependenceType::NoComm
            | DependenceType::Stencil1d
            | DependenceType::Stencil1dPeriodic
            | DependenceType::Dom
            | DependenceType::Tree => 1,
            DependenceType::Fft => (self.max_width as f64).log2().ceil() as i64,
            DependenceType::AllToAll | DependenceType::Nearest => 1,
            DependenceType::Spread
            | DependenceType::RandomNearest
            | DependenceType::RandomSpread => self.period,
        }
    }

    /// Period after which the dependence pattern repeats.
    ///
    /// For all the dependence types currently defined, the pattern
    /// repeats with a period equal to the number of dependence sets.
    pub fn timestep_period(&self) -> i64 {
        self.max_dependence_sets()
    }

    /// Which dependence set applies at `timestep`.
    pub fn dependence_set_at_timestep(&self, timestep: i64) -> i64 {
        match self.dependence {
            DependenceType::Trivial
            | DependenceType::NoComm
            | DependenceType::Stencil1d
            | DependenceType::Stencil1dPeriodic
            | DependenceType::Dom
            | DependenceType::Tree => 0,
            DependenceType::Fft => {
                let dsets = self.max_dependence_sets();
                (timestep + dsets - 1) % dsets
            }
            DependenceType::AllToAll | DependenceType::Nearest => 0,
            DependenceType::Spread
            | DependenceType::RandomNearest
            | DependenceType::RandomSpread => timestep % self.max_dependence_sets(),
        }
    }

    /// Upper bound on the number of intervals `dependencies` returns;
    /// lets callers reserve capacity without materializing anything.
    pub fn num_dependencies(&self, _dset: i64, _point: i64) -> usize {
        match self.dependence {
            DependenceType::Trivial => 0,
            DependenceType::NoComm | DependenceType::Stencil1d => 1,
            DependenceType::Stencil1dPeriodic => {
                if self.max_width > 1 {
                    2
                } else {
                    3
                }
            }
            DependenceType::Dom | DependenceType::Tree => 1,
            DependenceType::Fft => 3,
            DependenceType::AllToAll => 1,
            DependenceType::Nearest => {
                if self.radix > 0 {
                    1
                } else {
                    0
                }
            }
            DependenceType::Spread | DependenceType::RandomNearest => self.radix as usize,
            DependenceType::RandomSpread => {
                panic!("dependence type \"random_spread\" has no dependency generator")
            }
        }
    }

    /// Upper bound on the number of intervals `reverse_dependencies`
    /// returns.
    pub fn num_reverse_dependencies(&self, dset: i64, point: i64) -> usize {
        // The interval-count bounds coincide for every defined pattern.
        self.num_dependencies(dset, point)
    }

    /// Earlier-timestep points that `point` consumes under `dset`, as
    /// coalesced inclusive intervals.
    pub fn dependencies(&self, dset: i64, point: i64) -> Vec<Interval> {
        let w = self.max_width;
        match self.dependence {
            DependenceType::Trivial => Vec::new(),
            DependenceType::NoComm => vec![(point, point)],
            DependenceType::Stencil1d => {
                vec![((point - 1).max(0), (point + 1).min(w - 1))]
            }
            DependenceType::Stencil1dPeriodic => {
                let mut deps = vec![((point - 1).max(0), (point + 1).min(w - 1))];
                if point - 1 < 0 {
                    // Wrap around the low edge.
                    deps.push((w - 1, w - 1));
                }
                if point + 1 >= w {
                    // Wrap around the high edge.
                    deps.push((0, 0));
                }
                deps
            }
            DependenceType::Dom => vec![((point - 1).max(0), point)],
            DependenceType::Tree => {
                let parent = point / 2;
                vec![(parent, parent)]
            }
            DependenceType::Fft => {
                let mut deps = Vec::with_capacity(3);
                let stride = 1i64 << dset;
                if point - stride >= 0 {
                    deps.push((point - stride, point - stride));
                }
                deps.push((point, point));
                if point + stride < w {
                    deps.push((point + stride, point + stride));
                }
                deps
            }
            DependenceType::AllToAll => vec![(0, w - 1)],
            DependenceType::Nearest => {
                if self.radix > 0 {
                    vec![(
                        (point - self.radix / 2).max(0),
                        (point + (self.radix - 1) / 2).min(w - 1),
                    )]
                } else {
                    Vec::new()
                }
            }
            DependenceType::Spread => {
                let mut deps = Vec::with_capacity(self.radix as usize);
                for i in 0..self.radix {
                    let skip = if i > 0 { dset } else { 0 };
                    let dep = (point + i * w / self.radix + skip) % w;
                    deps.push((dep, dep));
                }
                deps
            }
            DependenceType::RandomNearest => {
                let first = (point - self.radix / 2).max(0);
                let last = (point + (self.radix - 1) / 2).min(w - 1);
                self.random_runs(dset, first, last, |peer| (peer, point))
            }
            DependenceType::RandomSpread => {
                panic!("dependence type \"random_spread\" has no dependency generator")
            }
        }
    }

    /// Later-timestep points that consume `point` under `dset`; the
    /// exact transpose of [`TaskGraph::dependencies`].
    pub fn reverse_dependencies(&self, dset: i64, point: i64) -> Vec<Interval> {
        let w = self.max_width;
        match self.dependence {
            DependenceType::Trivial => Vec::new(),
            DependenceType::NoComm => vec![(point, point)],
            DependenceType::Stencil1d => {
                vec![((point - 1).max(0), (point + 1).min(w - 1))]
            }
            DependenceType::Stencil1dPeriodic => {
                let mut deps = vec![((point - 1).max(0), (point + 1).min(w - 1))];
                if point - 1 < 0 {
                    deps.push((w - 1, w - 1));
                }
                if point + 1 >= w {
                    deps.push((0, 0));
                }
                deps
            }
            DependenceType::Dom => vec![(point, (point + 1).min(w - 1))],
            DependenceType::Tree => {
                let child1 = point * 2;
                let child2 = point * 2 + 1;
                if child1 < w && child2 < w {
                    vec![(child1, child2)]
                } else if child1 < w {
                    vec![(child1, child1)]
                } else {
                    Vec::new()
                }
            }
            DependenceType::Fft => {
                let mut deps = Vec::with_capacity(3);
                let stride = 1i64 << dset;
                if point - stride >= 0 {
                    deps.push((point - stride, point - stride));
                }
                deps.push((point, point));
                if point + stride < w {
                    deps.push((point + stride, point + stride));
                }
                deps
            }
            DependenceType::AllToAll => vec![(0, w - 1)],
            DependenceType::Nearest => {
                if self.radix > 0 {
                    vec![(
                        (point - (self.radix - 1) / 2).max(0),
                        (point + self.radix / 2).min(w - 1),
                    )]
                } else {
                    Vec::new()
                }
            }
            DependenceType::Spread => {
                let mut deps = Vec::with_capacity(self.radix as usize);
                for i in 0..self.radix {
                    let skip = if i > 0 { dset } else { 0 };
                    let dep = (point - i * w / self.radix - skip).rem_euclid(w);
                    deps.push((dep, dep));
                }
                deps
            }
            DependenceType::RandomNearest => {
                let first = (point - (self.radix - 1) / 2).max(0);
                let last = (point + self.radix / 2).min(w - 1);
                self.random_runs(dset, first, last, |peer| (point, peer))
            }
            DependenceType::RandomSpread => {
                panic!("dependence type \"random_spread\" has no dependency generator")
            }
        }
    }

    /// Scan `[first, last]` and coalesce oracle-included peers into
    /// maximal runs. `key_pair` orders the `(producer, consumer)` words
    /// of the hash key, which is what makes the forward and reverse
    /// views agree draw-for-draw.
    fn random_runs(
        &self,
        dset: i64,
        first: i64,
        last: i64,
        key_pair: impl Fn(i64) -> (i64, i64),
    ) -> Vec<Interval> {
        let mut deps = Vec::new();
        let mut run_start = -1i64;
        for peer in first..=last {
            let (producer, consumer) = key_pair(peer);
            let u = uniform_f64(&[self.graph_index, self.radix, dset, producer, consumer]);
            let include =
                u < self.fraction_connected || (self.radix > 0 && producer == consumer);
            if include {
                if run_start < 0 {
                    run_start = peer;
                }
            } else if run_start >= 0 {
                deps.push((run_start, peer - 1));
                run_start = -1;
            }
        }
        if run_start >= 0 {
            deps.push((run_start, last));
        }
        deps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn graph(dependence: DependenceType, timesteps: i64, max_width: i64) -> TaskGraph {
        TaskGraph {
            dependence,
            timesteps,
            max_width,
            ..TaskGraph::with_index(0)
        }
    }

    fn flatten(intervals: &[Interval]) -> Vec<i64> {
        intervals
            .iter()
            .flat_map(|&(lo, hi)| lo..=hi)
            .collect()
    }

    /// Materialize the forward relation and assert the reverse relation
    /// is its exact transpose, with no duplicate edges on either side.
    fn assert_mirror(g: &TaskGraph) {
        for dset in 0..g.max_dependence_sets() {
            let mut forward: BTreeMap<i64, BTreeSet<i64>> = BTreeMap::new();
            for point in 0..g.max_width {
                let deps = flatten(&g.dependencies(dset, point));
                let set: BTreeSet<i64> = deps.iter().copied().collect();
                assert_eq!(deps.len(), set.len(), "duplicate deps for point {point}");
                forward.insert(point, set);
            }
            for point in 0..g.max_width {
                let rdeps = flatten(&g.reverse_dependencies(dset, point));
                let set: BTreeSet<i64> = rdeps.iter().copied().collect();
                assert_eq!(rdeps.len(), set.len(), "duplicate rdeps for point {point}");
                for consumer in &set {
                    assert!(
                        forward[consumer].contains(&point),
                        "rdep ({point} -> {consumer}) missing from forward view"
                    );
                }
                for (consumer, deps) in &forward {
                    assert_eq!(
                        deps.contains(&point),
                        set.contains(consumer),
                        "asymmetry at dset {dset}, producer {point}, consumer {consumer}"
                    );
                }
            }
        }
    }

    // ── window tests ──────────────────────────────────────────────

    #[test]
    fn test_negative_timestep_is_empty() {
        let g = graph(DependenceType::Stencil1d, 4, 5);
        assert_eq!(g.offset_at_timestep(-1), 0);
        assert_eq!(g.width_at_timestep(-1), 0);
    }

    #[test]
    fn test_window_invariant_all_types() {
        for dependence in DependenceType::ALL {
            let mut g = graph(dependence, 6, 8);
            if dependence.needs_period() || dependence == DependenceType::RandomSpread {
                g.period = 2;
            }
            for t in 0..g.timesteps {
                let offset = g.offset_at_timestep(t);
                let width = g.width_at_timestep(t);
                assert!(offset >= 0 && width >= 0);
                assert!(
                    offset + width <= g.max_width,
                    "window overflow for {} at t={t}",
                    dependence.name()
                );
            }
        }
    }

    #[test]
    fn test_dom_window_grows_then_shrinks() {
        let g = graph(DependenceType::Dom, 7, 4);
        let widths: Vec<i64> = (0..7).map(|t| g.width_at_timestep(t)).collect();
        assert_eq!(widths, vec![1, 2, 3, 4, 3, 2, 1]);
        let offsets: Vec<i64> = (0..7).map(|t| g.offset_at_timestep(t)).collect();
        assert_eq!(offsets, vec![0, 0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_tree_window_doubles() {
        let g = graph(DependenceType::Tree, 5, 12);
        let widths: Vec<i64> = (0..5).map(|t| g.width_at_timestep(t)).collect();
        assert_eq!(widths, vec![1, 2, 4, 8, 12]);
    }

    // ── dependence-set rotation ───────────────────────────────────

    #[test]
    fn test_fft_dependence_sets() {
        let g = graph(DependenceType::Fft, 6, 8);
        assert_eq!(g.max_dependence_sets(), 3);
        assert_eq!(g.timestep_period(), 3);
        // Rotation starts one set behind so timestep 1 uses set 0.
        let dsets: Vec<i64> = (0..6).map(|t| g.dependence_set_at_timestep(t)).collect();
        assert_eq!(dsets, vec![2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_spread_dependence_sets_rotate_with_period() {
        let mut g = graph(DependenceType::Spread, 6, 8);
        g.radix = 2;
        g.period = 3;
        assert_eq!(g.max_dependence_sets(), 3);
        let dsets: Vec<i64> = (0..6).map(|t| g.dependence_set_at_timestep(t)).collect();
        assert_eq!(dsets, vec![0, 1, 2, 0, 1, 2]);
    }

    // ── per-pattern dependency shapes ─────────────────────────────

    #[test]
    fn test_trivial_and_no_comm() {
        let g = graph(DependenceType::Trivial, 2, 4);
        assert!(g.dependencies(0, 1).is_empty());
        assert_eq!(g.num_dependencies(0, 1), 0);

        let g = graph(DependenceType::NoComm, 2, 4);
        assert_eq!(g.dependencies(0, 1), vec![(1, 1)]);
        assert_eq!(g.reverse_dependencies(0, 1), vec![(1, 1)]);
    }

    #[test]
    fn test_stencil_clips_at_edges() {
        let g = graph(DependenceType::Stencil1d, 2, 3);
        assert_eq!(g.dependencies(0, 0), vec![(0, 1)]);
        assert_eq!(g.dependencies(0, 1), vec![(0, 2)]);
        assert_eq!(g.dependencies(0, 2), vec![(1, 2)]);
    }

    #[test]
    fn test_periodic_stencil_wraps() {
        let g = graph(DependenceType::Stencil1dPeriodic, 2, 5);
        assert_eq!(g.dependencies(0, 0), vec![(0, 1), (4, 4)]);
        assert_eq!(g.dependencies(0, 4), vec![(3, 4), (0, 0)]);
        assert_eq!(g.dependencies(0, 2), vec![(1, 3)]);
    }

    #[test]
    fn test_dom_depends_on_left_neighbor() {
        let g = graph(DependenceType::Dom, 4, 4);
        assert_eq!(g.dependencies(0, 0), vec![(0, 0)]);
        assert_eq!(g.dependencies(0, 2), vec![(1, 2)]);
        assert_eq!(g.reverse_dependencies(0, 2), vec![(2, 3)]);
        assert_eq!(g.reverse_dependencies(0, 3), vec![(3, 3)]);
    }

    #[test]
    fn test_tree_parent_child() {
        let g = graph(DependenceType::Tree, 3, 4);
        assert_eq!(g.dependencies(0, 3), vec![(1, 1)]);
        assert_eq!(g.reverse_dependencies(0, 1), vec![(2, 3)]);
        // Leaf-level points have no children inside the width.
        assert_eq!(g.reverse_dependencies(0, 3), Vec::<Interval>::new());
    }

    #[test]
    fn test_fft_butterfly() {
        let g = graph(DependenceType::Fft, 3, 8);
        assert_eq!(g.dependencies(1, 3), vec![(1, 1), (3, 3), (5, 5)]);
        assert_eq!(g.dependencies(0, 0), vec![(0, 0), (1, 1)]);
        assert_eq!(g.dependencies(2, 7), vec![(3, 3), (7, 7)]);
    }

    #[test]
    fn test_all_to_all() {
        let g = graph(DependenceType::AllToAll, 2, 6);
        assert_eq!(g.dependencies(0, 3), vec![(0, 5)]);
        assert_eq!(g.reverse_dependencies(0, 3), vec![(0, 5)]);
    }

    #[test]
    fn test_nearest_window() {
        let mut g = graph(DependenceType::Nearest, 2, 5);
        g.radix = 3;
        assert_eq!(g.dependencies(0, 2), vec![(1, 3)]);
        assert_eq!(g.reverse_dependencies(0, 2), vec![(1, 3)]);
        // Asymmetric split for even radix.
        g.radix = 2;
        assert_eq!(g.dependencies(0, 2), vec![(1, 2)]);
        assert_eq!(g.reverse_dependencies(0, 2), vec![(2, 3)]);
    }

    #[test]
    fn test_nearest_zero_radix_is_empty() {
        let mut g = graph(DependenceType::Nearest, 2, 5);
        g.radix = 0;
        assert!(g.dependencies(0, 2).is_empty());
        assert_eq!(g.num_dependencies(0, 2), 0);
    }

    #[test]
    fn test_spread_singletons() {
        let mut g = graph(DependenceType::Spread, 4, 8);
        g.radix = 2;
        g.period = 3;
        // Peer offsets are floor(i * width / radix) plus the set skip.
        assert_eq!(g.dependencies(0, 1), vec![(1, 1), (5, 5)]);
        assert_eq!(g.dependencies(2, 1), vec![(1, 1), (7, 7)]);
        // Wraparound stays in range.
        assert_eq!(g.dependencies(2, 7), vec![(7, 7), (5, 5)]);
    }

    // ── mirror symmetry across the board ──────────────────────────

    #[test]
    fn test_forward_reverse_mirror_deterministic_patterns() {
        for dependence in [
            DependenceType::Trivial,
            DependenceType::NoComm,
            DependenceType::Stencil1d,
            DependenceType::Stencil1dPeriodic,
            DependenceType::Dom,
            DependenceType::Tree,
            DependenceType::Fft,
            DependenceType::AllToAll,
        ] {
            assert_mirror(&graph(dependence, 6, 8));
        }
    }

    #[test]
    fn test_forward_reverse_mirror_radix_patterns() {
        for radix in [0, 1, 2, 3, 5] {
            let mut g = graph(DependenceType::Nearest, 6, 8);
            g.radix = radix;
            assert_mirror(&g);
        }
        let mut g = graph(DependenceType::Spread, 6, 8);
        g.radix = 3;
        g.period = 2;
        assert_mirror(&g);
    }

    #[test]
    fn test_forward_reverse_mirror_random_nearest() {
        for fraction in [0.0, 0.3, 0.5, 0.9, 1.0] {
            let mut g = graph(DependenceType::RandomNearest, 6, 16);
            g.radix = 5;
            g.period = 3;
            g.fraction_connected = fraction;
            assert_mirror(&g);
        }
    }

    #[test]
    fn test_random_nearest_deterministic() {
        let mut g = graph(DependenceType::RandomNearest, 4, 5);
        g.radix = 3;
        g.period = 1;
        g.fraction_connected = 0.5;
        let a = g.dependencies(0, 2);
        let b = g.dependencies(0, 2);
        assert_eq!(a, b);
        // Every returned peer must see `point` in its reverse view.
        for peer in flatten(&a) {
            assert!(
                flatten(&g.reverse_dependencies(0, peer)).contains(&2),
                "peer {peer} does not mirror point 2"
            );
        }
    }

    #[test]
    fn test_random_nearest_self_edge_always_present() {
        let mut g = graph(DependenceType::RandomNearest, 4, 8);
        g.radix = 3;
        g.period = 1;
        g.fraction_connected = 0.0;
        for point in 0..8 {
            assert_eq!(g.dependencies(0, point), vec![(point, point)]);
        }
    }

    #[test]
    fn test_random_nearest_full_fraction_coalesces() {
        let mut g = graph(DependenceType::RandomNearest, 4, 8);
        g.radix = 3;
        g.period = 1;
        g.fraction_connected = 1.0;
        // Everything included: one maximal run identical to `nearest`.
        assert_eq!(g.dependencies(0, 3), vec![(2, 4)]);
        assert_eq!(g.dependencies(0, 0), vec![(0, 1)]);
    }

    #[test]
    #[should_panic(expected = "random_spread")]
    fn test_random_spread_has_no_generator() {
        let mut g = graph(DependenceType::RandomSpread, 4, 8);
        g.radix = 2;
        g.period = 2;
        g.dependencies(0, 0);
    }

    #[test]
    fn test_interval_capacity_bounds_hold() {
        let mut g = graph(DependenceType::RandomNearest, 4, 16);
        g.radix = 5;
        g.period = 2;
        g.fraction_connected = 0.5;
        for dset in 0..2 {
            for point in 0..16 {
                assert!(g.dependencies(dset, point).len() <= g.num_dependencies(dset, point));
                assert!(
                    g.reverse_dependencies(dset, point).len()
                        <= g.num_reverse_dependencies(dset, point)
                );
            }
        }
    }
}
