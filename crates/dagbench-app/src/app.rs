// ─────────────────────────────────────────────────────────────────────
// Dagbench — Command-Line Configuration
// ─────────────────────────────────────────────────────────────────────

use std::collections::BTreeSet;
use std::fmt::Write as _;

use serde::Serialize;

use dagbench_graph::TaskGraph;
use dagbench_types::{DagbenchError, DagbenchResult, DependenceType, DistType, KernelType};

/// Parsed benchmark configuration: one or more task graphs plus
/// reporting options.
#[derive(Debug, Clone, Serialize)]
pub struct App {
    pub graphs: Vec<TaskGraph>,
    /// Node count used only for locality estimates in the report.
    pub nodes: i64,
    pub verbose: i32,
    pub enable_graph_validation: bool,
}

/// Parse state for the graph currently being configured.
///
/// `period` stays unset until finalization so patterns that need one
/// can default to 3 while everything else defaults to 0.
struct GraphBuilder {
    graph: TaskGraph,
    period: Option<i64>,
}

impl GraphBuilder {
    fn new(graph_index: i64) -> Self {
        Self {
            graph: TaskGraph::with_index(graph_index),
            period: None,
        }
    }

    fn finalize(self) -> DagbenchResult<TaskGraph> {
        let mut g = self.graph;
        g.period = self
            .period
            .unwrap_or(if g.dependence.needs_period() { 3 } else { 0 });
        if g.nb_fields == 0 {
            g.nb_fields = g.timesteps;
        }
        g.kernel.validate()?;
        g.allocate_output_bytes()?;
        Ok(g)
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> DagbenchResult<&'a str> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| DagbenchError::Config(format!("flag \"{flag}\" requires an argument")))
}

fn take_i64(args: &[String], i: &mut usize, flag: &str) -> DagbenchResult<i64> {
    let value = take_value(args, i, flag)?;
    value.parse().map_err(|_| {
        DagbenchError::Config(format!("invalid value \"{value}\" for flag \"{flag}\""))
    })
}

fn take_f64(args: &[String], i: &mut usize, flag: &str) -> DagbenchResult<f64> {
    let value = take_value(args, i, flag)?;
    value.parse().map_err(|_| {
        DagbenchError::Config(format!("invalid value \"{value}\" for flag \"{flag}\""))
    })
}

fn invalid(flag: &str, value: impl std::fmt::Display, constraint: &str) -> DagbenchError {
    DagbenchError::Config(format!(
        "invalid flag \"{flag} {value}\": must be {constraint}"
    ))
}

impl App {
    /// Parse a command line (without the program name) into a validated
    /// configuration.
    ///
    /// Unrecognized arguments are skipped: runtime adapters share the
    /// command line with the core and carry their own flags.
    pub fn parse(args: &[String]) -> DagbenchResult<App> {
        let mut app = App {
            graphs: Vec::new(),
            nodes: 0,
            verbose: 0,
            enable_graph_validation: true,
        };
        let mut builder = GraphBuilder::new(0);

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "-h" => return Err(DagbenchError::Help(render_help())),
                "-v" => app.verbose += 1,
                "-vv" => app.verbose += 2,
                "-skip-graph-validation" => app.enable_graph_validation = false,
                "-nodes" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    app.nodes = value;
                }
                "-steps" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.timesteps = value;
                }
                "-width" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.max_width = value;
                }
                "-type" => {
                    let name = take_value(args, &mut i, flag)?;
                    builder.graph.dependence = DependenceType::from_name(name)
                        .ok_or_else(|| invalid(flag, name, "a known dependence type"))?;
                }
                "-radix" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value < 0 {
                        return Err(invalid(flag, value, ">= 0"));
                    }
                    builder.graph.radix = value;
                }
                "-period" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value < 0 {
                        return Err(invalid(flag, value, ">= 0"));
                    }
                    builder.period = Some(value);
                }
                "-fraction" => {
                    let value = take_f64(args, &mut i, flag)?;
                    if !(0.0..=1.0).contains(&value) {
                        return Err(invalid(flag, value, ">= 0 and <= 1"));
                    }
                    builder.graph.fraction_connected = value;
                }
                "-kernel" => {
                    let name = take_value(args, &mut i, flag)?;
                    builder.graph.kernel.kind = KernelType::from_name(name)
                        .ok_or_else(|| invalid(flag, name, "a known kernel type"))?;
                }
                "-iter" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value < 0 {
                        return Err(invalid(flag, value, ">= 0"));
                    }
                    builder.graph.kernel.iterations = value;
                }
                "-output" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value < 16 || value % 16 != 0 {
                        return Err(invalid(flag, value, "a positive multiple of 16"));
                    }
                    builder.graph.output_bytes_per_task = value as usize;
                }
                "-scratch" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value < 0 || value % 8 != 0 {
                        return Err(invalid(flag, value, "a non-negative multiple of 8"));
                    }
                    builder.graph.scratch_bytes_per_task = value as usize;
                }
                "-sample" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value < 0 || value > i32::MAX as i64 {
                        return Err(invalid(flag, value, ">= 0"));
                    }
                    builder.graph.kernel.samples = value as i32;
                }
                "-imbalance" => {
                    let value = take_f64(args, &mut i, flag)?;
                    if !(0.0..=2.0).contains(&value) {
                        return Err(invalid(flag, value, ">= 0 and <= 2"));
                    }
                    builder.graph.kernel.imbalance = value;
                }
                "-mem-fraction" => {
                    let value = take_f64(args, &mut i, flag)?;
                    if !(0.0..=1.0).contains(&value) {
                        return Err(invalid(flag, value, ">= 0 and <= 1"));
                    }
                    builder.graph.kernel.fraction_mem = value;
                }
                "-dist" => {
                    let name = take_value(args, &mut i, flag)?;
                    builder.graph.kernel.dist.dist = DistType::from_name(name)
                        .ok_or_else(|| invalid(flag, name, "a known distribution type"))?;
                }
                "-dist-max" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.kernel.dist.max = value;
                }
                "-dist-std" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.kernel.dist.std_dev = value;
                }
                "-dist-alpha" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.kernel.dist.alpha = value;
                }
                "-dist-beta" => {
                    let value = take_f64(args, &mut i, flag)?;
                    if value <= 0.0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.kernel.dist.beta = value;
                }
                "-field" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.nb_fields = value;
                }
                "-output-case" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if !(0..=3).contains(&value) {
                        return Err(invalid(flag, value, "in 0..3"));
                    }
                    builder.graph.output_case = value as i32;
                }
                "-output-mean" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value < 0 {
                        return Err(invalid(flag, value, ">= 0"));
                    }
                    builder.graph.onormal_mu = value as f64;
                }
                "-output-std" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value < 0 {
                        return Err(invalid(flag, value, ">= 0"));
                    }
                    builder.graph.onormal_std = value as f64;
                }
                "-output-gamma-a" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.ogamma_alpha = value as f64;
                }
                "-output-gamma-b" => {
                    let value = take_i64(args, &mut i, flag)?;
                    if value <= 0 {
                        return Err(invalid(flag, value, "> 0"));
                    }
                    builder.graph.ogamma_beta = value as f64;
                }
                "-output-random" => builder.graph.output_case = 2,
                "-output-uniform" => builder.graph.output_case = 0,
                "-and" => {
                    app.graphs.push(builder.finalize()?);
                    builder = GraphBuilder::new(app.graphs.len() as i64);
                }
                _ => {}
            }
            i += 1;
        }

        app.graphs.push(builder.finalize()?);
        app.check()?;
        Ok(app)
    }

    /// Validate the whole configuration.
    ///
    /// Scalar consistency always runs; the materialized transpose
    /// cross-check is skipped under `-skip-graph-validation` (it is
    /// O(sets x width x degree)).
    pub fn check(&self) -> DagbenchResult<()> {
        if self.graphs.len() > 64 {
            return Err(DagbenchError::Config(format!(
                "at most 64 task graphs are supported, got {}",
                self.graphs.len()
            )));
        }

        for g in &self.graphs {
            if g.dependence == DependenceType::RandomSpread {
                return Err(DagbenchError::Config(
                    "graph type \"random_spread\" has no dependency generator; \
                     use random_nearest"
                        .to_string(),
                ));
            }
            if g.dependence.needs_period() && g.period == 0 {
                return Err(DagbenchError::Config(format!(
                    "graph type \"{}\" requires a non-zero period (specify with -period)",
                    g.dependence.name()
                )));
            }
            if !g.dependence.needs_period() && g.period != 0 {
                return Err(DagbenchError::Config(format!(
                    "graph type \"{}\" does not support a user-configurable period",
                    g.dependence.name()
                )));
            }
            if g.dependence == DependenceType::Spread {
                if g.radix < 1 {
                    return Err(DagbenchError::Config(
                        "graph type \"spread\" requires a radix >= 1".to_string(),
                    ));
                }
                // Larger periods would wrap later dependence sets onto
                // earlier peers.
                let bound = (g.max_width + g.radix - 1) / g.radix;
                if g.period > bound {
                    return Err(DagbenchError::Config(format!(
                        "graph type \"spread\" requires a period that is at most {bound}"
                    )));
                }
            }
            if g.dependence == DependenceType::Fft && g.max_width < 2 {
                return Err(DagbenchError::Config(
                    "graph type \"fft\" requires a width of at least 2".to_string(),
                ));
            }

            for t in 0..g.timesteps {
                let offset = g.offset_at_timestep(t);
                let width = g.width_at_timestep(t);
                assert!(offset >= 0 && width >= 0);
                assert!(offset + width <= g.max_width);

                let dset = g.dependence_set_at_timestep(t);
                assert!(dset >= 0 && dset < g.max_dependence_sets());
            }

            if self.enable_graph_validation {
                cross_check(g)?;
            }
        }
        Ok(())
    }

    /// Print the configuration; `-v` adds per-timestep dependency dumps
    /// and `-vv` the reverse views as well.
    pub fn display(&self) {
        println!("Running Task Benchmark");
        println!("  Configuration:");
        for (i, g) in self.graphs.iter().enumerate() {
            println!("    Task Graph {}:", i + 1);
            println!("      Time Steps: {}", g.timesteps);
            println!("      Max Width: {}", g.max_width);
            println!("      Dependence Type: {}", g.dependence.name());
            println!("      Radix: {}", g.radix);
            println!("      Period: {}", g.period);
            println!("      Fraction Connected: {:.6}", g.fraction_connected);
            println!("      Kernel:");
            println!("        Type: {}", g.kernel.kind.name());
            println!("        Iterations: {}", g.kernel.iterations);
            println!("        Samples: {}", g.kernel.samples);
            println!("        Imbalance: {:.6}", g.kernel.imbalance);
            println!("      Output Bytes: {}", g.output_bytes_per_task);
            println!("      Scratch Bytes: {}", g.scratch_bytes_per_task);

            if self.verbose > 0 {
                self.display_timesteps(g);
            }
        }
    }

    fn display_timesteps(&self, g: &TaskGraph) {
        for t in 0..g.timesteps {
            let offset = g.offset_at_timestep(t);
            let width = g.width_at_timestep(t);
            let last_offset = g.offset_at_timestep(t - 1);
            let last_width = g.width_at_timestep(t - 1);
            let dset = g.dependence_set_at_timestep(t);

            println!(
                "      Timestep {t} (offset {offset}, width {width}, last offset \
                 {last_offset}, last width {last_width}):"
            );
            let mut line = String::from("        Points:");
            for p in offset..offset + width {
                let _ = write!(line, " {p}");
            }
            println!("{line}");

            println!("        Dependencies:");
            for p in offset..offset + width {
                let mut line = format!("          Point {p}:");
                for (lo, hi) in g.dependencies(dset, p) {
                    for dp in lo..=hi {
                        if dp >= last_offset && dp < last_offset + last_width {
                            let _ = write!(line, " {dp}");
                        }
                    }
                }
                println!("{line}");
            }

            if self.verbose > 1 {
                println!("        Reverse Dependencies:");
                for p in last_offset..last_offset + last_width {
                    let mut line = format!("          Point {p}:");
                    for (lo, hi) in g.reverse_dependencies(dset, p) {
                        for dp in lo..=hi {
                            if dp >= offset && dp < offset + width {
                                let _ = write!(line, " {dp}");
                            }
                        }
                    }
                    println!("{line}");
                }
            }
        }
    }

    /// Configuration as pretty JSON (descriptor dumps for tooling).
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

/// Materialize every dependence set and verify no duplicate edges and
/// that the reverse view is the exact transpose of the forward view.
fn cross_check(g: &TaskGraph) -> DagbenchResult<()> {
    for dset in 0..g.max_dependence_sets() {
        let mut materialized: Vec<BTreeSet<i64>> = vec![BTreeSet::new(); g.max_width as usize];
        for point in 0..g.max_width {
            for (lo, hi) in g.dependencies(dset, point) {
                for dp in lo..=hi {
                    if !materialized[point as usize].insert(dp) {
                        return Err(DagbenchError::Config(format!(
                            "graph {}: duplicate dependency {dp} for point {point} \
                             in dependence set {dset}",
                            g.graph_index
                        )));
                    }
                }
            }
        }
        for point in 0..g.max_width {
            for (lo, hi) in g.reverse_dependencies(dset, point) {
                for rdp in lo..=hi {
                    if !materialized[rdp as usize].contains(&point) {
                        return Err(DagbenchError::Config(format!(
                            "graph {}: reverse dependency ({point} <- {rdp}) has no \
                             forward counterpart in dependence set {dset}",
                            g.graph_index
                        )));
                    }
                }
            }
        }
    }
    Ok(())
}

fn render_help() -> String {
    let mut help = String::new();
    let mut line = |text: &str| {
        help.push_str(text);
        help.push('\n');
    };

    line("dagbench: a task-graph benchmark");
    line("");
    line("General options:");
    line("  -h                 show this help message and exit");
    line("  -nodes [INT]       number of nodes for transfer estimates");
    line("  -v                 enable verbose output");
    line("  -vv                enable extra verbose output");
    line("");
    line("Options for configuring the task graph:");
    line("  -steps [INT]       height of task graph");
    line("  -width [INT]       width of task graph");
    line("  -type [DEP]        dependency pattern (see list below)");
    line("  -radix [INT]       radix (only for nearest, spread, and random)");
    line("  -period [INT]      period (only for spread and random)");
    line("  -fraction [FLOAT]  fraction of connected dependencies (only for random)");
    line("  -and               start configuring the next task graph");
    line("");
    line("Options for configuring kernels:");
    line("  -kernel [KERNEL]   kernel type (see list below)");
    line("  -iter [INT]        number of iterations");
    line("  -output [INT]      output bytes per task (multiple of 16)");
    line("  -scratch [INT]     scratch bytes per task (memory-bound kernels)");
    line("  -sample [INT]      number of scratch chunks (memory-bound kernels)");
    line("  -imbalance [FLOAT] amount of load imbalance");
    line("  -mem-fraction [FLOAT] fraction of memory iterations (compute_and_mem)");
    line("  -dist [DIST]       distribution type (see list below)");
    line("  -dist-max [INT]    maximum for the uniform distribution");
    line("  -dist-std [INT]    standard deviation for the normal distribution");
    line("  -dist-alpha [INT]  shape for the gamma distribution");
    line("  -dist-beta [FLOAT] scale for the gamma and cauchy distributions");
    line("");
    line("Options for configuring output sizes:");
    line("  -output-case [INT] distribution case, 0..3");
    line("  -output-mean [INT] normal mean (case 1)");
    line("  -output-std [INT]  normal standard deviation (case 1)");
    line("  -output-gamma-a [INT] gamma shape (case 3)");
    line("  -output-gamma-b [INT] gamma scale (case 3)");
    line("  -output-random     shorthand for -output-case 2");
    line("  -output-uniform    shorthand for -output-case 0");
    line("");
    line("Supported dependency patterns:");
    for d in DependenceType::ALL {
        line(&format!("  {}", d.name()));
    }
    line("");
    line("Supported kernel types:");
    for k in KernelType::ALL {
        line(&format!("  {}", k.name()));
    }
    line("");
    line("Supported distribution types:");
    for d in DistType::ALL {
        line(&format!("  {}", d.name()));
    }
    line("");
    line("Less frequently used options:");
    line("  -field [INT]       number of fields for buffer-rotating drivers");
    line("  -skip-graph-validation  skip the materialized graph cross-check");

    help
}
