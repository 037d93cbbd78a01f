use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use gracfl::{Config, ConfigOverrides, ExecutionMode, GraclError, Model, ProcessingStrategy, RunReport, TraversalDirection};

/// Computes CFL reachability over a labeled directed graph: derives
/// every new edge implied by a normalized context-free grammar until no
/// sweep adds one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLine {
    /// Path to the input graph file (required, unless set in --config).
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Path to the context-free grammar file (required, unless set in --config).
    #[arg(long)]
    grammar: Option<PathBuf>,

    /// Optional key=value (TOML) file supplying defaults that this flag
    /// set overrides.
    #[arg(long)]
    config: Option<PathBuf>,

    /// serial or parallel saturation.
    #[arg(long = "mode", value_enum)]
    execution_mode: Option<ExecutionMode>,

    /// fw, bw, or bi traversal direction.
    #[arg(long = "direct", value_enum)]
    traversal_direction: Option<TraversalDirection>,

    /// gram-driven or topo-driven rule-matching strategy.
    #[arg(long = "strategy", value_enum)]
    processing_strategy: Option<ProcessingStrategy>,

    /// Thread pool size in parallel mode (defaults to host concurrency).
    #[arg(long = "threads")]
    num_threads: Option<usize>,

    /// Solver model. Only `gracfl` is implemented; `base` is recognized
    /// but rejected as an unimplemented baseline.
    #[arg(long, value_enum)]
    model: Option<Model>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = CommandLine::parse();

    let overrides = ConfigOverrides {
        config_file: cli.config,
        graph_filepath: cli.graph,
        grammar_filepath: cli.grammar,
        execution_mode: cli.execution_mode,
        traversal_direction: cli.traversal_direction,
        processing_strategy: cli.processing_strategy,
        num_threads: cli.num_threads,
        model: cli.model,
    };

    match try_run(overrides) {
        Ok(report) => {
            println!("---------------------------------------");
            println!("Results");
            println!("---------------------------------------");
            println!("Initial Edges\t= {}", report.initial_edges);
            println!("New Edges\t= {}", report.new_edges);
            println!("Total Time\t= {:.3?}", report.elapsed);
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.chain().find_map(|cause| cause.downcast_ref::<GraclError>()) {
                Some(gracfl_err) => eprintln!("{}", gracfl_err.render()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn try_run(overrides: ConfigOverrides) -> anyhow::Result<RunReport> {
    let config = Config::resolve(overrides).context("resolving configuration")?;
    log::info!(
        "config: graph={} grammar={} mode={} direct={} strategy={} threads={}",
        config.graph_filepath.display(),
        config.grammar_filepath.display(),
        config.execution_mode,
        config.traversal_direction,
        config.processing_strategy,
        config.num_threads
    );

    let (report, _out) = gracfl::run(&config).context("running CFL reachability analysis")?;
    Ok(report)
}
